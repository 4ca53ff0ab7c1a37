//! Output latch for the registered ALU.
//!
//! The latch holds one packed [`AluOutput`] in a single atomic byte. Every
//! update replaces the whole byte, so a reader on another thread observes
//! either the value before an edge or the value after it, never a mix of
//! the two.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::core::units::alu::AluOutput;

/// Single-stage output register.
#[derive(Debug)]
pub struct OutputLatch {
    bits: AtomicU8,
}

impl OutputLatch {
    /// Creates a latch holding `initial`.
    pub fn new(initial: AluOutput) -> Self {
        Self {
            bits: AtomicU8::new(initial.to_bits()),
        }
    }

    /// Replaces the latched value.
    pub fn store(&self, out: AluOutput) {
        self.bits.store(out.to_bits(), Ordering::Release);
    }

    /// Returns the latched value.
    pub fn load(&self) -> AluOutput {
        AluOutput::from_bits(self.bits.load(Ordering::Acquire))
    }
}

impl Default for OutputLatch {
    /// Creates a latch holding the reset output.
    fn default() -> Self {
        Self::new(AluOutput::RESET)
    }
}

/// Read-only handle to a registered ALU's output latch.
///
/// Cheap to clone and safe to move to other threads.
#[derive(Clone, Debug)]
pub struct LatchObserver {
    latch: Arc<OutputLatch>,
}

impl LatchObserver {
    pub(crate) fn new(latch: Arc<OutputLatch>) -> Self {
        Self { latch }
    }

    /// Returns the currently observable output.
    pub fn read(&self) -> AluOutput {
        self.latch.load()
    }
}
