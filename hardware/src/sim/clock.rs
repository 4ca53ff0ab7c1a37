//! Clock generator.

/// Free-running clock that counts rising edges and simulated time.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    period_ns: u64,
    cycles: u64,
}

impl Clock {
    /// Creates a clock with the given period.
    ///
    /// A period of zero is raised to 1 ns.
    pub fn new(period_ns: u64) -> Self {
        Self {
            period_ns: period_ns.max(1),
            cycles: 0,
        }
    }

    /// Advances to the next rising edge and returns its cycle number.
    pub fn tick(&mut self) -> u64 {
        self.cycles += 1;
        self.cycles
    }

    /// Rising edges generated so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Simulated time of the most recent edge.
    pub fn time_ns(&self) -> u64 {
        self.cycles * self.period_ns
    }

    /// Clock period.
    pub fn period_ns(&self) -> u64 {
        self.period_ns
    }
}
