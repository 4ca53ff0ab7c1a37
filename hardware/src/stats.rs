//! Testbench statistics collection and reporting.
//!
//! Tracks how many vectors were applied and checked, how they split across
//! operations and flags, how many mismatched the reference, and how long the
//! run took on the host.

use std::time::Instant;

use serde::Serialize;

use crate::core::signals::AluOp;
use crate::core::units::alu::AluOutput;

/// Number of distinct operations.
const NUM_OPS: usize = AluOp::ALL.len();

/// Testbench statistics structure.
pub struct SimStats {
    start_time: Instant,
    pub cycles: u64,
    pub reset_cycles: u64,

    pub checks: u64,
    pub passes: u64,
    pub mismatches: u64,
    pub reset_violations: u64,

    pub op_checks: [u64; NUM_OPS],
    pub op_mismatches: [u64; NUM_OPS],

    pub flag_carry: u64,
    pub flag_zero: u64,
    pub flag_negative: u64,
    pub flag_overflow: u64,
}

/// Serializable snapshot of [`SimStats`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsSummary {
    pub host_seconds: f64,
    pub cycles: u64,
    pub reset_cycles: u64,
    pub checks: u64,
    pub passes: u64,
    pub mismatches: u64,
    pub reset_violations: u64,
    pub flag_carry: u64,
    pub flag_zero: u64,
    pub flag_negative: u64,
    pub flag_overflow: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            reset_cycles: 0,
            checks: 0,
            passes: 0,
            mismatches: 0,
            reset_violations: 0,
            op_checks: [0; NUM_OPS],
            op_mismatches: [0; NUM_OPS],
            flag_carry: 0,
            flag_zero: 0,
            flag_negative: 0,
            flag_overflow: 0,
        }
    }
}

impl SimStats {
    /// Records one checked vector.
    ///
    /// Flag counters follow the observed output.
    pub fn record(&mut self, op: AluOp, observed: AluOutput, passed: bool) {
        let idx = op.selector().get() as usize;
        self.checks += 1;
        self.op_checks[idx] += 1;
        if passed {
            self.passes += 1;
        } else {
            self.mismatches += 1;
            self.op_mismatches[idx] += 1;
        }

        let f = observed.flags;
        self.flag_carry += f.carry as u64;
        self.flag_zero += f.zero as u64;
        self.flag_negative += f.negative as u64;
        self.flag_overflow += f.overflow as u64;
    }

    /// `true` if every check passed and reset behaved.
    pub fn all_passed(&self) -> bool {
        self.mismatches == 0 && self.reset_violations == 0
    }

    /// Returns a serializable snapshot.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            host_seconds: self.start_time.elapsed().as_secs_f64(),
            cycles: self.cycles,
            reset_cycles: self.reset_cycles,
            checks: self.checks,
            passes: self.passes,
            mismatches: self.mismatches,
            reset_violations: self.reset_violations,
            flag_carry: self.flag_carry,
            flag_zero: self.flag_zero,
            flag_negative: self.flag_negative,
            flag_overflow: self.flag_overflow,
        }
    }

    /// Prints a formatted summary of all statistics.
    ///
    /// Displays check totals, the per-operation breakdown and how often each
    /// flag was raised.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let checks = if self.checks == 0 { 1 } else { self.checks };
        let pct = |n: u64| (n as f64 / checks as f64) * 100.0;

        println!("\n==========================================================");
        println!("4-BIT ALU TESTBENCH STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("reset_cycles             {}", self.reset_cycles);
        println!("checks                   {}", self.checks);
        println!(
            "passes                   {} ({:.2}%)",
            self.passes,
            pct(self.passes)
        );
        println!("mismatches               {}", self.mismatches);
        println!("reset_violations         {}", self.reset_violations);
        println!("----------------------------------------------------------");
        println!("OPERATION MIX");
        for op in AluOp::ALL {
            let idx = op.selector().get() as usize;
            println!(
                "  op.{:<6} {:04b}       {:<8} mismatches: {}",
                op.mnemonic().to_lowercase(),
                idx,
                self.op_checks[idx],
                self.op_mismatches[idx]
            );
        }
        println!("----------------------------------------------------------");
        println!("FLAGS RAISED");
        println!(
            "  flag.carry             {} ({:.2}%)",
            self.flag_carry,
            pct(self.flag_carry)
        );
        println!(
            "  flag.zero              {} ({:.2}%)",
            self.flag_zero,
            pct(self.flag_zero)
        );
        println!(
            "  flag.negative          {} ({:.2}%)",
            self.flag_negative,
            pct(self.flag_negative)
        );
        println!(
            "  flag.overflow          {} ({:.2}%)",
            self.flag_overflow,
            pct(self.flag_overflow)
        );
        println!("==========================================================");
    }
}
