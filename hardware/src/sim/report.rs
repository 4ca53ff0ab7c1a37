//! Result tables.
//!
//! One [`Record`] is kept per applied vector, pairing the observed output
//! with the reference output. Tables can be written as CSV (one row per
//! record, with a header) or as a JSON document that also carries the run
//! summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::common::Result;
use crate::core::signals::AluOp;
use crate::core::units::alu::{AluInputs, AluOutput};
use crate::stats::StatsSummary;

/// CSV header, in column order.
pub const CSV_HEADER: &str = "Cycle,A,B,Sel,Op,Out,Carry,Zero,Negative,Overflow,\
Exp_Out,Exp_Carry,Exp_Zero,Exp_Negative,Exp_Overflow,Pass";

/// Observed and expected output for one input triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Clock cycle on which the output was sampled.
    pub cycle: u64,
    /// Operand A.
    pub a: u8,
    /// Operand B.
    pub b: u8,
    /// Selector code.
    pub sel: u8,
    /// Operation mnemonic.
    pub op: AluOp,
    /// Output read from the unit.
    pub observed: AluOutput,
    /// Output of the reference evaluation.
    pub expected: AluOutput,
}

impl Record {
    /// Builds a record for one applied triple.
    pub fn new(cycle: u64, inputs: AluInputs, observed: AluOutput, expected: AluOutput) -> Self {
        Self {
            cycle,
            a: inputs.a.get(),
            b: inputs.b.get(),
            sel: inputs.op.selector().get(),
            op: inputs.op,
            observed,
            expected,
        }
    }

    /// `true` if result and every flag match.
    pub fn passed(&self) -> bool {
        self.observed == self.expected
    }

    fn write_csv_row<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let (o, e) = (self.observed, self.expected);
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.cycle,
            self.a,
            self.b,
            self.sel,
            self.op,
            o.result,
            o.flags.carry as u8,
            o.flags.zero as u8,
            o.flags.negative as u8,
            o.flags.overflow as u8,
            e.result,
            e.flags.carry as u8,
            e.flags.zero as u8,
            e.flags.negative as u8,
            e.flags.overflow as u8,
            self.passed() as u8,
        )
    }
}

/// JSON report layout.
#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a StatsSummary,
    records: &'a [Record],
}

/// Ordered collection of records from one run.
#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    records: Vec<Record>,
}

impl ResultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `n` records.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            records: Vec::with_capacity(n),
        }
    }

    /// Appends a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// All records in application order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records whose observed output differs from the reference.
    pub fn mismatches(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| !r.passed())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if no vector has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the table as CSV.
    pub fn write_csv<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", CSV_HEADER)?;
        for r in &self.records {
            r.write_csv_row(&mut w)?;
        }
        w.flush()?;
        Ok(())
    }

    /// Writes the table and `summary` as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut w: W, summary: &StatsSummary) -> Result<()> {
        let report = JsonReport {
            summary,
            records: &self.records,
        };
        serde_json::to_writer_pretty(&mut w, &report)?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }

    /// Creates `path` and writes the CSV table to it.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_csv(BufWriter::new(File::create(path)?))
    }

    /// Creates `path` and writes the JSON report to it.
    pub fn save_json(&self, path: impl AsRef<Path>, summary: &StatsSummary) -> Result<()> {
        self.write_json(BufWriter::new(File::create(path)?), summary)
    }
}
