//! 4-bit ALU CLI.
//!
//! The main executable for the ALU model. It handles command-line argument
//! parsing and dispatches to one of three commands.
//!
//! # Usage
//!
//! 1. **eval**: Evaluates a single operation and prints result and flags.
//! 2. **table**: Prints every operation for one operand pair.
//! 3. **sweep**: Runs the testbench over a vector set and prints statistics.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use alu4::common::{Nibble, Result};
use alu4::config::Config;
use alu4::core::{Alu, AluOp, AluOutput, ResetPolarity};
use alu4::sim::{DutMode, Testbench, VectorSet};

/// Command-line arguments for the ALU model.
#[derive(Parser, Debug)]
#[command(author, version, about = "4-bit ALU model and testbench")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one operation.
    Eval {
        /// Operand A (0-15).
        a: u8,
        /// Operand B (0-15).
        b: u8,
        /// Operation mnemonic (e.g. ADD, xnor) or selector number (e.g. 3, 0b1010).
        op: AluOp,
    },

    /// Print every operation for one operand pair.
    Table {
        #[arg(short, long, default_value_t = 0)]
        a: u8,
        #[arg(short, long, default_value_t = 0)]
        b: u8,
    },

    /// Run the testbench.
    Sweep {
        /// TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum)]
        mode: Option<DutMode>,

        #[arg(long, value_enum)]
        vectors: Option<VectorSet>,

        #[arg(long, value_enum)]
        reset_polarity: Option<ResetPolarity>,

        /// Write the result table as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the result table and summary as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Log every applied vector.
        #[arg(long)]
        trace: bool,
    },
}

fn print_output(a: Nibble, b: Nibble, op: AluOp, out: AluOutput) {
    println!(
        "{:<4} A={:b}({:>2}) B={:b}({:>2}) Sel={:b} => Out={:b}({:>2}) C={} Z={} N={} V={}",
        op,
        a,
        a,
        b,
        b,
        op.selector(),
        out.result,
        out.result,
        out.flags.carry as u8,
        out.flags.zero as u8,
        out.flags.negative as u8,
        out.flags.overflow as u8,
    );
}

fn cmd_eval(a: u8, b: u8, op: AluOp) -> Result<bool> {
    let (a, b) = (Nibble::new(a)?, Nibble::new(b)?);
    print_output(a, b, op, Alu::evaluate(a, b, op));
    Ok(true)
}

fn cmd_table(a: u8, b: u8) -> Result<bool> {
    let (a, b) = (Nibble::new(a)?, Nibble::new(b)?);
    for op in AluOp::ALL {
        print_output(a, b, op, Alu::evaluate(a, b, op));
    }
    Ok(true)
}

struct SweepArgs {
    config: Option<PathBuf>,
    mode: Option<DutMode>,
    vectors: Option<VectorSet>,
    reset_polarity: Option<ResetPolarity>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
    trace: bool,
}

fn cmd_sweep(args: SweepArgs) -> Result<bool> {
    let mut config = match args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(mode) = args.mode {
        config.bench.mode = mode;
    }
    if let Some(vectors) = args.vectors {
        config.bench.vectors = vectors;
    }
    if let Some(polarity) = args.reset_polarity {
        config.clock.reset_polarity = polarity;
    }
    if args.csv.is_some() {
        config.output.csv = args.csv;
    }
    if args.json.is_some() {
        config.output.json = args.json;
    }
    config.general.trace_vectors |= args.trace;

    let mut tb = Testbench::from_config(&config);

    println!("Testbench Configuration");
    println!("-----------------------");
    println!("  Mode:               {:?}", config.bench.mode);
    println!("  Vectors:            {:?}", config.bench.vectors);
    println!("  Clock Period:       {} ns", tb.clock().period_ns());
    println!("  Reset Polarity:     {:?}", config.clock.reset_polarity);
    println!("  Reset Cycles:       {}", config.clock.reset_cycles);
    println!("  Enable:             {}", config.bench.enable);
    println!("-----------------------");

    let passed = tb.run(config.bench.vectors);

    if let Some(path) = &config.output.csv {
        tb.table.save_csv(path)?;
        println!("[*] Wrote {} rows to {}", tb.table.len(), path.display());
    }
    if let Some(path) = &config.output.json {
        tb.table.save_json(path, &tb.stats.summary())?;
        println!("[*] Wrote report to {}", path.display());
    }

    tb.stats.print();
    Ok(passed)
}

/// Main entry point.
///
/// Installs the log subscriber (filtered by `RUST_LOG`, default
/// `alu4=info`), runs the selected command and exits with status 1 on error
/// or on any testbench mismatch.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("alu4=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Eval { a, b, op } => cmd_eval(a, b, op),
        Commands::Table { a, b } => cmd_table(a, b),
        Commands::Sweep {
            config,
            mode,
            vectors,
            reset_polarity,
            csv,
            json,
            trace,
        } => cmd_sweep(SweepArgs {
            config,
            mode,
            vectors,
            reset_polarity,
            csv,
            json,
            trace,
        }),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("\n[!] Testbench reported failures");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
