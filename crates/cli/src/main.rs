//! MIPS-style emulator CLI.
//!
//! This binary loads a program text file into a fresh processor and runs it
//! to completion. It performs:
//! 1. **Setup:** Default or JSON-file configuration, optional `--trace`.
//! 2. **Run:** After every executed instruction the register file is printed,
//!    either as `{R0: 0, ...}` or as one JSON object per line with `--json`.
//! 3. **Failure:** On a fatal error the error and machine state are dumped and
//!    the process exits with code 1.

use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::Config;
use mipsim_core::Processor;
use mipsim_core::common::RegisterSnapshot;
use mipsim_core::core::cpu::observer::ExecutionObserver;
use mipsim_core::core::units::cache::CacheControl;
use mipsim_core::isa::Instruction;
use mipsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS-style processor emulator",
    long_about = "Run a program of comma-separated instruction records on a small MIPS-style processor.\n\nOne record per line; `0` is the halt sentinel, blank lines and `#` comments are skipped.\n\nExamples:\n  sim run -f programs/sum.txt\n  sim run -f programs/sum.txt -c sim.json --trace --stats"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program file and run it until it halts.
    Run {
        /// Program text file to execute.
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Print register snapshots as JSON lines.
        #[arg(long)]
        json: bool,

        /// Print statistics after the run.
        #[arg(long)]
        stats: bool,
    },
}

/// Prints register snapshots and cache notifications to stdout.
#[derive(Debug)]
struct ConsoleObserver {
    json: bool,
}

impl ExecutionObserver for ConsoleObserver {
    fn on_retire(&mut self, _pc: i64, _instruction: &Instruction, regs: &RegisterSnapshot) {
        if self.json {
            match serde_json::to_string(regs) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("[!] failed to encode registers: {e}"),
            }
        } else {
            println!("{regs}");
        }
    }

    fn on_cache_control(&mut self, control: CacheControl) {
        println!("{}", control.notification());
    }

    fn on_halt(&mut self, pc: i64) {
        println!("[*] Halted at PC {pc}");
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            json,
            stats,
        } => cmd_run(&file, config.as_deref(), trace, json, stats),
    }
}

/// Installs the log subscriber; `RUST_LOG` overrides the default filter.
fn init_tracing(trace: bool) {
    let default = if trace { "mipsim_core=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the program in `file`, exiting the process with code 1 on any error.
fn cmd_run(file: &str, config_path: Option<&str>, trace: bool, json: bool, stats: bool) {
    init_tracing(trace);

    let mut config = match config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error reading config {path}: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;

    let program = loader::load_program_file(file).unwrap_or_else(|e| {
        eprintln!("Error reading program {file}: {e}");
        process::exit(1);
    });

    info!(
        file,
        records = program.len(),
        memory_words = config.memory.size_words,
        cache = config.cache.enabled,
        "starting run"
    );

    let mut cpu = Processor::new(&config);
    let mut observer = ConsoleObserver { json };

    let result = cpu
        .load_program(program)
        .and_then(|()| cpu.run_with(&mut observer));

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        cpu.dump_state();
        cpu.stats.print();
        process::exit(1);
    }

    if stats {
        cpu.stats.print();
    }
}
