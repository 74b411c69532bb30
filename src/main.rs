//! Duet - CLI

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};

use duet::util::config::{load_config, DuetConfig};
use duet::util::logger::{self, LogLevel};
use duet::{disassemble, recover, run_with_config, NAME, VERSION};

/// Two-task register machine interpreter
#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./duet.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program (the default)
    Run(RunArgs),

    /// Print the decoded program
    Disasm {
        /// Program file, stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug, Default)]
struct RunArgs {
    /// Program file, stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Interpretation of snd/rcv
    #[arg(long, value_enum, default_value_t = Mode::Duet)]
    mode: Mode,

    /// Maximum pending messages per task queue
    #[arg(long, value_name = "N")]
    queue_capacity: Option<usize>,

    /// Abort after executing this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Print a JSON report instead of a bare number
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two tasks exchanging messages
    #[default]
    Duet,
    /// One task playing and recovering sounds
    Sound,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).context("Failed to load config")?;
    init_logging(&config, args.verbose);

    if args.verbose {
        eprintln!("duet version: {}", VERSION);
    }

    match args.command {
        Some(Commands::Run(run_args)) => execute(run_args, &mut config),
        None => execute(args.run, &mut config),
        Some(Commands::Disasm { file }) => {
            let source = read_source(file.as_deref())?;
            print!("{}", disassemble(&source)?);
            Ok(())
        }
        Some(Commands::Version) => {
            println!("{} {}", NAME, VERSION);
            Ok(())
        }
    }
}

fn init_logging(
    config: &DuetConfig,
    verbose: bool,
) {
    let level = if config.log.trace_execution {
        LogLevel::Trace
    } else if verbose {
        LogLevel::Debug
    } else {
        config.log.level
    };
    logger::init_with_level(level);
}

fn execute(
    args: RunArgs,
    config: &mut DuetConfig,
) -> Result<()> {
    if let Some(capacity) = args.queue_capacity {
        if capacity == 0 {
            bail!("--queue-capacity must be at least 1");
        }
        config.scheduler.queue_capacity = capacity;
    }
    if args.max_steps.is_some() {
        config.scheduler.max_steps = args.max_steps;
    }

    let source = read_source(args.file.as_deref())?;

    match args.mode {
        Mode::Duet => {
            let report = run_with_config(&source, &config.scheduler_config())?;
            if args.json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{}", report.answer());
            }
        }
        Mode::Sound => {
            let frequency = recover(&source, config.scheduler.max_steps)?;
            if args.json {
                println!("{}", json!({ "frequency": frequency }));
            } else {
                match frequency {
                    Some(freq) => println!("{}", freq),
                    None => bail!("Program halted without recovering a frequency"),
                }
            }
        }
    }
    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read program from stdin")?;
            Ok(source)
        }
    }
}
