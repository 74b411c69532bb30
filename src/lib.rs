//! Duet
//!
//! An interpreter for a seven-opcode register machine. Two tasks run the same
//! program, talk through bounded message queues and are scheduled
//! cooperatively until both halt or deadlock.
//!
//! # Example
//!
//! ```text
//! snd 1
//! snd 2
//! snd p
//! rcv a
//! rcv b
//! rcv c
//! rcv d
//! ```
//!
//! Run as a duet, task 1 sends three values before both tasks deadlock.

#![doc(html_root_url = "https://docs.rs/duet")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod runtime;
pub mod vm;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use runtime::{RunReport, SchedulerConfig, Termination};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "duet";

/// Run a program as a duet and return task 1's sent count
///
/// # Example
///
/// ```
/// use duet::{run, Result};
///
/// fn main() -> Result<()> {
///     let sent = run("snd 1\nsnd 2\nsnd p\nrcv a\nrcv b\nrcv c\nrcv d\n")?;
///     assert_eq!(sent, 3);
///     Ok(())
/// }
/// ```
pub fn run(source: &str) -> Result<u64> {
    Ok(run_with_config(source, &SchedulerConfig::default())?.answer())
}

/// Run a program as a duet with custom scheduler settings
pub fn run_with_config(
    source: &str,
    config: &SchedulerConfig,
) -> Result<RunReport> {
    let program = frontend::load(source).context("Failed to load program")?;
    debug!("starting duet over {} instructions", program.len());

    let mut scheduler = runtime::Scheduler::with_config(&program, config.clone());
    let mut tasks = scheduler.spawn_tasks();
    let report = scheduler
        .run_until_quiescent(&mut tasks)
        .context("Execution aborted")?;
    Ok(report)
}

/// Run a program file as a duet and return task 1's sent count
pub fn run_file(path: &Path) -> Result<u64> {
    debug!("running file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    run(&source)
}

/// Run a program in single-task sound mode and return the recovered frequency
pub fn recover(
    source: &str,
    max_steps: Option<u64>,
) -> Result<Option<i64>> {
    let program = frontend::load(source).context("Failed to load program")?;
    let frequency =
        vm::recover_frequency(&program, max_steps).context("Execution aborted")?;
    Ok(frequency)
}

/// Decode a program and render it back in canonical form
pub fn disassemble(source: &str) -> Result<String> {
    let program = frontend::load(source).context("Failed to load program")?;
    Ok(program.to_string())
}
