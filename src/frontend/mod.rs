//! Program loader
//!
//! Reads line-oriented program text, one instruction per line:
//! an opcode followed by one or two operands, separated by spaces or tabs.
//! Blank lines are skipped.

pub mod errors;
pub mod lexer;
pub mod parser;

pub use errors::{LoadError, LoadResult};

use tracing::debug;

use crate::vm::instructions::Program;

/// Load a program from source text
pub fn load(source: &str) -> LoadResult<Program> {
    let mut instructions = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let tokens = lexer::tokenize_line(line, idx + 1);
        if let Some(instr) = parser::parse_line(&tokens)? {
            instructions.push(instr);
        }
    }

    debug!("loaded {} instructions", instructions.len());
    Ok(Program::new(instructions))
}

#[cfg(test)]
mod tests;
