//! Load errors
//!
//! Every variant is a malformed instruction: the instruction set is closed
//! and any deviation is rejected before execution starts.

use thiserror::Error;

use crate::util::span::Position;
use crate::vm::opcode::Opcode;

/// Load result
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while loading program text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("{position}: unknown opcode `{opcode}`")]
    UnknownOpcode { opcode: String, position: Position },

    #[error("{position}: `{opcode}` is missing an operand")]
    MissingOperand { opcode: Opcode, position: Position },

    #[error("{position}: `{opcode}` expects a register, found `{token}`")]
    ExpectedRegister {
        opcode: Opcode,
        token: String,
        position: Position,
    },

    #[error("{position}: invalid operand `{token}`")]
    InvalidOperand { token: String, position: Position },

    #[error("{position}: unexpected operand `{token}`")]
    TrailingOperand { token: String, position: Position },
}

impl LoadError {
    /// Where the error was found
    pub fn position(&self) -> Position {
        match self {
            LoadError::UnknownOpcode { position, .. }
            | LoadError::MissingOperand { position, .. }
            | LoadError::ExpectedRegister { position, .. }
            | LoadError::InvalidOperand { position, .. }
            | LoadError::TrailingOperand { position, .. } => *position,
        }
    }
}
