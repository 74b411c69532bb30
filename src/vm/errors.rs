//! VM errors

use thiserror::Error;

use crate::runtime::scheduler::TaskId;

/// VM result
pub type VMResult<T> = Result<T, VMError>;

/// VM errors
///
/// Every variant is fatal: the run is aborted and the error reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VMError {
    #[error("Division by zero in mod at instruction {ip}")]
    DivisionByZero { ip: i64 },

    #[error("Message queue of {task} overflowed its capacity of {capacity}")]
    QueueOverflow { task: TaskId, capacity: usize },

    #[error("Malformed instruction at {ip}: {reason}")]
    MalformedInstruction { ip: i64, reason: String },

    #[error("Step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}
