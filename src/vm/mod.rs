//! Virtual machine: instruction set and executor
//!
//! This module contains the fixed instruction set and the single-instruction
//! interpreter driven by the scheduler.

pub use errors::{VMError, VMResult};
pub use executor::{execute, ExecResult};
pub use instructions::{Instruction, Operand, Program};
pub use opcode::Opcode;
pub use registers::{Register, RegisterFile, REGISTER_COUNT};
pub use sound::recover_frequency;

pub mod errors;
pub mod executor;
pub mod instructions;
pub mod opcode;
pub mod registers;
pub mod sound;

#[cfg(test)]
mod tests;
