//! Instruction set opcodes
//!
//! The instruction set is closed: seven opcodes, each with a fixed arity and
//! a three-letter mnemonic used in program text.

use std::fmt;
use std::str::FromStr;

/// Opcode of a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Send a value to the partner task
    /// Operands: value
    Send,

    /// Register assignment: reg = value
    /// Operands: reg, value
    Set,

    /// Addition: reg += value
    /// Operands: reg, value
    Add,

    /// Multiplication: reg *= value
    /// Operands: reg, value
    Multiply,

    /// Remainder: reg %= value
    /// Operands: reg, value
    Modulo,

    /// Receive a value from the own queue into a register
    /// Operands: reg
    Receive,

    /// Relative jump when the condition is positive
    /// Operands: cond, offset
    JumpIfPositive,
}

impl Opcode {
    /// All opcodes, used for mnemonic lookup
    pub const ALL: [Opcode; 7] = [
        Opcode::Send,
        Opcode::Set,
        Opcode::Add,
        Opcode::Multiply,
        Opcode::Modulo,
        Opcode::Receive,
        Opcode::JumpIfPositive,
    ];

    /// Mnemonic used in program text
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Send => "snd",
            Opcode::Set => "set",
            Opcode::Add => "add",
            Opcode::Multiply => "mul",
            Opcode::Modulo => "mod",
            Opcode::Receive => "rcv",
            Opcode::JumpIfPositive => "jgz",
        }
    }

    /// Number of operands the opcode takes
    pub fn operand_count(&self) -> usize {
        match self {
            Opcode::Send | Opcode::Receive => 1,
            Opcode::Set
            | Opcode::Add
            | Opcode::Multiply
            | Opcode::Modulo
            | Opcode::JumpIfPositive => 2,
        }
    }

    /// Whether the first operand must name a register (it is written to)
    pub fn writes_register(&self) -> bool {
        matches!(
            self,
            Opcode::Set | Opcode::Add | Opcode::Multiply | Opcode::Modulo | Opcode::Receive
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .iter()
            .find(|op| op.mnemonic() == s)
            .copied()
            .ok_or(())
    }
}
