//! Decoded instructions and the program store

use std::fmt;
use std::ops::Deref;

use crate::vm::opcode::Opcode;
use crate::vm::registers::{Register, RegisterFile};

/// Instruction operand: a register or an immediate literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Immediate(i64),
}

impl Operand {
    /// Resolve the operand against a register file. Never fails.
    #[inline]
    pub fn resolve(
        &self,
        regs: &RegisterFile,
    ) -> i64 {
        match *self {
            Operand::Register(reg) => regs.read(reg),
            Operand::Immediate(value) => value,
        }
    }

    /// The register named by this operand, if any
    pub fn as_register(&self) -> Option<Register> {
        match *self {
            Operand::Register(reg) => Some(reg),
            Operand::Immediate(_) => None,
        }
    }
}

impl From<Register> for Operand {
    fn from(reg: Register) -> Self {
        Operand::Register(reg)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Immediate(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Immediate(value) => write!(f, "{}", value),
        }
    }
}

/// A single decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand1: Operand,
    pub operand2: Option<Operand>,
}

impl Instruction {
    /// Create an instruction without checking its shape
    ///
    /// The loader only produces well-formed instructions; hand-built ones are
    /// checked by [`Instruction::check`] when they are first executed.
    pub fn new(
        opcode: Opcode,
        operand1: Operand,
        operand2: Option<Operand>,
    ) -> Self {
        Self {
            opcode,
            operand1,
            operand2,
        }
    }

    /// Unary instruction
    pub fn unary(
        opcode: Opcode,
        operand1: impl Into<Operand>,
    ) -> Self {
        Self::new(opcode, operand1.into(), None)
    }

    /// Binary instruction
    pub fn binary(
        opcode: Opcode,
        operand1: impl Into<Operand>,
        operand2: impl Into<Operand>,
    ) -> Self {
        Self::new(opcode, operand1.into(), Some(operand2.into()))
    }

    /// Check arity and operand kinds, describing the first problem found
    pub fn check(&self) -> Result<(), String> {
        let expected = self.opcode.operand_count();
        let actual = 1 + self.operand2.is_some() as usize;
        if expected != actual {
            return Err(format!(
                "{} takes {} operand(s), found {}",
                self.opcode, expected, actual
            ));
        }
        if self.opcode.writes_register() && self.operand1.as_register().is_none() {
            return Err(format!(
                "{} must target a register, found {}",
                self.opcode, self.operand1
            ));
        }
        Ok(())
    }

    /// Destination register of a register-writing instruction
    pub fn target(&self) -> Option<Register> {
        self.operand1.as_register()
    }
}

impl fmt::Display for Instruction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand1)?;
        if let Some(operand2) = &self.operand2 {
            write!(f, " {}", operand2)?;
        }
        Ok(())
    }
}

/// Program store: a dense, 0-indexed, immutable instruction sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from decoded instructions
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

/// Fetch the instruction at a signed pointer in a raw instruction slice
#[inline]
pub fn fetch(
    program: &[Instruction],
    ip: i64,
) -> Option<&Instruction> {
    usize::try_from(ip).ok().and_then(|idx| program.get(idx))
}

impl Deref for Program {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.instructions
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

/// Numbered listing, one `[idx] instr` line per instruction
impl fmt::Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (idx, instr) in self.instructions.iter().enumerate() {
            writeln!(f, "[{:3}] {}", idx, instr)?;
        }
        Ok(())
    }
}
