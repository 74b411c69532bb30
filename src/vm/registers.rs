//! Register names and the per-task register file

use std::fmt;

/// Number of registers: one per lowercase ASCII letter
pub const REGISTER_COUNT: usize = 26;

/// A register name, `a` through `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// The identity register, pre-seeded with the task id
    pub const IDENTITY: Register = Register(b'p' - b'a');

    /// Create a register from its letter
    ///
    /// Returns `None` for anything outside `a..=z`.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Register(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Index into the register file
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The register's letter
    pub fn name(&self) -> char {
        (b'a' + self.0) as char
    }
}

impl fmt::Display for Register {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Register file: a signed 64-bit slot per register, zero-initialised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i64; REGISTER_COUNT],
}

impl RegisterFile {
    /// Create a zeroed register file
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Read a register
    #[inline]
    pub fn read(
        &self,
        reg: Register,
    ) -> i64 {
        self.regs[reg.index()]
    }

    /// Write a register
    #[inline]
    pub fn write(
        &mut self,
        reg: Register,
        value: i64,
    ) {
        self.regs[reg.index()] = value;
    }

    /// Mutable access to a register slot
    #[inline]
    pub fn slot_mut(
        &mut self,
        reg: Register,
    ) -> &mut i64 {
        &mut self.regs[reg.index()]
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
