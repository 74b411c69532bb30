//! Instruction executor
//!
//! Interprets one instruction against one task. A `snd` writes into the
//! partner's queue, which is passed in separately so both tasks never need to
//! be borrowed mutably through the same path.

use crate::runtime::scheduler::{MessageQueue, Task};
use crate::vm::errors::{VMError, VMResult};
use crate::vm::instructions::{fetch, Instruction};
use crate::vm::opcode::Opcode;
use crate::vm::registers::Register;

/// Outcome of executing a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecResult {
    /// The pointer is still inside the program
    Continue,
    /// `rcv` found the own queue empty; the pointer did not move
    Blocked,
    /// The pointer is outside the program
    Halted,
}

/// Execute the instruction at `task.ip`.
///
/// A task whose pointer is already outside the program reports `Halted`
/// without doing anything.
pub fn execute(
    task: &mut Task,
    other_queue: &mut MessageQueue,
    program: &[Instruction],
) -> VMResult<ExecResult> {
    let ip = task.ip;
    let instr = match fetch(program, ip) {
        Some(instr) => instr,
        None => return Ok(ExecResult::Halted),
    };
    instr
        .check()
        .map_err(|reason| VMError::MalformedInstruction { ip, reason })?;

    let value1 = instr.operand1.resolve(&task.registers);
    let value2 = instr
        .operand2
        .map(|op| op.resolve(&task.registers))
        .unwrap_or(0);

    let mut next = ip.wrapping_add(1);
    match instr.opcode {
        Opcode::Send => {
            other_queue.push(value1)?;
            task.sent += 1;
        }
        Opcode::Set | Opcode::Add | Opcode::Multiply | Opcode::Modulo => {
            let reg = target(instr, ip)?;
            apply_arithmetic(instr.opcode, task.registers.slot_mut(reg), value2, ip)?;
        }
        Opcode::Receive => {
            let reg = target(instr, ip)?;
            match task.queue.pop() {
                Some(value) => task.registers.write(reg, value),
                None => return Ok(ExecResult::Blocked),
            }
        }
        Opcode::JumpIfPositive => {
            next = jump_target(ip, value1, value2);
        }
    }

    task.ip = next;
    if fetch(program, next).is_some() {
        Ok(ExecResult::Continue)
    } else {
        Ok(ExecResult::Halted)
    }
}

/// Destination register of `instr`
pub(crate) fn target(
    instr: &Instruction,
    ip: i64,
) -> VMResult<Register> {
    instr.target().ok_or_else(|| VMError::MalformedInstruction {
        ip,
        reason: format!("{} must target a register", instr.opcode),
    })
}

/// Apply `set`/`add`/`mul`/`mod` to a register slot.
///
/// Arithmetic wraps on overflow.
pub(crate) fn apply_arithmetic(
    opcode: Opcode,
    slot: &mut i64,
    value: i64,
    ip: i64,
) -> VMResult<()> {
    *slot = match opcode {
        Opcode::Set => value,
        Opcode::Add => slot.wrapping_add(value),
        Opcode::Multiply => slot.wrapping_mul(value),
        Opcode::Modulo => {
            if value == 0 {
                return Err(VMError::DivisionByZero { ip });
            }
            slot.wrapping_rem(value)
        }
        other => {
            return Err(VMError::MalformedInstruction {
                ip,
                reason: format!("{} is not an arithmetic instruction", other),
            })
        }
    };
    Ok(())
}

/// Next pointer of a `jgz`
#[inline]
pub(crate) fn jump_target(
    ip: i64,
    condition: i64,
    offset: i64,
) -> i64 {
    if condition > 0 {
        ip.wrapping_add(offset)
    } else {
        ip.wrapping_add(1)
    }
}
