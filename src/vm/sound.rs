//! Single-task sound interpretation
//!
//! The same instruction set read as a sound program: `snd X` plays frequency
//! X, and `rcv X` recovers the last played frequency when X is non-zero.

use tracing::debug;

use crate::vm::errors::{VMError, VMResult};
use crate::vm::executor::{apply_arithmetic, jump_target, target};
use crate::vm::instructions::{fetch, Instruction};
use crate::vm::opcode::Opcode;
use crate::vm::registers::RegisterFile;

/// Run `program` until the first recovery or until it halts.
///
/// Returns the recovered frequency, or `None` if the pointer left the program
/// first. The last played frequency starts at 0, so a `rcv` with a non-zero
/// operand before any `snd` recovers 0.
pub fn recover_frequency(
    program: &[Instruction],
    max_steps: Option<u64>,
) -> VMResult<Option<i64>> {
    let mut regs = RegisterFile::new();
    let mut last_played: i64 = 0;
    let mut ip: i64 = 0;
    let mut steps: u64 = 0;

    while let Some(instr) = fetch(program, ip) {
        if let Some(limit) = max_steps {
            if steps >= limit {
                return Err(VMError::StepLimitExceeded { limit });
            }
        }
        steps += 1;

        instr
            .check()
            .map_err(|reason| VMError::MalformedInstruction { ip, reason })?;
        let value1 = instr.operand1.resolve(&regs);
        let value2 = instr.operand2.map(|op| op.resolve(&regs)).unwrap_or(0);

        let mut next = ip.wrapping_add(1);
        match instr.opcode {
            Opcode::Send => last_played = value1,
            Opcode::Set | Opcode::Add | Opcode::Multiply | Opcode::Modulo => {
                let reg = target(instr, ip)?;
                apply_arithmetic(instr.opcode, regs.slot_mut(reg), value2, ip)?;
            }
            Opcode::Receive => {
                if value1 != 0 {
                    debug!("recovered frequency {} after {} steps", last_played, steps);
                    return Ok(Some(last_played));
                }
            }
            Opcode::JumpIfPositive => next = jump_target(ip, value1, value2),
        }
        ip = next;
    }

    debug!("sound program halted after {} steps without recovery", steps);
    Ok(None)
}
