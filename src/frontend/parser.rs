//! Instruction parser
//!
//! Turns the tokens of one line into a checked [`Instruction`].

use crate::frontend::errors::{LoadError, LoadResult};
use crate::util::span::{Position, Spanned};
use crate::vm::instructions::{Instruction, Operand};
use crate::vm::opcode::Opcode;
use crate::vm::registers::Register;

/// Parse one tokenized line. Returns `None` for a blank line.
pub fn parse_line(tokens: &[Spanned<&str>]) -> LoadResult<Option<Instruction>> {
    let (head, rest) = match tokens.split_first() {
        Some(split) => split,
        None => return Ok(None),
    };

    let opcode: Opcode = head.value.parse().map_err(|_| LoadError::UnknownOpcode {
        opcode: head.value.to_string(),
        position: head.position,
    })?;

    let arity = opcode.operand_count();
    if let Some(extra) = rest.get(arity) {
        return Err(LoadError::TrailingOperand {
            token: extra.value.to_string(),
            position: extra.position,
        });
    }

    let mut operands = Vec::with_capacity(arity);
    for i in 0..arity {
        let token = rest.get(i).ok_or_else(|| LoadError::MissingOperand {
            opcode,
            position: end_of(tokens),
        })?;
        operands.push(parse_operand(token)?);
    }

    if opcode.writes_register() && operands[0].as_register().is_none() {
        return Err(LoadError::ExpectedRegister {
            opcode,
            token: rest[0].value.to_string(),
            position: rest[0].position,
        });
    }

    Ok(Some(Instruction::new(
        opcode,
        operands[0],
        operands.get(1).copied(),
    )))
}

/// Parse an operand token.
///
/// Tokens starting with a letter name a register and must be a single
/// lowercase letter; everything else must be a signed 64-bit integer.
pub fn parse_operand(token: &Spanned<&str>) -> LoadResult<Operand> {
    let invalid = || LoadError::InvalidOperand {
        token: token.value.to_string(),
        position: token.position,
    };

    let mut chars = token.value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => {
            Register::from_char(c).map(Operand::Register).ok_or_else(invalid)
        }
        (Some(c), Some(_)) if c.is_alphabetic() => Err(invalid()),
        _ => token
            .value
            .parse::<i64>()
            .map(Operand::Immediate)
            .map_err(|_| invalid()),
    }
}

/// Position just past the last token of a line
fn end_of(tokens: &[Spanned<&str>]) -> Position {
    tokens
        .last()
        .map(|t| Position::new(t.position.line, t.position.column + t.value.chars().count()))
        .unwrap_or_else(Position::dummy)
}
