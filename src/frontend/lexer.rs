//! Line tokenizer
//!
//! Splits one line of program text on spaces and tabs, keeping the column of
//! every token for error reporting.

use crate::util::span::{Position, Spanned};

/// Tokenize a single line. `line_no` is 1-indexed.
pub fn tokenize_line(
    line: &str,
    line_no: usize,
) -> Vec<Spanned<&str>> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    let mut column = 0;

    for (offset, c) in line.char_indices() {
        column += 1;
        match (c.is_whitespace(), start) {
            (false, None) => start = Some((offset, column)),
            (true, Some((begin, col))) => {
                tokens.push(Spanned::new(
                    &line[begin..offset],
                    Position::new(line_no, col),
                ));
                start = None;
            }
            _ => {}
        }
    }
    if let Some((begin, col)) = start {
        tokens.push(Spanned::new(&line[begin..], Position::new(line_no, col)));
    }

    tokens
}
