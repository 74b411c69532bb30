//! Source location tracking

use std::fmt;

/// Source position (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(
        line: usize,
        column: usize,
    ) -> Self {
        Self { line, column }
    }

    /// Create a dummy position
    #[inline]
    pub fn dummy() -> Self {
        Self { line: 0, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A value tagged with the source position it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<T> {
    /// The value
    pub value: T,
    /// Where the value starts in the source
    pub position: Position,
}

impl<T> Spanned<T> {
    /// Create a new spanned value
    #[inline]
    pub fn new(
        value: T,
        position: Position,
    ) -> Self {
        Self { value, position }
    }
}

impl<T> std::ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
