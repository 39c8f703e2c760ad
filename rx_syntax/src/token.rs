/**
 * Token definition.
 */

use std::fmt;

/// The kinds of lexemes the pattern lexer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A literal character, escapes already resolved.
    Char(char),
    /// One of `( ) [ ] | * ^ -`.
    Operator(char),
    /// The `\e` marker, matching the empty string.
    Empty,
    End,
}

/// A token with the character offset it starts at in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self{ kind, offset }
    }

    pub fn is_operator(&self, op: char) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Char(c) => write!(f, "character {:?}", c),
            TokenKind::Operator(c) => write!(f, "operator '{}'", c),
            TokenKind::Empty => write!(f, "empty-string marker"),
            TokenKind::End => write!(f, "end of pattern"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}
