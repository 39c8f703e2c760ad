/**
 * Errors reported while parsing a pattern.
 */

use thiserror::Error;
use crate::token::Token;

/// A malformed pattern. Every variant names the token the parser stopped at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected an operand, found {0}")]
    ExpectedOperand(Token),

    #[error("unclosed group: expected operator ')', found {found} (group opened at offset {opened})")]
    UnclosedGroup { opened: usize, found: Token },

    #[error("unclosed character class: found {found} (class opened at offset {opened})")]
    UnclosedClass { opened: usize, found: Token },

    #[error("range operator at offset {offset} requires two operands, found {found}")]
    DanglingRange { offset: usize, found: Token },

    #[error("unexpected {0} in character class")]
    UnexpectedInClass(Token),

    #[error("unexpected {0} after the end of the expression")]
    TrailingInput(Token),
}
