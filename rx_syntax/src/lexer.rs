/**
 * Splits a pattern into tokens, resolving escapes on the way.
 */

use std::iter::Enumerate;
use std::str::Chars;
use crate::token::{Token, TokenKind};

/// Lexes the whole pattern. The result always ends with exactly one
/// [`TokenKind::End`] token.
pub fn lex(pattern: &str) -> Vec<Token> {
    Iter::with_source(pattern).collect()
}

fn is_operator(c: char) -> bool {
    "()[]|*^-".contains(c)
}

/**
 * Iterate over all tokens.
 */

struct Iter<'a> {
    chars: Enumerate<Chars<'a>>,
    length: usize,
    already_ended: bool,
}

impl <'a> Iter<'a> {
    fn with_source(source: &'a str) -> Self {
        Self{ chars: source.chars().enumerate(), length: source.chars().count(), already_ended: false }
    }

    fn end(&mut self) -> Option<Token> {
        if self.already_ended {
            None
        }
        else {
            self.already_ended = true;
            Some(Token::new(TokenKind::End, self.length))
        }
    }
}

impl <'a> Iterator for Iter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, c) = match self.chars.next() {
            Some(next) => next,
            None => return self.end(),
        };

        let kind = if c == '\\' {
            match self.chars.next() {
                Some((_, 's')) => TokenKind::Char(' '),
                Some((_, 't')) => TokenKind::Char('\t'),
                Some((_, 'n')) => TokenKind::Char('\n'),
                Some((_, 'e')) => TokenKind::Empty,
                // Any other escaped character stands for itself
                Some((_, escaped)) => TokenKind::Char(escaped),
                // Dangling backslash, the stream just ends
                None => return self.end(),
            }
        }
        else if is_operator(c) {
            TokenKind::Operator(c)
        }
        else {
            TokenKind::Char(c)
        };

        Some(Token::new(kind, offset))
    }
}
