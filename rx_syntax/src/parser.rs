/**
 * A recursive-descent parser turning the token stream into a regex AST.
 */

use rx_charset::Set;
use crate::ast::Node;
use crate::error::Error;
use crate::lexer::lex;
use crate::token::{Token, TokenKind};

/*
 * Reference grammar for the parser:
 *
 * expr  ::= str ('|' str?)*
 *         ;
 *
 * str   ::= rep rep*
 *         ;
 *
 * rep   ::= term '*'?
 *         ;
 *
 * term  ::=
 *         | '(' expr ')'
 *         | '[' set ']'
 *         | CHAR
 *         | EMPTY
 *         ;
 *
 * set   ::= '^'? item*
 *         ;
 *
 * item  ::= CHAR ('-' CHAR)?
 *         ;
 *
 * Outside of a class '^' and '-' are plain characters. Inside a class a
 * non-leading '^' and a '-' that can't form a range are plain characters too.
 */

/// Lexes and parses a pattern.
pub fn parse(pattern: &str) -> Result<Node, Error> {
    parse_tokens(&lex(pattern))
}

/// Parses an already lexed pattern. The whole token stream must be consumed.
pub fn parse_tokens(tokens: &[Token]) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_expr()?;
    let word = parser.word();
    if word.is_end() {
        Ok(root)
    }
    else {
        Err(Error::TrailingInput(word))
    }
}

type ParseResult<T> = Result<T, Error>;

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl <'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self{ tokens, index: 0 }
    }

    /// The current lookahead token. Running off the stream reads as the end.
    fn word(&self) -> Token {
        match self.tokens.get(self.index) {
            Some(token) => *token,
            None => {
                let offset = self.tokens.last().map_or(0, |t| t.offset);
                Token::new(TokenKind::End, offset)
            },
        }
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    fn parse_expr(&mut self) -> ParseResult<Node> {
        let first = match self.parse_str()? {
            Some(node) => node,
            None => return Err(Error::ExpectedOperand(self.word())),
        };
        if !self.word().is_operator('|') {
            return Ok(first);
        }

        let mut alternatives = vec![first];
        while self.word().is_operator('|') {
            self.advance();
            // A hollow branch matches the empty string
            let alternative = self.parse_str()?.unwrap_or(Node::EmptyStr);
            alternatives.push(alternative);
        }
        Ok(Node::Or(alternatives))
    }

    fn parse_str(&mut self) -> ParseResult<Option<Node>> {
        let mut terms = Vec::new();
        while let Some(term) = self.parse_rep()? {
            terms.push(term);
        }
        Ok(match terms.len() {
            0 => None,
            1 => terms.pop(),
            _ => Some(Node::And(terms)),
        })
    }

    fn parse_rep(&mut self) -> ParseResult<Option<Node>> {
        let term = match self.parse_term()? {
            Some(term) => term,
            None => return Ok(None),
        };
        if self.word().is_operator('*') {
            self.advance();
            Ok(Some(Node::Star(Box::new(term))))
        }
        else {
            Ok(Some(term))
        }
    }

    fn parse_term(&mut self) -> ParseResult<Option<Node>> {
        let word = self.word();
        match word.kind {
            TokenKind::Operator('(') => {
                self.advance();
                let node = self.parse_expr()?;
                let close = self.word();
                if !close.is_operator(')') {
                    return Err(Error::UnclosedGroup{ opened: word.offset, found: close });
                }
                self.advance();
                Ok(Some(node))
            },

            TokenKind::Operator('[') => {
                self.advance();
                let set = self.parse_set(word.offset)?;
                Ok(Some(Node::Set(set)))
            },

              TokenKind::Char(c)
            | TokenKind::Operator(c @ '^')
            | TokenKind::Operator(c @ '-') => {
                self.advance();
                Ok(Some(Node::literal(c)))
            },

            TokenKind::Empty => {
                self.advance();
                Ok(Some(Node::EmptyStr))
            },

            TokenKind::Operator(_) | TokenKind::End => Ok(None),
        }
    }

    /// Parses the inside of a class, consuming the closing ']'.
    fn parse_set(&mut self, opened: usize) -> ParseResult<Set> {
        let negated = self.word().is_operator('^');
        if negated {
            self.advance();
        }

        let mut items = Vec::new();
        loop {
            let word = self.word();
            let first = match word.kind {
                TokenKind::Operator(']') => {
                    self.advance();
                    break;
                },

                  TokenKind::Char(c)
                | TokenKind::Operator(c @ '^')
                | TokenKind::Operator(c @ '-') => c,

                TokenKind::End => return Err(Error::UnclosedClass{ opened, found: word }),

                TokenKind::Operator(_) | TokenKind::Empty => return Err(Error::UnexpectedInClass(word)),
            };
            self.advance();
            self.parse_item(first, &mut items)?;
        }

        Ok(if negated { Set::negated_with_items(items) } else { Set::with_items(items) })
    }

    /// Parses the optional range continuation of a class item starting with
    /// `first`.
    fn parse_item(&mut self, first: char, items: &mut Vec<char>) -> ParseResult<()> {
        let dash = self.word();
        if !dash.is_operator('-') {
            items.push(first);
            return Ok(());
        }
        self.advance();

        let right = self.word();
        match right.kind {
            // Trailing '-', it's literal
            TokenKind::Operator(']') => {
                items.push(first);
                items.push('-');
            },

              TokenKind::Char(last)
            | TokenKind::Operator(last @ '^')
            | TokenKind::Operator(last @ '-') => {
                self.advance();
                items.extend_from_slice(Set::range(first, last).items());
            },

            TokenKind::Operator(_) | TokenKind::Empty | TokenKind::End => {
                return Err(Error::DanglingRange{ offset: dash.offset, found: right });
            },
        }
        Ok(())
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
