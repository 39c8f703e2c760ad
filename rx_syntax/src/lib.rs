/**
 * Regex syntax: tokens, lexing, the syntax tree and the parser producing it.
 */

extern crate rx_charset;

mod token;
mod lexer;
mod ast;
mod error;
mod parser;

pub use token::{Token, TokenKind};
pub use lexer::lex;
pub use ast::Node;
pub use error::Error;
pub use parser::{parse, parse_tokens};
