/**
 * Compiled pattern matchers: building a machine out of patterns and running it
 * over text.
 */

extern crate rx_syntax;
extern crate rx_automata;

mod chars;
mod error;
mod syntax;
mod machine;

pub use error::Error;
pub use syntax::{Action, Match, Syntax};
pub use machine::Machine;
