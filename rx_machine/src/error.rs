use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A pattern couldn't be parsed. Nothing is built in that case.
    #[error("invalid pattern {pattern:?}: {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: rx_syntax::Error,
    },

    #[error(transparent)]
    Automaton(#[from] rx_automata::Error),

    /// Reading the scanned input failed, or it was not valid UTF-8.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}
