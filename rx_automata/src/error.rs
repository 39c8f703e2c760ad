use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Determinization reached more states than the configured limit.
    #[error("the deterministic automaton needs more than {0} states")]
    TooManyStates(usize),
}
