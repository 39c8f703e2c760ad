/**
 * The compiled matcher and its runtime.
 */

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::io::Read;
use log::debug;
use rx_automata::{dfa, nfa};
use crate::chars::Chars;
use crate::error::Error;
use crate::syntax::{Action, Match, Syntax};

/// A deterministic automaton compiled from one or more patterns. The accepting
/// states carry the index of the pattern they belong to, which selects the
/// action to call.
///
/// A machine is immutable once built, running it only touches state local to
/// the call, so it can be shared between threads freely.
pub struct Machine {
    dfa: dfa::Automaton<usize>,
    pattern: String,
    rules: Vec<(String, Action)>,
}

/**
 * Building.
 */

impl Machine {
    /// Builds a machine for a single pattern.
    pub fn build_one<F>(pattern: &str, action: F) -> Result<Self, Error>
        where F : Fn(&Match) -> bool + Send + Sync + 'static {

        Self::build(Syntax::new().rule(pattern, action))
    }

    /// Builds a single machine for every pattern of the syntax, as if they
    /// were alternatives of one regex.
    pub fn build(syntax: Syntax) -> Result<Self, Error> {
        let max_states = syntax.state_limit();
        let rules = syntax.into_rules();

        let mut nf = nfa::Automaton::new();
        for (idx, (pattern, _)) in rules.iter().enumerate() {
            let ast = rx_syntax::parse(pattern).map_err(|source| Error::Syntax{
                pattern: pattern.clone(),
                source,
            })?;
            nf.add_regex_with_accepting_value(&ast, idx);
        }
        debug!("built an NFA of {} states for {} patterns", nf.state_count(), rules.len());

        let dfa = dfa::Automaton::determinize(&nf, max_states)?;
        let pattern = rules.iter().map(|(p, _)| p.as_str()).collect::<Vec<_>>().join("|");

        Ok(Self{ dfa, pattern, rules })
    }
}

/**
 * Info about the machine.
 */

impl Machine {
    /// The patterns of the machine joined by alternation.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(pattern, _)| pattern.as_str())
    }

    pub fn state_count(&self) -> usize {
        self.dfa.state_count()
    }
}

/**
 * Running.
 */

impl Machine {
    /// Checks if the whole text is matched.
    pub fn full_match(&self, text: &str) -> bool {
        let mut state = self.dfa.start;
        for c in text.chars() {
            match self.dfa.step(&state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.dfa.is_accepting(&state)
    }

    /// Scans the input for matches, calling the action of the matching pattern
    /// for each one. Stops early if an action returns true. Matches reported
    /// before a read error are not taken back.
    pub fn scan<R>(&self, reader: R) -> Result<(), Error> where R : Read {
        self.run(Chars::new(reader), |found| self.dispatch(&found))?;
        Ok(())
    }

    /// Scans a string, see [`Machine::scan`].
    pub fn scan_str(&self, text: &str) {
        let chars = text.chars().map(Ok::<char, Infallible>);
        if let Err(never) = self.run(chars, |found| self.dispatch(&found)) {
            match never {}
        }
    }

    /// Every match in the text, without calling any action.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut result = Vec::new();
        let chars = text.chars().map(Ok::<char, Infallible>);
        if let Err(never) = self.run(chars, |found| {
            result.push(found);
            false
        }) {
            match never {}
        }
        result
    }

    fn dispatch(&self, found: &Match) -> bool {
        (self.rules[found.pattern].1)(found)
    }

    /// Tries to match at every position of the input. From each starting
    /// position the longest accepted text is reported, and the search resumes
    /// right after it. Empty matches and failed attempts advance by one
    /// character. Nothing is attempted at the very end of the input.
    fn run<I, E, F>(&self, mut chars: I, mut on_match: F) -> Result<(), E>
        where I : Iterator<Item = Result<char, E>>, F : FnMut(Match) -> bool {

        // The characters read from the current starting position on
        let mut window = VecDeque::new();
        let mut offset = 0;

        loop {
            if window.is_empty() {
                match chars.next() {
                    Some(c) => window.push_back(c?),
                    None => return Ok(()),
                }
            }

            let mut state = self.dfa.start;
            let mut longest = self.dfa.accepting_value(&state).map(|p| (0, *p));
            let mut consumed = 0;
            let mut failure = None;

            loop {
                let c = if consumed < window.len() {
                    window[consumed]
                }
                else {
                    match chars.next() {
                        Some(Ok(c)) => {
                            window.push_back(c);
                            c
                        },
                        Some(Err(e)) => {
                            failure = Some(e);
                            break;
                        },
                        None => break,
                    }
                };

                match self.dfa.step(&state, c) {
                    Some(next) => {
                        state = next;
                        consumed += 1;
                        if let Some(pattern) = self.dfa.accepting_value(&state) {
                            longest = Some((consumed, *pattern));
                        }
                    },
                    // Dead end, no need to look further
                    None => break,
                }
            }

            let advance = match longest {
                Some((len, pattern)) => {
                    let found = Match{ text: window.iter().take(len).collect(), offset, pattern };
                    if on_match(found) {
                        return Ok(());
                    }
                    len.max(1)
                },
                None => 1,
            };

            if let Some(e) = failure {
                return Err(e);
            }

            window.drain(..advance);
            offset += advance;
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pattern)?;
        write!(f, "{}", self.dfa)
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("pattern", &self.pattern)
            .field("states", &self.dfa.state_count())
            .finish()
    }
}
