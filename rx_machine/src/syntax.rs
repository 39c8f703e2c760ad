/**
 * The configuration a machine is built from: patterns and their actions.
 */

use std::fmt;
use std::sync::Arc;

/// A match reported by a running machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The matched text.
    pub text: String,
    /// Offset of the first matched character, counted in characters.
    pub offset: usize,
    /// Index of the pattern that matched, in the order of the [`Syntax`].
    pub pattern: usize,
}

/// Called with every match. Returning true stops the scan.
pub type Action = Arc<dyn Fn(&Match) -> bool + Send + Sync>;

/// An ordered mapping from patterns to actions. When a match could be
/// attributed to more than one pattern, the one added first wins.
#[derive(Clone)]
pub struct Syntax {
    rules: Vec<(String, Action)>,
    max_states: Option<usize>,
}

impl Syntax {
    pub fn new() -> Self {
        Self{ rules: Vec::new(), max_states: None }
    }

    /// Adds a pattern with its action. Adding a pattern that is already there
    /// replaces its action but keeps its priority.
    pub fn rule<P, F>(mut self, pattern: P, action: F) -> Self
        where P : Into<String>, F : Fn(&Match) -> bool + Send + Sync + 'static {

        let pattern = pattern.into();
        let action: Action = Arc::new(action);
        match self.rules.iter_mut().find(|(existing, _)| *existing == pattern) {
            Some(rule) => rule.1 = action,
            None => self.rules.push((pattern, action)),
        }
        self
    }

    /// Limits the number of deterministic states a build may produce. There's
    /// no limit by default.
    pub fn max_states(mut self, limit: usize) -> Self {
        self.max_states = Some(limit);
        self
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(pattern, _)| pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn state_limit(&self) -> Option<usize> {
        self.max_states
    }

    pub(crate) fn into_rules(self) -> Vec<(String, Action)> {
        self.rules
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syntax")
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .field("max_states", &self.max_states)
            .finish()
    }
}

#[cfg(test)]
mod syntax_tests {
use super::*;

#[test]
fn patterns_keep_insertion_order() {
    let syntax = Syntax::new()
        .rule("b", |_| false)
        .rule("a", |_| false)
        .rule("c", |_| false);
    assert_eq!(syntax.patterns().collect::<Vec<_>>(), vec!["b", "a", "c"]);
}

#[test]
fn repeated_pattern_replaces_action() {
    let syntax = Syntax::new()
        .rule("a", |_| false)
        .rule("b", |_| false)
        .rule("a", |_| true);
    assert_eq!(syntax.len(), 2);

    let m = Match{ text: "a".into(), offset: 0, pattern: 0 };
    let rules = syntax.into_rules();
    assert_eq!(rules[0].0, "a");
    assert!((rules[0].1)(&m));
}

#[test]
fn state_limit_defaults_to_none() {
    assert_eq!(Syntax::new().state_limit(), None);
    assert_eq!(Syntax::new().max_states(10).state_limit(), Some(10));
}
}
