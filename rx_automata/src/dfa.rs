/**
 * Deterministic finite automaton built from an NFA with the subset
 * construction.
 */

use std::collections::{HashMap, VecDeque};
use std::fmt;
use log::{debug, trace};
use rx_charset::Set;
use crate::error::Error;
use crate::nfa::{Automaton as NFA, State as NfaState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StateData<AcceptingValue> {
    transitions: Vec<(Set, State)>,
    accepting: Option<AcceptingValue>,
}

/// The sets labeling the transitions of a single state are pairwise disjoint,
/// so at most one transition applies to any character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton<AcceptingValue = ()> {
    pub start: State,
    states: Vec<StateData<AcceptingValue>>,
}

impl <AcceptingValue> Automaton<AcceptingValue> {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> impl Iterator<Item = State> {
        (0..self.states.len()).map(State)
    }

    pub fn accepting_value(&self, state: &State) -> Option<&AcceptingValue> {
        self.states[state.0].accepting.as_ref()
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting_value(state).is_some()
    }

    pub fn transitions_from(&self, from: &State) -> &[(Set, State)] {
        &self.states[from.0].transitions
    }

    /// The state reached by consuming `c`, if any.
    pub fn step(&self, from: &State, c: char) -> Option<State> {
        self.transitions_from(from).iter()
            .find(|(set, _)| set.contains(c))
            .map(|(_, to)| *to)
    }
}

impl <AcceptingValue> fmt::Display for Automaton<AcceptingValue> where AcceptingValue : fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "S{}{{", state.0)?;
            let transitions = self.transitions_from(&state);
            if !transitions.is_empty() {
                write!(f, "t: [")?;
                for (i, (set, to)) in transitions.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{{{} -> S{}}}", set, to.0)?;
                }
                write!(f, "]")?;
            }
            if let Some(value) = self.accepting_value(&state) {
                if !transitions.is_empty() {
                    write!(f, ", ")?;
                }
                write!(f, "act: {:?}", value)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

/**
 * Epsilon-closures.
 */

/// Identifies a set of NFA states: the sorted indices, separated by dots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosureId(String);

impl ClosureId {
    pub fn new(states: &[NfaState]) -> Self {
        let mut indices: Vec<usize> = states.iter().map(|s| s.index()).collect();
        indices.sort_unstable();
        indices.dedup();
        let parts: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
        ClosureId(parts.join("."))
    }
}

impl fmt::Display for ClosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of NFA states fused into one: the union of their consuming
/// transitions, accepting if any member is.
struct Closure<AcceptingValue> {
    id: ClosureId,
    transitions: Vec<(Set, NfaState)>,
    accepting: Option<AcceptingValue>,
}

impl <AcceptingValue> Closure<AcceptingValue> where AcceptingValue : Clone + Ord {
    fn of(nfa: &NFA<AcceptingValue>, starters: &[NfaState]) -> Self {
        let states = nfa.epsilon_closure(starters.iter().copied());
        let id = ClosureId::new(&states);

        let mut transitions = Vec::new();
        let mut accepting: Option<&AcceptingValue> = None;
        for state in &states {
            // Coinciding accepting states resolve to the smallest value
            if let Some(value) = nfa.accepting_value(state) {
                if accepting.map_or(true, |current| value < current) {
                    accepting = Some(value);
                }
            }
            for tr in nfa.transitions_from(state) {
                match &tr.on {
                    Some(set) if !set.is_empty() => transitions.push((set.clone(), tr.to)),
                    _ => {},
                }
            }
        }

        Self{ id, transitions, accepting: accepting.cloned() }
    }
}

/**
 * Splitting overlapping transitions into disjoint ones.
 */

/// Finds the first label overlapping a later one, and narrows the overlap down
/// across every later label it still intersects. Returns the overlapping piece
/// and the indices of the labels containing it.
fn first_overlap(labels: &[(Set, NfaState)]) -> Option<(Set, Vec<usize>)> {
    for (i, (set, _)) in labels.iter().enumerate() {
        if set.is_empty() {
            continue;
        }
        let mut piece = set.clone();
        let mut members = vec![i];
        for (j, (other, _)) in labels.iter().enumerate().skip(i + 1) {
            let common = piece.intersect(other);
            if !common.is_empty() {
                piece = common;
                members.push(j);
            }
        }
        if members.len() > 1 {
            return Some((piece, members));
        }
    }
    None
}

/// Turns possibly overlapping labeled transitions into pairwise disjoint
/// labels, each leading to every NFA state its characters could reach.
pub(crate) fn partition(mut labels: Vec<(Set, NfaState)>) -> Vec<(Set, Vec<NfaState>)> {
    let mut result = Vec::new();

    while let Some((piece, members)) = first_overlap(&labels) {
        let mut targets = Vec::with_capacity(members.len());
        for idx in members {
            labels[idx].0.exclude(&piece);
            targets.push(labels[idx].1);
        }
        result.push((piece, targets));
    }

    for (set, to) in labels {
        if !set.is_empty() {
            result.push((set, vec![to]));
        }
    }

    result
}

/**
 * Determinization.
 */

impl <AcceptingValue> Automaton<AcceptingValue> where AcceptingValue : Clone + Ord {
    /// Runs the subset construction, only building the state combinations
    /// reachable from the NFA start. Fails if more than `max_states` states
    /// would be needed.
    pub fn determinize(nfa: &NFA<AcceptingValue>, max_states: Option<usize>) -> Result<Self, Error> {
        let mut dfa = Self{ start: State(0), states: Vec::new() };
        let mut nfa_set_to_dfa_state = HashMap::new();
        let mut stk = VecDeque::new();

        let start = Closure::of(nfa, &[nfa.start]);
        dfa.start = dfa.insert_closure(start, &mut nfa_set_to_dfa_state, &mut stk, max_states)?;

        while let Some((dfa_state, labels)) = stk.pop_front() {
            for (on, targets) in partition(labels) {
                let closure = Closure::of(nfa, &targets);
                let to = match nfa_set_to_dfa_state.get(&closure.id) {
                    Some(existing) => *existing,
                    None => dfa.insert_closure(closure, &mut nfa_set_to_dfa_state, &mut stk, max_states)?,
                };
                dfa.states[dfa_state.0].transitions.push((on, to));
            }
        }

        debug!("determinized {} NFA states into {} DFA states", nfa.state_count(), dfa.state_count());
        Ok(dfa)
    }

    fn insert_closure(
        &mut self,
        closure: Closure<AcceptingValue>,
        nfa_set_to_dfa_state: &mut HashMap<ClosureId, State>,
        stk: &mut VecDeque<(State, Vec<(Set, NfaState)>)>,
        max_states: Option<usize>) -> Result<State, Error> {

        if let Some(limit) = max_states {
            if self.states.len() >= limit {
                return Err(Error::TooManyStates(limit));
            }
        }

        let state = State(self.states.len());
        trace!("closure {} becomes DFA state S{}", closure.id, state.0);
        self.states.push(StateData{ transitions: Vec::new(), accepting: closure.accepting });
        nfa_set_to_dfa_state.insert(closure.id, state);
        stk.push_back((state, closure.transitions));
        Ok(state)
    }
}
