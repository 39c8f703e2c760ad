/**
 * Arena-allocated nondeterministic finite automaton over character sets.
 */

use std::collections::HashSet;
use rx_charset::Set;
use rx_syntax::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An edge of the automaton. A transition without a set is an epsilon
/// transition, it consumes no input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub on: Option<Set>,
    pub to: State,
}

impl Transition {
    pub fn is_epsilon(&self) -> bool {
        self.on.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StateData<AcceptingValue> {
    transitions: Vec<Transition>,
    accepting: Option<AcceptingValue>,
}

impl <AcceptingValue> StateData<AcceptingValue> {
    fn new() -> Self {
        Self{ transitions: Vec::new(), accepting: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton<AcceptingValue = ()> {
    pub start: State,
    states: Vec<StateData<AcceptingValue>>,
}

impl <AcceptingValue> Automaton<AcceptingValue> {
    pub fn new() -> Self {
        Self{
            start: State(0),
            states: vec![StateData::new()],
        }
    }

    pub fn unique_state(&mut self) -> State {
        self.states.push(StateData::new());
        State(self.states.len() - 1)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> impl Iterator<Item = State> {
        (0..self.states.len()).map(State)
    }

    pub fn add_accepting_with_value(&mut self, state: State, value: AcceptingValue) {
        self.states[state.0].accepting = Some(value);
    }

    pub fn accepting_value(&self, state: &State) -> Option<&AcceptingValue> {
        self.states[state.0].accepting.as_ref()
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting_value(state).is_some()
    }

    pub fn add_transition(&mut self, from: State, on: Set, to: State) {
        self.states[from.0].transitions.push(Transition{ on: Some(on), to });
    }

    pub fn add_epsilon_transition(&mut self, from: State, to: State) {
        self.states[from.0].transitions.push(Transition{ on: None, to });
    }

    /// The outgoing transitions of a state, in insertion order.
    pub fn transitions_from(&self, from: &State) -> &[Transition] {
        &self.states[from.0].transitions
    }

    /// Every state reachable from the given ones through epsilon transitions
    /// only, the given ones included. Each state appears once, in the order
    /// it was discovered.
    pub fn epsilon_closure<I>(&self, states: I) -> Vec<State> where I : IntoIterator<Item = State> {
        let mut result = Vec::new();
        let mut touched = HashSet::new();

        for state in states {
            if !touched.insert(state) {
                continue;
            }
            let mut stk = vec![state];
            while let Some(top) = stk.pop() {
                result.push(top);
                // Reversed, so the first transition is visited first
                for tr in self.transitions_from(&top).iter().rev() {
                    if tr.is_epsilon() && touched.insert(tr.to) {
                        stk.push(tr.to);
                    }
                }
            }
        }

        result
    }
}

impl <AcceptingValue> Default for Automaton<AcceptingValue> {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * Thompson's-construction.
 */

impl <AcceptingValue> Automaton<AcceptingValue> {
    /// Adds the regex as a new alternative of the automaton. The accepting
    /// state of the regex gets the given value.
    pub fn add_regex_with_accepting_value(
        &mut self, rx: &Node, value: AcceptingValue) -> (State, State) {

        let (from, to) = thompson_construct(self, rx);
        self.add_epsilon_transition(self.start, from);
        self.add_accepting_with_value(to, value);
        (from, to)
    }
}

impl <AcceptingValue> Automaton<AcceptingValue> where AcceptingValue : Default {
    pub fn add_regex(&mut self, rx: &Node) -> (State, State) {
        self.add_regex_with_accepting_value(rx, Default::default())
    }
}

impl <AcceptingValue> From<Node> for Automaton<AcceptingValue> where AcceptingValue : Default {
    fn from(rx: Node) -> Self {
        let mut nf = Self::new();
        nf.add_regex(&rx);
        nf
    }
}

fn thompson_construct<AcceptingValue>(nfa: &mut Automaton<AcceptingValue>,
    rx: &Node) -> (State, State) {

    match rx {
        Node::And(children) => thompson_construct_sequence(nfa, children),
        Node::Or(children) => thompson_construct_alternative(nfa, children),
        Node::Star(subnode) => thompson_construct_star(nfa, subnode),
        Node::Set(set) => thompson_construct_set(nfa, set),
        Node::EmptyStr => thompson_construct_empty(nfa),
    }
}

fn thompson_construct_sequence<AcceptingValue>(nfa: &mut Automaton<AcceptingValue>,
    children: &[Node]) -> (State, State) {

    let (first, rest) = match children.split_first() {
        Some(split) => split,
        None => return thompson_construct_empty(nfa),
    };

    let (start, mut last) = thompson_construct(nfa, first);
    for child in rest {
        let (s, e) = thompson_construct(nfa, child);
        nfa.add_epsilon_transition(last, s);
        last = e;
    }

    (start, last)
}

fn thompson_construct_alternative<AcceptingValue>(nfa: &mut Automaton<AcceptingValue>,
    children: &[Node]) -> (State, State) {

    let start = nfa.unique_state();
    let end = nfa.unique_state();

    for child in children {
        let (s, e) = thompson_construct(nfa, child);
        nfa.add_epsilon_transition(start, s);
        nfa.add_epsilon_transition(e, end);
    }

    (start, end)
}

fn thompson_construct_star<AcceptingValue>(nfa: &mut Automaton<AcceptingValue>,
    subnode: &Node) -> (State, State) {

    let start = nfa.unique_state();
    let (s, e) = thompson_construct(nfa, subnode);
    let bypass = nfa.unique_state();
    let end = nfa.unique_state();

    // Repeat
    nfa.add_epsilon_transition(e, s);
    nfa.add_epsilon_transition(e, bypass);
    // Skip entirely
    nfa.add_epsilon_transition(start, s);
    nfa.add_epsilon_transition(start, bypass);
    nfa.add_epsilon_transition(bypass, end);

    (start, end)
}

fn thompson_construct_set<AcceptingValue>(nfa: &mut Automaton<AcceptingValue>,
    set: &Set) -> (State, State) {

    let start = nfa.unique_state();
    let end = nfa.unique_state();

    nfa.add_transition(start, set.clone(), end);

    (start, end)
}

fn thompson_construct_empty<AcceptingValue>(nfa: &mut Automaton<AcceptingValue>) -> (State, State) {
    let start = nfa.unique_state();
    let end = nfa.unique_state();

    nfa.add_epsilon_transition(start, end);

    (start, end)
}
