mod common;

use std::sync::{Arc, Mutex};
use std::thread;
use pretty_assertions::assert_eq;
use rx_machine::{Error, Machine, Match, Syntax};
use common::strings;

#[test]
fn literal_full_match() {
    for pattern in &["a", "abc", "hello world", "\u{FFFF}x"] {
        let machine = Machine::build_one(pattern, |_| false).unwrap();
        assert!(machine.full_match(pattern));
        assert!(!machine.full_match(&pattern[..pattern.len() - 1]));
        assert!(!machine.full_match(&format!("{}!", pattern)));
        assert!(!machine.full_match(""));
    }
}

#[test]
fn full_match_with_operators() {
    let machine = Machine::build_one("(a|b)*c|[^0-9]", |_| false).unwrap();
    assert!(machine.full_match("c"));
    assert!(machine.full_match("ababbc"));
    assert!(machine.full_match("x"));
    assert!(!machine.full_match("7"));
    assert!(!machine.full_match("abx"));
    assert!(!machine.full_match(""));
}

#[test]
fn empty_string_full_match() {
    let machine = Machine::build_one("a*", |_| false).unwrap();
    assert!(machine.full_match(""));
    assert!(machine.full_match("aaa"));
}

#[test]
fn joined_build_dispatches_to_each_action() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (words, numbers) = (Arc::clone(&log), Arc::clone(&log));

    let syntax = Syntax::new()
        .rule("[a-z][a-z]*", move |m| {
            words.lock().unwrap().push(format!("word:{}", m.text));
            false
        })
        .rule("[0-9][0-9]*", move |m| {
            numbers.lock().unwrap().push(format!("number:{}", m.text));
            false
        });
    let machine = Machine::build(syntax).unwrap();
    assert_eq!(machine.pattern(), "[a-z][a-z]*|[0-9][0-9]*");

    machine.scan_str("abc 12 d3");
    assert_eq!(*log.lock().unwrap(), strings(&["word:abc", "number:12", "word:d", "number:3"]));
}

#[test]
fn first_pattern_wins_on_ties() {
    let syntax = Syntax::new()
        .rule("if", |_| false)
        .rule("[a-z][a-z]*", |_| false);
    let machine = Machine::build(syntax).unwrap();

    let found = machine.find_all("if iff");
    assert_eq!(found, vec![
        Match{ text: "if".into(), offset: 0, pattern: 0 },
        Match{ text: "iff".into(), offset: 3, pattern: 1 },
    ]);
}

#[test]
fn syntax_error_names_the_pattern() {
    let syntax = Syntax::new()
        .rule("ab", |_| false)
        .rule("a(b", |_| false);
    match Machine::build(syntax) {
        Err(Error::Syntax{ pattern, source }) => {
            assert_eq!(pattern, "a(b");
            assert!(matches!(source, rx_syntax::Error::UnclosedGroup{ opened: 1, .. }));
        },
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn state_limit_is_enforced() {
    let syntax = Syntax::new()
        .rule("abcdefgh", |_| false)
        .max_states(4);
    match Machine::build(syntax) {
        Err(Error::Automaton(rx_automata::Error::TooManyStates(4))) => {},
        other => panic!("expected too many states, got {:?}", other),
    }
}

#[test]
fn empty_syntax_matches_nothing() {
    let machine = Machine::build(Syntax::new()).unwrap();
    assert!(!machine.full_match(""));
    assert!(machine.find_all("abc").is_empty());
}

#[test]
fn empty_negated_class_matches_any_character() {
    let machine = Machine::build_one("a[^]b", |_| false).unwrap();
    assert!(machine.full_match("axb"));
    assert!(machine.full_match("a\u{10FFFF}b"));
    assert!(!machine.full_match("ab"));
    assert!(!machine.full_match("axxb"));

    let machine = Machine::build_one("[^]*|x", |_| false).unwrap();
    let found = machine.find_all("xyz");
    assert_eq!(found, vec![Match{ text: "xyz".into(), offset: 0, pattern: 0 }]);
}

#[test]
fn patterns_keep_their_order() {
    let syntax = Syntax::new()
        .rule("[0-9]*", |_| false)
        .rule("if", |_| false)
        .rule("[0-9]*", |_| true);
    let machine = Machine::build(syntax).unwrap();
    assert_eq!(machine.patterns().collect::<Vec<_>>(), vec!["[0-9]*", "if"]);
    assert_eq!(machine.pattern(), "[0-9]*|if");
}

#[test]
fn building_twice_gives_identical_machines() {
    let a = Machine::build_one("[^a-z]x|[A-Za-z]y*", |_| false).unwrap();
    let b = Machine::build_one("[^a-z]x|[A-Za-z]y*", |_| false).unwrap();
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.find_all("Ayy1xzx"), b.find_all("Ayy1xzx"));
}

#[test]
fn concurrent_scans() {
    let count = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&count);
    let machine = Arc::new(Machine::build_one("ab*", move |_| {
        *counter.lock().unwrap() += 1;
        false
    }).unwrap());

    let handles: Vec<_> = (0..4).map(|_| {
        let machine = Arc::clone(&machine);
        thread::spawn(move || {
            machine.scan_str("abbxaab");
            machine.find_all("abbxaab").len()
        })
    }).collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
    assert_eq!(*count.lock().unwrap(), 12);
}
