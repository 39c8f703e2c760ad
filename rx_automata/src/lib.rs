
extern crate rx_charset;
extern crate rx_syntax;

pub mod nfa;
pub mod dfa;
mod error;

pub use error::Error;

#[test]
fn identifier() {
    let rx = r"[A-Za-z_][A-Za-z_0-9]*";
    let ast = rx_syntax::parse(rx).unwrap();
    let nf = nfa::Automaton::<()>::from(ast);
    let df = dfa::Automaton::determinize(&nf, None).unwrap();

    let run = |input: &str| {
        let mut state = df.start;
        for c in input.chars() {
            match df.step(&state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        df.is_accepting(&state)
    };

    assert!(run("foo_bar1"));
    assert!(run("_"));
    assert!(!run("1abc"));
    assert!(!run("ab-c"));
    assert!(!run(""));
}
