/**
 * Differential fuzzing of the machine against a backtracking reference
 * matcher. Usage: `rx_fuzzer [seed] [iterations]`.
 */

mod rnd;
mod str_gen;
mod reference;

use std::fmt;
use log::{debug, info};
use rx_machine::Machine;
use str_gen::*;

const ALPHABET: &str = "abc";

/// A disagreement between the machine and the reference.
#[derive(Debug)]
struct Mismatch {
    pattern: String,
    input: String,
    what: &'static str,
    expected: String,
    got: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} mismatch for pattern {:?} on input {:?}", self.what, self.pattern, self.input)?;
        writeln!(f, "  expected: {}", self.expected)?;
        write!(f, "  got:      {}", self.got)
    }
}

fn check_once(patterns: &dyn StringGenStrategy, inputs: &dyn StringGenStrategy) -> Result<(), Mismatch> {
    let pattern = patterns.generate();
    let input = inputs.generate();
    debug!("checking {:?} on {:?}", pattern, input);

    let mismatch = |what, expected: String, got: String| Mismatch{
        pattern: pattern.clone(),
        input: input.clone(),
        what,
        expected,
        got,
    };

    let ast = rx_syntax::parse(&pattern)
        .map_err(|e| mismatch("parse", "a valid pattern".into(), e.to_string()))?;
    let machine = Machine::build_one(&pattern, |_| false)
        .map_err(|e| mismatch("build", "a machine".into(), e.to_string()))?;

    let expected = reference::full_match(&ast, &input);
    let got = machine.full_match(&input);
    if expected != got {
        return Err(mismatch("full match", expected.to_string(), got.to_string()));
    }

    let expected = reference::find_all(&ast, &input);
    let got: Vec<(usize, String)> = machine.find_all(&input).into_iter()
        .map(|m| (m.offset, m.text))
        .collect();
    if expected != got {
        return Err(mismatch("find all", format!("{:?}", expected), format!("{:?}", got)));
    }

    Ok(())
}

fn run(iterations: usize) -> Result<(), Mismatch> {
    let patterns = RandomPatternGenerator::with_depth_and_charset(3, ALPHABET);
    let inputs = RandomStringGenerator::with_len_and_charset(0..12, ALPHABET);
    for i in 0..iterations {
        check_once(&patterns, &inputs)?;
        if (i + 1) % 1000 == 0 {
            info!("{} cases passed", i + 1);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rnd::seed_from_system_time);
    let iterations = args.next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);

    rnd::set_seed(seed);
    println!("seed: {}", rnd::current_seed());

    match run(iterations) {
        Ok(()) => println!("{} cases passed", iterations),
        Err(mismatch) => {
            println!("{}", mismatch);
            println!("rerun with seed {}", rnd::current_seed());
            std::process::exit(1);
        },
    }
}
