/**
 * String generation strategies.
 */

use std::ops::Range;
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random string from a charset.
 */

pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(self.len.clone(), &self.charset)
    }
}

/**
 * Random, always well-formed pattern over a charset.
 */

pub struct RandomPatternGenerator {
    depth: usize,
    charset: Vec<char>,
}

impl RandomPatternGenerator {
    pub fn with_depth_and_charset(depth: usize, charset: &str) -> Self {
        Self{ depth, charset: charset.chars().collect() }
    }

    fn expr(&self, depth: usize) -> String {
        let branches = if chance(30) { rand_range(2..4) } else { 1 };
        let mut alternatives = vec![self.string(depth)];
        for _ in 1..branches {
            // Occasionally a hollow alternative
            if chance(10) {
                alternatives.push(String::new());
            }
            else {
                alternatives.push(self.string(depth));
            }
        }
        alternatives.join("|")
    }

    fn string(&self, depth: usize) -> String {
        (0..rand_range(1..4)).map(|_| self.rep(depth)).collect()
    }

    fn rep(&self, depth: usize) -> String {
        let term = self.term(depth);
        if chance(25) { term + "*" } else { term }
    }

    fn term(&self, depth: usize) -> String {
        let kinds = if depth > 0 { 5 } else { 4 };
        match rand_range(0..kinds) {
            0 | 1 => sample(&self.charset).to_string(),
            2 => self.class(),
            3 => r"\e".to_string(),
            _ => format!("({})", self.expr(depth - 1)),
        }
    }

    fn class(&self) -> String {
        let mut res = String::from("[");
        if chance(30) {
            res.push('^');
        }
        for _ in 0..rand_range(0..3) {
            res.push(*sample(&self.charset));
            if chance(40) {
                res.push('-');
                res.push(*sample(&self.charset));
            }
        }
        res.push(']');
        res
    }
}

impl StringGenStrategy for RandomPatternGenerator {
    fn generate(&self) -> String {
        self.expr(self.depth)
    }
}
