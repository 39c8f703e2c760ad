#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use rx_machine::Machine;

/// Builds the pattern with an action recording every match, and scans the
/// input with it.
pub fn scan_all(pattern: &str, input: &str) -> Vec<String> {
    let out = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&out);
    let machine = Machine::build_one(pattern, move |m| {
        sink.lock().unwrap().push(m.text.clone());
        false
    }).unwrap();
    machine.scan(input.as_bytes()).unwrap();
    let found = out.lock().unwrap().clone();
    found
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
