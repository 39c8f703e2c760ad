mod common;

use std::io::{self, Read};
use std::sync::{Arc, Mutex};
use pretty_assertions::assert_eq;
use rx_machine::{Error, Machine};
use common::{scan_all, strings};

#[test]
fn scan_table() {
    let table: &[(&str, &str, &[&str])] = &[
        ("a", "abAbaa", &["a", "a", "a"]),
        ("(a)", "a", &["a"]),
        ("abc", "aaaaaabcaaabac", &["abc"]),
        (r"\s\t\n", "aaaa\ta\n aaa \t\n", &[" \t\n"]),
        ("a|b|c", "azzzbczzzbza", &["a", "b", "c", "b", "a"]),
        ("ab|ac", "abacacbaaab", &["ab", "ac", "ac", "ab"]),
        ("a*", "aaaabc", &["aaaa", "", ""]),
        ("ab*", "aabbabaaa", &["a", "abb", "ab", "a", "a", "a"]),
        ("a*b*", "aabbabaaa", &["aabb", "ab", "aaa"]),
        ("a|b*", "aabbabaaa", &["a", "a", "bb", "a", "b", "a", "a", "a"]),
        ("(a|b)*|c", "acaacbbcbcc", &["a", "c", "aa", "c", "bb", "c", "b", "c", "c"]),
        ("[a-z]", "abcdZABC", &["a", "b", "c", "d"]),
        (r"[\t\n\s]", "aaaa\taaaa\n a a \n", &["\t", "\n", " ", " ", " ", "\n"]),
        ("[a-z]|[A-Z]", "aAbBcC", &["a", "A", "b", "B", "c", "C"]),
        ("[A-Z][a-z]*", "aAbBcC", &["Ab", "Bc", "C"]),
        (r"\s[a-z ]*", "  abc , abc a", &["  abc ", " abc a"]),
        ("(a)|(c)", "aaacc", &["a", "a", "a", "c", "c"]),
        ("a[^a-z]*", "aaaZZZ", &["a", "a", "aZZZ"]),
        ("a[a-z^]*", "aaaZZZ^^", &["aaa"]),
        (r"a|\e", "abbaab", &["a", "", "", "a", "a", ""]),
        ("a|[]", "abbaab", &["a", "a", "a"]),
        (r"[a-z]*\s\*", " *ab *baab", &[" *", "ab *"]),
        ("([A-Z]|[a-z])*", "AaBbCc_+,", &["AaBbCc", "", "", ""]),
        ("\u{FFFF}", "\u{FFFF}abc", &["\u{FFFF}"]),
        ("\u{FFFF}[\u{0000}-\u{0004}]", "\u{FFFF}\u{0003}abc", &["\u{FFFF}\u{0003}"]),
        ("\u{FFFF}\\s", "\u{FFFF} abc", &["\u{FFFF} "]),
    ];

    for (pattern, input, expected) in table {
        assert_eq!(scan_all(pattern, input), strings(expected), "pattern {:?} on {:?}", pattern, input);
    }
}

#[test]
fn find_all_agrees_with_scan() {
    let machine = Machine::build_one("(a|b)*|c", |_| false).unwrap();
    let found: Vec<String> = machine.find_all("acaacbbcbcc").into_iter().map(|m| m.text).collect();
    assert_eq!(found, scan_all("(a|b)*|c", "acaacbbcbcc"));
}

#[test]
fn scan_str_calls_actions() {
    let out = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&out);
    let machine = Machine::build_one("[0-9][0-9]*", move |m| {
        sink.lock().unwrap().push((m.text.clone(), m.offset));
        false
    }).unwrap();
    machine.scan_str("a12b345");
    assert_eq!(*out.lock().unwrap(), vec![("12".to_string(), 1), ("345".to_string(), 4)]);
}

#[test]
fn action_returning_true_stops_the_scan() {
    let out = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&out);
    let machine = Machine::build_one("a", move |m| {
        let mut out = sink.lock().unwrap();
        out.push(m.text.clone());
        out.len() == 2
    }).unwrap();
    machine.scan_str("aaaaa");
    assert_eq!(out.lock().unwrap().len(), 2);
}

#[test]
fn scanning_twice_gives_the_same_matches() {
    let first = scan_all("a[^a-z]*|b*", "aaZZbbxbaZ");
    let second = scan_all("a[^a-z]*|b*", "aaZZbbxbaZ");
    assert_eq!(first, second);

    let machine = Machine::build_one("a[^a-z]*|b*", |_| false).unwrap();
    assert_eq!(machine.find_all("aaZZbbxbaZ"), machine.find_all("aaZZbbxbaZ"));
}

/// Hands out its data, then fails.
struct FailingReader {
    data: Vec<u8>,
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        self.served = true;
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }
}

#[test]
fn read_failure_keeps_earlier_matches() {
    let out = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&out);
    let machine = Machine::build_one("ab*", move |m| {
        sink.lock().unwrap().push(m.text.clone());
        false
    }).unwrap();

    let result = machine.scan(FailingReader{ data: b"xabbxab".to_vec(), served: false });
    match result {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::Other),
        other => panic!("expected a read error, got {:?}", other),
    }
    assert_eq!(*out.lock().unwrap(), strings(&["abb", "ab"]));
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let machine = Machine::build_one("a", |_| false).unwrap();
    let result = machine.scan(&[b'a', 0xFF, b'a'][..]);
    match result {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
        other => panic!("expected invalid data, got {:?}", other),
    }
}
