/**
 * Merge-style operations on ascending, duplicate-free rune slices.
 */

use std::cmp::Ordering;

/// Sorts and removes duplicates, producing the canonical item order.
pub(crate) fn normalize(mut items: Vec<char>) -> Vec<char> {
    items.sort_unstable();
    items.dedup();
    items
}

/// Every rune that is in either slice.
pub(crate) fn union(a: &[char], b: &[char]) -> Vec<char> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            },
            Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            },
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            },
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

/// Every rune that is in both slices.
pub(crate) fn intersection(a: &[char], b: &[char]) -> Vec<char> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            },
        }
    }
    result
}

/// Every rune of `a` that is not in `b`.
pub(crate) fn difference(a: &[char], b: &[char]) -> Vec<char> {
    let mut result = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        if j >= b.len() {
            result.extend_from_slice(&a[i..]);
            break;
        }
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            },
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            },
        }
    }
    result
}

#[cfg(test)]
mod sorted_tests {
use super::*;

fn v(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn normalize_sorts_and_dedups() {
    assert_eq!(normalize(v("cabbac")), v("abc"));
}

#[test]
fn union_merges() {
    assert_eq!(union(&v("ace"), &v("bcd")), v("abcde"));
    assert_eq!(union(&v(""), &v("xy")), v("xy"));
}

#[test]
fn intersection_keeps_common() {
    assert_eq!(intersection(&v("abcdef"), &v("bdfh")), v("bdf"));
    assert_eq!(intersection(&v("abc"), &v("xyz")), v(""));
}

#[test]
fn difference_removes_common() {
    assert_eq!(difference(&v("abcdef"), &v("bdfh")), v("ace"));
    assert_eq!(difference(&v("abc"), &v("")), v("abc"));
    assert_eq!(difference(&v(""), &v("abc")), v(""));
}
}
