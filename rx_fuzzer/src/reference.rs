/**
 * A slow but obviously correct backtracking matcher over the syntax tree, the
 * machine is checked against it.
 */

use std::collections::BTreeSet;
use rx_syntax::Node;

/// Every position the node can stop at when matching from `from`.
pub fn ends(node: &Node, input: &[char], from: usize) -> BTreeSet<usize> {
    let mut result = BTreeSet::new();
    match node {
        Node::Set(set) => {
            if from < input.len() && set.contains(input[from]) {
                result.insert(from + 1);
            }
        },

        Node::EmptyStr => {
            result.insert(from);
        },

        Node::And(children) => {
            result.insert(from);
            for child in children {
                result = result.iter()
                    .flat_map(|p| ends(child, input, *p))
                    .collect();
            }
        },

        Node::Or(children) => {
            for child in children {
                result.extend(ends(child, input, from));
            }
        },

        Node::Star(subnode) => {
            result.insert(from);
            let mut stk = vec![from];
            while let Some(p) = stk.pop() {
                for e in ends(subnode, input, p) {
                    if result.insert(e) {
                        stk.push(e);
                    }
                }
            }
        },
    }
    result
}

pub fn full_match(node: &Node, input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    ends(node, &chars, 0).contains(&chars.len())
}

/// Leftmost-longest matches as `(offset, text)` pairs.
pub fn find_all(node: &Node, input: &str) -> Vec<(usize, String)> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        match ends(node, &chars, pos).iter().next_back() {
            Some(&end) => {
                result.push((pos, chars[pos..end].iter().collect()));
                pos = std::cmp::max(end, pos + 1);
            },
            None => pos += 1,
        }
    }
    result
}
