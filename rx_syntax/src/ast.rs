/**
 * All of the regex syntax-tree (AST) data-structures.
 */

use std::fmt;
use rx_charset::Set;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Concatenation of at least two nodes.
    And(Vec<Node>),

    /// Alternation of at least two nodes.
    Or(Vec<Node>),

    /// Zero or more repetitions of the subnode.
    Star(Box<Node>),

    /// Exactly one character out of the set.
    Set(Set),

    /// The empty string.
    EmptyStr,
}

impl Node {
    pub fn literal(c: char) -> Self {
        Node::Set(Set::singleton(c))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::And(children) | Node::Or(children) => children,
            Node::Star(subnode) => std::slice::from_ref(subnode),
            Node::Set(_) | Node::EmptyStr => &[],
        }
    }

    fn label(&self) -> String {
        match self {
            Node::And(_) => "{and}".into(),
            Node::Or(_) => "{or}".into(),
            Node::Star(_) => "{star}".into(),
            Node::Set(set) => format!("{{{}:set}}", set),
            Node::EmptyStr => "{empty string}".into(),
        }
    }

    fn beautify(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        for child in self.children() {
            write!(f, "{}└─>", "   ".repeat(depth))?;
            child.beautify(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Prints a sideways view of the tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.beautify(f, 0)
    }
}

#[cfg(test)]
mod ast_tests {
use super::*;
use pretty_assertions::assert_eq;

#[test]
fn star_has_one_child() {
    let n = Node::Star(Box::new(Node::literal('a')));
    assert_eq!(n.children(), &[Node::literal('a')]);
}

#[test]
fn leaves_have_no_children() {
    assert!(Node::literal('a').children().is_empty());
    assert!(Node::EmptyStr.children().is_empty());
}

#[test]
fn sideways_view() {
    let n = Node::Or(vec![
        Node::And(vec![Node::literal('a'), Node::literal('b')]),
        Node::EmptyStr,
    ]);
    let expected = "{or}\n\
                    └─>{and}\n\
                    \x20  └─>{\"a\":set}\n\
                    \x20  └─>{\"b\":set}\n\
                    └─>{empty string}\n";
    assert_eq!(n.to_string(), expected);
}
}
