/**
 * A set of runes with an optional negation, the label of every consuming
 * automaton transition.
 */

use std::fmt;
use crate::sorted;

/// Represents "one of these characters", or "any character except these" when
/// negated. The items are always sorted ascending and contain no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Set {
    items: Vec<char>,
    negated: bool,
}

/**
 * Constructing a set.
 */

impl Set {
    /// The set that matches nothing.
    pub fn empty() -> Self {
        Self{ items: Vec::new(), negated: false }
    }

    /// The set that matches every character.
    pub fn full() -> Self {
        Self{ items: Vec::new(), negated: true }
    }

    pub fn singleton(c: char) -> Self {
        Self{ items: vec![c], negated: false }
    }

    pub fn with_items<I>(items: I) -> Self where I : IntoIterator<Item = char> {
        Self{ items: sorted::normalize(items.into_iter().collect()), negated: false }
    }

    pub fn negated_with_items<I>(items: I) -> Self where I : IntoIterator<Item = char> {
        Self{ items: sorted::normalize(items.into_iter().collect()), negated: true }
    }

    /// Every character between the two bounds inclusive. Reversed bounds are
    /// swapped.
    pub fn range(from: char, to: char) -> Self {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        Self{ items: (lo..=hi).collect(), negated: false }
    }

    /// Flips the meaning of the set.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

/**
 * Info about a set.
 */

impl Set {
    pub fn items(&self) -> &[char] {
        &self.items
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// True if no character is in the set.
    pub fn is_empty(&self) -> bool {
        !self.negated && self.items.is_empty()
    }

    /// True if every character is in the set.
    pub fn is_full(&self) -> bool {
        self.negated && self.items.is_empty()
    }

    /// Checks if a character is a member of the set.
    pub fn contains(&self, c: char) -> bool {
        match (self.items.first(), self.items.last()) {
            (Some(&lo), Some(&hi)) if lo <= c && c <= hi => {
                self.items.binary_search(&c).is_ok() != self.negated
            },
            _ => self.negated,
        }
    }
}

/**
 * Set algebra. Every operation is a table over the signs of the two operands.
 */

impl Set {
    /// The characters present in both sets.
    pub fn intersect(&self, other: &Set) -> Set {
        match (self.negated, other.negated) {
            (false, false) => Set{ items: sorted::intersection(&self.items, &other.items), negated: false },
            (false, true) => Set{ items: sorted::difference(&self.items, &other.items), negated: false },
            (true, false) => Set{ items: sorted::difference(&other.items, &self.items), negated: false },
            (true, true) => Set{ items: sorted::union(&self.items, &other.items), negated: true },
        }
    }

    /// Removes every character of `other` from this set.
    pub fn exclude(&mut self, other: &Set) {
        let (items, negated) = match (self.negated, other.negated) {
            (false, false) => (sorted::difference(&self.items, &other.items), false),
            (false, true) => (sorted::intersection(&self.items, &other.items), false),
            // not(A) without B is not(A or B)
            (true, false) => (sorted::union(&self.items, &other.items), true),
            // not(A) without not(B) is B without A
            (true, true) => (sorted::difference(&other.items, &self.items), false),
        };
        self.items = items;
        self.negated = negated;
    }

    /// The characters present in either set.
    pub fn union(&self, other: &Set) -> Set {
        match (self.negated, other.negated) {
            (false, false) => Set{ items: sorted::union(&self.items, &other.items), negated: false },
            (false, true) => Set{ items: sorted::difference(&other.items, &self.items), negated: true },
            (true, false) => Set{ items: sorted::difference(&self.items, &other.items), negated: true },
            (true, true) => Set{ items: sorted::intersection(&self.items, &other.items), negated: true },
        }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "not")?;
        }
        write!(f, "{:?}", self.items.iter().collect::<String>())
    }
}
