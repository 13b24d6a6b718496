use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Total order over single characters used to arrange sibling nodes.
pub trait CharOrder {
    fn compare(&self, a: char, b: char) -> Ordering;

    /// Whether `c` has a place in this order at all.
    fn admits(&self, _c: char) -> bool {
        true
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl CharOrder for NaturalOrder {
    fn compare(&self, a: char, b: char) -> Ordering {
        a.cmp(&b)
    }
}

/// Order defined by the position of each character in a supplied alphabet string.
#[derive(Debug, Clone)]
pub struct Alphabet {
    ranks: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(alphabet: &str) -> Result<Self> {
        let mut ranks = HashMap::new();
        for (rank, c) in alphabet.chars().enumerate() {
            if ranks.insert(c, rank).is_some() {
                return Err(Error::DuplicateCharacter(c));
            }
        }

        Ok(Self { ranks })
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl CharOrder for Alphabet {
    fn compare(&self, a: char, b: char) -> Ordering {
        // Characters outside the alphabet never reach a tree, see PrefixTree::insert.
        match (self.ranks.get(&a), self.ranks.get(&b)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(&b),
        }
    }

    fn admits(&self, c: char) -> bool {
        self.ranks.contains_key(&c)
    }
}
