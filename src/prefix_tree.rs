use crate::error::{Error, Result};
use crate::order::{CharOrder, NaturalOrder};

#[derive(Debug, Default)]
struct Node {
    complete: bool,
    // Kept sorted under the owning tree's order.
    children: Vec<(char, Node)>,
}

/// Plain prefix tree of unweighted keys whose siblings are arranged by a pluggable
/// character order.
#[derive(Debug)]
pub struct PrefixTree<O = NaturalOrder> {
    root: Node,
    order: O,
    len: usize,
}

impl PrefixTree<NaturalOrder> {
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl Default for PrefixTree<NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: CharOrder> PrefixTree<O> {
    pub fn with_order(order: O) -> Self {
        Self {
            root: Node::default(),
            order,
            len: 0,
        }
    }

    /// Inserts `key`. Inserting a key twice is a no-op.
    pub fn insert(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if let Some(c) = key.chars().find(|c| !self.order.admits(*c)) {
            return Err(Error::UnknownCharacter(c));
        }

        let order = &self.order;
        let mut node = &mut self.root;
        for c in key.chars() {
            let at = match node
                .children
                .binary_search_by(|(existing, _)| order.compare(*existing, c))
            {
                Ok(at) => at,
                Err(at) => {
                    node.children.insert(at, (c, Node::default()));
                    at
                }
            };
            node = &mut node.children[at].1;
        }

        if !node.complete {
            node.complete = true;
            self.len += 1;
        }
        Ok(())
    }

    /// With `exact_match` the whole key must have been inserted, otherwise being a
    /// prefix of some inserted key is enough.
    pub fn find(&self, key: &str, exact_match: bool) -> Result<bool> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let found = self.node(key).map_or(false, |node| !exact_match || node.complete);
        Ok(found)
    }

    /// Iterates over every key, siblings in tree order and each key before its
    /// extensions.
    pub fn list_all_in_order(&self) -> Keys<'_> {
        Keys {
            stack: vec![(&self.root, String::new())],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, key: &str) -> Option<&Node> {
        key.chars().try_fold(&self.root, |node, c| {
            if !self.order.admits(c) {
                return None;
            }
            node.children
                .binary_search_by(|(existing, _)| self.order.compare(*existing, c))
                .ok()
                .map(|at| &node.children[at].1)
        })
    }
}

/// Pre-order walk over the keys of a [`PrefixTree`].
pub struct Keys<'a> {
    stack: Vec<(&'a Node, String)>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, path)) = self.stack.pop() {
            for (c, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(*c);
                self.stack.push((child, child_path));
            }

            if node.complete {
                return Some(path);
            }
        }
        None
    }
}
