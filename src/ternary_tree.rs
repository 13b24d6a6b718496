use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::prque::{BoundedQueue, PriorityQueue};

type NodeId = usize;

#[derive(Debug)]
struct Node {
    c: char,
    left: Option<NodeId>,
    mid: Option<NodeId>,
    right: Option<NodeId>,
    /// Set only where a complete key ends.
    weight: Option<f64>,
    /// Largest weight of any key ending in this node's subtree, itself included.
    max_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Branch {
    Left,
    Mid,
    Right,
}

impl Node {
    fn link(&mut self, branch: Branch) -> &mut Option<NodeId> {
        match branch {
            Branch::Left => &mut self.left,
            Branch::Mid => &mut self.mid,
            Branch::Right => &mut self.right,
        }
    }

    fn new(c: char, max_weight: f64) -> Self {
        Self {
            c,
            left: None,
            mid: None,
            right: None,
            weight: None,
            max_weight,
        }
    }
}

#[derive(Debug, Default)]
struct Search {
    matches: Vec<(String, f64)>,
    /// Frontier nodes whose children were looked at.
    expanded: usize,
}

/// Ternary search tree mapping keys to strictly positive weights.
///
/// Nodes live in an arena and refer to each other by index. Every node caches the
/// maximum weight found beneath it, which lets [`WeightedTernaryTree::top_matches`]
/// skip subtrees that cannot improve its current result.
#[derive(Debug, Default)]
pub struct WeightedTernaryTree {
    nodes: Vec<Node>,
    len: usize,
}

impl WeightedTernaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` with `weight`. Keys are immutable once present, so inserting an
    /// existing key is an error rather than an update.
    pub fn insert(&mut self, key: &str, weight: f64) -> Result<()> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        // Also catches NaN.
        if !(weight > 0.0) {
            return Err(Error::NonPositiveWeight(weight));
        }
        if self.contains(key) {
            return Err(Error::DuplicateKey(key.to_string()));
        }

        let chars: Vec<char> = key.chars().collect();
        let last = chars.len() - 1;
        if self.nodes.is_empty() {
            self.nodes.push(Node::new(chars[0], weight));
        }

        let mut id = 0;
        let mut d = 0;
        loop {
            let node = &mut self.nodes[id];
            if weight > node.max_weight {
                node.max_weight = weight;
            }

            let branch = match chars[d].cmp(&node.c) {
                Ordering::Less => Branch::Left,
                Ordering::Greater => Branch::Right,
                Ordering::Equal if d < last => {
                    d += 1;
                    Branch::Mid
                }
                Ordering::Equal => {
                    node.weight = Some(weight);
                    break;
                }
            };

            let link = *node.link(branch);
            id = match link {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new(chars[d], weight));
                    *self.nodes[id].link(branch) = Some(next);
                    next
                }
            };
        }

        self.len += 1;
        Ok(())
    }

    /// Weight of `key`, or `0.0` when it is empty or absent.
    pub fn get(&self, key: &str) -> f64 {
        self.weight(key).unwrap_or(0.0)
    }

    pub fn weight(&self, key: &str) -> Option<f64> {
        self.find_node(key).and_then(|id| self.nodes[id].weight)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.weight(key).is_some()
    }

    /// Up to `k` keys starting with `prefix`, heaviest first.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Result<Vec<String>> {
        let matches = self.top_matches_weighted(prefix, k)?;
        Ok(matches.into_iter().map(|(key, _)| key).collect())
    }

    /// Same as [`top_matches`](Self::top_matches), paired with each key's weight.
    ///
    /// Best-first branch and bound: the frontier is explored in descending order of
    /// subtree maximum, and a subtree is dropped as soon as its maximum cannot beat
    /// the weakest of the `k` keys retained so far. Equal weights keep the key that
    /// was reached first.
    pub fn top_matches_weighted(&self, prefix: &str, k: usize) -> Result<Vec<(String, f64)>> {
        self.search(prefix, k).map(|search| search.matches)
    }

    fn search(&self, prefix: &str, k: usize) -> Result<Search> {
        if k == 0 {
            return Err(Error::ZeroLimit);
        }
        if self.nodes.is_empty() {
            return Ok(Search::default());
        }

        let start = if prefix.is_empty() {
            Some(0)
        } else {
            self.find_node(prefix)
        };
        let start = match start {
            Some(start) => start,
            None => return Ok(Search::default()),
        };

        let mut expanded = 0;
        let mut best: BoundedQueue<String> = BoundedQueue::new(k);
        let mut frontier: PriorityQueue<(NodeId, String)> = PriorityQueue::new();

        let start_node = &self.nodes[start];
        if prefix.is_empty() {
            let path = start_node.c.to_string();
            if let Some(weight) = start_node.weight {
                best.offer(path.clone(), weight);
            }
            frontier.push((start, path), start_node.max_weight);
        } else {
            if let Some(weight) = start_node.weight {
                best.offer(prefix.to_string(), weight);
            }
            if let Some(mid) = start_node.mid {
                let mid_node = &self.nodes[mid];
                let mut path = prefix.to_string();
                path.push(mid_node.c);
                if let Some(weight) = mid_node.weight {
                    best.offer(path.clone(), weight);
                }
                frontier.push((mid, path), mid_node.max_weight);
            }
        }

        while let Some(((id, path), bound)) = frontier.pop() {
            // Everything still queued is bounded by `bound`.
            if !best.could_admit(bound) {
                break;
            }
            expanded += 1;

            let node = &self.nodes[id];
            let children = [
                (node.mid, Branch::Mid),
                (node.left, Branch::Left),
                (node.right, Branch::Right),
            ];
            for (child, branch) in children {
                let child = match child {
                    Some(child) => child,
                    None => continue,
                };
                let child_node = &self.nodes[child];

                let mut child_path = path.clone();
                if branch != Branch::Mid {
                    // Siblings sit at the same depth and differ in the last character.
                    child_path.pop();
                }
                child_path.push(child_node.c);

                if let Some(weight) = child_node.weight {
                    best.offer(child_path.clone(), weight);
                }
                if best.could_admit(child_node.max_weight) {
                    frontier.push((child, child_path), child_node.max_weight);
                }
            }
        }

        Ok(Search {
            matches: best.into_sorted_vec(),
            expanded,
        })
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node holding the last character of `key`.
    fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut chars = key.chars();
        let mut c = chars.next()?;
        let mut id = if self.nodes.is_empty() { None } else { Some(0) };

        while let Some(current) = id {
            let node = &self.nodes[current];
            id = match c.cmp(&node.c) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        node.mid
                    }
                    None => return Some(current),
                },
            };
        }
        None
    }
}
