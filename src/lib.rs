//! In-memory prefix structures for completion and ordering of words.
//!
//! [`WeightedTernaryTree`] answers "the k heaviest keys starting with this prefix"
//! without walking every matching key when the weights allow pruning.
//! [`PrefixTree`] stores unweighted keys and lists them under any [`CharOrder`].
//!
//! Neither structure locks internally. Build a tree fully, then share it read-only.

pub mod error;
pub mod order;
pub mod prefix_tree;
pub mod prque;
pub mod ternary_tree;

pub use error::{Error, Result};
pub use order::{Alphabet, CharOrder, NaturalOrder};
pub use prefix_tree::PrefixTree;
pub use ternary_tree::WeightedTernaryTree;
