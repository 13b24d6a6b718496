use serde::{Deserialize, Serialize};
use std::vec::Vec;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Completions {
    pub prefix: String,
    pub matches: Vec<Match>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub term: String,
    pub weight: f64,
}

impl Completions {
    pub fn new(prefix: &str, matches: Vec<(String, f64)>) -> Self {
        Self {
            prefix: prefix.to_string(),
            matches: matches
                .into_iter()
                .map(|(term, weight)| Match { term, weight })
                .collect(),
        }
    }
}
