use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};

use color_eyre::Result;
use color_eyre::eyre::{Context as _, bail, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use tracing::{debug, info, warn};

use prefix_complete::{Alphabet, PrefixTree, WeightedTernaryTree};

use crate::completion::Completions;
use crate::config::{Command, Config};

pub enum Output {
    Sorted(Vec<String>),
    Completed(Vec<Completions>),
}

pub struct Report {
    pub output: Output,
    pub took: Duration,
}

pub fn run(config: &Config) -> Result<Report> {
    let now = Instant::now();

    let output = match &config.command {
        Command::Sort => {
            let input = read_stdin()?;
            Output::Sorted(sort_words(&input)?)
        }
        Command::Complete { terms, k, prefixes } => {
            let tree = load_terms_file(config, terms)?.tree;
            let prefixes = if prefixes.is_empty() {
                read_stdin()?.lines().map(str::to_string).collect()
            } else {
                prefixes.clone()
            };
            let k = usize::try_from(*k).wrap_err("-k does not fit in memory")?;
            Output::Completed(complete(&tree, &prefixes, k)?)
        }
    };

    Ok(Report {
        output,
        took: now.elapsed(),
    })
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .wrap_err("reading stdin")?;
    Ok(input)
}

/// First line is the alphabet, every following line a word. Words the alphabet
/// cannot order are skipped.
pub fn sort_words(input: &str) -> Result<Vec<String>> {
    let mut lines = input.lines();
    let alphabet = lines.next().ok_or_else(|| eyre!("no alphabet is given"))?;
    let alphabet = Alphabet::new(alphabet).wrap_err("invalid alphabet")?;
    let mut tree = PrefixTree::with_order(alphabet);

    let mut words_count = 0;
    for (i, word) in lines.enumerate() {
        words_count += 1;
        if let Err(err) = tree.insert(word) {
            warn!(line = i + 2, %err, "skipping word");
        }
    }

    if words_count == 0 {
        bail!("no words are given");
    }
    debug!(words = words_count, distinct = tree.len(), "sorting words");

    Ok(tree.list_all_in_order().collect())
}

fn load_terms_file(config: &Config, path: &Path) -> Result<Terms> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read terms file {}", path.display()))?;

    let bar = if config.progress {
        eprintln!("Loading {}", path.display());
        ProgressBar::new(raw.lines().count() as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "[{elapsed_precise}] {wide_bar} {pos}/{len} ({percent}%) [ETA: {eta_precise}]",
            )
            .wrap_err("failed to set progress bar style")?,
    );

    let terms = load_terms(&raw, &bar)?;
    bar.finish();
    debug!(path = %path.display(), declared = ?terms.declared, "read terms file");

    Ok(terms)
}

pub struct Terms {
    pub tree: WeightedTernaryTree,
    /// Count given on the first non-blank line, if that line holds only a number.
    pub declared: Option<usize>,
}

/// Builds a tree from an optional count line followed by `<weight> <term>` lines.
/// Malformed or repeated terms are logged and skipped.
pub fn load_terms(input: &str, bar: &ProgressBar) -> Result<Terms> {
    let count_line = Regex::new(r"^\s*(\d+)\s*$")?;
    let term_line = Regex::new(r"^\s*(\S+)\s+(\S.*?)\s*$")?;

    let mut tree = WeightedTernaryTree::new();
    let mut declared = None;
    let mut first_line = true;

    for (i, line) in input.lines().enumerate() {
        if i % 10_000 == 0 && i > 0 {
            bar.inc(10_000);
        }
        if line.trim().is_empty() {
            continue;
        }

        if first_line {
            first_line = false;
            if let Some(captures) = count_line.captures(line) {
                declared = captures[1].parse::<usize>().ok();
                continue;
            }
        }

        let captures = match term_line.captures(line) {
            Some(captures) => captures,
            None => {
                warn!(line = i + 1, "skipping line without a weight and a term");
                continue;
            }
        };
        let weight: f64 = match captures[1].parse() {
            Ok(weight) => weight,
            Err(_) => {
                warn!(
                    line = i + 1,
                    weight = &captures[1],
                    "skipping term with unreadable weight"
                );
                continue;
            }
        };
        if let Err(err) = tree.insert(&captures[2], weight) {
            warn!(line = i + 1, %err, "skipping term");
        }
    }

    if let Some(declared) = declared {
        if declared != tree.len() {
            warn!(
                declared,
                loaded = tree.len(),
                "term count differs from the declared one"
            );
        }
    }
    info!(terms = tree.len(), "loaded terms");

    Ok(Terms { tree, declared })
}

pub fn complete(
    tree: &WeightedTernaryTree,
    prefixes: &[String],
    k: usize,
) -> Result<Vec<Completions>> {
    prefixes
        .iter()
        .map(|prefix| {
            let matches = tree
                .top_matches_weighted(prefix, k)
                .wrap_err_with(|| format!("completing `{}`", prefix))?;
            Ok(Completions::new(prefix, matches))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_words_in_alphabet_order() {
        let input = "zyxwvutsrqponmlkjihgfedcba\nhello\nbye\nhelloworld\nhe\nbye\n";

        let words = sort_words(input).unwrap();
        assert_eq!(words, vec!["he", "hello", "helloworld", "bye"]);
    }

    #[test]
    fn test_sort_words_skips_unknown_characters() {
        let input = "abc\ncab\nbad\n\nab\n";

        let words = sort_words(input).unwrap();
        assert_eq!(words, vec!["ab", "cab"]);
    }

    #[test]
    fn test_sort_words_requires_input() {
        assert!(sort_words("").is_err());
        assert!(sort_words("abc\n").is_err());
        assert!(sort_words("aba\nab\n").is_err());
    }

    #[test]
    fn test_load_terms() {
        let input = "4\n  5.0\tcat\n3\tcar\n8.0 cart\n1 hot dog\n";

        let terms = load_terms(input, &ProgressBar::hidden()).unwrap();
        assert_eq!(terms.declared, Some(4));
        let tree = terms.tree;
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get("cart"), 8.0);
        assert_eq!(tree.get("hot dog"), 1.0);
    }

    #[test]
    fn test_load_terms_skips_bad_lines() {
        let input = "heavy cat\n5 cat\n-1 dog\n0 mouse\n7 cat\njustoneword\n";

        let tree = load_terms(input, &ProgressBar::hidden()).unwrap().tree;
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("cat"), 5.0);
    }

    #[test]
    fn test_load_terms_numeric_term_after_first_entry() {
        let input = "2 fox\n42\n";

        let terms = load_terms(input, &ProgressBar::hidden()).unwrap();
        assert_eq!(terms.declared, None);
        assert_eq!(terms.tree.len(), 1);
        assert!(!terms.tree.contains("42"));
    }

    #[test]
    fn test_load_terms_count_only_on_first_line() {
        let input = "garbage x y\n42\n5 cat\n";

        let terms = load_terms(input, &ProgressBar::hidden()).unwrap();
        assert_eq!(terms.declared, None);
        assert_eq!(terms.tree.len(), 1);
        assert_eq!(terms.tree.get("cat"), 5.0);
    }

    #[test]
    fn test_load_terms_count_after_blank_lines() {
        let input = "\n  \n 2\n5 cat\n3 dog\n";

        let terms = load_terms(input, &ProgressBar::hidden()).unwrap();
        assert_eq!(terms.declared, Some(2));
        assert_eq!(terms.tree.len(), 2);
    }

    #[test]
    fn test_complete() {
        let input = "5 cat\n3 car\n8 cart\n1 dog\n";
        let tree = load_terms(input, &ProgressBar::hidden()).unwrap().tree;
        let prefixes = vec!["ca".to_string(), "z".to_string()];

        let completions = complete(&tree, &prefixes, 2).unwrap();
        assert_eq!(completions.len(), 2);
        assert_eq!(completions[0].matches[0].term, "cart");
        assert_eq!(completions[0].matches[1].weight, 5.0);
        assert!(completions[1].matches.is_empty());
        assert!(complete(&tree, &prefixes, 0).is_err());
    }
}
