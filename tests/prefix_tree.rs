use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prefix_complete::{Alphabet, PrefixTree};

fn random_words(rng: &mut StdRng, letters: &[char], count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=6);
            (0..len)
                .map(|_| letters[rng.gen_range(0..letters.len())])
                .collect()
        })
        .collect()
}

#[test]
fn test_natural_listing_is_lexicographic() {
    let mut rng = StdRng::seed_from_u64(5);
    let letters: Vec<char> = "xyzab".chars().collect();
    let words = random_words(&mut rng, &letters, 300);

    let mut tree = PrefixTree::new();
    for word in &words {
        tree.insert(word).unwrap();
    }

    let mut expected = words.clone();
    expected.sort();
    expected.dedup();

    assert_eq!(tree.len(), expected.len());
    assert_eq!(tree.list_all_in_order().collect::<Vec<_>>(), expected);
}

#[test]
fn test_alphabet_listing_follows_ranks() {
    let mut rng = StdRng::seed_from_u64(9);
    let alphabet = "qwerty";
    let letters: Vec<char> = alphabet.chars().collect();
    let words = random_words(&mut rng, &letters, 300);

    let mut tree = PrefixTree::with_order(Alphabet::new(alphabet).unwrap());
    for word in &words {
        tree.insert(word).unwrap();
    }

    let rank = |word: &String| -> Vec<usize> {
        word.chars()
            .map(|c| alphabet.find(c).unwrap())
            .collect()
    };
    let mut expected = words.clone();
    expected.sort_by_key(rank);
    expected.dedup();

    assert_eq!(tree.list_all_in_order().collect::<Vec<_>>(), expected);
}

#[test]
fn test_every_prefix_is_found() {
    let mut rng = StdRng::seed_from_u64(1);
    let letters: Vec<char> = "abc".chars().collect();
    let words = random_words(&mut rng, &letters, 50);

    let mut tree = PrefixTree::new();
    for word in &words {
        tree.insert(word).unwrap();
    }

    for word in &words {
        assert!(tree.find(word, true).unwrap());
        for end in 1..word.len() {
            assert!(tree.find(&word[..end], false).unwrap());
        }
        assert!(!tree.find(&format!("{}d", word), false).unwrap());
    }
}
