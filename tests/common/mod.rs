use std::fmt::Display;

use fzr::ResultEntry;
use rand::rngs::StdRng;
use rand::{RngExt as _, SeedableRng};

/// Render results one per line as `score item`.
pub fn render<T: Display>(results: &[ResultEntry<'_, T>]) -> String {
    results
        .iter()
        .map(|entry| format!("{} {}", entry.score, entry.item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn runes(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Deterministic generator so failures can be reproduced.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x0f2f)
}

pub fn random_string(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

/// Whether `pattern` occurs in `text` in order, ignoring ASCII case.
pub fn is_subsequence(text: &str, pattern: &str) -> bool {
    let mut text = text.chars().map(|c| c.to_ascii_lowercase());
    pattern
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .all(|p| text.any(|c| c == p))
}

/// Snapshot of a search over `$items` with the given options.
#[macro_export]
macro_rules! find_snapshot {
    ($name:ident, $items:expr, $query:expr, $options:expr, @$snap:literal) => {
        #[test]
        fn $name() {
            let finder = fzr::Finder::with_options($items.to_vec(), $options);
            insta::assert_snapshot!(common::render(&finder.find($query)), @$snap);
        }
    };
}
