//! Linear scans over the code points of some text.

use crate::prelude::*;

/// Number of occurrences of each code point.
pub type FrequencyTable = BTreeMap<char, usize>;

/// Counts the occurrences of each code point in `text`.
#[must_use]
pub fn frequency(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for c in text.chars() {
        *table.entry(c).or_insert(0) += 1;
    }
    table
}

/// Keeps each code point of `text` once, in the order they first appear.
#[must_use]
pub fn first_occurrences(text: &str) -> String {
    let mut seen = RuneSet::new();
    text.chars().filter(|&c| seen.insert(c)).collect()
}

/// Keeps only the code points of `text` that belong to `allowed`, preserving their order and
/// multiplicity.
#[must_use]
pub fn exclusive(text: &str, allowed: &RuneSet) -> String {
    text.chars().filter(|&c| allowed.contains(c)).collect()
}

/// Removes every code point that immediately repeats anywhere in `text`.
///
/// All copies of such a code point are removed, not just the repeats, so `aaabccd` becomes `bd`.
#[must_use]
pub fn collapse_adjacent(text: &str) -> String {
    let runes = Runes::decode(text);
    if runes.len() < 2 {
        return text.to_owned();
    }

    let repeated: RuneSet = runes
        .as_slice()
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[1])
        .collect();
    runes.into_iter().filter(|&c| !repeated.contains(c)).collect()
}

/// The code points of `text` in ascending order.
#[must_use]
pub fn sorted(text: &str) -> String {
    Runes::decode(text).sorted().to_string()
}

/// Tests for the text scans.
#[cfg(test)]
mod text {
    use super::*;

    #[test]
    fn frequency() {
        let table = super::frequency("猫ab猫a猫");
        assert_eq!(table.len(), 3);
        assert_eq!(table[&'猫'], 3);
        assert_eq!(table[&'a'], 2);
        assert_eq!(table[&'b'], 1);
        assert!(super::frequency("").is_empty());
    }

    #[test]
    fn first_occurrences() {
        #[rustfmt::skip]
        let cases = [
            ("", ""), ("a", "a"), ("aaa", "a"), ("abcabc", "abc"),
            ("cbacba", "cba"), ("猫b猫9ч9", "猫b9ч"),
        ];

        for (text, expected) in cases {
            assert_eq!(super::first_occurrences(text), expected, "set of {text:?}");
        }
    }

    #[test]
    fn exclusive() {
        let allowed = RuneSet::from("a猫");
        assert_eq!(super::exclusive("abc猫a猫ч", &allowed), "a猫a猫");
        assert_eq!(super::exclusive("bcd", &allowed), "");
        assert_eq!(super::exclusive("", &allowed), "");
        assert_eq!(super::exclusive("abc", &RuneSet::new()), "");
    }

    #[test]
    fn collapse_adjacent() {
        #[rustfmt::skip]
        let cases = [
            ("", ""), ("a", "a"), ("aa", ""), ("ab", "ab"), ("aaabccd", "bd"),
            ("abca", "abca"), ("abba", "aa"), ("猫猫9ч", "9ч"), ("aba", "aba"),
        ];

        for (text, expected) in cases {
            assert_eq!(super::collapse_adjacent(text), expected, "collapse of {text:?}");
        }
    }

    #[test]
    fn sorted() {
        assert_eq!(super::sorted("cba"), "abc");
        assert_eq!(super::sorted("猫9b"), "9b猫");
        assert_eq!(super::sorted(""), "");
    }
}
