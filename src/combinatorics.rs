//! Permutations and combinations of code points.
//!
//! All generators work by recursive reduction: pick the code point at some position, solve the
//! problem for the sequence with that position removed, and prefix the picked code point to every
//! partial result. Positions are visited in ascending decode order at every level, which fixes the
//! order of the output. Callers compare outputs against this order, so it must not change.
//!
//! Output sizes grow factorially with the input length. No limit is imposed.

use crate::prelude::*;

/// Prefixes `c` to each string in `tails`, appending the results to `out`.
fn prefix_all(c: char, tails: Vec<String>, out: &mut Vec<String>) {
    out.extend(tails.into_iter().map(|tail| {
        let mut s = String::with_capacity(c.len_utf8() + tail.len());
        s.push(c);
        s.push_str(&tail);
        s
    }));
}

/// Collects the `depth`-th level of a bounded permutation recursion.
///
/// When `depth` reaches `k`, each code point is a complete result by itself. If it never does, as
/// happens for `k == 0` or `k` past the length, this produces every full permutation.
fn pick_from(runes: &Runes, k: usize, depth: usize) -> Vec<String> {
    if runes.len() <= 1 {
        return vec![runes.to_string()];
    }

    let depth = depth + 1;
    let mut result = Vec::new();
    for (i, &c) in runes.iter().enumerate() {
        if depth == k {
            result.push(c.to_string());
        } else {
            prefix_all(c, pick_from(&runes.remove_at(i), k, depth), &mut result);
        }
    }
    result
}

impl Runes {
    /// All orderings of the sequence.
    ///
    /// A sequence of length at most 1 is its only permutation. Otherwise, for each position in
    /// ascending order, its code point is prefixed to every permutation of the remaining ones.
    /// Repeated code points are not merged: there are always `n!` results.
    #[must_use]
    pub fn permutations(&self) -> Vec<String> {
        if self.len() <= 1 {
            return vec![self.to_string()];
        }

        let mut result = Vec::new();
        for (i, &c) in self.iter().enumerate() {
            prefix_all(c, self.remove_at(i).permutations(), &mut result);
        }
        result
    }

    /// All ordered selections of `k` positions (k-permutations).
    ///
    /// A sequence of length at most 1 yields itself, whatever `k` is. If `k` is zero or exceeds the
    /// length, no selection is ever complete early and the result equals [`Runes::permutations`].
    #[must_use]
    pub fn pick(&self, k: usize) -> Vec<String> {
        pick_from(self, k, 0)
    }

    /// All unordered selections of `k` positions, in canonical form.
    ///
    /// If the sequence has at most `k` code points, it is returned whole and unsorted. Otherwise
    /// this is [`dedup_canonical`] applied to [`Runes::pick`].
    #[must_use]
    pub fn combinations(&self, k: usize) -> Vec<String> {
        if self.len() <= k {
            return vec![self.to_string()];
        }

        dedup_canonical(self.pick(k))
    }
}

/// All orderings of the code points in `text`. See [`Runes::permutations`].
///
/// ```
/// assert_eq!(
///     runecomb::permutations("abc"),
///     ["abc", "acb", "bac", "bca", "cab", "cba"]
/// );
/// ```
#[must_use]
pub fn permutations(text: &str) -> Vec<String> {
    let runes = Runes::decode(text);
    let result = runes.permutations();
    log::debug!("{} permutations of {} code points", result.len(), runes.len());
    result
}

/// All ordered selections of `k` code points from `text`. See [`Runes::pick`].
#[must_use]
pub fn pick(text: &str, k: usize) -> Vec<String> {
    let runes = Runes::decode(text);
    let result = runes.pick(k);
    log::debug!("picked {} of {k} from {} code points", result.len(), runes.len());
    result
}

/// All unordered selections of `k` code points from `text`. See [`Runes::combinations`].
///
/// ```
/// assert_eq!(runecomb::combinations("abc", 2), ["ab", "ac", "bc"]);
/// ```
#[must_use]
pub fn combinations(text: &str, k: usize) -> Vec<String> {
    let runes = Runes::decode(text);
    let result = runes.combinations(k);
    log::debug!("{} combinations of {k} from {} code points", result.len(), runes.len());
    result
}

/// Deduplicates strings containing the same multiset of code points.
///
/// Each string is replaced by its canonical form, i.e. its code points in ascending order. Only the
/// first occurrence of each canonical form is kept, in the order they're first seen. Applying this
/// twice is the same as applying it once.
pub fn dedup_canonical<I, S>(strings: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    let mut uniques = Vec::new();
    for s in strings {
        let canonical = Runes::decode(s.as_ref()).sorted().to_string();
        if seen.insert(canonical.clone()) {
            uniques.push(canonical);
        }
    }
    uniques
}

/// Tests for the generators.
#[cfg(test)]
mod combinatorics {
    use super::*;

    #[test]
    fn permutations() {
        #[rustfmt::skip]
        let cases: &[(&str, &[&str])] = &[
            ("", &[""]),
            ("a", &["a"]),
            ("ab", &["ab", "ba"]),
            ("ba", &["ba", "ab"]),
            ("abc", &["abc", "acb", "bac", "bca", "cab", "cba"]),
            ("abcd", &[
                "abcd", "abdc", "acbd", "acdb", "adbc", "adcb",
                "bacd", "badc", "bcad", "bcda", "bdac", "bdca",
                "cabd", "cadb", "cbad", "cbda", "cdab", "cdba",
                "dabc", "dacb", "dbac", "dbca", "dcab", "dcba",
            ]),
            ("猫咪", &["猫咪", "咪猫"]),
            ("aa", &["aa", "aa"]),
        ];

        for (text, expected) in cases {
            assert_eq!(&super::permutations(text), expected, "permutations of {text:?}");
        }
    }

    #[test]
    fn pick() {
        #[rustfmt::skip]
        let cases: &[(&str, usize, &[&str])] = &[
            ("a", 1, &["a"]),
            ("ab", 2, &["ab", "ba"]),
            ("ba", 2, &["ba", "ab"]),
            ("abc", 3, &["abc", "acb", "bac", "bca", "cab", "cba"]),
            ("abc", 1, &["a", "b", "c"]),
            ("abcd", 1, &["a", "b", "c", "d"]),
            ("abcd", 2, &[
                "ab", "ac", "ad",
                "ba", "bc", "bd",
                "ca", "cb", "cd",
                "da", "db", "dc",
            ]),
            ("Туч", 2, &["Ту", "Тч", "уТ", "уч", "чТ", "чу"]),
        ];

        for (text, k, expected) in cases {
            assert_eq!(&super::pick(text, *k), expected, "pick {k} from {text:?}");
        }
    }

    #[test]
    fn pick_boundaries() {
        // Short sequences yield themselves whatever `k` is.
        assert_eq!(super::pick("", 3), [""]);
        assert_eq!(super::pick("a", 0), ["a"]);
        assert_eq!(super::pick("a", 5), ["a"]);

        // A depth that's never reached yields every full permutation.
        assert_eq!(super::pick("abc", 0), super::permutations("abc"));
        assert_eq!(super::pick("abc", 4), super::permutations("abc"));
    }

    #[test]
    fn combinations() {
        assert_eq!(super::combinations("abc", 2), ["ab", "ac", "bc"]);
        assert_eq!(super::combinations("abc", 1), ["a", "b", "c"]);
        assert_eq!(super::combinations("cba", 2), ["bc", "ac", "ab"]);
        assert_eq!(
            super::combinations("abcd", 2),
            ["ab", "ac", "ad", "bc", "bd", "cd"]
        );
        assert_eq!(super::combinations("abcd", 3).len(), 4);
        assert_eq!(super::combinations("aab", 2), ["aa", "ab"]);
    }

    #[test]
    fn combinations_boundaries() {
        // The whole sequence is returned as is, without sorting.
        assert_eq!(super::combinations("cba", 3), ["cba"]);
        assert_eq!(super::combinations("cba", 7), ["cba"]);
        assert_eq!(super::combinations("", 0), [""]);

        // Zero goes through every permutation, which all share a canonical form.
        assert_eq!(super::combinations("cba", 0), ["abc"]);
    }

    #[test]
    fn dedup() {
        assert_eq!(dedup_canonical(["猫b", "b猫", "猫"]), ["b猫", "猫"]);
        assert_eq!(dedup_canonical(["ba", "ab", "c", "ba"]), ["ab", "c"]);
        assert_eq!(dedup_canonical(Vec::<String>::new()), Vec::<String>::new());
        assert_eq!(dedup_canonical([""]), [""]);
    }

    #[test]
    fn runes_methods() {
        let runes = Runes::from("猫b9");
        assert_eq!(runes.permutations(), super::permutations("猫b9"));
        assert_eq!(runes.pick(2), super::pick("猫b9", 2));
        assert_eq!(runes.combinations(2), ["b猫", "9猫", "9b"]);
    }
}
