//! Lists the distinct orderings of the words in a phrase, and the letter combinations of its
//! longest word.
//!
//! Run with `cargo run --example anagrams -- <phrase>`.

use runecomb::prelude::*;
use std::collections::BTreeSet;

fn main() {
    env_logger::init();

    let phrase = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let phrase = if phrase.is_empty() { "猫 eats fish".to_owned() } else { phrase };
    let words: Vec<&str> = phrase.split_whitespace().collect();

    // Repeated words give repeated orderings.
    let mut seen = BTreeSet::new();
    for order in permute_items(&words) {
        let sentence = order.join(" ");
        if seen.insert(sentence.clone()) {
            println!("{sentence}");
        }
    }

    if let Some(longest) = words.iter().max_by_key(|word| word.chars().count()) {
        let letters = first_occurrences(longest);
        for k in 1..=letters.chars().count() {
            println!("{k}: {}", combinations(&letters, k).join(" "));
        }
    }
}
