//! # Combinatorics over Unicode code points
//!
//! Permutations, k-permutations and combinations of the code points in some text, together with
//! the positional primitives they rely on and a few set-like scans. Everything operates on code
//! points ([`char`]), never on bytes, so text mixing code points of different UTF-8 widths is
//! handled correctly. No grapheme clustering is attempted.
//!
//! ```
//! use runecomb::prelude::*;
//!
//! assert_eq!(pick("abc", 2), ["ab", "ac", "ba", "bc", "ca", "cb"]);
//! assert_eq!(Runes::from("猫猫9ч").remove_at(2), "猫猫ч");
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod combinatorics;
pub mod prelude;
pub mod rune_set;
pub mod runes;
pub mod text;
pub mod utils;


pub use combinatorics::{combinations, dedup_canonical, permutations, pick};
pub use rune_set::RuneSet;
pub use runes::{RuneError, Runes};

/// Small vector, holding short sequences inline.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;
