//! Crate prelude.

// The actual prelude.
pub use crate::{
    combinatorics::{combinations, dedup_canonical, permutations, pick},
    rune_set::RuneSet,
    runes::{RuneError, Runes},
    text::{collapse_adjacent, exclusive, first_occurrences, frequency, sorted, FrequencyTable},
    utils::{permute_items, remove_nth},
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::{Display as DeriveDisplay, IntoIterator};
pub(crate) use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    str::FromStr,
};
