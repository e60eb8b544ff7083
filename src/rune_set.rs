//! Sets of code points [`RuneSet`].

use crate::prelude::*;
use std::hash::{Hash, Hasher};

/// Number of code points covered by the bitmap.
const ASCII: usize = 0x80;

/// A set of code points.
///
/// ASCII code points live in a bitmap, everything else in an ordered tree. Since every non-ASCII
/// code point is larger than every ASCII one, iterating the bitmap and then the tree yields the
/// elements in ascending order.
#[derive(Clone)]
pub struct RuneSet {
    /// Membership bits for `U+0000..U+0080`.
    ascii: BitArray<[u64; 2]>,
    /// All other members.
    other: BTreeSet<char>,
}

// -------------------- Basic traits -------------------- //

impl Default for RuneSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RuneSet {
    fn eq(&self, other: &Self) -> bool {
        self.ascii.as_raw_slice() == other.ascii.as_raw_slice() && self.other == other.other
    }
}

impl Eq for RuneSet {}

impl Hash for RuneSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ascii.as_raw_slice().hash(state);
        self.other.hash(state);
    }
}

impl FromIterator<char> for RuneSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<char> for RuneSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

/// The set of code points occurring in some text.
impl From<&str> for RuneSet {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl Debug for RuneSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes the members in ascending order, as a string.
impl Display for RuneSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for c in self.iter() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

// -------------------- Set methods -------------------- //

impl RuneSet {
    /// Initializes an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ascii: BitArray::new([0; 2]),
            other: BTreeSet::new(),
        }
    }

    /// Adds a code point. Returns whether it was not already present.
    pub fn insert(&mut self, c: char) -> bool {
        let idx = c as usize;
        if idx < ASCII {
            !self.ascii.replace(idx, true)
        } else {
            self.other.insert(c)
        }
    }

    /// Whether the code point is a member.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        let idx = c as usize;
        if idx < ASCII {
            self.ascii[idx]
        } else {
            self.other.contains(&c)
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ascii.count_ones() + self.other.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ascii.not_any() && self.other.is_empty()
    }

    /// Iterate over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        // Every index in the bitmap is below 0x80, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        let ascii = self.ascii.iter_ones().map(|idx| char::from(idx as u8));
        ascii.chain(self.other.iter().copied())
    }
}
