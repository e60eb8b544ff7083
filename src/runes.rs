//! Code-point sequences [`Runes`] and their positional editing primitives.

use crate::prelude::*;

/// Error raised when editing a [`Runes`] sequence. This can only happen when the replacement value
/// is not a Unicode scalar value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, DeriveDisplay)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuneError {
    /// The value is a surrogate half or lies beyond `U+10FFFF`.
    #[display(fmt = "invalid code point {:#x}", _0)]
    InvalidCodePoint(u32),
}

impl std::error::Error for RuneError {}

/// An ordered sequence of Unicode scalar values, decoded from some text.
///
/// Positions always count code points in decode order, never bytes. Short sequences are stored
/// inline.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, IntoIterator)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runes(#[into_iterator(owned, ref)] SmallVec<char>);

// -------------------- Basic traits -------------------- //

impl From<&str> for Runes {
    fn from(text: &str) -> Self {
        Self::decode(text)
    }
}

impl From<Runes> for String {
    fn from(runes: Runes) -> Self {
        runes.to_string()
    }
}

impl FromIterator<char> for Runes {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Decoding text never fails.
impl FromStr for Runes {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s))
    }
}

impl AsRef<[char]> for Runes {
    fn as_ref(&self) -> &[char] {
        self.as_slice()
    }
}

impl PartialEq<str> for Runes {
    fn eq(&self, other: &str) -> bool {
        self.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for Runes {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Reassembles the text the sequence was decoded from.
impl Display for Runes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for &c in self {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl Debug for Runes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.to_string())
    }
}

// -------------------- Primitives -------------------- //

impl Runes {
    /// Decodes text into its code points.
    #[must_use]
    pub fn decode(text: &str) -> Self {
        text.chars().collect()
    }

    /// The empty sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// The sequence as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The code point at some position, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.0.get(position).copied()
    }

    /// Iterate over the code points in decode order.
    pub fn iter(&self) -> std::slice::Iter<char> {
        self.0.iter()
    }

    /// Returns a copy of the sequence without the code point at `position`.
    ///
    /// Positions past the end leave the sequence unchanged.
    #[must_use]
    pub fn remove_at(&self, position: usize) -> Self {
        if position >= self.len() {
            return self.clone();
        }

        let mut runes = SmallVec::with_capacity(self.len() - 1);
        runes.extend_from_slice(&self.0[..position]);
        runes.extend_from_slice(&self.0[(position + 1)..]);
        Self(runes)
    }

    /// Returns a copy of the sequence with the code point at `position` replaced by `code_point`.
    ///
    /// Positions past the end leave the sequence unchanged and are not an error.
    ///
    /// ## Errors
    ///
    /// Returns [`RuneError::InvalidCodePoint`] if `code_point` is not a Unicode scalar value. This
    /// is checked before the position.
    pub fn replace_at(&self, position: usize, code_point: u32) -> Result<Self, RuneError> {
        let c = char::from_u32(code_point).ok_or(RuneError::InvalidCodePoint(code_point))?;
        let mut runes = self.clone();
        if let Some(slot) = runes.0.get_mut(position) {
            *slot = c;
        }
        Ok(runes)
    }

    /// The canonical form of the sequence: its code points in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut runes = self.clone();
        runes.0.sort_unstable();
        runes
    }
}
