use core::fmt;

// BIT NUMBER
// ================================================================================================

/// A bit position within a 32-bit word, numbered from 1 (least significant) to 32 (most
/// significant), as in the published condition tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BitNumber(u8);

impl BitNumber {
    /// The least significant bit.
    pub const MIN: Self = Self(1);
    /// The most significant bit.
    pub const MAX: Self = Self(32);

    /// Returns the bit with the given 1-based number, or `None` if it is outside `1..=32`.
    pub const fn new(bit: u32) -> Option<Self> {
        if bit >= Self::MIN.0 as u32 && bit <= Self::MAX.0 as u32 {
            Some(Self(bit as u8))
        } else {
            None
        }
    }

    /// Returns the bit at the given 0-based shift amount, or `None` if it is outside `0..32`.
    pub const fn from_index(index: u32) -> Option<Self> {
        match index.checked_add(1) {
            Some(bit) => Self::new(bit),
            None => None,
        }
    }

    /// Returns the 1-based bit number.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Returns the 0-based shift amount of this bit.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0 as u32 - 1
    }

    /// Returns a word with only this bit set.
    #[inline]
    pub const fn mask(self) -> u32 {
        1 << self.index()
    }

    /// Returns an iterator over all 32 bits, from least to most significant.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl fmt::Display for BitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
