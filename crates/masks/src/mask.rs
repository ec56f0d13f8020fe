use core::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

use diffcond_syntax::BitNumber;

// BIT MASK
// ================================================================================================

/// A set of bit positions within a 32-bit word; bit `b` of the condition table is stored at
/// shift `b - 1`.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitMask(u32);

impl BitMask {
    pub const EMPTY: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns a mask containing only `bit`.
    pub const fn from_bit(bit: BitNumber) -> Self {
        Self(bit.mask())
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of bits in the mask.
    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, bit: BitNumber) -> bool {
        self.0 & bit.mask() != 0
    }

    /// Adds `bit` to the mask, returning false if it was already present.
    pub fn insert(&mut self, bit: BitNumber) -> bool {
        let present = self.contains(bit);
        self.0 |= bit.mask();
        !present
    }

    /// Returns the bits of the mask, from least to most significant.
    pub fn bits(self) -> impl Iterator<Item = BitNumber> {
        BitNumber::all().filter(move |bit| self.contains(*bit))
    }

    // CONDITION EVALUATION
    // --------------------------------------------------------------------------------------------

    /// Returns `value` with every masked bit set to 1.
    pub const fn apply_ones(self, value: u32) -> u32 {
        value | self.0
    }

    /// Returns `value` with every masked bit cleared.
    pub const fn apply_zeros(self, value: u32) -> u32 {
        value & !self.0
    }

    /// Returns `value` with every masked bit copied from `partner`.
    pub const fn apply_same(self, value: u32, partner: u32) -> u32 {
        (value & !self.0) | (partner & self.0)
    }

    /// Returns `value` with every masked bit set to the complement of the bit in `partner`.
    pub const fn apply_different(self, value: u32, partner: u32) -> u32 {
        (value & !self.0) | (!partner & self.0)
    }
}

impl FromIterator<BitNumber> for BitMask {
    fn from_iter<I: IntoIterator<Item = BitNumber>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |mask, bit| mask | Self::from_bit(bit))
    }
}

impl BitOr for BitMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BitMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<BitMask> for u32 {
    fn from(mask: BitMask) -> Self {
        mask.0
    }
}

impl fmt::Debug for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitMask({self})")
    }
}

/// Formats the mask as eight uppercase, zero-padded hex digits: `0x0000F00D`.
impl fmt::Display for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
