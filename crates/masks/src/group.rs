use alloc::{format, string::String};
use core::fmt;

use diffcond_syntax::{Assertion, Variable};

use crate::{BitMask, Constant};

// RELATION KIND
// ================================================================================================

/// The kind of condition a group of bits is subject to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    OneBits,
    ZeroBits,
    SameBits,
    DifferentBits,
}

impl RelationKind {
    /// Returns the suffix of the constant names generated for this kind of group.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::OneBits => "ONE_BITS",
            Self::ZeroBits => "ZERO_BITS",
            Self::SameBits => "SAME_BITS",
            Self::DifferentBits => "DIFFERENT_BITS",
        }
    }

    /// Returns true for the kinds relating a variable to a partner variable.
    pub const fn has_partner(self) -> bool {
        matches!(self, Self::SameBits | Self::DifferentBits)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// RELATION
// ================================================================================================

/// A [RelationKind] together with the partner variable, for the kinds that have one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    One,
    Zero,
    Same(Variable),
    Different(Variable),
}

impl Relation {
    pub fn kind(&self) -> RelationKind {
        match self {
            Self::One => RelationKind::OneBits,
            Self::Zero => RelationKind::ZeroBits,
            Self::Same(_) => RelationKind::SameBits,
            Self::Different(_) => RelationKind::DifferentBits,
        }
    }

    pub fn partner(&self) -> Option<&Variable> {
        match self {
            Self::One | Self::Zero => None,
            Self::Same(partner) | Self::Different(partner) => Some(partner),
        }
    }
}

// GROUP KEY
// ================================================================================================

/// Identifies the group an assertion is folded into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub variable: Variable,
    pub relation: Relation,
}

impl GroupKey {
    pub fn new(variable: Variable, relation: Relation) -> Self {
        Self { variable, relation }
    }

    /// Returns the key of the group `assertion` belongs to.
    pub fn of(assertion: &Assertion) -> Self {
        let relation = match assertion {
            Assertion::Fixed { value: true, .. } => Relation::One,
            Assertion::Fixed { value: false, .. } => Relation::Zero,
            Assertion::Equal { other, .. } => Relation::Same(other.clone()),
            Assertion::ShiftedEqual { other, .. } => Relation::Different(other.clone()),
        };
        Self::new(assertion.variable().clone(), relation)
    }

    #[inline]
    pub fn kind(&self) -> RelationKind {
        self.relation.kind()
    }

    #[inline]
    pub fn partner(&self) -> Option<&Variable> {
        self.relation.partner()
    }

    /// Returns the name of the constant generated for this group, e.g. `D1_A1_SAME_BITS`.
    pub fn name(&self) -> String {
        let variable = self.variable.to_constant_case();
        match self.partner() {
            None => format!("{variable}_{}", self.kind().suffix()),
            Some(partner) => {
                format!("{variable}_{}_{}", partner.to_constant_case(), self.kind().suffix())
            },
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

// MASK GROUP
// ================================================================================================

/// A group of bits of one variable, all subject to the same relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskGroup {
    key: GroupKey,
    mask: BitMask,
}

impl MaskGroup {
    pub fn new(key: GroupKey, mask: BitMask) -> Self {
        Self { key, mask }
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn mask(&self) -> BitMask {
        self.mask
    }

    pub fn name(&self) -> String {
        self.key.name()
    }

    pub fn to_constant(&self) -> Constant {
        Constant::new(self.name(), self.mask)
    }

    /// Returns the bits of this group violated by the values `lookup` assigns to the group's
    /// variable and partner.
    ///
    /// Returns `None` if `lookup` has no value for one of them.
    pub fn violated_bits<F>(&self, lookup: F) -> Option<BitMask>
    where
        F: Fn(&Variable) -> Option<u32>,
    {
        let value = lookup(&self.key.variable)?;
        let violated = match &self.key.relation {
            Relation::One => !value,
            Relation::Zero => value,
            Relation::Same(partner) => value ^ lookup(partner)?,
            Relation::Different(partner) => !(value ^ lookup(partner)?),
        };
        Some(self.mask & BitMask::new(violated))
    }

    /// Returns true if the values `lookup` assigns satisfy every bit of this group, or `None` if
    /// a value is missing.
    pub fn holds<F>(&self, lookup: F) -> Option<bool>
    where
        F: Fn(&Variable) -> Option<u32>,
    {
        self.violated_bits(lookup).map(BitMask::is_empty)
    }

    /// Returns `value` modified so that it satisfies this group, given the value of the partner
    /// variable for relations that have one.
    ///
    /// Returns `None` if the group has a partner and `partner` is `None`.
    pub fn enforce(&self, value: u32, partner: Option<u32>) -> Option<u32> {
        match self.key.relation {
            Relation::One => Some(self.mask.apply_ones(value)),
            Relation::Zero => Some(self.mask.apply_zeros(value)),
            Relation::Same(_) => partner.map(|partner| self.mask.apply_same(value, partner)),
            Relation::Different(_) => {
                partner.map(|partner| self.mask.apply_different(value, partner))
            },
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MaskGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut group = serializer.serialize_struct("MaskGroup", 5)?;
        group.serialize_field("name", &self.name())?;
        group.serialize_field("variable", &self.key.variable)?;
        group.serialize_field("kind", &self.key.kind())?;
        group.serialize_field("partner", &self.key.partner())?;
        group.serialize_field("mask", &self.mask)?;
        group.end()
    }
}
