use core::fmt;

use super::{BitNumber, Variable};

// ASSERTION
// ================================================================================================

/// A single per-bit condition on a state variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Assertion {
    /// `v,b = 0` or `v,b = 1`: bit `b` of `v` has a fixed value.
    Fixed {
        variable: Variable,
        bit: BitNumber,
        value: bool,
    },
    /// `v,b = w,b`: bit `b` of `v` equals bit `b` of `w`.
    Equal {
        variable: Variable,
        bit: BitNumber,
        other: Variable,
    },
    /// `v,b = w,b + 1`: bit `b` of `v` differs from bit `b` of `w`.
    ///
    /// The `+ 1` marks a carry into that position, not an arithmetic addition, so the relation is
    /// treated as "the bits are different".
    ShiftedEqual {
        variable: Variable,
        bit: BitNumber,
        other: Variable,
    },
}

impl Assertion {
    /// Returns the variable this assertion constrains.
    pub fn variable(&self) -> &Variable {
        match self {
            Self::Fixed { variable, .. }
            | Self::Equal { variable, .. }
            | Self::ShiftedEqual { variable, .. } => variable,
        }
    }

    /// Returns the constrained bit.
    pub fn bit(&self) -> BitNumber {
        match self {
            Self::Fixed { bit, .. } | Self::Equal { bit, .. } | Self::ShiftedEqual { bit, .. } => {
                *bit
            },
        }
    }

    /// Returns the variable this assertion relates to, if it is a relation between two variables.
    pub fn partner(&self) -> Option<&Variable> {
        match self {
            Self::Fixed { .. } => None,
            Self::Equal { other, .. } | Self::ShiftedEqual { other, .. } => Some(other),
        }
    }
}

/// Renders the assertion in table syntax, e.g. `b6,32 = c6,32 + 1`.
impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { variable, bit, value } => {
                write!(f, "{variable},{bit} = {}", u8::from(*value))
            },
            Self::Equal { variable, bit, other } => write!(f, "{variable},{bit} = {other},{bit}"),
            Self::ShiftedEqual { variable, bit, other } => {
                write!(f, "{variable},{bit} = {other},{bit} + 1")
            },
        }
    }
}
