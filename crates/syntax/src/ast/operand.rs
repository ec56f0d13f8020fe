use core::fmt;

// OPERAND
// ================================================================================================

/// The classified right-hand side of a clause.
///
/// The bit token of a reference is kept as written: the parser compares it textually against the
/// left-hand side before converting either to a [super::BitNumber].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    /// A literal bit value, `0` or `1`.
    Literal(bool),
    /// A bit of another variable, e.g. `a1,7`, or `c6,32 + 1` when `carry` is set.
    Reference {
        variable: &'a str,
        bit: &'a str,
        /// Set when the reference carried a `+ 1` suffix, i.e. the bits must differ.
        carry: bool,
    },
}

impl Operand<'_> {
    /// Returns true if this operand refers to another variable.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", u8::from(*value)),
            Self::Reference { variable, bit, carry: false } => write!(f, "{variable},{bit}"),
            Self::Reference { variable, bit, carry: true } => write!(f, "{variable},{bit} + 1"),
        }
    }
}
