use alloc::{string::String, sync::Arc};
use core::{borrow::Borrow, fmt};

// VARIABLE
// ================================================================================================

/// The name of a 32-bit state variable, e.g. `a1`, `d12` or `φ34`.
///
/// Names are opaque keys: they are compared as written, and no attempt is made to split them into
/// a register letter and a step index.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Creates a variable from its name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name of this variable as written in the table.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name in the case used for generated constants, i.e. `a1` becomes `A1`.
    pub fn to_constant_case(&self) -> String {
        self.0.to_uppercase()
    }

    /// Returns true if `c` can start a variable reference on the right-hand side of a clause.
    ///
    /// Any alphabetic character qualifies, which covers both the state registers (`a`..`d`) and
    /// the Greek letters used to name intermediate values (`φ`).
    #[inline]
    pub fn is_prefix_char(c: char) -> bool {
        c.is_alphabetic()
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Variable {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Variable {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}
