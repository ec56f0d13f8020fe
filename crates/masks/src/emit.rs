use alloc::string::String;
use core::fmt::{self, Write};

use crate::BitMask;

// CONSTANT
// ================================================================================================

/// A named mask, rendered as a Rust constant declaration:
///
/// ```text
/// const D1_A1_SAME_BITS: u32 = 0x701F10C0;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Constant {
    pub name: String,
    pub value: BitMask,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: BitMask) -> Self {
        Self { name: name.into(), value }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const {}: u32 = {};", self.name, self.value)
    }
}

/// Renders `constants` one per line, in order, with a trailing newline.
pub fn render<'a, I>(constants: I) -> String
where
    I: IntoIterator<Item = &'a Constant>,
{
    let mut output = String::new();
    for constant in constants {
        // writing to a `String` cannot fail
        let _ = writeln!(output, "{constant}");
    }
    output
}
