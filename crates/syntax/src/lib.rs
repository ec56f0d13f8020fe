//! Parsing of per-bit differential condition tables.
//!
//! A condition table is a sequence of named blocks, each holding comma-separated clauses of the
//! form `<variable>,<bit> = <rhs>`, where the right-hand side is either a literal bit (`0`/`1`) or
//! a reference to the same bit of another variable, optionally followed by a `+ 1` carry marker:
//!
//! ```text
//! d1,2 = 0, d1,7 = a1,7, d1,12 = 1, b6,32 = c6,32 + 1
//! ```
//!
//! This crate turns such text into a list of typed [Assertion]s. Grouping the assertions into
//! bitmasks is the job of `diffcond-masks`.
#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod ast;
mod errors;
mod parser;
#[cfg(test)]
mod tests;

pub use miette::{self, Diagnostic, Report};

pub use self::{
    ast::{Assertion, BitNumber, Operand, Variable},
    errors::{BlockError, ClauseError},
    parser::{Clauses, parse_block, parse_clause, parse_operand},
};
