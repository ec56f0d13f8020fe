//! The typed representation of a parsed condition table.
//!
//! Parsing produces a flat list of [Assertion]s, one per clause. The intermediate [Operand] type is
//! the classification of a clause's right-hand side and borrows from the source text.
mod assertion;
mod bit;
mod operand;
mod variable;

pub use self::{assertion::Assertion, bit::BitNumber, operand::Operand, variable::Variable};
