//! Folding of per-bit differential conditions into 32-bit masks.
//!
//! The input is the list of [Assertion]s produced by `diffcond-syntax`. Each assertion belongs to
//! exactly one group, keyed by the constrained variable, the kind of relation and, for relations
//! between two variables, the partner variable:
//!
//! | assertion          | group                          | constant name           |
//! |--------------------|--------------------------------|-------------------------|
//! | `v,b = 1`          | `(v, OneBits)`                 | `V_ONE_BITS`            |
//! | `v,b = 0`          | `(v, ZeroBits)`                | `V_ZERO_BITS`           |
//! | `v,b = w,b`        | `(v, SameBits, w)`             | `V_W_SAME_BITS`         |
//! | `v,b = w,b + 1`    | `(v, DifferentBits, w)`        | `V_W_DIFFERENT_BITS`    |
//!
//! Every group is folded into a single [BitMask] in which bit `b - 1` is set for each asserted
//! bit `b`. The resulting [MaskSet] can be rendered as Rust constants, or evaluated against
//! concrete state values.
#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod emit;
mod group;
mod mask;
mod set;

pub use diffcond_syntax::{Assertion, BitNumber, Variable};

pub use self::{
    emit::{Constant, render},
    group::{GroupKey, MaskGroup, Relation, RelationKind},
    mask::BitMask,
    set::{Contradiction, MaskSet, Violation},
};
