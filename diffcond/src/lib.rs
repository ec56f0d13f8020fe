#![doc = include_str!("../README.md")]

extern crate alloc;

mod table;

// EXPORTS
// ================================================================================================

pub use diffcond_masks::{self as masks, BitMask, Constant, MaskGroup, MaskSet, render};
pub use diffcond_syntax::{
    self as syntax, Assertion, BlockError, ClauseError, miette as diagnostics, parse_block,
};

pub use self::table::{ConditionTable, TableError};

// PIPELINE
// ================================================================================================

/// Parses every block of `table`, in table order, stopping at the first invalid clause.
pub fn parse_table(table: &ConditionTable) -> Result<Vec<Assertion>, BlockError> {
    let mut assertions = Vec::new();
    for (label, text) in table.iter() {
        assertions.extend(parse_block(label, text)?);
    }
    Ok(assertions)
}

/// Parses `table` and folds its assertions into masks.
#[tracing::instrument("fold_table", skip_all, fields(blocks = table.len()))]
pub fn fold_table(table: &ConditionTable) -> Result<MaskSet, BlockError> {
    let assertions = parse_table(table)?;
    let masks = assertions.iter().collect::<MaskSet>();
    tracing::debug!(assertions = assertions.len(), groups = masks.len(), "folded condition table");

    for contradiction in masks.contradictions() {
        tracing::warn!(
            variable = %contradiction.variable,
            bits = %contradiction.bits,
            "bits of '{}' are required to be both 0 and 1",
            contradiction.variable
        );
    }

    Ok(masks)
}

/// Returns the named mask constants of `table`, in output order.
///
/// Nothing is returned if any block of the table is invalid.
pub fn generate(table: &ConditionTable) -> Result<Vec<Constant>, BlockError> {
    fold_table(table).map(|masks| masks.constants())
}
