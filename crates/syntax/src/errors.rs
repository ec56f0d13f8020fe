use alloc::{format, string::String, sync::Arc};

use miette::Diagnostic;

// CLAUSE ERROR
// ================================================================================================

/// An error raised while parsing a single clause.
///
/// Every variant carries the offending clause text, with whitespace removed when the clause came
/// from a block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ClauseError {
    #[error("malformed clause '{clause}'")]
    #[diagnostic(help("clauses have the form `<variable>,<bit> = <0 | 1 | variable,bit [+ 1]>`"))]
    MalformedClause { clause: String },
    #[error(
        "clause '{clause}' relates different bits: {left} and {right} (carry suffix: {carry})"
    )]
    #[diagnostic(help("both sides of a relation must refer to the same bit position"))]
    BitMismatch {
        clause: String,
        left: String,
        right: String,
        carry: bool,
    },
    #[error("clause '{clause}' is not a recognized constraint")]
    #[diagnostic(help("the right-hand side must be `0`, `1`, or a reference such as `a1,7`"))]
    UnrecognizedConstraint { clause: String },
    #[error("invalid bit number '{token}' in clause '{clause}'")]
    #[diagnostic(help("bit numbers are written as decimal integers"))]
    InvalidBitNumber { clause: String, token: String },
    #[error("bit number {bit} in clause '{clause}' is out of range")]
    #[diagnostic(help("bit numbers range from 1 (least significant) to 32 (most significant)"))]
    BitOutOfRange { clause: String, bit: u32 },
}

impl ClauseError {
    /// Returns the text of the clause that failed to parse.
    pub fn clause(&self) -> &str {
        match self {
            Self::MalformedClause { clause }
            | Self::BitMismatch { clause, .. }
            | Self::UnrecognizedConstraint { clause }
            | Self::InvalidBitNumber { clause, .. }
            | Self::BitOutOfRange { clause, .. } => clause,
        }
    }
}

// BLOCK ERROR
// ================================================================================================

/// A [ClauseError] together with the label of the block it was found in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("invalid condition block '{label}'")]
pub struct BlockError {
    label: Arc<str>,
    #[source]
    #[diagnostic_source]
    error: ClauseError,
}

impl BlockError {
    pub fn new(label: impl Into<Arc<str>>, error: ClauseError) -> Self {
        Self { label: label.into(), error }
    }

    /// Returns the label of the block containing the invalid clause.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the underlying clause error.
    pub fn error(&self) -> &ClauseError {
        &self.error
    }

    pub fn into_error(self) -> ClauseError {
        self.error
    }
}
