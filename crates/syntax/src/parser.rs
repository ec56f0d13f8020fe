use alloc::{string::String, vec::Vec};

use crate::{Assertion, BitNumber, BlockError, ClauseError, Operand, Variable};

/// Spellings of the carry marker accepted after a reference, tried in order.
const CARRY_SUFFIXES: [&str; 3] = [" + 1", " +1", "+1"];

// BLOCKS
// ================================================================================================

/// Parses every clause of the block labeled `label`, in order.
///
/// Whitespace, including line breaks, is insignificant and is removed before the block is split
/// into clauses. The first invalid clause aborts parsing; the returned error names the block and
/// the clause.
///
/// The label is only used for error reporting. Composite labels such as `"a6 - b6"` are accepted
/// as-is: the variables a clause constrains are always the ones written in the clause itself.
pub fn parse_block(label: &str, text: &str) -> Result<Vec<Assertion>, BlockError> {
    let normalized = text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let assertions = Clauses::new(&normalized)
        .map(parse_clause)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| BlockError::new(label, error))?;

    if assertions.is_empty() {
        log::warn!("condition block '{label}' contains no clauses");
    } else {
        log::debug!("parsed {} clauses from condition block '{label}'", assertions.len());
    }

    Ok(assertions)
}

/// An iterator over the clauses of a block, with whitespace already removed.
///
/// Commas both separate clauses and appear inside them (`a1,7=b1,7`), so a clause is delimited by
/// the grammar rather than by the commas alone: it spans the variable and the `<bit>=<rhs>` piece,
/// plus one more piece when the right-hand side is a reference. A trailing comma is ignored.
///
/// The iterator never fails; clauses it cannot delimit are yielded as-is and rejected by
/// [parse_clause].
#[derive(Debug, Clone)]
pub struct Clauses<'a> {
    remaining: &'a str,
}

impl<'a> Clauses<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { remaining: text }
    }
}

impl<'a> Iterator for Clauses<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.remaining;
        if text.is_empty() {
            return None;
        }

        let mut end = piece_end(text, 0);
        if end < text.len() {
            let start = end + 1;
            end = piece_end(text, start);
            let references_variable = text[start..end]
                .split_once('=')
                .is_some_and(|(_, rhs)| rhs.starts_with(Variable::is_prefix_char));
            if references_variable && end < text.len() {
                end = piece_end(text, end + 1);
            }
        }

        self.remaining = text.get(end + 1..).unwrap_or_default();
        Some(&text[..end])
    }
}

/// Returns the index of the first comma at or after `start`, or the length of `text`.
fn piece_end(text: &str, start: usize) -> usize {
    text[start..].find(',').map_or(text.len(), |offset| start + offset)
}

// CLAUSES
// ================================================================================================

/// Parses a single clause of the form `<variable>,<bit> = <rhs>`.
///
/// The clause must contain exactly one `=`, and its left-hand side exactly one `,`. When the
/// right-hand side references another variable, its bit token must be identical to the one on the
/// left-hand side.
pub fn parse_clause(text: &str) -> Result<Assertion, ClauseError> {
    let clause = text.trim();
    let malformed = || ClauseError::MalformedClause { clause: clause.into() };

    let (lhs, rhs) = clause.split_once('=').ok_or_else(malformed)?;
    if rhs.contains('=') {
        return Err(malformed());
    }
    let (variable, bit) = lhs.split_once(',').ok_or_else(malformed)?;
    let (variable, bit) = (variable.trim(), bit.trim());
    if variable.is_empty() || bit.is_empty() || bit.contains(',') {
        return Err(malformed());
    }

    let assertion = match classify(clause, rhs.trim())? {
        Operand::Literal(value) => Assertion::Fixed {
            variable: variable.into(),
            bit: parse_bit(clause, bit)?,
            value,
        },
        Operand::Reference { variable: other, bit: other_bit, carry } => {
            if other_bit != bit {
                return Err(ClauseError::BitMismatch {
                    clause: clause.into(),
                    left: bit.into(),
                    right: other_bit.into(),
                    carry,
                });
            }
            let bit = parse_bit(clause, bit)?;
            let (variable, other) = (Variable::from(variable), Variable::from(other));
            if carry {
                Assertion::ShiftedEqual { variable, bit, other }
            } else {
                Assertion::Equal { variable, bit, other }
            }
        },
    };

    log::trace!("'{clause}' => {assertion:?}");
    Ok(assertion)
}

// OPERANDS
// ================================================================================================

/// Classifies the right-hand side of a clause.
///
/// In order of priority, the operand is the literal `0`, the literal `1`, or a reference
/// `<variable>,<bit>` starting with an alphabetic character and optionally followed by a carry
/// marker (`+ 1`, `+1` or ` +1`). Anything else is an unrecognized constraint.
pub fn parse_operand(rhs: &str) -> Result<Operand<'_>, ClauseError> {
    let rhs = rhs.trim();
    classify(rhs, rhs)
}

fn classify<'a>(clause: &str, rhs: &'a str) -> Result<Operand<'a>, ClauseError> {
    match rhs {
        "0" => return Ok(Operand::Literal(false)),
        "1" => return Ok(Operand::Literal(true)),
        _ => (),
    }

    if !rhs.starts_with(Variable::is_prefix_char) {
        return Err(ClauseError::UnrecognizedConstraint { clause: clause.into() });
    }

    let (reference, carry) = CARRY_SUFFIXES
        .iter()
        .find_map(|suffix| rhs.strip_suffix(suffix))
        .map_or((rhs, false), |reference| (reference, true));

    let malformed = || ClauseError::MalformedClause { clause: clause.into() };
    let (variable, bit) = reference.split_once(',').ok_or_else(malformed)?;
    let (variable, bit) = (variable.trim(), bit.trim());
    if bit.is_empty() || bit.contains(',') {
        return Err(malformed());
    }

    Ok(Operand::Reference { variable, bit, carry })
}

/// Converts a textual bit token into a [BitNumber].
fn parse_bit(clause: &str, token: &str) -> Result<BitNumber, ClauseError> {
    let invalid = || ClauseError::InvalidBitNumber { clause: clause.into(), token: token.into() };
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let bit = token.parse::<u32>().map_err(|_| invalid())?;
    BitNumber::new(bit).ok_or_else(|| ClauseError::BitOutOfRange { clause: clause.into(), bit })
}
