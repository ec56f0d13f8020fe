use alloc::{string::ToString, vec, vec::Vec};

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn init_logger() {
    let _ = env_logger::Builder::from_env("DIFFCOND_LOG").format_timestamp(None).try_init();
}

fn bit(n: u32) -> BitNumber {
    BitNumber::new(n).expect("bit number in range")
}

fn fixed(variable: &str, n: u32, value: bool) -> Assertion {
    Assertion::Fixed { variable: variable.into(), bit: bit(n), value }
}

// BIT NUMBERS
// ================================================================================================

#[test]
fn bit_numbers_are_one_based() {
    assert_eq!(BitNumber::new(0), None);
    assert_eq!(BitNumber::new(33), None);
    assert_eq!(bit(1).mask(), 0x0000_0001);
    assert_eq!(bit(32).mask(), 0x8000_0000);
    assert_eq!(BitNumber::from_index(31), Some(BitNumber::MAX));
    assert_eq!(BitNumber::from_index(32), None);
    assert_eq!(BitNumber::all().len(), 32);
}

// OPERANDS
// ================================================================================================

#[test]
fn literal_operands() {
    assert_eq!(parse_operand("0"), Ok(Operand::Literal(false)));
    assert_eq!(parse_operand(" 1 "), Ok(Operand::Literal(true)));
}

#[test]
fn carry_suffix_spellings_are_equivalent() {
    let expected = Operand::Reference { variable: "w", bit: "5", carry: true };
    assert_eq!(parse_operand("w,5 + 1"), Ok(expected));
    assert_eq!(parse_operand("w,5 +1"), Ok(expected));
    assert_eq!(parse_operand("w,5+1"), Ok(expected));
    assert_eq!(
        parse_operand("w,5"),
        Ok(Operand::Reference { variable: "w", bit: "5", carry: false })
    );
}

#[test]
fn greek_prefix_is_a_variable_reference() {
    assert_matches!(parse_operand("φ34,32"), Ok(Operand::Reference { variable: "φ34", .. }));
}

#[test]
fn unrecognized_operands_are_rejected() {
    assert_matches!(parse_operand("2"), Err(ClauseError::UnrecognizedConstraint { .. }));
    assert_matches!(parse_operand("01"), Err(ClauseError::UnrecognizedConstraint { .. }));
    assert_matches!(parse_operand("+1"), Err(ClauseError::UnrecognizedConstraint { .. }));
    assert_matches!(parse_operand(""), Err(ClauseError::UnrecognizedConstraint { .. }));
}

#[test]
fn reference_without_bit_is_malformed() {
    assert_matches!(parse_operand("w5"), Err(ClauseError::MalformedClause { .. }));
    assert_matches!(parse_operand("w,"), Err(ClauseError::MalformedClause { .. }));
    assert_matches!(parse_operand("w,5,6"), Err(ClauseError::MalformedClause { .. }));
}

// CLAUSES
// ================================================================================================

#[test]
fn fixed_clauses() {
    assert_eq!(parse_clause("a1,6 = 0"), Ok(fixed("a1", 6, false)));
    assert_eq!(parse_clause("a1,32=1"), Ok(fixed("a1", 32, true)));
}

#[test]
fn relation_clauses() {
    assert_eq!(
        parse_clause("d1,7 = a1,7"),
        Ok(Assertion::Equal { variable: "d1".into(), bit: bit(7), other: "a1".into() })
    );
    assert_eq!(
        parse_clause("b6,32 = c6,32 + 1"),
        Ok(Assertion::ShiftedEqual { variable: "b6".into(), bit: bit(32), other: "c6".into() })
    );
}

#[test]
fn mismatched_bits_are_rejected() {
    let error = parse_clause("v,5 = w,6").unwrap_err();
    assert_eq!(
        error,
        ClauseError::BitMismatch {
            clause: "v,5 = w,6".into(),
            left: "5".into(),
            right: "6".into(),
            carry: false,
        }
    );

    assert_matches!(
        parse_clause("v,5 = w,6 + 1"),
        Err(ClauseError::BitMismatch { carry: true, .. })
    );
}

#[test]
fn bit_tokens_are_compared_before_conversion() {
    assert_matches!(parse_clause("v,5 = w,05"), Err(ClauseError::BitMismatch { .. }));
}

#[test]
fn malformed_clauses_are_rejected() {
    for clause in ["a1,6", "a1 6 = 0", "a1,6 = 0 = 1", ",6 = 0", "a1, = 0", "a1,6,7 = 0"] {
        assert_matches!(
            parse_clause(clause),
            Err(ClauseError::MalformedClause { clause: ref text }) if text == clause.trim(),
            "clause: {clause}"
        );
    }
}

#[test]
fn bit_numbers_are_range_checked() {
    assert_matches!(parse_clause("a1,0 = 1"), Err(ClauseError::BitOutOfRange { bit: 0, .. }));
    assert_matches!(parse_clause("a1,33 = a2,33"), Err(ClauseError::BitOutOfRange { bit: 33, .. }));
    assert_matches!(parse_clause("a1,x = 1"), Err(ClauseError::InvalidBitNumber { .. }));
    assert_matches!(parse_clause("a1,-3 = 0"), Err(ClauseError::InvalidBitNumber { .. }));
}

#[test]
fn error_messages_name_the_clause() {
    let error = parse_clause("a1,6 = x").unwrap_err();
    assert_eq!(error.clause(), "a1,6 = x");
    assert_eq!(
        error.to_string(),
        "malformed clause 'a1,6 = x'",
        "a reference must carry a bit number"
    );
}

// BLOCKS
// ================================================================================================

#[test]
fn clause_boundaries_follow_the_grammar() {
    let clauses = Clauses::new("x,1=0,x,2=1,x,2=y,2,b6,32=c6,32+1,").collect::<Vec<_>>();
    assert_eq!(clauses, ["x,1=0", "x,2=1", "x,2=y,2", "b6,32=c6,32+1"]);
}

#[test]
fn blocks_ignore_whitespace_and_line_breaks() {
    init_logger();
    let text = "
d1,2 = 0, d1,7 = a1,7, d1,16 = 0,
d1,17 = a1,17 , d1,32 = 1
";
    let assertions = parse_block("d1", text).expect("valid block");
    assert_eq!(
        assertions,
        vec![
            fixed("d1", 2, false),
            Assertion::Equal { variable: "d1".into(), bit: bit(7), other: "a1".into() },
            fixed("d1", 16, false),
            Assertion::Equal { variable: "d1".into(), bit: bit(17), other: "a1".into() },
            fixed("d1", 32, true),
        ]
    );
}

#[test]
fn composite_blocks_keep_clause_variables() {
    let assertions =
        parse_block("a6 - b6", "a6,18 = b5,18, a6,32 = 0, d6,32 = 0, b6,32 = c6,32 + 1").unwrap();
    let variables = assertions.iter().map(|a| a.variable().as_str()).collect::<Vec<_>>();
    assert_eq!(variables, ["a6", "a6", "d6", "b6"]);
}

#[test]
fn empty_blocks_have_no_assertions() {
    assert_eq!(parse_block("a1", " \n "), Ok(vec![]));
}

#[test]
fn block_errors_carry_the_label() {
    let error = parse_block("c1", "c1,2 = 1, c1,4 = d1,5").unwrap_err();
    assert_eq!(error.label(), "c1");
    assert_matches!(error.error(), ClauseError::BitMismatch { clause, .. } if clause == "c1,4=d1,5");
    assert_eq!(error.to_string(), "invalid condition block 'c1'");
}

#[test]
fn first_error_aborts_the_block() {
    let error = parse_block("b1", "b1,1 = 2, b1,40 = 0").unwrap_err();
    assert_matches!(error.into_error(), ClauseError::UnrecognizedConstraint { .. });
}

#[test]
fn truncated_reference_is_malformed() {
    let error = parse_block("x", "x,1 = 0, x,2 = y").unwrap_err();
    assert_eq!(error.into_error(), ClauseError::MalformedClause { clause: "x,2=y".into() });
}

proptest! {
    #[test]
    fn rendered_assertions_parse_back(assertion in any::<Assertion>()) {
        prop_assert_eq!(parse_clause(&assertion.to_string()), Ok(assertion));
    }

    #[test]
    fn rendered_blocks_parse_back(assertions in prop::collection::vec(any::<Assertion>(), 0..16)) {
        let text = assertions.iter().map(ToString::to_string).collect::<Vec<_>>().join(",\n");
        prop_assert_eq!(parse_block("generated", &text), Ok(assertions));
    }
}
