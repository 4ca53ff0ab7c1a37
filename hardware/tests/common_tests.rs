//! Integration tests for common types and the operation selector.

use alu4::common::*;
use alu4::core::signals::AluOp;

/// Tests nibble construction bounds.
#[test]
fn test_nibble_bounds() {
    assert_eq!(Nibble::new(0).unwrap(), Nibble::ZERO);
    assert_eq!(Nibble::new(15).unwrap(), Nibble::MAX);
    assert!(matches!(Nibble::new(16), Err(AluError::OperandOutOfRange(16))));
}

/// Tests nibble serialization as a plain integer.
#[test]
fn test_nibble_serde() {
    assert_eq!(serde_json::to_string(&Nibble::new(9).unwrap()).unwrap(), "9");
    let n: Nibble = serde_json::from_str("12").unwrap();
    assert_eq!(n.get(), 12);
    assert!(serde_json::from_str::<Nibble>("16").is_err());
}

/// Tests the selector table order.
#[test]
fn test_selector_table() {
    let names: Vec<&str> = AluOp::ALL.iter().map(|op| op.mnemonic()).collect();
    assert_eq!(
        names,
        [
            "ADD", "SUB", "MUL", "DIV", "SHL", "SHR", "ROL", "ROR", "AND", "OR", "XOR", "NOR",
            "NAND", "XNOR", "GT", "EQ"
        ]
    );
    for sel in 0..16u8 {
        let op = AluOp::try_from(sel).unwrap();
        assert_eq!(u8::from(op), sel);
        assert_eq!(AluOp::from_selector(Nibble::new(sel).unwrap()), op);
    }
}

/// Tests out-of-range selectors are rejected.
#[test]
fn test_selector_out_of_range() {
    assert!(matches!(
        AluOp::try_from(16),
        Err(AluError::SelectorOutOfRange(s)) if s == "16"
    ));
}

/// Tests selector numbers too wide for a byte are reported as out of range.
#[test]
fn test_parse_wide_selector() {
    for text in ["256", "99999999999999999999", "0b111111111"] {
        match text.parse::<AluOp>() {
            Err(AluError::SelectorOutOfRange(s)) => assert_eq!(s, text),
            other => panic!("unexpected result for {text}: {other:?}"),
        }
    }
    assert!(matches!("12x".parse::<AluOp>(), Err(AluError::UnknownOperation(_))));
    assert!(matches!("-1".parse::<AluOp>(), Err(AluError::UnknownOperation(_))));
}

/// Tests operation classification.
#[test]
fn test_op_classification() {
    let additive: Vec<AluOp> = AluOp::ALL.into_iter().filter(|op| op.is_additive()).collect();
    assert_eq!(additive, [AluOp::Add, AluOp::Sub]);

    let commutative = AluOp::ALL.iter().filter(|op| op.is_commutative()).count();
    assert_eq!(commutative, 9);
    assert!(!AluOp::Sub.is_commutative());
    assert!(!AluOp::Gt.is_commutative());
    assert!(AluOp::Rol.is_unary());
}

/// Tests error display text.
#[test]
fn test_error_display() {
    assert_eq!(
        AluError::OperandOutOfRange(20).to_string(),
        "operand value 20 is outside the 4-bit range 0..=15"
    );
    assert_eq!(
        AluError::UnknownOperation("MOD".into()).to_string(),
        "unknown ALU operation 'MOD'"
    );
    assert_eq!(
        AluError::SelectorOutOfRange("256".into()).to_string(),
        "selector value 256 is outside the 4-bit range 0..=15"
    );
}
