//! Unit tests for ALU operations.

use alu4::common::Nibble;
use alu4::core::signals::AluOp;
use alu4::core::units::alu::{Alu, AluOutput};

fn eval(a: u8, b: u8, op: AluOp) -> AluOutput {
    Alu::evaluate(Nibble::new(a).unwrap(), Nibble::new(b).unwrap(), op)
}

fn res(a: u8, b: u8, op: AluOp) -> u8 {
    eval(a, b, op).result.get()
}

/// Tests the end-to-end vectors from the reference harness.
#[test]
fn test_alu_reference_vectors() {
    assert_eq!(res(3, 5, AluOp::Add), 8);
    assert_eq!(res(2, 1, AluOp::Sub), 1);
    assert_eq!(res(2, 3, AluOp::Mul), 6);
    assert_eq!(res(4, 2, AluOp::Div), 2);
    assert_eq!(res(2, 2, AluOp::And), 2);
    assert_eq!(res(12, 10, AluOp::Or), 14);
    assert_eq!(res(12, 10, AluOp::Xor), 6);
    assert_eq!(res(10, 5, AluOp::Gt), 1);
    assert_eq!(res(7, 7, AluOp::Eq), 1);
}

/// Tests addition wraparound and carry.
#[test]
fn test_alu_add() {
    let out = eval(15, 1, AluOp::Add);
    assert_eq!(out.result.get(), 0);
    assert!(out.flags.carry);
    assert!(out.flags.zero);
    assert!(!out.flags.overflow);

    let out = eval(4, 3, AluOp::Add);
    assert_eq!(out.result.get(), 7);
    assert!(!out.flags.carry);
    assert!(!out.flags.negative);
}

/// Tests subtraction wraparound and borrow.
#[test]
fn test_alu_sub() {
    let out = eval(0, 1, AluOp::Sub);
    assert_eq!(out.result.get(), 0xF);
    assert!(out.flags.carry);
    assert!(out.flags.negative);
    assert!(!out.flags.overflow);

    let out = eval(5, 5, AluOp::Sub);
    assert!(out.flags.zero);
    assert!(!out.flags.carry);
}

/// Tests signed overflow on addition and subtraction.
#[test]
fn test_alu_overflow() {
    // +4 + +4 = -8
    assert!(eval(4, 4, AluOp::Add).flags.overflow);
    // -8 + -1 = +7
    let out = eval(8, 15, AluOp::Add);
    assert_eq!(out.result.get(), 7);
    assert!(out.flags.overflow);
    assert!(out.flags.carry);
    // +7 - -1 = -8
    assert!(eval(7, 15, AluOp::Sub).flags.overflow);
    // -1 - +1 = -2, no overflow
    assert!(!eval(15, 1, AluOp::Sub).flags.overflow);
}

/// Tests multiplication truncation.
#[test]
fn test_alu_mul() {
    assert_eq!(res(5, 5, AluOp::Mul), 25 % 16);
    assert_eq!(res(8, 2, AluOp::Mul), 0);
    assert_eq!(res(0, 9, AluOp::Mul), 0);
}

/// Tests division flooring and the divide-by-zero sentinel.
#[test]
fn test_alu_div() {
    assert_eq!(res(15, 2, AluOp::Div), 7);
    assert_eq!(res(1, 2, AluOp::Div), 0);
    for a in 0..16 {
        let out = eval(a, 0, AluOp::Div);
        assert_eq!(out.result.get(), 0b1111);
        assert!(!out.flags.carry);
        assert!(out.flags.negative);
    }
}

/// Tests shifts and rotates.
#[test]
fn test_alu_shifts() {
    assert_eq!(res(0b0110, 0, AluOp::Shl), 0b1100);
    assert_eq!(res(0b1000, 0, AluOp::Shl), 0);
    assert_eq!(res(0b0110, 0, AluOp::Shr), 0b0011);
    assert_eq!(res(0b0001, 0, AluOp::Shr), 0);
    assert_eq!(res(0b1000, 0, AluOp::Rol), 0b0001);
    assert_eq!(res(0b0001, 0, AluOp::Ror), 0b1000);
}

/// Tests that shifts never raise carry or overflow.
#[test]
fn test_alu_shift_flags() {
    let out = eval(0b1000, 0, AluOp::Shl);
    assert!(!out.flags.carry);
    assert!(!out.flags.overflow);
    let out = eval(0b0001, 0, AluOp::Shr);
    assert!(!out.flags.carry);
}

/// Tests that B is ignored by unary operations.
#[test]
fn test_alu_unary_ignores_b() {
    for op in [AluOp::Shl, AluOp::Shr, AluOp::Rol, AluOp::Ror] {
        for b in 0..16 {
            assert_eq!(eval(0b1011, b, op), eval(0b1011, 0, op));
        }
    }
}

/// Tests inverting logical operations are masked to four bits.
#[test]
fn test_alu_logical() {
    assert_eq!(res(0b1100, 0b1010, AluOp::And), 0b1000);
    assert_eq!(res(0b1100, 0b1010, AluOp::Nor), 0b0001);
    assert_eq!(res(0b1100, 0b1010, AluOp::Nand), 0b0111);
    assert_eq!(res(0b1100, 0b1010, AluOp::Xnor), 0b1001);
    assert_eq!(res(0, 0, AluOp::Nor), 0b1111);
}

/// Tests comparisons occupy only bit 0.
#[test]
fn test_alu_compare() {
    assert_eq!(res(5, 10, AluOp::Gt), 0);
    assert_eq!(res(15, 0, AluOp::Gt), 1);
    assert_eq!(res(3, 4, AluOp::Eq), 0);
    let out = eval(1, 1, AluOp::Gt);
    assert!(out.flags.zero);
}

/// Tests the raw-integer entry point rejects out-of-range inputs.
#[test]
fn test_alu_raw_entry() {
    assert_eq!(Alu::evaluate_raw(12, 10, 0b1001).unwrap().result.get(), 14);
    assert!(Alu::evaluate_raw(12, 16, 0b1001).is_err());
    assert!(Alu::evaluate_raw(12, 10, 0x1F).is_err());
}
