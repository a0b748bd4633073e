//! Boundary-condition tests for the parser, kept apart from the
//! everyday-path tests in `lib.rs` the way the rest of the pipeline
//! separates the two.

use crate::{Expr, ParseError, Parser};

fn parse_ok(src: &str) -> crate::Program {
    Parser::parse_source(src.as_bytes().to_vec()).expect("parse should succeed")
}

#[test]
fn test_edge_empty_program_has_no_statements() {
    let program = parse_ok("");
    assert!(program.body.is_empty());
}

#[test]
fn test_edge_whitespace_only_program_has_no_statements() {
    let program = parse_ok("   \n\t  \n");
    assert!(program.body.is_empty());
}

#[test]
fn test_edge_missing_semicolon_between_statements_still_parses_both() {
    // The driver always calls `update()` once after a statement, so a
    // missing separator simply folds into the next token's consumption
    // rather than raising an error.
    let program = parse_ok("x\ny;");
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_edge_deeply_nested_parens_round_trip_to_the_same_value() {
    let plain = parse_ok("1;").body[0].reduce();
    let nested = parse_ok("(((((1)))));").body[0].reduce();
    assert_eq!(plain, nested);
}

#[test]
fn test_edge_full_precedence_ladder() {
    // `*`, `/`, `//`, `%`, `**` all bind tighter than `+`/`-`.
    let program = parse_ok("1 + 2 * 3 - 4 / 5 % 6;");
    match &program.body[0] {
        Expr::Binary(b) => {
            // outermost operator is the last additive-level operator: `-`
            assert_eq!(b.operator.symbol_str().as_ref(), "-");
        }
        other => panic!("expected BinaryExpression, got {other:?}"),
    }
}

#[test]
fn test_edge_right_associated_operand_of_additive_chain_is_multiplicative() {
    let program = parse_ok("a - b * c;");
    match &program.body[0] {
        Expr::Binary(b) => {
            assert_eq!(b.operator.symbol_str().as_ref(), "-");
            assert!(matches!(*b.right, Expr::Binary(_)));
            assert!(matches!(*b.left, Expr::LiteralIdent(_)));
        }
        other => panic!("expected BinaryExpression, got {other:?}"),
    }
}

#[test]
fn test_edge_long_additive_chain_is_left_associative() {
    let program = parse_ok("a + b + c + d;");
    // unwrap three levels of nesting, each time on the left
    let mut node = &program.body[0];
    for _ in 0..3 {
        match node {
            Expr::Binary(b) => {
                assert_eq!(b.operator.symbol_str().as_ref(), "+");
                node = &b.left;
            }
            other => panic!("expected BinaryExpression, got {other:?}"),
        }
    }
    assert!(matches!(node, Expr::LiteralIdent(_)));
}

#[test]
fn test_edge_exponent_operator_is_recognized_at_multiplicative_level() {
    let program = parse_ok("2 ** 3;");
    match &program.body[0] {
        Expr::Binary(b) => assert_eq!(b.operator.symbol_str().as_ref(), "**"),
        other => panic!("expected BinaryExpression, got {other:?}"),
    }
}

#[test]
fn test_edge_floor_division_operator_is_recognized() {
    let program = parse_ok("7 // 2;");
    match &program.body[0] {
        Expr::Binary(b) => assert_eq!(b.operator.symbol_str().as_ref(), "//"),
        other => panic!("expected BinaryExpression, got {other:?}"),
    }
}

#[test]
fn test_edge_dangling_operator_at_eof_is_an_error() {
    let err = Parser::parse_source(b"1 +".to_vec()).unwrap_err();
    assert!(matches!(err, ParseError::Unsupported { .. }));
}

#[test]
fn test_edge_unopened_paren_is_an_error() {
    let err = Parser::parse_source(b"1);".to_vec());
    // `1` parses as a full statement on its own; the stray `)` is then
    // the start of the next statement and fails in primary position.
    assert!(err.is_err());
}

#[test]
fn test_edge_float_literal_with_fractional_part_parses_as_primary() {
    let program = parse_ok("3.14159;");
    assert!(matches!(program.body[0], Expr::LiteralFlt(_)));
}

#[test]
fn test_edge_hex_literal_parses_as_literal_int() {
    let program = parse_ok("0xFF + 1;");
    match &program.body[0] {
        Expr::Binary(b) => assert!(matches!(*b.left, Expr::LiteralInt(_))),
        other => panic!("expected BinaryExpression, got {other:?}"),
    }
}
