use std::fs;

use foldcalc::{
    error::{ArithmeticError, ArithmeticResult, CalcError, Expected, LexError, SyntaxError},
    evaluate,
    interpreter::{
        evaluator::core::Evaluator, lexer::Lexer, operator::BinaryOperator, token::TokenKind,
        value::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            match evaluate(&expression) {
                Ok(value) => assert_eq!(value.to_string(),
                                        expected,
                                        "{expression} in {path:?} evaluated to {value}"),
                Err(e) => panic!("Example {expression:?} in {path:?} failed:\nError: {e:?}"),
            }
        }
    }

    assert!(count > 0, "No examples found in tests/scripts");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once(" = "))
           .map(|(expression, expected)| (expression.to_string(), expected.trim().to_string()))
           .collect()
}

fn assert_value(src: &str, expected: Value) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "unexpected result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn evaluate_err(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn whitespace_is_ignored() {
    assert_value("   3   +   4  ", Value::Integer(7));
    assert_value("\t3+\t4", Value::Integer(7));
    assert_value("3+4", Value::Integer(7));
}

#[test]
fn multi_digit_literals() {
    assert_value("123+456", Value::Integer(579));
    assert_value("1000000*1000000", Value::Integer(1_000_000_000_000));
}

#[test]
fn operators_fold_left_to_right_without_precedence() {
    assert_value("2+3*4", Value::Integer(20));
    assert_value("10-2-3", Value::Integer(5));
    assert_value("2*3+4", Value::Integer(10));
    assert_value("1-5", Value::Integer(-4));
}

#[test]
fn division_switches_to_real() {
    assert_value("6/3", Value::Real(2.0));
    assert_value("6/4+1", Value::Real(2.5));
    assert_value("9/3*2", Value::Real(6.0));
    assert!(matches!(evaluate("1/3*3"), Ok(Value::Real(_))));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(evaluate_err("5/0"),
               CalcError::Arithmetic(ArithmeticError::DivisionByZero { position: 1 }));
    assert!(matches!(evaluate_err("6/3/0"),
                     CalcError::Arithmetic(ArithmeticError::DivisionByZero { .. })));
}

#[test]
fn integer_overflow_is_error() {
    assert_eq!(evaluate_err("9223372036854775807+1"),
               CalcError::Arithmetic(ArithmeticError::Overflow { position: 19 }));
    assert!(matches!(evaluate_err("0-9223372036854775807-2"),
                     CalcError::Arithmetic(ArithmeticError::Overflow { .. })));
}

#[test]
fn large_integers_promote_to_real_by_rounding() {
    assert_value("9007199254740993/1", Value::Real(9_007_199_254_740_992.0));
    assert_value("9007199254740991/1", Value::Real(9_007_199_254_740_991.0));
    assert!(matches!(evaluate("6/4+9007199254740993"), Ok(Value::Real(_))));
    assert!(matches!(evaluate("9223372036854775807/2"), Ok(Value::Real(_))));
}

#[test]
fn scalar_ops_dispatch_on_operand_types() {
    let apply = |op: BinaryOperator, left: Value, right: Value| -> ArithmeticResult<Value> {
        Evaluator::eval_scalar_op(op, &left, &right, 4)
    };

    assert_eq!(apply(BinaryOperator::Mul, Value::Integer(6), Value::Integer(7)),
               Ok(Value::Integer(42)));
    assert_eq!(apply(BinaryOperator::Sub, Value::Real(0.5), Value::Integer(2)),
               Ok(Value::Real(-1.5)));
    assert_eq!(apply(BinaryOperator::Div, Value::Integer(1), Value::Integer(0)),
               Err(ArithmeticError::DivisionByZero { position: 4 }));
    assert_eq!(apply(BinaryOperator::Div, Value::Real(2.5), Value::Integer(0)),
               Err(ArithmeticError::DivisionByZero { position: 4 }));
    assert_eq!(apply(BinaryOperator::Add, Value::Integer(i64::MAX), Value::Integer(1)),
               Err(ArithmeticError::Overflow { position: 4 }));
}

#[test]
fn two_operators_in_a_row_is_syntax_error() {
    assert_eq!(evaluate_err("3+*2"),
               CalcError::Syntax(SyntaxError::UnexpectedToken { expected: Expected::Kind(TokenKind::Integer),
                                                                found:    TokenKind::Multiply,
                                                                position: 2, }));
}

#[test]
fn missing_terms_are_syntax_errors() {
    assert_eq!(evaluate_err("3+"),
               CalcError::Syntax(SyntaxError::UnexpectedToken { expected: Expected::Kind(TokenKind::Integer),
                                                                found:    TokenKind::EndOfInput,
                                                                position: 2, }));
    assert_eq!(evaluate_err(""),
               CalcError::Syntax(SyntaxError::UnexpectedToken { expected: Expected::Kind(TokenKind::Integer),
                                                                found:    TokenKind::EndOfInput,
                                                                position: 0, }));
    assert!(matches!(evaluate_err("+1"), CalcError::Syntax(_)));
}

#[test]
fn adjacent_terms_are_syntax_error() {
    assert_eq!(evaluate_err("3 4"),
               CalcError::Syntax(SyntaxError::UnexpectedToken { expected: Expected::OperatorOrEnd,
                                                                found:    TokenKind::Integer,
                                                                position: 2, }));
}

#[test]
fn unicode_whitespace_is_ignored() {
    assert_value("3\u{a0}+4", Value::Integer(7));
    assert_value("\u{2003}10\u{3000}-\u{2009}2", Value::Integer(8));
}

#[test]
fn unknown_character_is_lex_error() {
    assert_eq!(evaluate_err("3&2"),
               CalcError::Lex(LexError::UnexpectedCharacter { character: '&',
                                                              position:  1, }));
    assert!(matches!(evaluate_err("1.5+1"), CalcError::Lex(_)));
    assert!(matches!(evaluate_err("(1+2)"), CalcError::Lex(_)));
}

#[test]
fn oversized_literal_is_lex_error() {
    assert_eq!(evaluate_err("1+99999999999999999999"),
               CalcError::Lex(LexError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                          position: 2, }));
}

#[test]
fn syntax_errors_win_over_later_lex_errors() {
    // The evaluator stops at the first bad token and never reads further.
    assert!(matches!(evaluate_err("3++&"), CalcError::Syntax(_)));
}

#[test]
fn lines_do_not_share_state() {
    assert_value("1+1", Value::Integer(2));
    assert_value("2+2", Value::Integer(4));

    let first = Evaluator::new(Lexer::new("1+1")).unwrap();
    let second = Evaluator::new(Lexer::new("2+2")).unwrap();
    assert_eq!(first.evaluate().unwrap(), Value::Integer(2));
    assert_eq!(second.evaluate().unwrap(), Value::Integer(4));
}

#[test]
fn evaluator_primes_lookahead() {
    let evaluator = Evaluator::new(Lexer::new("  42 - 1")).unwrap();
    assert_eq!(evaluator.lookahead(), foldcalc::interpreter::token::Token::Integer(42));
}

#[test]
fn error_messages_name_the_position() {
    assert_eq!(evaluate_err("5/0").to_string(), "Error at position 1: Division by zero.");
    assert_eq!(evaluate_err("3&2").to_string(),
               "Error at position 1: Unexpected character '&'.");
    assert_eq!(evaluate_err("3+*2").to_string(),
               "Error at position 2: Expected INTEGER, found MUL.");
    assert_eq!(evaluate_err("3 4").to_string(),
               "Error at position 2: Expected operator or EOF, found INTEGER.");
}
