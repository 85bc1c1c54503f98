//! Common test utilities for Lumen integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use lumen::environment::Environment;
use lumen::evaluator::eval;
use lumen::lexer::Lexer;
use lumen::object::Value;
use lumen::parser::Parser;

/// Lexes and parses `source`, panicking with the parser's error list if
/// parsing failed.
pub fn parse(source: &str) -> lumen::ast::Program {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    let errors = parser.errors();
    assert!(errors.is_empty(), "parser had errors: {errors:?}");
    program
}

/// Lexes, parses, and evaluates `source` in a fresh environment.
///
/// Panics if parsing failed, since every case exercised here is
/// expected to be syntactically valid; evaluation errors are returned
/// as an ordinary `Value::Error` for the caller to assert on.
pub fn eval_source(source: &str) -> Value {
    let program = parse(source);
    let env = Environment::new();
    eval(&program, &env)
}

/// Returns the parser's accumulated error strings for `source`, without
/// asserting on them.
pub fn parser_errors(source: &str) -> Vec<String> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    parser.errors().to_vec()
}
