//! End-to-end tests for first-class functions and closures.

mod common;

use common::eval_source;
use lumen::object::Value;

#[test]
fn closures_capture_their_defining_environment() {
    let input = "let newAdder = fn(x) { fn(y) { x + y } }; \
                  let addTwo = newAdder(2); addTwo(3);";
    match eval_source(input) {
        Value::Integer(i) => assert_eq!(i, 5),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn each_call_gets_a_fresh_environment() {
    let input = "let c = fn() { let x = 0; fn() { let x = x + 1; x }() }; c();";
    for _ in 0..3 {
        match eval_source(input) {
            Value::Integer(i) => assert_eq!(i, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

#[test]
fn recursive_functions_can_call_themselves_by_name() {
    let input = "\
        let fact = fn(n) {
            if (n < 2) { 1 } else { n * fact(n - 1) }
        };
        fact(5);";
    match eval_source(input) {
        Value::Integer(i) => assert_eq!(i, 120),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn extra_and_missing_call_arguments_are_tolerated_per_spec() {
    // Extra arguments are simply ignored.
    match eval_source("let f = fn(x) { x }; f(1, 2, 3);") {
        Value::Integer(i) => assert_eq!(i, 1),
        other => panic!("unexpected result: {other:?}"),
    }
    // A missing argument leaves its parameter unbound, surfacing as a
    // regular "identifier not found" error when referenced.
    match eval_source("let f = fn(x, y) { y }; f(1);") {
        Value::Error(msg) => assert_eq!(msg, "identifier not found: y"),
        other => panic!("unexpected result: {other:?}"),
    }
}
