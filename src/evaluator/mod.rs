//! The tree-walking evaluator.
//!
//! `eval` recurses over the AST, threading the current [`Environment`]
//! through every call. Values flow back up the same channel whether
//! they are ordinary results, a `return`-in-progress (`Value::ReturnValue`),
//! or a first-class `Value::Error` — there is no separate exception
//! path, so every caller that might receive an error from a
//! sub-evaluation is responsible for checking and propagating it.
//!
//! # Module Structure
//!
//! - [`expr`] - expression evaluation rules, operators, and builtin dispatch
//! - `tests` - end-to-end evaluation scenarios (test-only)

mod expr;


use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{BlockStatement, Program, Stmt};
use crate::environment::Environment;
use crate::object::Value;

/// Evaluates a whole program in `env`.
///
/// Unwraps a top-level `ReturnValue` immediately (a bare `return` at
/// the top level simply ends the program with that value) and stops at
/// the first `Error`, ignoring any statements after it.
pub fn eval(program: &Program, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = Value::Null;

    for stmt in &program.statements {
        result = eval_statement(stmt, env);

        match result {
            Value::ReturnValue(inner) => return *inner,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block's statements without unwrapping `ReturnValue`:
/// that is left to the function-call boundary (or `eval`, for a
/// top-level block) so a `return` inside nested `if`/block statements
/// keeps propagating outward instead of only ending the innermost block.
fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = Value::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env);

        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(stmt: &Stmt, env: &Rc<RefCell<Environment>>) -> Value {
    match stmt {
        Stmt::Expression { expression, .. } => expr::eval_expr(expression, env),
        Stmt::Return { return_value, .. } => {
            let value = expr::eval_expr(return_value, env);
            if value.is_error() {
                value
            } else {
                Value::ReturnValue(Box::new(value))
            }
        }
        Stmt::Let { name, value, .. } => {
            let evaluated = expr::eval_expr(value, env);
            if evaluated.is_error() {
                return evaluated;
            }
            env.borrow_mut().set(name.value.clone(), evaluated.clone());
            evaluated
        }
    }
}
