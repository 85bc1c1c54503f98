//! The fixed table of built-in functions available to every program,
//! independent of any user-defined bindings.

use std::cell::RefCell;
use std::rc::Rc;

use super::Value;

pub type BuiltinFn = fn(&[Value]) -> Value;

/// Looks up a builtin by name. Returns `None` for anything not in the
/// fixed table, which the evaluator turns into an "identifier not
/// found" error the same way it would for any other unbound name.
pub fn lookup(name: &str) -> Option<BuiltinFn> {
    match name {
        "len" => Some(len),
        "first" => Some(first),
        "last" => Some(last),
        "rest" => Some(rest),
        "push" => Some(push),
        "puts" => Some(puts),
        _ => None,
    }
}

fn wrong_arg_count(got: usize, want: &str) -> Value {
    Value::Error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), "1");
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.borrow().len() as i64),
        other => Value::Error(format!("argument to `len` not supported, got {}", other.type_name())),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), "1");
    }
    match &args[0] {
        Value::Array(elements) => elements.borrow().first().cloned().unwrap_or(Value::Null),
        other => Value::Error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), "1");
    }
    match &args[0] {
        Value::Array(elements) => elements.borrow().last().cloned().unwrap_or(Value::Null),
        other => Value::Error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), "1");
    }
    match &args[0] {
        Value::Array(elements) => {
            let elements = elements.borrow();
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(RefCell::new(elements[1..].to_vec())))
            }
        }
        other => Value::Error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arg_count(args.len(), "2");
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut new_elements = elements.borrow().clone();
            new_elements.push(args[1].clone());
            Value::Array(Rc::new(RefCell::new(new_elements)))
        }
        other => Value::Error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn puts(args: &[Value]) -> Value {
    for arg in args {
        println!("{}", arg.inspect());
    }
    Value::Null
}
