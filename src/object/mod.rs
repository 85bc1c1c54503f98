//! The runtime value model.
//!
//! `Value` is the tagged union every expression evaluates to. Plain,
//! cheaply-copied data (`Integer`, `Boolean`, `String`, `Null`) is held
//! inline; anything that closures or multiple bindings might need to
//! observe mutations through (`Array`, `Hash`, and a function's
//! captured environment) is held behind `Rc<RefCell<..>>`.
//!
//! # Module Structure
//!
//! - [`builtins`] - the fixed table of built-in functions
//! - `tests` - unit tests (test-only)

pub mod builtins;


use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;
use builtins::BuiltinFn;

/// A restricted key type for `Hash` values: only integers, booleans,
/// and strings may be used as hash keys, matching the reference
/// behavior's `HashKey` restriction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

/// A user-defined function value: its parameter list, body, and the
/// environment it closed over at the point of definition.
#[derive(Debug)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(String),
    Array(Rc<RefCell<Vec<Value>>>),
    Hash(Rc<RefCell<HashMap<HashKey, (Value, Value)>>>),
    Function(Rc<FunctionValue>),
    /// A built-in function, looked up by name. Carrying its name lets
    /// `inspect`/error messages name it without a reverse lookup.
    Builtin(String, BuiltinFn),
    /// Wraps the value produced by a `return` so block evaluation can
    /// unwind without Rust-level exceptions; unwrapped at function-call
    /// and program boundaries.
    ReturnValue(Box<Value>),
    Error(String),
}

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

impl Value {
    pub fn from_bool(b: bool) -> Value {
        if b { TRUE } else { FALSE }
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(..) => "BUILTIN",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    /// The key this value would use as a hash key, if it can be one.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(i) => Some(HashKey::Integer(*i)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String(s.clone())),
            _ => None,
        }
    }

    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(elements) => {
                let items: Vec<String> =
                    elements.borrow().iter().map(|v| v.inspect()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Hash(pairs) => {
                let items: Vec<String> = pairs
                    .borrow()
                    .values()
                    .map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect()))
                    .collect();
                write!(f, "{{{}}}", items.join(", "))
            }
            Value::Function(func) => {
                let params: Vec<String> =
                    func.parameters.iter().map(|p| p.value.clone()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), func.body)
            }
            Value::Builtin(name, _) => write!(f, "builtin function: {name}"),
            Value::ReturnValue(inner) => write!(f, "{inner}"),
            Value::Error(msg) => write!(f, "ERROR: {msg}"),
        }
    }
}
