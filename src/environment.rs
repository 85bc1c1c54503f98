//! Lexical scoping for the evaluator.
//!
//! An `Environment` is a node in a singly-linked chain of scopes:
//! lookups walk outward through `outer` until a binding is found or the
//! chain is exhausted. Environments are shared via `Rc<RefCell<..>>` so
//! that a closure's captured scope stays alive for as long as the
//! closure does, and so that two closures capturing the same scope
//! observe each other's mutations to it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Value;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Environment>> {
        log::trace!("creating top-level environment");
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates a child scope enclosed by `outer`, as done on every
    /// function call.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        log::trace!("creating enclosed environment");
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name`, walking outward through enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        match &self.outer {
            Some(outer) => outer.borrow().get(name),
            None => None,
        }
    }

    /// Binds `name` in this (innermost) scope, shadowing any outer
    /// binding of the same name without touching it.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
