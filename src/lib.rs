//! Lumen: a small, C-flavored, expression-oriented scripting language.
//!
//! This crate is the interpreter's core: a [`lexer`], a Pratt-style
//! [`parser`] that builds an [`ast::Program`], and a tree-walking
//! [`evaluator`] over a heterogeneous [`object::Value`] model with
//! first-class functions and closures.
//!
//! # Pipeline
//!
//! ```text
//! source --[lexer]--> tokens --[parser]--> Program --[evaluator]--> Value
//! ```
//!
//! The `lumen` binary wires these together into a REPL and a
//! batch (`--file`) runner; this library crate only exposes the four
//! entry points the binary (or any other caller) needs:
//! [`lexer::Lexer`], [`parser::Parser`], [`environment::Environment`],
//! and [`evaluator::eval`].

pub mod ast;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;
