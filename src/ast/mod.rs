//! Abstract syntax tree for the Lumen language.
//!
//! The tree is a tagged sum type rather than an interface hierarchy:
//! [`Stmt`] and [`Expr`] are closed enums, which lets the parser,
//! pretty-printer, and evaluator all match on them exhaustively and get
//! a compile error the moment a new variant is added somewhere it
//! wasn't handled.
//!
//! # Module Structure
//!
//! - [`expr`] - expression node variants and their `Display` impls
//! - [`stmt`] - statement node variants, `BlockStatement`, and `Display`
//! - `tests` - unit tests mirroring the book's `TestString` check (test-only)

mod expr;
mod stmt;


pub use expr::{Expr, Identifier};
pub use stmt::{BlockStatement, Stmt};

use std::fmt;

/// The root of a parsed Lumen program: an ordered sequence of
/// statements, evaluated top to bottom.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
