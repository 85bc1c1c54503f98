//! Statement nodes for the Lumen AST.

use std::fmt;

use crate::token::Token;

use super::expr::{Expr, Identifier};

/// A statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let {
        token: Token,
        name: Identifier,
        value: Expr,
    },
    Return {
        token: Token,
        return_value: Expr,
    },
    Expression {
        token: Token,
        expression: Expr,
    },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Stmt::Return { return_value, .. } => write!(f, "return {return_value};"),
            Stmt::Expression { expression, .. } => write!(f, "{expression}"),
        }
    }
}

/// A brace-delimited sequence of statements, owned only by `if` and
/// function-literal expressions.
#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
