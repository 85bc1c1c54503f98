//! Token bookkeeping shared by the statement and expression parsers.

use super::{Parser, Precedence};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    pub(super) fn next_token(&mut self) {
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
        log::trace!(
            "cur_token={:?} peek_token={:?}",
            self.cur_token.kind,
            self.peek_token.kind
        );
    }

    pub(super) fn cur_is(&self, kind: &TokenKind) -> bool {
        &self.cur_token.kind == kind
    }

    pub(super) fn peek_is(&self, kind: &TokenKind) -> bool {
        &self.peek_token.kind == kind
    }

    pub(super) fn cur_is_eof(&self) -> bool {
        self.cur_token.kind == TokenKind::Eof
    }

    /// Advances past the peek token if it matches `kind`; otherwise
    /// records an error and leaves the cursor unmoved.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(&kind) {
            self.next_token();
            true
        } else {
            self.peek_error(&kind);
            false
        }
    }

    fn peek_error(&mut self, expected: &TokenKind) {
        self.errors.push(format!(
            "expected next token to be {expected}, got {} instead",
            self.peek_token.kind
        ));
    }

    pub(super) fn no_prefix_parse_fn_error(&mut self, kind: &TokenKind) {
        self.errors
            .push(format!("no prefix parse function for {kind} found"));
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        Self::precedence_of(&self.peek_token.kind)
    }

    pub(super) fn cur_precedence(&self) -> Precedence {
        Self::precedence_of(&self.cur_token.kind)
    }

    fn precedence_of(kind: &TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}
