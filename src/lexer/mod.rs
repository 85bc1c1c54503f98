//! Lexical analyzer for the Lumen language.
//!
//! This module provides the [`Lexer`] struct, which turns source text
//! into a stream of [`Token`]s on demand via [`Lexer::next_token`].
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input byte by byte
//! - Recognizes identifiers, keywords, integer and string literals
//! - Tracks line/column for optional diagnostic tracing
//! - Skips whitespace (there is no comment syntax)
//!
//! # Supported Tokens
//!
//! - **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Integer literals**: `[0-9]+`, parsed later by the parser
//! - **String literals**: double-quoted, no escape processing
//! - **Operators**: `= + - ! * / < > == !=`
//! - **Punctuation**: `, ; : ( ) { } [ ]`
//!
//! Anything else produces an [`TokenKind::Illegal`] token rather than a
//! hard lexer failure; the parser is the one that turns an illegal
//! token into a reported error.
//!
//! # Module Structure
//!
//! - [`cursor`] - byte-level navigation and line/column tracking
//! - [`skip`] - whitespace skipping
//! - [`tokens`] - identifier/number/string recognition
//! - `tests` - unit tests (test-only)

mod cursor;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Position, Token, TokenKind};

/// A lexer over a borrowed source string.
///
/// Call [`Lexer::next_token`] repeatedly; once the input is exhausted
/// it returns [`TokenKind::Eof`] forever, so callers don't need to
/// special-case the boundary.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the next token, advancing the cursor past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.position();

        let byte = match self.current_byte() {
            None => return Token::new(TokenKind::Eof, "", position),
            Some(b) => b,
        };

        if Self::is_letter(byte) {
            let literal = self.read_identifier();
            let kind = TokenKind::lookup_ident(literal);
            log::trace!("lexed {kind:?} {literal:?} at {position:?}");
            return Token::new(kind, literal, position);
        }

        if Self::is_digit(byte) {
            let literal = self.read_number();
            log::trace!("lexed Int {literal:?} at {position:?}");
            return Token::new(TokenKind::Int, literal, position);
        }

        if byte == b'"' {
            let literal = self.read_string();
            log::trace!("lexed Str {literal:?} at {position:?}");
            return Token::new(TokenKind::Str, literal, position);
        }

        let (kind, width) = match (byte, self.peek_byte()) {
            (b'=', Some(b'=')) => (TokenKind::Eq, 2),
            (b'!', Some(b'=')) => (TokenKind::NotEq, 2),
            (b'=', _) => (TokenKind::Assign, 1),
            (b'+', _) => (TokenKind::Plus, 1),
            (b'-', _) => (TokenKind::Minus, 1),
            (b'!', _) => (TokenKind::Bang, 1),
            (b'*', _) => (TokenKind::Asterisk, 1),
            (b'/', _) => (TokenKind::Slash, 1),
            (b'<', _) => (TokenKind::Lt, 1),
            (b'>', _) => (TokenKind::Gt, 1),
            (b',', _) => (TokenKind::Comma, 1),
            (b';', _) => (TokenKind::Semicolon, 1),
            (b':', _) => (TokenKind::Colon, 1),
            (b'(', _) => (TokenKind::LParen, 1),
            (b')', _) => (TokenKind::RParen, 1),
            (b'{', _) => (TokenKind::LBrace, 1),
            (b'}', _) => (TokenKind::RBrace, 1),
            (b'[', _) => (TokenKind::LBracket, 1),
            (b']', _) => (TokenKind::RBracket, 1),
            _ => (TokenKind::Illegal, 1),
        };

        let start = self.pos;
        for _ in 0..width {
            self.advance();
        }
        let literal = &self.input[start..self.pos];
        Token::new(kind, literal, position)
    }
}
