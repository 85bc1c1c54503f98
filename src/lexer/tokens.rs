//! Recognition of multi-character tokens: identifiers, numbers, strings.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes `[a-zA-Z_]+` starting at the current position.
    pub(super) fn read_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.current_byte() {
            if Self::is_letter(b) {
                self.advance();
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    /// Consumes `[0-9]+` starting at the current position.
    pub(super) fn read_number(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.current_byte() {
            if Self::is_digit(b) {
                self.advance();
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    /// Consumes a double-quoted string literal's contents.
    ///
    /// No escape processing is performed, matching the reference
    /// behavior: `\n` lexes as two characters. An unterminated string
    /// is tolerated and simply returns whatever was read up to EOF
    /// rather than producing a fatal lex error.
    pub(super) fn read_string(&mut self) -> &'a str {
        // current byte is the opening quote
        self.advance();
        let start = self.pos;
        while let Some(b) = self.current_byte() {
            if b == b'"' {
                break;
            }
            self.advance();
        }
        let content = &self.input[start..self.pos];
        if self.current_byte() == Some(b'"') {
            self.advance();
        }
        content
    }
}
