//! Whitespace skipping. Lumen has no comment syntax.

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn skip_whitespace(&mut self) {
        while let Some(b) = self.current_byte() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.advance();
            } else {
                break;
            }
        }
    }
}
