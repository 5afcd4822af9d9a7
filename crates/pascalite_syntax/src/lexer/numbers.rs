//! Numeric literal scanning.
//!
//! ```text
//! integer ::= digit+
//! real    ::= digit+ '.' digit+ [ exponent ] | digit+ exponent
//! exponent::= ('e' | 'E') [ '+' | '-' ] digit+
//! ```
//!
//! A `.` only starts a fraction when a digit follows it, so `END.` and `1.` keep their terminator.
//! Literals outside the range of `i64` or `f64` are lexical errors.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize) {
        self.eat_digits();

        let mut is_real = false;

        if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            is_real = true;
            self.advance(); // '.'
            self.eat_digits();
        }

        if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
            is_real = true;
            self.advance(); // 'e'
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            self.eat_digits();
        }

        let text = &self.source[start..self.current_pos];
        if is_real {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => self.add_token(TokenKind::Real(value), start),
                Ok(_) => self.error(format!("Real literal '{}' is out of range", text), start),
                Err(_) => self.error(format!("Invalid real literal '{}'", text), start),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => self.add_token(TokenKind::Int(value), start),
                Err(_) => self.error(format!("Integer literal '{}' is out of range", text), start),
            }
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// With the cursor on `e`/`E`: is it followed by `[+|-] digit`?
    fn exponent_follows(&self) -> bool {
        match self.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => self.peek_nth(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }
}
