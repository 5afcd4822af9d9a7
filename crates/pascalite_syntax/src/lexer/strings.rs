//! String literal and comment scanning.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a `'...'` literal; the opening quote is already consumed. A doubled quote stands for one quote.
    pub(super) fn scan_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('\'') => {
                    if self.match_char('\'') {
                        value.push('\'');
                    } else {
                        break;
                    }
                }
                Some('\n') | None => {
                    self.error("Unterminated string literal".to_string(), start);
                    return;
                }
                Some(c) => value.push(c),
            }
        }
        self.add_token(TokenKind::String(value), start);
    }

    /// Skip a `{ ... }` comment; the `{` is already consumed.
    pub(super) fn skip_brace_comment(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('}') => return,
                Some(_) => {}
                None => {
                    self.error("Unterminated comment".to_string(), start);
                    return;
                }
            }
        }
    }

    /// Skip a `(* ... *)` comment; the `(*` is already consumed.
    pub(super) fn skip_paren_comment(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('*') if self.match_char(')') => return,
                Some(_) => {}
                None => {
                    self.error("Unterminated comment".to_string(), start);
                    return;
                }
            }
        }
    }
}
