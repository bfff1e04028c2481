use crate::error::Error;
use crate::symbol::SymbolTable;
use crate::token::{single_char_token, Token};
use arch::{Directive, Op, Reg};
use std::iter::Peekable;
use std::num::{IntErrorKind, ParseIntError};
use std::str::Chars;

pub struct Lexer<'a> {
    iter: Peekable<Chars<'a>>,
    line: usize,
    pushed: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            iter: src.chars().peekable(),
            line: 1,
            pushed: None,
        }
    }

    /// Current line (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns a token to be read again by the next call. One token of lookahead.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(self.pushed.is_none(), "lookahead is one token");
        self.pushed = Some(token);
    }

    /// Reads the next token. Identifiers already bound in `symbols` come back as numbers.
    pub fn next_token(&mut self, symbols: &mut SymbolTable) -> Result<Token, Error> {
        if let Some(token) = self.pushed.take() {
            return Ok(token);
        }

        // 0. Skip blanks, comment runs to end of line
        while let Some(&c) = self.iter.peek() {
            if c == ';' {
                for c in self.iter.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
                self.line += 1;
                return Ok(Token::Eol);
            }
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.iter.next();
        }

        // 1. End of input
        let Some(c) = self.iter.next() else {
            return Ok(Token::End);
        };

        // 2. End of line
        if c == '\n' {
            self.line += 1;
            return Ok(Token::Eol);
        }

        // 3. Single character token
        if let Some(token) = single_char_token(c) {
            return Ok(token);
        }

        // 4. Directive
        if c == '.' {
            let name = self.take_word(c, |ch| ch.is_ascii_alphanumeric());
            return match Directive::parse(&name) {
                Ok(directive) => Ok(Token::Directive(directive)),
                Err(_) => Err(Error::UnknownDirective(self.line, name)),
            };
        }

        // 5. Number literal
        if c.is_ascii_digit() {
            let lexeme = self.take_word(c, |ch| ch.is_ascii_alphanumeric());
            return match parse_with_radix(&lexeme) {
                Ok(value) => match u8::try_from(value) {
                    Ok(value) => Ok(Token::Number(value)),
                    Err(_) => Err(Error::NumberTooBig(self.line, lexeme)),
                },
                Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                    Err(Error::NumberTooBig(self.line, lexeme))
                }
                Err(_) => Err(Error::InvalidNumber(self.line, lexeme)),
            };
        }

        // 6. Opcode, register, known symbol or forward reference
        if c.is_ascii_alphabetic() || c == '_' {
            let lexeme = self.take_word(c, |ch| ch.is_ascii_alphanumeric() || ch == '_');
            if let Ok(op) = Op::parse(&lexeme) {
                return Ok(Token::Op(op));
            }
            if let Ok(reg) = Reg::parse(&lexeme) {
                return Ok(Token::Reg(reg));
            }
            if let Some(value) = symbols.reference(&lexeme) {
                return Ok(Token::Number(value));
            }
            return Ok(Token::Symbol(lexeme));
        }

        // 7. Error
        Err(Error::UnexpectedChar(self.line, c))
    }

    fn take_word(&mut self, head: char, cond: fn(char) -> bool) -> String {
        let mut word = String::from(head);
        while let Some(ch) = self.iter.next_if(|ch| cond(*ch)) {
            word.push(ch);
        }
        word
    }
}

/// `0x1f` and `1fh` are hexadecimal, anything else decimal.
fn parse_with_radix(s: &str) -> Result<u32, ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(hex) = s.strip_suffix(|c: char| c == 'h' || c == 'H') {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix() {
        assert_eq!(parse_with_radix("12"), Ok(12));
        assert_eq!(parse_with_radix("0x0C"), Ok(12));
        assert_eq!(parse_with_radix("0Ch"), Ok(12));
        assert_eq!(parse_with_radix("0ffH"), Ok(255));
        assert!(parse_with_radix("0x").is_err());
        assert!(parse_with_radix("12z").is_err());
    }

    #[test]
    fn pushback() {
        let mut symbols = SymbolTable::new();
        let mut lexer = Lexer::new("nop ,");
        let tok = lexer.next_token(&mut symbols).unwrap();
        assert_eq!(tok, Token::Op(Op::NOP));
        lexer.push_back(tok);
        assert_eq!(lexer.next_token(&mut symbols).unwrap(), Token::Op(Op::NOP));
        assert_eq!(lexer.next_token(&mut symbols).unwrap(), Token::Comma);
        assert_eq!(lexer.next_token(&mut symbols).unwrap(), Token::End);
        assert_eq!(lexer.next_token(&mut symbols).unwrap(), Token::End);
    }

    #[test]
    fn line_count() {
        let mut symbols = SymbolTable::new();
        let mut lexer = Lexer::new("\n; comment\n\nnop");
        for _ in 0..3 {
            assert_eq!(lexer.next_token(&mut symbols).unwrap(), Token::Eol);
        }
        assert_eq!(lexer.line(), 4);
        assert_eq!(lexer.next_token(&mut symbols).unwrap(), Token::Op(Op::NOP));
    }
}
