use crate::error::Error;
use crate::lexer::Lexer;
use crate::output::{Entry, Output, Segment};
use crate::symbol::{SymbolKind, SymbolTable, Usage};
use crate::token::Token;
use arch::{AddrMode, Desc, Directive, Op, Reg, Shape};

// ----------------------------------------------------------------------------
// Translation unit

/// Everything the first pass produced.
#[derive(Debug, Default)]
pub struct Unit {
    pub out: Output,
    pub symbols: SymbolTable,
    pub unresolved: Vec<Usage>,
}

/// Second instruction byte, known now or patched later.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Known(u8),
    Forward(String),
}

// ----------------------------------------------------------------------------
// First pass

pub struct Assembler<'a> {
    lexer: Lexer<'a>,
    unit: Unit,
    /// Address of the next data byte. Runs one past 0xFF before it is rejected.
    addr: u16,
}

impl<'a> Assembler<'a> {
    pub fn new(src: &'a str) -> Self {
        Assembler {
            lexer: Lexer::new(src),
            unit: Unit::default(),
            addr: 0,
        }
    }

    /// Reads every statement. Forward references stay unresolved.
    pub fn run(mut self) -> Result<Unit, Error> {
        loop {
            match self.next()? {
                Token::End => break,
                Token::Eol => {}
                Token::Symbol(name) => self.parse_label(name)?,
                Token::Op(op) => self.parse_inst(op)?,
                Token::Directive(directive) => self.parse_directive(directive)?,
                _ => return Err(Error::InvalidStatement(self.line())),
            }
        }
        Ok(self.unit)
    }

    fn next(&mut self) -> Result<Token, Error> {
        self.lexer.next_token(&mut self.unit.symbols)
    }

    fn line(&self) -> usize {
        self.lexer.line()
    }

    fn emit(&mut self, value: u8) -> Result<(), Error> {
        if self.addr > 0xFF {
            return Err(Error::AddressOverflow(self.line()));
        }
        let line = self.line();
        self.unit.out.push(Entry::Byte(value), line);
        self.addr += 1;
        Ok(())
    }

    fn emit_value(&mut self, value: Value) -> Result<(), Error> {
        match value {
            Value::Known(v) => self.emit(v),
            Value::Forward(name) => {
                let usage = Usage {
                    name,
                    offset: self.unit.out.len(),
                    line: self.line(),
                };
                self.emit(0)?;
                self.unit.unresolved.push(usage);
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Statements

    fn parse_label(&mut self, name: String) -> Result<(), Error> {
        let addr = u8::try_from(self.addr).map_err(|_| Error::AddressOverflow(self.line()))?;
        let line = self.line();
        self.unit
            .symbols
            .define(name.clone(), addr, SymbolKind::Label, line);
        match self.next()? {
            Token::Colon => Ok(()),
            _ => Err(Error::ExpectedColon(self.line(), name)),
        }
    }

    fn parse_inst(&mut self, op: Op) -> Result<(), Error> {
        let desc = op.desc();
        let (a, b) = match desc.shape {
            Shape::Implied => (None, None),
            Shape::RegOnly => (Some(self.parse_operand_a()?), None),
            Shape::Branch => (None, Some(self.parse_operand_b(&desc)?)),
            Shape::Alu => {
                let a = self.parse_operand_a()?;
                self.parse_comma()?;
                (Some(a), Some(self.parse_operand_b(&desc)?))
            }
            Shape::Store => {
                let b = self.parse_operand_b(&desc)?;
                self.parse_comma()?;
                (Some(self.parse_operand_a()?), Some(b))
            }
        };
        let (mode, value) = match b {
            Some((mode, value)) => (Some(mode), value),
            None => (None, None),
        };
        self.emit(desc.encode(a, mode))?;
        if let Some(value) = value {
            self.emit_value(value)?;
        }
        self.parse_eol()
    }

    fn parse_directive(&mut self, directive: Directive) -> Result<(), Error> {
        match directive {
            Directive::Define => match self.next()? {
                Token::Symbol(name) => match self.next()? {
                    Token::Number(value) => {
                        let line = self.line();
                        self.unit
                            .symbols
                            .define(name, value, SymbolKind::Const, line);
                    }
                    _ => return Err(Error::ExpectedNumber(self.line())),
                },
                Token::Number(_) => return Err(Error::Redefinition(self.line())),
                _ => return Err(Error::Syntax(self.line())),
            },
            Directive::Text | Directive::Data => {
                let Token::Number(origin) = self.next()? else {
                    return Err(Error::ExpectedAddress(self.line()));
                };
                let seg = match directive {
                    Directive::Text => Segment::Text,
                    _ => Segment::Data,
                };
                let line = self.line();
                self.unit.out.push(Entry::Marker(seg, origin), line);
                self.addr = origin.into();
            }
            Directive::Byte => loop {
                match self.next()? {
                    Token::Number(value) => self.emit(value)?,
                    token => {
                        self.lexer.push_back(token);
                        break;
                    }
                }
            },
        }
        self.parse_eol()
    }

    fn parse_eol(&mut self) -> Result<(), Error> {
        match self.next()? {
            Token::Eol | Token::End => Ok(()),
            _ => Err(Error::TrailingToken(self.line())),
        }
    }

    fn parse_comma(&mut self) -> Result<(), Error> {
        match self.next()? {
            Token::Comma => Ok(()),
            _ => Err(Error::ExpectedComma(self.line())),
        }
    }

    // ------------------------------------------------------------------------
    // Operands

    fn parse_operand_a(&mut self) -> Result<Reg, Error> {
        match self.next()? {
            Token::Reg(reg) => Ok(reg),
            _ => Err(Error::ExpectedOperandA(self.line())),
        }
    }

    fn parse_operand_b(&mut self, desc: &Desc) -> Result<(AddrMode, Option<Value>), Error> {
        let token = self.next()?;
        match token {
            Token::Reg(reg) => {
                let mode = AddrMode::reg(reg);
                self.check_mode(desc, mode)?;
                Ok((mode, None))
            }
            Token::Number(value) => {
                self.check_mode(desc, AddrMode::Imm)?;
                Ok((AddrMode::Imm, Some(Value::Known(value))))
            }
            Token::Symbol(name) => {
                self.check_mode(desc, AddrMode::Imm)?;
                Ok((AddrMode::Imm, Some(Value::Forward(name))))
            }
            Token::LBracket | Token::LParen => {
                let (abs, idx) = if token == Token::LParen {
                    (AddrMode::AbsStore, AddrMode::IdxStore)
                } else {
                    (AddrMode::Abs, AddrMode::Idx)
                };
                self.check_mode(desc, abs)?;
                let (mode, value) = match self.next()? {
                    Token::Number(value) => (abs, Value::Known(value)),
                    Token::Symbol(name) => (abs, Value::Forward(name)),
                    Token::Reg(reg) => {
                        if reg != Reg::IX {
                            return Err(Error::IndexRegisterOnly(self.line()));
                        }
                        if self.next()? != Token::Plus {
                            return Err(Error::Syntax(self.line()));
                        }
                        (idx, self.parse_value()?)
                    }
                    _ => return Err(Error::Syntax(self.line())),
                };
                if Some(self.next()?) != token.closer() {
                    return Err(Error::Syntax(self.line()));
                }
                Ok((mode, Some(value)))
            }
            _ => Err(Error::ExpectedOperandB(self.line())),
        }
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        match self.next()? {
            Token::Number(value) => Ok(Value::Known(value)),
            Token::Symbol(name) => Ok(Value::Forward(name)),
            _ => Err(Error::Syntax(self.line())),
        }
    }

    fn check_mode(&self, desc: &Desc, mode: AddrMode) -> Result<(), Error> {
        match desc.accepts(mode) {
            true => Ok(()),
            false => Err(Error::BadOperandB(self.line())),
        }
    }
}
