use crate::msg::Msg;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Files
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    // Lexical
    #[error("integer constant too big: `{1}` at line #{0}")]
    NumberTooBig(usize, String),

    #[error("malformed integer constant: `{1}` at line #{0}")]
    InvalidNumber(usize, String),

    #[error("unexpected character `{1}` at line #{0}")]
    UnexpectedChar(usize, char),

    #[error("unknown directive `{1}` at line #{0}")]
    UnknownDirective(usize, String),

    // Syntax
    #[error("invalid token at line #{0}")]
    InvalidStatement(usize),

    #[error("expected colon next to label `{1}` at line #{0}")]
    ExpectedColon(usize, String),

    #[error("operand A required at line #{0}")]
    ExpectedOperandA(usize),

    #[error("operand B required at line #{0}")]
    ExpectedOperandB(usize),

    #[error("bad operand B type at line #{0}")]
    BadOperandB(usize),

    #[error("expected comma next to register name at line #{0}")]
    ExpectedComma(usize),

    #[error("syntax error at line #{0}")]
    Syntax(usize),

    #[error("invalid token next to statement at line #{0}")]
    TrailingToken(usize),

    #[error("expected number at line #{0}")]
    ExpectedNumber(usize),

    #[error("expected start address at line #{0}")]
    ExpectedAddress(usize),

    #[error("redefinition of symbol at line #{0}")]
    Redefinition(usize),

    // Addressing
    #[error("IX relative only at line #{0}")]
    IndexRegisterOnly(usize),

    #[error("address exceeds 0xFF at line #{0}")]
    AddressOverflow(usize),

    // Resolution
    #[error("undefined symbol `{1}` referenced at line #{0}")]
    UndefinedSymbol(usize, String),
}

impl Error {
    /// Source line the error was detected at (1-based).
    pub fn line(&self) -> Option<usize> {
        use Error::*;
        match self {
            FileOpen(..) | FileRead(..) | FileCreate(..) | FileWrite(..) => None,
            NumberTooBig(line, _)
            | InvalidNumber(line, _)
            | UnexpectedChar(line, _)
            | UnknownDirective(line, _)
            | ExpectedColon(line, _)
            | UndefinedSymbol(line, _) => Some(*line),
            InvalidStatement(line)
            | ExpectedOperandA(line)
            | ExpectedOperandB(line)
            | BadOperandB(line)
            | ExpectedComma(line)
            | Syntax(line)
            | TrailingToken(line)
            | ExpectedNumber(line)
            | ExpectedAddress(line)
            | Redefinition(line)
            | IndexRegisterOnly(line)
            | AddressOverflow(line) => Some(*line),
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, src: &str) {
        let msg = Msg::Error(self.to_string());
        match self.line() {
            Some(line) => {
                let raw = src.lines().nth(line.saturating_sub(1)).unwrap_or("");
                msg.print((file, line, raw));
            }
            None => msg.header(),
        }
    }
}
