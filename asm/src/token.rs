use arch::{Directive, Op, Reg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    End,
    Eol,

    Op(Op),
    Reg(Reg),
    Directive(Directive),
    Number(u8),
    Symbol(String),

    Comma,    // ','
    Colon,    // ':'
    LBracket, // '['
    RBracket, // ']'
    LParen,   // '('
    RParen,   // ')'
    Plus,     // '+'
}

impl Token {
    /// Closing token matching an opening bracket or paren.
    pub fn closer(&self) -> Option<Token> {
        match self {
            Token::LBracket => Some(Token::RBracket),
            Token::LParen => Some(Token::RParen),
            _ => None,
        }
    }
}

pub fn single_char_token(c: char) -> Option<Token> {
    match c {
        ',' => Some(Token::Comma),
        ':' => Some(Token::Colon),
        '[' => Some(Token::LBracket),
        ']' => Some(Token::RBracket),
        '(' => Some(Token::LParen),
        ')' => Some(Token::RParen),
        '+' => Some(Token::Plus),
        _ => None,
    }
}
