use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Reserved words, keyed by their upper-case spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("END", TokenKind::End);
        map.insert("ENDIF", TokenKind::EndIf);
        map.insert("ELSE", TokenKind::Else);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("PRINT", TokenKind::Print);
        map.insert("INT", TokenKind::Int);
        map.insert("FLOAT", TokenKind::Float);
        map.insert("BOOL", TokenKind::Bool);
        map.insert("TRUE", TokenKind::BConst);
        map.insert("FALSE", TokenKind::BConst);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Program,
    End,
    EndIf,
    Else,
    If,
    Then,
    Print,
    Int,
    Float,
    Bool,

    Ident,
    IConst,
    RConst,
    SConst,
    BConst,

    Plus,
    Minus,
    Mult,
    Div,
    Assop, // =
    Equal, // ==
    GThan,
    LThan,
    And,
    Or,
    Not,

    Comma,
    Semicol,
    LParen,
    RParen,

    Err,
    Done,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at line {}", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Ident,
            TokenKind::IConst,
            TokenKind::RConst,
            TokenKind::SConst,
            TokenKind::BConst,
            TokenKind::Err,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
