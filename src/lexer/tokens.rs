use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Datatype);
        map.insert("float", TokenKind::Datatype);
        map.insert("main", TokenKind::Keyword);
        map.insert("if", TokenKind::Keyword);
        map.insert("while", TokenKind::Keyword);
        map.insert("printf", TokenKind::Keyword);
        map.insert("scanf", TokenKind::Keyword);
        map
    };
}

/// The closed set of token categories produced by the lexer.
///
/// `Datatype` covers `int` and `float`; `Keyword` covers `main`, `if`,
/// `while`, `printf` and `scanf`. The keyword's text lives in the token's
/// value, which the recognizer inspects when dispatching statements.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,
    Datatype,
    Keyword,

    Assignment,    // =
    Equals,        // ==
    NotEquals,     // !=
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=

    Plus,
    Dash,
    Star,
    Slash,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Semicolon,
    Comma,
    Ampersand,
    Quote,
    Percent,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
