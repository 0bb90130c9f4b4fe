use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: Kind, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {}", self.kind, self.lexeme),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{}", value),
            Literal::Str(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Kind {
    // Single-character tokens
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    Dot,        // .
    Minus,      // -
    Plus,       // +
    Semicolon,  // ;
    Slash,      // /
    Star,       // *

    // One or two character tokens
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof, // End of input marker
}

impl Kind {
    /// Look up the keyword kind for an identifier-shaped lexeme.
    pub fn keyword(ident: &str) -> Option<Kind> {
        match ident {
            "and" => Some(Kind::And),
            "class" => Some(Kind::Class),
            "else" => Some(Kind::Else),
            "false" => Some(Kind::False),
            "fun" => Some(Kind::Fun),
            "for" => Some(Kind::For),
            "if" => Some(Kind::If),
            "nil" => Some(Kind::Nil),
            "or" => Some(Kind::Or),
            "print" => Some(Kind::Print),
            "return" => Some(Kind::Return),
            "super" => Some(Kind::Super),
            "this" => Some(Kind::This),
            "true" => Some(Kind::True),
            "var" => Some(Kind::Var),
            "while" => Some(Kind::While),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::LeftParen => "LEFT_PAREN",
            Kind::RightParen => "RIGHT_PAREN",
            Kind::LeftBrace => "LEFT_BRACE",
            Kind::RightBrace => "RIGHT_BRACE",
            Kind::Comma => "COMMA",
            Kind::Dot => "DOT",
            Kind::Minus => "MINUS",
            Kind::Plus => "PLUS",
            Kind::Semicolon => "SEMICOLON",
            Kind::Slash => "SLASH",
            Kind::Star => "STAR",
            Kind::Bang => "BANG",
            Kind::BangEqual => "BANG_EQUAL",
            Kind::Equal => "EQUAL",
            Kind::EqualEqual => "EQUAL_EQUAL",
            Kind::Greater => "GREATER",
            Kind::GreaterEqual => "GREATER_EQUAL",
            Kind::Less => "LESS",
            Kind::LessEqual => "LESS_EQUAL",
            Kind::Identifier => "IDENTIFIER",
            Kind::String => "STRING",
            Kind::Number => "NUMBER",
            Kind::And => "AND",
            Kind::Class => "CLASS",
            Kind::Else => "ELSE",
            Kind::False => "FALSE",
            Kind::Fun => "FUN",
            Kind::For => "FOR",
            Kind::If => "IF",
            Kind::Nil => "NIL",
            Kind::Or => "OR",
            Kind::Print => "PRINT",
            Kind::Return => "RETURN",
            Kind::Super => "SUPER",
            Kind::This => "THIS",
            Kind::True => "TRUE",
            Kind::Var => "VAR",
            Kind::While => "WHILE",
            Kind::Eof => "EOF",
        };
        write!(f, "{}", name)
    }
}
