use crate::error::ScanError;
use crate::token::{Kind, Literal, Token};

/// Single-pass scanner over a decoded source buffer. Faults are reported
/// through the injected callback; every kind is non-fatal and scanning
/// resumes at the next dispatch step.
pub struct Scanner<F> {
    chars: Vec<char>,
    start: usize,
    start_line: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    on_error: F,
}

impl<F: FnMut(usize, ScanError)> Scanner<F> {
    pub fn new(source: &str, on_error: F) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            start_line: 1,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            on_error,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(Kind::Eof, String::new(), None, self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(Kind::LeftParen),
            ')' => self.add_token(Kind::RightParen),
            '{' => self.add_token(Kind::LeftBrace),
            '}' => self.add_token(Kind::RightBrace),
            ',' => self.add_token(Kind::Comma),
            '.' => self.add_token(Kind::Dot),
            '-' => self.add_token(Kind::Minus),
            '+' => self.add_token(Kind::Plus),
            ';' => self.add_token(Kind::Semicolon),
            '*' => self.add_token(Kind::Star),

            '!' => {
                let kind = if self.matches('=') {
                    Kind::BangEqual
                } else {
                    Kind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    Kind::EqualEqual
                } else {
                    Kind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    Kind::LessEqual
                } else {
                    Kind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    Kind::GreaterEqual
                } else {
                    Kind::Greater
                };
                self.add_token(kind);
            }

            '/' => {
                if self.matches('/') {
                    self.skip_line_comment();
                } else if self.matches('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(Kind::Slash);
                }
            }

            '"' => self.scan_string(),

            ' ' | '\r' | '\t' => {}

            '\n' => self.line += 1,

            _ => {
                if c.is_ascii_digit() {
                    self.scan_number();
                } else if is_alpha(c) {
                    self.scan_identifier();
                } else {
                    self.report(ScanError::UnexpectedCharacter);
                }
            }
        }
    }

    /// Strings may span lines; the literal is the raw text between the
    /// quotes, no escape processing.
    fn scan_string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.report(ScanError::UnterminatedString);
            return;
        }

        self.advance(); // closing quote

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(Kind::String, Some(Literal::Str(value)));
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part needs a digit after the dot; a trailing dot is
        // left for the next dispatch step.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        match self.lexeme().parse::<f64>() {
            Ok(value) => self.add_literal_token(Kind::Number, Some(Literal::Number(value))),
            Err(_) => self.report(ScanError::InvalidNumber),
        }
    }

    fn scan_identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        match Kind::keyword(&self.lexeme()) {
            Some(keyword) => self.add_token(keyword),
            None => self.add_token(Kind::Identifier),
        }
    }

    fn skip_line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    /// Block comments do not nest: the first `*/` closes the comment.
    fn skip_block_comment(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                '\n' => {
                    self.line += 1;
                    self.advance();
                }
                '*' if self.peek_next() == '/' => {
                    self.current += 2;
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }

        self.report(ScanError::UnterminatedComment);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: Kind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: Kind, literal: Option<Literal>) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line));
    }

    fn report(&mut self, error: ScanError) {
        (self.on_error)(self.line, error);
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
