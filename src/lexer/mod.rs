pub mod reserved;
pub mod token;

#[cfg(test)]
mod test;

use log::trace;
use multipeek::{multipeek, MultiPeek};
use std::str::Chars;
use thiserror::Error;
use token::{Token, TokenKind};

/// Longest lexeme the scanner accepts.
pub const MAX_LEXEME_LEN: usize = 255;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorType {
    #[error("invalid token {0:?}")]
    InvalidSymbol(char),

    #[error("token longer than {max} characters ({0})", max = MAX_LEXEME_LEN)]
    TooLong(usize),

    #[error("unterminated comment")]
    UnterminatedComment,
}

#[derive(Debug)]
pub struct LexerError {
    pub token: Token,
    pub error: LexerErrorType,
}

pub type LexerResult = Result<Token, LexerError>;

pub struct Lexer<'a> {
    input: MultiPeek<Chars<'a>>,
    line: usize,
    start_line: usize,
    lexeme: String,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: multipeek(input.chars()),
            line: 1,
            start_line: 1,
            lexeme: String::new(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn peek(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    fn peek_next(&mut self) -> Option<char> {
        self.input.peek_nth(1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    /// Moves the next character into the current lexeme.
    fn take(&mut self) {
        if let Some(c) = self.advance() {
            self.lexeme.push(c);
        }
    }

    fn take_if(&mut self, expected: &[char]) -> bool {
        match self.peek() {
            Some(c) if expected.contains(&c) => {
                self.take();
                true
            }
            _ => false,
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(self.lexeme.as_str(), kind, self.start_line)
    }

    fn make_error(&self, error: LexerErrorType) -> LexerError {
        LexerError {
            token: self.make_token(TokenKind::Error),
            error,
        }
    }

    fn finish(&self, kind: TokenKind) -> LexerResult {
        if self.lexeme.chars().count() > MAX_LEXEME_LEN {
            Err(self.make_error(LexerErrorType::TooLong(self.lexeme.chars().count())))
        } else {
            Ok(self.make_token(kind))
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Discards a `{ ... }` comment, opening brace included.
    fn comment(&mut self) -> Result<(), LexerError> {
        self.advance();
        loop {
            match self.advance() {
                Some('}') => return Ok(()),
                Some(_) => {}
                None => return Err(self.make_error(LexerErrorType::UnterminatedComment)),
            }
        }
    }

    fn number(&mut self) -> LexerResult {
        while let Some('0'..='9') = self.peek() {
            self.take();
        }

        // The separator only belongs to the number when a digit follows it.
        if let (Some(','), Some('0'..='9')) = (self.peek(), self.peek_next()) {
            self.take();
            while let Some('0'..='9') = self.peek() {
                self.take();
            }
            self.finish(TokenKind::RealLiteral)
        } else {
            self.finish(TokenKind::IntLiteral)
        }
    }

    fn identifier(&mut self) -> LexerResult {
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            self.take();
        }

        let keyword = if self.lexeme.bytes().all(|b| b.is_ascii_lowercase()) {
            reserved::classify(&self.lexeme)
        } else {
            None
        };
        self.finish(keyword.unwrap_or(TokenKind::Identifier))
    }

    /// `<`, `>` and `:` may extend to a two-character operator.
    fn operator(&mut self, extensions: &[char]) -> LexerResult {
        self.take();
        self.take_if(extensions);
        self.symbol()
    }

    fn symbol(&mut self) -> LexerResult {
        match reserved::classify(&self.lexeme) {
            Some(kind) => Ok(self.make_token(kind)),
            None => {
                let c = self.lexeme.chars().next().unwrap_or('\0');
                Err(self.make_error(LexerErrorType::InvalidSymbol(c)))
            }
        }
    }
}

impl<'a> Lexer<'a> {
    /// Scans the next token. End of input yields an `EOF` token, which is
    /// returned again on every later call.
    pub fn next_token(&mut self) -> LexerResult {
        loop {
            self.skip_whitespace();
            self.lexeme.clear();
            self.start_line = self.line;

            let Some(c) = self.peek() else {
                return Ok(Token::eof(self.line));
            };

            let result = match c {
                '{' => {
                    self.comment()?;
                    continue;
                }
                '0'..='9' => self.number(),
                '<' => self.operator(&['=', '>']),
                '>' | ':' => self.operator(&['=']),
                c if c.is_ascii_alphabetic() => self.identifier(),
                _ => {
                    self.take();
                    self.symbol()
                }
            };

            if let Ok(token) = &result {
                trace!("line {}: {:?} {:?}", token.line, token.kind, token.lexeme);
            }
            return result;
        }
    }

    /// Scans the whole input, stopping at the first error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::EOF {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }
}
