use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Star,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Assign,
    Semicolon,

    Less,
    LessEq,
    NotEq,
    Equal,
    Greater,
    GreaterEq,

    KWhile,
    KThen,
    KWrite,
    KDo,
    KEnd,
    KBegin,
    KInteger,
    KRead,
    KProcedure,
    KProgram,
    KReal,
    KIf,
    KElse,
    KVar,

    IntLiteral,
    RealLiteral,
    Identifier,

    Error,
    EOF,
}

impl TokenKind {
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEq
                | TokenKind::Less
                | TokenKind::LessEq
                | TokenKind::Greater
                | TokenKind::GreaterEq
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, line: usize) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new("", TokenKind::EOF, line)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "<eof>"),
            _ => write!(f, "`{}`", self.lexeme),
        }
    }
}
