mod decl;
mod expr;
mod stmt;
pub mod sync;

#[cfg(test)]
mod test;

use std::fmt::Display;

use log::debug;
use thiserror::Error;

use crate::codegen::Emitter;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::{Lexer, LexerError, LexerErrorType};
use crate::semantic::{Analyzer, SemanticResult};

// <program>     ::= "programa" <ident> ";" <var-decls> <proc-decls> "inicio" <commands> "fim" "."
// <var-decls>   ::= ( "var" <ident-list> ":" <type> ";" )*
// <ident-list>  ::= <ident> ( "," <ident> )*
// <type>        ::= "inteiro" | "real"
// <proc-decls>  ::= ( "procedimento" <ident> ( "(" <params> ")" )? ";" <proc-body> )*
// <params>      ::= <ident-list> ":" <type> ( ";" <ident-list> ":" <type> )*
// <proc-body>   ::= <var-decls> "inicio" <commands> "fim" ";"
// <commands>    ::= ( <command> ";" )*
// <command>     ::= "le" "(" <ident-list> ")"
//                 | "escreve" "(" <ident-list> ")"
//                 | "enquanto" <condition> "faca" <command>
//                 | "se" <condition> "entao" <command> ( "fim" | "senao" <command> )
//                 | <ident> ":=" <expression>
//                 | <ident> ( "(" ( <ident> ( ";" <ident> )* )? ")" )?
//                 | "inicio" <commands> "fim"
// <condition>   ::= <expression> <relop> <expression>
// <expression>  ::= <term> ( ( "+" | "-" ) <term> )*
// <term>        ::= ( "+" | "-" )? <factor> ( ( "*" | "/" ) <factor> )*
// <factor>      ::= <ident> | <integer> | <real> | "(" <expression> ")"

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected {exp}, got {got}")]
    Expected { exp: &'static str, got: String },

    #[error("expected end of file, got {0}")]
    ExpectedEndOfFile(String),
}

/// Input ran out in the middle of a rule. Unwinds the whole translation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unexpected end of file at line {line}")]
pub struct UnexpectedEof {
    pub line: usize,
}

pub type ParseResult<T> = Result<T, UnexpectedEof>;

/// Outcome of a rule that did not hit the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// A syntax error was reported and panic mode resynchronized.
    Recovered,
}

impl Status {
    /// Becomes `Recovered` once any merged rule recovered.
    pub fn merge(&mut self, other: Status) {
        if other == Status::Recovered {
            *self = Status::Recovered;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Finished,
    UnexpectedEof,
    WrittenWithErrors(usize),
    EmptyFile,
}

impl Display for CompileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileStatus::Finished => write!(f, "compilation finished"),
            CompileStatus::UnexpectedEof => write!(f, "unexpected end of file"),
            CompileStatus::WrittenWithErrors(n) => write!(f, "program written with {n} errors"),
            CompileStatus::EmptyFile => write!(f, "empty file"),
        }
    }
}

/// Result of one translation run.
#[derive(Debug)]
pub struct Translation {
    pub status: CompileStatus,
    pub diagnostics: Vec<Diagnostic>,
    /// The C program; present only when the run finished without errors.
    pub output: Option<String>,
}

impl Translation {
    pub fn succeeded(&self) -> bool {
        self.output.is_some()
    }
}

/// Single-pass translator: one method per grammar rule, with semantic
/// checks and C emission performed where each construct is recognized.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
    diagnostics: Diagnostics,
    sem: Analyzer,
    out: Emitter,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            token: Token::eof(1),
            diagnostics: Diagnostics::new(),
            sem: Analyzer::new(),
            out: Emitter::new(),
        }
    }

    pub fn run(mut self) -> Translation {
        let outcome = self.translation_unit();
        let errors = self.diagnostics.count();

        if let Err(UnexpectedEof { line }) = outcome {
            debug!("input ended at line {line}");
        }
        let status = match outcome {
            _ if errors > 0 => CompileStatus::WrittenWithErrors(errors),
            Err(_) => CompileStatus::UnexpectedEof,
            Ok(false) => CompileStatus::EmptyFile,
            Ok(true) => CompileStatus::Finished,
        };

        let output = match status {
            CompileStatus::Finished => self.out.finish(errors),
            _ => None,
        };

        Translation {
            status,
            diagnostics: self.diagnostics.into_vec(),
            output,
        }
    }

    /// Returns `false` if the input holds no tokens at all.
    fn translation_unit(&mut self) -> ParseResult<bool> {
        self.advance()?;
        if self.token.kind == TokenKind::EOF {
            return Ok(false);
        }
        self.program()?;
        Ok(true)
    }

    /// Moves to the next token. Lexical errors are reported and skipped; an
    /// unterminated comment ends the run.
    fn advance(&mut self) -> ParseResult<()> {
        loop {
            match self.lexer.next_token() {
                Ok(token) => {
                    self.token = token;
                    return Ok(());
                }
                Err(LexerError {
                    token,
                    error: LexerErrorType::UnterminatedComment,
                }) => {
                    self.diagnostics
                        .report(token.line, LexerErrorType::UnterminatedComment);
                    self.token = Token::eof(self.lexer.line());
                    return Err(UnexpectedEof { line: token.line });
                }
                Err(err) => self.diagnostics.report(err.token.line, err.error),
            }
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    fn fatal_at_eof(&self) -> ParseResult<()> {
        match self.token.kind {
            TokenKind::EOF => Err(UnexpectedEof {
                line: self.token.line,
            }),
            _ => Ok(()),
        }
    }

    fn expected(&self, exp: &'static str) -> SyntaxError {
        SyntaxError::Expected {
            exp,
            got: self.token.to_string(),
        }
    }

    /// Consumes a token of `kind`, or reports and resynchronizes on `sync`.
    fn expect(
        &mut self,
        kind: TokenKind,
        exp: &'static str,
        sync: &[TokenKind],
    ) -> ParseResult<Status> {
        self.fatal_at_eof()?;
        if self.check(kind) {
            self.advance()?;
            Ok(Status::Clean)
        } else {
            self.syntax_error(exp, sync)
        }
    }

    fn syntax_error(&mut self, exp: &'static str, sync: &[TokenKind]) -> ParseResult<Status> {
        self.fatal_at_eof()?;
        let err = self.expected(exp);
        self.diagnostics.report(self.token.line, err);
        self.panic_mode(sync)?;
        Ok(Status::Recovered)
    }

    /// Discards tokens until one in `sync` comes up. Running out of input
    /// here is fatal.
    fn panic_mode(&mut self, sync: &[TokenKind]) -> ParseResult<()> {
        while !sync.contains(&self.token.kind) {
            self.fatal_at_eof()?;
            debug!("line {}: discarding {}", self.token.line, self.token);
            self.advance()?;
        }
        Ok(())
    }

    fn report_semantic<T>(&mut self, line: usize, result: SemanticResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.diagnostics.report(line, err);
                None
            }
        }
    }

    fn program(&mut self) -> ParseResult<Status> {
        use crate::lexer::token::TokenKind::*;

        let mut status = self.expect(KProgram, "`programa`", sync::AFTER_PROGRAM_KEYWORD)?;
        status.merge(self.expect(Identifier, "program name", sync::AFTER_PROGRAM_NAME)?);
        status.merge(self.expect(Semicolon, "`;`", sync::AFTER_PROGRAM_HEADER)?);

        status.merge(self.var_declarations()?);
        status.merge(self.procedure_declarations()?);

        status.merge(self.expect(KBegin, "`inicio`", sync::STATEMENT_START)?);
        self.out.main_header();
        status.merge(self.commands()?);
        status.merge(self.expect(KEnd, "`fim`", sync::AFTER_PROGRAM_END)?);
        self.out.main_footer();

        status.merge(self.program_end()?);
        Ok(status)
    }

    /// The closing `.` and nothing after it. A missing `.` is reported but
    /// does not count as running out of input.
    fn program_end(&mut self) -> ParseResult<Status> {
        let mut status = Status::Clean;
        if !self.check(TokenKind::Dot) {
            let err = self.expected("`.`");
            self.diagnostics.report(self.token.line, err);
            status = Status::Recovered;

            while !matches!(self.token.kind, TokenKind::Dot | TokenKind::EOF) {
                debug!("line {}: discarding {}", self.token.line, self.token);
                self.advance()?;
            }
            if self.check(TokenKind::EOF) {
                return Ok(status);
            }
        }

        self.advance()?;
        if !self.check(TokenKind::EOF) {
            let err = SyntaxError::ExpectedEndOfFile(self.token.to_string());
            self.diagnostics.report(self.token.line, err);
            status = Status::Recovered;
        }
        Ok(status)
    }
}
