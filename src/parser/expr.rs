use super::{sync, ParseResult, Parser, Status};
use crate::lexer::token::TokenKind;

fn relational_op(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Equal => " == ",
        TokenKind::NotEq => " != ",
        TokenKind::Less => " < ",
        TokenKind::LessEq => " <= ",
        TokenKind::Greater => " > ",
        TokenKind::GreaterEq => " >= ",
        _ => unreachable!("{kind:?} is not a relational operator"),
    }
}

fn binary_op(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => " + ",
        TokenKind::Minus => " - ",
        TokenKind::Star => " * ",
        TokenKind::Slash => " / ",
        _ => unreachable!("{kind:?} is not an arithmetic operator"),
    }
}

impl<'a> Parser<'a> {
    /// `<expression> <relop> <expression>`. Nothing consumes the operands of
    /// a condition, so the workspace is emptied afterwards.
    pub(super) fn condition(&mut self) -> ParseResult<Status> {
        let mut status = self.expression()?;

        if !self.token.kind.is_relational() {
            status.merge(self.syntax_error("relational operator", sync::CONDITION_OPERATOR)?);
        }
        if self.token.kind.is_relational() {
            self.out.fragment(relational_op(self.token.kind));
            self.advance()?;
            status.merge(self.expression()?);
        } else if sync::FIRST_EXPRESSION.contains(&self.token.kind) {
            status.merge(self.expression()?);
        }

        self.sem.clear_workspace();
        Ok(status)
    }

    pub(super) fn expression(&mut self) -> ParseResult<Status> {
        let mut status = self.term()?;
        while matches!(self.token.kind, TokenKind::Plus | TokenKind::Minus) {
            self.out.fragment(binary_op(self.token.kind));
            self.advance()?;
            status.merge(self.term()?);
        }
        Ok(status)
    }

    fn term(&mut self) -> ParseResult<Status> {
        if matches!(self.token.kind, TokenKind::Plus | TokenKind::Minus) {
            self.out.fragment(&self.token.lexeme);
            self.advance()?;
        }

        let mut status = self.factor()?;
        while matches!(self.token.kind, TokenKind::Star | TokenKind::Slash) {
            self.out.fragment(binary_op(self.token.kind));
            self.advance()?;
            status.merge(self.factor()?);
        }
        Ok(status)
    }

    fn factor(&mut self) -> ParseResult<Status> {
        match self.token.kind {
            TokenKind::Identifier => {
                let result = self.sem.check_variable(&self.token.lexeme);
                self.report_semantic(self.token.line, result);
                self.sem.push_operand(&self.token);
                self.out.fragment(&self.token.lexeme);
            }
            TokenKind::IntLiteral => {
                self.sem.push_operand(&self.token);
                self.out.fragment(&self.token.lexeme);
            }
            TokenKind::RealLiteral => {
                self.sem.push_operand(&self.token);
                let literal = self.token.lexeme.replace(',', ".");
                self.out.fragment(&literal);
            }
            TokenKind::LParen => {
                self.advance()?;
                self.out.fragment("(");
                let mut status = self.expression()?;
                self.out.fragment(")");
                if self.check(TokenKind::RParen) {
                    self.advance()?;
                } else {
                    status.merge(self.syntax_error("`)`", sync::FOLLOW_FACTOR)?);
                }
                return Ok(status);
            }
            _ => return self.syntax_error("factor", sync::FOLLOW_FACTOR),
        }

        self.advance()?;
        Ok(Status::Clean)
    }
}
