use log::debug;

use super::{sync, ParseResult, Parser, Status};
use crate::lexer::token::TokenKind;
use crate::semantic::r#type::VarType;

impl<'a> Parser<'a> {
    /// Declaration lines up to the first token that can't start one. A line
    /// starting with an identifier is taken as a declaration missing its
    /// `var`.
    pub(super) fn var_declarations(&mut self) -> ParseResult<Status> {
        let mut status = Status::Clean;
        loop {
            match self.token.kind {
                TokenKind::KVar => self.advance()?,
                TokenKind::Identifier => {
                    let err = self.expected("`var`");
                    self.diagnostics.report(self.token.line, err);
                    status = Status::Recovered;
                }
                _ => return Ok(status),
            }
            status.merge(self.variables()?);
        }
    }

    /// `a, b : inteiro ;` after a `var`. Emits one C declaration listing the
    /// names as they come off the workspace, i.e. last name first.
    fn variables(&mut self) -> ParseResult<Status> {
        let mut status = self.identifier_list(sync::DECLARED_NAMES)?;
        status.merge(self.expect(TokenKind::Colon, "`:`", sync::DECLARATION_TYPE)?);

        match VarType::from_keyword(self.token.kind) {
            Some(ty) => {
                let names: Vec<String> =
                    self.sem.workspace().iter().map(|o| o.name.clone()).collect();
                let line = self.token.line;
                for err in self.sem.declare_variables(ty) {
                    self.diagnostics.report(line, err);
                }
                self.out.declare(ty, &names);
                self.advance()?;
            }
            None => {
                self.sem.clear_workspace();
                status.merge(self.syntax_error("`inteiro` or `real`", sync::AFTER_VAR_TYPE)?);
            }
        }

        if self.check(TokenKind::Semicolon) {
            self.advance()?;
        } else {
            status.merge(self.syntax_error("`;`", sync::AFTER_VAR_DECLARATION)?);
        }
        Ok(status)
    }

    /// Pushes each identifier of a comma-separated list onto the workspace.
    pub(super) fn identifier_list(&mut self, sync: &[TokenKind]) -> ParseResult<Status> {
        loop {
            if !self.check(TokenKind::Identifier) {
                return self.syntax_error("identifier", sync);
            }
            self.sem.push_operand(&self.token);
            self.advance()?;

            if !self.check(TokenKind::Comma) {
                return Ok(Status::Clean);
            }
            self.advance()?;
        }
    }

    pub(super) fn procedure_declarations(&mut self) -> ParseResult<Status> {
        let mut status = Status::Clean;
        while self.check(TokenKind::KProcedure) {
            self.advance()?;
            status.merge(self.procedure()?);
        }
        Ok(status)
    }

    fn procedure(&mut self) -> ParseResult<Status> {
        self.sem.enter_procedure();

        let mut status = Status::Clean;
        let name = if self.check(TokenKind::Identifier) {
            let name = self.token.clone();
            self.advance()?;
            Some(name)
        } else {
            status.merge(self.syntax_error("procedure name", sync::PROCEDURE_NAME)?);
            None
        };
        let name_str = name.as_ref().map(|t| t.lexeme.as_str()).unwrap_or_default();
        self.out.procedure_header(name_str);

        if self.check(TokenKind::LParen) {
            self.advance()?;
            status.merge(self.parameter_list()?);
            status.merge(self.expect(TokenKind::RParen, "`)`", sync::AFTER_PARAMETERS)?);
        }
        self.out.fragment(")");
        status.merge(self.expect(TokenKind::Semicolon, "`;`", sync::AFTER_PROCEDURE_HEADER)?);

        match name {
            Some(name) if status == Status::Clean => {
                let result = self.sem.declare_procedure(&name.lexeme);
                self.report_semantic(name.line, result);
            }
            _ => debug!("procedure header not recognized, signature not recorded"),
        }

        self.out.open_block();
        status.merge(self.procedure_body()?);
        self.out.close_block();

        self.sem.leave_procedure();
        Ok(status)
    }

    /// Parameter groups `a, b : inteiro ; c : real`, declared in the local
    /// scope and emitted in source order.
    fn parameter_list(&mut self) -> ParseResult<Status> {
        let mut status = Status::Clean;
        let mut first = true;
        loop {
            status.merge(self.identifier_list(sync::DECLARED_NAMES)?);
            status.merge(self.expect(TokenKind::Colon, "`:`", sync::DECLARATION_TYPE)?);

            match VarType::from_keyword(self.token.kind) {
                Some(ty) => {
                    let names = self.sem.pending_in_order();
                    if !first {
                        self.out.fragment(", ");
                    }
                    self.out.parameters(ty, &names);

                    let line = self.token.line;
                    for err in self.sem.declare_variables(ty) {
                        self.diagnostics.report(line, err);
                    }
                    self.advance()?;
                }
                None => {
                    self.sem.clear_workspace();
                    status.merge(self.syntax_error("`inteiro` or `real`", sync::AFTER_PARAMETER_TYPE)?);
                }
            }
            first = false;

            if !self.check(TokenKind::Semicolon) {
                return Ok(status);
            }
            self.advance()?;
        }
    }

    fn procedure_body(&mut self) -> ParseResult<Status> {
        let mut status = self.var_declarations()?;
        status.merge(self.expect(TokenKind::KBegin, "`inicio`", sync::STATEMENT_START)?);
        status.merge(self.commands()?);
        status.merge(self.expect(TokenKind::KEnd, "`fim`", sync::AFTER_PROCEDURE_END)?);
        status.merge(self.expect(TokenKind::Semicolon, "`;`", sync::AFTER_PROCEDURE)?);
        Ok(status)
    }
}
