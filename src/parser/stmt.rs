use log::debug;

use super::{sync, ParseResult, Parser, Status};
use crate::lexer::token::TokenKind;

impl<'a> Parser<'a> {
    /// `( <command> ";" )*` up to the `fim` that closes the block.
    pub(super) fn commands(&mut self) -> ParseResult<Status> {
        let mut status = Status::Clean;
        loop {
            match self.token.kind {
                TokenKind::KEnd | TokenKind::Dot | TokenKind::EOF => return Ok(status),
                kind if sync::FIRST_COMMAND.contains(&kind) => {
                    status.merge(self.command()?);
                    if self.check(TokenKind::Semicolon) {
                        self.advance()?;
                        continue;
                    }
                    status.merge(self.syntax_error("`;`", sync::COMMAND_SEPARATOR)?);
                }
                _ => {
                    status.merge(self.syntax_error("command", sync::COMMAND_SEPARATOR)?);
                }
            }

            if self.check(TokenKind::Semicolon) {
                self.advance()?;
            }
        }
    }

    pub(super) fn command(&mut self) -> ParseResult<Status> {
        match self.token.kind {
            TokenKind::KRead | TokenKind::KWrite => self.read_write(),
            TokenKind::KWhile => self.while_command(),
            TokenKind::KIf => self.if_command(),
            TokenKind::Identifier => self.identifier_command(),
            TokenKind::KBegin => self.compound(false),
            _ => self.syntax_error("command", sync::FOLLOW_COMMAND),
        }
    }

    /// Body of `enquanto`/`se`: a compound opens its braces on the header
    /// line, anything else goes one level deeper.
    fn nested_command(&mut self) -> ParseResult<Status> {
        if self.check(TokenKind::KBegin) {
            return self.compound(true);
        }

        self.out.indent();
        let status = self.command();
        self.out.dedent();
        status
    }

    fn compound(&mut self, on_header_line: bool) -> ParseResult<Status> {
        self.advance()?;
        if on_header_line {
            self.out.open_block();
        } else {
            self.out.newline();
            self.out.fragment("{");
            self.out.indent();
        }

        let mut status = self.commands()?;
        status.merge(self.expect(TokenKind::KEnd, "`fim`", sync::COMPOUND_END)?);
        self.out.close_block();
        Ok(status)
    }

    /// `le(a, b)` / `escreve(a, b)`: one `scanf`/`printf` over the whole
    /// list.
    fn read_write(&mut self) -> ParseResult<Status> {
        let is_read = self.check(TokenKind::KRead);
        let line = self.token.line;
        self.advance()?;

        let mut status = self.expect(TokenKind::LParen, "`(`", sync::OPEN_LIST)?;
        if self.check(TokenKind::Identifier) {
            status.merge(self.identifier_list(sync::CLOSE_LIST)?);
        }
        status.merge(self.expect(TokenKind::RParen, "`)`", sync::FOLLOW_COMMAND)?);

        let operands = self.sem.drain_in_order();
        for err in self.sem.check_read_write(&operands) {
            self.diagnostics.report(line, err);
        }
        self.out.read_write(is_read, &operands);
        Ok(status)
    }

    fn while_command(&mut self) -> ParseResult<Status> {
        self.advance()?;
        self.out.newline();
        self.out.fragment("while (");

        let mut status = self.condition()?;
        self.out.fragment(")");
        status.merge(self.expect(TokenKind::KDo, "`faca`", sync::AFTER_CONDITION)?);
        status.merge(self.nested_command()?);
        Ok(status)
    }

    /// `se c entao x fim` or `se c entao x senao y`.
    fn if_command(&mut self) -> ParseResult<Status> {
        self.advance()?;
        self.out.newline();
        self.out.fragment("if (");

        let mut status = self.condition()?;
        self.out.fragment(")");
        status.merge(self.expect(TokenKind::KThen, "`entao`", sync::AFTER_CONDITION)?);
        status.merge(self.nested_command()?);

        match self.token.kind {
            TokenKind::KEnd => self.advance()?,
            TokenKind::KElse => {}
            _ => status.merge(self.syntax_error("`fim` or `senao`", sync::FOLLOW_COMMAND)?),
        }

        if self.check(TokenKind::KElse) {
            self.advance()?;
            self.out.newline();
            self.out.fragment("else");
            status.merge(self.nested_command()?);
        }
        Ok(status)
    }

    /// Assignment or procedure call, told apart by the `:=`.
    fn identifier_command(&mut self) -> ParseResult<Status> {
        let target = self.token.clone();
        self.advance()?;

        if !self.check(TokenKind::Assign) {
            return self.call(&target.lexeme, target.line);
        }
        self.advance()?;

        let result = self.sem.check_variable(&target.lexeme);
        self.report_semantic(target.line, result);
        self.sem.push_operand(&target);

        self.out.newline();
        self.out.fragment(&target.lexeme);
        self.out.fragment(" = ");
        let status = self.expression()?;
        self.out.fragment(";");

        if status == Status::Clean {
            let result = self.sem.check_assignment();
            self.report_semantic(target.line, result);
        } else {
            self.sem.clear_workspace();
        }
        Ok(status)
    }

    fn call(&mut self, name: &str, line: usize) -> ParseResult<Status> {
        let result = self.sem.check_procedure(name);
        self.report_semantic(line, result);

        self.out.newline();
        self.out.fragment(name);
        self.out.fragment("(");

        let mut status = Status::Clean;
        if self.check(TokenKind::LParen) {
            self.advance()?;
            status.merge(self.argument_list()?);
            status.merge(self.expect(TokenKind::RParen, "`)`", sync::FOLLOW_COMMAND)?);
        }
        self.out.fragment(");");

        if status == Status::Clean {
            let result = self.sem.check_call(name);
            self.report_semantic(line, result);
        } else {
            debug!("call to `{name}` not checked after a syntax error");
            self.sem.clear_workspace();
        }
        Ok(status)
    }

    /// Arguments are variable names separated by `;`.
    fn argument_list(&mut self) -> ParseResult<Status> {
        if !self.check(TokenKind::Identifier) {
            return Ok(Status::Clean);
        }

        loop {
            let result = self.sem.check_variable(&self.token.lexeme);
            self.report_semantic(self.token.line, result);
            self.sem.push_operand(&self.token);
            self.out.fragment(&self.token.lexeme);
            self.advance()?;

            if !self.check(TokenKind::Semicolon) {
                return Ok(Status::Clean);
            }
            self.advance()?;
            self.out.fragment(", ");

            if !self.check(TokenKind::Identifier) {
                return self.syntax_error("identifier", sync::CLOSE_LIST);
            }
        }
    }
}
