pub mod r#type;
pub mod scope_stack;
pub mod symbol_table;


use log::debug;
use thiserror::Error;

use crate::lexer::token::{Token, TokenKind};
use r#type::{Operand, OperandType, Symbol, SymbolKind, VarType};
use scope_stack::ScopeStack;
use symbol_table::GlobalTable;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("undeclared variable `{0}`")]
    UndeclaredVariable(String),

    #[error("undeclared procedure `{0}`")]
    UndeclaredProcedure(String),

    #[error("variable/procedure `{0}` already declared")]
    Redeclared(String),

    #[error("procedure `{0}` already declared")]
    ProcedureRedeclared(String),

    #[error("real value assigned to integer variable `{0}`")]
    RealAssignedToInteger(String),

    #[error("read/write command without arguments")]
    ReadWriteWithoutArguments,

    #[error("read/write arguments must share one type: `{name}` is {found}, expected {expected}")]
    ReadWriteTypeMismatch {
        name: String,
        expected: OperandType,
        found: OperandType,
    },

    #[error(
        "wrong number or type of arguments for `{name}`: expected {expected_ints} integer and {expected_reals} real, got {got_ints} integer and {got_reals} real"
    )]
    ArgumentMismatch {
        name: String,
        expected_ints: usize,
        expected_reals: usize,
        got_ints: usize,
        got_reals: usize,
    },
}

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Scope-aware name resolution and type checks, driven inline by the
/// parser.
///
/// Holds the global table for the whole run, the local scope of the
/// procedure being translated, and the operand workspace where the parser
/// collects the operands of the construct it is currently recognizing.
#[derive(Debug, Default)]
pub struct Analyzer {
    globals: GlobalTable,
    locals: ScopeStack<Symbol>,
    workspace: ScopeStack<Operand>,
    in_procedure: bool,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn globals(&self) -> &GlobalTable {
        &self.globals
    }

    pub fn locals(&self) -> &ScopeStack<Symbol> {
        &self.locals
    }

    pub fn workspace(&self) -> &ScopeStack<Operand> {
        &self.workspace
    }

    pub fn in_procedure(&self) -> bool {
        self.in_procedure
    }

    pub fn enter_procedure(&mut self) {
        debug!("entering local scope");
        self.in_procedure = true;
    }

    pub fn leave_procedure(&mut self) {
        debug!("leaving local scope ({} symbols)", self.locals.len());
        self.locals.clear();
        self.in_procedure = false;
    }

    fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.locals.lookup(name).or_else(|| self.globals.lookup(name))
    }

    /// Resolves `name` as a variable: local scope first, then the global
    /// scope excluding procedures.
    pub fn check_variable(&self, name: &str) -> SemanticResult<VarType> {
        if let Some(Symbol {
            kind: SymbolKind::Variable(ty),
            ..
        }) = self.locals.lookup(name)
        {
            return Ok(*ty);
        }
        match self.globals.lookup(name) {
            Some(Symbol {
                kind: SymbolKind::Variable(ty),
                ..
            }) => Ok(*ty),
            _ => Err(SemanticError::UndeclaredVariable(name.to_string())),
        }
    }

    /// Resolves `name` as a procedure, returning its integer and real arity.
    pub fn check_procedure(&self, name: &str) -> SemanticResult<(usize, usize)> {
        match self.globals.lookup(name) {
            Some(Symbol {
                kind: SymbolKind::Procedure { ints, reals },
                ..
            }) => Ok((*ints, *reals)),
            _ => Err(SemanticError::UndeclaredProcedure(name.to_string())),
        }
    }

    /// Fails if `name` is already declared in the active scope.
    pub fn check_redeclaration(&self, name: &str) -> SemanticResult<()> {
        let existing = if self.in_procedure {
            self.locals.lookup(name)
        } else {
            self.globals.lookup(name)
        };
        match existing {
            Some(_) => Err(SemanticError::Redeclared(name.to_string())),
            None => Ok(()),
        }
    }

    /// Declares every pending workspace name as a variable of type `ty` in
    /// the active scope, draining the workspace.
    pub fn declare_variables(&mut self, ty: VarType) -> Vec<SemanticError> {
        let mut errors = Vec::new();
        while let Some(operand) = self.workspace.pop() {
            if let Err(err) = self.check_redeclaration(&operand.name) {
                errors.push(err);
                continue;
            }

            let symbol = Symbol::variable(operand.name, ty);
            let inserted = if self.in_procedure {
                self.locals.insert(symbol)
            } else {
                self.globals.insert(symbol)
            };
            if let Err(dup) = inserted {
                errors.push(SemanticError::Redeclared(dup.0));
            }
        }
        errors
    }

    /// Records the signature of the procedure being translated, counting its
    /// parameters from the local scope.
    pub fn declare_procedure(&mut self, name: &str) -> SemanticResult<()> {
        let (ints, reals) = self
            .locals
            .iter()
            .fold((0, 0), |(ints, reals), symbol| match symbol.kind {
                SymbolKind::Variable(VarType::Int) => (ints + 1, reals),
                _ => (ints, reals + 1),
            });
        debug!("declaring procedure `{name}` ({ints} integer, {reals} real)");

        self.globals
            .insert(Symbol::procedure(name, ints, reals))
            .map_err(|_| SemanticError::ProcedureRedeclared(name.to_string()))
    }

    /// Pushes the operand named by `token`, typed by the scope it resolves
    /// in or by its literal kind.
    pub fn push_operand(&mut self, token: &Token) {
        let ty = match token.kind {
            TokenKind::IntLiteral => OperandType::Int,
            TokenKind::RealLiteral => OperandType::Real,
            _ => self
                .resolve(&token.lexeme)
                .map(|symbol| OperandType::from(symbol.kind))
                .unwrap_or(OperandType::Unknown),
        };
        self.workspace.push(Operand::new(token.lexeme.as_str(), ty));
    }

    pub fn clear_workspace(&mut self) {
        self.workspace.clear();
    }

    /// Pending operands in the order they were pushed, without draining.
    pub fn pending_in_order(&self) -> Vec<Operand> {
        let mut inverted = self.workspace.reversed();
        let mut ordered = Vec::with_capacity(inverted.len());
        while let Some(operand) = inverted.pop() {
            ordered.push(operand);
        }
        ordered
    }

    /// Drains the workspace, returning operands in the order they were
    /// pushed.
    pub fn drain_in_order(&mut self) -> Vec<Operand> {
        self.workspace.drain_in_push_order()
    }

    /// Drains the operands of an assignment. The bottom operand is the
    /// target; a real anywhere above it cannot go into an integer target.
    pub fn check_assignment(&mut self) -> SemanticResult<()> {
        let mut saw_real = false;
        let mut target = None;
        while let Some(operand) = self.workspace.pop() {
            saw_real |= operand.ty == OperandType::Real;
            target = Some(operand);
        }

        match target {
            Some(target) if saw_real && target.ty == OperandType::Int => {
                Err(SemanticError::RealAssignedToInteger(target.name))
            }
            _ => Ok(()),
        }
    }

    /// Checks a `le`/`escreve` argument list: every argument must be a
    /// declared variable of the first argument's type.
    pub fn check_read_write(&self, operands: &[Operand]) -> Vec<SemanticError> {
        let Some((first, rest)) = operands.split_first() else {
            return vec![SemanticError::ReadWriteWithoutArguments];
        };

        let mut errors = Vec::new();
        if let Err(err) = self.check_variable(&first.name) {
            errors.push(err);
        }

        for operand in rest {
            match self.check_variable(&operand.name) {
                Err(err) => errors.push(err),
                Ok(_) if operand.ty != first.ty => {
                    errors.push(SemanticError::ReadWriteTypeMismatch {
                        name: operand.name.clone(),
                        expected: first.ty,
                        found: operand.ty,
                    });
                    break;
                }
                Ok(_) => {}
            }
        }
        errors
    }

    /// Drains the call arguments and compares their integer/real counts with
    /// the signature of `name`. Unknown callees pass here; they are reported
    /// by [`Analyzer::check_procedure`].
    pub fn check_call(&mut self, name: &str) -> SemanticResult<()> {
        let (mut got_ints, mut got_reals) = (0, 0);
        while let Some(operand) = self.workspace.pop() {
            match operand.ty {
                OperandType::Int => got_ints += 1,
                _ => got_reals += 1,
            }
        }

        let Ok((expected_ints, expected_reals)) = self.check_procedure(name) else {
            return Ok(());
        };
        if (got_ints, got_reals) == (expected_ints, expected_reals) {
            Ok(())
        } else {
            Err(SemanticError::ArgumentMismatch {
                name: name.to_string(),
                expected_ints,
                expected_reals,
                got_ints,
                got_reals,
            })
        }
    }
}
