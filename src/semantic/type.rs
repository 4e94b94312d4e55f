use std::fmt::Display;

use crate::lexer::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Real,
}

impl VarType {
    /// Maps a type keyword (`inteiro`, `real`) to its type.
    pub fn from_keyword(kind: TokenKind) -> Option<VarType> {
        match kind {
            TokenKind::KInteger => Some(VarType::Int),
            TokenKind::KReal => Some(VarType::Real),
            _ => None,
        }
    }

    pub fn c_name(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Real => "float",
        }
    }

    pub fn format_spec(&self) -> &'static str {
        match self {
            VarType::Int => "%d",
            VarType::Real => "%f",
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Int => write!(f, "integer"),
            VarType::Real => write!(f, "real"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable(VarType),
    Procedure { ints: usize, reals: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn variable(name: impl Into<String>, ty: VarType) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Variable(ty),
        }
    }

    pub fn procedure(name: impl Into<String>, ints: usize, reals: usize) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Procedure { ints, reals },
        }
    }

    pub fn is_procedure(&self) -> bool {
        matches!(self.kind, SymbolKind::Procedure { .. })
    }
}

/// Type of a pending operand in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandType {
    Int,
    Real,
    Procedure,
    /// Name not found in any scope.
    Unknown,
}

impl From<SymbolKind> for OperandType {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Variable(VarType::Int) => OperandType::Int,
            SymbolKind::Variable(VarType::Real) => OperandType::Real,
            SymbolKind::Procedure { .. } => OperandType::Procedure,
        }
    }
}

impl Display for OperandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandType::Int => write!(f, "integer"),
            OperandType::Real => write!(f, "real"),
            OperandType::Procedure => write!(f, "procedure"),
            OperandType::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub name: String,
    pub ty: OperandType,
}

impl Operand {
    pub fn new(name: impl Into<String>, ty: OperandType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Format specifier used by `scanf`/`printf`; anything but an integer
    /// is read and written as a float.
    pub fn format_spec(&self) -> &'static str {
        match self.ty {
            OperandType::Int => VarType::Int.format_spec(),
            _ => VarType::Real.format_spec(),
        }
    }
}

/// Entries of the keyed stores carry their own name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Symbol {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Operand {
    fn name(&self) -> &str {
        &self.name
    }
}
