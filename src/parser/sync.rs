//! Synchronization sets for panic-mode recovery, one per grammar position.
//! Each is built from FIRST/FOLLOW of the grammar around that position.

use crate::lexer::token::TokenKind::{self, *};

pub const FIRST_COMMAND: &[TokenKind] = &[KRead, KWrite, KWhile, KIf, Identifier, KBegin];
pub const FOLLOW_COMMAND: &[TokenKind] = &[Semicolon, KEnd, KElse];

// program header and end
pub const AFTER_PROGRAM_KEYWORD: &[TokenKind] = &[Identifier, Semicolon, KVar, KProcedure, KBegin];
pub const AFTER_PROGRAM_NAME: &[TokenKind] = &[Semicolon, KVar, KProcedure, KBegin];
pub const AFTER_PROGRAM_HEADER: &[TokenKind] = &[KVar, KProcedure, KBegin];
pub const AFTER_PROGRAM_END: &[TokenKind] = &[Dot];

/// Missing `inicio`: resume at the first command or at the closing `fim`.
pub const STATEMENT_START: &[TokenKind] =
    &[KRead, KWrite, KWhile, KIf, Identifier, KBegin, KEnd];

// declarations
pub const DECLARED_NAMES: &[TokenKind] = &[Colon, KInteger, KReal, Semicolon, RParen];
pub const DECLARATION_TYPE: &[TokenKind] = &[KInteger, KReal, Semicolon, RParen];
pub const AFTER_VAR_TYPE: &[TokenKind] = &[Semicolon, KVar, KProcedure, KBegin];
pub const AFTER_VAR_DECLARATION: &[TokenKind] = &[KVar, KProcedure, KBegin];
pub const AFTER_PARAMETER_TYPE: &[TokenKind] = &[Semicolon, RParen];

// procedures
pub const PROCEDURE_NAME: &[TokenKind] = &[LParen, Semicolon];
pub const AFTER_PARAMETERS: &[TokenKind] = &[Semicolon, KVar, KBegin];
pub const AFTER_PROCEDURE_HEADER: &[TokenKind] = &[KVar, KBegin];
pub const AFTER_PROCEDURE_END: &[TokenKind] = &[Semicolon, KProcedure, KBegin];
pub const AFTER_PROCEDURE: &[TokenKind] = &[KProcedure, KBegin];

// commands
pub const COMMAND_SEPARATOR: &[TokenKind] = &[
    Semicolon, KEnd, Dot, KRead, KWrite, KWhile, KIf, Identifier, KBegin,
];
pub const COMPOUND_END: &[TokenKind] = &[Semicolon, KEnd, KElse, Dot];
pub const OPEN_LIST: &[TokenKind] = &[Identifier, RParen, Semicolon, KEnd, KElse];
pub const CLOSE_LIST: &[TokenKind] = &[RParen, Semicolon, KEnd, KElse];
pub const AFTER_CONDITION: &[TokenKind] = &[
    KRead, KWrite, KWhile, KIf, Identifier, KBegin, Semicolon, KEnd, KElse,
];

// expressions
pub const FIRST_EXPRESSION: &[TokenKind] = &[Plus, Minus, Identifier, IntLiteral, RealLiteral, LParen];
pub const CONDITION_OPERATOR: &[TokenKind] = &[
    Equal, NotEq, Less, LessEq, Greater, GreaterEq, Plus, Minus, Identifier, IntLiteral,
    RealLiteral, LParen, KDo, KThen,
];
pub const FOLLOW_FACTOR: &[TokenKind] = &[
    Star, Slash, Plus, Minus, Equal, NotEq, Less, LessEq, Greater, GreaterEq, RParen, KDo, KThen,
    Semicolon, KEnd, KElse,
];
