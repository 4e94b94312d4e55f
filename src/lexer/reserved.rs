use super::token::TokenKind;
use std::cmp::Ordering;

/// Operators and keywords of the language, sorted byte-wise so that
/// [`classify`] can bisect them.
pub const RESERVED: [(&str, TokenKind); 31] = [
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("*", TokenKind::Star),
    ("+", TokenKind::Plus),
    (",", TokenKind::Comma),
    ("-", TokenKind::Minus),
    (".", TokenKind::Dot),
    ("/", TokenKind::Slash),
    (":", TokenKind::Colon),
    (":=", TokenKind::Assign),
    (";", TokenKind::Semicolon),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEq),
    ("<>", TokenKind::NotEq),
    ("=", TokenKind::Equal),
    (">", TokenKind::Greater),
    (">=", TokenKind::GreaterEq),
    ("enquanto", TokenKind::KWhile),
    ("entao", TokenKind::KThen),
    ("escreve", TokenKind::KWrite),
    ("faca", TokenKind::KDo),
    ("fim", TokenKind::KEnd),
    ("inicio", TokenKind::KBegin),
    ("inteiro", TokenKind::KInteger),
    ("le", TokenKind::KRead),
    ("procedimento", TokenKind::KProcedure),
    ("programa", TokenKind::KProgram),
    ("real", TokenKind::KReal),
    ("se", TokenKind::KIf),
    ("senao", TokenKind::KElse),
    ("var", TokenKind::KVar),
];

/// Looks `lexeme` up in [`RESERVED`] by binary search.
///
/// The window `[lower, upper)` always contains the match if there is one.
/// Once the midpoint repeats, the window has collapsed onto an entry that
/// was already compared, so the lexeme is not reserved.
pub fn classify(lexeme: &str) -> Option<TokenKind> {
    let mut lower = 0;
    let mut upper = RESERVED.len();
    let mut previous = None;

    loop {
        let middle = (lower + upper) / 2;
        if previous == Some(middle) {
            return None;
        }
        previous = Some(middle);

        let (entry, kind) = RESERVED[middle];
        match lexeme.cmp(entry) {
            Ordering::Less => upper = middle,
            Ordering::Greater => lower = middle,
            Ordering::Equal => return Some(kind),
        }
    }
}
