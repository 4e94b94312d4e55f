use ordermap::OrderMap;
use thiserror::Error;

use super::r#type::Symbol;

pub type HashKey = u64;

/// Weighted positional sum of the characters of `name`:
/// `Σ ordinal(cᵢ) · i` for `i` in `1..=len`.
///
/// Distinct names may share a key (`"ab"` and `"ca"` both hash to 293);
/// the stores key on this value alone, so such names are treated as the
/// same symbol.
pub fn name_hash(name: &str) -> HashKey {
    name.chars()
        .zip(1..)
        .map(|(c, i)| c as HashKey * i)
        .sum()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate key for `{0}`")]
pub struct DuplicateKey(pub String);

/// Program-wide symbols: global variables and procedure signatures.
#[derive(Debug, Default)]
pub struct GlobalTable {
    symbols: OrderMap<HashKey, Symbol>,
}

impl GlobalTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: Symbol) -> Result<(), DuplicateKey> {
        let key = name_hash(&symbol.name);
        if self.symbols.contains_key(&key) {
            return Err(DuplicateKey(symbol.name));
        }
        self.symbols.insert(key, symbol);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(&name_hash(name))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
