use super::r#type::Named;
use super::symbol_table::{name_hash, DuplicateKey, HashKey};

/// LIFO store keyed by [`name_hash`], used both for the local scope of a
/// procedure and for the operand workspace.
///
/// Index 0 is the bottom; the last element is the top.
#[derive(Debug, Clone)]
pub struct ScopeStack<T> {
    entries: Vec<(HashKey, T)>,
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Named> ScopeStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `value` unless an entry with the same key is already present.
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateKey> {
        let key = name_hash(value.name());
        if self.entries.iter().any(|(k, _)| *k == key) {
            return Err(DuplicateKey(value.name().to_string()));
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Pushes `value` without looking for duplicates.
    pub fn push(&mut self, value: T) {
        let key = name_hash(value.name());
        self.entries.push((key, value));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Finds the topmost entry whose key matches `name`.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        let key = name_hash(name);
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Unlinks the topmost entry whose key matches `name`.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let key = name_hash(name);
        let index = self.entries.iter().rposition(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the stack and returns its entries in push order, by pushing
    /// them onto a second stack and popping that one.
    pub fn drain_in_push_order(&mut self) -> Vec<T> {
        let mut inverted = ScopeStack::new();
        while let Some(value) = self.pop() {
            inverted.push(value);
        }

        let mut ordered = Vec::with_capacity(inverted.len());
        while let Some(value) = inverted.pop() {
            ordered.push(value);
        }
        ordered
    }

    /// Entries from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().rev().map(|(_, value)| value)
    }
}

impl<T: Named + Clone> ScopeStack<T> {
    /// Copies the stack upside down: popping the copy yields the entries in
    /// the order they were pushed.
    pub fn reversed(&self) -> ScopeStack<T> {
        let mut inverted = ScopeStack::new();
        for value in self.iter() {
            inverted.push(value.clone());
        }
        inverted
    }
}
