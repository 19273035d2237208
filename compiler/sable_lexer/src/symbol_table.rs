//! Identifier table.
//!
//! Records each distinct identifier once, at its first occurrence, and
//! counts every later sighting. Entries are kept in first-appearance order
//! in a `Vec`; an `FxHashMap` indexes them by name.

use std::fmt;

use rustc_hash::FxHashMap;

/// Type of an identifier. Always [`Undeclared`](Self::Undeclared) at the
/// lexical stage; later passes resolve it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DeclaredType {
    #[default]
    Undeclared,
}

impl DeclaredType {
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclaredType::Undeclared => "undeclared",
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One identifier's record.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SymbolEntry {
    pub name: String,
    pub declared_type: DeclaredType,
    pub first_line: u32,
    pub first_column: u32,
    pub frequency: u32,
}

/// `name | type | Line: L Col: C | Frequency: N`, column-aligned.
impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} | {:<15} | Line: {:<4} Col: {:<4} | Frequency: {}",
            self.name, self.declared_type, self.first_line, self.first_column, self.frequency
        )
    }
}

/// Identifier table keyed by name, iterated in first-appearance order.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sighting of `name` at `line:column`.
    ///
    /// The first sighting creates the entry with frequency 1; later ones only
    /// bump the frequency and leave the recorded location alone.
    pub fn add_identifier(&mut self, name: &str, line: u32, column: u32) {
        if let Some(&i) = self.index.get(name) {
            self.entries[i].frequency += 1;
            return;
        }
        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_owned(),
            declared_type: DeclaredType::Undeclared,
            first_line: line,
            first_column: column,
            frequency: 1,
        });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of sightings of `name`, or 0 if it never appeared.
    pub fn frequency_of(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |e| e.frequency)
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    /// Entries by descending frequency. Ties keep first-appearance order.
    pub fn by_frequency(&self) -> Vec<&SymbolEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        sorted
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
