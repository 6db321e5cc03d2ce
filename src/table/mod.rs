// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::ast::Value;
use crate::parser;
use crate::VarsError;

mod access;
mod conversion;

/// Merged mapping from identifier to typed value.
///
/// Built once per run by merging per-file tables in order; a key defined
/// twice keeps the value from whichever table was merged last.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: IndexMap<String, Value>,
    origins: IndexMap<String, String>, // key -> file the winning value came from
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse definition text (no file I/O)
    pub fn from_str(content: &str) -> Result<Self, VarsError> {
        parser::Parser::new(content).parse_table()
    }

    /// Parse one definition file. Parse errors are tagged with the path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VarsError> {
        let path = path.as_ref();
        let label = path.to_string_lossy().to_string();

        let content = fs::read_to_string(path).map_err(|e| VarsError::FileError {
            message: format!("Failed to read file: {}", e),
            path: label.clone(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        let mut table = Self::from_str(&content).map_err(|e| e.in_file(label.as_str()))?;
        table.origins = table
            .entries
            .keys()
            .map(|k| (k.clone(), label.clone()))
            .collect();

        debug!(path = %label, keys = table.len(), "parsed definition file");
        Ok(table)
    }

    /// Parse every file to completion, merging in the given order.
    ///
    /// Stops at the first file that fails; nothing is returned in that case.
    pub fn from_files<I, P>(paths: I) -> Result<Self, VarsError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut merged = Self::new();
        for path in paths {
            let table = Self::from_file(path)?;
            merged.merge(table);
        }
        Ok(merged)
    }

    /// Merge `other` into `self`; keys already present are overwritten.
    ///
    /// Returns the overridden keys in the order `other` defines them.
    pub fn merge(&mut self, other: SymbolTable) -> Vec<String> {
        let SymbolTable { entries, mut origins } = other;
        let mut overridden = Vec::new();

        for (key, value) in entries {
            let origin = origins.swap_remove(&key);

            if self.entries.contains_key(&key) {
                debug!(
                    key = %key,
                    previous = self.origin(&key).unwrap_or("<inline>"),
                    winner = origin.as_deref().unwrap_or("<inline>"),
                    "definition overridden"
                );
                overridden.push(key.clone());
            }

            match origin {
                Some(origin) => {
                    self.origins.insert(key.clone(), origin);
                }
                None => {
                    self.origins.swap_remove(&key);
                }
            }
            self.entries.insert(key, value);
        }

        overridden
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        self.origins.swap_remove(&key);
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// File the current value of `key` was loaded from, if any.
    pub fn origin(&self, key: &str) -> Option<&str> {
        self.origins.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

/// Tables compare by content; origins are bookkeeping.
impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut table = SymbolTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

#[cfg(test)]
mod tests;
