//! Insertion-ordered command-line option map.
//!
//! Flag order may matter to the external generator, so this is a small
//! Vec-backed map rather than a hash map. An empty value denotes a bare
//! presence flag (`--lombok`), a non-empty value a flag/value pair
//! (`--package com.example`).

/// Ordered mapping from option flag to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, String)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a flag/value pair. Re-inserting an existing flag updates the
    /// value in place and keeps the original position.
    pub fn insert(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        let flag = flag.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == flag) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((flag, value)),
        }
    }

    /// Insert a bare presence flag (empty value)
    pub fn insert_flag(&mut self, flag: impl Into<String>) {
        self.insert(flag, "");
    }

    pub fn get(&self, flag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == flag)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.get(flag).is_some()
    }

    /// Remove a flag and return its value, preserving the order of the rest
    pub fn take(&mut self, flag: &str) -> Option<String> {
        let index = self
            .entries
            .iter()
            .position(|(existing, _)| existing == flag)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(flag, value)| (flag.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "options/options_tests.rs"]
mod options_tests;
