//! Localization lookups.

use std::collections::HashMap;

/// Host-provided translation catalogue.
pub trait Translator: Send + Sync {
    fn has(&self, key: &str) -> bool;

    /// Returns the line for `key` with `:name` placeholders replaced, or `key` itself when missing.
    fn get(&self, key: &str, replace: &[(&str, &str)]) -> String;
}

/// In-memory translation lines.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    lines: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, key: impl Into<String>, line: impl Into<String>) -> Self {
        self.lines.insert(key.into(), line.into());
        self
    }
}

impl Translator for Translations {
    fn has(&self, key: &str) -> bool {
        self.lines.contains_key(key)
    }

    fn get(&self, key: &str, replace: &[(&str, &str)]) -> String {
        let Some(line) = self.lines.get(key) else {
            return key.to_string();
        };

        // Longest placeholder first so `:view` doesn't eat the head of `:view_name`.
        let mut pairs = replace.to_vec();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        pairs.iter().fold(line.clone(), |acc, (name, value)| {
            acc.replace(&format!(":{name}"), value)
        })
    }
}
