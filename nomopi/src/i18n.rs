//! Localization dictionaries.
//!
//! A `Dictionary` maps text keys to translated strings for one language.
//! `Localization` holds the dictionaries known to the UI and tracks which
//! language is active. Dictionaries load from flat JSON objects; they also
//! derive `Deserialize`, so a host may read them from any serde format.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Key -> translated string map for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(key, text)` pairs.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a dictionary from a JSON object of `"key": "text"` pairs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let dictionary: Self = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded {} entries from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Translate a key, falling back to the key itself.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Merge another dictionary in; its entries win on conflict.
    pub fn extend(&mut self, other: Dictionary) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dictionaries by language code plus the active language.
#[derive(Debug, Clone, Default)]
pub struct Localization {
    dictionaries: HashMap<String, Dictionary>,
    active: Option<String>,
}

impl Localization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dictionary for a language, merging with any existing one.
    ///
    /// The first language registered becomes active.
    pub fn add_dictionary(&mut self, language: impl Into<String>, dictionary: Dictionary) {
        let language = language.into();
        self.dictionaries
            .entry(language.clone())
            .or_default()
            .extend(dictionary);
        if self.active.is_none() {
            self.active = Some(language);
        }
    }

    /// Switch the active language.
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        if !self.dictionaries.contains_key(language) {
            return Err(LayoutError::UnknownLanguage(language.to_string()));
        }
        self.active = Some(language.to_string());
        Ok(())
    }

    /// Code of the active language, if any.
    pub fn language(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active dictionary, if any.
    pub fn active(&self) -> Option<&Dictionary> {
        self.active
            .as_deref()
            .and_then(|language| self.dictionaries.get(language))
    }

    /// Known language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Translate a key through the active dictionary, falling back to the key.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.active() {
            Some(dictionary) => dictionary.translate(key),
            None => key,
        }
    }
}
