//! # Sign Dictionary
//!
//! Holds the word/phrase → gloss mapping used by the translator.
//!
//! ## Source Format:
//! A single flat JSON object with string keys and string values:
//! ```json
//! { "hello": "HELLO", "good morning": "GOOD_MORNING" }
//! ```
//! Keys are expected to be lowercase and at most three space-separated words.
//! The loader uses them exactly as authored; keys that can never match are
//! only reported in the log.
//!
//! ## Loading:
//! `DictionaryStore` wraps the source in a `OnceLock`, so the first caller
//! performs the load and every other caller (concurrent or later) receives the
//! same dictionary or the same `DictionaryLoadError`. There is no retry.

use crate::gloss::token::GlossToken;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Longest phrase window, in words, the translator will look up.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Why a dictionary could not be loaded.
///
/// `Clone` so the cached failure can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryLoadError {
    /// The dictionary file does not exist
    #[error("dictionary source not found: {path}")]
    Missing { path: String },

    /// The file exists but could not be read
    #[error("failed to read dictionary {path}: {message}")]
    Unreadable { path: String, message: String },

    /// The content is not a flat JSON object of strings
    #[error("dictionary {origin} is not a flat JSON object of strings: {message}")]
    Malformed { origin: String, message: String },

    /// A value collides with SILENCE or MAINTAIN
    #[error("dictionary entry '{key}' maps to reserved token {value}")]
    ReservedToken { key: String, value: String },
}

/// Where the dictionary definition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// JSON file on disk
    File(PathBuf),
    /// JSON document held in memory
    Inline(String),
}

impl DictionarySource {
    /// Short human-readable description for logs and API responses.
    pub fn describe(&self) -> String {
        match self {
            DictionarySource::File(path) => path.display().to_string(),
            DictionarySource::Inline(_) => "inline".to_string(),
        }
    }

    fn read(&self) -> Result<String, DictionaryLoadError> {
        match self {
            DictionarySource::File(path) => fs::read_to_string(path).map_err(|e| {
                let path = path.display().to_string();
                match e.kind() {
                    io::ErrorKind::NotFound => DictionaryLoadError::Missing { path },
                    _ => DictionaryLoadError::Unreadable {
                        path,
                        message: e.to_string(),
                    },
                }
            }),
            DictionarySource::Inline(json) => Ok(json.clone()),
        }
    }
}

/// Immutable key → gloss mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Parse and validate a JSON dictionary document.
    ///
    /// `origin` only labels errors and log lines.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, DictionaryLoadError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| DictionaryLoadError::Malformed {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        // Report the alphabetically first offender so the error is stable
        if let Some((key, value)) = entries
            .iter()
            .filter(|(_, value)| GlossToken::is_reserved_value(value))
            .min_by(|a, b| a.0.cmp(b.0))
        {
            return Err(DictionaryLoadError::ReservedToken {
                key: key.clone(),
                value: value.clone(),
            });
        }

        for key in entries.keys().filter(|key| !is_matchable_key(key)) {
            warn!(key = %key, origin = %origin, "Dictionary key can never match normalized text");
        }

        Ok(Self { entries })
    }

    /// Look up a normalized word or space-joined phrase.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word count of the longest key (0 for an empty dictionary).
    pub fn longest_key_words(&self) -> usize {
        self.entries
            .keys()
            .map(|key| key.split_whitespace().count())
            .max()
            .unwrap_or(0)
    }
}

/// A key matches only if it looks exactly like normalized text: lowercase,
/// single-spaced, one to `MAX_PHRASE_WORDS` words.
fn is_matchable_key(key: &str) -> bool {
    let words: Vec<&str> = key.split_whitespace().collect();
    !words.is_empty()
        && words.len() <= MAX_PHRASE_WORDS
        && words.join(" ") == key
        && key.to_lowercase() == key
}

/// Explicitly constructed, lazily loaded dictionary holder.
///
/// Share it behind an `Arc`; after the first `load` every call is a
/// lock-free read of the cached result.
#[derive(Debug)]
pub struct DictionaryStore {
    source: DictionarySource,
    cell: OnceLock<Result<Dictionary, DictionaryLoadError>>,
}

impl DictionaryStore {
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(DictionarySource::File(path.into()))
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        Self::new(DictionarySource::Inline(json.into()))
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }

    /// Get the dictionary, loading it on first use.
    pub fn load(&self) -> Result<&Dictionary, DictionaryLoadError> {
        self.cell
            .get_or_init(|| self.load_uncached())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The cached load result, without triggering a load.
    pub fn peek(&self) -> Option<Result<&Dictionary, &DictionaryLoadError>> {
        self.cell.get().map(Result::as_ref)
    }

    fn load_uncached(&self) -> Result<Dictionary, DictionaryLoadError> {
        let origin = self.source.describe();
        debug!(origin = %origin, "Loading gloss dictionary");

        let result = self
            .source
            .read()
            .and_then(|json| Dictionary::from_json(&json, &origin));

        match &result {
            Ok(dictionary) => info!(
                origin = %origin,
                entries = dictionary.len(),
                "Loaded {} gloss entries from dictionary",
                dictionary.len()
            ),
            Err(e) => warn!(origin = %origin, error = %e, "Gloss dictionary failed to load"),
        }

        result
    }
}
