//! # Speech-to-Gloss Pipeline
//!
//! The one operation the transport layer calls: normalize a transcript and
//! translate it against the shared dictionary.

use crate::gloss::dictionary::{Dictionary, DictionaryLoadError, DictionaryStore};
use crate::gloss::normalize::normalize;
use crate::gloss::token::GlossSequence;
use crate::gloss::translator::translate;
use serde::Serialize;
use std::sync::Arc;

/// Pipeline result, serialized as `{"speech": "...", "gloss": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossOutput {
    /// Normalized transcript
    pub speech: String,
    /// Gloss tokens in playback order
    pub gloss: GlossSequence,
}

/// Normalizer + translator bound to a dictionary store.
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct GlossPipeline {
    store: Arc<DictionaryStore>,
}

impl GlossPipeline {
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Force the one-time dictionary load, e.g. before accepting requests.
    pub fn warm_up(&self) -> Result<&Dictionary, DictionaryLoadError> {
        self.store.load()
    }

    /// Normalize `raw_text` and convert it to gloss.
    ///
    /// A dictionary load failure is the only error and is returned unchanged;
    /// it is never replaced by an empty dictionary.
    pub fn process_speech_to_gloss(&self, raw_text: &str) -> Result<GlossOutput, DictionaryLoadError> {
        let dictionary = self.store.load()?;
        let speech = normalize(raw_text);
        let gloss = translate(dictionary, &speech);
        Ok(GlossOutput { speech, gloss })
    }
}
