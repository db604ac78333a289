//! # Gloss Engine
//!
//! Text-to-gloss translation: normalization, dictionary lookup and
//! finger-spelling.
//!
//! ## Control Flow:
//! raw text → `normalize` → normalized text → `translate` (dictionary lookup) → gloss sequence

pub mod token;       // GlossToken and GlossSequence
pub mod dictionary;  // Dictionary loading and lookup
pub mod normalize;   // Transcript normalization
pub mod translator;  // Longest-match translation
pub mod pipeline;    // process_speech_to_gloss entry point

pub use dictionary::{Dictionary, DictionaryLoadError, DictionarySource, DictionaryStore};
pub use normalize::normalize;
pub use pipeline::{GlossOutput, GlossPipeline};
pub use token::{GlossSequence, GlossToken};
pub use translator::translate;
