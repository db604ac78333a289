//! # Sign Gloss
//!
//! Converts raw speech transcripts into ordered sequences of sign-language
//! gloss tokens for avatar playback.
//!
//! ## Module Layout:
//! - **gloss::token**: `GlossToken` and `GlossSequence` output types
//! - **gloss::dictionary**: JSON-backed sign dictionary with a one-time guarded load
//! - **gloss::normalize**: transcript cleanup (case, fillers, punctuation, whitespace)
//! - **gloss::translator**: greedy longest-match phrase lookup with finger-spelling fallback
//! - **gloss::pipeline**: the single entry point the HTTP layer calls
//!
//! The library performs no network I/O and reads no environment variables;
//! hosting concerns live in the `sign-gloss-server` binary.

pub mod gloss;

pub use gloss::{
    DictionaryLoadError, DictionarySource, DictionaryStore, GlossOutput, GlossPipeline,
    GlossSequence, GlossToken,
};
