//! # Gloss Tokens
//!
//! The output vocabulary of the translator. A token is either a dictionary
//! sign, a finger-spelled letter, or one of the two reserved control tokens.
//!
//! ## Wire Format:
//! Every token serializes as a plain JSON string, so a sequence becomes
//! `["GOOD_MORNING", "X", "Y", "MAINTAIN"]`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Reserved token emitted when there is no speech to sign.
pub const SILENCE: &str = "SILENCE";

/// Reserved token appended to every non-empty sequence to hold the final sign.
pub const MAINTAIN: &str = "MAINTAIN";

/// A single sign in a gloss sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GlossToken {
    /// Whole-word or phrase sign taken from the dictionary
    Sign(String),

    /// One finger-spelled letter (already uppercased)
    Letter(char),

    /// No speech detected
    Silence,

    /// Hold the final sign
    Maintain,
}

impl GlossToken {
    /// True for `SILENCE` and `MAINTAIN`.
    pub fn is_control(&self) -> bool {
        matches!(self, GlossToken::Silence | GlossToken::Maintain)
    }

    /// Whether a dictionary value would be indistinguishable from a control token.
    pub fn is_reserved_value(value: &str) -> bool {
        value == SILENCE || value == MAINTAIN
    }
}

impl fmt::Display for GlossToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossToken::Sign(sign) => f.write_str(sign),
            GlossToken::Letter(letter) => write!(f, "{}", letter),
            GlossToken::Silence => f.write_str(SILENCE),
            GlossToken::Maintain => f.write_str(MAINTAIN),
        }
    }
}

impl Serialize for GlossToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered gloss output. Order is playback order.
///
/// Never empty: either exactly `[SILENCE]`, or one or more signs/letters
/// followed by a single trailing `MAINTAIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlossSequence(Vec<GlossToken>);

impl GlossSequence {
    /// The `[SILENCE]` sequence.
    pub fn silence() -> Self {
        Self(vec![GlossToken::Silence])
    }

    /// Seal a list of emitted signs/letters into a sequence.
    ///
    /// Empty input becomes `[SILENCE]`, anything else gets `MAINTAIN` appended.
    pub(crate) fn terminate(mut tokens: Vec<GlossToken>) -> Self {
        if tokens.is_empty() {
            return Self::silence();
        }
        tokens.push(GlossToken::Maintain);
        Self(tokens)
    }

    pub fn tokens(&self) -> &[GlossToken] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlossToken> {
        self.0.iter()
    }

    pub fn is_silence(&self) -> bool {
        matches!(self.0.as_slice(), [GlossToken::Silence])
    }

    /// Number of finger-spelled letters in the sequence.
    pub fn letter_count(&self) -> usize {
        self.0
            .iter()
            .filter(|token| matches!(token, GlossToken::Letter(_)))
            .count()
    }

    /// Wire strings, mostly useful for assertions and logging.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|token| token.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tokens_become_silence() {
        let sequence = GlossSequence::terminate(Vec::new());
        assert!(sequence.is_silence());
        assert_eq!(sequence.to_strings(), vec!["SILENCE"]);
    }

    #[test]
    fn test_terminate_appends_single_maintain() {
        let sequence = GlossSequence::terminate(vec![
            GlossToken::Sign("HELLO".to_string()),
            GlossToken::Letter('A'),
        ]);
        assert_eq!(sequence.to_strings(), vec!["HELLO", "A", "MAINTAIN"]);
        assert_eq!(sequence.letter_count(), 1);
        assert!(!sequence.is_silence());
    }

    #[test]
    fn test_sequence_serializes_as_string_array() {
        let sequence = GlossSequence::terminate(vec![
            GlossToken::Sign("GOOD_MORNING".to_string()),
            GlossToken::Letter('X'),
        ]);
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, r#"["GOOD_MORNING","X","MAINTAIN"]"#);
    }

    #[test]
    fn test_reserved_values() {
        assert!(GlossToken::is_reserved_value("SILENCE"));
        assert!(GlossToken::is_reserved_value("MAINTAIN"));
        assert!(!GlossToken::is_reserved_value("maintain"));
        assert!(!GlossToken::is_reserved_value("HELLO"));
        assert!(GlossToken::Maintain.is_control());
        assert!(!GlossToken::Letter('M').is_control());
    }
}
