//! # Gloss Translator
//!
//! Converts normalized text into a gloss sequence using greedy longest-match
//! phrase lookup.
//!
//! ## Matching Policy:
//! At each position the translator tries a 3-word window, then 2, then 1.
//! The first window found in the dictionary wins and the cursor jumps past it.
//! There is no backtracking: a 3-word hit is taken even when a 2+1 split
//! would cover more of the sentence with signs.
//!
//! Words with no dictionary entry are finger-spelled, one uppercase letter
//! per character.

use crate::gloss::dictionary::{Dictionary, MAX_PHRASE_WORDS};
use crate::gloss::token::{GlossSequence, GlossToken};

/// Translate already-normalized text.
///
/// Words are split on any whitespace, so stray spaces never produce empty
/// lookups or empty finger-spellings.
///
/// Total over any input: empty text gives `[SILENCE]`, everything else ends
/// in `MAINTAIN`.
pub fn translate(dictionary: &Dictionary, normalized: &str) -> GlossSequence {
    if normalized.is_empty() {
        return GlossSequence::silence();
    }

    let words: Vec<&str> = normalized.split_whitespace().collect();
    let mut tokens = Vec::with_capacity(words.len() + 1);
    let mut i = 0;

    while i < words.len() {
        match longest_match(dictionary, &words[i..]) {
            Some((sign, width)) => {
                tokens.push(GlossToken::Sign(sign.to_string()));
                i += width;
            }
            None => {
                finger_spell(words[i], &mut tokens);
                i += 1;
            }
        }
    }

    GlossSequence::terminate(tokens)
}

/// Longest dictionary phrase starting at the head of `words`.
fn longest_match<'d>(dictionary: &'d Dictionary, words: &[&str]) -> Option<(&'d str, usize)> {
    (1..=MAX_PHRASE_WORDS.min(words.len()))
        .rev()
        .find_map(|width| {
            let phrase = words[..width].join(" ");
            dictionary.get(&phrase).map(|sign| (sign, width))
        })
}

fn finger_spell(word: &str, tokens: &mut Vec<GlossToken>) {
    tokens.extend(word.to_uppercase().chars().map(GlossToken::Letter));
}
