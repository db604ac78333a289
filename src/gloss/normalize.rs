//! # Transcript Normalization
//!
//! Turns a raw transcript into the canonical form the dictionary is keyed by:
//! lowercase words separated by single spaces, with spoken fillers and
//! punctuation removed.
//!
//! ## Steps:
//! 1. Lowercase
//! 2. Drop filler words (`um`, `uh`, `er`, `ah`, `hmm`, `well`, `like`) and the
//!    two-word unit `you know`, matched only as whole words
//! 3. Drop every character that is neither a word character nor whitespace
//! 4. Collapse whitespace and trim
//! 5. Drop words that only became fillers in steps 3-4, so that normalizing
//!    twice gives the same result as normalizing once
//!
//! Filler matching works on word runs rather than substrings, so the `um` in
//! `umbrella` is never touched.

/// Single-word fillers removed from transcripts.
pub const FILLER_WORDS: [&str; 7] = ["um", "uh", "er", "ah", "hmm", "well", "like"];

/// Two-word filler, matched as one unit with a single space between the words.
pub const FILLER_PHRASE: (&str, &str) = ("you", "know");

/// Word characters: alphanumerics and underscore.
///
/// Uses `char::is_alphanumeric`, which also counts Other_Alphabetic combining
/// marks (e.g. Devanagari vowel signs) as word characters.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_filler_word(word: &str) -> bool {
    FILLER_WORDS.contains(&word)
}

/// Maximal run of word characters, or of anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Word(&'a str),
    Gap(&'a str),
}

fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_word = None;

    for (index, c) in text.char_indices() {
        let word = is_word_char(c);
        match in_word {
            Some(current) if current != word => {
                segments.push(segment(&text[start..index], current));
                start = index;
            }
            _ => {}
        }
        in_word = Some(word);
    }
    if let Some(current) = in_word {
        segments.push(segment(&text[start..], current));
    }

    segments
}

fn segment(slice: &str, word: bool) -> Segment<'_> {
    if word {
        Segment::Word(slice)
    } else {
        Segment::Gap(slice)
    }
}

/// Remove whole-word fillers, then whole `you know` units.
fn strip_fillers(text: &str) -> String {
    let without_words: String = segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Word(word) if is_filler_word(word) => None,
            Segment::Word(s) | Segment::Gap(s) => Some(s),
        })
        .collect();

    let segments = segments(&without_words);
    let mut result = String::with_capacity(without_words.len());
    let mut i = 0;
    while i < segments.len() {
        if let [Segment::Word(first), Segment::Gap(" "), Segment::Word(second), ..] = segments[i..] {
            if (first, second) == FILLER_PHRASE {
                i += 3;
                continue;
            }
        }
        match segments[i] {
            Segment::Word(s) | Segment::Gap(s) => result.push_str(s),
        }
        i += 1;
    }

    result
}

/// Drop fillers exposed by punctuation removal or whitespace collapse.
///
/// Stack-based so that nested units like `you you know know` reduce fully.
fn settle<'a>(words: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut settled: Vec<&str> = Vec::new();
    for word in words {
        if is_filler_word(word) {
            continue;
        }
        if word == FILLER_PHRASE.1 && settled.last() == Some(&FILLER_PHRASE.0) {
            settled.pop();
            continue;
        }
        settled.push(word);
    }
    settled
}

/// Normalize a raw transcript. Total and deterministic; may return `""`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_fillers = strip_fillers(&lowered);
    let stripped: String = without_fillers
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    settle(stripped.split_whitespace()).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("?!...,"), "");
    }

    #[test]
    fn test_fillers_removed() {
        assert_eq!(normalize("Um, well, hello"), "hello");
        assert_eq!(normalize("I, uh, like pizza"), "i pizza");
        assert_eq!(normalize("HMM er ah"), "");
    }

    #[test]
    fn test_filler_inside_word_is_kept() {
        assert_eq!(normalize("umbrella is nice"), "umbrella is nice");
        assert_eq!(normalize("Wellness likes hummus"), "wellness likes hummus");
        assert_eq!(normalize("her ahead"), "her ahead");
    }

    #[test]
    fn test_you_know_is_one_unit() {
        assert_eq!(normalize("it is, you know, fine"), "it is fine");
        assert_eq!(normalize("you knowledge"), "you knowledge");
        assert_eq!(normalize("you should know"), "you should know");
        assert_eq!(normalize("you"), "you");
        assert_eq!(normalize("know you"), "know you");
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(normalize("Hello,   World!!"), "hello world");
        assert_eq!(normalize("don't stop"), "dont stop");
        assert_eq!(normalize("  snake_case\tand 42 "), "snake_case and 42");
    }

    #[test]
    fn test_filler_boundary_at_punctuation() {
        // "well" is a whole word next to a hyphen
        assert_eq!(normalize("a well-known fact"), "a known fact");
    }

    #[test]
    fn test_fillers_exposed_by_punctuation_removal() {
        assert_eq!(normalize("u-m yes"), "yes");
        assert_eq!(normalize("you, know, right"), "right");
        assert_eq!(normalize("you  know"), "");
        assert_eq!(normalize("you you know know me"), "me");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Um, well, hello",
            "umbrella is nice",
            "you um know",
            "you, know, right",
            "you you know know",
            "a well-known fact",
            "u-m-brella",
            "Good Morning!!! How are   you?",
            "like, like, LIKE",
            "ÉCOLE über straße",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_segments_split_words_and_gaps() {
        assert_eq!(
            segments("hi, you"),
            vec![Segment::Word("hi"), Segment::Gap(", "), Segment::Word("you")]
        );
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_combining_vowel_sign_is_word_char() {
        assert!(is_word_char('\u{093E}'));
        assert_eq!(normalize("\u{0915}\u{093E}!"), "\u{0915}\u{093E}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Fillers, punctuation, whitespace and arbitrary printable text mixed together.
        const TRANSCRIPT: &str =
            "(um|uh|you|know|well|like|er|ah|hmm|[ \\-,.!_a-zA-Z0-9]|\\PC){0,40}";

        proptest! {
            #[test]
            fn normalize_is_idempotent(text in TRANSCRIPT) {
                let once = normalize(&text);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn normalize_is_idempotent_on_printable_text(text in "\\PC{0,30}") {
                let once = normalize(&text);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn normalized_output_is_clean(text in TRANSCRIPT) {
                let normalized = normalize(&text);
                prop_assert_eq!(normalized.trim(), normalized.as_str());
                prop_assert!(!normalized.contains("  "));
                prop_assert!(normalized.chars().all(|c| is_word_char(c) || c == ' '));
                prop_assert!(normalized.split(' ').all(|word| !is_filler_word(word)));
            }
        }
    }
}
