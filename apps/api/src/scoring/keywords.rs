//! Keyword Extractor: pulls candidate keywords out of a job description.
//!
//! Tokens are single words plus adjacent two-word phrases. A token is kept if it
//! contains a reference term or is longer than four characters. This is recall
//! biased: "responsibilities" survives as a keyword. There is no stop-word
//! removal and no stemming.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::lexicon::Lexicon;

/// Words longer than this survive without matching a reference term.
const MIN_UNLISTED_KEYWORD_LEN: usize = 4;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b\w+\b)").expect("valid word regex"));
static PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b\w+)\s+(?-u:\w+\b)").expect("valid phrase regex"));

/// Extracts the deduplicated keyword set from `text`.
///
/// Case is preserved and reference terms match case-sensitively, so callers that
/// score against the lexicon lower-case `text` first. Results come back in
/// first-seen order: every single word, then every two-word phrase. Phrases are
/// matched without overlap, so "a b c d" yields "a b" and "c d" only. Words are
/// ASCII `\w` runs; the gap inside a phrase may be any Unicode whitespace.
pub fn extract_keywords(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let words = WORD_RE.find_iter(text).map(|m| m.as_str());
    let phrases = PHRASE_RE.find_iter(text).map(|m| m.as_str());

    let mut seen = HashSet::new();
    words
        .chain(phrases)
        .filter(|candidate| seen.insert(*candidate))
        .filter(|candidate| {
            lexicon.mentions_reference_term(candidate)
                || candidate.chars().count() > MIN_UNLISTED_KEYWORD_LEN
        })
        .map(str::to_string)
        .collect()
}
