use lazy_static::lazy_static;
use regex::Regex;

/// Fragments at or below this many characters are not sentences.
pub const MIN_SENTENCE_CHARS: usize = 10;

lazy_static! {
    static ref BOUNDARY: Regex = Regex::new(r"[.!?]\s+").expect("sentence boundary pattern");
}

/// Split text after `.`, `!` or `?` followed by whitespace.
///
/// Punctuation stays with the sentence it ends. Abbreviations, decimals and
/// quoted punctuation are not special-cased.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY.find_iter(text) {
        // The terminator is a single ASCII byte.
        push_sentence(&mut sentences, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if trimmed.chars().count() > MIN_SENTENCE_CHARS {
        sentences.push(trimmed.to_string());
    }
}
