//! Word tokenizing: punctuation trimming, the alphabet test, dictionary
//! extraction, and the inter-word gap count used to size a page.

use std::collections::BTreeMap;

/// Characters stripped from both ends of a piece that contains punctuation.
const PUNCTUATION: &[char] = &[
    ',', '.', '\n', '\r', '\\', '/', '"', '\'', '-', ';', '%', '^', '$', '#', '*', '@', '(', '!',
    '?', ')', '_', '+', '=', ':', '<', '>', '[', ']', '{', '}', '~', '|',
];

/// Placeholder metadata stored alongside every dictionary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub value: String,
    pub tags: [String; 3],
}

impl WordEntry {
    fn placeholder(value: &str, tags: [&str; 3]) -> Self {
        Self {
            value: value.to_string(),
            tags: tags.map(String::from),
        }
    }

    /// Entry for a word that needed punctuation trimmed.
    pub fn trimmed() -> Self {
        Self::placeholder("A", ["a", "b", "c"])
    }

    /// Entry for a word that was purely alphabetic as written.
    pub fn plain() -> Self {
        Self::placeholder("B", ["d", "e", "f"])
    }
}

/// Distinct words of a document, keyed by the word itself.
pub type WordDictionary = BTreeMap<String, WordEntry>;

/// ASCII letter test. The range `'A'..='z'` also admits ``[\]^_` `` and that
/// approximation is kept so dictionary contents stay stable.
pub fn is_alphabetic(b: u8) -> bool {
    (b'A'..=b'z').contains(&b)
}

pub fn has_non_alphabetic(s: &str) -> bool {
    s.bytes().any(|b| !is_alphabetic(b))
}

pub fn all_non_alphabetic(s: &str) -> bool {
    !s.bytes().any(is_alphabetic)
}

/// Drops everything after the last alphabetic byte. Identity when the token
/// has no alphabetic byte at all.
pub fn trim_trailing_punctuation(token: &str) -> &str {
    match token.bytes().rposition(is_alphabetic) {
        Some(end) => &token[..=end],
        None => token,
    }
}

/// Drops everything before the first alphabetic byte. Identity when the
/// token has no alphabetic byte at all.
pub fn trim_leading_punctuation(token: &str) -> &str {
    match token.bytes().position(is_alphabetic) {
        Some(start) => &token[start..],
        None => token,
    }
}

/// Builds the dictionary of distinct words across `lines`.
///
/// Lines are split on single spaces. Pieces with punctuation are trimmed and
/// kept unless nothing alphabetic remains; plain pieces are kept as-is.
/// The first insertion of a word wins.
pub fn extract_unique_words<S: AsRef<str>>(lines: &[S]) -> WordDictionary {
    let mut words = WordDictionary::new();
    for line in lines {
        for piece in line.as_ref().split(' ') {
            if piece.is_empty() {
                continue;
            }
            if has_non_alphabetic(piece) {
                let trimmed = piece.trim_matches(PUNCTUATION);
                if !all_non_alphabetic(trimmed) {
                    words
                        .entry(trimmed.to_string())
                        .or_insert_with(WordEntry::trimmed);
                }
            } else {
                words
                    .entry(piece.to_string())
                    .or_insert_with(WordEntry::plain);
            }
        }
    }
    words
}

/// Counts runs of spaces that are followed by a word. A leading run is not
/// counted and neither is a trailing one.
pub fn count_inter_word_gaps(line: &str) -> usize {
    let bytes = line.trim_start_matches(' ').as_bytes();
    bytes
        .windows(2)
        .filter(|pair| pair[0] == b' ' && pair[1] != b' ')
        .count()
}
