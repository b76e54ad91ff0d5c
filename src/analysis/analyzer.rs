//! Property derivation for a single input string

use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Derived properties of an analyzed string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringProperties {
    /// Number of characters
    pub length: usize,

    /// Case-insensitive literal palindrome check
    pub is_palindrome: bool,

    /// Count of characters that are neither alphanumeric nor whitespace
    pub unique_characters: usize,

    /// Segments produced by splitting on a single space
    pub word_count: usize,

    /// Lowercase hex SHA-256 of the raw input
    pub sha256_hash: String,

    /// Occurrences of each letter `a`..=`z` after lowercasing
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Compute every property of `value`
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: length(value),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_characters(value),
        word_count: word_count(value),
        sha256_hash: sha256_hash(value),
        character_frequency_map: character_frequency_map(value),
    }
}

/// Character count (Unicode scalar values, not bytes)
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Each character case-insensitively equals its mirror position.
///
/// Characters are lowercased one at a time, never as a whole string, so
/// context-dependent and multi-char lowercase mappings stay symmetric
/// under reversal. Spaces and punctuation take part in the comparison,
/// so `"A man a plan a canal Panama"` is not a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    value
        .chars()
        .zip(value.chars().rev())
        .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}

/// Number of segments when splitting on a literal space.
///
/// Consecutive spaces yield empty segments that still count, and the
/// empty string counts as one word.
pub fn word_count(value: &str) -> usize {
    value.split(' ').count()
}

/// Count of characters outside `[A-Za-z0-9]` and whitespace
pub fn unique_characters(value: &str) -> usize {
    value
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        .count()
}

/// Letter frequencies over the lowercased input, ignoring non `a`..=`z`
pub fn character_frequency_map(value: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for c in value.to_lowercase().chars().filter(|c| c.is_ascii_lowercase()) {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}

/// Lowercase hex SHA-256 digest of the UTF-8 bytes
pub fn sha256_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
