//! Natural-language filter interpretation
//!
//! A keyword matcher, not a grammar. The query is lowercased and scanned
//! for a fixed set of phrases; each recognized phrase sets one predicate
//! and everything else is ignored.
//!
//! | Phrase | Predicate |
//! |---|---|
//! | `palindrome`, `palindromic` | `is_palindrome = true` |
//! | `non-palindromic`, `not a palindrome` | `is_palindrome = false` |
//! | `single word`, `<n> words` | `word_count = n` |
//! | `longer than <n>` | `min_length = n + 1` |
//! | `at least <n> characters` | `min_length = n` |
//! | `shorter than <n>` | `max_length = n - 1` |
//! | `at most <n> characters` | `max_length = n` |
//! | `letter <c>`, `character <c>` | `contains_character = c` |
//! | `first vowel` | `contains_character = "a"` |

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{QueryError, QueryResult};
use super::filters::FilterSet;

const NUMBER: &str = r"(\d+|zero|one|two|three|four|five|six|seven|eight|nine|ten)";

struct Patterns {
    not_palindrome: Regex,
    palindrome: Regex,
    word_count: Regex,
    longer_than: Regex,
    at_least: Regex,
    shorter_than: Regex,
    at_most: Regex,
    letter: Regex,
    first_vowel: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        not_palindrome: compile(r"\b(?:non-?palindrom\w*|not\s+(?:a\s+)?palindrom\w*)"),
        palindrome: compile(r"\bpalindrom\w*"),
        word_count: compile(&format!(r"\b(?:(single)|{})\s+words?\b", NUMBER)),
        longer_than: compile(&format!(r"\blonger\s+than\s+{}", NUMBER)),
        at_least: compile(&format!(
            r"\bat\s+least\s+{}\s+(?:characters?|chars?|letters?)\b",
            NUMBER
        )),
        shorter_than: compile(&format!(r"\bshorter\s+than\s+{}", NUMBER)),
        at_most: compile(&format!(
            r"\bat\s+most\s+{}\s+(?:characters?|chars?|letters?)\b",
            NUMBER
        )),
        letter: compile(r#"\b(?:letter|character)\s+['"]?([^\s'"])['"]?(?:[\s.,;:?!]|$)"#),
        first_vowel: compile(r"\bfirst\s+vowel\b"),
    })
}

fn compile(pattern: &str) -> Regex {
    // Patterns are fixed at compile time; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {}: {}", pattern, e))
}

/// Translate a free-text query into a predicate set.
///
/// Unrecognized text produces no predicate, so an entirely unrecognized
/// query yields an empty set that matches every record.
///
/// # Errors
///
/// `ConflictingFilters` when the recognized length bounds cannot both hold.
pub fn interpret(query: &str) -> QueryResult<FilterSet> {
    let text = query.to_lowercase();
    let p = patterns();
    let mut filters = FilterSet::new();

    if p.not_palindrome.is_match(&text) {
        filters.is_palindrome = Some(false);
    } else if p.palindrome.is_match(&text) {
        filters.is_palindrome = Some(true);
    }

    if let Some(caps) = p.word_count.captures(&text) {
        filters.word_count = if caps.get(1).is_some() {
            Some(1)
        } else {
            caps.get(2).and_then(|m| parse_number(m.as_str()))
        };
    }

    if let Some(n) = capture_number(&p.longer_than, &text) {
        filters.min_length = n.checked_add(1);
    } else if let Some(n) = capture_number(&p.at_least, &text) {
        filters.min_length = Some(n);
    }

    if let Some(n) = capture_number(&p.shorter_than, &text) {
        filters.max_length = n.checked_sub(1);
    } else if let Some(n) = capture_number(&p.at_most, &text) {
        filters.max_length = Some(n);
    }

    if let Some(caps) = p.letter.captures(&text) {
        filters.contains_character = caps.get(1).map(|m| m.as_str().to_string());
    } else if p.first_vowel.is_match(&text) {
        filters.contains_character = Some("a".to_string());
    }

    if filters.has_conflicting_bounds() {
        return Err(QueryError::ConflictingFilters(format!(
            "min_length {} exceeds max_length {}",
            filters.min_length.unwrap_or_default(),
            filters.max_length.unwrap_or_default()
        )));
    }

    Ok(filters)
}

fn capture_number(pattern: &Regex, text: &str) -> Option<usize> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_number(m.as_str()))
}

fn parse_number(token: &str) -> Option<usize> {
    let n = match token {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        digits => return digits.parse().ok(),
    };
    Some(n)
}
