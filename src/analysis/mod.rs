//! String analysis
//!
//! Pure functions that derive the stored properties of a string.
//! Every function is total over `&str`; nothing here can fail.

mod analyzer;

pub use analyzer::{
    analyze, character_frequency_map, is_palindrome, length, sha256_hash, unique_characters,
    word_count, StringProperties,
};
