//! `dictionary` — Module to load and index the word list for anagram search
//!
//! This module reads a plain-text word list (one or more words per line,
//! arbitrary whitespace separation) and turns it into a [`LengthIndex`]: a
//! mapping from word length to the set of unique cleaned words of that length.
//!
//! The cleaning logic:
//! - Each whitespace-delimited token is lowercased, then every character that
//!   is not an ASCII lowercase letter or digit is stripped (so hyphenated or
//!   apostrophe'd entries like `don't` become `dont`).
//! - A token that cleans down to a single character is kept only if that
//!   character is `a` or `i`; any other single character is noise.
//! - A token that cleans down to nothing is dropped.
//!
//! Malformed input never errors; cleaning is pure character filtering.
//!
//! The public API mirrors the two-layer shape used elsewhere in this codebase:
//! - `parse_from_str(...)` — pure, works on in-memory contents.
//! - `load_from_path(...)` — convenience wrapper that reads from a file path.

use crate::token_char::TokenChar;
use std::collections::{BTreeMap, BTreeSet};

/// Clean one raw token into a normalized word, or discard it.
///
/// Lowercases the token, strips every character outside `a-z0-9`, then applies
/// the single-letter rule: a one-character result survives only for `a`/`i`.
/// Returns `None` for discarded tokens (including tokens that clean to empty).
pub fn normalize_token(raw: &str) -> Option<String> {
    let clean: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .filter(TokenChar::is_kept)
        .collect();

    match clean.len() {
        0 => None,
        1 => clean.chars().next().filter(TokenChar::is_standalone_word).map(|_| clean),
        _ => Some(clean),
    }
}

/// Struct representing a processed, ready-to-search word index.
///
/// Words are grouped by character length; each group is a set, so duplicate
/// dictionary entries collapse. Lengths with no surviving words have no key.
///
/// `BTreeMap`/`BTreeSet` keep both the length keys and the words within each
/// group in a fixed order, which makes the search output deterministic.
#[derive(Debug, Clone, Default)]
pub struct LengthIndex {
    /// Mapping from word length to the unique cleaned words of that length.
    /// Example: `{2: {"no", "on"}, 3: {"act", "cat"}}`
    groups: BTreeMap<usize, BTreeSet<String>>,
}

impl LengthIndex {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents. Tokens are split on arbitrary
    ///   whitespace, so a line may hold any number of words.
    ///
    /// # Returns
    /// * `LengthIndex` — all surviving unique normalized words, keyed by length.
    pub fn parse_from_str(contents: &str) -> LengthIndex {
        let mut groups: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();

        for token in contents.split_whitespace() {
            if let Some(clean) = normalize_token(token) {
                groups.entry(clean.len()).or_default().insert(clean);
            }
        }

        LengthIndex { groups }
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<LengthIndex> {
        let path_ref = path.as_ref();

        // Read the entire file into a single string.
        // Using `read_to_string` ensures UTF-8 decoding.
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// The distinct word lengths present, in ascending order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    /// All words of the given length, or `None` if no word of that length survived.
    pub fn words_of_len(&self, len: usize) -> Option<&BTreeSet<String>> {
        self.groups.get(&len)
    }

    /// Total number of indexed words across all lengths.
    pub fn word_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// True if no word survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
