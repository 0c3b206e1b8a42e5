//! The anagram searcher: enumerate word combinations whose letters match the input.
//!
//! # Algorithm
//!
//! Given an input text and a [`LengthIndex`]:
//!
//! 1. Compute the input's character count and [`LetterHistogram`] once.
//! 2. For each combination size `i` from 1 up to `max_words`, enumerate every
//!    combination of **distinct** word lengths whose sum equals the input length.
//! 3. For each qualifying combination, walk the cartesian product of the
//!    per-length word sets in slot order. A tuple is accepted when the
//!    histogram of its concatenated letters equals the input's histogram and
//!    the space-joined phrase is not literally the input itself.
//!
//! There is no pruning beyond the length-sum prefilter and the exact-histogram
//! postfilter. The cost is the product of the word-set sizes per combination,
//! summed over all qualifying combinations, so large `max_words` values over
//! large dictionaries get expensive quickly. That is acceptable at this tool's
//! scale (interactive single-word and short-phrase queries).
//!
//! Because combinations never repeat a length value, a phrase made of two
//! words of the *same* length is only reachable when that single length sums
//! to the input length on its own (`i == 1`). `find_anagrams("onno", ...)`
//! over `{on, no}` with `max_words = 2` finds nothing.
//!
//! # Examples
//!
//! ```
//! use anaphrase::dictionary::LengthIndex;
//! use anaphrase::solver::{self, Verbosity};
//!
//! let index = LengthIndex::parse_from_str("eat tea ate tan nat");
//! let result = solver::find_anagrams("eat", &index, 1, Verbosity::Quiet);
//!
//! assert_eq!(result.anagrams, vec!["ate", "tea"]);
//! ```

use crate::dictionary::LengthIndex;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Character-to-count mapping over an arbitrary string.
///
/// Two strings are anagram-equivalent iff their histograms are equal; this is
/// the sole equivalence test used by the search. Every character is counted,
/// including spaces and punctuation, so an input containing characters no
/// cleaned dictionary word can carry simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterHistogram(BTreeMap<char, usize>);

impl LetterHistogram {
    /// Count the occurrences of every character in `text`.
    pub fn of(text: &str) -> LetterHistogram {
        let mut counts = BTreeMap::new();
        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        LetterHistogram(counts)
    }
}

/// Explicit logging handle for the search.
///
/// The searcher never reads ambient logger state; callers opt into diagnostics
/// by passing [`Verbosity::Debug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No diagnostics.
    #[default]
    Quiet,
    /// Emit per-combination progress at debug level.
    Debug,
}

impl Verbosity {
    /// Emit a lazily-built debug message when diagnostics are enabled.
    fn debug(self, msg: impl FnOnce() -> String) {
        if self == Verbosity::Debug {
            log::debug!("{}", msg());
        }
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Accepted anagram phrases, in enumeration order.
    pub anagrams: Vec<String>,
    /// Number of qualifying length combinations examined.
    pub combos_searched: usize,
}

impl SearchResult {
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.anagrams.len()
    }
}

impl IntoIterator for SearchResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.anagrams.into_iter()
    }
}

/// Find every anagram phrase of `text` buildable from `index`.
///
/// `max_words` caps the number of words per phrase; `0` searches nothing and
/// returns an empty result. The result is freshly computed on every call, and
/// its order is fully determined by the index's fixed iteration order (lengths
/// ascending, words lexicographic within a length).
///
/// An accepted phrase always satisfies two checks:
/// - the histogram of its letters (spaces removed) equals the input's, and
/// - the phrase is not literally identical to the input text.
#[must_use]
pub fn find_anagrams(
    text: &str,
    index: &LengthIndex,
    max_words: usize,
    verbosity: Verbosity,
) -> SearchResult {
    let text_len = text.chars().count();
    let target = LetterHistogram::of(text);
    let lengths: Vec<usize> = index.lengths().collect();

    let mut result = SearchResult::default();

    for i in 1..=max_words {
        // Every way to choose `i` distinct word lengths adding up to the input
        // length. A length value never repeats within one combination.
        let key_combos: Vec<Vec<usize>> = lengths
            .iter()
            .copied()
            .combinations(i)
            .filter(|combo| combo.iter().sum::<usize>() == text_len)
            .collect();

        for keys in key_combos {
            verbosity.debug(|| format!("searching keys {keys:?}"));
            result.combos_searched += 1;

            // One slot per length, holding that length's word set. The keys
            // come from the index, so the lookup cannot miss; `flatten` keeps
            // the expression total anyway.
            let slots: Vec<Vec<&String>> = keys
                .iter()
                .map(|len| index.words_of_len(*len).into_iter().flatten().collect())
                .collect();

            for tuple in slots.into_iter().map(Vec::into_iter).multi_cartesian_product() {
                let letters: String = tuple.iter().map(|word| word.as_str()).collect();
                if LetterHistogram::of(&letters) != target {
                    continue;
                }

                let phrase = tuple.iter().join(" ");
                if phrase != text {
                    result.anagrams.push(phrase);
                }
            }

            verbosity.debug(|| format!("# anagrams = {}", result.anagrams.len()));
        }
    }

    verbosity.debug(|| "finished searching".to_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &str) -> LengthIndex {
        LengthIndex::parse_from_str(words)
    }

    fn find(text: &str, words: &str, max_words: usize) -> SearchResult {
        find_anagrams(text, &index_of(words), max_words, Verbosity::Quiet)
    }

    #[test]
    fn test_histogram_equality_for_anagrams() {
        assert_eq!(LetterHistogram::of("listen"), LetterHistogram::of("silent"));
        assert_eq!(LetterHistogram::of("eat"), LetterHistogram::of("tea"));
    }

    #[test]
    fn test_histogram_counts_matter() {
        assert_ne!(LetterHistogram::of("aab"), LetterHistogram::of("abb"));
        assert_ne!(LetterHistogram::of("eat"), LetterHistogram::of("eats"));
    }

    #[test]
    fn test_histogram_counts_every_char() {
        // Spaces and punctuation are characters like any other.
        assert_ne!(LetterHistogram::of("on time"), LetterHistogram::of("ontime"));
        assert_eq!(LetterHistogram::of(""), LetterHistogram::default());
    }

    #[test]
    fn test_single_word_anagrams() {
        let result = find("eat", "eat tea ate tan nat", 1);

        // "eat" itself is excluded; "tan"/"nat" fail the histogram check.
        assert_eq!(result.anagrams, vec!["ate", "tea"]);
    }

    #[test]
    fn test_single_letter_words_share_the_index() {
        let result = find("act", "a i cat act", 1);

        assert_eq!(result.anagrams, vec!["cat"]);
    }

    #[test]
    fn test_identity_phrase_excluded() {
        let result = find("eat", "eat", 1);

        assert!(result.anagrams.is_empty());
        // The length-3 combination still qualified and was searched.
        assert_eq!(result.combos_searched, 1);
    }

    #[test]
    fn test_two_word_phrase_with_distinct_lengths() {
        let result = find("notime", "on time cat", 2);

        assert_eq!(result.anagrams, vec!["on time"]);
    }

    #[test]
    fn test_slot_order_follows_ascending_lengths() {
        // The (2, 4) combination puts the two-letter word in the first slot.
        let result = find("notime", "on time", 2);

        assert_eq!(result.anagrams, vec!["on time"]);
        assert!(!result.anagrams.contains(&"time on".to_string()));
    }

    #[test]
    fn test_same_length_pairs_are_not_found() {
        // Combinations never repeat a length, so 2+2 phrases are unreachable
        // even though "on no" and "no on" rearrange the input exactly.
        let result = find("onno", "on no", 2);

        assert!(result.anagrams.is_empty());
        assert_eq!(result.combos_searched, 0);
    }

    #[test]
    fn test_zero_max_words_searches_nothing() {
        let result = find("eat", "eat tea ate", 0);

        assert_eq!(result.len(), 0);
        assert_eq!(result.combos_searched, 0);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let result = find("", "eat tea ate", 3);

        assert!(result.anagrams.is_empty());
    }

    #[test]
    fn test_empty_index_yields_nothing() {
        let result = find_anagrams("eat", &LengthIndex::default(), 3, Verbosity::Quiet);

        assert!(result.anagrams.is_empty());
        assert_eq!(result.combos_searched, 0);
    }

    #[test]
    fn test_accepted_phrases_satisfy_the_histogram_property() {
        let result = find("notime", "on time no ton emit", 2);

        assert!(!result.anagrams.is_empty());
        for phrase in &result.anagrams {
            let letters: String = phrase.chars().filter(|c| *c != ' ').collect();
            assert_eq!(LetterHistogram::of(&letters), LetterHistogram::of("notime"));
            assert_ne!(phrase, "notime");
        }
    }

    #[test]
    fn test_search_is_idempotent_and_deterministic() {
        let index = index_of("eat tea ate tan nat on no time emit");

        let first = find_anagrams("notime", &index, 2, Verbosity::Quiet);
        let second = find_anagrams("notime", &index, 2, Verbosity::Quiet);

        assert_eq!(first, second);
    }

    #[test]
    fn test_results_accumulate_across_combo_sizes() {
        // i=1 finds the single-word anagrams first, then i=2 the two-word phrase.
        let result = find("enlist", "listen tinsel in lets enlist", 2);

        assert_eq!(result.anagrams, vec!["listen", "tinsel", "in lets"]);
    }
}
