use serde::{Deserialize, Serialize};

use crate::segmenter::Token;
use crate::stopwords::StopwordSet;

pub mod textrank;
pub mod tfidf;

pub use textrank::{CoOccurrenceGraph, TextRank};
pub use tfidf::TfIdf;

/// Keyword with its score (weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub weight: f64,
}

/// Decides which words may become keywords.
///
/// A candidate is not a stopword and has at least `min_word_chars` characters, which by
/// default drops single-character, low-information words.
#[derive(Debug, Clone, Copy)]
pub struct KeywordFilter<'a> {
    stopwords: &'a StopwordSet,
    min_word_chars: usize,
}

impl<'a> KeywordFilter<'a> {
    pub const DEFAULT_MIN_WORD_CHARS: usize = 2;

    pub fn new(stopwords: &'a StopwordSet) -> Self {
        KeywordFilter {
            stopwords,
            min_word_chars: Self::DEFAULT_MIN_WORD_CHARS,
        }
    }

    pub fn with_min_word_chars(mut self, min_word_chars: usize) -> Self {
        self.min_word_chars = min_word_chars;
        self
    }

    #[inline]
    pub fn is_candidate(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty()
            && word.chars().count() >= self.min_word_chars
            && !self.stopwords.contains(word)
    }

    /// Candidate words in token order.
    pub fn candidates<'t>(&self, tokens: &'t [Token]) -> Vec<&'t str> {
        tokens
            .iter()
            .map(|t| t.word.as_str())
            .filter(|w| self.is_candidate(w))
            .collect()
    }
}

/// Sorts `(word, score)` pairs given in first-appearance order by score descending and
/// keeps the first `top_k`. Equal scores keep their appearance order.
pub(crate) fn top_k_keywords(mut scored: Vec<(String, f64)>, top_k: usize) -> Vec<Keyword> {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(top_k)
        .map(|(keyword, weight)| Keyword { keyword, weight })
        .collect()
}

/// One `word: weight` line per keyword, weight with 6 decimals.
pub fn format_keywords(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .map(|k| format!("{}: {:.6}", k.keyword, k.weight))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `word: count` line per entry.
pub fn format_frequencies(ranked: &[(String, usize)]) -> String {
    ranked
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a `word: weight` line written by [`format_keywords`].
pub fn parse_keyword_line(line: &str) -> Option<Keyword> {
    let (keyword, weight) = line.trim_end().rsplit_once(": ")?;
    let weight = weight.trim().parse::<f64>().ok()?;
    if keyword.is_empty() {
        return None;
    }
    Some(Keyword {
        keyword: keyword.to_string(),
        weight,
    })
}
