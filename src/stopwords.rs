use std::collections::{BTreeSet, HashSet};

use crate::segmenter::Token;

/// Built-in function words used when no stopword file exists.
pub const DEFAULT_STOPWORDS: [&str; 38] = [
    "的", "了", "和", "是", "就", "都", "而", "及", "与", "着", "或", "一个", "没有", "我们",
    "你们", "他们", "她们", "它们", "这个", "那个", "这些", "那些", "不", "在", "人", "我",
    "有", "个", "好", "来", "去", "也", "很", "但", "吧", "啊", "呢", "啦",
];

/// Exact-match stopword set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in default set.
    pub fn builtin() -> Self {
        Self::from_list(&DEFAULT_STOPWORDS)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list(words: &[&str]) -> Self {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// Parses one word per line; surrounding whitespace is trimmed and blank lines skipped.
    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in code point order, one per line, without a trailing newline.
    pub fn to_sorted_lines(&self) -> String {
        self.words
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StopwordSet {
            words: iter.into_iter().collect(),
        }
    }
}

/// Drops empty (after trimming) tokens and stopwords; order is preserved.
pub fn filter_stopwords(tokens: &[Token], stopwords: &StopwordSet) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| {
            let word = t.word.trim();
            !word.is_empty() && !stopwords.contains(word)
        })
        .cloned()
        .collect()
}
