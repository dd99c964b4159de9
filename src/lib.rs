use tracing::debug;

use crate::dictionary_lib::{IdfTable, Lexicon};
use crate::keywords::{Keyword, KeywordFilter, TextRank, TfIdf};
use crate::normalizer::normalize;
use crate::stopwords::StopwordSet;

pub use crate::cut_mode::{CutMode, KeywordMethod};
pub use crate::errors::PrepError;
pub use crate::frequency::FrequencyTable;
pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineReport};
pub use crate::segmenter::Token;

pub mod cut_mode;
pub mod dictionary_lib;
pub mod errors;
pub mod frequency;
pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod segmenter;
pub mod stopwords;
pub mod storage;

/// Domain terms added as atomic lexicon entries by default.
pub const DEFAULT_CUSTOM_WORDS: [&str; 4] = ["人工智能", "机器学习", "深度学习", "自然语言处理"];

/// Immutable analysis context: lexicon, stopwords and corpus IDF table.
///
/// Build it once and share it by reference (or `Arc`) with every stage; none of its
/// parts change after construction.
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Lexicon,
    stopwords: StopwordSet,
    idf_table: IdfTable,
    min_word_chars: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Embedded lexicon with [`DEFAULT_CUSTOM_WORDS`], built-in stopwords, embedded IDF table.
    pub fn new() -> Self {
        let mut lexicon = Lexicon::new();
        for word in DEFAULT_CUSTOM_WORDS {
            lexicon.add_atomic(word);
        }
        Self::with_parts(lexicon, StopwordSet::builtin(), IdfTable::new())
    }

    pub fn with_parts(lexicon: Lexicon, stopwords: StopwordSet, idf_table: IdfTable) -> Self {
        Analyzer {
            lexicon,
            stopwords,
            idf_table,
            min_word_chars: KeywordFilter::DEFAULT_MIN_WORD_CHARS,
        }
    }

    /// Minimum length, in chars, of keyword candidates (default 2).
    pub fn with_min_word_chars(mut self, min_word_chars: usize) -> Self {
        self.min_word_chars = min_word_chars;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn idf_table(&self) -> &IdfTable {
        &self.idf_table
    }

    /// Segments already-normalized text.
    pub fn segment(&self, text: &str, mode: CutMode) -> Vec<Token> {
        segmenter::segment(text, &self.lexicon, mode)
    }

    /// Precise-mode segmentation.
    pub fn cut(&self, text: &str) -> Vec<Token> {
        self.segment(text, CutMode::Precise)
    }

    /// Search-mode segmentation.
    pub fn cut_for_search(&self, text: &str) -> Vec<Token> {
        self.segment(text, CutMode::Search)
    }

    /// Segmented words joined with `delimiter`.
    pub fn cut_and_join(&self, text: &str, mode: CutMode, delimiter: &str) -> String {
        segmenter::segment_words(text, &self.lexicon, mode).join(delimiter)
    }

    pub fn filter_stopwords(&self, tokens: &[Token]) -> Vec<Token> {
        stopwords::filter_stopwords(tokens, &self.stopwords)
    }

    pub fn keyword_filter(&self) -> KeywordFilter<'_> {
        KeywordFilter::new(&self.stopwords).with_min_word_chars(self.min_word_chars)
    }

    pub fn tfidf(&self) -> TfIdf<'_> {
        TfIdf::new(&self.idf_table, self.keyword_filter())
    }

    /// TextRank scorer with default window, damping and iteration settings.
    pub fn textrank(&self) -> TextRank<'_> {
        TextRank::new(self.keyword_filter())
    }

    /// TF-IDF keywords of raw text; the text is normalized and segmented first.
    pub fn keyword_weight_tfidf(&self, input: &str, top_k: usize) -> Vec<Keyword> {
        let tokens = self.cut(&normalize(input));
        self.tfidf().score(&tokens, top_k)
    }

    pub fn keyword_extract_tfidf(&self, input: &str, top_k: usize) -> Vec<String> {
        self.keyword_weight_tfidf(input, top_k)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }

    /// TextRank keywords of raw text; the text is normalized, segmented and stopword
    /// filtered first.
    pub fn keyword_weight_textrank(&self, input: &str, top_k: usize) -> Vec<Keyword> {
        let tokens = self.filter_stopwords(&self.cut(&normalize(input)));
        self.textrank().score(&tokens, top_k)
    }

    pub fn keyword_extract_textrank(&self, input: &str, top_k: usize) -> Vec<String> {
        self.keyword_weight_textrank(input, top_k)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }

    pub fn extract_keywords(&self, input: &str, method: KeywordMethod, top_k: usize) -> Vec<Keyword> {
        let keywords = match method {
            KeywordMethod::TfIdf => self.keyword_weight_tfidf(input, top_k),
            KeywordMethod::TextRank => self.keyword_weight_textrank(input, top_k),
        };
        debug!(%method, top_k, found = keywords.len(), "Keywords extracted");
        keywords
    }
}
