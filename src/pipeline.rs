use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::dictionary_lib::{IdfTable, Lexicon};
use crate::errors::{PrepError, Result};
use crate::frequency::FrequencyTable;
use crate::keywords::{format_frequencies, format_keywords, Keyword, TextRank};
use crate::normalizer::normalize;
use crate::segmenter::Token;
use crate::storage::{self, StopwordSource};
use crate::{Analyzer, DEFAULT_CUSTOM_WORDS};

pub const INPUT_FILE: &str = "input.txt";
pub const STOPWORDS_FILE: &str = "stopwords.txt";
pub const WORD_FREQ_FILE: &str = "word_frequency.txt";
pub const TOP_KEYWORDS_TFIDF_FILE: &str = "top_keywords_tfidf.txt";
pub const TOP_KEYWORDS_TEXTRANK_FILE: &str = "top_keywords_textrank.txt";

/// Settings of one pipeline run. Every field has a default, so a JSON config file only
/// needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub stopwords_path: PathBuf,
    pub frequency_path: PathBuf,
    pub tfidf_path: PathBuf,
    pub textrank_path: PathBuf,
    /// Maximum keywords written per method.
    pub top_k: usize,
    /// Atomic lexicon entries added before segmentation.
    pub custom_words: Vec<String>,
    /// Minimum keyword length in chars.
    pub min_word_chars: usize,
    pub window_size: usize,
    pub damping: f64,
    pub max_iterations: usize,
    pub epsilon: f64,
    /// IDF for words missing from the corpus table; the table median when `None`.
    pub default_idf: Option<f64>,
    /// Number of tokens shown in progress logs.
    pub preview_len: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl PipelineConfig {
    /// Default settings with every file placed in `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        PipelineConfig {
            input_path: dir.join(INPUT_FILE),
            stopwords_path: dir.join(STOPWORDS_FILE),
            frequency_path: dir.join(WORD_FREQ_FILE),
            tfidf_path: dir.join(TOP_KEYWORDS_TFIDF_FILE),
            textrank_path: dir.join(TOP_KEYWORDS_TEXTRANK_FILE),
            top_k: 100,
            custom_words: DEFAULT_CUSTOM_WORDS.iter().map(|w| w.to_string()).collect(),
            min_word_chars: 2,
            window_size: TextRank::DEFAULT_WINDOW_SIZE,
            damping: TextRank::DEFAULT_DAMPING,
            max_iterations: TextRank::DEFAULT_MAX_ITERATIONS,
            epsilon: TextRank::DEFAULT_EPSILON,
            default_idf: None,
            preview_len: 10,
        }
    }

    /// Reads a JSON config; missing keys take their defaults relative to `.`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::default().with_json_file(path)
    }

    /// Overrides the fields present in a JSON config file; absent keys keep the values
    /// of `self`, so paths not named in the file stay inside the current work directory.
    pub fn with_json_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = storage::read_text(path)?;
        let config_error = |source| PrepError::Config {
            path: path.to_path_buf(),
            source,
        };

        let overrides = match serde_json::from_str::<Value>(&content).map_err(config_error)? {
            Value::Object(fields) => fields,
            other => return serde_json::from_value(other).map_err(config_error),
        };
        let mut merged = serde_json::to_value(&self).map_err(config_error)?;
        if let Some(fields) = merged.as_object_mut() {
            fields.extend(overrides);
        }
        serde_json::from_value(merged).map_err(config_error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    WordFrequency,
    TfIdfKeywords,
    TextRankKeywords,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordFrequency => "word frequency",
            Self::TfIdfKeywords => "TF-IDF keywords",
            Self::TextRankKeywords => "TextRank keywords",
        }
    }
}

/// Result of writing one output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub written: bool,
    pub error: Option<String>,
}

/// Everything a run produced, including artifacts that failed to persist.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub normalized_text: String,
    pub precise_tokens: usize,
    pub search_tokens: usize,
    pub filtered_tokens: usize,
    pub custom_words: usize,
    pub stopword_source: StopwordSource,
    pub frequencies: Vec<(String, usize)>,
    pub tfidf: Vec<Keyword>,
    pub textrank: Vec<Keyword>,
    pub artifacts: Vec<ArtifactOutcome>,
}

impl PipelineReport {
    pub fn all_written(&self) -> bool {
        self.artifacts.iter().all(|a| a.written)
    }

    pub fn failed_artifacts(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|a| !a.written)
    }
}

/// Sequential batch run: normalize, segment, filter, count and rank keywords, writing
/// one artifact per result.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    lexicon: Option<Lexicon>,
    idf_table: Option<IdfTable>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline {
            config,
            lexicon: None,
            idf_table: None,
        }
    }

    /// Uses `lexicon` instead of the embedded dictionary.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Uses `idf_table` instead of the embedded corpus table.
    pub fn with_idf_table(mut self, idf_table: IdfTable) -> Self {
        self.idf_table = Some(idf_table);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs every stage.
    ///
    /// Only a missing or undecodable input aborts, before any file is written. Artifact
    /// write failures are logged and reported in [`PipelineReport::artifacts`].
    pub fn run(self) -> Result<PipelineReport> {
        let Pipeline {
            config,
            lexicon,
            idf_table,
        } = self;

        info!(path = %config.input_path.display(), "Loading and normalizing text");
        let raw = storage::read_input(&config.input_path)?;
        let normalized = normalize(&raw);

        info!(path = %config.stopwords_path.display(), "Loading stopwords");
        let (stopwords, stopword_source) = storage::load_or_create_stopwords(&config.stopwords_path);

        let mut lexicon = lexicon.unwrap_or_else(Lexicon::new);
        for word in &config.custom_words {
            lexicon.add_atomic(word);
        }
        info!(count = config.custom_words.len(), "Added custom words");

        let mut idf_table = idf_table.unwrap_or_else(IdfTable::new);
        if let Some(default_idf) = config.default_idf {
            idf_table = idf_table.with_default_idf(default_idf);
        }

        let analyzer = Analyzer::with_parts(lexicon, stopwords, idf_table)
            .with_min_word_chars(config.min_word_chars);

        info!("Segmenting (precise mode)");
        let precise = analyzer.cut(&normalized);
        info!(preview = %preview(&precise, config.preview_len), "Precise segmentation");

        info!("Segmenting (search mode)");
        let search = analyzer.cut_for_search(&normalized);
        info!(preview = %preview(&search, config.preview_len), "Search segmentation");

        info!("Filtering stopwords");
        let filtered = analyzer.filter_stopwords(&precise);
        info!(preview = %preview(&filtered, config.preview_len), "Filtered tokens");

        info!("Counting word frequency");
        let frequencies = FrequencyTable::count(&filtered).rank();
        info!(top = ?&frequencies[..frequencies.len().min(5)], "Word frequency");

        let mut artifacts = Vec::with_capacity(3);
        artifacts.push(save(
            ArtifactKind::WordFrequency,
            &config.frequency_path,
            &format_frequencies(&frequencies),
        ));

        info!("Extracting keywords with TF-IDF");
        let tfidf = analyzer.tfidf().score(&precise, config.top_k);
        info!(top = ?&tfidf[..tfidf.len().min(5)], "TF-IDF keywords");
        artifacts.push(save(
            ArtifactKind::TfIdfKeywords,
            &config.tfidf_path,
            &format_keywords(&tfidf),
        ));

        info!("Extracting keywords with TextRank");
        let textrank = analyzer
            .textrank()
            .with_window_size(config.window_size)
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_epsilon(config.epsilon)
            .score(&filtered, config.top_k);
        info!(top = ?&textrank[..textrank.len().min(5)], "TextRank keywords");
        artifacts.push(save(
            ArtifactKind::TextRankKeywords,
            &config.textrank_path,
            &format_keywords(&textrank),
        ));

        Ok(PipelineReport {
            normalized_text: normalized,
            precise_tokens: precise.len(),
            search_tokens: search.len(),
            filtered_tokens: filtered.len(),
            custom_words: config.custom_words.len(),
            stopword_source,
            frequencies,
            tfidf,
            textrank,
            artifacts,
        })
    }
}

fn preview(tokens: &[Token], n: usize) -> String {
    let words: Vec<&str> = tokens.iter().take(n).map(|t| t.word.as_str()).collect();
    format!("{words:?}")
}

fn save(kind: ArtifactKind, path: &Path, content: &str) -> ArtifactOutcome {
    match storage::write_text(path, content) {
        Ok(()) => {
            info!(path = %path.display(), "Saved {}", kind.as_str());
            ArtifactOutcome {
                kind,
                path: path.to_path_buf(),
                written: true,
                error: None,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), "Failed to save {}", kind.as_str());
            ArtifactOutcome {
                kind,
                path: path.to_path_buf(),
                written: false,
                error: Some(err.to_string()),
            }
        }
    }
}
