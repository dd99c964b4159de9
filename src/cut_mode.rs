use serde::{Deserialize, Serialize};
use std::fmt;

/// Segmentation mode (strongly-typed).
///
/// | Variant   | Name        | Output                                                   |
/// |-----------|-------------|----------------------------------------------------------|
/// | `Precise` | `"precise"` | Disjoint best-path words covering every character once   |
/// | `Search`  | `"search"`  | Precise words plus overlapping dictionary sub-words      |
///
/// Modes can be parsed from strings via `TryFrom<&str>` (case-insensitive); `"default"`
/// and `"exact"` are accepted as aliases of `Precise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    /// Disjoint maximum-weight segmentation.
    #[default]
    Precise,

    /// Precise segmentation followed by every in-dictionary sub-word, for recall.
    Search,
}

impl TryFrom<&str> for CutMode {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "precise" | "default" | "exact" => Ok(Self::Precise),
            "search" => Ok(Self::Search),
            _ => Err(()),
        }
    }
}

impl CutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Precise => "precise",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for CutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword ranking method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMethod {
    /// Term frequency weighted by corpus inverse document frequency.
    TfIdf,
    /// Co-occurrence graph centrality.
    TextRank,
}

impl TryFrom<&str> for KeywordMethod {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(Self::TfIdf),
            "textrank" => Ok(Self::TextRank),
            _ => Err(()),
        }
    }
}

impl KeywordMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TfIdf => "tfidf",
            Self::TextRank => "textrank",
        }
    }
}

impl fmt::Display for KeywordMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
