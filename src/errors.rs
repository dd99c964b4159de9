use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the I/O boundary of the preprocessing pipeline.
///
/// Pure stages (normalization, segmentation, filtering, counting, scoring) never fail;
/// only reading the input, the stopword file, the config file and writing artifacts do.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrepError {
    /// Input file absent, unreadable or empty after decoding.
    #[error("input file missing or empty: {path:?}")]
    MissingInput { path: PathBuf },

    /// Neither UTF-8 nor the GBK fallback could decode the file.
    #[error("failed to decode {path:?} as UTF-8 or GBK")]
    DecodeFailure { path: PathBuf },

    /// Reading a file failed for a reason other than absence.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output artifact (result or stopword file) could not be written.
    #[error("failed to write {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON configuration file is malformed.
    #[error("invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PrepError {
    /// Collapses decode and read failures into `MissingInput`, the fatal input error.
    pub fn into_missing_input(self) -> Self {
        match self {
            PrepError::DecodeFailure { path } | PrepError::Io { path, .. } => {
                PrepError::MissingInput { path }
            }
            other => other,
        }
    }

    /// True when the error aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PrepError::Persistence { .. })
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
