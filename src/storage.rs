//! File plumbing: input decoding with a GBK fallback, stopword bootstrap and artifact
//! writing. Failures are logged here with path and operation; callers only see the
//! typed result.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::GBK;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{PrepError, Result};
use crate::stopwords::StopwordSet;

/// Where the stopwords of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// Read from the existing file.
    File,
    /// File was absent or empty; the built-in set was written out and used.
    CreatedDefault,
    /// Built-in set used, but writing it out failed.
    DefaultNotPersisted,
}

/// Reads a text file as UTF-8, falling back to GBK.
///
/// Errors: `MissingInput` when absent, `DecodeFailure` when neither encoding fits,
/// `Io` for other read failures. Empty content is returned as-is.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PrepError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => PrepError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let bytes = err.into_bytes();
            match GBK.decode_without_bom_handling_and_without_replacement(&bytes) {
                Some(text) => {
                    info!(path = %path.display(), "Decoded file with GBK fallback");
                    Ok(text.into_owned())
                }
                None => Err(PrepError::DecodeFailure {
                    path: path.to_path_buf(),
                }),
            }
        }
    }
}

/// Reads the document to analyze; any failure or empty content is `MissingInput`.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = read_text(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "Failed to read input file");
        err.into_missing_input()
    })?;
    if text.is_empty() {
        warn!(path = %path.display(), "Input file is empty");
        return Err(PrepError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

/// Writes `content` as UTF-8, replacing any existing file.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| {
        warn!(path = %path.display(), error = %source, "Failed to write file");
        PrepError::Persistence {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Loads the stopword file, bootstrapping it with the built-in set when it is absent,
/// empty or unreadable. A failed bootstrap write still yields the built-in set.
pub fn load_or_create_stopwords<P: AsRef<Path>>(path: P) -> (StopwordSet, StopwordSource) {
    let path = path.as_ref();
    match read_text(path) {
        Ok(content) if !content.trim().is_empty() => {
            return (StopwordSet::from_lines(&content), StopwordSource::File);
        }
        Ok(_) => info!(path = %path.display(), "Stopword file is empty, creating default"),
        Err(err) => info!(path = %path.display(), reason = %err, "Stopword file unavailable, creating default"),
    }

    let defaults = StopwordSet::builtin();
    match write_text(path, &defaults.to_sorted_lines()) {
        Ok(()) => {
            info!(path = %path.display(), count = defaults.len(), "Created default stopword file");
            (defaults, StopwordSource::CreatedDefault)
        }
        Err(_) => (defaults, StopwordSource::DefaultNotPersisted),
    }
}
