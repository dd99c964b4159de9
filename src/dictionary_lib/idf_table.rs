use std::collections::HashMap;
use std::io::{self, BufRead};

use include_flate::flate;
use tracing::warn;

flate!(static DEFAULT_IDF: str from "src/dictionary_lib/dicts/idf.txt");

/// Static corpus table of inverse document frequencies.
///
/// Words absent from the table score with [`IdfTable::default_idf`], which is the median
/// of the loaded values unless overridden with [`IdfTable::with_default_idf`].
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    map: HashMap<String, f64>,
    default_idf: f64,
}

impl IdfTable {
    /// Loads the embedded corpus table.
    pub fn new() -> Self {
        Self::from_idf_str(&DEFAULT_IDF)
    }

    /// Builds a table from `word idf` lines.
    pub fn from_idf_str(content: &str) -> Self {
        let mut map = HashMap::new();
        for line in content.lines() {
            insert_line(&mut map, line);
        }
        Self::from_map(map)
    }

    pub fn load<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut map = HashMap::new();
        for line in reader.lines() {
            insert_line(&mut map, &line?);
        }
        Ok(Self::from_map(map))
    }

    fn from_map(map: HashMap<String, f64>) -> Self {
        let default_idf = median(map.values().copied().collect());
        IdfTable { map, default_idf }
    }

    /// Overrides the IDF used for words missing from the table.
    pub fn with_default_idf(mut self, default_idf: f64) -> Self {
        self.default_idf = default_idf;
        self
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.map.get(word).copied()
    }

    /// IDF of `word`, falling back to the default for unknown words.
    #[inline]
    pub fn idf(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(self.default_idf)
    }

    pub fn default_idf(&self) -> f64 {
        self.default_idf
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn insert_line(map: &mut HashMap<String, f64>, line: &str) {
    let mut parts = line.split_whitespace();
    let (Some(word), Some(value)) = (parts.next(), parts.next()) else {
        return;
    };
    match value.parse::<f64>() {
        Ok(idf) if idf.is_finite() && idf >= 0.0 => {
            map.insert(word.to_string(), idf);
        }
        _ => warn!(line, "Invalid IDF line"),
    }
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    values[values.len() / 2]
}
