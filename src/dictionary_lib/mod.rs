use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use include_flate::flate;
use tracing::{debug, warn};

pub mod idf_table;
pub use idf_table::IdfTable;

flate!(static DEFAULT_DICT: str from "src/dictionary_lib/dicts/dict.txt");

/// Arena index of a [`LexiconEntry`].
pub type EntryId = u32;

/// One dictionary word.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub word: String,
    /// Occurrence frequency in the source corpus, never below 1.
    pub freq: u64,
    /// Atomic entries are always emitted whole and never decomposed.
    pub atomic: bool,
    /// Cached length in chars.
    pub char_len: usize,
}

/// Word → weight table used to rank candidate segmentations.
///
/// Entries are stored in an arena (`Vec`) and looked up through a word → id index.
/// The lexicon is built once; [`Lexicon::add_atomic`] needs `&mut self`, so once the
/// lexicon is shared by reference with the segmenter it can no longer change.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: HashMap<String, EntryId>,
    total_freq: u64,
    max_word_chars: usize,
    max_atomic_chars: usize,
    ln_total: f64,
}

impl Lexicon {
    /// Loads the embedded default dictionary.
    pub fn new() -> Self {
        Self::from_dict_str(&DEFAULT_DICT)
    }

    /// Builds a lexicon from `word freq [tag]` lines.
    pub fn load<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut lexicon = Lexicon::default();
        for (line_no, line) in reader.lines().enumerate() {
            lexicon.insert_line(&line?, line_no + 1);
        }
        lexicon.refresh_totals();
        Ok(lexicon)
    }

    /// Same as [`Lexicon::load`] over an in-memory dictionary.
    pub fn from_dict_str(dictionary_content: &str) -> Self {
        let mut lexicon = Lexicon::default();
        for (line_no, line) in dictionary_content.lines().enumerate() {
            lexicon.insert_line(line, line_no + 1);
        }
        lexicon.refresh_totals();
        debug!(
            entries = lexicon.len(),
            total_freq = lexicon.total_freq,
            "Lexicon loaded"
        );
        lexicon
    }

    pub fn load_from_path<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
        let file = File::open(filename)?;
        Self::load(BufReader::new(file))
    }

    fn insert_line(&mut self, line: &str, line_no: usize) {
        let mut parts = line.split_whitespace();
        let (Some(word), Some(freq)) = (parts.next(), parts.next()) else {
            if !line.trim().is_empty() {
                warn!(line_no, line, "Invalid dictionary line format");
            }
            return;
        };
        match freq.parse::<u64>() {
            Ok(freq) => {
                self.upsert(word, freq.max(1), false);
            }
            Err(_) => warn!(line_no, line, "Invalid dictionary frequency"),
        }
    }

    fn upsert(&mut self, word: &str, freq: u64, atomic: bool) -> EntryId {
        let char_len = word.chars().count();
        if let Some(&id) = self.index.get(word) {
            let entry = &mut self.entries[id as usize];
            entry.freq = freq;
            entry.atomic |= atomic;
            return id;
        }

        let id = self.entries.len() as EntryId;
        self.entries.push(LexiconEntry {
            word: word.to_string(),
            freq,
            atomic,
            char_len,
        });
        self.index.insert(word.to_string(), id);
        id
    }

    fn refresh_totals(&mut self) {
        self.total_freq = self.entries.iter().map(|e| e.freq).sum::<u64>().max(1);
        self.ln_total = (self.total_freq as f64).ln();
        self.max_word_chars = self.entries.iter().map(|e| e.char_len).max().unwrap_or(1);
        self.max_atomic_chars = self
            .entries
            .iter()
            .filter(|e| e.atomic)
            .map(|e| e.char_len)
            .max()
            .unwrap_or(0);
    }

    /// Inserts `word` (or flags an existing entry) as atomic.
    ///
    /// Atomic words are cut out of the text before the best-path search, so they win
    /// over any decomposition the dictionary weights would prefer. Empty words are ignored.
    pub fn add_atomic(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        let freq = self.get(word).map_or(1, |e| e.freq);
        self.upsert(word, freq, true);
        self.refresh_totals();
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.index.get(word).map(|&id| &self.entries[id as usize])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn is_atomic(&self, word: &str) -> bool {
        self.get(word).is_some_and(|e| e.atomic)
    }

    /// Log-probability weight of `word`; `None` when the word is unknown.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.get(word).map(|e| (e.freq as f64).ln() - self.ln_total)
    }

    /// Weight given to a character the dictionary does not know.
    pub fn unknown_weight(&self) -> f64 {
        -self.ln_total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_freq(&self) -> u64 {
        self.total_freq
    }

    /// Longest entry, in chars.
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// Longest atomic entry, in chars; 0 when there are none.
    pub fn max_atomic_chars(&self) -> usize {
        self.max_atomic_chars
    }
}
