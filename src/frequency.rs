use std::collections::HashMap;

use crate::segmenter::Token;

/// Word counts in order of first occurrence.
///
/// Counts live in a vector indexed through a word → slot map, so equal counts rank in
/// the order the words first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn count(tokens: &[Token]) -> Self {
        Self::count_words(tokens.iter().map(|t| t.word.as_str()))
    }

    pub fn count_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = FrequencyTable::default();
        for word in words {
            table.add(word);
        }
        table
    }

    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
        self.total += 1;
    }

    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Entries by count descending, ties by first occurrence.
    pub fn rank(&self) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        // Stable sort keeps first-occurrence order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` most frequent entries.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.rank();
        ranked.truncate(n);
        ranked
    }
}
