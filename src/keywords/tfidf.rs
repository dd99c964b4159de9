use tracing::debug;

use super::{top_k_keywords, Keyword, KeywordFilter};
use crate::dictionary_lib::IdfTable;
use crate::frequency::FrequencyTable;
use crate::segmenter::Token;

/// TF-IDF keyword scorer over a static corpus IDF table.
///
/// TF is a candidate's count divided by the number of candidate tokens in the document;
/// the weight is `tf * idf`, with unknown words falling back to the table default.
#[derive(Debug, Clone, Copy)]
pub struct TfIdf<'a> {
    idf_table: &'a IdfTable,
    filter: KeywordFilter<'a>,
}

impl<'a> TfIdf<'a> {
    pub fn new(idf_table: &'a IdfTable, filter: KeywordFilter<'a>) -> Self {
        TfIdf { idf_table, filter }
    }

    pub fn score(&self, tokens: &[Token], top_k: usize) -> Vec<Keyword> {
        let candidates = self.filter.candidates(tokens);
        let table = FrequencyTable::count_words(candidates);
        let total = table.total();
        if total == 0 {
            return Vec::new();
        }

        let scored: Vec<(String, f64)> = table
            .iter()
            .map(|(word, count)| {
                let tf = count as f64 / total as f64;
                (word.to_string(), tf * self.idf_table.idf(word))
            })
            .collect();
        debug!(candidates = total, distinct = scored.len(), "TF-IDF scored");

        top_k_keywords(scored, top_k)
    }
}
