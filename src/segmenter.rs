use serde::{Deserialize, Serialize};

use crate::cut_mode::CutMode;
use crate::dictionary_lib::Lexicon;
use crate::normalizer::cjk_runs;

/// A segmented word and its starting byte offset in the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub offset: usize,
}

impl Token {
    pub fn new(word: impl Into<String>, offset: usize) -> Self {
        Token {
            word: word.into(),
            offset,
        }
    }

    /// Length of the word in chars.
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }

    /// Byte offset one past the end of the word.
    pub fn end(&self) -> usize {
        self.offset + self.word.len()
    }
}

/// Best suffix path found so far: (total weight, token count, end of first word).
type Route = (f64, usize, usize);

/// Segments normalized text into tokens.
///
/// Each maximal CJK run is cut independently; spaces never end up inside a token.
/// In [`CutMode::Precise`] the concatenation of the tokens of a run equals the run.
/// [`CutMode::Search`] inserts dictionary sub-words after each multi-character word.
pub fn segment(text: &str, lexicon: &Lexicon, mode: CutMode) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (run_offset, run) in cjk_runs(text) {
        cut_run(run, run_offset, lexicon, &mut tokens);
    }

    match mode {
        CutMode::Precise => tokens,
        CutMode::Search => expand_for_search(tokens, lexicon),
    }
}

/// Convenience wrapper returning only the words.
pub fn segment_words(text: &str, lexicon: &Lexicon, mode: CutMode) -> Vec<String> {
    segment(text, lexicon, mode)
        .into_iter()
        .map(|t| t.word)
        .collect()
}

fn char_bounds(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

// Atomic words are cut first (leftmost, then longest); the gaps between them go through
// the best-path search.
fn cut_run(run: &str, run_offset: usize, lexicon: &Lexicon, out: &mut Vec<Token>) {
    let bounds = char_bounds(run);
    let n = bounds.len() - 1;
    let max_atomic = lexicon.max_atomic_chars();

    let mut gap_start = 0;
    let mut i = 0;
    while i < n && max_atomic > 0 {
        let longest = (1..=max_atomic.min(n - i))
            .rev()
            .find(|&len| lexicon.is_atomic(&run[bounds[i]..bounds[i + len]]));

        match longest {
            Some(len) => {
                best_path(run, &bounds, gap_start, i, run_offset, lexicon, out);
                out.push(Token::new(
                    &run[bounds[i]..bounds[i + len]],
                    run_offset + bounds[i],
                ));
                i += len;
                gap_start = i;
            }
            None => i += 1,
        }
    }

    best_path(run, &bounds, gap_start, n, run_offset, lexicon, out);
}

#[inline]
fn better(candidate: Route, best: Route) -> bool {
    if candidate.0 != best.0 {
        return candidate.0 > best.0;
    }
    if candidate.1 != best.1 {
        return candidate.1 < best.1;
    }
    candidate.2 > best.2
}

// Maximum-weight path over the chars `from..to` of `run`, filled right to left.
fn best_path(
    run: &str,
    bounds: &[usize],
    from: usize,
    to: usize,
    run_offset: usize,
    lexicon: &Lexicon,
    out: &mut Vec<Token>,
) {
    if from >= to {
        return;
    }
    let n = to - from;
    let max_len = lexicon.max_word_chars().max(1);
    let unknown = lexicon.unknown_weight();

    let mut route: Vec<Route> = vec![(0.0, 0, n); n + 1];
    for i in (0..n).rev() {
        // A single char is always a valid edge, known or not.
        let mut best: Route = (f64::NEG_INFINITY, usize::MAX, i + 1);
        for j in (i + 1)..=(i + max_len).min(n) {
            let word = &run[bounds[from + i]..bounds[from + j]];
            let weight = match lexicon.weight(word) {
                Some(w) => w,
                None if j == i + 1 => unknown,
                None => continue,
            };
            let candidate = (weight + route[j].0, route[j].1 + 1, j);
            if better(candidate, best) {
                best = candidate;
            }
        }
        route[i] = best;
    }

    let mut i = 0;
    while i < n {
        let j = route[i].2;
        out.push(Token::new(
            &run[bounds[from + i]..bounds[from + j]],
            run_offset + bounds[from + i],
        ));
        i = j;
    }
}

fn expand_for_search(tokens: Vec<Token>, lexicon: &Lexicon) -> Vec<Token> {
    let mut expanded = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        let bounds = char_bounds(&token.word);
        let len = bounds.len() - 1;
        let mut subwords = Vec::new();
        if len > 2 {
            for start in 0..len {
                for end in (start + 2)..=len {
                    if end - start == len {
                        continue;
                    }
                    let sub = &token.word[bounds[start]..bounds[end]];
                    if lexicon.contains(sub) {
                        subwords.push(Token::new(sub, token.offset + bounds[start]));
                    }
                }
            }
        }
        expanded.push(token);
        expanded.extend(subwords);
    }
    expanded
}
