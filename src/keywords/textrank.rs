//! TextRank keyword extraction.
//!
//! Candidate words are interned into `u32` node ids in order of first appearance and
//! linked by co-occurrence inside a window sliding over the whole token stream. Scores
//! are then refined by weighted PageRank-style iteration until they settle or the
//! iteration cap is hit.

use std::collections::HashMap;

use tracing::debug;

use super::{top_k_keywords, Keyword, KeywordFilter};
use crate::segmenter::Token;

/// Node id of an interned word.
pub type NodeId = u32;

/// Undirected word co-occurrence graph without self-loops.
#[derive(Debug, Clone, Default)]
pub struct CoOccurrenceGraph {
    words: Vec<String>,
    ids: HashMap<String, NodeId>,
    /// Neighbors sorted by id, so summation order is stable between runs.
    adjacency: Vec<Vec<(NodeId, f64)>>,
}

impl CoOccurrenceGraph {
    /// Links every pair of positions less than `window_size` apart.
    ///
    /// Each position pair adds 1 to the edge between its two words; pairs of the same
    /// word are skipped.
    pub fn build(words: &[&str], window_size: usize) -> Self {
        Self::build_with(words, window_size, |_| true)
    }

    /// Like [`CoOccurrenceGraph::build`], but only words accepted by `is_node` become
    /// nodes. Rejected words still occupy their window position.
    pub fn build_with<F>(words: &[&str], window_size: usize, is_node: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let mut graph = CoOccurrenceGraph::default();
        let node_ids: Vec<Option<NodeId>> = words
            .iter()
            .map(|&w| is_node(w).then(|| graph.intern(w)))
            .collect();

        let mut edges: Vec<HashMap<NodeId, f64>> = vec![HashMap::new(); graph.words.len()];
        for (i, from) in node_ids.iter().enumerate() {
            let Some(from) = *from else {
                continue;
            };
            let window_end = (i + window_size).min(node_ids.len());
            for &to in node_ids.iter().take(window_end).skip(i + 1).flatten() {
                if from == to {
                    continue;
                }
                *edges[from as usize].entry(to).or_insert(0.0) += 1.0;
                *edges[to as usize].entry(from).or_insert(0.0) += 1.0;
            }
        }

        graph.adjacency = edges
            .into_iter()
            .map(|map| {
                let mut neighbors: Vec<(NodeId, f64)> = map.into_iter().collect();
                neighbors.sort_by_key(|&(id, _)| id);
                neighbors
            })
            .collect();
        graph
    }

    fn intern(&mut self, word: &str) -> NodeId {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = self.words.len() as NodeId;
        self.ids.insert(word.to_string(), id);
        self.words.push(word.to_string());
        id
    }

    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn node_id(&self, word: &str) -> Option<NodeId> {
        self.ids.get(word).copied()
    }

    pub fn word(&self, id: NodeId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, f64)] {
        self.adjacency
            .get(id as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> f64 {
        self.neighbors(a)
            .binary_search_by_key(&b, |&(id, _)| id)
            .map_or(0.0, |pos| self.neighbors(a)[pos].1)
    }

    /// Sum of the weights of all edges incident to `id`.
    pub fn degree_weight(&self, id: NodeId) -> f64 {
        self.neighbors(id).iter().map(|&(_, w)| w).sum()
    }

    pub fn is_isolated(&self, id: NodeId) -> bool {
        self.neighbors(id).is_empty()
    }
}

/// Outcome of the score iteration.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    /// Score per node id.
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// False when the iteration cap stopped the loop.
    pub converged: bool,
}

/// TextRank keyword scorer.
#[derive(Debug, Clone, Copy)]
pub struct TextRank<'a> {
    filter: KeywordFilter<'a>,
    /// Co-occurrence window, in candidate tokens (typically 5)
    pub window_size: usize,
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Iteration cap
    pub max_iterations: usize,
    /// Convergence threshold on the largest per-node change
    pub epsilon: f64,
}

impl<'a> TextRank<'a> {
    pub const DEFAULT_WINDOW_SIZE: usize = 5;
    pub const DEFAULT_DAMPING: f64 = 0.85;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
    pub const DEFAULT_EPSILON: f64 = 1e-6;

    pub fn new(filter: KeywordFilter<'a>) -> Self {
        TextRank {
            filter,
            window_size: Self::DEFAULT_WINDOW_SIZE,
            damping: Self::DEFAULT_DAMPING,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builds the co-occurrence graph over `tokens`.
    ///
    /// The window slides over every token; only candidate words become nodes.
    pub fn build_graph(&self, tokens: &[Token]) -> CoOccurrenceGraph {
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        CoOccurrenceGraph::build_with(&words, self.window_size, |w| {
            self.filter.is_candidate(w)
        })
    }

    /// Iterates `s[i] = (1 - d) + d * sum_j w(i, j) / W(j) * s[j]` from all-ones scores.
    ///
    /// Stops once the largest change drops below `epsilon` or after `max_iterations`.
    /// Isolated nodes settle at `1 - d` after the first step.
    pub fn rank(&self, graph: &CoOccurrenceGraph) -> RankOutcome {
        let n = graph.node_count();
        let mut scores = vec![1.0; n];
        if n == 0 {
            return RankOutcome {
                scores,
                iterations: 0,
                converged: true,
            };
        }

        let out_weights: Vec<f64> = (0..n as NodeId).map(|id| graph.degree_weight(id)).collect();
        let base = 1.0 - self.damping;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations && !converged {
            iterations += 1;

            let next: Vec<f64> = (0..n as NodeId)
                .map(|id| {
                    let inflow: f64 = graph
                        .neighbors(id)
                        .iter()
                        .map(|&(j, w)| w / out_weights[j as usize] * scores[j as usize])
                        .sum();
                    base + self.damping * inflow
                })
                .collect();

            let max_delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            scores = next;
            converged = max_delta < self.epsilon;
        }

        debug!(nodes = n, iterations, converged, "TextRank iteration finished");
        RankOutcome {
            scores,
            iterations,
            converged,
        }
    }

    pub fn score(&self, tokens: &[Token], top_k: usize) -> Vec<Keyword> {
        let graph = self.build_graph(tokens);
        let outcome = self.rank(&graph);

        // Node ids follow first appearance, so the stable sort breaks ties by appearance.
        let scored: Vec<(String, f64)> = outcome
            .scores
            .iter()
            .enumerate()
            .filter_map(|(id, &score)| graph.word(id as NodeId).map(|w| (w.to_string(), score)))
            .collect();

        top_k_keywords(scored, top_k)
    }
}
