//! Memoized pairwise-similarity verdicts.
//!
//! Alignment is the expensive operation in a clustering run, so the
//! boolean "significantly similar" verdict for each unordered sequence
//! pair is computed at most once and cached under both orientations.
//! The cache is a vector of per-row hash maps: row `i` holds the
//! verdicts for the partners of sequence `i` that have actually been
//! requested, which keeps space far below the dense N×N table.

use std::collections::HashMap;

use crate::alignment::Aligner;
use crate::sequence::Sequence;

/// Lazy, memoized oracle answering `significant(i, j)` over sequence
/// indices.
///
/// Entries are only ever added, never removed or changed, and
/// `cache[i][j] == cache[j][i]` whenever either is present.
#[derive(Debug)]
pub struct SimilarityOracle<'a> {
    sequences: &'a [Sequence],
    aligner: Aligner,
    cache: Vec<HashMap<usize, bool>>,
    alignments_run: u64,
}

impl<'a> SimilarityOracle<'a> {
    /// Creates an oracle over `sequences`.
    ///
    /// `row_capacity` pre-reserves each per-row map (see
    /// [`crate::sizing`]); it is a speed hint with no effect on results.
    pub fn new(sequences: &'a [Sequence], aligner: Aligner, row_capacity: usize) -> Self {
        let cache = (0..sequences.len())
            .map(|_| HashMap::with_capacity(row_capacity))
            .collect();
        Self {
            sequences,
            aligner,
            cache,
            alignments_run: 0,
        }
    }

    /// Number of sequences the oracle spans.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The sequences the oracle answers over.
    pub fn sequences(&self) -> &'a [Sequence] {
        self.sequences
    }

    /// Whether sequences `i` and `j` are significantly similar,
    /// aligning them if the verdict is not yet cached.
    pub fn significant(&mut self, i: usize, j: usize) -> bool {
        if let Some(&verdict) = self.cache[i].get(&j) {
            return verdict;
        }
        let verdict = self
            .aligner
            .probe(&self.sequences[i], &self.sequences[j]);
        self.alignments_run += 1;
        self.cache[i].insert(j, verdict);
        self.cache[j].insert(i, verdict);
        verdict
    }

    /// The cached verdict for `(i, j)`, if any, without aligning.
    pub fn cached(&self, i: usize, j: usize) -> Option<bool> {
        self.cache[i].get(&j).copied()
    }

    /// Number of alignments actually performed so far.
    pub fn alignments_run(&self) -> u64 {
        self.alignments_run
    }
}
