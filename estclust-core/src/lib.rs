//! # estclust: EST clustering by genetic algorithm
//!
//! Clusters Expressed Sequence Tag (EST) DNA sequences by pairwise
//! similarity. A genetic algorithm searches the space of
//! sequence-to-sequence pairings: each genome assigns every sequence a
//! partner, pairs confirmed by local alignment become graph edges, and
//! fitness rewards large connected components. The best genome found
//! yields the final partition into clusters plus unclustered
//! singletons.
//!
//! ## Overview
//!
//! Three subsystems carry the work:
//!
//! - [`alignment`]: Smith-Waterman local alignment over the 15-letter
//!   IUPAC alphabet with fractional match strengths and affine gaps,
//!   with a probe mode that stops as soon as significance is reached.
//! - [`similarity`]: a memoized oracle caching the boolean
//!   "significantly similar" verdict per unordered sequence pair.
//! - [`ga`]: the genetic-algorithm engine and the partner-graph
//!   problem feeding on the oracle.
//!
//! Around them sit the [`sequence`] model and FASTA-style reader, the
//! [`cluster`] extractor, the [`sizing`] predictor that shapes the
//! oracle's hash tables, and the [`output`] writers.
//!
//! ## Quick start
//!
//! ```rust
//! use estclust_core::{ClusterConfig, EstClusterer};
//! use estclust_core::ga::GaParams;
//! use estclust_core::sequence::read_sequences;
//!
//! let fasta = ">a\nACGTGGTCAATCGGATCCTAGGCATTCGAAGTCGATCCGGTTAACGGCTA\n\
//!              >b\nACGTGGTCAATCGGATCCTAGGCATTCGAAGTCGATCCGGTTAACGGCTA\n";
//! let sequences = read_sequences(fasta.as_bytes())?;
//!
//! let params = GaParams {
//!     population_size: 10,
//!     number_of_generations: 5,
//!     p_mutation: 0.1,
//!     random_seed: Some(1),
//!     ..GaParams::default()
//! };
//! let clusterer = EstClusterer::new(ClusterConfig::default());
//! let outcome = clusterer.cluster(&sequences, &params)?;
//! assert_eq!(outcome.clustering.clusters.len(), 1);
//! # Ok::<(), estclust_core::EstError>(())
//! ```

pub mod alignment;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod ga;
pub mod output;
pub mod sequence;
pub mod similarity;
pub mod sizing;
pub mod types;

pub use config::{ClusterConfig, OutputMode};
pub use types::EstError;

use crate::alignment::{AlignParams, Aligner};
use crate::cluster::{Clustering, extract_clusters, partner_graph};
use crate::ga::partner::PartnerProblem;
use crate::ga::{GaParams, GaStatistics, SimpleGa};
use crate::sequence::Sequence;
use crate::similarity::SimilarityOracle;

/// Everything a finished clustering run reports.
#[derive(Debug)]
pub struct ClusterOutcome {
    /// The partition induced by the best genome.
    pub clustering: Clustering,
    /// GA counters and final population scores.
    pub statistics: GaStatistics,
    /// Alignments actually performed by the oracle.
    pub alignments_run: u64,
    /// The sizing predictor's estimate of cached verdict orientations.
    pub expected_alignments: f64,
}

/// One-call driver wiring sizing, oracle, GA, and extraction together.
///
/// The command-line program drives the same pieces step by step to
/// interleave trace reporting; this type is the plain library entry
/// point.
#[derive(Debug, Clone, Default)]
pub struct EstClusterer {
    config: ClusterConfig,
    align_params: AlignParams,
}

impl EstClusterer {
    pub fn new(config: ClusterConfig) -> Self {
        Self {
            config,
            align_params: AlignParams::default(),
        }
    }

    pub fn with_align_params(config: ClusterConfig, align_params: AlignParams) -> Self {
        Self {
            config,
            align_params,
        }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Runs the GA over `sequences` and extracts the best clustering.
    ///
    /// Fewer than two sequences cannot pair, so the run degenerates to
    /// an all-unclustered report without touching the GA.
    ///
    /// # Errors
    ///
    /// [`EstError::InvalidParameter`] if `params` fail validation.
    pub fn cluster(
        &self,
        sequences: &[Sequence],
        params: &GaParams,
    ) -> Result<ClusterOutcome, EstError> {
        let n = sequences.len();
        if n < 2 {
            return Ok(ClusterOutcome {
                clustering: Clustering {
                    clusters: Vec::new(),
                    unclustered: (0..n).collect(),
                },
                statistics: GaStatistics::default(),
                alignments_run: 0,
                expected_alignments: 0.0,
            });
        }

        let expected = sizing::expected_alignments(
            n,
            params.population_size,
            params.number_of_generations,
            params.p_mutation,
        );
        let buckets = sizing::row_bucket_target(
            expected,
            n,
            self.config.hash_load,
            self.config.max_table_size,
        );

        let mut oracle =
            SimilarityOracle::new(sequences, Aligner::new(self.align_params), buckets);

        let (best_genome, statistics) = {
            let mut ga = SimpleGa::new(PartnerProblem::new(&mut oracle), params.clone())?;
            ga.run();
            (ga.best().genome.clone(), ga.statistics())
        };

        let edges = partner_graph(&best_genome, &mut oracle);
        Ok(ClusterOutcome {
            clustering: extract_clusters(&edges),
            statistics,
            alignments_run: oracle.alignments_run(),
            expected_alignments: expected,
        })
    }
}
