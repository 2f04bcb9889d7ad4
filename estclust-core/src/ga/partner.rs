//! The partner-graph problem driving EST clustering.
//!
//! Each gene assigns a sequence one partner; fitness rewards large
//! connected components of the confirmed-pair graph, growing
//! geometrically with component size so one big cluster outscores two
//! half-sized ones. Every partner draw funnels through the similarity
//! oracle, so the cache holds a verdict for any pair a genome can name
//! by the time that genome is scored.

use rand::Rng;
use rand::rngs::StdRng;

use crate::cluster::{component_sizes, partner_graph};
use crate::ga::GaProblem;
use crate::similarity::SimilarityOracle;

/// GA hooks over a similarity oracle.
///
/// Needs at least two sequences; a lone sequence has no legal partner.
#[derive(Debug)]
pub struct PartnerProblem<'o, 'seq> {
    oracle: &'o mut SimilarityOracle<'seq>,
}

impl<'o, 'seq> PartnerProblem<'o, 'seq> {
    pub fn new(oracle: &'o mut SimilarityOracle<'seq>) -> Self {
        debug_assert!(oracle.len() >= 2, "partner genomes need two sequences");
        Self { oracle }
    }

    /// Draws a partner for `i`, probing the pair so the verdict lands
    /// in the cache.
    fn draw_partner(&mut self, i: usize, rng: &mut StdRng) -> usize {
        let j = random_partner(i, self.oracle.len(), rng);
        self.oracle.significant(i, j);
        j
    }
}

/// Uniform draw over `[0, n)` excluding `i`, by rejection.
fn random_partner(i: usize, n: usize, rng: &mut StdRng) -> usize {
    loop {
        let j = rng.random_range(0..n);
        if j != i {
            return j;
        }
    }
}

impl GaProblem for PartnerProblem<'_, '_> {
    fn genome_len(&self) -> usize {
        self.oracle.len()
    }

    fn initialize(&mut self, genome: &mut Vec<usize>, rng: &mut StdRng) {
        genome.clear();
        for i in 0..self.oracle.len() {
            let j = self.draw_partner(i, rng);
            genome.push(j);
        }
    }

    fn mutate(&mut self, genome: &mut [usize], rate: f64, rng: &mut StdRng) -> usize {
        let expected = (rate * genome.len() as f64).max(0.0);
        let total = expected.floor() as usize;

        // Below one expected mutation, flip a biased coin for a single
        // one; otherwise perform exactly the expected count.
        if total == 0 {
            if rng.random_bool(expected) {
                let i = rng.random_range(0..genome.len());
                genome[i] = self.draw_partner(i, rng);
                return 1;
            }
            return 0;
        }
        for _ in 0..total {
            let i = rng.random_range(0..genome.len());
            genome[i] = self.draw_partner(i, rng);
        }
        total
    }

    fn repair(&mut self, genome: &mut [usize], rng: &mut StdRng) {
        for i in 0..genome.len() {
            if genome[i] == i {
                genome[i] = self.draw_partner(i, rng);
            }
        }
    }

    fn objective(&mut self, genome: &[usize]) -> f64 {
        let edges = partner_graph(genome, self.oracle);
        component_sizes(&edges)
            .into_iter()
            .map(|size| {
                let k = (size - 1) as f64;
                k * k
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Aligner;
    use crate::sequence::Sequence;
    use rand::SeedableRng;

    const RELATED_A: &str = "ACGTGGTCAATCGGATCCTAGGCATTCGAAGTCGATCCGGTTAACGGCTATAGCCATGCA";
    const RELATED_B: &str = "ACGTGGTCAATCGGATCCTAGGCATTCGAAGTCGATCCGGTTAACGGCTATAGCCATGAA";
    const LONER: &str = "AAAACCCCGGGGTTTTAAAACCCCGGGGTTTTAAAACCCCGGGGTTTTAAAACCCCGGGG";

    fn sequences() -> Vec<Sequence> {
        vec![
            Sequence::from_raw("a", RELATED_A),
            Sequence::from_raw("b", RELATED_B),
            Sequence::from_raw("c", LONER),
        ]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn initializer_avoids_self_partners_and_fills_the_cache() {
        let sequences = sequences();
        let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 4);
        let mut problem = PartnerProblem::new(&mut oracle);
        let mut genome = Vec::new();
        problem.initialize(&mut genome, &mut rng());
        assert_eq!(genome.len(), 3);
        for (i, &j) in genome.iter().enumerate() {
            assert_ne!(i, j);
            assert!(problem.oracle.cached(i, j).is_some());
        }
    }

    #[test]
    fn mutation_count_follows_the_rate() {
        let sequences = sequences();
        let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 4);
        let mut problem = PartnerProblem::new(&mut oracle);
        let mut rng = rng();
        let mut genome = Vec::new();
        problem.initialize(&mut genome, &mut rng);

        // rate 1.0 over three genes mutates exactly three times.
        assert_eq!(problem.mutate(&mut genome, 1.0, &mut rng), 3);
        // rate 0 never mutates.
        assert_eq!(problem.mutate(&mut genome, 0.0, &mut rng), 0);
        // A fractional expectation mutates zero or one time.
        let count = problem.mutate(&mut genome, 0.1, &mut rng);
        assert!(count <= 1);
    }

    #[test]
    fn repair_rewrites_only_self_partners() {
        let sequences = sequences();
        let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 4);
        let mut problem = PartnerProblem::new(&mut oracle);
        let mut genome = vec![0, 2, 0];
        problem.repair(&mut genome, &mut rng());
        assert_ne!(genome[0], 0);
        assert_eq!(genome[1], 2);
        assert_eq!(genome[2], 0);
    }

    #[test]
    fn objective_scores_component_sizes_geometrically() {
        let sequences = vec![
            Sequence::from_raw("a", RELATED_A),
            Sequence::from_raw("b", RELATED_A),
            Sequence::from_raw("c", RELATED_A),
        ];
        let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 4);
        let mut problem = PartnerProblem::new(&mut oracle);
        // All three identical: edges 0-1 and 1-2 make one component of
        // three, scoring (3-1)^2.
        assert_eq!(problem.objective(&[1, 2, 1]), 4.0);
    }

    #[test]
    fn objective_matches_the_oracle_verdicts() {
        let sequences = sequences();
        let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 4);
        let mut problem = PartnerProblem::new(&mut oracle);

        // a and b are near-identical, c relates to nothing: the edge
        // 0-1 scores (2-1)^2 and c stays isolated.
        assert_eq!(problem.objective(&[1, 0, 0]), 1.0);
        // A genome naming only unrelated partners scores zero.
        assert_eq!(problem.objective(&[2, 2, 1]), 0.0);
    }

    #[test]
    fn fitness_ignores_edge_preserving_rewrites() {
        let sequences = vec![
            Sequence::from_raw("a", RELATED_A),
            Sequence::from_raw("b", RELATED_A),
            Sequence::from_raw("c", LONER),
            Sequence::from_raw("d", LONER.replacen("AC", "GT", 3).as_str()),
        ];
        let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 4);
        let mut problem = PartnerProblem::new(&mut oracle);

        // c's partner flips between two equally-unrelated choices; the
        // confirmed edge set is unchanged either way.
        let before = problem.objective(&[1, 0, 0, 0]);
        let after = problem.objective(&[1, 0, 1, 0]);
        assert_eq!(before, after);
    }
}
