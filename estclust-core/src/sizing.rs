//! Closed-form estimate of how many distinct pair alignments a GA run
//! will trigger, used to pre-size the oracle's per-row hash maps.
//!
//! Every gene evaluation requests one pair. The first generation
//! evaluates `popSize · N` genes; later generations re-evaluate only
//! mutated genes, about `pMut · nGen · N · popSize` in total. Each
//! request performs a new alignment with probability
//! `1 − done/(N·(N−1))` where `done` counts orientations already
//! cached, which gives the recurrence iterated below. The result is
//! advisory; correctness never depends on it.

/// Expected number of cached verdict orientations after a full GA run
/// over `n` sequences. Halve it for distinct aligner runs.
pub fn expected_alignments(n: usize, pop_size: usize, n_gen: usize, p_mut: f64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let n = n as f64;
    let evaluations = pop_size as f64 * n + p_mut * n_gen as f64 * n * pop_size as f64;
    let possible = n * (n - 1.0);

    let mut done = 0.0;
    let steps = evaluations.ceil() as u64 + 1;
    for _ in 0..steps {
        done = done + 2.0 - 2.0 * done / possible;
    }
    done
}

/// Bucket target for one row of the similarity cache: the expected
/// per-row entry count scaled by the desired load, clamped to `n` and
/// to `max_size`.
pub fn row_bucket_target(expected: f64, n: usize, load: f64, max_size: usize) -> usize {
    let target = (expected / n as f64 / load).ceil() as usize;
    target.min(n).min(max_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expectation_never_exceeds_all_pairs() {
        let n = 20;
        let expected = expected_alignments(n, 50, 100, 0.1);
        assert!(expected <= (n * (n - 1)) as f64 + 1e-9);
        assert!(expected > 0.0);
    }

    #[test]
    fn tiny_runs_match_hand_computation() {
        // n=3, popSize=1, nGen=0: t = 3, so four recurrence steps over
        // 6 possible orientations: 2, 10/3, 38/9, 130/27.
        let expected = expected_alignments(3, 1, 0, 0.5);
        assert!((expected - 130.0 / 27.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        assert_eq!(expected_alignments(0, 10, 10, 0.1), 0.0);
        assert_eq!(expected_alignments(1, 10, 10, 0.1), 0.0);
    }

    #[test]
    fn bucket_target_is_clamped() {
        assert_eq!(row_bucket_target(1000.0, 10, 0.5, 1000), 10);
        assert_eq!(row_bucket_target(1_000_000.0, 5000, 0.5, 100), 100);
        // 90 / 30 / 0.5 = 6
        assert_eq!(row_bucket_target(90.0, 30, 0.5, 1000), 6);
    }
}
