//! Trace-statistics reporting for a clustering run.
//!
//! The trace file records the run shape (sequence count, GA
//! parameters), the sizing predictor's estimates, one row per
//! generation with elapsed time and that generation's best score, and a
//! final summary with the number of alignments actually performed.

use std::io::{self, Write};
use std::time::Duration;

use estclust_core::ga::GaParams;

/// Writes trace statistics to any writer.
pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Run shape: sequence count and the GA parameters in use.
    pub fn header(&mut self, n: usize, params: &GaParams) -> io::Result<()> {
        writeln!(self.out, "Number of sequences:\t\t{n}")?;
        writeln!(self.out, "Population size:\t\t{}", params.population_size)?;
        writeln!(
            self.out,
            "Number of generations:\t\t{}",
            params.number_of_generations
        )?;
        writeln!(self.out, "Mutation rate:\t\t\t{}", params.p_mutation)?;
        writeln!(self.out)
    }

    /// Sizing predictor results: distinct alignments expected and the
    /// per-row bucket target derived from them.
    pub fn sizing(&mut self, expected_orientations: f64, buckets: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "Expected number of dynamic programming alignments: {}",
            expected_orientations / 2.0
        )?;
        writeln!(self.out, "Calculated tablesize: {buckets}")?;
        writeln!(self.out)
    }

    /// Opens the per-generation table.
    pub fn begin_generations(&mut self) -> io::Result<()> {
        writeln!(self.out, "Starting GA...")?;
        writeln!(self.out)?;
        writeln!(self.out, "Generation:\tTime:\t\tBest Score:")?;
        writeln!(self.out)
    }

    /// One row per generation: index, elapsed time, and the best score
    /// in that generation's population.
    pub fn generation(&mut self, index: usize, elapsed: Duration, best: f64) -> io::Result<()> {
        writeln!(
            self.out,
            "{index}\t\t{}\t\t{best}",
            format_duration(elapsed)
        )
    }

    /// Closing summary after the last generation.
    pub fn summary(&mut self, alignments_run: u64, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Alignments performed: {alignments_run}")?;
        writeln!(self.out, "Total time: {}", format_duration(elapsed))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Renders a duration as hours/minutes/seconds, omitting zero leading
/// parts; a sub-second duration renders as `0s`.
pub fn format_duration(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut text = String::new();
    if hours > 0 {
        text.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        text.push_str(&format!("{minutes}min"));
    }
    if seconds > 0 || text.is_empty() {
        text.push_str(&format!("{seconds}s"));
    }
    text
}
