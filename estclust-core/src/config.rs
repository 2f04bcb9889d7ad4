//! Configuration for a clustering run.

use crate::constants::{DEFAULT_HASH_LOAD, DEFAULT_MAX_TABLE_SIZE, DEFAULT_WRAP};

/// Print mode for sequence bodies.
///
/// # Formats
///
/// - **Fasta**: wrap-width characters per line, no indices
/// - **Nice**: indexed, space-grouped lines for human reading
/// - **Raw**: the entire body on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain FASTA body lines
    Fasta,
    /// Indexed display with spaced groups of ten
    #[default]
    Nice,
    /// Unwrapped body
    Raw,
}

/// Settings controlling output shape and similarity-cache sizing.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Print mode used when sequences are written out
    pub output_mode: OutputMode,
    /// Nucleotides per output line; 0 prints only the name line
    pub wrap: usize,
    /// Report cluster members by name alone
    pub names_only: bool,
    /// Expected load of the per-row similarity cache tables (> 0)
    pub hash_load: f64,
    /// Upper bound on the per-row similarity cache capacity
    pub max_table_size: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::default(),
            wrap: DEFAULT_WRAP,
            names_only: false,
            hash_load: DEFAULT_HASH_LOAD,
            max_table_size: DEFAULT_MAX_TABLE_SIZE,
        }
    }
}
