//! Shared constants for alignment scoring, output formatting, and cache
//! sizing. The alignment defaults allow a 5% mismatch rate over the
//! significance length (see [`crate::alignment::AlignParams`]).

/// Number of symbols in the extended IUPAC nucleotide alphabet
pub const ALPHABET_SIZE: usize = 15;

/// Number of ASCII codes covered by the character validation table
pub const ASCII_TABLE_SIZE: usize = 128;

/// Characters per spaced group when printing sequences in NICE mode
pub const NICE_GROUP: usize = 10;

/// Default line wrap for sequence and alignment output
pub const DEFAULT_WRAP: usize = 60;

/// Default reward for a full-strength nucleotide match
pub const DEFAULT_MATCH: f64 = 1.0;

/// Default penalty for a mismatch
pub const DEFAULT_MISMATCH: f64 = -2.0;

/// Default penalty for opening a gap
pub const DEFAULT_GAP_OPEN: f64 = -6.0;

/// Default penalty for extending an existing gap
pub const DEFAULT_GAP_EXTEND: f64 = -0.2;

/// Default minimal length of an aligned region considered significant
pub const DEFAULT_SIGNIFICANCE: usize = 40;

/// Default expected load of the per-row similarity cache tables
pub const DEFAULT_HASH_LOAD: f64 = 0.5;

/// Default upper bound on the per-row similarity cache capacity
pub const DEFAULT_MAX_TABLE_SIZE: usize = 1000;

/// Default name of the GA parameter file
pub const DEFAULT_PARAM_FILE: &str = "gaparam.in";
