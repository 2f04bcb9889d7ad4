//! Output formatting for sequences, alignments, and cluster reports.
//!
//! All writers are generic over [`std::io::Write`] and reproduce the
//! classic wire format: `>NAME` headers with FASTA/NICE/RAW bodies,
//! three-line alignment blocks with 6-column indices, and numbered
//! cluster listings followed by the unclustered leftovers.
//!
//! ## Examples
//!
//! ```rust
//! use estclust_core::config::OutputMode;
//! use estclust_core::output::write_sequence;
//! use estclust_core::sequence::Sequence;
//!
//! let seq = Sequence::from_raw("probe", "ACGTACGTACGT");
//! let mut out = Vec::new();
//! write_sequence(&mut out, &seq, OutputMode::Raw, 60)?;
//! assert_eq!(String::from_utf8(out).unwrap(), ">probe\nACGTACGTACGT");
//! # Ok::<(), estclust_core::EstError>(())
//! ```

pub mod alignment;
pub mod clusters;
pub mod sequence;

pub use alignment::write_alignment;
pub use clusters::write_clusters;
pub use sequence::write_sequence;
