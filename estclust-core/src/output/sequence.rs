//! Sequence body formatting in the three print modes.

use std::io::Write;

use crate::config::OutputMode;
use crate::constants::NICE_GROUP;
use crate::sequence::Sequence;
use crate::types::EstError;

/// Writes `>NAME` and the sequence body in the requested mode.
///
/// `wrap` is the number of nucleotides per line; 0 writes only the name
/// line. NICE mode prefixes each line with a right-aligned 6-column
/// 1-based start index and spaces every [`NICE_GROUP`] characters
/// within a line; it ends with a newline. FASTA and RAW bodies carry no
/// trailing newline.
pub fn write_sequence<W: Write>(
    writer: &mut W,
    seq: &Sequence,
    mode: OutputMode,
    wrap: usize,
) -> Result<(), EstError> {
    let mut text = format!(">{}", seq.name());

    if wrap == 0 {
        text.push('\n');
        writer.write_all(text.as_bytes())?;
        return Ok(());
    }

    match mode {
        OutputMode::Nice => {
            for i in 0..seq.len() {
                if i % wrap == 0 {
                    text.push('\n');
                    text.push_str(&format!("{:>6} ", i + 1));
                } else if i % NICE_GROUP == 0 {
                    text.push(' ');
                }
                text.push(seq.letter(i));
            }
            text.push('\n');
        }
        OutputMode::Fasta => {
            for i in 0..seq.len() {
                if i % wrap == 0 {
                    text.push('\n');
                }
                text.push(seq.letter(i));
            }
        }
        OutputMode::Raw => {
            text.push('\n');
            for i in 0..seq.len() {
                text.push(seq.letter(i));
            }
        }
    }

    writer.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(seq: &Sequence, mode: OutputMode, wrap: usize) -> String {
        let mut out = Vec::new();
        write_sequence(&mut out, seq, mode, wrap).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fasta_wraps_without_indices() {
        let seq = Sequence::from_raw("s", "ACGTACGTAC");
        assert_eq!(rendered(&seq, OutputMode::Fasta, 4), ">s\nACGT\nACGT\nAC");
    }

    #[test]
    fn raw_emits_one_unwrapped_line() {
        let seq = Sequence::from_raw("s", "ACGTACGTAC");
        assert_eq!(rendered(&seq, OutputMode::Raw, 4), ">s\nACGTACGTAC");
    }

    #[test]
    fn nice_indexes_lines_and_groups_of_ten() {
        let seq = Sequence::from_raw("s", &"ACGTACGTACGTACG".repeat(2));
        assert_eq!(
            rendered(&seq, OutputMode::Nice, 20),
            ">s\n     1 ACGTACGTAC GTACGACGTA\n    21 CGTACGTACG\n"
        );
    }

    #[test]
    fn nice_first_index_is_one_based() {
        let seq = Sequence::from_raw("s", "ACGT");
        let text = rendered(&seq, OutputMode::Nice, 60);
        assert!(text.starts_with(">s\n     1 ACGT"));
    }

    #[test]
    fn zero_wrap_prints_only_the_name() {
        let seq = Sequence::from_raw("s", "ACGTACGT");
        for mode in [OutputMode::Fasta, OutputMode::Nice, OutputMode::Raw] {
            assert_eq!(rendered(&seq, mode, 0), ">s\n");
        }
    }

    #[test]
    fn empty_sequence_prints_header_alone() {
        let seq = Sequence::from_raw("s", "");
        assert_eq!(rendered(&seq, OutputMode::Fasta, 60), ">s");
        assert_eq!(rendered(&seq, OutputMode::Nice, 60), ">s\n");
    }
}
