//! Alignment pretty-printing: names, score, and three-line blocks.

use std::io::Write;

use crate::alignment::Alignment;
use crate::types::EstError;

/// Writes an alignment as header lines plus `wrap`-column blocks.
///
/// Each block holds the top sequence, the match line, and the bottom
/// sequence, every line prefixed by a right-aligned 6-column 1-based
/// start index and two spaces, with a blank line after the block. A
/// non-significant alignment is still written, preceded by a WARNING
/// line. The caller is expected to have run
/// [`Alignment::tracepath`] first; `wrap == 0` skips the blocks.
///
/// Asking for output of a result that never completed its fill is
/// advisory: an error is printed and nothing is written.
pub fn write_alignment<W: Write>(
    writer: &mut W,
    alignment: &Alignment<'_>,
    wrap: usize,
) -> Result<(), EstError> {
    if !alignment.is_aligned() {
        eprintln!("cannot print an alignment that has not been performed");
        return Ok(());
    }

    if !alignment.significant() {
        writeln!(writer, "WARNING: The alignment is not considered significant.")?;
    }

    writeln!(writer, "Top sequence: {}", alignment.x().name())?;
    writeln!(writer, "Bottom sequence: {}", alignment.y().name())?;
    writeln!(writer, "Score: {}", alignment.score())?;

    if wrap == 0 {
        return Ok(());
    }

    let length = alignment.path_length();
    let mut start = 0;
    while start < length {
        let end = (start + wrap).min(length);
        writeln!(
            writer,
            "{:>6}  {}",
            alignment.x_begin() + start + 1,
            &alignment.top()[start..end]
        )?;
        writeln!(writer, "{:>6}  {}", start + 1, &alignment.align()[start..end])?;
        writeln!(
            writer,
            "{:>6}  {}",
            alignment.y_begin() + start + 1,
            &alignment.bottom()[start..end]
        )?;
        writeln!(writer)?;
        start = end;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{AlignParams, Aligner};
    use crate::sequence::Sequence;

    const SIXTY: &str = "ACGTGGTCAATCGGATCCTAGGCATTCGAAGTCGATCCGGTTAACGGCTATAGCCATGCA";

    fn rendered(x: &Sequence, y: &Sequence, wrap: usize) -> String {
        let aligner = Aligner::new(AlignParams::default());
        let mut alignment = aligner.align(x, y);
        alignment.tracepath().unwrap();
        let mut out = Vec::new();
        write_alignment(&mut out, &alignment, wrap).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn identical_sequences_render_full_blocks() {
        let x = Sequence::from_raw("first", SIXTY);
        let y = Sequence::from_raw("second", SIXTY);
        let text = rendered(&x, &y, 60);
        let expected = format!(
            "Top sequence: first\nBottom sequence: second\nScore: 60\n\
             {:>6}  {SIXTY}\n{:>6}  {}\n{:>6}  {SIXTY}\n\n",
            1,
            1,
            "|".repeat(60),
            1
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn blocks_split_at_the_wrap_width() {
        let x = Sequence::from_raw("x", SIXTY);
        let y = Sequence::from_raw("y", SIXTY);
        let text = rendered(&x, &y, 25);
        // 60 columns wrap into blocks of 25, 25, and 10.
        assert_eq!(text.matches("\n\n").count(), 3);
        assert!(text.contains(&format!("{:>6}  ", 26)));
        assert!(text.contains(&format!("{:>6}  ", 51)));
    }

    #[test]
    fn insignificant_alignment_carries_a_warning() {
        let x = Sequence::from_raw("x", "ACGTACGT");
        let y = Sequence::from_raw("y", "ACGTACGT");
        let text = rendered(&x, &y, 60);
        assert!(text.starts_with("WARNING: The alignment is not considered significant.\n"));
        assert!(text.contains("Score: 8\n"));
    }

    #[test]
    fn zero_wrap_prints_headers_only() {
        let x = Sequence::from_raw("x", SIXTY);
        let y = Sequence::from_raw("y", SIXTY);
        let text = rendered(&x, &y, 0);
        assert!(text.ends_with("Score: 60\n"));
    }

    #[test]
    fn unaligned_result_writes_nothing() {
        let x = Sequence::from_raw("x", "ACGT");
        let empty = Sequence::from_raw("e", "");
        let aligner = Aligner::new(AlignParams::default());
        let alignment = aligner.align(&x, &empty);
        let mut out = Vec::new();
        write_alignment(&mut out, &alignment, 60).unwrap();
        assert!(out.is_empty());
    }
}
