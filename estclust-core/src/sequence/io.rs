//! FASTA-style sequence input.
//!
//! The accepted format is slightly looser than strict FASTA:
//!
//! - anything before the first `>` is skipped;
//! - a record's name runs from the character after `>` to the next
//!   newline, *unless* the following line also begins with `>`; that
//!   `>` is read as a space and the name continues across lines;
//! - body bytes follow until end of stream or a line beginning with
//!   `>`; they are uppercased, and characters outside the IUPAC
//!   alphabet (newlines included) are discarded.

use std::io::Read;

use crate::sequence::{Nucleotide, Sequence};
use crate::types::EstError;

/// Reads every sequence record from `input`.
///
/// # Errors
///
/// Returns [`EstError::IoError`] if the underlying reader fails; the
/// record grammar itself cannot fail, malformed bytes are dropped.
pub fn read_sequences<R: Read>(mut input: R) -> Result<Vec<Sequence>, EstError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let mut sequences = Vec::new();
    let mut pos = 0;

    loop {
        // Skip to the next record marker.
        match bytes[pos..].iter().position(|&b| b == b'>') {
            Some(offset) => pos += offset + 1,
            None => break,
        }

        // Name, possibly continued across '>'-prefixed lines.
        let mut name = Vec::new();
        while pos < bytes.len() {
            let b = bytes[pos];
            if b == b'\n' {
                if bytes.get(pos + 1) == Some(&b'>') {
                    name.push(b' ');
                    pos += 2;
                    continue;
                }
                pos += 1;
                break;
            }
            name.push(b);
            pos += 1;
        }

        // Body, up to the next record or end of stream.
        let mut data = Vec::new();
        while pos < bytes.len() {
            let b = bytes[pos];
            if b == b'\n' {
                if bytes.get(pos + 1) == Some(&b'>') {
                    pos += 1;
                    break;
                }
                pos += 1;
                continue;
            }
            if let Some(n) = Nucleotide::from_ascii(b) {
                data.push(n);
            }
            pos += 1;
        }

        let name = String::from_utf8_lossy(&name).into_owned();
        sequences.push(Sequence::from_parts(name, data));
    }

    Ok(sequences)
}
