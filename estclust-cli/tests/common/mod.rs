#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Two unrelated 60-base ESTs plus a repetitive loner; sequences within
/// a group are identical and cluster under any GA outcome that finds
/// their edge.
pub const GROUP_ONE: &str = "ACGTGGTCAATCGGATCCTAGGCATTCGAAGTCGATCCGGTTAACGGCTATAGCCATGCA";
pub const GROUP_TWO: &str = "TTGGCACGATCAGCTAACGTTCAGGACTCTATTGGCCATAGCGTTAACCGATCGGTAGCA";
pub const LONER: &str = "AAAACCCCGGGGTTTTAAAACCCCGGGGTTTTAAAACCCCGGGGTTTTAAAACCCCGGGG";

/// Writes a FASTA file holding the given (name, body) records.
pub fn fasta_file(records: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (name, body) in records {
        writeln!(file, ">{name}").unwrap();
        writeln!(file, "{body}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Writes a GA parameter file with the given contents.
pub fn params_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A small, seeded parameter set that keeps test runs fast and
/// reproducible.
pub fn seeded_params() -> NamedTempFile {
    params_file("popsize 20\nngen 30\npmut 0.2\nseed 5\n")
}
