mod common;

use assert_cmd::Command;

use crate::common::{GROUP_ONE, fasta_file, params_file};

fn estclust() -> Command {
    Command::cargo_bin("estclust").unwrap()
}

fn stderr_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}

#[test]
fn unknown_flag_exits_nonzero() {
    estclust().arg("--no-such-flag").assert().failure();
}

#[test]
fn missing_input_file_exits_nonzero() {
    let assert = estclust()
        .arg("-i")
        .arg("definitely/not/here.fasta")
        .assert()
        .failure();
    assert!(stderr_of(assert).contains("could not open input file"));
}

#[test]
fn missing_explicit_params_file_exits_nonzero() {
    let fasta = fasta_file(&[("a", GROUP_ONE)]);
    let assert = estclust()
        .arg("-i")
        .arg(fasta.path())
        .arg("-p")
        .arg("definitely/not/here.in")
        .assert()
        .failure();
    assert!(stderr_of(assert).contains("could not load parameter file"));
}

#[test]
fn malformed_params_file_exits_nonzero() {
    let fasta = fasta_file(&[("a", GROUP_ONE)]);
    let params = params_file("popsize many\n");
    let assert = estclust()
        .arg("-i")
        .arg(fasta.path())
        .arg("-p")
        .arg(params.path())
        .assert()
        .failure();
    assert!(stderr_of(assert).contains("could not load parameter file"));
}

#[test]
fn zero_load_exits_nonzero() {
    let fasta = fasta_file(&[("a", GROUP_ONE)]);
    let assert = estclust()
        .arg("-i")
        .arg(fasta.path())
        .arg("-l")
        .arg("0")
        .assert()
        .failure();
    assert!(stderr_of(assert).contains("load must be greater than zero"));
}

#[test]
fn help_lists_the_flags() {
    let output = estclust()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    for flag in [
        "--input", "--output", "--params", "--names", "--load", "--size", "--trace", "--stats",
    ] {
        assert!(text.contains(flag), "help is missing {flag}");
    }
}
