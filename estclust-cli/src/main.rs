//! # estclust: command-line EST clustering
//!
//! Reads sequences in FASTA format, clusters them by similarity with a
//! genetic algorithm, and prints the clusters.
//!
//! ## Usage
//!
//! ```bash
//! # Cluster a FASTA file, reporting member names only
//! estclust -i ests.fasta -n -o clusters.out
//!
//! # Read from stdin, GA parameters from a custom file
//! estclust -p tuned.in < ests.fasta
//!
//! # Record trace statistics and GA statistics
//! estclust -i ests.fasta -t run.trace --stats run.stats
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: input FASTA file (default: stdin)
//! - `-o, --output <FILE>`: output file (default: stdout)
//! - `-p, --params <FILE>`: GA parameter file (default: `gaparam.in`)
//! - `-n, --names`: report cluster members by name only
//! - `-l, --load <FLOAT>`: expected load of the similarity cache tables
//! - `-s, --size <INT>`: maximum size of the similarity cache tables
//! - `-t, --trace [FILE]`: write trace statistics (default file:
//!   `gaesttrace.out`)
//! - `--stats <FILE>`: write GA statistics to FILE
//! - `-q, --quiet`: suppress progress messages

mod trace;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};

use estclust_core::alignment::Aligner;
use estclust_core::cluster::{Clustering, extract_clusters, partner_graph};
use estclust_core::constants::DEFAULT_PARAM_FILE;
use estclust_core::ga::partner::PartnerProblem;
use estclust_core::ga::{GaParams, GaStatistics, SimpleGa};
use estclust_core::output::write_clusters;
use estclust_core::sequence::read_sequences;
use estclust_core::similarity::SimilarityOracle;
use estclust_core::{ClusterConfig, sizing};

use crate::trace::TraceWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("estclust")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clusters EST sequences by similarity using a genetic algorithm")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("params")
                .short('p')
                .long("params")
                .value_name("FILE")
                .help("GA parameter file (default: gaparam.in)"),
        )
        .arg(
            Arg::new("names")
                .short('n')
                .long("names")
                .action(ArgAction::SetTrue)
                .help("Report cluster members by name only"),
        )
        .arg(
            Arg::new("load")
                .short('l')
                .long("load")
                .value_name("FLOAT")
                .help("Expected load of the similarity cache tables (> 0)"),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("INT")
                .help("Maximum size of the similarity cache tables"),
        )
        .arg(
            Arg::new("trace")
                .short('t')
                .long("trace")
                .value_name("FILE")
                .num_args(0..=1)
                .default_missing_value("gaesttrace.out")
                .help("Write trace statistics to FILE"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .value_name("FILE")
                .help("Write GA statistics to FILE"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress messages"),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");

    let mut config = ClusterConfig {
        names_only: matches.get_flag("names"),
        ..ClusterConfig::default()
    };
    if let Some(load) = matches.get_one::<String>("load") {
        let load: f64 = load
            .parse()
            .map_err(|_| format!("invalid load value '{load}'"))?;
        if load <= 0.0 {
            return Err("load must be greater than zero".into());
        }
        config.hash_load = load;
    }
    if let Some(size) = matches.get_one::<String>("size") {
        config.max_table_size = size
            .parse()
            .map_err(|_| format!("invalid table size '{size}'"))?;
    }

    let sequences = match matches.get_one::<String>("input") {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("could not open input file '{path}': {e}"))?;
            read_sequences(BufReader::new(file))?
        }
        None => read_sequences(io::stdin().lock())?,
    };
    if !quiet {
        eprintln!("Read {} sequences.", sequences.len());
    }

    let params = match matches.get_one::<String>("params") {
        Some(path) => GaParams::from_file(Path::new(path))
            .map_err(|e| format!("could not load parameter file '{path}': {e}"))?,
        None => {
            let default = Path::new(DEFAULT_PARAM_FILE);
            if default.exists() {
                GaParams::from_file(default)?
            } else {
                if !quiet {
                    eprintln!(
                        "No parameter file '{DEFAULT_PARAM_FILE}' found, using GA defaults."
                    );
                }
                GaParams::default()
            }
        }
    };

    let mut trace = match matches.get_one::<String>("trace") {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("could not open trace file '{path}': {e}"))?;
            Some(TraceWriter::new(BufWriter::new(file)))
        }
        None => None,
    };
    if let Some(t) = trace.as_mut() {
        t.header(sequences.len(), &params)?;
    }

    let (clustering, statistics) = run(&sequences, &params, &config, trace.as_mut(), quiet)?;
    if let Some(t) = trace.as_mut() {
        t.flush()?;
    }

    if let Some(path) = matches.get_one::<String>("stats") {
        let file = File::create(path)
            .map_err(|e| format!("could not open statistics file '{path}': {e}"))?;
        let mut stats_writer = BufWriter::new(file);
        statistics.write(&mut stats_writer)?;
        stats_writer.flush()?;
    }

    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("could not open output file '{path}': {e}"))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };
    write_clusters(&mut writer, &clustering, &sequences, &config)?;
    writer.flush()?;

    if !quiet {
        eprintln!(
            "Clustered {} sequences into {} clusters ({} unclustered).",
            sequences.len(),
            clustering.clusters.len(),
            clustering.unclustered.len()
        );
    }

    Ok(())
}

/// Runs sizing, the GA generation loop, and cluster extraction,
/// reporting each generation to the trace writer.
fn run<W: Write>(
    sequences: &[estclust_core::sequence::Sequence],
    params: &GaParams,
    config: &ClusterConfig,
    mut trace: Option<&mut TraceWriter<W>>,
    quiet: bool,
) -> Result<(Clustering, GaStatistics), Box<dyn std::error::Error>> {
    let n = sequences.len();

    // A lone sequence has no legal partner; skip the GA outright.
    if n < 2 {
        return Ok((
            Clustering {
                clusters: Vec::new(),
                unclustered: (0..n).collect(),
            },
            GaStatistics::default(),
        ));
    }

    let expected = sizing::expected_alignments(
        n,
        params.population_size,
        params.number_of_generations,
        params.p_mutation,
    );
    let buckets = sizing::row_bucket_target(expected, n, config.hash_load, config.max_table_size);
    if let Some(t) = trace.as_mut() {
        t.sizing(expected, buckets)?;
    }

    let mut oracle = SimilarityOracle::new(sequences, Aligner::default(), buckets);
    let start = Instant::now();

    let (best_genome, statistics) = {
        let mut ga = SimpleGa::new(PartnerProblem::new(&mut oracle), params.clone())?;
        ga.initialize();
        if let Some(t) = trace.as_mut() {
            t.begin_generations()?;
        }
        for generation in 0..params.number_of_generations {
            if let Some(t) = trace.as_mut() {
                t.generation(generation, start.elapsed(), ga.statistics().current_best)?;
            }
            ga.step();
        }
        (ga.best().genome.clone(), ga.statistics())
    };

    if let Some(t) = trace.as_mut() {
        t.summary(oracle.alignments_run(), start.elapsed())?;
    }
    if !quiet {
        eprintln!(
            "GA finished: best fitness {} after {} generations, {} alignments.",
            statistics.best_ever,
            statistics.generations,
            oracle.alignments_run()
        );
    }

    let edges = partner_graph(&best_genome, &mut oracle);
    Ok((extract_clusters(&edges), statistics))
}
