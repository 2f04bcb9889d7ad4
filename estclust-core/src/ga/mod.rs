//! Generational genetic-algorithm engine.
//!
//! The engine is deliberately generic: selection, crossover, elitism,
//! and the generation loop live here, while everything the problem
//! domain knows (how to seed a genome, how to mutate it, how to score
//! it) enters through the [`GaProblem`] hooks. The partner-graph
//! problem driving EST clustering implements them in
//! [`partner`](crate::ga::partner).
//!
//! ## Examples
//!
//! ```rust,no_run
//! use estclust_core::ga::{GaParams, SimpleGa};
//! use estclust_core::ga::partner::PartnerProblem;
//! use estclust_core::similarity::SimilarityOracle;
//! use estclust_core::alignment::Aligner;
//! # let sequences: Vec<estclust_core::sequence::Sequence> = Vec::new();
//!
//! let mut oracle = SimilarityOracle::new(&sequences, Aligner::default(), 16);
//! let params = GaParams::from_file("gaparam.in".as_ref())?;
//! let mut ga = SimpleGa::new(PartnerProblem::new(&mut oracle), params.clone())?;
//! ga.initialize();
//! for _ in 0..params.number_of_generations {
//!     ga.step();
//! }
//! println!("best fitness: {}", ga.best().fitness);
//! # Ok::<(), estclust_core::EstError>(())
//! ```

pub mod partner;

use std::fs;
use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::EstError;

/// Domain hooks the engine drives.
///
/// Genomes are partner arrays: `genome[i]` names the partner of
/// sequence `i`, and `genome[i] != i` always holds. The hooks own that
/// invariant; the engine only asks for it to be restored after
/// crossover.
pub trait GaProblem {
    /// Number of genes in a genome.
    fn genome_len(&self) -> usize;

    /// Fills a fresh genome in place.
    fn initialize(&mut self, genome: &mut Vec<usize>, rng: &mut StdRng);

    /// Mutates `genome` at the given rate; returns the mutation count.
    fn mutate(&mut self, genome: &mut [usize], rate: f64, rng: &mut StdRng) -> usize;

    /// Restores the genome invariant after crossover.
    fn repair(&mut self, genome: &mut [usize], rng: &mut StdRng);

    /// Scores a genome; higher is fitter, never negative.
    fn objective(&mut self, genome: &[usize]) -> f64;
}

/// GA run parameters, read from a key/value parameter file.
///
/// The file holds one `name value` pair per line; `#` starts a comment.
/// Full key names are `population_size`, `number_of_generations`,
/// `pmutation`, `pcrossover`, `elitism` (0 or 1), and `random_seed`;
/// the short aliases `popsize`, `ngen`, `pmut`, `pcross`, `el`, and
/// `seed` are also accepted. Unrecognized keys are reported to stderr
/// and skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct GaParams {
    pub population_size: usize,
    pub number_of_generations: usize,
    pub p_mutation: f64,
    pub p_crossover: f64,
    pub elitism: bool,
    /// Seed for the random stream; a fixed seed reproduces a run.
    pub random_seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            number_of_generations: 250,
            p_mutation: 0.01,
            p_crossover: 0.9,
            elitism: true,
            random_seed: None,
        }
    }
}

impl GaParams {
    /// Reads parameters from a file.
    ///
    /// # Errors
    ///
    /// [`EstError::IoError`] if the file cannot be read,
    /// [`EstError::InvalidParameter`] for malformed or out-of-range
    /// values.
    pub fn from_file(path: &Path) -> Result<Self, EstError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses parameter text.
    pub fn parse(text: &str) -> Result<Self, EstError> {
        let mut params = Self::default();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let key = fields.next().expect("non-empty line has a first field");
            let value = fields.next().ok_or_else(|| {
                EstError::InvalidParameter(format!("line {}: no value for '{key}'", index + 1))
            })?;

            match key {
                "population_size" | "popsize" => {
                    params.population_size = parse_value(key, value)?;
                }
                "number_of_generations" | "ngen" => {
                    params.number_of_generations = parse_value(key, value)?;
                }
                "pmutation" | "pmut" => params.p_mutation = parse_value(key, value)?,
                "pcrossover" | "pcross" => params.p_crossover = parse_value(key, value)?,
                "elitism" | "el" => params.elitism = parse_value::<u8>(key, value)? != 0,
                "random_seed" | "seed" => params.random_seed = Some(parse_value(key, value)?),
                _ => eprintln!("warning: unrecognized GA parameter '{key}'"),
            }
        }
        params.validate()?;
        Ok(params)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), EstError> {
        if self.population_size == 0 {
            return Err(EstError::InvalidParameter(
                "population_size must be at least 1".into(),
            ));
        }
        if self.p_mutation < 0.0 {
            return Err(EstError::InvalidParameter(
                "pmutation must not be negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.p_crossover) {
            return Err(EstError::InvalidParameter(
                "pcrossover must lie in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, EstError> {
    value
        .parse()
        .map_err(|_| EstError::InvalidParameter(format!("bad value '{value}' for '{key}'")))
}

/// One scored member of the population.
#[derive(Debug, Clone)]
pub struct Individual {
    pub genome: Vec<usize>,
    pub fitness: f64,
}

/// Aggregate counters and scores for a GA run.
#[derive(Debug, Clone, Default)]
pub struct GaStatistics {
    pub generations: usize,
    pub evaluations: u64,
    pub crossovers: u64,
    pub mutations: u64,
    pub initial_best: f64,
    pub best_ever: f64,
    pub current_best: f64,
    pub current_mean: f64,
    pub current_worst: f64,
}

impl GaStatistics {
    /// Writes the statistics as a small report.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), EstError> {
        writeln!(writer, "generations:\t{}", self.generations)?;
        writeln!(writer, "evaluations:\t{}", self.evaluations)?;
        writeln!(writer, "crossovers:\t{}", self.crossovers)?;
        writeln!(writer, "mutations:\t{}", self.mutations)?;
        writeln!(writer, "initial best:\t{}", self.initial_best)?;
        writeln!(writer, "best ever:\t{}", self.best_ever)?;
        writeln!(writer, "final best:\t{}", self.current_best)?;
        writeln!(writer, "final mean:\t{:.4}", self.current_mean)?;
        writeln!(writer, "final worst:\t{}", self.current_worst)?;
        Ok(())
    }
}

/// A simple generational GA: roulette-wheel selection, one-point
/// crossover, hook-driven mutation, optional elitism, best-ever
/// tracking.
#[derive(Debug)]
pub struct SimpleGa<P: GaProblem> {
    problem: P,
    params: GaParams,
    rng: StdRng,
    population: Vec<Individual>,
    best: Option<Individual>,
    generation: usize,
    evaluations: u64,
    crossovers: u64,
    mutations: u64,
    initial_best: f64,
}

impl<P: GaProblem> SimpleGa<P> {
    /// Creates an engine over `problem`.
    ///
    /// # Errors
    ///
    /// [`EstError::InvalidParameter`] if the parameters fail
    /// [`GaParams::validate`].
    pub fn new(problem: P, params: GaParams) -> Result<Self, EstError> {
        params.validate()?;
        let rng = match params.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            problem,
            params,
            rng,
            population: Vec::new(),
            best: None,
            generation: 0,
            evaluations: 0,
            crossovers: 0,
            mutations: 0,
            initial_best: 0.0,
        })
    }

    /// Builds and scores the initial population.
    pub fn initialize(&mut self) {
        self.population.clear();
        self.generation = 0;
        for _ in 0..self.params.population_size {
            let mut genome = Vec::with_capacity(self.problem.genome_len());
            self.problem.initialize(&mut genome, &mut self.rng);
            let fitness = self.problem.objective(&genome);
            self.evaluations += 1;
            self.population.push(Individual { genome, fitness });
        }
        self.record_best();
        self.initial_best = self.best.as_ref().map_or(0.0, |b| b.fitness);
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        let size = self.population.len();
        let mut next = Vec::with_capacity(size);

        while next.len() < size {
            let mother = self.select().genome.clone();
            let father = self.select().genome.clone();

            let children = if self.rng.random_bool(self.params.p_crossover) {
                self.crossovers += 1;
                let (a, b) = one_point_crossover(&mother, &father, &mut self.rng);
                [a, b]
            } else {
                [mother, father]
            };

            for mut genome in children {
                if next.len() == size {
                    break;
                }
                self.problem.repair(&mut genome, &mut self.rng);
                self.mutations +=
                    self.problem
                        .mutate(&mut genome, self.params.p_mutation, &mut self.rng)
                        as u64;
                let fitness = self.problem.objective(&genome);
                self.evaluations += 1;
                next.push(Individual { genome, fitness });
            }
        }

        if self.params.elitism {
            if let Some(best) = &self.best {
                let strongest = next
                    .iter()
                    .map(|ind| ind.fitness)
                    .fold(f64::NEG_INFINITY, f64::max);
                if best.fitness > strongest {
                    let weakest = next
                        .iter()
                        .enumerate()
                        .min_by(|(_, a), (_, b)| a.fitness.total_cmp(&b.fitness))
                        .map(|(i, _)| i)
                        .expect("population is never empty");
                    next[weakest] = best.clone();
                }
            }
        }

        self.population = next;
        self.generation += 1;
        self.record_best();
    }

    /// Runs the configured number of generations from scratch.
    pub fn run(&mut self) {
        self.initialize();
        for _ in 0..self.params.number_of_generations {
            self.step();
        }
    }

    /// The best individual seen so far.
    ///
    /// # Panics
    ///
    /// Panics if called before [`SimpleGa::initialize`].
    pub fn best(&self) -> &Individual {
        self.best.as_ref().expect("GA has not been initialized")
    }

    /// Completed generation count.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    /// Snapshot of the run counters and current population scores.
    pub fn statistics(&self) -> GaStatistics {
        let fitnesses: Vec<f64> = self.population.iter().map(|ind| ind.fitness).collect();
        let count = fitnesses.len().max(1) as f64;
        let sum: f64 = fitnesses.iter().sum();
        let worst = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        GaStatistics {
            generations: self.generation,
            evaluations: self.evaluations,
            crossovers: self.crossovers,
            mutations: self.mutations,
            initial_best: self.initial_best,
            best_ever: self.best.as_ref().map_or(0.0, |b| b.fitness),
            current_best: fitnesses.iter().copied().fold(0.0, f64::max),
            current_mean: sum / count,
            current_worst: if worst.is_finite() { worst } else { 0.0 },
        }
    }

    /// Roulette-wheel pick, degrading to a uniform pick while every
    /// fitness is zero.
    fn select(&mut self) -> &Individual {
        let total: f64 = self.population.iter().map(|ind| ind.fitness).sum();
        if total <= 0.0 {
            let index = self.rng.random_range(0..self.population.len());
            return &self.population[index];
        }
        let mut spin = self.rng.random_range(0.0..total);
        for individual in &self.population {
            if spin < individual.fitness {
                return individual;
            }
            spin -= individual.fitness;
        }
        self.population.last().expect("population is never empty")
    }

    fn record_best(&mut self) {
        if let Some(candidate) = self
            .population
            .iter()
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
        {
            let improved = self
                .best
                .as_ref()
                .is_none_or(|best| candidate.fitness > best.fitness);
            if improved {
                self.best = Some(candidate.clone());
            }
        }
    }
}

/// Classic one-point crossover over two equal-length genomes.
fn one_point_crossover(
    mother: &[usize],
    father: &[usize],
    rng: &mut StdRng,
) -> (Vec<usize>, Vec<usize>) {
    let cut = rng.random_range(1..mother.len());
    let mut first = mother[..cut].to_vec();
    first.extend_from_slice(&father[cut..]);
    let mut second = father[..cut].to_vec();
    second.extend_from_slice(&mother[cut..]);
    (first, second)
}
