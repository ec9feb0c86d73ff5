use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ksat_sweep::{
    config::{defaults, ClauseRange, StepRange, SweepConfig, TableConfig, TraceConfig},
    types::err::ConfigError,
};

/// Measures the Boolean networks built from random k-SAT formulas.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sweep triples of (N, K, M), writing the mean and max of each metric per triple to rotating fixed width tables.
    Sweep(SweepArgs),

    /// Sample a single triple, writing the metrics of every sample to a comma-separated table.
    Trace(TraceArgs),

    /// Write a single random formula in DIMACS form, with its metrics as comments.
    Dimacs(DimacsArgs),
}

/// Options shared by every command.
#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Seed for the source of randomness. If absent, the clock is used.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options for the tables written.
#[derive(clap::Args, Debug)]
pub struct TableArgs {
    /// Directory to write tables to.
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Label prefixed to the name of each table file.
    #[arg(long)]
    pub label: Option<String>,

    /// Width of each metric column.
    #[arg(long, default_value_t = defaults::METRIC_WIDTH)]
    pub metric_width: usize,
}

#[derive(clap::Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub table: TableArgs,

    /// Samples taken for each triple.
    #[arg(short, long, default_value_t = defaults::SAMPLES)]
    pub samples: usize,

    /// Rows written to a file before moving to the next file.
    #[arg(long, default_value_t = defaults::ROTATION)]
    pub rotation: usize,

    /// Width of the N, K, and M columns.
    #[arg(long, default_value_t = defaults::PARAMETER_WIDTH)]
    pub parameter_width: usize,

    /// Least clause length.
    #[arg(long, default_value_t = defaults::K_MIN)]
    pub k_min: u32,

    /// Clause length to stop before.
    #[arg(long, default_value_t = defaults::K_MAX)]
    pub k_max: u32,

    #[arg(long, default_value_t = 1)]
    pub k_step: u32,

    /// Least count of atoms.
    #[arg(long, default_value_t = defaults::N_MIN)]
    pub n_min: u32,

    /// Count of atoms to stop before.
    #[arg(long, default_value_t = defaults::N_MAX)]
    pub n_max: u32,

    /// Count of steps from the least count of atoms to the last.
    #[arg(long, default_value_t = defaults::N_STEPS)]
    pub n_steps: u32,

    /// Least count of clauses, as a multiple of the count of atoms.
    #[arg(long, default_value_t = defaults::M_MIN_RATIO)]
    pub m_min_ratio: u32,

    /// Count of clauses to stop before, as a multiple of the count of atoms.
    #[arg(long, default_value_t = defaults::M_MAX_RATIO)]
    pub m_max_ratio: u32,

    /// Count of steps from the least count of clauses to the last.
    #[arg(long, default_value_t = defaults::M_STEPS)]
    pub m_steps: u32,

    /// A fixed range of clause counts, as `min:max:step`, used for every count of atoms in place of the ratios.
    #[arg(long, value_parser = parse_step_range)]
    pub m_range: Option<StepRange>,
}

#[derive(clap::Args, Debug)]
pub struct TraceArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub table: TableArgs,

    #[arg(short, default_value_t = defaults::TRACE_N)]
    pub n: u32,

    #[arg(short, default_value_t = defaults::TRACE_K)]
    pub k: u32,

    #[arg(short, default_value_t = defaults::TRACE_M)]
    pub m: u32,

    /// Total samples taken.
    #[arg(short, long, default_value_t = defaults::TRACE_SAMPLES)]
    pub samples: usize,

    /// Samples taken between flushes.
    #[arg(short, long, default_value_t = defaults::TRACE_BATCH)]
    pub batch: usize,
}

#[derive(clap::Args, Debug)]
pub struct DimacsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(short)]
    pub n: u32,

    #[arg(short, default_value_t = 3)]
    pub k: u32,

    #[arg(short)]
    pub m: u32,
}

/// Parses `min:max:step` to a range.
fn parse_step_range(s: &str) -> Result<StepRange, String> {
    let parts = s
        .split(':')
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("{e}"))?;

    match parts.as_slice() {
        [min, max, step] => Ok(StepRange::new(*min, *max, *step)),
        _ => Err("a range is written min:max:step".to_string()),
    }
}

impl TableArgs {
    pub fn table_config(&self, rotation: Option<usize>) -> Result<TableConfig, ConfigError> {
        let mut config = TableConfig {
            directory: self.out.clone(),
            label: self.label.clone(),
            metric_width: self.metric_width,
            ..Default::default()
        };

        if let Some(rotation) = rotation {
            config.rotation.set(rotation)?;
        }

        Ok(config)
    }
}

impl SweepArgs {
    pub fn sweep_config(&self) -> Result<SweepConfig, ConfigError> {
        let mut config = SweepConfig::default();

        config.samples.set(self.samples)?;
        config.k = StepRange::new(self.k_min, self.k_max, self.k_step);
        config.n = StepRange::split(self.n_min, self.n_max, self.n_steps);
        config.m = match self.m_range {
            Some(range) => ClauseRange::Fixed(range),
            None => ClauseRange::PerAtom {
                min_ratio: self.m_min_ratio,
                max_ratio: self.m_max_ratio,
                steps: self.m_steps,
            },
        };

        Ok(config)
    }
}

impl TraceArgs {
    pub fn trace_config(&self) -> Result<TraceConfig, ConfigError> {
        let mut config = TraceConfig {
            n: self.n,
            k: self.k,
            m: self.m,
            ..Default::default()
        };

        config.samples.set(self.samples)?;
        config.batch.set(self.batch)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ranges() {
        assert_eq!(parse_step_range("20:80:5"), Ok(StepRange::new(20, 80, 5)));
        assert!(parse_step_range("20:80").is_err());
        assert!(parse_step_range("a:b:c").is_err());
    }

    #[test]
    fn sweep_defaults() {
        let args = Args::parse_from(["ksat_sweep", "sweep", "--samples", "12"]);
        let Command::Sweep(sweep) = args.command else {
            panic!("Expected a sweep");
        };

        let config = sweep.sweep_config().unwrap();
        assert_eq!(config.samples.value, 12);
        assert_eq!(config.n, SweepConfig::default().n);
        assert!(matches!(config.m, ClauseRange::PerAtom { .. }));
    }

    #[test]
    fn default_sweep_is_valid() {
        let args = Args::parse_from(["ksat_sweep", "sweep"]);
        let Command::Sweep(sweep) = args.command else {
            panic!("Expected a sweep");
        };

        let triples = sweep.sweep_config().unwrap().triples().unwrap();
        assert!(!triples.is_empty());
        assert!(triples.iter().all(|t| t.k() <= t.n()));

        let table_config = sweep.table.table_config(Some(sweep.rotation)).unwrap();
        assert_eq!(table_config.rotation.value, defaults::ROTATION);
    }

    #[test]
    fn explicit_clause_lengths_still_fail_fast() {
        let args = Args::parse_from(["ksat_sweep", "sweep", "--k-max", "20", "--n-min", "10"]);
        let Command::Sweep(sweep) = args.command else {
            panic!("Expected a sweep");
        };

        assert!(sweep.sweep_config().unwrap().triples().is_err());
    }

    #[test]
    fn zero_batch() {
        let args = Args::parse_from(["ksat_sweep", "trace", "--batch", "0"]);
        let Command::Trace(trace) = args.command else {
            panic!("Expected a trace");
        };

        assert_eq!(
            trace.trace_config().err(),
            Some(ConfigError::OutOfBounds("batch"))
        );
    }
}
