/*!
Configuration of sweeps, traces, and tables.

All configuration is fixed before a run begins, and is validated before any sample is taken.
In particular, every triple of a sweep is built (and so checked) by [SweepConfig::triples] before the first instance is generated.

```rust
# use ksat_sweep::config::{ClauseRange, StepRange, SweepConfig};
let mut config = SweepConfig::default();
config.k = StepRange::new(3, 5, 1);
config.n = StepRange::new(10, 30, 10);
config.m = ClauseRange::PerAtom { min_ratio: 2, max_ratio: 4, steps: 2 };

let triples = config.triples().unwrap();
let as_tuples = triples.iter().map(|t| (t.k(), t.n(), t.m())).collect::<Vec<_>>();

assert_eq!(
    as_tuples,
    vec![
        (3, 10, 20), (3, 10, 30), (3, 20, 40), (3, 20, 60),
        (4, 10, 20), (4, 10, 30), (4, 20, 40), (4, 20, 60),
    ]
);
```
*/

use std::path::PathBuf;

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use crate::{
    structures::instance::InstanceParams,
    types::err::{self, ConfigError, ParameterError},
};

/// A half-open range `[min, max)` taken in steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl StepRange {
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        StepRange { min, max, step }
    }

    /// The range from `min` to `max` in (roughly) `steps` steps.
    ///
    /// The step is `(max - min) / steps`, though never less than one.
    pub fn split(min: u32, max: u32, steps: u32) -> Self {
        let step = match steps {
            0 => 0,
            _ => (max.saturating_sub(min) / steps).max(1),
        };
        StepRange { min, max, step }
    }

    /// Ensures the range may be iterated and is nonempty.
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep(name));
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange(name));
        }
        Ok(())
    }

    /// An iterator over the elements of the range.
    ///
    /// The range should be [validated](StepRange::validate) first, as an iterator over a range with a zero step is empty.
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        let end = match self.step {
            0 => self.min,
            _ => self.max,
        };
        (self.min..end).step_by(self.step.max(1) as usize)
    }
}

/// The range of clauses to sweep, which may depend on the count of atoms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseRange {
    /// The same range for every count of atoms.
    Fixed(StepRange),

    /// For *n* atoms, from `min_ratio · n` to `max_ratio · n` in `steps` steps.
    PerAtom {
        min_ratio: u32,
        max_ratio: u32,
        steps: u32,
    },
}

impl ClauseRange {
    /// The range of clauses for some count of atoms.
    pub fn for_atoms(&self, n: u32) -> StepRange {
        match self {
            Self::Fixed(range) => *range,
            Self::PerAtom {
                min_ratio,
                max_ratio,
                steps,
            } => StepRange::split(
                min_ratio.saturating_mul(n),
                max_ratio.saturating_mul(n),
                *steps,
            ),
        }
    }
}

/// The configuration of a sweep.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// The range of clause lengths, the outermost loop of a sweep.
    pub k: StepRange,

    /// The range of atom counts.
    pub n: StepRange,

    /// The range of clause counts, the innermost loop of a sweep.
    pub m: ClauseRange,

    /// The count of samples taken for each triple.
    pub samples: ConfigOption<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            k: StepRange::new(defaults::K_MIN, defaults::K_MAX, 1),
            n: StepRange::split(defaults::N_MIN, defaults::N_MAX, defaults::N_STEPS),
            m: ClauseRange::PerAtom {
                min_ratio: defaults::M_MIN_RATIO,
                max_ratio: defaults::M_MAX_RATIO,
                steps: defaults::M_STEPS,
            },
            samples: ConfigOption {
                name: "samples",
                min: 1,
                max: usize::MAX,
                value: defaults::SAMPLES,
            },
        }
    }
}

impl SweepConfig {
    /// Every triple of the sweep, in the order they are to be sampled.
    ///
    /// Fails if any range is empty or has a zero step, if the sample count is out of bounds, or if any triple fails to describe an instance (e.g. *k* > *n*).
    pub fn triples(&self) -> Result<Vec<InstanceParams>, err::ErrorKind> {
        self.samples.validate()?;
        self.k.validate("K")?;
        self.n.validate("N")?;

        let mut triples = Vec::default();

        for k in self.k.iter() {
            for n in self.n.iter() {
                let m_range = self.m.for_atoms(n);
                m_range.validate("M")?;

                for m in m_range.iter() {
                    triples.push(InstanceParams::new(n, k, m)?);
                }
            }
        }

        Ok(triples)
    }
}

/// The configuration of a trace.
#[derive(Clone, Debug)]
pub struct TraceConfig {
    pub n: u32,
    pub k: u32,
    pub m: u32,

    /// The total count of samples taken.
    pub samples: ConfigOption<usize>,

    /// The count of samples taken between flushes of the table.
    pub batch: ConfigOption<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            n: defaults::TRACE_N,
            k: defaults::TRACE_K,
            m: defaults::TRACE_M,
            samples: ConfigOption {
                name: "samples",
                min: 1,
                max: usize::MAX,
                value: defaults::TRACE_SAMPLES,
            },
            batch: ConfigOption {
                name: "batch",
                min: 1,
                max: usize::MAX,
                value: defaults::TRACE_BATCH,
            },
        }
    }
}

impl TraceConfig {
    /// The triple of the trace.
    pub fn params(&self) -> Result<InstanceParams, ParameterError> {
        InstanceParams::new(self.n, self.k, self.m)
    }

    /// Ensures the sample and batch counts are within bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.samples.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

/// The configuration of a table.
#[derive(Clone, Debug)]
pub struct TableConfig {
    /// The directory to which table files are written.
    pub directory: PathBuf,

    /// An optional label, prefixed to the name of each table file.
    pub label: Option<String>,

    /// The count of rows written to a file before moving to a fresh file.
    pub rotation: ConfigOption<usize>,

    /// The width of each column for a parameter.
    pub parameter_width: usize,

    /// The width of each column for a metric.
    pub metric_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            directory: PathBuf::from("."),
            label: None,
            rotation: ConfigOption {
                name: "rotation",
                min: 1,
                max: usize::MAX,
                value: defaults::ROTATION,
            },
            parameter_width: defaults::PARAMETER_WIDTH,
            metric_width: defaults::METRIC_WIDTH,
        }
    }
}
