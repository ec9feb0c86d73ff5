//! Default values for configuration.
//!
//! Together these describe the default sweep, in which every triple has *k* ≤ *n*.

/// The smallest clause length swept.
pub const K_MIN: u32 = 3;
/// The (excluded) largest clause length swept.
pub const K_MAX: u32 = 15;

/// The smallest count of atoms swept.
///
/// At least the largest clause length swept, so every default triple has *k* ≤ *n*.
pub const N_MIN: u32 = K_MAX - 1;
/// The (excluded) largest count of atoms swept.
pub const N_MAX: u32 = 300;
/// The count of steps between [N_MIN] and [N_MAX].
pub const N_STEPS: u32 = 30;

/// Clauses are swept from `M_MIN_RATIO · n`.
pub const M_MIN_RATIO: u32 = 2;
/// Clauses are swept up to (but excluding) `M_MAX_RATIO · n`.
pub const M_MAX_RATIO: u32 = 8;
/// The count of steps between the least and greatest count of clauses.
pub const M_STEPS: u32 = 50;

/// Samples taken for each triple of a sweep.
pub const SAMPLES: usize = 10_000;

/// Rows written to a table file before the table rotates to a fresh file.
pub const ROTATION: usize = 100;

/// Width of the columns for *n*, *k*, and *m*.
pub const PARAMETER_WIDTH: usize = 10;
/// Width of the columns for aggregated metrics.
pub const METRIC_WIDTH: usize = 17;

/// Parameters of a trace.
pub const TRACE_N: u32 = 20;
pub const TRACE_K: u32 = 3;
pub const TRACE_M: u32 = 60;

/// Samples taken during a trace.
pub const TRACE_SAMPLES: usize = 1_000_000;
/// Samples written between flushes of a trace.
pub const TRACE_BATCH: usize = 10_000;
