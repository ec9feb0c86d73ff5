//! A harness for measuring the structure of random k-SAT formulas.
//!
//! ksat_sweep generates random CNF formulas with exactly *k* distinct atoms per clause, hands each formula to a collaborator which builds some structure from the formula (by default a [Boolean network](crate::network)), and aggregates the scalar metrics returned by the collaborator over large sweeps of parameters.
//!
//! ksat_sweep does not decide satisfiability.
//! The interest is in how the size of the structure built from a formula varies with the number of atoms *n*, the clause length *k*, and the number of clauses *m*.
//!
//! # Orientation
//!
//! A run is made of a handful of parts:
//! - The [generator] produces an [Instance](structures::instance::Instance) from a [triple](structures::instance::InstanceParams) of parameters and a source of randomness.
//! - A [collaborator](metrics::Collaborator) turns an instance into [metrics](metrics::Metrics).
//! - [Accumulators](stats) summarise a stream of metrics in constant space.
//! - [Tables](table) write rows of scalars to disk, rotating through numbered files.
//! - The [driver] ties these together, either as a sweep over many triples or as a trace of raw samples for a single triple.
//!
//! # Examples
//!
//! + Generate an instance and build a network from it.
//!
//! ```rust
//! # use ksat_sweep::generator::generate;
//! # use ksat_sweep::generic::random::MinimalPCG32;
//! # use ksat_sweep::metrics::Collaborator;
//! # use ksat_sweep::network::NetworkBuilder;
//! # use ksat_sweep::structures::instance::InstanceParams;
//! use rand::SeedableRng;
//!
//! let mut rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());
//! let params = InstanceParams::new(20, 3, 60).unwrap();
//!
//! let instance = generate(params, &mut rng).unwrap();
//! assert_eq!(instance.clauses().len(), 60);
//!
//! let mut builder = NetworkBuilder::default();
//! let metrics = builder.measure(&instance).unwrap();
//! assert_eq!(metrics.len(), 2);
//! ```
//!
//! + Summarise a stream.
//!
//! ```rust
//! # use ksat_sweep::stats::{Max, Mean};
//! let mut mean = Mean::default();
//! let mut max = Max::unset();
//!
//! for sample in [2, 4, 6] {
//!     mean.sample(sample as f64);
//!     max.sample(sample);
//! }
//!
//! assert_eq!(mean.value(), 3.0);
//! assert_eq!(max.value(), Some(6));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No log implementation is provided by the library, though the binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
//!
//! For example:
//! - Logs of files opened and closed by tables can be found with `RUST_LOG=table=info …`
//! - Logs of every generated formula can be found with `RUST_LOG=generation=trace …`

#![allow(clippy::single_match)]

pub mod config;
pub mod driver;
pub mod generator;
pub mod generic;
pub mod metrics;
pub mod misc;
pub mod network;
pub mod stats;
pub mod structures;
pub mod table;
pub mod types;
