#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;
use rand::SeedableRng;

use ksat_sweep::{
    driver::{Dispatch, Driver},
    generic::random::{seed_from_clock, MinimalPCG32},
    metrics::Collaborator,
    network::NetworkBuilder,
    structures::instance::InstanceParams,
    table::{DelimitedTable, FixedWidthTable},
    types::err::ErrorKind,
};

mod args;
mod progress;

use args::{Args, Command, CommonArgs, DimacsArgs, SweepArgs, TraceArgs};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let outcome = match args.command {
        Command::Sweep(sweep_args) => sweep(sweep_args),
        Command::Trace(trace_args) => trace(trace_args),
        Command::Dimacs(dimacs_args) => dimacs(dimacs_args),
    };

    if let Err(e) = outcome {
        println!("c {e}");
        std::process::exit(1);
    }
}

/// The source of randomness for a run, noting the seed so the run may be repeated.
fn rng_from_args(common: &CommonArgs) -> MinimalPCG32 {
    let (seed, rng) = match common.seed {
        Some(seed) => (seed, MinimalPCG32::from_seed(seed.to_le_bytes())),
        None => seed_from_clock(),
    };
    println!("c Seed: {seed}");
    rng
}

fn sweep(args: SweepArgs) -> Result<(), ErrorKind> {
    let config = args.sweep_config()?;
    let table_config = args.table.table_config(Some(args.rotation))?;

    let rng = rng_from_args(&args.common);
    let mut driver = Driver::new(NetworkBuilder::default(), rng).with_dispatcher(|dispatch| {
        if let Dispatch::Triple {
            params,
            index,
            total,
        } = dispatch
        {
            println!("c [{}/{total}] {params}", index + 1);
        }
    });

    let columns = driver.sweep_columns(args.parameter_width, table_config.metric_width);
    let mut table = FixedWidthTable::from_config(&table_config, columns)?;

    println!("c Writing tables to {:?}", table_config.directory);
    let summary = driver.sweep(&config, &mut table)?;

    println!(
        "c Swept {} triples with {} samples to {} files",
        summary.triples,
        summary.samples,
        table.file_count()
    );
    Ok(())
}

fn trace(args: TraceArgs) -> Result<(), ErrorKind> {
    let config = args.trace_config()?;
    let table_config = args.table.table_config(None)?;

    let rng = rng_from_args(&args.common);
    let mut driver = Driver::new(NetworkBuilder::default(), rng).with_dispatcher(|dispatch| {
        match dispatch {
            Dispatch::Triple { params, .. } => println!("c Tracing {params}"),
            Dispatch::Progress { samples, total } => progress::update(samples, total),
            Dispatch::Row(_) => {}
        }
    });

    let columns = driver.trace_columns(table_config.metric_width);
    let mut table = DelimitedTable::from_config(&table_config, columns)?;

    let outcome = driver.trace(&config, &mut table);
    progress::finish();
    let summary = outcome?;

    println!(
        "c Traced {} samples in {} batches to {:?}",
        summary.samples,
        summary.batches,
        table.path()
    );
    Ok(())
}

fn dimacs(args: DimacsArgs) -> Result<(), ErrorKind> {
    let params = InstanceParams::new(args.n, args.k, args.m)?;

    let rng = rng_from_args(&args.common);
    let mut driver = Driver::new(NetworkBuilder::default(), rng);

    let (instance, metrics) = driver.sample(params, 0)?;

    for (name, metric) in driver.collaborator().metric_names().iter().zip(metrics.iter()) {
        println!("c {name}: {metric}");
    }
    print!("{}", instance.as_dimacs());

    Ok(())
}
