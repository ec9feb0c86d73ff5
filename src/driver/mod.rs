/*!
Drivers, which tie generation, measurement, aggregation, and output together.

A [Driver] owns a [collaborator](crate::metrics::Collaborator) and a source of randomness, and supports two kinds of run:
- A [sweep](Driver::sweep) over many triples, writing one row of aggregated metrics for each triple.
- A [trace](Driver::trace) of a single triple, writing one row of raw metrics for each sample.

Runs are sequential, and no state is kept between triples aside from the source of randomness.
Any error ends a run, and the table of the run is closed whether or not the run ends in error.

# Dispatches

Progress of a run is sent as a [Dispatch] to an optional dispatcher.
Dispatches are for whoever is watching a run, and nothing is read back from the dispatcher.

```rust
# use ksat_sweep::driver::{Dispatch, Driver};
# use ksat_sweep::generic::random::MinimalPCG32;
# use ksat_sweep::network::NetworkBuilder;
# use ksat_sweep::structures::instance::InstanceParams;
# use rand::SeedableRng;
let rng = MinimalPCG32::from_seed(1_u64.to_le_bytes());
let mut driver = Driver::new(NetworkBuilder::default(), rng).with_dispatcher(|dispatch| {
    if let Dispatch::Triple { params, .. } = dispatch {
        println!("c {params}");
    }
});

let params = InstanceParams::new(8, 3, 20).unwrap();
let (instance, metrics) = driver.sample(params, 0).unwrap();
assert_eq!(instance.params(), params);
assert_eq!(metrics.len(), 2);
```
*/

mod sweep;
mod trace;

pub use sweep::SweepSummary;
pub use trace::TraceSummary;

use rand::Rng;

use crate::{
    generator::generate,
    metrics::{checked_measure, Collaborator, Metrics},
    structures::instance::{Instance, InstanceParams},
    table::{Cell, Column},
    types::err::{SampleError, SampleFailure, TableError},
};

/// Progress of a run.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    /// Sampling of a triple has begun, the `index`th of `total` triples.
    Triple {
        params: InstanceParams,
        index: usize,
        total: usize,
    },

    /// A row was written.
    Row(Vec<Cell>),

    /// A batch of a trace was written and flushed, with `samples` of `total` samples taken.
    Progress { samples: usize, total: usize },
}

/// Drives samples of a collaborator.
pub struct Driver<C: Collaborator, R: Rng> {
    collaborator: C,
    rng: R,
    dispatcher: Option<Box<dyn Fn(Dispatch)>>,
}

impl<C: Collaborator, R: Rng> Driver<C, R> {
    pub fn new(collaborator: C, rng: R) -> Self {
        Driver {
            collaborator,
            rng,
            dispatcher: None,
        }
    }

    /// Sets a dispatcher, to which progress is sent.
    pub fn with_dispatcher(mut self, dispatcher: impl Fn(Dispatch) + 'static) -> Self {
        self.dispatcher = Some(Box::new(dispatcher));
        self
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    fn dispatch(&self, dispatch: Dispatch) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(dispatch)
        }
    }

    /// Generates and measures a single instance.
    ///
    /// The index is used only to note where an error occurred.
    pub fn sample(
        &mut self,
        params: InstanceParams,
        index: usize,
    ) -> Result<(Instance, Metrics), SampleFailure> {
        let failure = |error: SampleError| SampleFailure {
            params,
            index,
            error,
        };

        let instance = generate(params, &mut self.rng).map_err(|e| failure(e.into()))?;
        let metrics =
            checked_measure(&mut self.collaborator, &instance).map_err(|e| failure(e.into()))?;

        Ok((instance, metrics))
    }

    /// The schema of a sweep: the parameters, then the mean and max of each metric.
    pub fn sweep_columns(&self, parameter_width: usize, metric_width: usize) -> Vec<Column> {
        let mut columns = vec![
            Column::new("N", parameter_width),
            Column::new("K", parameter_width),
            Column::new("M", parameter_width),
        ];

        for name in self.collaborator.metric_names() {
            columns.push(Column::new(format!("mean_{name}"), metric_width));
            columns.push(Column::new(format!("max_{name}"), metric_width));
        }

        columns
    }

    /// The schema of a trace: each metric.
    pub fn trace_columns(&self, metric_width: usize) -> Vec<Column> {
        self.collaborator
            .metric_names()
            .iter()
            .map(|name| Column::new(*name, metric_width))
            .collect()
    }
}

/// Ensures a table has the expected count of columns, before any sample is taken.
fn check_schema(columns: &[Column], expected: usize) -> Result<(), TableError> {
    match columns.len() == expected {
        true => Ok(()),
        false => Err(TableError::ColumnCount {
            expected,
            found: columns.len(),
        }),
    }
}
