use rand::Rng;

use crate::{
    config::SweepConfig,
    driver::{check_schema, Dispatch, Driver},
    metrics::Collaborator,
    misc::log::targets::{self},
    stats::{Max, Mean},
    structures::instance::InstanceParams,
    table::{Cell, Table},
    types::err::{self},
};

/// A summary of a completed sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepSummary {
    /// The count of triples swept, and so of rows written.
    pub triples: usize,

    /// The count of samples taken, over all triples.
    pub samples: usize,
}

impl<C: Collaborator, R: Rng> Driver<C, R> {
    /// Sweeps every triple of a configuration, writing a row of aggregates for each triple to the table.
    ///
    /// Each row is the triple followed by the mean (rounded to the nearest integer) and the max of each metric, in the order of the schema from [sweep_columns](Driver::sweep_columns).
    ///
    /// The configuration and the schema of the table are checked before any sample is taken.
    /// The table is closed before returning, whether or not the sweep completed.
    pub fn sweep(
        &mut self,
        config: &SweepConfig,
        table: &mut impl Table,
    ) -> Result<SweepSummary, err::ErrorKind> {
        let result = self.sweep_rows(config, table);
        let closed = table.close();

        let summary = result?;
        closed?;

        log::info!(target: targets::SWEEP, "Swept {} triples with {} samples", summary.triples, summary.samples);
        Ok(summary)
    }

    fn sweep_rows(
        &mut self,
        config: &SweepConfig,
        table: &mut impl Table,
    ) -> Result<SweepSummary, err::ErrorKind> {
        let triples = config.triples()?;
        let metric_count = self.collaborator.metric_names().len();
        check_schema(table.columns(), 3 + 2 * metric_count)?;

        let samples = config.samples.value;
        let mut summary = SweepSummary {
            triples: 0,
            samples: 0,
        };

        for (index, params) in triples.iter().enumerate() {
            self.dispatch(Dispatch::Triple {
                params: *params,
                index,
                total: triples.len(),
            });
            log::debug!(target: targets::SWEEP, "Sampling {params}");

            let row = self.aggregate(*params, samples, metric_count)?;
            table.write_row(&row)?;

            summary.triples += 1;
            summary.samples += samples;

            self.dispatch(Dispatch::Row(row));
        }

        Ok(summary)
    }

    /// Samples a triple and builds the row of aggregates for the triple.
    fn aggregate(
        &mut self,
        params: InstanceParams,
        samples: usize,
        metric_count: usize,
    ) -> Result<Vec<Cell>, err::ErrorKind> {
        let mut means = vec![Mean::default(); metric_count];
        let mut maxes = vec![Max::unset(); metric_count];

        for index in 0..samples {
            let (_, metrics) = self.sample(params, index)?;

            for ((mean, max), metric) in means.iter_mut().zip(maxes.iter_mut()).zip(metrics.iter()) {
                mean.sample(*metric as f64);
                max.sample(*metric);
            }
        }

        let mut row: Vec<Cell> = Vec::with_capacity(3 + 2 * metric_count);
        row.push(params.n() as Cell);
        row.push(params.k() as Cell);
        row.push(params.m() as Cell);

        for (mean, max) in means.iter().zip(&maxes) {
            row.push(mean.rounded());
            row.push(max.value().unwrap_or_default());
        }

        Ok(row)
    }
}
