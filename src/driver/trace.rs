use rand::Rng;

use crate::{
    config::TraceConfig,
    driver::{check_schema, Dispatch, Driver},
    metrics::Collaborator,
    misc::log::targets::{self},
    table::Table,
    types::err::{self},
};

/// A summary of a completed trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSummary {
    /// The count of samples taken, and so of rows written.
    pub samples: usize,

    /// The count of batches flushed.
    pub batches: usize,
}

impl<C: Collaborator, R: Rng> Driver<C, R> {
    /// Samples the triple of a configuration, writing the raw metrics of each sample as a row of the table.
    ///
    /// Samples are taken in batches, and after each batch the table is flushed and progress is dispatched.
    /// The final batch may be smaller than the others.
    ///
    /// The table is closed before returning, whether or not the trace completed.
    pub fn trace(
        &mut self,
        config: &TraceConfig,
        table: &mut impl Table,
    ) -> Result<TraceSummary, err::ErrorKind> {
        let result = self.trace_rows(config, table);
        let closed = table.close();

        let summary = result?;
        closed?;

        log::info!(target: targets::TRACE, "Traced {} samples", summary.samples);
        Ok(summary)
    }

    fn trace_rows(
        &mut self,
        config: &TraceConfig,
        table: &mut impl Table,
    ) -> Result<TraceSummary, err::ErrorKind> {
        config.validate()?;
        let params = config.params()?;
        check_schema(table.columns(), self.collaborator.metric_names().len())?;

        let total = config.samples.value;
        let batch = config.batch.value;

        let mut summary = TraceSummary {
            samples: 0,
            batches: 0,
        };

        self.dispatch(Dispatch::Triple {
            params,
            index: 0,
            total: 1,
        });

        while summary.samples < total {
            let batch_end = total.min(summary.samples + batch);

            for index in summary.samples..batch_end {
                let (_, metrics) = self.sample(params, index)?;
                table.write_row(metrics.as_slice())?;
            }

            table.flush()?;
            summary.samples = batch_end;
            summary.batches += 1;

            log::debug!(target: targets::TRACE, "Flushed batch {} of {params}", summary.batches);
            self.dispatch(Dispatch::Progress {
                samples: summary.samples,
                total,
            });
        }

        Ok(summary)
    }
}
