/*!
Collaborators, which turn an instance into a handful of integer metrics.

A collaborator is treated as a black box --- an instance goes in and some metrics come out.
Whatever structure the collaborator builds to obtain the metrics is never inspected.

The metrics returned by a collaborator must be in the order of the names given by [metric_names](Collaborator::metric_names), and this order is used for the columns of any table built from the collaborator.

```rust
# use ksat_sweep::metrics::{Collaborator, Metrics};
# use ksat_sweep::structures::instance::Instance;
# use ksat_sweep::types::err::CollaboratorError;
/// Counts the clauses of an instance which contain some negative literal.
struct NegativeClauses;

impl Collaborator for NegativeClauses {
    fn metric_names(&self) -> &[&'static str] {
        &["negative_clauses"]
    }

    fn measure(&mut self, instance: &Instance) -> Result<Metrics, CollaboratorError> {
        let count = instance
            .clauses()
            .iter()
            .filter(|clause| clause.iter().any(|literal| *literal < 0))
            .count();
        Ok(Metrics::from(vec![count as i64]))
    }
}
```
*/

use crate::{structures::instance::Instance, types::err::CollaboratorError};

/// A single metric.
pub type Metric = i64;

/// The metrics of a single instance, in the order named by the collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics(Vec<Metric>);

impl Metrics {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Metric] {
        &self.0
    }
}

impl From<Vec<Metric>> for Metrics {
    fn from(value: Vec<Metric>) -> Self {
        Metrics(value)
    }
}

impl std::ops::Index<usize> for Metrics {
    type Output = Metric;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Something which turns an instance into metrics.
pub trait Collaborator {
    /// The names of the metrics returned, in order.
    fn metric_names(&self) -> &[&'static str];

    /// The metrics of an instance.
    ///
    /// Any error is fatal to a run, and so there's no expectation that a collaborator may be called again after an error.
    fn measure(&mut self, instance: &Instance) -> Result<Metrics, CollaboratorError>;
}

/// Measures an instance and ensures the count of metrics returned matches the count of names.
pub fn checked_measure(
    collaborator: &mut impl Collaborator,
    instance: &Instance,
) -> Result<Metrics, CollaboratorError> {
    let metrics = collaborator.measure(instance)?;
    let expected = collaborator.metric_names().len();

    match metrics.len() == expected {
        true => Ok(metrics),
        false => Err(CollaboratorError::MetricCount {
            expected,
            found: metrics.len(),
        }),
    }
}
