use crate::{
    metrics::{Collaborator, Metric, Metrics},
    network::Network,
    structures::instance::Instance,
    types::err::CollaboratorError,
};

/// Names of the metrics of a [NetworkBuilder].
const METRIC_NAMES: [&str; 2] = ["num_nodes", "num_edges"];

/// A collaborator which reads an instance into a [Network] and reports the count of nodes and edges of the network.
///
/// The instance is passed to the network in DIMACS form, and so any instance which can be written can be measured.
#[derive(Default)]
pub struct NetworkBuilder {
    /// Holds the DIMACS form of the most recent instance, reused to avoid an allocation per sample.
    buffer: Vec<u8>,
}

impl NetworkBuilder {
    /// Builds the network of an instance.
    pub fn build(&mut self, instance: &Instance) -> Result<Network, CollaboratorError> {
        self.buffer.clear();

        if let Err(e) = instance.write_dimacs(&mut self.buffer) {
            return Err(CollaboratorError::Serialize(e.kind()));
        }

        Ok(Network::read_dimacs(self.buffer.as_slice())?)
    }
}

impl Collaborator for NetworkBuilder {
    fn metric_names(&self) -> &[&'static str] {
        &METRIC_NAMES
    }

    fn measure(&mut self, instance: &Instance) -> Result<Metrics, CollaboratorError> {
        let network = self.build(instance)?;

        Ok(Metrics::from(vec![
            network.node_count() as Metric,
            network.edge_count() as Metric,
        ]))
    }
}
