/*!
A Boolean network built from a formula, and a [collaborator](crate::metrics::Collaborator) which reports the size of the network.

The network is a directed acyclic graph with three kinds of node:
- A single constant node, for *false*.
- An input node for each atom of the formula.
- And nodes, each with exactly two fanins.

Negation is not a node.
Instead, each edge carries a flag noting whether the signal along the edge is complemented.
So, a [Signal] is a node paired with a complement flag, and the disjunction of two signals is built as the complement of the conjunction of their complements.

And nodes are structurally hashed --- requesting the conjunction of a pair of signals a second time returns the node built the first time.
In addition, trivial conjunctions are simplified without building a node:
- *a* ∧ *a* = *a*
- *a* ∧ ¬*a* = 0
- 0 ∧ *a* = 0
- 1 ∧ *a* = *a*

A formula is read into a network from [DIMACS](Network::read_dimacs), with each clause built as the disjunction of its literals and the output of the network as the conjunction of every clause.
Disjunctions and conjunctions of many signals are built as balanced trees.

```rust
# use ksat_sweep::network::Network;
let dimacs = "p cnf 2 2\n1 2 0\n-1 -2 0\n";

let network = Network::read_dimacs(dimacs.as_bytes()).unwrap();

// The constant, two inputs, two clauses, and their conjunction.
assert_eq!(network.node_count(), 6);
// Two fanins for each of three gates, and the output.
assert_eq!(network.edge_count(), 7);
```
*/

mod builder;
mod dimacs;

pub use builder::NetworkBuilder;

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::structures::atom::Atom;

/// The kinds of node in a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Constant,
    Input(Atom),
    And,
}

/// A node of a network, together with whether the value of the node is complemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signal {
    node: NodeIndex,
    complemented: bool,
}

impl Signal {
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    pub fn is_complemented(&self) -> bool {
        self.complemented
    }
}

impl std::ops::Not for Signal {
    type Output = Signal;

    fn not(self) -> Self::Output {
        Signal {
            node: self.node,
            complemented: !self.complemented,
        }
    }
}

/// A structurally hashed network of and nodes with complemented edges.
///
/// Edges run from a fanin to the node it feeds, weighted by whether the fanin is complemented.
pub struct Network {
    graph: DiGraph<Node, bool>,
    constant: NodeIndex,
    inputs: Vec<NodeIndex>,
    strash: HashMap<(Signal, Signal), NodeIndex>,
    output: Option<Signal>,
}

impl Default for Network {
    fn default() -> Self {
        let mut graph = DiGraph::default();
        let constant = graph.add_node(Node::Constant);

        Network {
            graph,
            constant,
            inputs: Vec::default(),
            strash: HashMap::default(),
            output: None,
        }
    }
}

impl Network {
    /// The constant signal with the given value.
    pub fn constant(&self, value: bool) -> Signal {
        Signal {
            node: self.constant,
            complemented: value,
        }
    }

    /// Adds a fresh input to the network, for the next atom.
    pub fn create_input(&mut self) -> Signal {
        let atom = self.inputs.len() as Atom + 1;
        let node = self.graph.add_node(Node::Input(atom));
        self.inputs.push(node);

        Signal {
            node,
            complemented: false,
        }
    }

    /// The (uncomplemented) signal of the input for an atom, if the atom has an input.
    pub fn input(&self, atom: Atom) -> Option<Signal> {
        let index = (atom as usize).checked_sub(1)?;
        self.inputs.get(index).map(|node| Signal {
            node: *node,
            complemented: false,
        })
    }

    /// The count of inputs of the network.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// The conjunction of two signals.
    pub fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        let (a, b) = match a <= b {
            true => (a, b),
            false => (b, a),
        };

        if a.node == b.node {
            return match a.complemented == b.complemented {
                true => a,
                false => self.constant(false),
            };
        }

        // As the constant is the first node added it is always the lesser of an ordered pair.
        if a.node == self.constant {
            return match a.complemented {
                true => b,
                false => self.constant(false),
            };
        }

        if let Some(node) = self.strash.get(&(a, b)) {
            return Signal {
                node: *node,
                complemented: false,
            };
        }

        let node = self.graph.add_node(Node::And);
        self.graph.add_edge(a.node, node, a.complemented);
        self.graph.add_edge(b.node, node, b.complemented);
        self.strash.insert((a, b), node);

        Signal {
            node,
            complemented: false,
        }
    }

    /// The disjunction of two signals.
    pub fn create_or(&mut self, a: Signal, b: Signal) -> Signal {
        !self.create_and(!a, !b)
    }

    /// The conjunction of some signals, true if there are no signals.
    pub fn create_nary_and(&mut self, signals: &[Signal]) -> Signal {
        let top = self.constant(true);
        self.tree_reduce(signals, top, Self::create_and)
    }

    /// The disjunction of some signals, false if there are no signals.
    pub fn create_nary_or(&mut self, signals: &[Signal]) -> Signal {
        let bottom = self.constant(false);
        self.tree_reduce(signals, bottom, Self::create_or)
    }

    /// Reduces signals by splitting at the midpoint, so the depth of the reduction is logarithmic.
    fn tree_reduce(
        &mut self,
        signals: &[Signal],
        empty: Signal,
        op: fn(&mut Self, Signal, Signal) -> Signal,
    ) -> Signal {
        match signals {
            [] => empty,
            [signal] => *signal,
            [a, b] => op(self, *a, *b),
            _ => {
                let (left, right) = signals.split_at(signals.len() / 2);
                let left = self.tree_reduce(left, empty, op);
                let right = self.tree_reduce(right, empty, op);
                op(self, left, right)
            }
        }
    }

    /// Sets the output of the network.
    pub fn set_output(&mut self, signal: Signal) {
        self.output = Some(signal);
    }

    /// The output of the network, if set.
    pub fn output(&self) -> Option<Signal> {
        self.output
    }

    /// The count of and nodes.
    pub fn gate_count(&self) -> usize {
        self.graph.node_count() - self.inputs.len() - 1
    }

    /// The count of nodes, including the constant and inputs.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The count of edges, i.e. the fanins of each gate together with the output.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count() + 1
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DiGraph<Node, bool> {
        &self.graph
    }
}
