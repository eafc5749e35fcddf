//! PdfModel — a fully decoded model file.

use serde::{Deserialize, Serialize};
use super::{ModelHeader, Node, State};

/// Header plus every state, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfModel {
    pub header: ModelHeader,
    pub states: Vec<State>,
}

impl PdfModel {
    pub fn new(header: ModelHeader, states: Vec<State>) -> Self {
        Self { header, states }
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_msd(&self) -> bool {
        self.header.is_msd()
    }

    /// Node count per state, in state order.
    pub fn node_counts(&self) -> Vec<usize> {
        self.states.iter().map(State::node_count).collect()
    }

    /// Every node as `(state_index, node_index, node)`, in file order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, usize, &Node)> {
        self.states.iter().enumerate().flat_map(|(i, state)| {
            state.nodes.iter().enumerate().map(move |(j, node)| (i, j, node))
        })
    }
}
