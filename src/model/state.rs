//! State — one HMM state and its nodes.

use serde::{Deserialize, Serialize};
use super::Node;

/// An HMM state: its nodes in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub nodes: Vec<Node>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

impl From<Vec<Node>> for State {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}
