use serde::{Deserialize, Serialize};

pub mod activity_dag;
pub mod builder;
pub mod successors;

pub use builder::{AoaBuilder, build_aoa_graph};
pub use successors::{SuccessorMap, successor_map};

/// An arrow of the activity-on-arrow diagram: a real activity or a zero-duration dummy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AoaEdge {
    pub from: usize,
    pub to: usize,
    pub label: String,
    pub duration: i64,
    pub is_dummy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AoaGraph {
    /// Event ids, always `1..=N`.
    pub nodes: Vec<usize>,
    pub edges: Vec<AoaEdge>,
    pub dummy_activity_labels: Vec<String>,
}

impl AoaGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn start_node(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    pub fn terminal_node(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    pub fn real_edges(&self) -> impl Iterator<Item = &AoaEdge> {
        self.edges.iter().filter(|edge| !edge.is_dummy)
    }

    pub fn dummy_edges(&self) -> impl Iterator<Item = &AoaEdge> {
        self.edges.iter().filter(|edge| edge.is_dummy)
    }

    pub fn edge_for(&self, activity: &str) -> Option<&AoaEdge> {
        self.real_edges().find(|edge| edge.label == activity)
    }

    pub fn outgoing(&self, node: usize) -> impl Iterator<Item = &AoaEdge> {
        self.edges.iter().filter(move |edge| edge.from == node)
    }

    pub fn incoming(&self, node: usize) -> impl Iterator<Item = &AoaEdge> {
        self.edges.iter().filter(move |edge| edge.to == node)
    }
}
