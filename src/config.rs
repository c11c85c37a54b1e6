use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

/// Parsing and output policies shared by the graph builder and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Predecessor spec meaning "no predecessors". An empty spec means the same.
    pub no_predecessor_sentinel: String,
    pub predecessor_separator: char,
    pub dummy_label_prefix: String,
    /// End parallel activities (same start and end event) at separate nodes
    /// joined by a dummy edge.
    pub split_parallel_activities: bool,
    pub max_paths: Option<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            no_predecessor_sentinel: "-".to_string(),
            predecessor_separator: ',',
            dummy_label_prefix: "Dummy".to_string(),
            split_parallel_activities: false,
            max_paths: None,
        }
    }
}

impl NetworkConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(io::Error::from)
    }

    pub fn with_dummy_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.dummy_label_prefix = prefix.into();
        self
    }

    pub fn with_split_parallel_activities(mut self, split: bool) -> Self {
        self.split_parallel_activities = split;
        self
    }

    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }

    pub(crate) fn is_no_predecessor(&self, spec: &str) -> bool {
        let spec = spec.trim();
        spec.is_empty() || spec == self.no_predecessor_sentinel.trim()
    }

    pub(crate) fn convergence_label(&self, predecessor: &str, activity: &str) -> String {
        format!("{}({}->{})", self.dummy_label_prefix, predecessor, activity)
    }

    pub(crate) fn parallel_label(&self, activity: &str) -> String {
        format!("{}({})", self.dummy_label_prefix, activity)
    }
}
