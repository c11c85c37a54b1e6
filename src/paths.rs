//! Exhaustive start-to-finish path enumeration over the activity precedence graph.

use crate::activity::{ActivityRecord, ActivityTable};
use crate::config::NetworkConfig;
use crate::error::{NetworkError, NetworkResult};
use crate::graph::activity_dag::ActivityDag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkPath {
    pub activities: Vec<String>,
    pub duration: i64,
}

impl NetworkPath {
    pub fn contains(&self, activity: &str) -> bool {
        self.activities.iter().any(|name| name == activity)
    }
}

pub fn enumerate_paths(
    records: &[ActivityRecord],
    config: &NetworkConfig,
) -> NetworkResult<Vec<NetworkPath>> {
    let table = ActivityTable::from_records(records, config)?;
    PathEnumerator::new(&table, config.max_paths).enumerate()
}

/// Paths whose duration equals `project_duration`, in their enumeration order.
pub fn critical_paths(paths: &[NetworkPath], project_duration: i64) -> Vec<&NetworkPath> {
    paths
        .iter()
        .filter(|path| path.duration == project_duration)
        .collect()
}

pub struct PathEnumerator<'a> {
    table: &'a ActivityTable,
    limit: Option<usize>,
}

impl<'a> PathEnumerator<'a> {
    pub fn new(table: &'a ActivityTable, limit: Option<usize>) -> Self {
        Self { table, limit }
    }

    /// Every path sorted by descending duration; equal durations keep discovery order.
    pub fn enumerate(&self) -> NetworkResult<Vec<NetworkPath>> {
        // A cycle would make the walk below endless.
        ActivityDag::build(self.table).topological_order()?;

        let mut found: Vec<(Vec<usize>, i64)> = Vec::new();
        let mut stack: Vec<(Vec<usize>, i64)> = Vec::new();

        for start in self.table.start_activities() {
            stack.push((vec![start], self.table.duration(start)));

            while let Some((route, duration)) = stack.pop() {
                let Some(&last) = route.last() else {
                    continue;
                };

                if self.table.is_final(last) {
                    if let Some(limit) = self.limit {
                        if found.len() >= limit {
                            return Err(NetworkError::PathLimitExceeded { limit });
                        }
                    }
                    found.push((route, duration));
                    continue;
                }

                // Reverse push keeps successors in input order when popped.
                for &succ in self.table.successors_of(last).iter().rev() {
                    let mut extended = route.clone();
                    extended.push(succ);
                    stack.push((extended, duration + self.table.duration(succ)));
                }
            }
        }

        found.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(found
            .into_iter()
            .map(|(route, duration)| NetworkPath {
                activities: route
                    .into_iter()
                    .map(|idx| self.table.name(idx).to_string())
                    .collect(),
                duration,
            })
            .collect())
    }
}
