use crate::activity::ActivityTable;
use crate::error::{NetworkError, NetworkResult};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

/// Activity-on-node precedence graph; node weights are table indices.
pub struct ActivityDag {
    pub graph: DiGraph<usize, ()>,
    pub node_of: Vec<NodeIndex>,
    names: Vec<String>,
}

impl ActivityDag {
    pub fn build(table: &ActivityTable) -> Self {
        let mut graph: DiGraph<usize, ()> =
            DiGraph::with_capacity(table.len(), table.len());
        let node_of: Vec<NodeIndex> = (0..table.len()).map(|idx| graph.add_node(idx)).collect();

        // Add edges: pred -> activity
        for idx in 0..table.len() {
            for &pred in table.predecessors_of(idx) {
                graph.add_edge(node_of[pred], node_of[idx], ());
            }
        }

        let names = table
            .activities()
            .iter()
            .map(|activity| activity.name.clone())
            .collect();

        Self {
            graph,
            node_of,
            names,
        }
    }

    /// Table indices in dependency order.
    pub fn topological_order(&self) -> NetworkResult<Vec<usize>> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|node| self.graph[node]).collect())
            .map_err(|_| self.cycle_error())
    }

    /// Every activity sitting on a cycle, in input order.
    fn cycle_error(&self) -> NetworkError {
        let mut on_cycle: Vec<usize> = petgraph::algo::tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&node| self.graph.contains_edge(node, node))
            })
            .flatten()
            .map(|node| self.graph[node])
            .collect();
        on_cycle.sort_unstable();
        NetworkError::CyclicGraph {
            unresolved: on_cycle
                .into_iter()
                .map(|idx| self.names[idx].clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityRecord;
    use crate::config::NetworkConfig;

    #[test]
    fn cycle_error_names_only_activities_on_the_cycle() {
        let records = vec![
            ActivityRecord::new("a", "-", 1),
            ActivityRecord::new("b", "a,c", 1),
            ActivityRecord::new("c", "b", 1),
            ActivityRecord::new("d", "c", 1),
        ];
        let table = ActivityTable::from_records(&records, &NetworkConfig::default()).unwrap();
        let dag = ActivityDag::build(&table);
        assert_eq!(dag.graph.edge_count(), 4);
        assert_eq!(
            dag.topological_order().unwrap_err(),
            NetworkError::CyclicGraph {
                unresolved: vec!["b".to_string(), "c".to_string()]
            }
        );
    }
}
