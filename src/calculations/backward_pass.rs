use crate::activity::ActivityTable;
use crate::graph::activity_dag::ActivityDag;
use petgraph::Direction;

pub struct BackwardPass<'a> {
    table: &'a ActivityTable,
    dag: &'a ActivityDag,
}

impl<'a> BackwardPass<'a> {
    pub fn new(table: &'a ActivityTable, dag: &'a ActivityDag) -> Self {
        Self { table, dag }
    }

    /// `(late_start, late_finish)` per table index, anchored at `project_duration`.
    /// `order` is the topological order used by the forward pass.
    pub fn execute(&self, order: &[usize], project_duration: i64) -> Vec<(i64, i64)> {
        let mut late_starts: Vec<Option<i64>> = vec![None; self.table.len()];
        let mut results: Vec<(i64, i64)> = vec![(0, 0); self.table.len()];

        // Reverse topological order
        for &idx in order.iter().rev() {
            let node_ix = self.dag.node_of[idx];

            // Late finish is the earliest late start among successors
            let lf = self
                .dag
                .graph
                .neighbors_directed(node_ix, Direction::Outgoing)
                .filter_map(|succ_ix| late_starts[self.dag.graph[succ_ix]])
                .min()
                .unwrap_or(project_duration);
            let ls = lf - self.table.duration(idx);

            late_starts[idx] = Some(ls);
            results[idx] = (ls, lf);
        }

        results
    }
}
