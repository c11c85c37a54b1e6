use crate::activity::ActivityTable;

pub struct ForwardPass<'a> {
    table: &'a ActivityTable,
}

impl<'a> ForwardPass<'a> {
    pub fn new(table: &'a ActivityTable) -> Self {
        Self { table }
    }

    /// `(early_start, early_finish)` per table index, visiting `order` front to back.
    pub fn execute(&self, order: &[usize]) -> Vec<(i64, i64)> {
        let mut early_finishes: Vec<i64> = vec![0; self.table.len()];
        let mut results: Vec<(i64, i64)> = vec![(0, 0); self.table.len()];

        for &idx in order {
            // Early start is max of all predecessor finishes
            let early_start = self
                .table
                .predecessors_of(idx)
                .iter()
                .map(|&pred| early_finishes[pred])
                .max()
                .unwrap_or(0);
            let early_finish = early_start + self.table.duration(idx);

            early_finishes[idx] = early_finish;
            results[idx] = (early_start, early_finish);
        }

        results
    }
}
