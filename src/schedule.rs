use crate::activity::{ActivityRecord, ActivityTable};
use crate::calculations::{BackwardPass, ForwardPass};
use crate::config::NetworkConfig;
use crate::error::NetworkResult;
use crate::graph::activity_dag::ActivityDag;
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityTimes {
    pub name: String,
    pub duration: i64,
    pub early_start: i64,
    pub early_finish: i64,
    pub late_start: i64,
    pub late_finish: i64,
    pub slack: i64,
    pub is_critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub activity_count: usize,
    pub critical_count: usize,
    pub project_duration: i64,
    pub critical_path: Vec<String>,
}

/// Earliest/latest times and slack for every activity, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpmSchedule {
    pub project_duration: i64,
    pub activities: Vec<ActivityTimes>,
    #[serde(skip)]
    starts: Vec<usize>,
    #[serde(skip)]
    successors: Vec<Vec<usize>>,
}

pub fn calculate_times(
    records: &[ActivityRecord],
    config: &NetworkConfig,
) -> NetworkResult<CpmSchedule> {
    let table = ActivityTable::from_records(records, config)?;
    CpmSchedule::compute(&table)
}

impl CpmSchedule {
    pub fn compute(table: &ActivityTable) -> NetworkResult<Self> {
        let dag = ActivityDag::build(table);
        let order = dag.topological_order()?;
        let earlies = ForwardPass::new(table).execute(&order);
        let project_duration = earlies.iter().map(|&(_, ef)| ef).max().unwrap_or(0);
        let lates = BackwardPass::new(table, &dag).execute(&order, project_duration);

        let activities = table
            .activities()
            .iter()
            .zip(earlies.iter().zip(lates.iter()))
            .map(|(activity, (&(es, ef), &(ls, lf)))| {
                let slack = ls - es;
                ActivityTimes {
                    name: activity.name.clone(),
                    duration: activity.duration,
                    early_start: es,
                    early_finish: ef,
                    late_start: ls,
                    late_finish: lf,
                    slack,
                    is_critical: slack == 0,
                }
            })
            .collect();

        Ok(Self {
            project_duration,
            activities,
            starts: table.start_activities().collect(),
            successors: (0..table.len())
                .map(|idx| table.successors_of(idx).to_vec())
                .collect(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&ActivityTimes> {
        self.activities.iter().find(|times| times.name == name)
    }

    pub fn critical_activities(&self) -> Vec<&str> {
        self.activities
            .iter()
            .filter(|times| times.is_critical)
            .map(|times| times.name.as_str())
            .collect()
    }

    /// A continuous chain of zero-slack activities from a start activity to a
    /// final one. Ties go to the earliest activity in input order.
    pub fn critical_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let Some(mut current) = self
            .starts
            .iter()
            .copied()
            .find(|&idx| self.activities[idx].is_critical)
        else {
            return path;
        };

        loop {
            path.push(self.activities[current].name.as_str());
            let finish = self.activities[current].early_finish;
            let next = self.successors[current].iter().copied().find(|&succ| {
                let times = &self.activities[succ];
                times.is_critical && times.early_start == finish
            });
            match next {
                Some(succ) => current = succ,
                None => break,
            }
        }
        path
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            activity_count: self.activities.len(),
            critical_count: self.activities.iter().filter(|t| t.is_critical).count(),
            project_duration: self.project_duration,
            critical_path: self
                .critical_path()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let names: Vec<&str> = self.activities.iter().map(|t| t.name.as_str()).collect();
        let critical: Vec<bool> = self.activities.iter().map(|t| t.is_critical).collect();

        let columns: Vec<Column> = vec![
            Series::new(PlSmallStr::from_static("name"), names).into_column(),
            self.i64_column("duration", |t| t.duration),
            self.i64_column("early_start", |t| t.early_start),
            self.i64_column("early_finish", |t| t.early_finish),
            self.i64_column("late_start", |t| t.late_start),
            self.i64_column("late_finish", |t| t.late_finish),
            self.i64_column("slack", |t| t.slack),
            Series::new(PlSmallStr::from_static("is_critical"), critical).into_column(),
        ];

        DataFrame::new(columns)
    }

    fn i64_column(&self, name: &'static str, value: fn(&ActivityTimes) -> i64) -> Column {
        let data: Vec<i64> = self.activities.iter().map(value).collect();
        Series::new(PlSmallStr::from_static(name), data).into_column()
    }
}
