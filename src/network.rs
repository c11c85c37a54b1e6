use crate::activity::{Activity, ActivityRecord, ActivityTable};
use crate::config::NetworkConfig;
use crate::error::NetworkResult;
use crate::graph::activity_dag::ActivityDag;
use crate::graph::{AoaBuilder, AoaGraph, SuccessorMap};
use crate::paths::{self, NetworkPath, PathEnumerator};
use crate::schedule::CpmSchedule;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NetworkAnalysis {
    pub graph: AoaGraph,
    pub successors: SuccessorMap,
    pub schedule: CpmSchedule,
    pub paths: Vec<NetworkPath>,
}

impl NetworkAnalysis {
    pub fn longest_path(&self) -> Option<&NetworkPath> {
        self.paths.first()
    }

    pub fn critical_paths(&self) -> Vec<&NetworkPath> {
        paths::critical_paths(&self.paths, self.schedule.project_duration)
    }

    /// The longest enumerated path must last exactly as long as the project.
    pub fn is_consistent(&self) -> bool {
        match self.longest_path() {
            Some(path) => path.duration == self.schedule.project_duration,
            None => self.schedule.project_duration == 0,
        }
    }
}

/// A validated, acyclic activity list together with the policies used to analyse it.
#[derive(Debug, Clone)]
pub struct ProjectNetwork {
    table: ActivityTable,
    config: NetworkConfig,
}

impl ProjectNetwork {
    pub fn from_records(records: &[ActivityRecord], config: NetworkConfig) -> NetworkResult<Self> {
        let table = ActivityTable::from_records(records, &config)?;
        Self::from_table(table, config)
    }

    pub fn from_activities(activities: Vec<Activity>, config: NetworkConfig) -> NetworkResult<Self> {
        let table = ActivityTable::from_activities(activities)?;
        Self::from_table(table, config)
    }

    fn from_table(table: ActivityTable, config: NetworkConfig) -> NetworkResult<Self> {
        ActivityDag::build(&table).topological_order()?;
        Ok(Self { table, config })
    }

    pub fn table(&self) -> &ActivityTable {
        &self.table
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn aoa_graph(&self) -> NetworkResult<AoaGraph> {
        AoaBuilder::new(&self.table, &self.config).build()
    }

    pub fn successors(&self) -> SuccessorMap {
        SuccessorMap::from_table(&self.table)
    }

    pub fn schedule(&self) -> NetworkResult<CpmSchedule> {
        CpmSchedule::compute(&self.table)
    }

    pub fn paths(&self) -> NetworkResult<Vec<NetworkPath>> {
        PathEnumerator::new(&self.table, self.config.max_paths).enumerate()
    }

    pub fn analyze(&self) -> NetworkResult<NetworkAnalysis> {
        Ok(NetworkAnalysis {
            graph: self.aoa_graph()?,
            successors: self.successors(),
            schedule: self.schedule()?,
            paths: self.paths()?,
        })
    }
}
