use crate::activity_validation;
use crate::config::NetworkConfig;
use crate::error::{NetworkError, NetworkResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One input row: activity name, predecessor spec (e.g. `"c,d"` or `"-"`), duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub name: String,
    #[serde(default)]
    pub predecessors: String,
    pub duration: i64,
}

impl ActivityRecord {
    pub fn new(name: impl Into<String>, predecessors: impl Into<String>, duration: i64) -> Self {
        Self {
            name: name.into(),
            predecessors: predecessors.into(),
            duration,
        }
    }
}

impl<N, P> From<(N, P, i64)> for ActivityRecord
where
    N: Into<String>,
    P: Into<String>,
{
    fn from((name, predecessors, duration): (N, P, i64)) -> Self {
        Self::new(name, predecessors, duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub predecessors: Vec<String>,
    pub duration: i64,
}

impl Activity {
    pub fn new(name: impl Into<String>, duration: i64) -> Self {
        Self {
            name: name.into(),
            predecessors: Vec::new(),
            duration,
        }
    }

    pub fn with_predecessors<I, S>(mut self, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pred in predecessors {
            let pred = pred.into();
            if !self.predecessors.contains(&pred) {
                self.predecessors.push(pred);
            }
        }
        self
    }

    pub fn from_record(record: &ActivityRecord, config: &NetworkConfig) -> Self {
        Self {
            name: record.name.trim().to_string(),
            predecessors: parse_predecessors(&record.predecessors, config),
            duration: record.duration,
        }
    }

    pub fn is_start(&self) -> bool {
        self.predecessors.is_empty()
    }
}

/// Splits a predecessor spec into distinct, trimmed names in first-seen order.
pub fn parse_predecessors(spec: &str, config: &NetworkConfig) -> Vec<String> {
    if config.is_no_predecessor(spec) {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::new();
    for token in spec.split(config.predecessor_separator) {
        let token = token.trim();
        if token.is_empty() || names.iter().any(|n| n == token) {
            continue;
        }
        names.push(token.to_string());
    }
    names
}

/// Activity-indexed view of a validated activity list.
///
/// Predecessor and successor lists hold indices into `activities`; successors
/// are kept in input order.
#[derive(Debug, Clone)]
pub struct ActivityTable {
    activities: Vec<Activity>,
    index: HashMap<String, usize>,
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
}

impl ActivityTable {
    pub fn from_records(records: &[ActivityRecord], config: &NetworkConfig) -> NetworkResult<Self> {
        let activities = records
            .iter()
            .map(|record| Activity::from_record(record, config))
            .collect();
        Self::from_activities(activities)
    }

    pub fn from_activities(activities: Vec<Activity>) -> NetworkResult<Self> {
        activity_validation::validate_activity_collection(&activities)?;

        let index: HashMap<String, usize> = activities
            .iter()
            .enumerate()
            .map(|(idx, activity)| (activity.name.clone(), idx))
            .collect();

        let mut predecessors: Vec<Vec<usize>> = Vec::with_capacity(activities.len());
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); activities.len()];

        for (idx, activity) in activities.iter().enumerate() {
            let mut preds = Vec::with_capacity(activity.predecessors.len());
            for pred in &activity.predecessors {
                let pred_idx = *index.get(pred).ok_or_else(|| {
                    NetworkError::UndefinedPredecessor {
                        activity: activity.name.clone(),
                        predecessor: pred.clone(),
                    }
                })?;
                preds.push(pred_idx);
                successors[pred_idx].push(idx);
            }
            predecessors.push(preds);
        }

        Ok(Self {
            activities,
            index,
            predecessors,
            successors,
        })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, idx: usize) -> Option<&Activity> {
        self.activities.get(idx)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.activities[idx].name
    }

    pub fn duration(&self, idx: usize) -> i64 {
        self.activities[idx].duration
    }

    pub fn predecessors_of(&self, idx: usize) -> &[usize] {
        &self.predecessors[idx]
    }

    pub fn successors_of(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    /// Activities that are never listed as anyone's predecessor.
    pub fn is_final(&self, idx: usize) -> bool {
        self.successors[idx].is_empty()
    }

    pub fn start_activities(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&idx| self.predecessors[idx].is_empty())
    }

    pub fn final_activities(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&idx| self.is_final(idx))
    }
}
