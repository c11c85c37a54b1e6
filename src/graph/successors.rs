use crate::activity::{ActivityRecord, ActivityTable};
use crate::config::NetworkConfig;
use crate::error::NetworkResult;
use serde::Serialize;

/// Direct successors of every activity, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessorMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SuccessorMap {
    pub fn from_table(table: &ActivityTable) -> Self {
        let entries = table
            .activities()
            .iter()
            .enumerate()
            .map(|(idx, activity)| {
                let successors = table
                    .successors_of(idx)
                    .iter()
                    .map(|&succ| table.name(succ).to_string())
                    .collect();
                (activity.name.clone(), successors)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, activity: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == activity)
            .map(|(_, successors)| successors.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, successors)| (name.as_str(), successors.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn successor_map(
    records: &[ActivityRecord],
    config: &NetworkConfig,
) -> NetworkResult<SuccessorMap> {
    let table = ActivityTable::from_records(records, config)?;
    Ok(SuccessorMap::from_table(&table))
}
