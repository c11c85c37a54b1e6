use super::{InputError, InputResult};
use crate::activity::ActivityRecord;
use crate::config::NetworkConfig;
use crate::network::ProjectNetwork;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const REQUIRED_COLUMNS: [&str; 2] = ["name", "duration"];

#[derive(Deserialize)]
struct ActivityListSnapshot {
    #[serde(default)]
    config: Option<NetworkConfig>,
    activities: Vec<ActivityRecord>,
}

/// Accepts either `[records...]` or `{ "config": {...}, "activities": [records...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ActivityDocument {
    Bare(Vec<ActivityRecord>),
    Snapshot(ActivityListSnapshot),
}

impl ActivityDocument {
    fn into_snapshot(self) -> ActivityListSnapshot {
        match self {
            ActivityDocument::Bare(activities) => ActivityListSnapshot {
                config: None,
                activities,
            },
            ActivityDocument::Snapshot(snapshot) => snapshot,
        }
    }
}

/// Reads `name,predecessors,duration` rows; the predecessors column may be omitted.
pub fn read_records_from_csv<R: Read>(reader: R) -> InputResult<Vec<ActivityRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(InputError::InvalidData(format!(
                "missing required column '{column}'"
            )));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<ActivityRecord>() {
        records.push(row?);
    }
    Ok(records)
}

pub fn load_records_from_csv<P: AsRef<Path>>(path: P) -> InputResult<Vec<ActivityRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_records_from_csv(file)?;
    debug!(path = %path.display(), records = records.len(), "loaded activity records from csv");
    Ok(records)
}

pub fn load_network_from_csv<P: AsRef<Path>>(
    path: P,
    config: NetworkConfig,
) -> InputResult<ProjectNetwork> {
    let records = load_records_from_csv(path)?;
    Ok(ProjectNetwork::from_records(&records, config)?)
}

/// Builds a network from JSON text; an embedded `config` wins over `fallback`.
pub fn parse_network_json(json: &str, fallback: NetworkConfig) -> InputResult<ProjectNetwork> {
    let snapshot = serde_json::from_str::<ActivityDocument>(json)?.into_snapshot();
    let embedded = snapshot.config.is_some();
    let config = snapshot.config.unwrap_or(fallback);
    debug!(
        records = snapshot.activities.len(),
        embedded_config = embedded,
        "parsed activity list from json"
    );
    Ok(ProjectNetwork::from_records(&snapshot.activities, config)?)
}

pub fn load_network_from_json<P: AsRef<Path>>(
    path: P,
    fallback: NetworkConfig,
) -> InputResult<ProjectNetwork> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = json.len(), "read activity json");
    parse_network_json(&json, fallback)
}
