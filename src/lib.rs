//! Critical Path Method artifacts for small project networks: activity-on-arrow
//! diagrams with dummy activities, successor maps, earliest/latest times with
//! slack, and exhaustive path enumeration.

pub mod activity;
pub(crate) mod activity_validation;
pub mod calculations;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod network;
pub mod paths;
pub mod schedule;

pub use activity::{Activity, ActivityRecord, ActivityTable, parse_predecessors};
pub use config::NetworkConfig;
pub use error::{NetworkError, NetworkResult};
pub use graph::{AoaBuilder, AoaEdge, AoaGraph, SuccessorMap, build_aoa_graph, successor_map};
pub use input::{
    InputError, InputResult, load_network_from_csv, load_network_from_json,
    load_records_from_csv, parse_network_json, read_records_from_csv,
};
pub use network::{NetworkAnalysis, ProjectNetwork};
pub use paths::{NetworkPath, PathEnumerator, critical_paths, enumerate_paths};
pub use schedule::{ActivityTimes, CpmSchedule, ScheduleSummary, calculate_times};
