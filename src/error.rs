use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    UndefinedPredecessor { activity: String, predecessor: String },
    CyclicGraph { unresolved: Vec<String> },
    DuplicateActivity(String),
    EmptyActivityName { position: usize },
    NegativeDuration { activity: String, duration: i64 },
    PathLimitExceeded { limit: usize },
    DurationOverflow { activity: String },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::UndefinedPredecessor {
                activity,
                predecessor,
            } => write!(
                f,
                "activity '{activity}' references undefined predecessor '{predecessor}'"
            ),
            NetworkError::CyclicGraph { unresolved } => write!(
                f,
                "cycle detected in precedence network; unresolved activities: {}",
                unresolved.join(", ")
            ),
            NetworkError::DuplicateActivity(name) => {
                write!(f, "activity '{name}' is defined more than once")
            }
            NetworkError::EmptyActivityName { position } => {
                write!(f, "activity record #{position} has an empty name")
            }
            NetworkError::NegativeDuration { activity, duration } => {
                write!(f, "activity '{activity}' has negative duration {duration}")
            }
            NetworkError::PathLimitExceeded { limit } => {
                write!(f, "path enumeration exceeded the limit of {limit} paths")
            }
            NetworkError::DurationOverflow { activity } => write!(
                f,
                "total duration overflows at activity '{activity}'"
            ),
        }
    }
}

impl std::error::Error for NetworkError {}

pub type NetworkResult<T> = Result<T, NetworkError>;
