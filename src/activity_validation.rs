use crate::activity::Activity;
use crate::error::{NetworkError, NetworkResult};
use std::collections::HashSet;

pub fn validate_activity(activity: &Activity, position: usize) -> NetworkResult<()> {
    if activity.name.trim().is_empty() {
        return Err(NetworkError::EmptyActivityName { position });
    }

    if activity.duration < 0 {
        return Err(NetworkError::NegativeDuration {
            activity: activity.name.clone(),
            duration: activity.duration,
        });
    }

    Ok(())
}

/// Checks names, durations and predecessor references. Positions in errors are 1-based.
///
/// Durations are non-negative, so their total bounds every finish time and
/// every path length; it must fit in an `i64`.
pub fn validate_activity_collection(activities: &[Activity]) -> NetworkResult<()> {
    let mut seen_names = HashSet::with_capacity(activities.len());
    let mut total_duration: i64 = 0;
    for (idx, activity) in activities.iter().enumerate() {
        validate_activity(activity, idx + 1)?;
        if !seen_names.insert(activity.name.as_str()) {
            return Err(NetworkError::DuplicateActivity(activity.name.clone()));
        }
        total_duration = total_duration
            .checked_add(activity.duration)
            .ok_or_else(|| NetworkError::DurationOverflow {
                activity: activity.name.clone(),
            })?;
    }

    for activity in activities {
        if let Some(missing) = activity
            .predecessors
            .iter()
            .find(|pred| !seen_names.contains(pred.as_str()))
        {
            return Err(NetworkError::UndefinedPredecessor {
                activity: activity.name.clone(),
                predecessor: missing.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_duration() {
        let err = validate_activity(&Activity::new("a", -3), 1).unwrap_err();
        assert_eq!(
            err,
            NetworkError::NegativeDuration {
                activity: "a".to_string(),
                duration: -3
            }
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let activities = vec![Activity::new("a", 1), Activity::new("a", 2)];
        assert_eq!(
            validate_activity_collection(&activities).unwrap_err(),
            NetworkError::DuplicateActivity("a".to_string())
        );
    }

    #[test]
    fn reports_first_undefined_predecessor() {
        let activities = vec![
            Activity::new("a", 1),
            Activity::new("b", 2).with_predecessors(["a", "x"]),
        ];
        assert_eq!(
            validate_activity_collection(&activities).unwrap_err(),
            NetworkError::UndefinedPredecessor {
                activity: "b".to_string(),
                predecessor: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_total_duration_beyond_i64() {
        let activities = vec![
            Activity::new("a", i64::MAX - 1),
            Activity::new("b", 1),
            Activity::new("c", 1),
        ];
        assert_eq!(
            validate_activity_collection(&activities).unwrap_err(),
            NetworkError::DurationOverflow {
                activity: "c".to_string()
            }
        );
        assert!(validate_activity_collection(&activities[..2]).is_ok());
    }

    #[test]
    fn blank_name_reports_position() {
        let activities = vec![Activity::new("a", 1), Activity::new("  ", 2)];
        assert_eq!(
            validate_activity_collection(&activities).unwrap_err(),
            NetworkError::EmptyActivityName { position: 2 }
        );
    }
}
