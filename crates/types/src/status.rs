use std::fmt;

use serde::{Deserialize, Serialize};

/// Progress status of a single step relative to the current position.
///
/// Statuses are always derived, never stored: every index before the
/// current position is finished, the current position itself is current,
/// and everything after it is unfinished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Current,
    Finished,
    Unfinished,
}

impl StepStatus {
    /// Derive the status of `position` given the active `current_position`.
    pub fn of(position: usize, current_position: usize) -> Self {
        match position.cmp(&current_position) {
            std::cmp::Ordering::Less => StepStatus::Finished,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Unfinished,
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, StepStatus::Current)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Current => "current",
            StepStatus::Finished => "finished",
            StepStatus::Unfinished => "unfinished",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::StepStatus;

    #[test]
    fn statuses_partition_every_index() {
        for step_count in 2..12usize {
            for current in 0..step_count {
                let statuses: Vec<StepStatus> = (0..step_count).map(|i| StepStatus::of(i, current)).collect();
                let current_count = statuses.iter().filter(|s| **s == StepStatus::Current).count();
                let finished_count = statuses.iter().filter(|s| **s == StepStatus::Finished).count();
                let unfinished_count = statuses.iter().filter(|s| **s == StepStatus::Unfinished).count();
                assert_eq!(current_count, 1);
                assert_eq!(finished_count, current);
                assert_eq!(unfinished_count, step_count - current - 1);
            }
        }
    }

    #[test]
    fn three_steps_with_middle_current() {
        let statuses: Vec<StepStatus> = (0..3).map(|i| StepStatus::of(i, 1)).collect();
        assert_eq!(statuses, vec![StepStatus::Finished, StepStatus::Current, StepStatus::Unfinished]);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&StepStatus::Unfinished).unwrap();
        assert_eq!(json, "\"unfinished\"");
    }
}
