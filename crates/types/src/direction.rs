use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Axis along which steps are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Steps left to right, labels beneath the markers.
    #[default]
    Horizontal,
    /// Steps top to bottom, labels beside the markers.
    Vertical,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Vertical)
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Direction::Horizontal),
            "vertical" | "v" => Ok(Direction::Vertical),
            _ => Err(ConfigError::InvalidDirection(value.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => f.write_str("horizontal"),
            Direction::Vertical => f.write_str("vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Vertical".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!(" horizontal ".parse::<Direction>().unwrap(), Direction::Horizontal);
    }

    #[test]
    fn rejects_unknown_axis() {
        let error = "diagonal".parse::<Direction>().unwrap_err();
        assert!(matches!(error, ConfigError::InvalidDirection(ref value) if value == "diagonal"));
    }

    #[test]
    fn deserializes_from_yaml() {
        let direction: Direction = serde_yaml::from_str("vertical").unwrap();
        assert_eq!(direction, Direction::Vertical);
    }
}
