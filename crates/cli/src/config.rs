//! Configuration file loading and command-line overrides.
//!
//! Resolution order for the file: `--config <path>`, then `STEPLINE_CONFIG`,
//! then `<config_dir>/stepline/config.yaml` when it exists. Without any of
//! those the built-in defaults apply. Command-line flags win over file
//! values.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use stepline_tui::{LabelAlign, StepStyle, StyleError, StyleOverrides};
use stepline_types::{ConfigError, Direction, IndicatorConfig, config::DEFAULT_STEP_COUNT};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_ENV: &str = "STEPLINE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported configuration format '{extension}' (expected .yaml, .yml or .json)")]
    UnsupportedExtension { extension: String },
    #[error(transparent)]
    Indicator(#[from] ConfigError),
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// On-disk configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub step_count: Option<usize>,
    pub current_position: Option<usize>,
    pub direction: Option<String>,
    pub labels: Option<Vec<String>>,
    pub style: StyleOverrides,
}

/// Values given on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub steps: Option<usize>,
    pub position: Option<usize>,
    pub direction: Option<Direction>,
    pub labels: Option<Vec<String>>,
    pub label_align: Option<LabelAlign>,
}

impl FileConfig {
    /// Layer command-line values on top of the file.
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Self {
        if let Some(steps) = overrides.steps {
            self.step_count = Some(steps);
        }
        if let Some(position) = overrides.position {
            self.current_position = Some(position);
        }
        if let Some(direction) = overrides.direction {
            self.direction = Some(direction.to_string());
        }
        if let Some(labels) = overrides.labels {
            self.labels = Some(labels);
        }
        self.style = self.style.merged_with(StyleOverrides {
            label_align: overrides.label_align,
            ..StyleOverrides::default()
        });
        self
    }

    /// Validate into the indicator configuration and resolved style.
    pub fn build(&self) -> Result<(IndicatorConfig, StepStyle), ConfigFileError> {
        let direction = match self.direction.as_deref() {
            Some(direction) => direction.parse::<Direction>()?,
            None => Direction::default(),
        };
        let mut config = IndicatorConfig::new(self.step_count.unwrap_or(DEFAULT_STEP_COUNT))?
            .with_direction(direction)
            .with_position(self.current_position.unwrap_or(0));
        if let Some(labels) = &self.labels {
            config = config.with_labels(labels.iter().cloned());
        }
        let style = StepStyle::resolve(&self.style)?;
        Ok((config, style))
    }
}

/// Pick the configuration file to load, if any.
///
/// An explicit path or the environment variable is returned as-is so a
/// missing file is reported; the default location is only used when present.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(expand_tilde(&path));
    }
    let default_path = default_config_path();
    default_path.exists().then_some(default_path)
}

pub fn default_config_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stepline")
        .join("config.yaml")
}

/// Parse a YAML or JSON configuration file, chosen by extension.
pub fn load_config_from_path(path: &Path) -> Result<FileConfig, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if !matches!(extension.as_str(), "yaml" | "yml" | "json") {
        return Err(ConfigFileError::UnsupportedExtension { extension });
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading configuration");
    if extension == "json" {
        serde_json::from_str(&content).map_err(|source| ConfigFileError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else if content.trim().is_empty() {
        Ok(FileConfig::default())
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigFileError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load the resolved file (or defaults) and apply command-line overrides.
pub fn load(explicit: Option<&Path>, overrides: CliOverrides) -> Result<(IndicatorConfig, StepStyle), ConfigFileError> {
    let file = match resolve_config_path(explicit) {
        Some(path) => load_config_from_path(&path)?,
        None => FileConfig::default(),
    };
    file.with_overrides(overrides).build()
}

pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    if path == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use stepline_types::StepStatus;
    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_yaml_document() {
        let file = write_config(
            ".yaml",
            "step_count: 4\ncurrent_position: 1\ndirection: Vertical\nlabels: [Cart, Address, Payment, Done]\nstyle:\n  current_step_label_color: \"#FF8800\"\n",
        );
        let parsed = load_config_from_path(file.path()).unwrap();
        assert_eq!(parsed.step_count, Some(4));
        assert_eq!(parsed.style.current_step_label_color, Some("#FF8800".to_string()));

        let (config, style) = parsed.build().unwrap();
        assert_eq!(config.direction(), Direction::Vertical);
        assert_eq!(config.status(0), StepStatus::Finished);
        assert_eq!(config.label(3), Some("Done"));
        assert_ne!(style.current_step_label_color, StepStyle::default().current_step_label_color);
    }

    #[test]
    fn loads_json_document() {
        let file = write_config(".json", r#"{"step_count": 2, "style": {"label_align": "flex-start"}}"#);
        let parsed = load_config_from_path(file.path()).unwrap();
        let (config, style) = parsed.build().unwrap();
        assert_eq!(config.step_count(), 2);
        assert_eq!(style.label_align, stepline_tui::LabelAlign::Start);
    }

    #[test]
    fn empty_yaml_means_defaults() {
        let file = write_config(".yml", "");
        assert_eq!(load_config_from_path(file.path()).unwrap(), FileConfig::default());
    }

    #[test]
    fn rejects_unknown_keys_and_extensions() {
        let file = write_config(".yaml", "step_cuont: 3\n");
        assert!(matches!(load_config_from_path(file.path()), Err(ConfigFileError::Yaml { .. })));

        let file = write_config(".toml", "step_count = 3\n");
        assert!(matches!(
            load_config_from_path(file.path()),
            Err(ConfigFileError::UnsupportedExtension { extension }) if extension == "toml"
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert!(matches!(load(Some(&missing), CliOverrides::default()), Err(ConfigFileError::Io { .. })));
    }

    #[test]
    fn validation_errors_surface() {
        let zero = FileConfig {
            step_count: Some(0),
            ..FileConfig::default()
        };
        assert!(matches!(zero.build(), Err(ConfigFileError::Indicator(ConfigError::ZeroStepCount))));

        let huge = FileConfig::default().with_overrides(CliOverrides {
            steps: Some(usize::MAX),
            ..CliOverrides::default()
        });
        assert!(matches!(
            huge.build(),
            Err(ConfigFileError::Indicator(ConfigError::TooManySteps { .. }))
        ));

        let diagonal = FileConfig {
            direction: Some("diagonal".into()),
            ..FileConfig::default()
        };
        assert!(matches!(
            diagonal.build(),
            Err(ConfigFileError::Indicator(ConfigError::InvalidDirection(_)))
        ));

        let mut bad_color = FileConfig::default();
        bad_color.style.label_color = Some("not-a-color".into());
        assert!(matches!(bad_color.build(), Err(ConfigFileError::Style(_))));
    }

    #[test]
    fn cli_values_win_over_file_values() {
        let file = FileConfig {
            step_count: Some(3),
            current_position: Some(2),
            labels: Some(vec!["a".into(), "b".into(), "c".into()]),
            ..FileConfig::default()
        };
        let overrides = CliOverrides {
            steps: Some(6),
            position: None,
            direction: Some(Direction::Vertical),
            labels: None,
            label_align: None,
        };
        let (config, _) = file.with_overrides(overrides).build().unwrap();
        assert_eq!(config.step_count(), 6);
        assert_eq!(config.current_position(), 2);
        assert_eq!(config.direction(), Direction::Vertical);
        assert_eq!(config.labels().len(), 3);
    }

    #[test]
    fn cli_label_align_layers_over_file_style() {
        let mut file = FileConfig::default();
        file.style.label_align = Some(LabelAlign::Start);
        file.style.label_color = Some("#112233".into());

        let overrides = CliOverrides {
            label_align: Some(LabelAlign::End),
            ..CliOverrides::default()
        };
        let (_, style) = file.clone().with_overrides(overrides).build().unwrap();
        assert_eq!(style.label_align, LabelAlign::End);
        assert_ne!(style.label_color, StepStyle::default().label_color);

        let (_, style) = file.with_overrides(CliOverrides::default()).build().unwrap();
        assert_eq!(style.label_align, LabelAlign::Start);
    }

    #[test]
    fn out_of_range_position_is_clamped() {
        let file = FileConfig {
            step_count: Some(3),
            current_position: Some(10),
            ..FileConfig::default()
        };
        let (config, _) = file.build().unwrap();
        assert_eq!(config.current_position(), 2);
    }

    #[test]
    fn explicit_path_beats_environment() {
        temp_env::with_var(CONFIG_ENV, Some("/tmp/from-env.yaml"), || {
            let explicit = Path::new("/tmp/explicit.yaml");
            assert_eq!(resolve_config_path(Some(explicit)), Some(explicit.to_path_buf()));
            assert_eq!(resolve_config_path(None), Some(PathBuf::from("/tmp/from-env.yaml")));
        });
    }

    #[test]
    fn environment_path_expands_tilde() {
        temp_env::with_var(CONFIG_ENV, Some("~/stepline/custom.yaml"), || {
            assert_eq!(resolve_config_path(None), Some(expand_tilde("~/stepline/custom.yaml")));
        });
    }
}
