//! Validated step indicator configuration.

use thiserror::Error;
use tracing::warn;

use crate::{Direction, StepStatus};

/// Number of steps used when the caller does not specify one.
pub const DEFAULT_STEP_COUNT: usize = 5;

/// Largest accepted step count. Layout allocates one slot per step.
pub const MAX_STEP_COUNT: usize = 1000;

/// Error surfaced when an indicator configuration cannot be accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A step indicator needs at least one step.
    #[error("step count must be at least 1")]
    ZeroStepCount,
    #[error("step count {count} exceeds the maximum of {max}")]
    TooManySteps { count: usize, max: usize },
    /// Direction string was neither `horizontal` nor `vertical`.
    #[error("invalid direction '{0}', expected 'horizontal' or 'vertical'")]
    InvalidDirection(String),
}

/// Configuration for one step indicator instance.
///
/// The step count is validated at construction and the current position is
/// clamped into `[0, step_count - 1]` whenever it is set, so every consumer
/// can rely on both invariants without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorConfig {
    step_count: usize,
    current_position: usize,
    direction: Direction,
    labels: Vec<String>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            current_position: 0,
            direction: Direction::default(),
            labels: Vec::new(),
        }
    }
}

impl IndicatorConfig {
    /// Create a configuration with `step_count` steps positioned at the first step.
    pub fn new(step_count: usize) -> Result<Self, ConfigError> {
        if step_count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        if step_count > MAX_STEP_COUNT {
            return Err(ConfigError::TooManySteps {
                count: step_count,
                max: MAX_STEP_COUNT,
            });
        }
        Ok(Self {
            step_count,
            ..Self::default()
        })
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.set_position(position);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Attach per-step captions.
    ///
    /// Labels pair with steps by index. Extra labels are ignored and missing
    /// ones render empty; a mismatch is logged but never rejected.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        if let Some((labels, steps)) = self.label_mismatch() {
            warn!(labels, steps, "label count does not match step count; pairing by index");
        }
        self
    }

    /// Set the current position, clamping it to the last step.
    ///
    /// Returns `true` when the effective position changed.
    pub fn set_position(&mut self, position: usize) -> bool {
        let clamped = self.clamp(position);
        let changed = clamped != self.current_position;
        self.current_position = clamped;
        changed
    }

    pub fn clamp(&self, position: usize) -> usize {
        position.min(self.step_count - 1)
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn current_position(&self) -> usize {
        self.current_position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Label paired with `position`, if any.
    pub fn label(&self, position: usize) -> Option<&str> {
        if position >= self.step_count {
            return None;
        }
        self.labels.get(position).map(String::as_str)
    }

    /// Returns `(label_count, step_count)` when labels are present but do not line up with steps.
    pub fn label_mismatch(&self) -> Option<(usize, usize)> {
        (self.has_labels() && self.labels.len() != self.step_count).then_some((self.labels.len(), self.step_count))
    }

    pub fn status(&self, position: usize) -> StepStatus {
        StepStatus::of(position, self.current_position)
    }

    pub fn statuses(&self) -> impl Iterator<Item = StepStatus> + '_ {
        (0..self.step_count).map(|position| self.status(position))
    }

    /// Fraction of the track that is finished, in `[0.0, 1.0]`.
    ///
    /// A single step has nothing to fill, so it reports `0.0` rather than
    /// dividing by zero.
    pub fn progress_fraction(&self) -> f32 {
        if self.step_count <= 1 {
            return 0.0;
        }
        self.current_position as f32 / (self.step_count - 1) as f32
    }
}
