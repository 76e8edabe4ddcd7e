//! Step indicator styling.
//!
//! A [`StepStyle`] is the fully populated, immutable style used by the
//! renderer. It is produced by [`StepStyle::resolve`], which layers
//! [`StyleOverrides`] over the documented defaults in [`defaults`]. Nothing
//! here is shared or mutated after resolution; reconfiguring an indicator
//! means resolving a new value.

use std::{str::FromStr, time::Duration};

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
};
use serde::{Deserialize, Serialize};
use stepline_types::StepStatus;
use thiserror::Error;

pub mod defaults;
pub mod overrides;

pub use overrides::StyleOverrides;

/// Error surfaced when overrides cannot be resolved into a style.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Color string not understood by the terminal color parser.
    #[error("style key '{key}' has invalid color '{value}'")]
    InvalidColor { key: &'static str, value: String },
    /// Marker sizes must be at least one cell.
    #[error("style key '{key}' must be greater than zero")]
    ZeroMarkerSize { key: &'static str },
    #[error("invalid label alignment '{0}' (expected start, center or end)")]
    InvalidLabelAlign(String),
}

/// Horizontal placement of a label within its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    #[serde(alias = "flex-start", alias = "left")]
    Start,
    #[default]
    Center,
    #[serde(alias = "flex-end", alias = "right")]
    End,
}

impl FromStr for LabelAlign {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" | "flex-start" | "left" => Ok(LabelAlign::Start),
            "center" => Ok(LabelAlign::Center),
            "end" | "flex-end" | "right" => Ok(LabelAlign::End),
            _ => Err(StyleError::InvalidLabelAlign(value.to_string())),
        }
    }
}

impl From<LabelAlign> for Alignment {
    fn from(value: LabelAlign) -> Self {
        match value {
            LabelAlign::Start => Alignment::Left,
            LabelAlign::Center => Alignment::Center,
            LabelAlign::End => Alignment::Right,
        }
    }
}

/// Resolved visual parameters for a step indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStyle {
    pub step_indicator_size: u16,
    pub current_step_indicator_size: u16,
    pub separator_stroke_width: u16,
    pub separator_stroke_unfinished_width: u16,
    pub separator_stroke_finished_width: u16,
    pub current_step_stroke_width: u16,
    pub step_stroke_width: u16,

    pub step_stroke_current_color: Color,
    pub step_stroke_finished_color: Color,
    pub step_stroke_unfinished_color: Color,
    pub separator_finished_color: Color,
    pub separator_unfinished_color: Color,
    pub step_indicator_finished_color: Color,
    pub step_indicator_unfinished_color: Color,
    pub step_indicator_current_color: Color,

    pub step_indicator_label_font_size: u16,
    pub current_step_indicator_label_font_size: u16,
    pub step_indicator_label_current_color: Color,
    pub step_indicator_label_finished_color: Color,
    pub step_indicator_label_unfinished_color: Color,

    pub label_color: Color,
    pub label_size: u16,
    pub label_align: LabelAlign,
    pub current_step_label_color: Color,

    pub progress_duration: Duration,
    pub marker_duration: Duration,
}

impl Default for StepStyle {
    fn default() -> Self {
        use defaults::*;
        Self {
            step_indicator_size: STEP_INDICATOR_SIZE,
            current_step_indicator_size: CURRENT_STEP_INDICATOR_SIZE,
            separator_stroke_width: SEPARATOR_STROKE_WIDTH,
            separator_stroke_unfinished_width: SEPARATOR_STROKE_UNFINISHED_WIDTH,
            separator_stroke_finished_width: SEPARATOR_STROKE_FINISHED_WIDTH,
            current_step_stroke_width: CURRENT_STEP_STROKE_WIDTH,
            step_stroke_width: STEP_STROKE_WIDTH,
            step_stroke_current_color: STEP_STROKE_CURRENT_COLOR,
            step_stroke_finished_color: STEP_STROKE_FINISHED_COLOR,
            step_stroke_unfinished_color: STEP_STROKE_UNFINISHED_COLOR,
            separator_finished_color: SEPARATOR_FINISHED_COLOR,
            separator_unfinished_color: SEPARATOR_UNFINISHED_COLOR,
            step_indicator_finished_color: STEP_INDICATOR_FINISHED_COLOR,
            step_indicator_unfinished_color: STEP_INDICATOR_UNFINISHED_COLOR,
            step_indicator_current_color: STEP_INDICATOR_CURRENT_COLOR,
            step_indicator_label_font_size: STEP_INDICATOR_LABEL_FONT_SIZE,
            current_step_indicator_label_font_size: CURRENT_STEP_INDICATOR_LABEL_FONT_SIZE,
            step_indicator_label_current_color: STEP_INDICATOR_LABEL_CURRENT_COLOR,
            step_indicator_label_finished_color: STEP_INDICATOR_LABEL_FINISHED_COLOR,
            step_indicator_label_unfinished_color: STEP_INDICATOR_LABEL_UNFINISHED_COLOR,
            label_color: LABEL_COLOR,
            label_size: LABEL_SIZE,
            label_align: LABEL_ALIGN,
            current_step_label_color: CURRENT_STEP_LABEL_COLOR,
            progress_duration: PROGRESS_DURATION,
            marker_duration: MARKER_DURATION,
        }
    }
}

impl StepStyle {
    /// Layer `overrides` over the defaults, key by key.
    pub fn resolve(overrides: &StyleOverrides) -> Result<Self, StyleError> {
        let base = StepStyle::default();
        let style = StepStyle {
            step_indicator_size: size("step_indicator_size", overrides.step_indicator_size, base.step_indicator_size)?,
            current_step_indicator_size: size(
                "current_step_indicator_size",
                overrides.current_step_indicator_size,
                base.current_step_indicator_size,
            )?,
            separator_stroke_width: overrides.separator_stroke_width.unwrap_or(base.separator_stroke_width),
            separator_stroke_unfinished_width: overrides
                .separator_stroke_unfinished_width
                .unwrap_or(base.separator_stroke_unfinished_width),
            separator_stroke_finished_width: overrides
                .separator_stroke_finished_width
                .unwrap_or(base.separator_stroke_finished_width),
            current_step_stroke_width: overrides.current_step_stroke_width.unwrap_or(base.current_step_stroke_width),
            step_stroke_width: overrides.step_stroke_width.unwrap_or(base.step_stroke_width),
            step_stroke_current_color: color(
                "step_stroke_current_color",
                &overrides.step_stroke_current_color,
                base.step_stroke_current_color,
            )?,
            step_stroke_finished_color: color(
                "step_stroke_finished_color",
                &overrides.step_stroke_finished_color,
                base.step_stroke_finished_color,
            )?,
            step_stroke_unfinished_color: color(
                "step_stroke_unfinished_color",
                &overrides.step_stroke_unfinished_color,
                base.step_stroke_unfinished_color,
            )?,
            separator_finished_color: color(
                "separator_finished_color",
                &overrides.separator_finished_color,
                base.separator_finished_color,
            )?,
            separator_unfinished_color: color(
                "separator_unfinished_color",
                &overrides.separator_unfinished_color,
                base.separator_unfinished_color,
            )?,
            step_indicator_finished_color: color(
                "step_indicator_finished_color",
                &overrides.step_indicator_finished_color,
                base.step_indicator_finished_color,
            )?,
            step_indicator_unfinished_color: color(
                "step_indicator_unfinished_color",
                &overrides.step_indicator_unfinished_color,
                base.step_indicator_unfinished_color,
            )?,
            step_indicator_current_color: color(
                "step_indicator_current_color",
                &overrides.step_indicator_current_color,
                base.step_indicator_current_color,
            )?,
            step_indicator_label_font_size: overrides
                .step_indicator_label_font_size
                .unwrap_or(base.step_indicator_label_font_size),
            current_step_indicator_label_font_size: overrides
                .current_step_indicator_label_font_size
                .unwrap_or(base.current_step_indicator_label_font_size),
            step_indicator_label_current_color: color(
                "step_indicator_label_current_color",
                &overrides.step_indicator_label_current_color,
                base.step_indicator_label_current_color,
            )?,
            step_indicator_label_finished_color: color(
                "step_indicator_label_finished_color",
                &overrides.step_indicator_label_finished_color,
                base.step_indicator_label_finished_color,
            )?,
            step_indicator_label_unfinished_color: color(
                "step_indicator_label_unfinished_color",
                &overrides.step_indicator_label_unfinished_color,
                base.step_indicator_label_unfinished_color,
            )?,
            label_color: color("label_color", &overrides.label_color, base.label_color)?,
            label_size: overrides.label_size.unwrap_or(base.label_size),
            label_align: overrides.label_align.unwrap_or(base.label_align),
            current_step_label_color: color(
                "current_step_label_color",
                &overrides.current_step_label_color,
                base.current_step_label_color,
            )?,
            progress_duration: overrides
                .progress_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(base.progress_duration),
            marker_duration: overrides
                .marker_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(base.marker_duration),
        };
        Ok(style)
    }

    /// Thickness of the unfinished track; zero on the variant falls back to the shared width.
    pub fn unfinished_track_width(&self) -> u16 {
        non_zero_or(self.separator_stroke_unfinished_width, self.separator_stroke_width)
    }

    pub fn finished_track_width(&self) -> u16 {
        non_zero_or(self.separator_stroke_finished_width, self.separator_stroke_width)
    }

    /// Largest marker size; the step row is sized to fit it.
    pub fn max_marker_size(&self) -> u16 {
        self.step_indicator_size.max(self.current_step_indicator_size)
    }

    pub fn marker_fill(&self, status: StepStatus) -> Color {
        match status {
            StepStatus::Current => self.step_indicator_current_color,
            StepStatus::Finished => self.step_indicator_finished_color,
            StepStatus::Unfinished => self.step_indicator_unfinished_color,
        }
    }

    /// Border width and color for a marker in the given status.
    pub fn marker_stroke(&self, status: StepStatus) -> (u16, Color) {
        match status {
            StepStatus::Current => (self.current_step_stroke_width, self.step_stroke_current_color),
            StepStatus::Finished => (self.step_stroke_width, self.step_stroke_finished_color),
            StepStatus::Unfinished => (self.step_stroke_width, self.step_stroke_unfinished_color),
        }
    }

    /// Style for the default numeric text inside a marker.
    pub fn marker_text_style(&self, status: StepStatus) -> Style {
        let (color, font_size) = match status {
            StepStatus::Current => (
                self.step_indicator_label_current_color,
                self.current_step_indicator_label_font_size,
            ),
            StepStatus::Finished => (self.step_indicator_label_finished_color, self.step_indicator_label_font_size),
            StepStatus::Unfinished => (self.step_indicator_label_unfinished_color, self.step_indicator_label_font_size),
        };
        emphasize(
            Style::default().fg(color).bg(self.marker_fill(status)),
            font_size,
        )
    }

    /// Style for the default label text; the current step's label gets its own color.
    pub fn label_style(&self, is_current: bool) -> Style {
        let color = if is_current {
            self.current_step_label_color
        } else {
            self.label_color
        };
        emphasize(Style::default().fg(color), self.label_size)
    }

    pub fn track_style(&self, finished: bool) -> Style {
        let color = if finished {
            self.separator_finished_color
        } else {
            self.separator_unfinished_color
        };
        Style::default().bg(color)
    }
}

fn non_zero_or(value: u16, fallback: u16) -> u16 {
    if value == 0 { fallback } else { value }
}

fn emphasize(style: Style, font_size: u16) -> Style {
    if font_size >= defaults::EMPHASIS_FONT_SIZE {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn size(key: &'static str, value: Option<u16>, default: u16) -> Result<u16, StyleError> {
    match value {
        Some(0) => Err(StyleError::ZeroMarkerSize { key }),
        Some(size) => Ok(size),
        None => Ok(default),
    }
}

fn color(key: &'static str, value: &Option<String>, default: Color) -> Result<Color, StyleError> {
    match value {
        Some(raw) => Color::from_str(raw.trim()).map_err(|_| StyleError::InvalidColor {
            key,
            value: raw.clone(),
        }),
        None => Ok(default),
    }
}
