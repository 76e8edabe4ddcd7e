use std::time::Duration;

use ratatui::style::Color;

use super::LabelAlign;

// Marker geometry, in terminal columns.
pub const STEP_INDICATOR_SIZE: u16 = 3;
pub const CURRENT_STEP_INDICATOR_SIZE: u16 = 5;

// Track and marker strokes. Zero on a finished/unfinished variant means "use the shared width".
pub const SEPARATOR_STROKE_WIDTH: u16 = 1;
pub const SEPARATOR_STROKE_UNFINISHED_WIDTH: u16 = 0;
pub const SEPARATOR_STROKE_FINISHED_WIDTH: u16 = 0;
pub const CURRENT_STEP_STROKE_WIDTH: u16 = 1;
pub const STEP_STROKE_WIDTH: u16 = 0;

// Palette
pub const INDIGO: Color = Color::Rgb(0x6A, 0x76, 0xFE); // #6a76fe
pub const VIOLET: Color = Color::Rgb(0x9E, 0x4F, 0xF0); // #9e4ff0
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const HALF_BLACK: Color = Color::Rgb(0x7F, 0x7F, 0x7F); // black at 50% over white

pub const STEP_STROKE_CURRENT_COLOR: Color = INDIGO;
pub const STEP_STROKE_FINISHED_COLOR: Color = INDIGO;
pub const STEP_STROKE_UNFINISHED_COLOR: Color = INDIGO;
pub const SEPARATOR_FINISHED_COLOR: Color = INDIGO;
pub const SEPARATOR_UNFINISHED_COLOR: Color = VIOLET;
pub const STEP_INDICATOR_FINISHED_COLOR: Color = INDIGO;
pub const STEP_INDICATOR_UNFINISHED_COLOR: Color = VIOLET;
pub const STEP_INDICATOR_CURRENT_COLOR: Color = WHITE;

pub const STEP_INDICATOR_LABEL_FONT_SIZE: u16 = 15;
pub const CURRENT_STEP_INDICATOR_LABEL_FONT_SIZE: u16 = 15;
pub const STEP_INDICATOR_LABEL_CURRENT_COLOR: Color = BLACK;
pub const STEP_INDICATOR_LABEL_FINISHED_COLOR: Color = WHITE;
pub const STEP_INDICATOR_LABEL_UNFINISHED_COLOR: Color = HALF_BLACK;

pub const LABEL_COLOR: Color = BLACK;
pub const LABEL_SIZE: u16 = 13;
pub const LABEL_ALIGN: LabelAlign = LabelAlign::Center;
pub const CURRENT_STEP_LABEL_COLOR: Color = INDIGO;

pub const PROGRESS_DURATION: Duration = Duration::from_millis(200);
pub const MARKER_DURATION: Duration = Duration::from_millis(100);

/// Font sizes at or above this threshold render bold; terminals cannot scale glyphs.
pub const EMPHASIS_FONT_SIZE: u16 = 15;
