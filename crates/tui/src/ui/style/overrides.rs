//! User-supplied style overrides.
//!
//! Every key is optional. Overrides are plain data so they can be read from
//! YAML or JSON configuration, layered with [`StyleOverrides::merged_with`],
//! and only turned into a concrete [`super::StepStyle`] by resolution.

use serde::{Deserialize, Serialize};

use super::LabelAlign;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub step_indicator_size: Option<u16>,
    pub current_step_indicator_size: Option<u16>,
    pub separator_stroke_width: Option<u16>,
    pub separator_stroke_unfinished_width: Option<u16>,
    pub separator_stroke_finished_width: Option<u16>,
    pub current_step_stroke_width: Option<u16>,
    pub step_stroke_width: Option<u16>,

    pub step_stroke_current_color: Option<String>,
    pub step_stroke_finished_color: Option<String>,
    pub step_stroke_unfinished_color: Option<String>,
    pub separator_finished_color: Option<String>,
    pub separator_unfinished_color: Option<String>,
    pub step_indicator_finished_color: Option<String>,
    pub step_indicator_unfinished_color: Option<String>,
    pub step_indicator_current_color: Option<String>,

    pub step_indicator_label_font_size: Option<u16>,
    pub current_step_indicator_label_font_size: Option<u16>,
    pub step_indicator_label_current_color: Option<String>,
    pub step_indicator_label_finished_color: Option<String>,
    pub step_indicator_label_unfinished_color: Option<String>,

    pub label_color: Option<String>,
    pub label_size: Option<u16>,
    pub label_align: Option<LabelAlign>,
    pub current_step_label_color: Option<String>,

    pub progress_duration_ms: Option<u64>,
    pub marker_duration_ms: Option<u64>,
}

impl StyleOverrides {
    /// Layer `later` on top of `self`; keys set in `later` win.
    pub fn merged_with(self, later: StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            step_indicator_size: later.step_indicator_size.or(self.step_indicator_size),
            current_step_indicator_size: later.current_step_indicator_size.or(self.current_step_indicator_size),
            separator_stroke_width: later.separator_stroke_width.or(self.separator_stroke_width),
            separator_stroke_unfinished_width: later
                .separator_stroke_unfinished_width
                .or(self.separator_stroke_unfinished_width),
            separator_stroke_finished_width: later
                .separator_stroke_finished_width
                .or(self.separator_stroke_finished_width),
            current_step_stroke_width: later.current_step_stroke_width.or(self.current_step_stroke_width),
            step_stroke_width: later.step_stroke_width.or(self.step_stroke_width),
            step_stroke_current_color: later.step_stroke_current_color.or(self.step_stroke_current_color),
            step_stroke_finished_color: later.step_stroke_finished_color.or(self.step_stroke_finished_color),
            step_stroke_unfinished_color: later.step_stroke_unfinished_color.or(self.step_stroke_unfinished_color),
            separator_finished_color: later.separator_finished_color.or(self.separator_finished_color),
            separator_unfinished_color: later.separator_unfinished_color.or(self.separator_unfinished_color),
            step_indicator_finished_color: later.step_indicator_finished_color.or(self.step_indicator_finished_color),
            step_indicator_unfinished_color: later
                .step_indicator_unfinished_color
                .or(self.step_indicator_unfinished_color),
            step_indicator_current_color: later.step_indicator_current_color.or(self.step_indicator_current_color),
            step_indicator_label_font_size: later
                .step_indicator_label_font_size
                .or(self.step_indicator_label_font_size),
            current_step_indicator_label_font_size: later
                .current_step_indicator_label_font_size
                .or(self.current_step_indicator_label_font_size),
            step_indicator_label_current_color: later
                .step_indicator_label_current_color
                .or(self.step_indicator_label_current_color),
            step_indicator_label_finished_color: later
                .step_indicator_label_finished_color
                .or(self.step_indicator_label_finished_color),
            step_indicator_label_unfinished_color: later
                .step_indicator_label_unfinished_color
                .or(self.step_indicator_label_unfinished_color),
            label_color: later.label_color.or(self.label_color),
            label_size: later.label_size.or(self.label_size),
            label_align: later.label_align.or(self.label_align),
            current_step_label_color: later.current_step_label_color.or(self.current_step_label_color),
            progress_duration_ms: later.progress_duration_ms.or(self.progress_duration_ms),
            marker_duration_ms: later.marker_duration_ms.or(self.marker_duration_ms),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleOverrides::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layer_wins_on_collision() {
        let base = StyleOverrides {
            label_color: Some("red".into()),
            label_size: Some(11),
            ..Default::default()
        };
        let later = StyleOverrides {
            label_color: Some("blue".into()),
            ..Default::default()
        };
        let merged = base.merged_with(later);
        assert_eq!(merged.label_color.as_deref(), Some("blue"));
        assert_eq!(merged.label_size, Some(11));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<StyleOverrides, _> = serde_json::from_str(r#"{"labelColour": "red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_document_is_empty() {
        let overrides: StyleOverrides = serde_json::from_str("{}").unwrap();
        assert!(overrides.is_empty());
    }
}
