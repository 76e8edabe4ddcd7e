//! # Stepline TUI Library
//!
//! A step-progress indicator widget for ratatui: a row (or column) of step
//! markers joined by a progress track, with optional labels, animated
//! transitions between steps and mouse/keyboard presses.
//!
//! ## Architecture
//!
//! - [`ui::style`] resolves user overrides into an immutable [`StepStyle`].
//! - [`ui::components::step_indicator`] holds the pure layout geometry, the
//!   explicit animation state, the [`StepIndicator`] widget and the
//!   component wrapping it.
//! - [`ui::runtime`] hosts the widget in an interactive demo.

mod app;
pub mod ui;

use anyhow::Result;
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use stepline_types::IndicatorConfig;
use unicode_width::UnicodeWidthStr;

pub use app::{App, PressRecord};
pub use ui::components::step_indicator::{
    LabelContext, MarkerContext, StepIndicator, StepIndicatorComponent, StepIndicatorState,
};
pub use ui::style::{LabelAlign, StepStyle, StyleError, StyleOverrides};

/// Runs the interactive demo until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode and the alternate screen, or when drawing fails.
pub async fn run(config: IndicatorConfig, style: StepStyle) -> Result<()> {
    ui::runtime::run_app(config, style).await
}

/// Renders the indicator once, with animations settled, into an off-screen
/// buffer of `width` x `height` cells and returns its rows as plain text.
///
/// Trailing whitespace is trimmed from every row.
pub fn snapshot(config: IndicatorConfig, style: StepStyle, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut state = StepIndicatorState::new(config, style);

    // The first pass measures the area; the second draws the settled state.
    let mut buffer = Buffer::empty(area);
    StepIndicator::new().render(area, &mut buffer, &mut state);
    state.settle();
    let mut buffer = Buffer::empty(area);
    StepIndicator::new().render(area, &mut buffer, &mut state);

    buffer_lines(&buffer)
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::with_capacity(usize::from(area.width));
            let mut skip = 0usize;
            for x in area.left()..area.right() {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buffer[(x, y)].symbol();
                skip = symbol.width().saturating_sub(1);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect()
}
