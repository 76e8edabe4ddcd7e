//! Rendering for the step indicator.
//!
//! [`StepIndicator`] is a ratatui `StatefulWidget` over
//! [`StepIndicatorState`]. Each render pass lays out the area, reports the
//! measurement to the state, and then draws, back to front: the unfinished
//! track, the finished overlay at the animated fill extent, one marker per
//! step and, when labels are configured, one label per step.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Text,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};
use stepline_types::{Direction, StepStatus};

use super::{layout::IndicatorLayout, state::StepIndicatorState};
use crate::ui::style::StepStyle;

/// Arguments passed to a custom marker renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerContext {
    pub position: usize,
    pub status: StepStatus,
}

/// Arguments passed to a custom label renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelContext<'a> {
    pub position: usize,
    pub status: StepStatus,
    pub label: &'a str,
    pub current_position: usize,
}

/// Replaces the default 1-based number inside a marker.
pub type MarkerRenderer = dyn Fn(&MarkerContext) -> Text<'static>;
/// Replaces the default label text.
pub type LabelRenderer = dyn Fn(&LabelContext<'_>) -> Text<'static>;

#[derive(Default, Clone, Copy)]
pub struct StepIndicator<'a> {
    render_marker: Option<&'a MarkerRenderer>,
    render_label: Option<&'a LabelRenderer>,
}

impl<'a> StepIndicator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_renderer(mut self, renderer: Option<&'a MarkerRenderer>) -> Self {
        self.render_marker = renderer;
        self
    }

    pub fn label_renderer(mut self, renderer: Option<&'a LabelRenderer>) -> Self {
        self.render_label = renderer;
        self
    }

    fn render_tracks(&self, layout: &IndicatorLayout, state: &StepIndicatorState, buf: &mut Buffer) {
        let style = state.style();
        let background = layout.track_rect(layout.track_length, style.unfinished_track_width());
        paint_track(buf, background, style.separator_unfinished_color, layout.direction);

        let extent = state.animation().fill().round().max(0.0) as u16;
        let overlay = layout.track_rect(extent, style.finished_track_width());
        paint_track(buf, overlay, style.separator_finished_color, layout.direction);
    }

    fn render_marker(&self, layout: &IndicatorLayout, state: &StepIndicatorState, position: usize, buf: &mut Buffer) {
        let style = state.style();
        let status = state.status(position);
        let size = if status.is_current() {
            state.animation().marker_size()
        } else {
            f32::from(style.step_indicator_size)
        };
        let area = layout.marker_rect(position, size.round().max(1.0) as u16);
        if area.is_empty() {
            return;
        }

        let fill = Style::default().bg(style.marker_fill(status));
        Clear.render(area, buf);
        let (stroke_width, stroke_color) = style.marker_stroke(status);
        let mut block = Block::default().style(fill);
        if stroke_width > 0 && area.width > 2 && area.height > 2 {
            block = block
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(fill.fg(stroke_color));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let text = match self.render_marker {
            Some(renderer) => renderer(&MarkerContext { position, status }),
            None => Text::styled((position + 1).to_string(), style.marker_text_style(status)),
        };
        let text_area = vertically_centered(inner, text.height());
        Paragraph::new(text)
            .style(fill)
            .alignment(Alignment::Center)
            .render(text_area, buf);
    }

    fn render_label(&self, area: Rect, state: &StepIndicatorState, position: usize, buf: &mut Buffer) {
        let config = state.config();
        let style = state.style();
        let status = state.status(position);
        let label = config.label(position).unwrap_or_default();
        let text = match self.render_label {
            Some(renderer) => renderer(&LabelContext {
                position,
                status,
                label,
                current_position: config.current_position(),
            }),
            None => Text::styled(label.to_string(), style.label_style(status.is_current())),
        };
        let alignment: Alignment = style.label_align.into();
        let area = match config.direction() {
            Direction::Horizontal => area,
            Direction::Vertical => vertically_centered(area, text.height()),
        };
        if area.is_empty() {
            return;
        }
        Paragraph::new(text)
            .alignment(alignment)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl StatefulWidget for StepIndicator<'_> {
    type State = StepIndicatorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let layout = IndicatorLayout::compute(
            area,
            state.step_count(),
            state.config().direction(),
            state.style(),
            state.config().has_labels(),
        );
        state.measure(layout.clone());

        // Nothing to connect until the row has been measured.
        if state.metrics().is_measured() {
            self.render_tracks(&layout, state, buf);
        }
        for position in 0..state.step_count() {
            self.render_marker(&layout, state, position, buf);
        }
        for (position, slot) in layout.label_slots.iter().enumerate() {
            self.render_label(*slot, state, position, buf);
        }
    }
}

/// Draw a track segment: a line glyph when one cell thick, a solid bar otherwise.
fn paint_track(buf: &mut Buffer, area: Rect, color: Color, direction: Direction) {
    if area.is_empty() {
        return;
    }
    let thin = match direction {
        Direction::Horizontal => area.height == 1,
        Direction::Vertical => area.width == 1,
    };
    if !thin {
        buf.set_style(area, Style::default().bg(color));
        return;
    }
    let glyph = match direction {
        Direction::Horizontal => "━",
        Direction::Vertical => "┃",
    };
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_fg(color);
            }
        }
    }
}

fn vertically_centered(area: Rect, lines: usize) -> Rect {
    let lines = u16::try_from(lines).unwrap_or(u16::MAX).clamp(1, area.height.max(1));
    let offset = area.height.saturating_sub(lines) / 2;
    Rect::new(area.x, area.y + offset, area.width, lines.min(area.height))
}
