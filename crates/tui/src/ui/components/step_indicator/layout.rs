//! Geometry for the step indicator.
//!
//! All functions here are pure: they map the area handed to the widget, the
//! step count, direction and resolved style to cell rectangles. Steps are
//! distributed "space-around": each step owns an equal slot along the main
//! axis and its marker is centered inside that slot. The track runs from
//! the center of the first slot to the center of the last one.

use ratatui::layout::{Position, Rect};
use stepline_types::Direction;

use crate::ui::style::StepStyle;

/// Columns between the step column and the labels in vertical layouts.
const LABEL_GAP: u16 = 1;

/// Terminal rows needed to draw a marker `size` columns wide.
///
/// Cells are roughly twice as tall as they are wide, so a visually round
/// marker needs half as many rows as columns.
pub fn marker_rows(size: u16) -> u16 {
    size.div_ceil(2).max(1)
}

/// Measured size of the step row, recorded the first time (and every time)
/// the indicator is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutMetrics {
    pub width: u16,
    pub height: u16,
    pub track_length: u16,
}

impl LayoutMetrics {
    pub fn is_measured(&self) -> bool {
        self.width != 0 && self.height != 0
    }
}

/// Length of the finished part of the track for `position`.
///
/// A single step has no track to fill; the result is `0.0` instead of a
/// division by zero.
pub fn fill_extent(track_length: u16, position: usize, step_count: usize) -> f32 {
    if step_count <= 1 {
        return 0.0;
    }
    let position = position.min(step_count - 1);
    f32::from(track_length) * position as f32 / (step_count - 1) as f32
}

/// Cell rectangles for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorLayout {
    pub direction: Direction,
    /// Row (or column, when vertical) holding the markers.
    pub step_row: Rect,
    /// One slot per step inside `step_row`.
    pub slots: Vec<Rect>,
    /// One slot per step for labels; empty when there are no labels.
    pub label_slots: Vec<Rect>,
    /// First cell of the track along the main axis.
    pub track_start: u16,
    pub track_length: u16,
}

impl IndicatorLayout {
    pub fn compute(area: Rect, step_count: usize, direction: Direction, style: &StepStyle, with_labels: bool) -> Self {
        let step_count = step_count.max(1);
        match direction {
            Direction::Horizontal => Self::horizontal(area, step_count, style, with_labels),
            Direction::Vertical => Self::vertical(area, step_count, style, with_labels),
        }
    }

    fn horizontal(area: Rect, step_count: usize, style: &StepStyle, with_labels: bool) -> Self {
        let row_height = marker_rows(style.max_marker_size()).min(area.height);
        let step_row = Rect::new(area.x, area.y, area.width, row_height);
        let slots: Vec<Rect> = split_evenly(area.x, area.width, step_count)
            .map(|(x, width)| Rect::new(x, step_row.y, width, step_row.height))
            .collect();

        let label_slots = if with_labels && area.height > row_height {
            let label_y = area.y + row_height;
            let label_height = area.height - row_height;
            slots
                .iter()
                .map(|slot| Rect::new(slot.x, label_y, slot.width, label_height))
                .collect()
        } else {
            Vec::new()
        };

        let (track_start, track_length) = track_span(&slots, |slot| slot.x + slot.width / 2);
        Self {
            direction: Direction::Horizontal,
            step_row,
            slots,
            label_slots,
            track_start,
            track_length,
        }
    }

    fn vertical(area: Rect, step_count: usize, style: &StepStyle, with_labels: bool) -> Self {
        let column_width = style.max_marker_size().min(area.width);
        let step_row = Rect::new(area.x, area.y, column_width, area.height);
        let slots: Vec<Rect> = split_evenly(area.y, area.height, step_count)
            .map(|(y, height)| Rect::new(step_row.x, y, step_row.width, height))
            .collect();

        let label_x = area.x + column_width + LABEL_GAP;
        let label_slots = if with_labels && area.right() > label_x {
            let label_width = area.right() - label_x;
            slots
                .iter()
                .map(|slot| Rect::new(label_x, slot.y, label_width, slot.height))
                .collect()
        } else {
            Vec::new()
        };

        let (track_start, track_length) = track_span(&slots, |slot| slot.y + slot.height / 2);
        Self {
            direction: Direction::Vertical,
            step_row,
            slots,
            label_slots,
            track_start,
            track_length,
        }
    }

    /// Metrics recorded by the "container measured" event.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            width: self.step_row.width,
            height: self.step_row.height,
            track_length: self.track_length,
        }
    }

    /// Track rectangle of the given cross-axis `thickness` covering `extent` cells from the start.
    pub fn track_rect(&self, extent: u16, thickness: u16) -> Rect {
        let extent = extent.min(self.track_length);
        match self.direction {
            Direction::Horizontal => {
                let thickness = thickness.min(self.step_row.height);
                let y = self.step_row.y + (self.step_row.height - thickness) / 2;
                Rect::new(self.track_start, y, extent, thickness)
            }
            Direction::Vertical => {
                let thickness = thickness.min(self.step_row.width);
                let x = self.step_row.x + (self.step_row.width - thickness) / 2;
                Rect::new(x, self.track_start, thickness, extent)
            }
        }
    }

    /// Marker rectangle for step `position` drawn at `size` columns, centered in its slot.
    pub fn marker_rect(&self, position: usize, size: u16) -> Rect {
        let Some(slot) = self.slots.get(position) else {
            return Rect::default();
        };
        let width = size.max(1).min(slot.width);
        let height = marker_rows(size).min(slot.height);
        Rect::new(
            slot.x + (slot.width - width) / 2,
            slot.y + (slot.height - height) / 2,
            width,
            height,
        )
    }

    /// Step whose marker slot or label slot contains the cell at (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.slots
            .iter()
            .position(|slot| slot.contains(position))
            .or_else(|| self.label_slots.iter().position(|slot| slot.contains(position)))
    }
}

/// Split `length` cells starting at `origin` into `parts` contiguous spans.
fn split_evenly(origin: u16, length: u16, parts: usize) -> impl Iterator<Item = (u16, u16)> {
    let length = usize::from(length);
    (0..parts).map(move |index| {
        let start = index * length / parts;
        let end = (index + 1) * length / parts;
        (origin + start as u16, (end - start) as u16)
    })
}

fn track_span(slots: &[Rect], center: impl Fn(&Rect) -> u16) -> (u16, u16) {
    match (slots.first(), slots.last()) {
        (Some(first), Some(last)) => {
            let start = center(first);
            (start, center(last).saturating_sub(start))
        }
        _ => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16, height: u16, steps: usize, direction: Direction, labels: bool) -> IndicatorLayout {
        IndicatorLayout::compute(Rect::new(0, 0, width, height), steps, direction, &StepStyle::default(), labels)
    }

    #[test]
    fn fill_extent_scenarios() {
        assert_eq!(fill_extent(40, 1, 3), 20.0);
        assert_eq!(fill_extent(40, 0, 1), 0.0);
        assert_eq!(fill_extent(40, 7, 3), fill_extent(40, 2, 3));
    }

    #[test]
    fn fill_extent_is_monotonic() {
        let mut previous = 0.0;
        for position in 0..10 {
            let extent = fill_extent(57, position, 10);
            assert!(extent >= previous);
            previous = extent;
        }
    }

    #[test]
    fn horizontal_slots_cover_width_space_around() {
        let layout = layout(60, 3, 3, Direction::Horizontal, false);
        let widths: Vec<u16> = layout.slots.iter().map(|slot| slot.width).collect();
        assert_eq!(widths, vec![20, 20, 20]);
        assert_eq!(layout.track_start, 10);
        assert_eq!(layout.track_length, 40);
        assert_eq!(layout.step_row.height, 3);
        assert!(layout.label_slots.is_empty());
    }

    #[test]
    fn labels_sit_beneath_markers() {
        let layout = layout(60, 5, 3, Direction::Horizontal, true);
        assert_eq!(layout.label_slots.len(), 3);
        assert_eq!(layout.label_slots[1], Rect::new(20, 3, 20, 2));
    }

    #[test]
    fn vertical_layout_places_labels_beside_column() {
        let layout = layout(30, 12, 4, Direction::Vertical, true);
        assert_eq!(layout.step_row, Rect::new(0, 0, 5, 12));
        assert_eq!(layout.slots[2], Rect::new(0, 6, 5, 3));
        assert_eq!(layout.label_slots[2], Rect::new(6, 6, 24, 3));
        assert_eq!(layout.track_start, 1);
        assert_eq!(layout.track_length, 9);
    }

    #[test]
    fn single_step_has_empty_track_in_both_directions() {
        for direction in [Direction::Horizontal, Direction::Vertical] {
            let layout = layout(20, 10, 1, direction, true);
            assert_eq!(layout.track_length, 0);
            assert_eq!(layout.track_rect(5, 1).area(), 0);
            assert_eq!(fill_extent(layout.track_length, 0, 1), 0.0);
        }
    }

    #[test]
    fn marker_is_centered_in_slot() {
        let layout = layout(60, 3, 3, Direction::Horizontal, false);
        assert_eq!(layout.marker_rect(1, 5), Rect::new(27, 0, 5, 3));
        assert_eq!(layout.marker_rect(0, 3), Rect::new(8, 0, 3, 2));
        assert_eq!(layout.marker_rect(9, 3), Rect::default());
    }

    #[test]
    fn track_is_centered_on_marker_row() {
        let layout = layout(60, 3, 3, Direction::Horizontal, false);
        assert_eq!(layout.track_rect(40, 1), Rect::new(10, 1, 40, 1));
        assert_eq!(layout.track_rect(99, 1).width, 40);
    }

    #[test]
    fn hit_test_covers_markers_and_labels() {
        let layout = layout(60, 5, 3, Direction::Horizontal, true);
        assert_eq!(layout.hit_test(45, 1), Some(2));
        assert_eq!(layout.hit_test(5, 4), Some(0));
        assert_eq!(layout.hit_test(5, 9), None);
    }

    #[test]
    fn unmeasured_metrics_report_zero() {
        assert!(!LayoutMetrics::default().is_measured());
        let metrics = layout(60, 3, 3, Direction::Horizontal, false).metrics();
        assert_eq!(metrics, LayoutMetrics { width: 60, height: 3, track_length: 40 });
    }
}
