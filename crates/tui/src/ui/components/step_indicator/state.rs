use std::time::Duration;

use stepline_types::{IndicatorConfig, StepStatus};
use tracing::debug;

use super::{
    animation::{AnimationTarget, IndicatorAnimation},
    layout::{IndicatorLayout, LayoutMetrics, fill_extent},
};
use crate::ui::style::StepStyle;

/// State owned by one step indicator instance.
///
/// Holds the validated configuration, the resolved style, the metrics from
/// the most recent layout pass and the animation driving the fill and the
/// current marker. Every mutation goes through this type on the UI path, so
/// the animation always restarts from a consistent snapshot.
#[derive(Debug, Clone)]
pub struct StepIndicatorState {
    config: IndicatorConfig,
    style: StepStyle,
    metrics: LayoutMetrics,
    layout: Option<IndicatorLayout>,
    animation: IndicatorAnimation,
}

impl StepIndicatorState {
    pub fn new(config: IndicatorConfig, style: StepStyle) -> Self {
        let animation = IndicatorAnimation::new(f32::from(style.step_indicator_size));
        let mut state = Self {
            config,
            style,
            metrics: LayoutMetrics::default(),
            layout: None,
            animation,
        };
        // Mounting counts as a position change.
        state.restart_animation();
        state
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn style(&self) -> &StepStyle {
        &self.style
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn layout(&self) -> Option<&IndicatorLayout> {
        self.layout.as_ref()
    }

    pub fn animation(&self) -> &IndicatorAnimation {
        &self.animation
    }

    pub fn current_position(&self) -> usize {
        self.config.current_position()
    }

    pub fn step_count(&self) -> usize {
        self.config.step_count()
    }

    pub fn status(&self, position: usize) -> StepStatus {
        self.config.status(position)
    }

    /// Move to `position` (clamped). Returns `true` when the effective position changed.
    pub fn set_position(&mut self, position: usize) -> bool {
        let changed = self.config.set_position(position);
        if changed {
            debug!(position = self.config.current_position(), "step indicator position changed");
            self.restart_animation();
        }
        changed
    }

    /// Replace the whole configuration, keeping measured metrics.
    pub fn reconfigure(&mut self, config: IndicatorConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.layout = None;
        self.restart_animation();
    }

    /// Record the result of a layout pass.
    ///
    /// A change in the measured track retargets the fill so it matches the
    /// new geometry. Returns `true` when the metrics changed.
    pub fn measure(&mut self, layout: IndicatorLayout) -> bool {
        let metrics = layout.metrics();
        self.layout = Some(layout);
        if metrics == self.metrics {
            return false;
        }
        debug!(
            width = metrics.width,
            height = metrics.height,
            track_length = metrics.track_length,
            "step indicator measured"
        );
        self.metrics = metrics;
        self.restart_animation();
        true
    }

    /// Advance animations by `delta`. Returns `true` while still animating.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.animation = self.animation.advanced(delta);
        self.animation.is_running()
    }

    /// Jump all animations to their final values.
    pub fn settle(&mut self) {
        self.animation = self.animation.settled();
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Target fill length for the current position and measured track.
    pub fn target_fill(&self) -> f32 {
        fill_extent(self.metrics.track_length, self.config.current_position(), self.config.step_count())
    }

    /// Step under the cell at (`column`, `row`) in the last rendered layout.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.layout.as_ref().and_then(|layout| layout.hit_test(column, row))
    }

    fn restart_animation(&mut self) {
        let target = AnimationTarget {
            fill: self.target_fill(),
            resting_size: f32::from(self.style.step_indicator_size),
            emphasized_size: f32::from(self.style.current_step_indicator_size),
            progress_duration: self.style.progress_duration,
            marker_duration: self.style.marker_duration,
        };
        self.animation = self.animation.retarget(target);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use stepline_types::Direction;

    use super::*;

    fn state(steps: usize, position: usize) -> StepIndicatorState {
        let config = IndicatorConfig::new(steps).unwrap().with_position(position);
        StepIndicatorState::new(config, StepStyle::default())
    }

    fn measure(state: &mut StepIndicatorState, width: u16) -> bool {
        let layout = IndicatorLayout::compute(
            Rect::new(0, 0, width, 3),
            state.step_count(),
            Direction::Horizontal,
            state.style(),
            false,
        );
        state.measure(layout)
    }

    #[test]
    fn mount_starts_animation_with_zero_fill_until_measured() {
        let state = state(3, 1);
        assert!(state.is_animating());
        assert_eq!(state.target_fill(), 0.0);
        assert_eq!(state.metrics(), LayoutMetrics::default());
    }

    #[test]
    fn measurement_retargets_fill() {
        let mut state = state(3, 1);
        assert!(measure(&mut state, 60));
        assert_eq!(state.target_fill(), 20.0);
        assert_eq!(state.animation().target_fill(), 20.0);
        assert!(!measure(&mut state, 60));
        state.settle();
        assert_eq!(state.animation().fill(), 20.0);
    }

    #[test]
    fn position_change_restarts_and_clamps() {
        let mut state = state(3, 0);
        measure(&mut state, 60);
        state.settle();
        assert!(state.set_position(10));
        assert_eq!(state.current_position(), 2);
        assert!(state.is_animating());
        assert_eq!(state.animation().marker_size(), 3.0);
        assert!(!state.set_position(2));
    }

    #[test]
    fn tick_runs_animation_to_completion() {
        let mut state = state(4, 3);
        measure(&mut state, 80);
        let mut ticks = 0;
        while state.tick(Duration::from_millis(16)) {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(state.animation().marker_size(), 5.0);
        assert_eq!(state.animation().fill(), state.target_fill());
    }

    #[test]
    fn reconfigure_restarts_animation_and_keeps_metrics() {
        let mut state = state(3, 1);
        measure(&mut state, 60);
        state.settle();
        let metrics = state.metrics();

        let same = state.config().clone();
        state.reconfigure(same);
        assert!(!state.is_animating());

        let moved = state.config().clone().with_position(2).with_labels(["a", "b", "c"]);
        state.reconfigure(moved);
        assert!(state.is_animating());
        assert!(state.layout().is_none());
        assert_eq!(state.metrics(), metrics);
        assert_eq!(state.target_fill(), 40.0);
        assert_eq!(state.config().label(1), Some("b"));
    }

    #[test]
    fn hit_test_uses_last_layout() {
        let mut state = state(3, 0);
        assert_eq!(state.hit_test(45, 1), None);
        measure(&mut state, 60);
        assert_eq!(state.hit_test(45, 1), Some(2));
    }
}
