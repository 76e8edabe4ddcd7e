//! Application state for the step indicator demo.
//!
//! `App` owns the indicator state and a short history of presses. It is the
//! single mutable model shared by every component; the runtime threads it
//! through message handling, effect processing and rendering.

use std::collections::VecDeque;

use stepline_types::{Effect, IndicatorConfig, StepStatus};
use tracing::info;

use crate::ui::{components::step_indicator::StepIndicatorState, style::StepStyle};

/// Number of presses kept for the history panel.
pub const PRESS_HISTORY_LIMIT: usize = 32;

/// One recorded press, with the step's status at the moment it was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressRecord {
    pub position: usize,
    pub status: StepStatus,
}

#[derive(Debug)]
pub struct App {
    pub indicator: StepIndicatorState,
    pub presses: VecDeque<PressRecord>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: IndicatorConfig, style: StepStyle) -> Self {
        Self {
            indicator: StepIndicatorState::new(config, style),
            presses: VecDeque::with_capacity(PRESS_HISTORY_LIMIT),
            should_quit: false,
        }
    }

    /// Record an effect that only touches application state.
    ///
    /// Returns `true` when the effect was fully handled here.
    pub fn apply(&mut self, effect: &Effect) -> bool {
        match effect {
            Effect::StepPressed(position) => {
                self.record_press(*position);
                false
            }
            Effect::Quit => {
                self.should_quit = true;
                true
            }
        }
    }

    fn record_press(&mut self, position: usize) {
        let status = self.indicator.status(position);
        info!(position, %status, "step pressed");
        if self.presses.len() == PRESS_HISTORY_LIMIT {
            self.presses.pop_back();
        }
        self.presses.push_front(PressRecord { position, status });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = IndicatorConfig::new(4).unwrap().with_position(1);
        App::new(config, StepStyle::default())
    }

    #[test]
    fn press_records_status_at_press_time() {
        let mut app = app();
        assert!(!app.apply(&Effect::StepPressed(3)));
        assert!(!app.apply(&Effect::StepPressed(0)));
        let recorded: Vec<PressRecord> = app.presses.iter().copied().collect();
        assert_eq!(
            recorded,
            vec![
                PressRecord {
                    position: 0,
                    status: StepStatus::Finished
                },
                PressRecord {
                    position: 3,
                    status: StepStatus::Unfinished
                },
            ]
        );
    }

    #[test]
    fn history_is_bounded() {
        let mut app = app();
        for _ in 0..(PRESS_HISTORY_LIMIT + 5) {
            app.apply(&Effect::StepPressed(2));
        }
        assert_eq!(app.presses.len(), PRESS_HISTORY_LIMIT);
    }

    #[test]
    fn quit_is_handled_locally() {
        let mut app = app();
        assert!(app.apply(&Effect::Quit));
        assert!(app.should_quit);
    }
}
