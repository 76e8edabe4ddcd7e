//! Root view of the demo: the indicator panel, the hint strip and the
//! press log.
//!
//! `MainView` owns the child components, splits the frame between them and
//! routes input. Quit keys and the layout flip are handled here; everything
//! else goes to the step indicator.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use stepline_types::{Direction, Effect, Msg};

use crate::{
    app::App,
    ui::{
        components::{
            Component, HintBarComponent, PressLogComponent,
            step_indicator::{StepIndicatorComponent, layout::marker_rows},
        },
        theme::ThemeRoles,
    },
};

/// Rows reserved for labels under a horizontal indicator.
const LABEL_ROWS: u16 = 2;

/// Width of the press log next to a vertical indicator.
const SIDE_LOG_WIDTH: u16 = 28;

pub struct MainView {
    pub indicator_view: StepIndicatorComponent,
    pub hint_bar_view: HintBarComponent,
    pub press_log_view: PressLogComponent,
    theme: ThemeRoles,
}

impl std::fmt::Debug for MainView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainView").field("theme", &self.theme).finish_non_exhaustive()
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new(StepIndicatorComponent::new())
    }
}

impl MainView {
    pub fn new(indicator_view: StepIndicatorComponent) -> Self {
        let theme = ThemeRoles::default();
        Self {
            indicator_view,
            hint_bar_view: HintBarComponent::new(theme),
            press_log_view: PressLogComponent::new(theme),
            theme,
        }
    }

    /// Outer height of the indicator panel for a horizontal layout, borders included.
    fn horizontal_panel_height(app: &App) -> u16 {
        let state = &app.indicator;
        let label_rows = if state.config().has_labels() { LABEL_ROWS } else { 0 };
        marker_rows(state.style().max_marker_size()) + label_rows + 2
    }

    /// Split the frame into (indicator panel, hint strip, press log).
    fn areas(area: Rect, app: &App) -> (Rect, Rect, Rect) {
        let [body, hints] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        match app.indicator.config().direction() {
            Direction::Horizontal => {
                let [panel, log] = Layout::vertical([
                    Constraint::Length(Self::horizontal_panel_height(app)),
                    Constraint::Min(3),
                ])
                .areas(body);
                (panel, hints, log)
            }
            Direction::Vertical => {
                let [panel, log] =
                    Layout::horizontal([Constraint::Min(10), Constraint::Length(SIDE_LOG_WIDTH)]).areas(body);
                (panel, hints, log)
            }
        }
    }

    /// Swap the layout axis, keeping position and labels.
    fn flip_direction(&mut self, app: &mut App) -> Vec<Effect> {
        let config = app.indicator.config();
        let direction = if config.direction().is_vertical() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let config = config.clone().with_direction(direction);
        self.indicator_view.handle_message(app, &Msg::Reconfigure(config))
    }

    fn is_quit_key(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }
}

impl Component for MainView {
    fn init(&mut self) -> anyhow::Result<()> {
        self.indicator_view.init()?;
        self.hint_bar_view.init()?;
        self.press_log_view.init()
    }

    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        self.indicator_view.handle_message(app, msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Release {
            if Self::is_quit_key(&key) {
                return vec![Effect::Quit];
            }
            if key.code == KeyCode::Char('d') {
                return self.flip_direction(app);
            }
        }
        self.indicator_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.indicator_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let (panel, hints, log) = Self::areas(rect, app);

        let title = format!(
            " Step {} of {} ",
            app.indicator.current_position() + 1,
            app.indicator.step_count()
        );
        let block = self.theme.block(Some(title.as_str()), true);
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        self.indicator_view.render(frame, inner, app);

        self.hint_bar_view.render(frame, hints, app);
        self.press_log_view.render(frame, log, app);
    }
}
