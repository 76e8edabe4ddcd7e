//! Step indicator component.
//!
//! Wraps the [`StepIndicator`] widget in the `Component` trait: advances
//! animations on `Msg::Tick`, applies position and configuration messages,
//! turns mouse clicks and keys into presses, and renders the widget with
//! the optional custom renderers.
//!
//! Every press invokes the optional `on_press` callback exactly once and is
//! reported as `Effect::StepPressed`, whatever the pressed step's status.
//! What a press means is up to the caller.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, layout::Rect, text::Text};
use stepline_types::{Effect, Msg};

use super::{
    StepIndicator,
    step_indicator::{LabelContext, LabelRenderer, MarkerContext, MarkerRenderer},
};
use crate::{app::App, ui::components::component::Component};

type PressCallback = dyn FnMut(usize);

#[derive(Default)]
pub struct StepIndicatorComponent {
    render_marker: Option<Box<MarkerRenderer>>,
    render_label: Option<Box<LabelRenderer>>,
    on_press: Option<Box<PressCallback>>,
    last_tick: Option<Instant>,
}

impl StepIndicatorComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default numeric marker text.
    pub fn with_marker_renderer(mut self, renderer: impl Fn(&MarkerContext) -> Text<'static> + 'static) -> Self {
        self.render_marker = Some(Box::new(renderer));
        self
    }

    /// Replace the default label text.
    pub fn with_label_renderer(mut self, renderer: impl Fn(&LabelContext<'_>) -> Text<'static> + 'static) -> Self {
        self.render_label = Some(Box::new(renderer));
        self
    }

    pub fn on_press(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    fn press(&mut self, position: usize) -> Vec<Effect> {
        if let Some(callback) = self.on_press.as_mut() {
            callback(position);
        }
        vec![Effect::StepPressed(position)]
    }

    /// Advance animations to `now`, measuring from the previous tick.
    fn advance(&mut self, app: &mut App, now: Instant) {
        let delta = self
            .last_tick
            .map(|previous| now.saturating_duration_since(previous))
            .unwrap_or_default();
        let running = app.indicator.tick(delta);
        self.last_tick = running.then_some(now);
    }

    fn key_target(&self, app: &App, code: KeyCode) -> Option<usize> {
        let current = app.indicator.current_position();
        let last = app.indicator.step_count() - 1;
        match code {
            KeyCode::Left | KeyCode::Up => Some(current.saturating_sub(1)),
            KeyCode::Right | KeyCode::Down => Some((current + 1).min(last)),
            KeyCode::Home => Some(0),
            KeyCode::End => Some(last),
            KeyCode::Char(c) => c
                .to_digit(10)
                .filter(|digit| *digit >= 1)
                .map(|digit| digit as usize - 1)
                .filter(|position| *position <= last),
            _ => None,
        }
    }
}

impl Component for StepIndicatorComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => self.advance(app, Instant::now()),
            Msg::SetPosition(position) => {
                app.indicator.set_position(*position);
            }
            Msg::Reconfigure(config) => app.indicator.reconfigure(config.clone()),
            Msg::Resize(..) => {}
        }
        Vec::new()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }
        match self.key_target(app, key.code) {
            Some(position) => self.press(position),
            None => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.indicator.hit_test(mouse.column, mouse.row) {
            Some(position) => self.press(position),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let widget = StepIndicator::new()
            .marker_renderer(self.render_marker.as_deref())
            .label_renderer(self.render_label.as_deref());
        frame.render_stateful_widget(widget, rect, &mut app.indicator);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{Terminal, backend::TestBackend};
    use stepline_types::IndicatorConfig;

    use super::*;
    use crate::ui::style::StepStyle;

    fn app(steps: usize, position: usize) -> App {
        let config = IndicatorConfig::new(steps)
            .unwrap()
            .with_position(position)
            .with_labels((0..steps).map(|i| format!("step {i}")));
        App::new(config, StepStyle::default())
    }

    fn draw(component: &mut StepIndicatorComponent, app: &mut App, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| component.render(frame, frame.area(), app))
            .unwrap();
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn clicking_a_marker_presses_it_once_regardless_of_status() {
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pressed);
        let mut component = StepIndicatorComponent::new().on_press(move |position| sink.borrow_mut().push(position));
        let mut app = app(3, 0);
        draw(&mut component, &mut app, 60, 4);

        // Marker 2 is unfinished; presses are not guarded by status.
        let effects = component.handle_mouse_events(&mut app, click(49, 1));
        assert_eq!(effects, vec![Effect::StepPressed(2)]);
        assert_eq!(*pressed.borrow(), vec![2]);
    }

    #[test]
    fn clicking_a_label_presses_its_step() {
        let mut component = StepIndicatorComponent::new();
        let mut app = app(3, 2);
        draw(&mut component, &mut app, 60, 4);
        let effects = component.handle_mouse_events(&mut app, click(3, 3));
        assert_eq!(effects, vec![Effect::StepPressed(0)]);
    }

    #[test]
    fn non_left_clicks_and_misses_are_ignored() {
        let mut component = StepIndicatorComponent::new();
        let mut app = app(3, 0);
        draw(&mut component, &mut app, 60, 4);
        let mut right = click(49, 1);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        assert!(component.handle_mouse_events(&mut app, right).is_empty());
        assert!(component.handle_mouse_events(&mut app, click(10, 30)).is_empty());
    }

    #[test]
    fn keys_map_to_clamped_presses() {
        let mut component = StepIndicatorComponent::new();
        let mut app = app(4, 3);
        let press = |component: &mut StepIndicatorComponent, app: &mut App, code| {
            component.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE))
        };
        assert_eq!(press(&mut component, &mut app, KeyCode::Right), vec![Effect::StepPressed(3)]);
        assert_eq!(press(&mut component, &mut app, KeyCode::Left), vec![Effect::StepPressed(2)]);
        assert_eq!(press(&mut component, &mut app, KeyCode::Home), vec![Effect::StepPressed(0)]);
        assert_eq!(press(&mut component, &mut app, KeyCode::Char('2')), vec![Effect::StepPressed(1)]);
        assert!(press(&mut component, &mut app, KeyCode::Char('9')).is_empty());
        assert!(press(&mut component, &mut app, KeyCode::Char('0')).is_empty());
    }

    #[test]
    fn set_position_message_restarts_animation() {
        let mut component = StepIndicatorComponent::new();
        let mut app = app(3, 0);
        draw(&mut component, &mut app, 60, 4);
        app.indicator.settle();
        component.handle_message(&mut app, &Msg::SetPosition(2));
        assert_eq!(app.indicator.current_position(), 2);
        assert!(app.indicator.is_animating());
    }

    #[test]
    fn ticks_advance_by_wall_clock_delta() {
        let mut component = StepIndicatorComponent::new();
        let mut app = app(3, 1);
        draw(&mut component, &mut app, 60, 4);
        let start = Instant::now();
        component.advance(&mut app, start);
        component.advance(&mut app, start + Duration::from_millis(400));
        assert!(!app.indicator.is_animating());
        assert_eq!(component.last_tick, None);
        assert_eq!(app.indicator.animation().fill(), 20.0);
    }

    #[test]
    fn custom_renderers_are_used_when_drawing() {
        let mut component = StepIndicatorComponent::new()
            .with_marker_renderer(|_| Text::raw("x"))
            .with_label_renderer(|context| Text::raw(format!("#{}", context.position)));
        let mut app = app(3, 1);
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
        terminal
            .draw(|frame| component.render(frame, frame.area(), &mut app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let labels: String = (0..60u16).map(|x| buffer[(x, 3)].symbol().to_string()).collect();
        assert!(labels.contains("#0"));
        assert!(labels.contains("#2"));
        assert!(!labels.contains("step"));
    }
}
