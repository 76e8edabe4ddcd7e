//! Runtime: event loop and input routing for the demo.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode, mouse capture).
//! - Drive a single event loop that handles input and animation ticks.
//! - Route input to `MainView` and execute the returned `Effect`s.
//! - Render only when something visible changed.
//!
//! Event Loop Strategy
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel.
//! - Smart ticking: 16 ms interval only while the indicator animates; 1 s
//!   when idle.
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use stepline_types::{Effect, IndicatorConfig, Msg};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    app::App,
    ui::{
        components::{StepIndicatorComponent, component::Component},
        main_component::MainView,
        style::StepStyle,
    },
};

const FAST_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_secs(1);

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Mouse moves are dropped; only presses matter to the indicator.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved) {
                        continue;
                    }
                    if let Err(error) = sender.blocking_send(event) {
                        warn!("Failed to send event: {}", error);
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

fn tick_interval(period: Duration) -> Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Apply effects until none are left.
///
/// The demo moves the indicator to whichever step was pressed.
pub(crate) fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) {
    let mut queue = effects;
    while !queue.is_empty() {
        let mut follow_up = Vec::new();
        for effect in queue {
            if app.apply(&effect) {
                continue;
            }
            if let Effect::StepPressed(position) = effect {
                follow_up.extend(main_view.handle_message(app, &Msg::SetPosition(position)));
            }
        }
        queue = follow_up;
    }
}

/// Entry point for the runtime: sets up the terminal, runs the event loop
/// and restores the terminal whatever the loop's outcome.
pub async fn run_app(config: IndicatorConfig, style: StepStyle) -> Result<()> {
    let mut main_view = MainView::new(StepIndicatorComponent::new());
    main_view.init()?;
    let mut app = App::new(config, style);

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    info!(
        steps = app.indicator.step_count(),
        position = app.indicator.current_position(),
        "step indicator demo started"
    );

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    info!(presses = app.presses.len(), "step indicator demo stopped");
    outcome
}

async fn event_loop(
    terminal: &mut CrosstermTerminal,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut current_interval = IDLE_INTERVAL;
    let mut ticker = tick_interval(current_interval);

    render(terminal, app, main_view)?;
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let animating = app.indicator.is_animating();
        let target_interval = if animating { FAST_INTERVAL } else { IDLE_INTERVAL };
        if target_interval != current_interval {
            debug!(?target_interval, "tick interval changed");
            current_interval = target_interval;
            ticker = tick_interval(current_interval);
        }

        let mut effects = Vec::new();
        let mut needs_render = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                effects.extend(handle_input_event(app, main_view, event));
                true
            }

            _ = ticker.tick() => on_tick(app, main_view, &mut effects),

            _ = signal::ctrl_c() => { break; }
        };

        if !effects.is_empty() {
            process_effects(app, main_view, effects);
            needs_render = true;
        }
        if app.should_quit {
            break;
        }

        // Some terminals drop resize notifications; compare sizes directly.
        if let Ok(size) = crossterm::terminal::size()
            && last_size != Some(size)
        {
            last_size = Some(size);
            needs_render = true;
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

/// Advance animations by one tick. Returns whether the frame changed, which
/// includes the tick that finishes an animation.
fn on_tick(app: &mut App, main_view: &mut MainView, effects: &mut Vec<Effect>) -> bool {
    let was_animating = app.indicator.is_animating();
    effects.extend(main_view.handle_message(app, &Msg::Tick));
    was_animating
}
