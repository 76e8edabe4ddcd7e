//! Component system for the Stepline TUI.
//!
//! Components are self-contained UI elements: they react to runtime
//! messages and terminal input, mutate the state they are responsible for
//! on [`App`], render themselves into a `Rect`, and report anything the
//! runtime has to act on as [`Effect`]s instead of performing it directly.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use stepline_types::{Effect, Msg};

use crate::app::App;

/// A UI element with its own behavior, rendering into a provided area.
///
/// # Component Lifecycle
///
/// 1. **Initialization**: `init()` is called once before the first frame
/// 2. **Messages**: `handle_message()` receives runtime messages such as `Msg::Tick`
/// 3. **Input**: `handle_key_events()` / `handle_mouse_events()` receive terminal input
/// 4. **Rendering**: `render()` draws into the frame area it is given
///
/// Handlers return the effects the runtime should process. Rendering may
/// record layout measurements on the state it draws, but must not emit
/// effects.
pub trait Component {
    /// Initialize any internal state.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a runtime message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    ///
    /// Coordinates on the event are absolute terminal cells, the same space
    /// the component was last rendered into.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
