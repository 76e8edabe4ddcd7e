//! Shared type definitions for the Stepline step indicator.
//!
//! Everything here is renderer-agnostic: step status derivation, layout
//! direction, the validated indicator configuration, and the messages and
//! effects exchanged between the runtime and UI components.

pub mod config;
pub mod direction;
pub mod status;

pub use config::{ConfigError, IndicatorConfig};
pub use direction::Direction;
pub use status::StepStatus;

/// Messages delivered to components by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick driving animations
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Move the indicator to a new current position
    SetPosition(usize),
    /// Replace the indicator configuration wholesale
    Reconfigure(IndicatorConfig),
}

/// Side effects reported by components back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A step marker or label was pressed
    StepPressed(usize),
    /// Leave the application
    Quit,
}
