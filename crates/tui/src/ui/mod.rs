//! UI rendering module for the step indicator demo.
//!
//! Holds the widget and its style resolution, the components hosting it,
//! the chrome theme, and the runtime event loop.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod style;
pub mod theme;
