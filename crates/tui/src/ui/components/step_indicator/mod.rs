//! Step indicator: markers joined by a progress track, with optional labels.

pub mod animation;
pub mod layout;
pub mod state;
#[allow(clippy::module_inception)]
pub mod step_indicator;
pub mod step_indicator_component;

pub use animation::{AnimationTarget, Easing, IndicatorAnimation, Tween};
pub use layout::{IndicatorLayout, LayoutMetrics, fill_extent};
pub use state::StepIndicatorState;
pub use step_indicator::{LabelContext, LabelRenderer, MarkerContext, MarkerRenderer, StepIndicator};
pub use step_indicator_component::StepIndicatorComponent;
