//! UI components: step indicator, hint bar, press log.

pub mod component;
pub mod hint_bar;
pub mod press_log;
pub mod step_indicator;

pub use component::*;
pub use hint_bar::HintBarComponent;
pub use press_log::PressLogComponent;
pub use step_indicator::StepIndicatorComponent;
