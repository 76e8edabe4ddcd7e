//! Hint bar component for keyboard shortcuts.
//!
//! Renders the single-line strip listing the demo's key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::App, ui::components::component::Component, ui::theme::ThemeRoles};

const HINTS: &[(&str, &str)] = &[
    ("←/→", " step  "),
    ("Home/End", " first/last  "),
    ("1-9", " jump  "),
    ("click", " press  "),
    ("d", " flip  "),
    ("q", " quit"),
];

#[derive(Debug, Default)]
pub struct HintBarComponent {
    theme: ThemeRoles,
}

impl HintBarComponent {
    pub fn new(theme: ThemeRoles) -> Self {
        Self { theme }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Hints: ", self.theme.text_muted_style())];
        for (key, action) in HINTS {
            spans.push(Span::styled(*key, self.theme.accent_emphasis_style()));
            spans.push(Span::styled(*action, self.theme.text_muted_style()));
        }
        Line::from(spans)
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, _app: &mut App) {
        frame.render_widget(Paragraph::new(self.line()), rect);
    }
}
