//! Colors for the demo chrome around the indicator.
//!
//! The indicator itself is styled by [`crate::ui::style::StepStyle`]; this
//! palette only covers panel borders, titles, hints and the press log.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

// Dracula palette (https://draculatheme.com/contribute)
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const GREEN: Color = Color::Rgb(0x50, 0xFA, 0x7B); // #50fa7b
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6

/// Semantic color roles used by the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRoles {
    pub border: Color,
    pub focus: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent_primary: Color,
    pub success: Color,
}

impl Default for ThemeRoles {
    fn default() -> Self {
        Self {
            border: CURRENT_LINE,
            focus: CYAN,
            text: FOREGROUND,
            text_secondary: COMMENT,
            text_muted: COMMENT,
            accent_primary: PINK,
            success: GREEN,
        }
    }
}

impl ThemeRoles {
    pub fn text_primary_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.focus } else { self.border };
        Style::default().fg(color)
    }

    /// Key names in hint strips.
    pub fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.accent_primary).add_modifier(Modifier::BOLD)
    }

    /// Build a standard bordered panel with an optional bold title.
    pub fn block<'a>(&self, title: Option<&'a str>, focused: bool) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(self.border_style(focused));
        if let Some(title) = title {
            block = block.title(Span::styled(
                title,
                Style::default().fg(self.text_secondary).add_modifier(Modifier::BOLD),
            ));
        }
        block
    }
}
