//! Press log panel: the most recent presses, newest first.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use stepline_types::StepStatus;

use crate::{
    app::{App, PressRecord},
    ui::{components::component::Component, theme::ThemeRoles},
};

#[derive(Debug, Default)]
pub struct PressLogComponent {
    theme: ThemeRoles,
}

impl PressLogComponent {
    pub fn new(theme: ThemeRoles) -> Self {
        Self { theme }
    }

    fn item(&self, record: &PressRecord) -> ListItem<'static> {
        let status_style = match record.status {
            StepStatus::Current => self.theme.accent_emphasis_style(),
            StepStatus::Finished => self.theme.success_style(),
            StepStatus::Unfinished => self.theme.text_muted_style(),
        };
        ListItem::new(Line::from(vec![
            Span::styled(format!("step {}", record.position + 1), self.theme.text_primary_style()),
            Span::raw(" "),
            Span::styled(format!("({})", record.status), status_style),
        ]))
    }
}

impl Component for PressLogComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let block = self.theme.block(Some("Presses"), false);
        if app.presses.is_empty() {
            let empty = Paragraph::new("Nothing pressed yet").style(self.theme.text_muted_style()).block(block);
            frame.render_widget(empty, rect);
            return;
        }
        let items: Vec<ListItem> = app.presses.iter().map(|record| self.item(record)).collect();
        frame.render_widget(List::new(items).block(block), rect);
    }
}
