use crate::inventory::InventoryState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, state: &InventoryState, busy: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let total = state.pets.len();
        let shown = state.visible().len();
        let count = if state.query.is_empty() {
            format!("{} pets", total)
        } else {
            format!("{} of {} pets", shown, total)
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
        ];
        let status = if state.loading || busy {
            Span::styled("working…", Style::default().fg(MUTED_TEXT))
        } else if state.error.is_some() {
            Span::styled("● offline", Style::default().fg(STATUS_ERROR))
        } else {
            Span::styled("● ready", Style::default().fg(STATUS_OK))
        };
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(status);

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
