use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for `focus`, or the notice when one is pending.
    pub fn widget(&self, area: Rect, focus: Focus, notice: Option<&str>) -> Paragraph<'static> {
        let (text, text_style) = match notice {
            Some(notice) => (
                format!(" {}  (Ctrl+N: Dismiss)", notice),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                hints(focus).to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let version_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), version_style),
            Span::styled(version, version_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::List => {
            " ↑/↓: Move │ Enter: Edit │ a: Add │ d: Delete │ /: Search │ r: Reload │ Tab: Focus │ q: Quit"
        }
        Focus::Search => " Type to filter │ Enter/Esc: Back to list │ Tab: Focus │ Ctrl+Q: Quit",
        Focus::Form => " ↑/↓: Field │ Enter: Save │ Esc: Cancel │ Tab: Focus │ Ctrl+Q: Quit",
    }
}
