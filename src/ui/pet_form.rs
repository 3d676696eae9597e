use crate::inventory::InventoryState;
use crate::pet::PetField;
use crate::ui::layout::inner_column;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Widest label plus ": ".
const LABEL_WIDTH: usize = 13;

pub fn render_pet_form(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &InventoryState,
    field: PetField,
    focused: bool,
) {
    let (title, action) = if state.is_editing() {
        (" Edit Pet ", "Update Pet")
    } else {
        (" Add a Pet ", "Add Pet")
    };
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let mut lines = Vec::with_capacity(PetField::ALL.len() + 2);
    for candidate in PetField::ALL {
        let value = state.form.input(candidate);
        let label = format!("{:<width$}", format!("{}:", candidate.label()), width = LABEL_WIDTH);
        let value_span = if value.is_empty() {
            Span::styled(candidate.label().to_string(), Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(value, Style::default().fg(HEADER_TEXT))
        };
        let line = Line::from(vec![
            Span::styled(format!(" {}", label), Style::default().fg(MUTED_TEXT)),
            value_span,
        ]);
        lines.push(if focused && candidate == field {
            line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            line
        });
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" [Enter] "),
        Span::styled(action, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if focused {
        if let Some(position) = cursor_position(area, state, field) {
            frame.set_cursor_position(position);
        }
    }
}

/// Cursor after the typed text of `field`, if it fits inside the form.
fn cursor_position(area: Rect, state: &InventoryState, field: PetField) -> Option<(u16, u16)> {
    let index = PetField::ALL.iter().position(|candidate| *candidate == field)?;
    let typed = state.form.input(field).chars().count();
    let x = inner_column(area, typed.saturating_add(LABEL_WIDTH + 1))?;
    let y = area.y.checked_add(1)?.checked_add(u16::try_from(index).ok()?)?;
    (y < area.bottom().saturating_sub(1)).then_some((x, y))
}
