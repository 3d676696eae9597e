use crate::inventory::InventoryState;
use crate::pet::{format_price, Pet};
use crate::ui::layout::scroll_offset;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const DESCRIPTION_WIDTH: usize = 40;
const IMAGE_WIDTH: usize = 32;

pub fn render_pet_list(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &InventoryState,
    selected: usize,
    focused: bool,
) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(" Pets ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner_height = area.height.saturating_sub(2) as usize;

    if state.loading {
        let widget = Paragraph::new(Line::from("Loading...")).block(block);
        frame.render_widget(widget, area);
        return;
    }

    if let Some(error) = &state.error {
        let mut lines = vec![Line::from(""); inner_height.saturating_sub(1) / 2];
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )));
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let visible = state.visible();
    if visible.is_empty() {
        let message = if state.pets.is_empty() {
            "No pets yet. Press 'a' to add one."
        } else {
            "No pets match the search."
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let name_width = visible
        .iter()
        .map(|pet| pet.name.chars().count())
        .max()
        .unwrap_or(0);
    let offset = scroll_offset(selected, inner_height);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner_height)
        .map(|(idx, pet)| {
            let line = pet_line(pet, name_width);
            if idx == selected {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn pet_line(pet: &Pet, name_width: usize) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted_style = Style::default().fg(MUTED_TEXT);
    Line::from(vec![
        Span::styled(
            format!(" {:<width$}", pet.name, width = name_width),
            text_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {} · {}", pet.species, pet.breed), text_style),
        Span::styled(format!("  {}", pet.gender), muted_style),
        Span::styled(format!("  ${}", format_price(pet.price)), text_style),
        Span::styled(format!("  {}", truncate(&pet.image, IMAGE_WIDTH)), muted_style),
        Span::styled(
            format!("  {}", truncate(&pet.description, DESCRIPTION_WIDTH)),
            muted_style,
        ),
    ])
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
