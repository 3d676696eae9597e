use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: header, search bar, list and form side
/// by side, footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub list: Rect,
    pub form: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    Regions {
        header: rows[0],
        search: rows[1],
        list: body[0],
        form: body[1],
        footer: rows[3],
    }
}

/// First row to draw so that `selected` stays inside a window of `height`.
pub fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    selected.saturating_sub(height - 1)
}

/// Column `offset` cells past the left border of a bordered `area`, or
/// `None` if that would land on or beyond the right border.
pub fn inner_column(area: Rect, offset: usize) -> Option<u16> {
    let offset = u16::try_from(offset).ok()?;
    let x = area.x.checked_add(1)?.checked_add(offset)?;
    (x < area.right().saturating_sub(1)).then_some(x)
}
