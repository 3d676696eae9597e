use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{inner_column, layout_regions};
use crate::ui::pet_form::render_pet_form;
use crate::ui::pet_list::render_pet_list;
use crate::ui::theme::{FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.inventory();

    frame.render_widget(Header::new(app.title()).widget(state, app.is_busy()), regions.header);
    draw_search(frame, regions.search, app);
    render_pet_list(
        frame,
        regions.list,
        state,
        app.selected(),
        app.focus() == Focus::List,
    );
    render_pet_form(
        frame,
        regions.form,
        state,
        app.form_field(),
        app.focus() == Focus::Form,
    );
    frame.render_widget(
        Footer::new().widget(regions.footer, app.focus(), state.notice.as_deref()),
        regions.footer,
    );
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Search;
    let query = &app.inventory().query;
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let text = if query.is_empty() {
        Span::styled("Search pets...", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(query.clone(), Style::default().fg(HEADER_TEXT))
    };
    let widget = Paragraph::new(Line::from(vec![Span::raw(" "), text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);

    if focused && area.height > 2 {
        if let Some(x) = inner_column(area, query.chars().count().saturating_add(1)) {
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
