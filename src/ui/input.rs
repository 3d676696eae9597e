use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.dismiss_notice();
        return;
    }
    match key.code {
        KeyCode::Tab => {
            app.cycle_focus(true);
            return;
        }
        KeyCode::BackTab => {
            app.cycle_focus(false);
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::List => handle_list_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('a') => app.new_pet(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.set_focus(Focus::List),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if is_plain(key) => app.type_char(ch),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_field(false),
        KeyCode::Down => app.move_field(true),
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if is_plain(key) => app.type_char(ch),
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
