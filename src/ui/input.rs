use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Route};
use crate::ui::create::CreateIntent;
use crate::ui::dashboard::DashboardIntent;
use crate::ui::detail::{DetailIntent, DetailMode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Dashboard => handle_dashboard_key(app, key),
        Route::Create => handle_create_key(app, key),
        Route::Detail => handle_detail_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_dashboard(DashboardIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_dashboard(DashboardIntent::MoveDown),
        KeyCode::Enter => app.open_selected_habit(),
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

fn handle_create_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.open_dashboard(),
        KeyCode::Enter => app.submit_create(),
        KeyCode::Tab => app.dispatch_create(CreateIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_create(CreateIntent::FocusPrevious),
        KeyCode::Right => app.dispatch_create(CreateIntent::FrequencyNext),
        KeyCode::Left => app.dispatch_create(CreateIntent::FrequencyPrevious),
        KeyCode::Backspace => app.dispatch_create(CreateIntent::Backspace),
        KeyCode::Char(ch) if is_text(key) => app.dispatch_create(CreateIntent::Input(ch)),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    let Some(mode) = app.detail().mode().cloned() else {
        // Loading or error: only navigation.
        if key.code == KeyCode::Esc {
            app.open_dashboard();
        }
        return;
    };

    match mode {
        DetailMode::Viewing => match key.code {
            KeyCode::Esc => app.open_dashboard(),
            KeyCode::Char('c') => app.complete_habit(),
            KeyCode::Char('e') => app.dispatch_detail(DetailIntent::BeginEdit),
            KeyCode::Char('d') => app.dispatch_detail(DetailIntent::DeletePressed),
            KeyCode::Char('r') => app.reload(),
            _ => {}
        },
        DetailMode::Editing { .. } => match key.code {
            // Letters are text here.
            KeyCode::F(2) => app.complete_habit(),
            KeyCode::Esc => app.dispatch_detail(DetailIntent::CancelEdit),
            KeyCode::Enter => app.save_edit(),
            KeyCode::Tab | KeyCode::BackTab => app.dispatch_detail(DetailIntent::ToggleField),
            KeyCode::Backspace => app.dispatch_detail(DetailIntent::Backspace),
            KeyCode::Char(ch) if is_text(key) => app.dispatch_detail(DetailIntent::Input(ch)),
            _ => {}
        },
        DetailMode::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => {
                app.dispatch_detail(DetailIntent::DeleteCancelled)
            }
            _ => {}
        },
    }
}

fn is_text(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
