use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_overview_input(app: &mut App, key: KeyCode) {
    let cards = app.visible_stats().len();

    match key {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => {
            app.selected_card = wrap_decrement(app.selected_card, cards);
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => {
            app.selected_card = wrap_increment(app.selected_card, cards);
        }
        KeyCode::Enter | KeyCode::Char(' ' | 'e') => {
            if let Some(stat) = app.selected_stat() {
                app.open_edit(stat);
            }
        }
        _ => {}
    }
}
