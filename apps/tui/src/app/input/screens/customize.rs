use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Modal};
use crate::domain::StatKind;
use crossterm::event::KeyCode;

pub async fn handle_customize_input(app: &mut App, key: KeyCode) {
    let Some(Modal::Customize { cursor }) = app.modal.as_mut() else {
        return;
    };

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            *cursor = wrap_decrement(*cursor, StatKind::ALL.len());
        }
        KeyCode::Down | KeyCode::Char('j') => {
            *cursor = wrap_increment(*cursor, StatKind::ALL.len());
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(stat) = StatKind::from_index(*cursor) {
                app.toggle_visibility(stat).await;
            }
        }
        KeyCode::Esc | KeyCode::Char('c') => app.close_modal(),
        _ => {}
    }
}
