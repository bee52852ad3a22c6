use crate::app::state::App;
use crossterm::event::KeyCode;

pub async fn handle_confirm_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm().await,
        KeyCode::Char('n' | 'N') | KeyCode::Esc => app.close_modal(),
        _ => {}
    }
}
