use crate::app::input::helpers::edit_text;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub async fn handle_date_filter_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.apply_date_filter().await,
        KeyCode::Esc => app.close_modal(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.date_inputs.switch_field();
        }
        _ => {
            edit_text(app.date_inputs.active_mut(), key);
        }
    }
}
