use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_analytics_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.open_date_filter();
    }
}
