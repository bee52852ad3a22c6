use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, ConfirmAction, SettingsItem};
use crossterm::event::KeyCode;

pub async fn handle_settings_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_index = wrap_decrement(app.settings_index, SettingsItem::ALL.len());
        }
        KeyCode::Down => {
            app.settings_index = wrap_increment(app.settings_index, SettingsItem::ALL.len());
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(item) = SettingsItem::ALL.get(app.settings_index) {
                activate(app, *item).await;
            }
        }
        _ => {}
    }
}

async fn activate(app: &mut App, item: SettingsItem) {
    match item {
        SettingsItem::DarkMode => app.toggle_theme().await,
        SettingsItem::Visibility(stat) => app.toggle_visibility(stat).await,
        SettingsItem::ResetData => app.request_confirm(ConfirmAction::ResetData),
        SettingsItem::ClearStorage => app.request_confirm(ConfirmAction::ClearStorage),
    }
}
