use crate::app::input::helpers::edit_text;
use crate::app::state::{App, Modal};
use crossterm::event::KeyCode;

pub async fn handle_edit_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.save_edit().await,
        KeyCode::Esc => app.close_modal(),
        _ => {
            if let Some(Modal::Edit(edit)) = app.modal.as_mut() {
                if edit_text(&mut edit.input, key) {
                    edit.error = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::domain::StatKind;
    use crate::storage::DashboardStore;
    use std::path::PathBuf;

    #[tokio::test]
    async fn typing_replaces_error_and_enter_saves() {
        let mut app = App::new(
            DashboardStore::new(Box::new(MemoryStore::new())),
            PathBuf::from("."),
        );
        app.load().await;
        app.open_edit(StatKind::Users);

        for _ in 0..4 {
            handle_edit_input(&mut app, KeyCode::Backspace).await;
        }
        handle_edit_input(&mut app, KeyCode::Char('x')).await;
        handle_edit_input(&mut app, KeyCode::Enter).await;
        let Some(Modal::Edit(edit)) = &app.modal else {
            panic!("dialog should stay open");
        };
        assert_eq!(
            edit.error.as_deref(),
            Some("Please enter a valid positive number")
        );

        handle_edit_input(&mut app, KeyCode::Backspace).await;
        for ch in "2000".chars() {
            handle_edit_input(&mut app, KeyCode::Char(ch)).await;
        }
        handle_edit_input(&mut app, KeyCode::Enter).await;
        assert!(app.modal.is_none());
        assert_eq!(app.state.stats.users, 2000.0);
    }
}
