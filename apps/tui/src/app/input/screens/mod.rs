use crate::app::state::{App, ConfirmAction, Modal};
use crate::domain::Page;
use crate::export::ExportFormat;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

mod analytics;
mod confirm;
mod customize;
mod date_filter;
mod edit;
mod overview;
mod reports;
mod settings;

pub async fn dispatch_input(app: &mut App, key: KeyEvent) {
    if app.loading {
        if is_quit(key) {
            app.quit();
        }
        return;
    }

    if handle_shortcuts(app, key).await {
        return;
    }

    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.alert = None;
        }
        return;
    }

    match app.modal {
        Some(Modal::Edit(_)) => return edit::handle_edit_input(app, key.code).await,
        Some(Modal::Customize { .. }) => {
            return customize::handle_customize_input(app, key.code).await;
        }
        Some(Modal::DateFilter) => {
            return date_filter::handle_date_filter_input(app, key.code).await;
        }
        Some(Modal::Confirm(_)) => return confirm::handle_confirm_input(app, key.code).await,
        None => {}
    }

    if handle_global_input(app, key.code).await {
        return;
    }

    match app.page {
        Page::Overview => overview::handle_overview_input(app, key.code),
        Page::Analytics => analytics::handle_analytics_input(app, key.code),
        Page::Reports => reports::handle_reports_input(app, key.code).await,
        Page::Settings => settings::handle_settings_input(app, key.code).await,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

/// Ctrl (or Cmd, where the terminal reports it) shortcuts work everywhere,
/// dialogs included. Other modified keys are swallowed.
async fn handle_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    let command = KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META;
    if !key.modifiers.intersects(command) {
        return false;
    }

    match key.code {
        KeyCode::Char('e') => app.export(ExportFormat::Json),
        KeyCode::Char('d') => app.toggle_theme().await,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        _ => {}
    }

    true
}

/// Keys shared by every page while no dialog is open.
async fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            if let Some(page) = Page::from_index(index) {
                app.select_page(page);
            }
        }
        KeyCode::Tab => {
            let index = wrap_increment(app.page.index(), Page::ALL.len());
            app.select_page(Page::ALL[index]);
        }
        KeyCode::BackTab => {
            let index = wrap_decrement(app.page.index(), Page::ALL.len());
            app.select_page(Page::ALL[index]);
        }
        KeyCode::Char('c') => app.modal = Some(Modal::Customize { cursor: 0 }),
        KeyCode::Char('f') => app.open_date_filter(),
        KeyCode::Char('t') => app.toggle_theme().await,
        KeyCode::Char('j') => app.export(ExportFormat::Json),
        KeyCode::Char('v') => app.export(ExportFormat::Csv),
        KeyCode::Char('r') => app.request_confirm(ConfirmAction::ResetData),
        KeyCode::Char('X') => app.request_confirm(ConfirmAction::ClearStorage),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => {
            app.tooltip = None;
            app.status_message.clear();
        }
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::storage::DashboardStore;
    use std::path::PathBuf;

    async fn loaded_app() -> App {
        let mut app = App::new(
            DashboardStore::new(Box::new(MemoryStore::new())),
            PathBuf::from("."),
        );
        app.load().await;
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn number_keys_and_tab_navigate() {
        let mut app = loaded_app().await;
        dispatch_input(&mut app, press(KeyCode::Char('3'))).await;
        assert_eq!(app.page, Page::Reports);
        dispatch_input(&mut app, press(KeyCode::Tab)).await;
        assert_eq!(app.page, Page::Settings);
        dispatch_input(&mut app, press(KeyCode::Tab)).await;
        assert_eq!(app.page, Page::Overview);
        dispatch_input(&mut app, press(KeyCode::BackTab)).await;
        assert_eq!(app.page, Page::Settings);
    }

    #[tokio::test]
    async fn ctrl_d_toggles_theme_even_in_dialogs() {
        let mut app = loaded_app().await;
        app.open_edit(crate::domain::StatKind::Users);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        dispatch_input(&mut app, ctrl_d).await;
        assert!(app.theme.is_dark());
        assert!(app.modal.is_some());
    }

    #[tokio::test]
    async fn cmd_shortcuts_match_ctrl() {
        let mut app = loaded_app().await;
        let cmd_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::SUPER);
        dispatch_input(&mut app, cmd_d).await;
        assert!(app.theme.is_dark());

        let meta_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::META);
        dispatch_input(&mut app, meta_d).await;
        assert!(!app.theme.is_dark());

        let dir = tempfile::tempdir().unwrap();
        app.export_dir = dir.path().to_path_buf();
        let cmd_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::SUPER);
        dispatch_input(&mut app, cmd_e).await;
        assert!(dir.path().join("dashboard-data.json").exists());

        // Cmd+C is copy, not quit
        let cmd_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::SUPER);
        dispatch_input(&mut app, cmd_c).await;
        assert!(app.running);
        assert!(app.modal.is_none());
    }

    #[tokio::test]
    async fn escape_closes_dialogs() {
        let mut app = loaded_app().await;
        dispatch_input(&mut app, press(KeyCode::Char('c'))).await;
        assert!(matches!(app.modal, Some(Modal::Customize { .. })));
        dispatch_input(&mut app, press(KeyCode::Esc)).await;
        assert!(app.modal.is_none());

        dispatch_input(&mut app, press(KeyCode::Char('X'))).await;
        assert_eq!(app.modal, Some(Modal::Confirm(ConfirmAction::ClearStorage)));
        dispatch_input(&mut app, press(KeyCode::Esc)).await;
        assert!(app.modal.is_none());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn alert_swallows_keys_until_dismissed() {
        let mut app = loaded_app().await;
        app.alert = Some("Start date must be before end date".to_string());
        dispatch_input(&mut app, press(KeyCode::Char('2'))).await;
        assert_eq!(app.page, Page::Overview);
        dispatch_input(&mut app, press(KeyCode::Enter)).await;
        assert!(app.alert.is_none());
    }

    #[tokio::test]
    async fn only_quit_works_while_loading() {
        let mut app = App::new(
            DashboardStore::new(Box::new(MemoryStore::new())),
            PathBuf::from("."),
        );
        dispatch_input(&mut app, press(KeyCode::Char('2'))).await;
        assert_eq!(app.page, Page::Overview);
        dispatch_input(&mut app, press(KeyCode::Char('q'))).await;
        assert!(!app.running);
    }
}
