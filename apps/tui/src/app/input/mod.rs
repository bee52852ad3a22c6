mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyEvent, KeyEventKind};

pub async fn handle_input(app: &mut App, key: KeyEvent) {
    // some terminals report releases too
    if key.kind == KeyEventKind::Release {
        return;
    }
    screens::dispatch_input(app, key).await;
}
