use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, ReportItem};
use crossterm::event::KeyCode;

pub async fn handle_reports_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.report_index = wrap_decrement(app.report_index, ReportItem::ALL.len());
        }
        KeyCode::Down => {
            app.report_index = wrap_increment(app.report_index, ReportItem::ALL.len());
        }
        KeyCode::Enter | KeyCode::Char(' ') => match ReportItem::ALL.get(app.report_index) {
            Some(ReportItem::Export(format)) => app.export(*format),
            Some(ReportItem::DateFilter) => app.open_date_filter(),
            None => {}
        },
        _ => {}
    }
}
