use crate::ui::theme::Styles;
use crate::ui::widgets::charts::render_line_chart;
use kpi_dashboard::app::{App, ChartId};
use kpi_dashboard::chart::Rgb;
use kpi_dashboard::domain::{ANALYTICS_COLOR, MONTH_LABELS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_analytics(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let styles = Styles::for_theme(app.theme);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8)])
        .split(area);

    let range = &app.state.date_range;
    let range_text = match (range.from, range.to) {
        (Some(from), Some(to)) => format!("{from} to {to}"),
        (Some(from), None) => format!("from {from}"),
        (None, Some(to)) => format!("until {to}"),
        (None, None) => "all months".to_string(),
    };
    let header = TextLine::from(vec![
        Span::styled("Date range: ", styles.hint()),
        Span::styled(range_text, styles.title()),
        Span::styled("   f", styles.key()),
        Span::styled(": filter", styles.hint()),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);

    let analytics = app.state.analytics_data.clone();
    render_line_chart(
        app,
        f,
        rows[1],
        ChartId::Analytics,
        "Monthly Analytics",
        &analytics,
        &MONTH_LABELS,
        Rgb::hex(ANALYTICS_COLOR),
    );
}
