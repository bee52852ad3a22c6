use crate::ui::widgets::cards::render_stat_cards;
use crate::ui::widgets::charts::{render_line_chart, render_traffic_chart};
use kpi_dashboard::app::{App, ChartId};
use kpi_dashboard::chart::Rgb;
use kpi_dashboard::domain::{SALES_COLOR, WEEKDAY_LABELS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_overview(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_stat_cards(app, f, rows[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let sales = app.state.sales_data.clone();
    render_line_chart(
        app,
        f,
        charts[0],
        ChartId::Sales,
        "Weekly Sales",
        &sales,
        &WEEKDAY_LABELS,
        Rgb::hex(SALES_COLOR),
    );
    render_traffic_chart(app, f, charts[1]);
}
