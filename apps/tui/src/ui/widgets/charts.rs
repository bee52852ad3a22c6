use crate::ui::theme::Styles;
use crate::ui::widgets::canvas::render_draw_list;
use kpi_dashboard::app::charts::pixel_size;
use kpi_dashboard::app::{App, ChartId};
use kpi_dashboard::chart::{draw_line_chart, draw_pie_chart, DrawList, Rgb};
use kpi_dashboard::domain::{TRAFFIC_COLORS, TRAFFIC_DATA, TRAFFIC_LABELS};
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

fn chart_block<'a>(title: &'a str, styles: &Styles) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(styles.title())
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.panel())
}

/// Draws a line chart and records its points for the tooltip layer.
pub fn render_line_chart(
    app: &mut App,
    f: &mut Frame<'_>,
    area: Rect,
    chart: ChartId,
    title: &str,
    values: &[f64],
    labels: &[&'static str],
    line_color: Rgb,
) {
    let styles = Styles::for_theme(app.theme);
    let palette = app.palette();

    let block = chart_block(title, &styles);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let (width, height) = pixel_size(inner);
    let mut surface = DrawList::new(width, height);
    let points = draw_line_chart(&mut surface, values, labels, line_color, &palette);

    render_draw_list(f, inner, &surface, palette.background, Marker::Braille);
    app.charts.record_line(chart, inner, points, labels);
}

/// Draws the traffic-source pie and records its geometry for the tooltip layer.
pub fn render_traffic_chart(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let styles = Styles::for_theme(app.theme);
    let palette = app.palette();

    let block = chart_block("Traffic Sources", &styles);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let colors: Vec<Rgb> = TRAFFIC_COLORS.iter().map(|hex| Rgb::hex(hex)).collect();
    let (width, height) = pixel_size(inner);
    let mut surface = DrawList::new(width, height);
    let geometry = draw_pie_chart(
        &mut surface,
        &TRAFFIC_DATA,
        &TRAFFIC_LABELS,
        &colors,
        &palette,
    );

    render_draw_list(f, inner, &surface, palette.background, Marker::HalfBlock);
    app.charts.record_pie(inner, geometry);
}
