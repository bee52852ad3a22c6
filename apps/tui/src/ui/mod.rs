// UI module for the KPI dashboard
// Draws the controller state each frame

pub mod screens;
pub mod theme;
pub mod widgets;

use kpi_dashboard::app::charts::pixel_to_cell;
use kpi_dashboard::app::App;
use kpi_dashboard::domain::Page;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use tachyonfx::EffectRenderer;
use theme::Styles;
use widgets::popup::ClearWidget;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let styles = Styles::for_theme(app.theme);
    f.render_widget(Block::default().style(styles.base()), f.area());

    if app.loading {
        widgets::loading::render_loading(app, f);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and tabs
            Constraint::Min(10),   // Page content
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, f, layout[0], &styles);

    app.charts.clear();
    match app.page {
        Page::Overview => screens::overview::render_overview(app, f, layout[1]),
        Page::Analytics => screens::analytics::render_analytics(app, f, layout[1]),
        Page::Reports => screens::reports::render_reports(app, f, layout[1]),
        Page::Settings => screens::settings::render_settings(app, f, layout[1]),
    }

    if let Some(effect) = app.reveal_fx.as_mut() {
        f.buffer_mut()
            .render_effect(effect, layout[1], app.last_tick.into());
    }

    render_status(app, f, layout[2], &styles);
    render_shortcuts(f, layout[3], &styles);

    render_tooltip(app, f, &styles);
    screens::modals::render_modal(app, f);
    screens::modals::render_alert(app, f);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles.border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(50)])
        .split(inner);

    let theme_icon = if app.theme.is_dark() { "dark" } else { "light" };
    let title = TextLine::from(vec![
        Span::styled(app.title(), styles.title()),
        Span::styled(format!("  ({theme_icon})"), styles.hint()),
    ]);
    f.render_widget(Paragraph::new(title), columns[0]);

    let titles: Vec<TextLine<'_>> = Page::ALL
        .iter()
        .map(|page| TextLine::from(format!("{} {}", page.index() + 1, page.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(styles.hint())
        .highlight_style(styles.selected())
        .divider(Span::raw("|"));
    f.render_widget(tabs, columns[1]);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(styles.hint())
        .borders(Borders::ALL)
        .border_style(styles.border());

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(styles.error)
    } else {
        Style::default().fg(styles.success)
    };

    let paragraph =
        Paragraph::new(Span::styled(app.status_message.as_str(), style)).block(status_block);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect, styles: &Styles) {
    let pairs = [
        ("1-4", "Pages"),
        ("Enter", "Edit"),
        ("c", "Customize"),
        ("f", "Dates"),
        ("t", "Theme"),
        ("j/v", "Export JSON/CSV"),
        ("r", "Reset"),
        ("q", "Quit"),
    ];

    let mut spans = Vec::new();
    for (index, (key, action)) in pairs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", styles.hint()));
        }
        spans.push(Span::styled(*key, styles.key()));
        spans.push(Span::styled(format!(": {action}"), styles.hint()));
    }

    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_tooltip(app: &App, f: &mut Frame<'_>, styles: &Styles) {
    let Some(active) = &app.tooltip else {
        return;
    };

    let (column, row) = pixel_to_cell(active.area, active.tooltip.x, active.tooltip.y);
    let frame = f.area();
    let width = (active.tooltip.text.chars().count() as u16 + 2).min(frame.width);
    let height = 3.min(frame.height);
    let area = Rect {
        x: column.min(frame.right().saturating_sub(width)),
        y: row.min(frame.bottom().saturating_sub(height)),
        width,
        height,
    };

    let paragraph = Paragraph::new(active.tooltip.text.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(styles.accent))
            .style(styles.panel()),
    );
    f.render_widget(ClearWidget, area);
    f.render_widget(paragraph, area);
}
