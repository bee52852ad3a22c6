use crate::ui::theme::Styles;
use kpi_dashboard::app::{App, ReportItem};
use kpi_dashboard::domain::{format_number, StatKind, MONTH_LABELS, WEEKDAY_NAMES};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_reports(app: &App, f: &mut Frame<'_>, area: Rect) {
    let styles = Styles::for_theme(app.theme);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(columns[0]);

    let items: Vec<ListItem<'_>> = ReportItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == app.report_index {
                styles.selected()
            } else {
                styles.panel()
            };
            ListItem::new(item.label()).style(style)
        })
        .collect();

    let actions = List::new(items).block(
        Block::default()
            .title(" Actions ")
            .title_style(styles.title())
            .borders(Borders::ALL)
            .border_style(styles.border())
            .style(styles.panel()),
    );
    f.render_widget(actions, left[0]);

    let target = Paragraph::new(vec![
        TextLine::from(Span::styled("Exports are written to", styles.hint())),
        TextLine::from(app.export_dir.display().to_string()),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.border())
            .style(styles.panel()),
    );
    f.render_widget(target, left[1]);

    let header = Row::new(vec![Cell::from("Metric"), Cell::from("Value")])
        .style(styles.title().add_modifier(Modifier::UNDERLINED));

    let mut rows: Vec<Row<'_>> = StatKind::ALL
        .iter()
        .map(|stat| {
            Row::new(vec![
                Cell::from(stat.label()),
                Cell::from(stat.format_value(app.state.stats.get(*stat))),
            ])
        })
        .collect();

    rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
    rows.push(Row::new(vec![Cell::from(Span::styled(
        "Sales (weekly)",
        styles.title(),
    ))]));
    rows.extend(series_rows(&app.state.sales_data, &WEEKDAY_NAMES));

    rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
    rows.push(Row::new(vec![Cell::from(Span::styled(
        "Analytics (monthly)",
        styles.title(),
    ))]));
    rows.extend(series_rows(&app.state.analytics_data, &MONTH_LABELS));

    let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(10)])
        .header(header)
        .block(
            Block::default()
                .title(" Report ")
                .title_style(styles.title())
                .borders(Borders::ALL)
                .border_style(styles.border())
                .style(styles.panel()),
        );
    f.render_widget(table, columns[1]);
}

fn series_rows<'a>(values: &[f64], labels: &[&'a str]) -> Vec<Row<'a>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let label = labels
                .get(index)
                .map_or_else(|| (index + 1).to_string(), ToString::to_string);
            Row::new(vec![Cell::from(label), Cell::from(format_number(*value))])
        })
        .collect()
}
