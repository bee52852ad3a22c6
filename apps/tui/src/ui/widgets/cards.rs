use crate::ui::theme::Styles;
use kpi_dashboard::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Row of KPI cards for the visible stats; the selected card is highlighted.
pub fn render_stat_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let styles = Styles::for_theme(app.theme);
    let stats = app.visible_stats();

    if stats.is_empty() {
        let paragraph = Paragraph::new("All cards are hidden. Press c to customize.")
            .alignment(Alignment::Center)
            .style(styles.hint())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.border()),
            );
        f.render_widget(paragraph, area);
        return;
    }

    let constraints = vec![Constraint::Ratio(1, stats.len() as u32); stats.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, (stat, column)) in stats.iter().zip(columns.iter()).enumerate() {
        let selected = index == app.selected_card;
        let border_style = if selected {
            Style::default()
                .fg(styles.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            styles.border()
        };

        let value = stat.format_value(app.display_value(*stat));
        let lines = vec![
            TextLine::from(Span::styled(stat.label(), styles.hint())),
            TextLine::from(Span::styled(
                value,
                Style::default()
                    .fg(styles.text)
                    .add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                if selected { "Enter to edit" } else { "" },
                styles.hint(),
            )),
        ];

        let card = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .style(styles.panel()),
            );
        f.render_widget(card, *column);
    }
}
