use crate::ui::theme::Styles;
use crate::ui::widgets::popup::{fixed_centered_rect, ClearWidget};
use kpi_dashboard::app::{App, ConfirmAction, DateField, EditState, Modal};
use kpi_dashboard::domain::StatKind;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn dialog<'a>(title: &'a str, styles: &Styles) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(styles.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles.accent))
        .style(styles.panel())
}

fn show(f: &mut Frame<'_>, area: Rect, paragraph: Paragraph<'_>) {
    f.render_widget(ClearWidget, area);
    f.render_widget(paragraph, area);
}

fn hint_line(pairs: &[(&'static str, &'static str)], styles: &Styles) -> TextLine<'static> {
    let mut spans = Vec::new();
    for (index, (key, action)) in pairs.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", styles.hint()));
        }
        spans.push(Span::styled(*key, styles.key()));
        spans.push(Span::styled(format!(": {action}"), styles.hint()));
    }
    TextLine::from(spans)
}

fn input_line(value: &str, active: bool, styles: &Styles) -> TextLine<'static> {
    let style = if active {
        Style::default()
            .fg(styles.text)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(styles.muted)
    };
    let cursor = if active { "_" } else { "" };
    TextLine::from(Span::styled(format!("{value}{cursor}"), style))
}

pub fn render_modal(app: &App, f: &mut Frame<'_>) {
    let styles = Styles::for_theme(app.theme);
    match &app.modal {
        Some(Modal::Edit(edit)) => render_edit(edit, f, &styles),
        Some(Modal::Customize { cursor }) => render_customize(app, *cursor, f, &styles),
        Some(Modal::DateFilter) => render_date_filter(app, f, &styles),
        Some(Modal::Confirm(action)) => render_confirm(*action, f, &styles),
        None => {}
    }
}

fn render_edit(edit: &EditState, f: &mut Frame<'_>, styles: &Styles) {
    let area = fixed_centered_rect(44, 9, f.area());

    let mut lines = vec![
        TextLine::from(Span::styled(edit.label(), styles.hint())),
        input_line(&edit.input, true, styles),
        TextLine::from(""),
    ];
    match &edit.error {
        Some(error) => lines.push(TextLine::from(Span::styled(
            error.clone(),
            Style::default().fg(styles.error),
        ))),
        None => lines.push(TextLine::from("")),
    }
    lines.push(TextLine::from(""));
    lines.push(hint_line(&[("Enter", "Save"), ("Esc", "Cancel")], styles));

    let paragraph = Paragraph::new(Text::from(lines)).block(dialog(edit.title(), styles));
    show(f, area, paragraph);
}

fn render_customize(app: &App, cursor: usize, f: &mut Frame<'_>, styles: &Styles) {
    let area = fixed_centered_rect(40, 10, f.area());

    let mut lines: Vec<TextLine<'_>> = StatKind::ALL
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let mark = if app.visibility.is_visible(*stat) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if index == cursor {
                styles.selected()
            } else {
                styles.panel()
            };
            TextLine::from(Span::styled(format!("{mark} {}", stat.label()), style))
        })
        .collect();
    lines.push(TextLine::from(""));
    lines.push(hint_line(&[("Space", "Toggle"), ("Esc", "Close")], styles));

    let paragraph =
        Paragraph::new(Text::from(lines)).block(dialog("Customize Dashboard", styles));
    show(f, area, paragraph);
}

fn render_date_filter(app: &App, f: &mut Frame<'_>, styles: &Styles) {
    let area = fixed_centered_rect(44, 10, f.area());
    let inputs = &app.date_inputs;

    let lines = vec![
        TextLine::from(Span::styled("From (YYYY-MM-DD):", styles.hint())),
        input_line(&inputs.from, inputs.field == DateField::From, styles),
        TextLine::from(Span::styled("To (YYYY-MM-DD):", styles.hint())),
        input_line(&inputs.to, inputs.field == DateField::To, styles),
        TextLine::from(""),
        hint_line(
            &[("Tab", "Switch"), ("Enter", "Apply"), ("Esc", "Cancel")],
            styles,
        ),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(dialog("Date Range", styles));
    show(f, area, paragraph);
}

fn render_confirm(action: ConfirmAction, f: &mut Frame<'_>, styles: &Styles) {
    let area = fixed_centered_rect(50, 7, f.area());
    let lines = vec![
        TextLine::from(action.prompt()),
        TextLine::from(""),
        hint_line(&[("y", "Confirm"), ("n", "Cancel")], styles),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog("Confirm", styles));
    show(f, area, paragraph);
}

/// Blocking message drawn above any dialog.
pub fn render_alert(app: &App, f: &mut Frame<'_>) {
    let Some(message) = &app.alert else {
        return;
    };
    let styles = Styles::for_theme(app.theme);
    let area = fixed_centered_rect(46, 6, f.area());
    let lines = vec![
        TextLine::from(Span::styled(
            message.clone(),
            Style::default().fg(styles.error),
        )),
        TextLine::from(""),
        hint_line(&[("Enter", "OK")], &styles),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog("Alert", &styles));
    show(f, area, paragraph);
}
