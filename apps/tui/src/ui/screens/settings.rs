use crate::ui::theme::Styles;
use kpi_dashboard::app::{App, SettingsItem};
use ratatui::layout::Rect;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn item_line(app: &App, item: SettingsItem) -> String {
    match item {
        SettingsItem::DarkMode => format!("{} Dark mode", checkbox(app.theme.is_dark())),
        SettingsItem::Visibility(stat) => format!(
            "{} Show {}",
            checkbox(app.visibility.is_visible(stat)),
            stat.label()
        ),
        SettingsItem::ResetData => "    Reset data to defaults".to_string(),
        SettingsItem::ClearStorage => "    Clear all saved data".to_string(),
    }
}

pub fn render_settings(app: &App, f: &mut Frame<'_>, area: Rect) {
    let styles = Styles::for_theme(app.theme);

    let items: Vec<ListItem<'_>> = SettingsItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == app.settings_index {
                styles.selected()
            } else if matches!(item, SettingsItem::ClearStorage) {
                styles.panel().fg(styles.error)
            } else {
                styles.panel()
            };
            ListItem::new(TextLine::from(Span::styled(item_line(app, *item), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Preferences (Up/Down, Enter to change) ")
            .title_style(styles.title())
            .borders(Borders::ALL)
            .border_style(styles.border())
            .style(styles.panel()),
    );
    f.render_widget(list, area);
}
