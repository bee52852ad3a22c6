use crate::ui::theme::Styles;
use crate::ui::widgets::popup::{fixed_centered_rect, ClearWidget};
use kpi_dashboard::app::App;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

/// Spinner shown while the dashboard waits out its startup delay.
pub fn render_loading(app: &mut App, f: &mut Frame<'_>) {
    let styles = Styles::for_theme(app.theme);
    let area = fixed_centered_rect(32, 3, f.area());

    f.render_widget(ClearWidget, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.panel());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let throbber = Throbber::default()
        .label("Loading dashboard...")
        .style(Style::default().fg(styles.text))
        .throbber_style(Style::default().fg(styles.accent));
    f.render_stateful_widget(throbber, inner, &mut app.throbber);
}
