use crate::animation::{CounterBoard, EDIT_COUNT_DURATION, STARTUP_COUNT_DURATION};
use crate::app::charts::{ActiveTooltip, ChartCache};
use crate::chart::Palette;
use crate::db::models::{parse_stat_input, DateRange, DEFAULT_STATS};
use crate::db::{AppState, Theme, VisibilityMap};
use crate::domain::{page_title, Page, StatKind};
use crate::export::{write_export, ExportFormat};
use crate::filter::{default_range, filter_by_date_range, parse_date_input, validate_range};
use crate::storage::DashboardStore;
use chrono::{Local, NaiveDate, Utc};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info, warn};

/// How long the loading overlay stays up before persisted state is read.
pub const STARTUP_DELAY: Duration = Duration::from_millis(800);
const REVEAL_MILLIS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ResetData,
    ClearStorage,
}

impl ConfirmAction {
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::ResetData => "Are you sure you want to reset all data to defaults?",
            Self::ClearStorage => {
                "Are you sure you want to clear all saved data? This cannot be undone."
            }
        }
    }
}

/// State of the stat edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub stat: StatKind,
    pub input: String,
    pub error: Option<String>,
}

impl EditState {
    pub const fn title(&self) -> &'static str {
        self.stat.edit_title()
    }

    pub const fn label(&self) -> &'static str {
        self.stat.input_label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    From,
    To,
}

/// Text of the two date filter inputs; kept between openings of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputs {
    pub from: String,
    pub to: String,
    pub field: DateField,
}

impl DateInputs {
    pub fn for_today(today: NaiveDate) -> Self {
        let (from, to) = default_range(today);
        Self {
            from: from.to_string(),
            to: to.to_string(),
            field: DateField::From,
        }
    }

    pub fn active_mut(&mut self) -> &mut String {
        match self.field {
            DateField::From => &mut self.from,
            DateField::To => &mut self.to,
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            DateField::From => DateField::To,
            DateField::To => DateField::From,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Edit(EditState),
    Customize { cursor: usize },
    DateFilter,
    Confirm(ConfirmAction),
}

/// Entries of the settings page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    DarkMode,
    Visibility(StatKind),
    ResetData,
    ClearStorage,
}

impl SettingsItem {
    pub const ALL: [Self; 7] = [
        Self::DarkMode,
        Self::Visibility(StatKind::Users),
        Self::Visibility(StatKind::Revenue),
        Self::Visibility(StatKind::Orders),
        Self::Visibility(StatKind::Satisfaction),
        Self::ResetData,
        Self::ClearStorage,
    ];
}

/// Entries of the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportItem {
    Export(ExportFormat),
    DateFilter,
}

impl ReportItem {
    pub const ALL: [Self; 3] = [
        Self::Export(ExportFormat::Json),
        Self::Export(ExportFormat::Csv),
        Self::DateFilter,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Export(ExportFormat::Json) => "Export JSON",
            Self::Export(ExportFormat::Csv) => "Export CSV",
            Self::DateFilter => "Filter analytics by date",
        }
    }
}

pub struct App {
    pub running: bool,
    pub state: AppState,
    pub theme: Theme,
    pub visibility: VisibilityMap,
    pub page: Page,
    /// Cursor over the visible stat cards.
    pub selected_card: usize,
    pub settings_index: usize,
    pub report_index: usize,
    pub modal: Option<Modal>,
    /// Blocking message shown above everything else.
    pub alert: Option<String>,
    pub date_inputs: DateInputs,
    pub counters: CounterBoard,
    pub charts: ChartCache,
    pub tooltip: Option<ActiveTooltip>,
    pub status_message: String,
    pub export_dir: PathBuf,
    pub loading: bool,
    pub loading_elapsed: Duration,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub throbber: ThrobberState,
    pub reveal_fx: Option<Effect>,
    store: DashboardStore,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("state", &self.state)
            .field("theme", &self.theme)
            .field("page", &self.page)
            .field("modal", &self.modal)
            .field("alert", &self.alert)
            .field("loading", &self.loading)
            .field("status_message", &self.status_message)
            .finish_non_exhaustive()
    }
}

impl App {
    /// A freshly started dashboard: defaults in memory, loading overlay up.
    pub fn new(store: DashboardStore, export_dir: PathBuf) -> Self {
        Self {
            running: true,
            state: AppState::default(),
            theme: Theme::Light,
            visibility: VisibilityMap::default(),
            page: Page::Overview,
            selected_card: 0,
            settings_index: 0,
            report_index: 0,
            modal: None,
            alert: None,
            date_inputs: DateInputs::for_today(Local::now().date_naive()),
            counters: CounterBoard::default(),
            charts: ChartCache::default(),
            tooltip: None,
            status_message: String::new(),
            export_dir,
            loading: true,
            loading_elapsed: Duration::ZERO,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            throbber: ThrobberState::default(),
            reveal_fx: None,
            store,
        }
    }

    pub const fn store(&self) -> &DashboardStore {
        &self.store
    }

    /// Advances timers by the wall time since the previous frame.
    pub async fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.tick(delta).await;
    }

    /// Advances the loading delay, counters and effects by `delta`.
    pub async fn tick(&mut self, delta: Duration) {
        self.last_tick = delta;

        if self.loading {
            self.throbber.calc_next();
            self.loading_elapsed += delta;
            if self.loading_elapsed >= STARTUP_DELAY {
                self.finish_loading().await;
            }
            return;
        }

        self.counters.tick(delta);

        if self.reveal_fx.as_ref().is_some_and(Effect::done) {
            self.reveal_fx = None;
        }
    }

    /// Reads persisted state and starts the counters, ending the loading phase.
    pub async fn finish_loading(&mut self) {
        self.state = self.store.load_state(&AppState::default()).await;
        self.theme = self.store.load_theme().await;
        self.visibility = self.store.load_visibility().await;

        for stat in StatKind::ALL {
            self.counters
                .start(stat, 0.0, self.state.stats.get(stat), STARTUP_COUNT_DURATION);
        }

        self.loading = false;
        self.reveal_fx = Some(fx::coalesce((REVEAL_MILLIS, Interpolation::QuadOut)));
        info!(theme = self.theme.as_str(), "dashboard loaded");
    }

    /// Loads immediately with counters already settled, for non-interactive use.
    pub async fn load(&mut self) {
        self.finish_loading().await;
        self.counters.settle_all();
        self.reveal_fx = None;
    }

    pub fn select_page(&mut self, page: Page) {
        if self.page != page {
            debug!(page = page.as_str(), "switching page");
        }
        self.page = page;
        self.tooltip = None;
        self.charts.clear();
    }

    pub fn title(&self) -> &'static str {
        page_title(self.page.as_str())
    }

    pub fn visible_stats(&self) -> Vec<StatKind> {
        self.visibility.visible_stats()
    }

    pub fn selected_stat(&self) -> Option<StatKind> {
        self.visible_stats().get(self.selected_card).copied()
    }

    /// Value a stat card shows this frame.
    pub fn display_value(&self, stat: StatKind) -> f64 {
        self.counters
            .display_value(stat, self.state.stats.get(stat))
    }

    pub fn open_edit(&mut self, stat: StatKind) {
        self.modal = Some(Modal::Edit(EditState {
            stat,
            input: crate::domain::format_number(self.state.stats.get(stat)),
            error: None,
        }));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Validates the edit dialog input and commits it. Invalid input leaves the
    /// dialog open with an inline error and the stats untouched.
    pub async fn save_edit(&mut self) {
        let Some(Modal::Edit(edit)) = self.modal.as_mut() else {
            return;
        };

        let stat = edit.stat;
        let value = match parse_stat_input(stat, &edit.input) {
            Ok(value) => value,
            Err(e) => {
                debug!(stat = stat.as_str(), input = %edit.input, "rejected stat edit");
                edit.error = Some(e.to_string());
                return;
            }
        };

        let old_value = self.state.stats.get(stat);
        self.state.stats.set(stat, value);
        self.store.save_state(&self.state).await;
        self.counters
            .start(stat, old_value, value, EDIT_COUNT_DURATION);
        self.modal = None;

        info!(stat = stat.as_str(), old_value, value, "stat updated");
        self.status_message = format!("{} updated", stat.label());
    }

    pub async fn set_visibility(&mut self, stat: StatKind, visible: bool) {
        self.visibility.set(stat, visible);
        self.store.save_visibility(&self.visibility).await;
        self.clamp_card_cursor();
        self.status_message = format!(
            "{} {}",
            stat.label(),
            if visible { "shown" } else { "hidden" }
        );
    }

    pub async fn toggle_visibility(&mut self, stat: StatKind) {
        let visible = !self.visibility.is_visible(stat);
        self.set_visibility(stat, visible).await;
    }

    fn clamp_card_cursor(&mut self) {
        let count = self.visible_stats().len();
        if self.selected_card >= count {
            self.selected_card = count.saturating_sub(1);
        }
    }

    /// Applies `theme` and persists it; applying the current theme changes nothing.
    pub async fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save_theme(theme).await;
        self.status_message = format!("Theme: {}", theme.as_str());
    }

    /// Chart colors for the current theme; read on every draw.
    pub const fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    pub async fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled()).await;
    }

    pub fn open_date_filter(&mut self) {
        self.modal = Some(Modal::DateFilter);
    }

    /// Applies the date inputs to the analytics series. Bad input raises an
    /// alert and changes nothing.
    pub async fn apply_date_filter(&mut self) {
        let parsed = parse_date_input(&self.date_inputs.from)
            .and_then(|from| Ok((from, parse_date_input(&self.date_inputs.to)?)))
            .and_then(|(from, to)| validate_range(from, to).map(|()| (from, to)));

        let (from, to) = match parsed {
            Ok(range) => range,
            Err(e) => {
                warn!(error = %e, "rejected date range");
                self.alert = Some(e.to_string());
                return;
            }
        };

        self.state.date_range = DateRange { from, to };
        self.state.analytics_data = filter_by_date_range(&self.state.analytics_data, from, to);
        self.store.save_state(&self.state).await;
        self.modal = None;

        let months = self.state.analytics_data.len();
        info!(?from, ?to, months, "applied date filter");
        self.status_message = format!("Analytics filtered to {months} month(s)");
    }

    pub fn request_confirm(&mut self, action: ConfirmAction) {
        self.modal = Some(Modal::Confirm(action));
    }

    pub async fn confirm(&mut self) {
        let Some(Modal::Confirm(action)) = self.modal.take() else {
            return;
        };
        match action {
            ConfirmAction::ResetData => self.reset_data().await,
            ConfirmAction::ClearStorage => self.clear_storage().await,
        }
    }

    /// Restores the default stats and replays the startup count.
    pub async fn reset_data(&mut self) {
        self.state.stats = DEFAULT_STATS;
        self.store.save_state(&self.state).await;
        for stat in StatKind::ALL {
            self.counters
                .start(stat, 0.0, self.state.stats.get(stat), STARTUP_COUNT_DURATION);
        }
        info!("stats reset to defaults");
        self.status_message = "Data reset to defaults".to_string();
    }

    /// Wipes storage and starts over as on a fresh launch.
    pub async fn clear_storage(&mut self) {
        let cleared = self.store.clear().await;

        self.state = AppState::default();
        self.theme = Theme::Light;
        self.visibility = VisibilityMap::default();
        self.page = Page::Overview;
        self.selected_card = 0;
        self.settings_index = 0;
        self.report_index = 0;
        self.modal = None;
        self.alert = None;
        self.date_inputs = DateInputs::for_today(Local::now().date_naive());
        self.counters.settle_all();
        self.charts.clear();
        self.tooltip = None;
        self.reveal_fx = None;
        self.loading = true;
        self.loading_elapsed = Duration::ZERO;

        self.status_message = if cleared {
            "Saved data cleared".to_string()
        } else {
            "Error: failed to clear saved data".to_string()
        };
    }

    /// Writes the current state to the export directory and reports the
    /// outcome in the status line.
    pub fn export(&mut self, format: ExportFormat) {
        self.status_message = match write_export(&self.export_dir, format, &self.state, Utc::now())
        {
            Ok(path) => format!("Exported {} to {}", format.label(), path.display()),
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Error: {e}")
            }
        };
    }

    /// Updates the tooltip for a pointer at terminal cell (`column`, `row`).
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        self.tooltip = if self.loading {
            None
        } else {
            self.charts.tooltip_at(column, row)
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{draw_line_chart, DrawList, Primitive, Rgb};
    use crate::db::MemoryStore;
    use crate::domain::{SALES_COLOR, WEEKDAY_LABELS};

    fn app() -> App {
        App::new(
            DashboardStore::new(Box::new(MemoryStore::new())),
            PathBuf::from("."),
        )
    }

    #[tokio::test]
    async fn loading_ends_after_startup_delay() {
        let mut app = app();
        app.tick(Duration::from_millis(500)).await;
        assert!(app.loading);
        app.tick(Duration::from_millis(300)).await;
        assert!(!app.loading);
        assert!(app.counters.is_animating());
        assert!(app.display_value(StatKind::Users) < 1247.0);

        app.tick(STARTUP_COUNT_DURATION * 2).await;
        assert_eq!(app.display_value(StatKind::Users), 1247.0);
    }

    fn grid_color(app: &App) -> Option<Rgb> {
        let mut surface = DrawList::new(400.0, 200.0);
        draw_line_chart(
            &mut surface,
            &app.state.sales_data,
            &WEEKDAY_LABELS,
            Rgb::hex(SALES_COLOR),
            &app.palette(),
        );
        surface.primitives().iter().find_map(|primitive| match primitive {
            Primitive::Line { color, .. } => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn header_title_follows_page() {
        let mut app = app();
        assert_eq!(app.title(), "Overview Dashboard");
        app.select_page(Page::Reports);
        assert_eq!(app.title(), "Reports");
    }

    #[tokio::test]
    async fn theme_toggle_recolors_next_chart_draw() {
        let mut app = app();
        app.load().await;
        assert_eq!(grid_color(&app), Some(Rgb::hex("#e0e6ed")));

        app.toggle_theme().await;
        assert_eq!(grid_color(&app), Some(Rgb::hex("#2a2a3e")));

        app.toggle_theme().await;
        assert_eq!(grid_color(&app), Some(Rgb::hex("#e0e6ed")));
    }

    #[tokio::test]
    async fn edit_opens_with_current_value() {
        let mut app = app();
        app.load().await;
        app.open_edit(StatKind::Satisfaction);
        let Some(Modal::Edit(edit)) = &app.modal else {
            panic!("edit dialog should be open");
        };
        assert_eq!(edit.input, "94.5");
        assert_eq!(edit.title(), "Edit Satisfaction (%)");
        assert_eq!(edit.label(), "New Value (0-100):");
    }

    #[tokio::test]
    async fn rejected_edit_keeps_dialog_and_stats() {
        let mut app = app();
        app.load().await;
        app.open_edit(StatKind::Satisfaction);
        if let Some(Modal::Edit(edit)) = app.modal.as_mut() {
            edit.input = "101".to_string();
        }
        app.save_edit().await;

        let Some(Modal::Edit(edit)) = &app.modal else {
            panic!("dialog should stay open");
        };
        assert_eq!(edit.error.as_deref(), Some("Satisfaction cannot exceed 100%"));
        assert_eq!(app.state.stats.satisfaction, 94.5);
    }

    #[tokio::test]
    async fn accepted_edit_animates_to_new_value() {
        let mut app = app();
        app.load().await;
        app.open_edit(StatKind::Orders);
        if let Some(Modal::Edit(edit)) = app.modal.as_mut() {
            edit.input = "400".to_string();
        }
        app.save_edit().await;

        assert!(app.modal.is_none());
        assert_eq!(app.state.stats.orders, 400.0);
        let shown = app.display_value(StatKind::Orders);
        assert!((328.0..400.0).contains(&shown));

        app.tick(EDIT_COUNT_DURATION + Duration::from_millis(100)).await;
        assert_eq!(app.display_value(StatKind::Orders), 400.0);
    }

    #[tokio::test]
    async fn hiding_last_card_clamps_cursor() {
        let mut app = app();
        app.load().await;
        app.selected_card = 3;
        app.toggle_visibility(StatKind::Satisfaction).await;
        assert_eq!(app.selected_card, 2);
        assert_eq!(app.selected_stat(), Some(StatKind::Orders));
    }

    #[tokio::test]
    async fn reversed_date_range_raises_alert() {
        let mut app = app();
        app.load().await;
        app.open_date_filter();
        app.date_inputs.from = "2024-03-01".to_string();
        app.date_inputs.to = "2024-01-01".to_string();
        app.apply_date_filter().await;

        assert_eq!(
            app.alert.as_deref(),
            Some("Start date must be before end date")
        );
        assert_eq!(app.state.analytics_data.len(), 12);
        assert_eq!(app.state.date_range, DateRange::default());
        assert_eq!(app.modal, Some(Modal::DateFilter));
    }

    #[tokio::test]
    async fn empty_date_input_stores_range_without_filtering() {
        let mut app = app();
        app.load().await;
        app.date_inputs.from = String::new();
        app.date_inputs.to = "2024-01-01".to_string();
        app.apply_date_filter().await;

        assert!(app.alert.is_none());
        assert_eq!(app.state.analytics_data.len(), 12);
        assert_eq!(app.state.date_range.to, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[tokio::test]
    async fn reset_restores_default_stats() {
        let mut app = app();
        app.load().await;
        app.state.stats.users = 1.0;
        app.request_confirm(ConfirmAction::ResetData);
        app.confirm().await;
        assert_eq!(app.state.stats, DEFAULT_STATS);
        assert!(app.modal.is_none());
        assert!(app.counters.is_animating());
    }

    #[tokio::test]
    async fn pointer_is_ignored_while_loading() {
        let mut app = app();
        app.pointer_moved(3, 3);
        assert!(app.tooltip.is_none());
    }
}
