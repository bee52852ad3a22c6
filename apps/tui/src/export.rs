use crate::db::models::{AppState, Stats};
use crate::domain::{format_number, MONTH_LABELS, WEEKDAY_NAMES};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode export: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "dashboard-data.json",
            Self::Csv => "dashboard-data.csv",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    stats: &'a Stats,
    sales_data: &'a [f64],
    analytics_data: &'a [f64],
    exported_at: String,
}

/// Pretty-printed JSON snapshot of the dashboard, stamped with `exported_at`.
pub fn to_json(state: &AppState, exported_at: DateTime<Utc>) -> Result<String, ExportError> {
    let document = ExportDocument {
        stats: &state.stats,
        sales_data: &state.sales_data,
        analytics_data: &state.analytics_data,
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// CSV export: the metric table, then one section per series, separated by
/// blank lines.
pub fn to_csv(state: &AppState) -> Result<String, ExportError> {
    let stats = &state.stats;
    let metrics = vec![
        vec!["Metric".to_string(), "Value".to_string()],
        vec!["Total Users".to_string(), format_number(stats.users)],
        vec!["Revenue".to_string(), format!("${}", format_number(stats.revenue))],
        vec!["Orders".to_string(), format_number(stats.orders)],
        vec![
            "Satisfaction".to_string(),
            format!("{}%", format_number(stats.satisfaction)),
        ],
    ];

    let mut buffer = Vec::new();
    write_section(&mut buffer, &metrics)?;
    buffer.push(b'\n');
    write_section(
        &mut buffer,
        &series_rows("Sales Data (Weekly)", "Day", &state.sales_data, &WEEKDAY_NAMES),
    )?;
    buffer.push(b'\n');
    write_section(
        &mut buffer,
        &series_rows(
            "Analytics Data (Monthly)",
            "Month",
            &state.analytics_data,
            &MONTH_LABELS,
        ),
    )?;

    Ok(String::from_utf8(buffer)?)
}

/// Heading, column header and one row per value. Values past the end of
/// `labels` are labelled with their 1-based position.
fn series_rows(heading: &str, column: &str, values: &[f64], labels: &[&str]) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec![heading.to_string()],
        vec![column.to_string(), "Value".to_string()],
    ];
    rows.extend(values.iter().enumerate().map(|(index, value)| {
        let label = labels
            .get(index)
            .map_or_else(|| (index + 1).to_string(), ToString::to_string);
        vec![label, format_number(*value)]
    }));
    rows
}

fn write_section(buffer: &mut Vec<u8>, rows: &[Vec<String>]) -> Result<(), ExportError> {
    // headings are single-field records
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buffer);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn render(
    format: ExportFormat,
    state: &AppState,
    now: DateTime<Utc>,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json(state, now),
        ExportFormat::Csv => to_csv(state),
    }
}

/// Renders `state` and writes it to `dir`, replacing any earlier export.
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    state: &AppState,
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let contents = render(format, state, now)?;
    let path = dir.join(format.file_name());

    std::fs::write(&path, contents).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), format = format.label(), "exported dashboard data");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn csv_has_metric_and_series_sections() {
        let csv = to_csv(&AppState::default()).unwrap();
        assert!(csv.starts_with("Metric,Value\nTotal Users,1247\n"));
        assert!(csv.contains("Revenue,$45890\n"));
        assert!(csv.contains("Orders,328\n"));
        assert!(csv.contains("Satisfaction,94.5%\n"));
        assert!(csv.contains("\nSales Data (Weekly)\nDay,Value\nMonday,30\n"));
        assert!(csv.contains("Sunday,60\n"));
        assert!(csv.contains("\nAnalytics Data (Monthly)\nMonth,Value\nJan,20\n"));
        assert!(csv.ends_with("Dec,75\n"));
    }

    #[test]
    fn csv_follows_truncated_series() {
        let mut state = AppState::default();
        state.analytics_data.truncate(3);
        let csv = to_csv(&state).unwrap();
        assert!(csv.ends_with("Month,Value\nJan,20\nFeb,35\nMar,40\n"));
    }

    #[test]
    fn csv_numbers_past_label_table() {
        let mut state = AppState::default();
        state.sales_data.push(99.0);
        assert!(to_csv(&state).unwrap().contains("Sunday,60\n8,99\n"));
    }

    #[test]
    fn csv_quotes_labels_that_need_it() {
        let rows = series_rows("Sales, weekly", "Day", &[1.5], &["Mon"]);
        let mut buffer = Vec::new();
        write_section(&mut buffer, &rows).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\"Sales, weekly\"\nDay,Value\nMon,1.5\n"
        );
    }

    #[test]
    fn json_has_expected_shape() {
        let json = to_json(&AppState::default(), stamp()).unwrap();
        assert!(json.contains("\n  \"stats\": {"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["revenue"], 45890.0);
        assert_eq!(value["salesData"].as_array().unwrap().len(), 7);
        assert_eq!(value["analyticsData"].as_array().unwrap().len(), 12);
        assert_eq!(value["exportedAt"], "2024-05-01T12:30:00.000Z");
        assert!(value.get("dateRange").is_none());
    }

    #[test]
    fn writes_and_overwrites_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();

        let path = write_export(dir.path(), ExportFormat::Csv, &state, stamp()).unwrap();
        assert_eq!(path, dir.path().join("dashboard-data.csv"));

        state.stats.users = 5.0;
        write_export(dir.path(), ExportFormat::Csv, &state, stamp()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Total Users,5\n"));

        let json_path = write_export(dir.path(), ExportFormat::Json, &state, stamp()).unwrap();
        assert!(json_path.ends_with("dashboard-data.json"));
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_export(&missing, ExportFormat::Json, &AppState::default(), stamp())
            .unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
