use crate::domain::StatKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_STATS: Stats = Stats {
    users: 1247.0,
    revenue: 45890.0,
    orders: 328.0,
    satisfaction: 94.5,
};

pub const DEFAULT_SALES: [f64; 7] = [30.0, 45.0, 35.0, 55.0, 50.0, 65.0, 60.0];
pub const DEFAULT_ANALYTICS: [f64; 12] = [
    20.0, 35.0, 40.0, 30.0, 45.0, 55.0, 50.0, 60.0, 55.0, 65.0, 70.0, 75.0,
];

/// Headline KPI values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub users: f64,
    pub revenue: f64,
    pub orders: f64,
    pub satisfaction: f64,
}

impl Stats {
    pub const fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Users => self.users,
            StatKind::Revenue => self.revenue,
            StatKind::Orders => self.orders,
            StatKind::Satisfaction => self.satisfaction,
        }
    }

    pub fn set(&mut self, stat: StatKind, value: f64) {
        match stat {
            StatKind::Users => self.users = value,
            StatKind::Revenue => self.revenue = value,
            StatKind::Orders => self.orders = value,
            StatKind::Satisfaction => self.satisfaction = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for stat in StatKind::ALL {
            validate_stat(stat, self.get(stat))?;
        }
        Ok(())
    }
}

impl Default for Stats {
    fn default() -> Self {
        DEFAULT_STATS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid positive number")]
    NotANonNegativeNumber,
    #[error("Satisfaction cannot exceed 100%")]
    AboveMaximum,
}

/// Checks a candidate value against the invariants of `stat`.
pub fn validate_stat(stat: StatKind, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::NotANonNegativeNumber);
    }
    if stat.max_value().is_some_and(|max| value > max) {
        return Err(ValidationError::AboveMaximum);
    }
    Ok(())
}

/// Parses the raw text of the edit dialog and validates it for `stat`.
pub fn parse_stat_input(stat: StatKind, input: &str) -> Result<f64, ValidationError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANonNegativeNumber)?;
    validate_stat(stat, value)?;
    Ok(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// The persisted dashboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub stats: Stats,
    pub sales_data: Vec<f64>,
    pub analytics_data: Vec<f64>,
    pub date_range: DateRange,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            stats: DEFAULT_STATS,
            sales_data: DEFAULT_SALES.to_vec(),
            analytics_data: DEFAULT_ANALYTICS.to_vec(),
            date_range: DateRange::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything but `"dark"` is light.
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Which stat cards are shown. Stats without an entry are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityMap(BTreeMap<StatKind, bool>);

impl VisibilityMap {
    pub fn is_visible(&self, stat: StatKind) -> bool {
        self.0.get(&stat).copied().unwrap_or(true)
    }

    pub fn set(&mut self, stat: StatKind, visible: bool) {
        self.0.insert(stat, visible);
    }

    /// Flips a stat and returns its new visibility.
    pub fn toggle(&mut self, stat: StatKind) -> bool {
        let visible = !self.is_visible(stat);
        self.set(stat, visible);
        visible
    }

    pub fn visible_stats(&self) -> Vec<StatKind> {
        StatKind::ALL
            .into_iter()
            .filter(|stat| self.is_visible(*stat))
            .collect()
    }

    /// Full map with an explicit entry for every stat, as written to storage.
    #[must_use]
    pub fn complete(&self) -> Self {
        Self(
            StatKind::ALL
                .into_iter()
                .map(|stat| (stat, self.is_visible(stat)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        assert!(json.get("salesData").is_some());
        assert!(json.get("analyticsData").is_some());
        assert_eq!(json["dateRange"]["from"], serde_json::Value::Null);
        assert_eq!(json["stats"]["satisfaction"], 94.5);
    }

    #[test]
    fn date_range_uses_iso_dates() {
        let range = DateRange {
            from: NaiveDate::from_ymd_opt(2024, 1, 15),
            to: NaiveDate::from_ymd_opt(2024, 3, 1),
        };
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"from":"2024-01-15","to":"2024-03-01"}"#);
    }

    #[test]
    fn stat_input_validation() {
        assert_eq!(parse_stat_input(StatKind::Users, " 1500 "), Ok(1500.0));
        assert_eq!(
            parse_stat_input(StatKind::Users, "abc"),
            Err(ValidationError::NotANonNegativeNumber)
        );
        assert_eq!(
            parse_stat_input(StatKind::Orders, "-1"),
            Err(ValidationError::NotANonNegativeNumber)
        );
        assert_eq!(
            parse_stat_input(StatKind::Satisfaction, "100.5"),
            Err(ValidationError::AboveMaximum)
        );
        assert_eq!(parse_stat_input(StatKind::Satisfaction, "100"), Ok(100.0));
        assert_eq!(parse_stat_input(StatKind::Revenue, "250000"), Ok(250_000.0));
        assert!(parse_stat_input(StatKind::Revenue, "NaN").is_err());
    }

    #[test]
    fn visibility_defaults_to_visible() {
        let mut visibility = VisibilityMap::default();
        assert!(visibility.is_visible(StatKind::Orders));
        assert!(!visibility.toggle(StatKind::Orders));
        assert_eq!(
            visibility.visible_stats(),
            vec![StatKind::Users, StatKind::Revenue, StatKind::Satisfaction]
        );
        let json = serde_json::to_string(&visibility.complete()).unwrap();
        assert_eq!(
            json,
            r#"{"users":true,"revenue":true,"orders":false,"satisfaction":true}"#
        );
    }

    #[test]
    fn theme_parsing_is_lenient() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
