use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Weekday labels for the sales chart, in series order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Full weekday names used by the CSV export.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month abbreviations for the analytics chart and CSV export.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const TRAFFIC_LABELS: [&str; 4] = ["Direct", "Social", "Referral", "Organic"];
pub const TRAFFIC_DATA: [f64; 4] = [40.0, 30.0, 20.0, 10.0];
pub const TRAFFIC_COLORS: [&str; 4] = ["#667eea", "#764ba2", "#f093fb", "#4facfe"];

pub const SALES_COLOR: &str = "#667eea";
pub const ANALYTICS_COLOR: &str = "#764ba2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Users,
    Revenue,
    Orders,
    Satisfaction,
}

impl StatKind {
    pub const ALL: [Self; 4] = [Self::Users, Self::Revenue, Self::Orders, Self::Satisfaction];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Revenue => "revenue",
            Self::Orders => "orders",
            Self::Satisfaction => "satisfaction",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Users),
            1 => Some(Self::Revenue),
            2 => Some(Self::Orders),
            3 => Some(Self::Satisfaction),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Users => 0,
            Self::Revenue => 1,
            Self::Orders => 2,
            Self::Satisfaction => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "users" => Some(Self::Users),
            "revenue" => Some(Self::Revenue),
            "orders" => Some(Self::Orders),
            "satisfaction" => Some(Self::Satisfaction),
            _ => None,
        }
    }

    /// Card caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Total Users",
            Self::Revenue => "Revenue",
            Self::Orders => "Orders",
            Self::Satisfaction => "Satisfaction",
        }
    }

    pub const fn edit_title(self) -> &'static str {
        match self {
            Self::Users => "Edit Total Users",
            Self::Revenue => "Edit Revenue ($)",
            Self::Orders => "Edit Orders",
            Self::Satisfaction => "Edit Satisfaction (%)",
        }
    }

    pub const fn input_label(self) -> &'static str {
        match self {
            Self::Satisfaction => "New Value (0-100):",
            _ => "New Value:",
        }
    }

    /// Upper bound accepted by the edit dialog, if any.
    pub const fn max_value(self) -> Option<f64> {
        match self {
            Self::Satisfaction => Some(100.0),
            _ => None,
        }
    }

    /// Formats a (possibly mid-animation) value the way the stat card shows it.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Revenue => format!("${}", group_thousands(value)),
            Self::Satisfaction => format!("{value:.1}%"),
            Self::Users | Self::Orders => group_thousands(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Analytics,
    Reports,
    Settings,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Analytics, Self::Reports, Self::Settings];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Analytics => "analytics",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Analytics),
            2 => Some(Self::Reports),
            3 => Some(Self::Settings),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Analytics => 1,
            Self::Reports => 2,
            Self::Settings => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "overview" => Some(Self::Overview),
            "analytics" => Some(Self::Analytics),
            "reports" => Some(Self::Reports),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Tab caption in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Analytics",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview Dashboard",
            Self::Analytics => "Analytics",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }
}

/// Looks up a page title by navigation key, falling back to a generic title.
pub fn page_title(key: &str) -> &'static str {
    Page::parse(key).map_or("Dashboard", Page::title)
}

/// Shortest decimal rendering of a number: `45890`, `94.5`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{value}")
}

/// Whole part of `value` with comma thousands separators: `45,890`.
fn group_thousands(value: f64) -> String {
    (value.floor() as i64).to_formatted_string(&Locale::en)
}
