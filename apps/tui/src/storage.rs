//! Fail-soft persistence of the dashboard document, theme and card visibility.
//!
//! Every load falls back to defaults and every save swallows its error after
//! logging it; callers never see a storage failure.

use crate::db::{AppState, KeyValueStore, Theme, VisibilityMap};
use crate::domain::StatKind;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

pub const STORAGE_KEY: &str = "dashboard-data";
pub const THEME_KEY: &str = "dashboard-theme";
pub const VISIBILITY_KEY: &str = "dashboard-visibility";

#[derive(Debug)]
pub struct DashboardStore {
    kv: Box<dyn KeyValueStore>,
}

impl DashboardStore {
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    /// Loads the persisted document layered over `defaults`.
    pub async fn load_state(&self, defaults: &AppState) -> AppState {
        let raw = match self.kv.get(STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return defaults.clone(),
            Err(e) => {
                warn!(error = %e, "failed to read dashboard state, using defaults");
                return defaults.clone();
            }
        };

        match merge_state(defaults, &raw) {
            Ok(state) => {
                debug!("loaded dashboard state");
                state
            }
            Err(reason) => {
                warn!(%reason, "failed to load state, using defaults");
                defaults.clone()
            }
        }
    }

    pub async fn save_state(&self, state: &AppState) {
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "failed to serialize state");
                return;
            }
        };

        if let Err(e) = self.kv.set(STORAGE_KEY, &json).await {
            error!(error = %e, "failed to save state");
        }
    }

    pub async fn load_theme(&self) -> Theme {
        match self.kv.get(THEME_KEY).await {
            Ok(value) => value.as_deref().map_or(Theme::Light, Theme::parse),
            Err(e) => {
                warn!(error = %e, "failed to read theme");
                Theme::Light
            }
        }
    }

    pub async fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.kv.set(THEME_KEY, theme.as_str()).await {
            error!(error = %e, "failed to save theme");
        }
    }

    pub async fn load_visibility(&self) -> VisibilityMap {
        let raw = match self.kv.get(VISIBILITY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return VisibilityMap::default(),
            Err(e) => {
                warn!(error = %e, "failed to read visibility");
                return VisibilityMap::default();
            }
        };

        let entries: BTreeMap<String, bool> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "failed to load visibility");
                return VisibilityMap::default();
            }
        };

        let mut visibility = VisibilityMap::default();
        for (key, visible) in entries {
            match StatKind::parse(&key) {
                Some(stat) => visibility.set(stat, visible),
                None => debug!(key = %key, "ignoring unknown visibility entry"),
            }
        }
        visibility
    }

    pub async fn save_visibility(&self, visibility: &VisibilityMap) {
        let json = match serde_json::to_string(&visibility.complete()) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "failed to serialize visibility");
                return;
            }
        };

        if let Err(e) = self.kv.set(VISIBILITY_KEY, &json).await {
            error!(error = %e, "failed to save visibility");
        }
    }

    /// Wipes every persisted key. Returns whether the wipe succeeded.
    pub async fn clear(&self) -> bool {
        match self.kv.clear().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to clear storage");
                false
            }
        }
    }
}

/// Shallow merge: top-level keys of `raw` replace those of `defaults`.
fn merge_state(defaults: &AppState, raw: &str) -> Result<AppState, String> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Object(overrides) = parsed else {
        return Err("stored state is not a JSON object".to_string());
    };

    let mut merged = serde_json::to_value(defaults).map_err(|e| e.to_string())?;
    if let Value::Object(base) = &mut merged {
        for (key, value) in overrides {
            base.insert(key, value);
        }
    }

    let state: AppState = serde_json::from_value(merged).map_err(|e| e.to_string())?;
    state.stats.validate().map_err(|e| e.to_string())?;
    Ok(state)
}
