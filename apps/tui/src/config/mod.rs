use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_NAME: &str = "dashboard.db";
pub const DEFAULT_LOG_FILE: &str = "dashboard.log";

/// Settings resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub export_dir: PathBuf,
    pub log_path: PathBuf,
    pub debug: bool,
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;
    let db_name =
        env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

    Ok(AppConfig {
        database_url: database_url(&base_dir.join(db_name))?,
        export_dir: get_export_dir(),
        log_path: get_log_path(),
        debug: debug_enabled(),
    })
}

/// Formats a SQLite path the way SQLx expects it: three slashes for absolute
/// paths, two for relative ones.
pub fn database_url(database_path: &Path) -> color_eyre::eyre::Result<String> {
    let path_str = database_path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?;

    // Strip any leading slashes from the path to avoid double slashes
    let clean_path = path_str.trim_start_matches('/');

    if database_path.is_absolute() {
        Ok(format!("sqlite:///{clean_path}"))
    } else {
        Ok(format!("sqlite://{clean_path}"))
    }
}

/// Directory export files are written into
pub fn get_export_dir() -> PathBuf {
    env::var("EXPORT_DIR").map_or_else(|_| PathBuf::from("."), PathBuf::from)
}

pub fn get_log_path() -> PathBuf {
    env::var("DASHBOARD_LOG").map_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_get_three_slashes() {
        let url = database_url(Path::new("/tmp/data/dashboard.db")).unwrap();
        assert_eq!(url, "sqlite:///tmp/data/dashboard.db");
    }

    #[test]
    fn relative_paths_get_two_slashes() {
        let url = database_url(Path::new("data/dashboard.db")).unwrap();
        assert_eq!(url, "sqlite://data/dashboard.db");
    }
}
