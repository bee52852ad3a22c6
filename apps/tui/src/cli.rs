use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "kpi_dashboard", version, about = "KPI dashboard for the terminal")]
pub struct CliArgs {
    /// Print the KPIs and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the JSON export document in headless mode
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Override export directory
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<String>,

    /// Override log file path
    #[arg(long, value_name = "PATH")]
    pub log: Option<String>,
}

impl CliArgs {
    /// Flags win over `.env` and the environment; config reads them back from there.
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(dir) = &self.export_dir {
            std::env::set_var("EXPORT_DIR", dir);
        }
        if let Some(path) = &self.log {
            std::env::set_var("DASHBOARD_LOG", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::parse_from([
            "kpi_dashboard",
            "--headless",
            "--json",
            "--db",
            "data/test.db",
            "--export-dir",
            "out",
            "--log",
            "dash.log",
        ]);
        assert!(args.headless && args.json && !args.debug);
        assert_eq!(args.db.as_deref(), Some("data/test.db"));
        assert_eq!(args.export_dir.as_deref(), Some("out"));
        assert_eq!(args.log.as_deref(), Some("dash.log"));
    }
}
