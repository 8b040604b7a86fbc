pub mod schema;
pub mod watcher;

pub use schema::{DashConfig, ExportConfig, SimulationConfig, ThemeConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use chrono::format::{Item, StrftimeItems};
use dash_core::{DashError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DashConfig::default()` if
/// the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<DashConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DashConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| DashError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<DashConfig> {
    let config: DashConfig =
        toml::from_str(raw).map_err(|e| DashError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

/// Reject settings the dashboard cannot run with.
pub fn validate(config: &DashConfig) -> Result<()> {
    let sim = &config.simulation;

    if sim.min_interval_ms == 0 {
        return Err(DashError::Config("min_interval_ms must be at least 1".into()));
    }
    if sim.min_interval_ms > sim.max_interval_ms {
        return Err(DashError::Config(format!(
            "min_interval_ms ({}) exceeds max_interval_ms ({})",
            sim.min_interval_ms, sim.max_interval_ms
        )));
    }
    if !(sim.min_interval_ms..=sim.max_interval_ms).contains(&sim.interval_ms) {
        return Err(DashError::Config(format!(
            "interval_ms ({}) outside {}..={}",
            sim.interval_ms, sim.min_interval_ms, sim.max_interval_ms
        )));
    }
    if sim.step_ms == 0 {
        return Err(DashError::Config("step_ms must be at least 1".into()));
    }
    if sim.history_capacity == 0 {
        return Err(DashError::Config("history_capacity must be at least 1".into()));
    }
    if StrftimeItems::new(&sim.timestamp_format).any(|item| matches!(item, Item::Error)) {
        return Err(DashError::Config(format!(
            "invalid timestamp_format '{}'",
            sim.timestamp_format
        )));
    }

    Ok(())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    base.join("sensordash").join("sensordash.toml")
}

/// Resolve the export directory: the configured one, else `~/Downloads`
/// when present, else the working directory.
pub fn export_dir(config: &ExportConfig) -> PathBuf {
    if !config.directory.is_empty() {
        return PathBuf::from(&config.directory);
    }
    let downloads = home_dir().join("Downloads");
    if downloads.is_dir() {
        downloads
    } else {
        PathBuf::from(".")
    }
}

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, DashConfig::default());
        assert_eq!(config.simulation.history_capacity, 20);
        assert_eq!(config.simulation.interval_ms, 1_000);
        assert_eq!(config.export.file_name, "hardware_data.json");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse(
            r##"
            [simulation]
            interval_ms = 500

            [theme]
            pressure_line = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.simulation.interval_ms, 500);
        assert_eq!(config.simulation.max_interval_ms, 5_000);
        assert_eq!(config.theme.pressure_line, "#ff0000");
        assert_eq!(config.theme.grid, "#374151");
    }

    #[test]
    fn rejects_interval_outside_slider_range() {
        let err = parse("[simulation]\ninterval_ms = 50").unwrap_err();
        assert!(matches!(err, DashError::Config(_)));
    }

    #[test]
    fn rejects_zero_capacity_and_step() {
        assert!(parse("[simulation]\nhistory_capacity = 0").is_err());
        assert!(parse("[simulation]\nstep_ms = 0").is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let raw = "[simulation]\nmin_interval_ms = 3000\nmax_interval_ms = 1000\ninterval_ms = 2000";
        assert!(parse(raw).is_err());
    }

    #[test]
    fn rejects_bad_timestamp_format() {
        assert!(parse("[simulation]\ntimestamp_format = \"%!\"").is_err());
        assert!(parse("[simulation]\ntimestamp_format = \"%I:%M:%S %p\"").is_ok());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse("[simulation\ninterval_ms = ").unwrap_err();
        assert!(err.to_string().starts_with("config error: TOML parse error"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("dash-config-does-not-exist.toml");
        assert_eq!(load(path).unwrap(), DashConfig::default());
    }

    #[test]
    fn configured_export_dir_wins() {
        let cfg = ExportConfig {
            directory: "/srv/exports".to_string(),
            ..ExportConfig::default()
        };
        assert_eq!(export_dir(&cfg), PathBuf::from("/srv/exports"));
    }

    #[test]
    fn clamp_interval_respects_bounds() {
        let sim = SimulationConfig::default();
        assert_eq!(sim.clamp_interval(10), 200);
        assert_eq!(sim.clamp_interval(99_999), 5_000);
        assert_eq!(sim.clamp_interval(1_200), 1_200);
    }
}
