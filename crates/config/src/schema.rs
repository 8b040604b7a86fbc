use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure parsed from `sensordash.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Sampling cadence and history window.
    pub simulation: SimulationConfig,
    /// Where the JSON export is written.
    pub export: ExportConfig,
    /// Theme / chart colours.
    pub theme: ThemeConfig,
    /// Initial window geometry.
    pub window: WindowConfig,
}

/// Sampling loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Tick interval at start-up, in milliseconds.
    pub interval_ms: u64,
    /// Lower bound of the speed slider.
    pub min_interval_ms: u64,
    /// Upper bound of the speed slider.
    pub max_interval_ms: u64,
    /// Speed slider step.
    pub step_ms: u64,
    /// Number of samples kept in the rolling window.
    pub history_capacity: usize,
    /// Start ticking as soon as the window opens.
    pub autostart: bool,
    /// `strftime` pattern for sample timestamps.
    pub timestamp_format: String,
}

impl SimulationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Clamp `ms` into the slider range.
    pub fn clamp_interval(&self, ms: u64) -> u64 {
        ms.clamp(self.min_interval_ms, self.max_interval_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms:      1_000,
            min_interval_ms:  200,
            max_interval_ms:  5_000,
            step_ms:          100,
            history_capacity: 20,
            autostart:        false,
            timestamp_format: "%H:%M:%S".to_string(),
        }
    }
}

/// JSON export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory.  Empty = `$HOME/Downloads`, or the working directory
    /// when that doesn't exist.
    pub directory: String,
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            file_name: dash_core::export::DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// Theme / styling configuration.  Colours are hex strings, `#RRGGBB` or
/// `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background colour.
    pub background: String,
    /// Primary text colour.
    pub foreground: String,
    /// Chart grid lines.
    pub grid: String,
    /// Chart axis labels.
    pub label: String,
    /// Toast colour for successful actions.
    pub success: String,
    /// Toast colour for stops and failures.
    pub error: String,
    /// Readout font size in points.
    pub font_size: f32,
    /// Axis label font size in points.
    pub label_size: f32,
    pub temperature_line: String,
    pub temperature_fill: String,
    pub humidity_line: String,
    pub humidity_fill: String,
    pub pressure_line: String,
    pub pressure_fill: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:       "#111827".to_string(),
            foreground:       "#f3f4f6".to_string(),
            grid:             "#374151".to_string(),
            label:            "#9ca3af".to_string(),
            success:          "#15803d".to_string(),
            error:            "#b91c1c".to_string(),
            font_size:        14.0,
            label_size:       12.0,
            temperature_line: "#4f46e5".to_string(),
            temperature_fill: "#4f46e51a".to_string(),
            humidity_line:    "#0ea5e9".to_string(),
            humidity_fill:    "#0ea5e91a".to_string(),
            pressure_line:    "#10b981".to_string(),
            pressure_fill:    "#10b9811a".to_string(),
        }
    }
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width:  f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:  1100.0,
            height: 720.0,
        }
    }
}
