pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{ChartStyle, ToastStyle};

use dash_config::ThemeConfig;
use dash_core::Metric;

/// Fallback colours for each charted metric: `(line, fill)`.
const TEMPERATURE: (&str, &str) = ("#4f46e5", "#4f46e51a");
const HUMIDITY:    (&str, &str) = ("#0ea5e9", "#0ea5e91a");
const PRESSURE:    (&str, &str) = ("#10b981", "#10b9811a");

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colours are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible; invalid colour strings fall
/// back to the built-in palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background:  Color,
    pub foreground:  Color,
    pub font_size:   f32,
    pub toast:       ToastStyle,
    pub temperature: ChartStyle,
    pub humidity:    ChartStyle,
    pub pressure:    ChartStyle,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let foreground = parse(&cfg.foreground, Color::TEXT);
        let grid       = parse(&cfg.grid, Color::GRID);
        let label      = parse(&cfg.label, Color::LABEL);

        let chart = |line: &str, fill: &str, fallback: (&str, &str)| ChartStyle {
            line:       parse_or_hex(line, fallback.0),
            fill:       parse_or_hex(fill, fallback.1),
            grid,
            label,
            label_size: cfg.label_size,
            line_width: 2.0,
        };

        Self {
            background: parse(&cfg.background, Color::BACKGROUND),
            foreground,
            font_size: cfg.font_size,
            toast: ToastStyle {
                success: parse(&cfg.success, Color::GREEN),
                error:   parse(&cfg.error, Color::RED),
                foreground: Color::TEXT,
            },
            temperature: chart(&cfg.temperature_line, &cfg.temperature_fill, TEMPERATURE),
            humidity:    chart(&cfg.humidity_line, &cfg.humidity_fill, HUMIDITY),
            pressure:    chart(&cfg.pressure_line, &cfg.pressure_fill, PRESSURE),
        }
    }

    /// Chart colours for `metric`.  Ping has no chart of its own and
    /// borrows the pressure palette.
    pub fn chart(&self, metric: Metric) -> ChartStyle {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity    => self.humidity,
            Metric::Pressure | Metric::Ping => self.pressure,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn parse(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or(fallback)
}

fn parse_or_hex(hex: &str, fallback: &str) -> Color {
    Color::from_hex(hex)
        .or_else(|| Color::from_hex(fallback))
        .unwrap_or(Color::TRANSPARENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_config_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.temperature.line, Color::from_rgb8(0x4f, 0x46, 0xe5));
        assert_eq!(theme.humidity.fill, Color::from_rgba8(0x0e, 0xa5, 0xe9, 0x1a));
        assert_eq!(theme.pressure.grid, theme.temperature.grid);
        assert_eq!(theme.temperature.line_width, 2.0);
    }

    #[test]
    fn invalid_colours_fall_back() {
        let cfg = ThemeConfig {
            humidity_line: "not-a-colour".to_string(),
            grid: "#xyz".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.humidity.line, Color::from_rgb8(0x0e, 0xa5, 0xe9));
        assert_eq!(theme.humidity.grid, Color::GRID);
    }

    #[test]
    fn each_charted_metric_has_its_own_line() {
        let theme = Theme::default();
        let lines: Vec<Color> = Metric::CHARTED.iter().map(|m| theme.chart(*m).line).collect();
        assert_ne!(lines[0], lines[1]);
        assert_ne!(lines[1], lines[2]);
        assert_ne!(lines[0], lines[2]);
    }
}
