use dash_core::{Message, Metric, Sample};
use dash_theme::Theme;
use iced::{
    widget::{column, container, row, text},
    Alignment, Element, Length,
};

/// Numeric readouts for the latest sample plus its timestamp.
#[derive(Debug, Default)]
pub struct ReadoutWidget;

impl ReadoutWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, latest: Option<&'a Sample>, theme: &'a Theme) -> Element<'a, Message> {
        let cards = [Metric::Temperature, Metric::Humidity, Metric::Pressure, Metric::Ping]
            .into_iter()
            .map(|metric| card(metric, latest, theme));

        let updated = match latest {
            Some(s) => format!("Last updated: {}", s.timestamp()),
            None    => "Last updated: never".to_string(),
        };

        column![
            iced::widget::Row::with_children(cards)
                .spacing(12)
                .width(Length::Fill),
            text(updated)
                .size(theme.font_size - 2.0)
                .color(theme.foreground.with_alpha(0.6).to_iced()),
        ]
        .spacing(6)
        .into()
    }
}

fn card<'a>(metric: Metric, latest: Option<&Sample>, theme: &'a Theme) -> Element<'a, Message> {
    let accent = theme.chart(metric).line.to_iced();

    container(
        column![
            text(metric.label())
                .size(theme.font_size - 1.0)
                .color(theme.foreground.with_alpha(0.7).to_iced()),
            row![
                text(format_value(metric, latest)).size(theme.font_size * 2.0).color(accent),
                text(metric.unit()).size(theme.font_size),
            ]
            .spacing(4)
            .align_y(Alignment::End),
        ]
        .spacing(2),
    )
    .padding(10)
    .width(Length::Fill)
    .into()
}

/// Display a reading the way the sampler produced it, or `--` before the
/// first tick.
fn format_value(metric: Metric, latest: Option<&Sample>) -> String {
    match (metric, latest) {
        (_, None)               => "--".to_string(),
        (Metric::Ping, Some(s)) => s.ping().to_string(),
        (_, Some(s))            => metric.value(s).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_print_without_trailing_zeros() {
        let s = Sample::new("09:30:00", 22.5, 41.07, 1003.0, 48);
        assert_eq!(format_value(Metric::Temperature, Some(&s)), "22.5");
        assert_eq!(format_value(Metric::Humidity, Some(&s)), "41.07");
        assert_eq!(format_value(Metric::Pressure, Some(&s)), "1003");
        assert_eq!(format_value(Metric::Ping, Some(&s)), "48");
    }

    #[test]
    fn placeholder_before_first_sample() {
        assert_eq!(format_value(Metric::Humidity, None), "--");
    }
}
