use dash_config::SimulationConfig;
use dash_core::{Dashboard, Message};
use dash_theme::Theme;
use iced::{
    widget::{button, row, slider, text},
    Alignment, Element,
};

/// Simulation toggle, clear and download buttons, and the speed slider.
#[derive(Debug, Default)]
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        dashboard: &'a Dashboard,
        sim: &'a SimulationConfig,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let running = dashboard.simulation().is_running();
        let toggle = button(text(dashboard.simulate_button_label()).size(theme.font_size))
            .on_press(Message::ToggleSimulation)
            .style(if running { button::danger } else { button::primary });

        let interval_ms = dashboard.simulation().interval().as_millis() as f32;
        let speed = slider(
            sim.min_interval_ms as f32..=sim.max_interval_ms as f32,
            interval_ms,
            |v| Message::SpeedChanged(v.round() as u64),
        )
        .step(sim.step_ms as f32)
        .width(220);

        row![
            toggle,
            button(text("Clear History").size(theme.font_size))
                .on_press(Message::ClearHistory)
                .style(button::secondary),
            button(text("Download JSON").size(theme.font_size))
                .on_press(Message::Download)
                .style(button::secondary),
            text("Speed").size(theme.font_size),
            speed,
            text(dashboard.speed_label()).size(theme.font_size).width(48),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }
}
