//! Desktop window for `sensordash`.
//!
//! Owns the Iced application loop and wires together:
//! - the simulation timer (a subscription that exists only while running)
//! - the config file watcher (live reload on change)
//! - the toast dismissal timer

pub mod scheduler;

pub use scheduler::SubscriptionScheduler;

use dash_config::{default_path, export_dir, load as load_config, ConfigWatcher, DashConfig};
use dash_core::{Dashboard, Message, Metric, Notice};
use dash_sampler::RandomSampler;
use dash_theme::Theme;
use dash_widgets::{ChartWidget, ControlsWidget, ReadoutWidget, ToastWidget, TOAST_DURATION};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, text, Row},
    Element, Length, Size, Subscription, Task,
};
use std::time::Duration;
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let window = read_config().window;

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .window_size(Size::new(window.width, window.height))
        .run()
}

fn read_config() -> DashConfig {
    load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using defaults.");
        DashConfig::default()
    })
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    dashboard:  Dashboard,
    config:     DashConfig,
    theme:      Theme,
    sampler:    RandomSampler,
    scheduler:  SubscriptionScheduler,
    /// Visible toast and its sequence number.
    notice:     Option<(u64, Notice)>,
    notice_seq: u64,
    // Widgets
    readouts:   ReadoutWidget,
    charts:     [ChartWidget; 3],
    controls:   ControlsWidget,
    toast:      ToastWidget,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = read_config();
        let sim = &config.simulation;

        let mut app = Self {
            dashboard:  Dashboard::new(sim.history_capacity, sim.interval()),
            theme:      Theme::from_config(&config.theme),
            sampler:    RandomSampler::from_entropy(sim.timestamp_format.clone()),
            scheduler:  SubscriptionScheduler::new(),
            notice:     None,
            notice_seq: 0,
            readouts:   ReadoutWidget::new(),
            charts:     Metric::CHARTED.map(ChartWidget::new),
            controls:   ControlsWidget::new(),
            toast:      ToastWidget::new(),
            config,
        };

        // Draw one reading straight away so the charts aren't blank until
        // the first timer tick.
        app.dashboard.tick(&mut app.sampler);

        if app.config.simulation.autostart {
            app.dashboard.start_simulation(&mut app.scheduler);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.dashboard.simulation().is_running() {
            format!("Sensor Dashboard — live ({})", self.dashboard.speed_label())
        } else {
            String::from("Sensor Dashboard")
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.dashboard.tick(&mut self.sampler);
                self.redraw_charts();
                Task::none()
            }
            Message::ToggleSimulation => {
                let notice = self.dashboard.toggle_simulation(&mut self.scheduler);
                self.show(notice)
            }
            Message::ClearHistory => {
                let notice = self.dashboard.clear_history();
                self.redraw_charts();
                self.show(notice)
            }
            Message::Download => {
                let dir = export_dir(&self.config.export);
                match self.dashboard.export_to(&dir, &self.config.export.file_name) {
                    Ok(_) => self.show(Notice::success("Data downloaded as JSON.")),
                    Err(e) => {
                        warn!("Export to '{}' failed: {e}", dir.display());
                        self.show(Notice::error(format!("Export failed: {e}")))
                    }
                }
            }
            Message::SpeedChanged(ms) => {
                let ms = self.config.simulation.clamp_interval(ms);
                self.dashboard
                    .set_speed(Duration::from_millis(ms), &mut self.scheduler);
                Task::none()
            }
            Message::ConfigReloaded => self.reload_config(),
            Message::DismissNotice(seq) => {
                if matches!(self.notice, Some((current, _)) if current == seq) {
                    self.notice = None;
                }
                Task::none()
            }
        }
    }

    fn reload_config(&mut self) -> Task<Message> {
        let cfg = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config reload failed: {e}");
                return self.show(Notice::error("Config reload failed; keeping previous settings."));
            }
        };

        info!("Config reloaded");
        let sim = &cfg.simulation;

        if sim.history_capacity != self.dashboard.history().capacity() {
            info!(
                "history_capacity {} takes effect on restart",
                sim.history_capacity
            );
        }
        if sim.timestamp_format != self.config.simulation.timestamp_format {
            self.sampler = RandomSampler::from_entropy(sim.timestamp_format.clone());
        }

        // Keep the running interval inside the (possibly new) slider bounds.
        let current = self.dashboard.simulation().interval().as_millis() as u64;
        let clamped = sim.clamp_interval(current);
        self.dashboard
            .set_speed(Duration::from_millis(clamped), &mut self.scheduler);

        self.theme = Theme::from_config(&cfg.theme);
        self.config = cfg;
        self.redraw_charts();
        Task::none()
    }

    /// Show `notice` and schedule its dismissal.
    fn show(&mut self, notice: Notice) -> Task<Message> {
        self.notice_seq += 1;
        let seq = self.notice_seq;
        self.notice = Some((seq, notice));

        Task::perform(tokio::time::sleep(TOAST_DURATION), move |()| {
            Message::DismissNotice(seq)
        })
    }

    fn redraw_charts(&self) {
        for chart in &self.charts {
            chart.invalidate();
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let header = text("Sensor Dashboard")
            .size(self.theme.font_size * 1.6)
            .color(self.theme.foreground.to_iced());

        let readouts = self.readouts.view(self.dashboard.latest(), &self.theme);

        let samples = self.dashboard.history().as_slice();
        let charts = Row::with_children(
            self.charts
                .iter()
                .map(|chart| chart.view(samples, &self.theme)),
        )
        .spacing(12)
        .height(Length::Fill);

        let controls = self
            .controls
            .view(&self.dashboard, &self.config.simulation, &self.theme);

        let mut body = column![header, readouts, charts, controls].spacing(16);

        if let Some(toast) = self
            .toast
            .view(self.notice.as_ref().map(|(_, n)| n), &self.theme)
        {
            body = body.push(toast);
        }

        container(body)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.scheduler.subscription(),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches the config file for writes and sends `ConfigReloaded`.
///
/// The function pointer doubles as the subscription's identity, so iced keeps
/// one watcher alive across redraws.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        info!("Live reload enabled for {}", watcher.path().display());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher exited (logged by the watcher); stall rather than crash.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
