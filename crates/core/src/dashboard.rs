//! The dashboard's owned context: history window, simulation timer and the
//! last reading shown in the readouts.
//!
//! Event handlers receive `&mut Dashboard` plus whatever collaborators the
//! action needs (a [`Sampler`], a [`Scheduler`]), so every action can be
//! exercised without a window or a wall clock.

use crate::{
    event::Notice,
    export,
    history::History,
    sample::{Sample, Sampler},
    simulation::{Scheduler, Simulation},
    Result,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Dashboard {
    history:    History,
    simulation: Simulation,
    /// Survives `clear_history` so the readouts keep their last values.
    latest:     Option<Sample>,
}

impl Dashboard {
    pub fn new(capacity: usize, interval: Duration) -> Self {
        Self {
            history:    History::new(capacity),
            simulation: Simulation::new(interval),
            latest:     None,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Most recent reading, for the numeric readouts.
    pub fn latest(&self) -> Option<&Sample> {
        self.latest.as_ref()
    }

    /// One simulation step: take a reading and push it into the window.
    pub fn tick(&mut self, sampler: &mut impl Sampler) -> &Sample {
        let sample = sampler.sample();
        debug!(
            "tick {}: {:.2} °C, {:.2} %, {:.2} hPa, {} ms",
            sample.timestamp(),
            sample.temperature(),
            sample.humidity(),
            sample.pressure(),
            sample.ping(),
        );
        self.history.push(sample.clone());
        self.latest.insert(sample)
    }

    /// Start the simulation if it is stopped.  Returns `false` if it was
    /// already running.
    pub fn start_simulation(&mut self, scheduler: &mut impl Scheduler) -> bool {
        self.simulation.start(scheduler)
    }

    pub fn toggle_simulation(&mut self, scheduler: &mut impl Scheduler) -> Notice {
        if self.simulation.toggle(scheduler) {
            Notice::success("Live data simulation started.")
        } else {
            Notice::error("Live data simulation stopped.")
        }
    }

    /// Change the tick interval, rescheduling the timer if it is running.
    pub fn set_speed(&mut self, interval: Duration, scheduler: &mut impl Scheduler) {
        self.simulation.set_interval(interval, scheduler);
    }

    pub fn clear_history(&mut self) -> Notice {
        self.history.clear();
        info!("History cleared");
        Notice::success("Data history cleared.")
    }

    /// The history window as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String> {
        export::to_json(self.history.as_slice())
    }

    /// Write the history window to `dir/file_name`.
    pub fn export_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let path = export::write_json(dir, file_name, self.history.as_slice())?;
        info!("Exported {} samples to {}", self.history.len(), path.display());
        Ok(path)
    }

    pub fn simulate_button_label(&self) -> &'static str {
        if self.simulation.is_running() {
            "Stop Simulation"
        } else {
            "Simulate Live Data"
        }
    }

    /// Tick interval in seconds, e.g. `"1.5s"`.
    pub fn speed_label(&self) -> String {
        format!("{:.1}s", self.simulation.interval().as_secs_f64())
    }
}
