pub mod dashboard;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod sample;
pub mod simulation;

pub use dashboard::Dashboard;
pub use error::{DashError, Result};
pub use event::{Message, Notice, NoticeKind};
pub use history::History;
pub use sample::{Metric, Sample, Sampler};
pub use simulation::{ManualScheduler, Scheduler, Simulation, TimerId};
