pub mod chart;
pub mod controls;
pub mod readout;
pub mod toast;

pub use chart::ChartWidget;
pub use controls::ControlsWidget;
pub use readout::ReadoutWidget;
pub use toast::{ToastWidget, TOAST_DURATION};
