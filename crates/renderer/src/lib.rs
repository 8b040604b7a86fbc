//! Backend-independent chart drawing.
//!
//! [`render_chart`] paints one metric of the history window onto anything
//! implementing [`Surface`]. The dashboard runs it once per charted metric
//! on every repaint.

pub mod chart;
pub mod surface;

pub use chart::{render_chart, ChartGeometry, GridLine};
pub use surface::{LineJoin, Point, Stroke, Surface};
