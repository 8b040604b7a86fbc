//! Line+fill chart of one metric over the history window.

use crate::surface::{LineJoin, Point, Stroke, Surface};
use dash_core::{Metric, Sample};
use dash_theme::ChartStyle;

/// Horizontal grid divisions; `GRID_DIVISIONS + 1` lines are drawn.
pub const GRID_DIVISIONS: u32 = 5;

/// Value padding above the maximum and below the minimum, so a flat series
/// still spans a non-zero range.
pub const VALUE_PADDING: f64 = 1.0;

/// Offset of each grid label from the left edge and above its line.
const LABEL_INSET: f32 = 5.0;

/// A labelled horizontal grid line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y:     f32,
    pub value: f64,
    pub label: String,
}

/// Scaled layout of one chart, independent of any drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width:     f32,
    pub height:    f32,
    pub min_value: f64,
    pub max_value: f64,
    /// Bottom to top: the first line sits at `height` and reads `min_value`.
    pub grid:      Vec<GridLine>,
    /// One point per sample, in chronological order.
    pub points:    Vec<Point>,
}

impl ChartGeometry {
    /// Lay out `samples` on a `width` × `height` surface.  Returns `None` for
    /// an empty series.
    pub fn compute(samples: &[Sample], metric: Metric, width: f32, height: f32) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let (lo, hi) = samples
            .iter()
            .map(|s| metric.value(s))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let min_value = lo - VALUE_PADDING;
        let max_value = hi + VALUE_PADDING;
        let range = max_value - min_value;

        let grid = (0..=GRID_DIVISIONS)
            .map(|i| {
                let fraction = f64::from(i) / f64::from(GRID_DIVISIONS);
                let value = min_value + fraction * range;
                GridLine {
                    y: height - fraction as f32 * height,
                    value,
                    label: format!("{value:.1}"),
                }
            })
            .collect();

        let last = samples.len().saturating_sub(1);
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let x = if last == 0 {
                    0.0
                } else {
                    i as f32 / last as f32 * width
                };
                let scaled = ((metric.value(s) - min_value) / range) as f32;
                Point::new(x, height - scaled * height)
            })
            .collect();

        Some(Self {
            width,
            height,
            min_value,
            max_value,
            grid,
            points,
        })
    }

    pub fn range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// The area under the curve: the data points closed off through the
    /// bottom-right and bottom-left corners.
    pub fn fill_polygon(&self) -> Vec<Point> {
        let mut polygon = Vec::with_capacity(self.points.len() + 2);
        polygon.extend_from_slice(&self.points);
        polygon.push(Point::new(self.width, self.height));
        polygon.push(Point::new(0.0, self.height));
        polygon
    }
}

/// Paint `metric` from `samples` onto `surface`.
///
/// Always a full repaint.  A surface without a usable size is left untouched;
/// an empty series leaves it cleared.
pub fn render_chart(
    surface: &mut impl Surface,
    samples: &[Sample],
    metric: Metric,
    style: &ChartStyle,
) {
    let (width, height) = surface.size();
    if !is_laid_out(width, height) {
        tracing::trace!("{} chart skipped: surface is {width}x{height}", metric.label());
        return;
    }

    surface.clear();

    let Some(geometry) = ChartGeometry::compute(samples, metric, width, height) else {
        return;
    };

    let grid_stroke = Stroke {
        color: style.grid,
        width: 1.0,
        join:  LineJoin::Miter,
    };
    for line in &geometry.grid {
        surface.stroke_polyline(&[Point::new(0.0, line.y), Point::new(width, line.y)], grid_stroke);
        surface.draw_text(
            &line.label,
            Point::new(LABEL_INSET, line.y - LABEL_INSET),
            style.label,
            style.label_size,
        );
    }

    surface.stroke_polyline(
        &geometry.points,
        Stroke {
            color: style.line,
            width: style.line_width,
            join:  LineJoin::Round,
        },
    );
    surface.fill_polygon(&geometry.fill_polygon(), style.fill);
}

fn is_laid_out(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
