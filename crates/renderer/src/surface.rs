use dash_theme::Color;

/// A position on a drawing surface, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// How consecutive polyline segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Stroke settings for [`Surface::stroke_polyline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub join:  LineJoin,
}

/// The drawing capabilities a chart needs.
///
/// Implemented over an iced canvas frame by `dash-widgets`, and by a
/// recording surface in tests.
pub trait Surface {
    /// Current `(width, height)` in pixels.  Either may be zero before the
    /// surface is laid out.
    fn size(&self) -> (f32, f32);

    /// Erase everything previously drawn.
    fn clear(&mut self);

    /// Stroke an open path through `points`, in order.
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);

    /// Fill the closed polygon with vertices `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Draw `text` with its baseline-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32);
}
