use crate::colors::Color;

/// Visual settings for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Data polyline.
    pub line:       Color,
    /// Translucent area under the curve.
    pub fill:       Color,
    pub grid:       Color,
    pub label:      Color,
    pub label_size: f32,
    pub line_width: f32,
}

/// Colours for the transient status toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub success:    Color,
    pub error:      Color,
    pub foreground: Color,
}
