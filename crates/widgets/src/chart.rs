use dash_core::{Message, Metric, Sample};
use dash_renderer::{render_chart, LineJoin, Point, Stroke, Surface};
use dash_theme::{ChartStyle, Color, Theme};
use iced::{
    mouse,
    widget::{
        canvas::{self, Cache, Canvas, Frame, Geometry, Path},
        column, container, text,
    },
    Element, Length, Rectangle, Renderer,
};

/// One metric chart with its own geometry cache.
///
/// The cache is redrawn automatically when the canvas changes size; call
/// [`ChartWidget::invalidate`] whenever the history or theme changes.
pub struct ChartWidget {
    metric: Metric,
    cache:  Cache,
}

impl ChartWidget {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            cache: Cache::new(),
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn view<'a>(&'a self, samples: &'a [Sample], theme: &'a Theme) -> Element<'a, Message> {
        let title = text(format!("{} ({})", self.metric.label(), self.metric.unit()))
            .size(theme.font_size)
            .color(theme.foreground.to_iced());

        let canvas = Canvas::new(ChartProgram {
            samples,
            metric: self.metric,
            style: theme.chart(self.metric),
            cache: &self.cache,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        container(column![title, canvas].spacing(6))
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

struct ChartProgram<'a> {
    samples: &'a [Sample],
    metric:  Metric,
    style:   ChartStyle,
    cache:   &'a Cache,
}

impl canvas::Program<Message> for ChartProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            render_chart(&mut FrameSurface { frame }, self.samples, self.metric, &self.style);
        });

        vec![geometry]
    }
}

/// [`Surface`] over an iced canvas frame.
struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl Surface for FrameSurface<'_> {
    fn size(&self) -> (f32, f32) {
        let size = self.frame.size();
        (size.width, size.height)
    }

    fn clear(&mut self) {
        // The cache hands every redraw a blank frame.
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        let Some(path) = trace(points, false) else {
            return;
        };
        let join = match stroke.join {
            LineJoin::Miter => canvas::LineJoin::Miter,
            LineJoin::Round => canvas::LineJoin::Round,
        };
        self.frame.stroke(
            &path,
            canvas::Stroke::default()
                .with_color(stroke.color.to_iced())
                .with_width(stroke.width)
                .with_line_join(join),
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if let Some(path) = trace(points, true) {
            self.frame.fill(&path, color.to_iced());
        }
    }

    fn draw_text(&mut self, content: &str, position: Point, color: Color, size: f32) {
        // Canvas text hangs below its anchor; lift it so `position` is the
        // bottom-left corner.
        self.frame.fill_text(canvas::Text {
            content: content.to_string(),
            position: iced::Point::new(position.x, position.y - size),
            color: color.to_iced(),
            size: size.into(),
            ..canvas::Text::default()
        });
    }
}

/// Build a path through `points`; `None` if there are none.
fn trace(points: &[Point], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    Some(Path::new(|builder| {
        builder.move_to(iced::Point::new(first.x, first.y));
        for p in rest {
            builder.line_to(iced::Point::new(p.x, p.y));
        }
        if close {
            builder.close();
        }
    }))
}
