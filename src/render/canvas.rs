//! Drawing canvas widget
//!
//! Renders a generated `Drawing` inside an egui panel.
//!
//! ## Coordinate System
//!
//! Generation coordinates are world units with Y growing downward, the same
//! orientation as the screen. The canvas fits the whole viewport into the
//! allocated rectangle with a uniform scale and a fixed margin, so the
//! region keeps its aspect ratio no matter how the window is resized.
//! Shapes that overflow the viewport (oversized circles, steep parabolas)
//! are simply painted where they land.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use doodle_rs::shapes::{Drawing, Rgb, ShapeDescriptor, Viewport};

/// Display settings for the canvas
#[derive(Clone)]
pub struct CanvasSettings {
    /// Background color
    pub background: Color32,

    /// Grid line color
    pub grid_color: Color32,

    /// Shape outline thickness in pixels
    pub stroke_width: f32,

    /// Gap between the viewport and the widget edge, in pixels
    pub margin: f32,

    /// Whether to draw the coordinate grid at all
    pub show_grid: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            grid_color: Color32::from_rgb(211, 211, 211), // light gray
            stroke_width: 1.5,
            margin: 20.0,
            show_grid: true,
        }
    }
}

/// Maps world coordinates onto one frame's screen rectangle
struct ScreenMap {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
    min_x: f64,
    min_y: f64,
}

impl ScreenMap {
    /// Fit the viewport into `rect` minus the margin, centered, uniform scale
    fn fit(viewport: Viewport, rect: Rect, margin: f32) -> Self {
        let inner = rect.shrink(margin);
        let scale_x = inner.width() as f64 / viewport.width();
        let scale_y = inner.height() as f64 / viewport.height();
        let mut scale = scale_x.min(scale_y);
        if !scale.is_finite() || scale <= 0.0 {
            scale = 1.0;
        }

        Self {
            scale,
            origin_x: inner.left() as f64 + (inner.width() as f64 - viewport.width() * scale) / 2.0,
            origin_y: inner.top() as f64 + (inner.height() as f64 - viewport.height() * scale) / 2.0,
            min_x: viewport.min_x,
            min_y: viewport.min_y,
        }
    }

    fn point(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(
            (self.origin_x + (x - self.min_x) * self.scale) as f32,
            (self.origin_y + (y - self.min_y) * self.scale) as f32,
        )
    }

    fn length(&self, d: f64) -> f32 {
        (d * self.scale) as f32
    }
}

/// Canvas widget
///
/// Paints the background grid and strokes every descriptor of a drawing in
/// order, so later shape kinds end up on top.
pub struct Canvas {
    /// Display settings
    pub settings: CanvasSettings,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with default settings
    pub fn new() -> Self {
        Self {
            settings: CanvasSettings::default(),
        }
    }

    /// Create a new canvas with custom settings
    pub fn with_settings(settings: CanvasSettings) -> Self {
        Self { settings }
    }

    /// Draw the canvas
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `drawing` - The drawing to paint
    /// * `size` - Desired widget size (or None for available space)
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&self, ui: &mut egui::Ui, drawing: &Drawing, size: Option<Vec2>) -> egui::Response {
        let size = size.unwrap_or_else(|| ui.available_size());

        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, self.settings.background);

        let viewport = drawing.viewport();
        let map = ScreenMap::fit(viewport, rect, self.settings.margin);

        if self.settings.show_grid && viewport.grid_step > 0.0 {
            self.draw_grid(&painter, &map, viewport);
        }

        for shape in drawing.iter() {
            self.draw_shape(&painter, &map, shape);
        }

        response
    }

    /// Draw the coordinate grid over the viewport
    fn draw_grid(&self, painter: &egui::Painter, map: &ScreenMap, viewport: Viewport) {
        let stroke = Stroke::new(0.5, self.settings.grid_color);

        let mut x = viewport.min_x;
        while x <= viewport.max_x {
            painter.line_segment(
                [map.point(x, viewport.min_y), map.point(x, viewport.max_y)],
                stroke,
            );
            x += viewport.grid_step;
        }

        let mut y = viewport.min_y;
        while y <= viewport.max_y {
            painter.line_segment(
                [map.point(viewport.min_x, y), map.point(viewport.max_x, y)],
                stroke,
            );
            y += viewport.grid_step;
        }
    }

    /// Stroke one descriptor with its own color
    fn draw_shape(&self, painter: &egui::Painter, map: &ScreenMap, shape: &ShapeDescriptor) {
        let stroke = Stroke::new(self.settings.stroke_width, color32(shape.color()));

        match shape {
            ShapeDescriptor::Line(line) => {
                painter.line_segment(
                    [map.point(line.x1, line.y1), map.point(line.x2, line.y2)],
                    stroke,
                );
            }
            ShapeDescriptor::Circle(circle) => {
                painter.circle_stroke(
                    map.point(circle.cx, circle.cy),
                    map.length(circle.radius),
                    stroke,
                );
            }
            ShapeDescriptor::Rectangle(rect) => {
                let bounds = Rect::from_min_max(
                    map.point(rect.x, rect.y),
                    map.point(rect.right(), rect.bottom()),
                );
                painter.rect_stroke(bounds, 0.0, stroke);
            }
            ShapeDescriptor::Triangle(triangle) => {
                let points: Vec<Pos2> = triangle
                    .vertices
                    .iter()
                    .map(|&(x, y)| map.point(x, y))
                    .collect();
                painter.add(egui::Shape::closed_line(points, stroke));
            }
            ShapeDescriptor::Parabola(parabola) => {
                let points: Vec<Pos2> = parabola
                    .points()
                    .iter()
                    .map(|&(x, y)| map.point(x, y))
                    .collect();
                painter.add(egui::Shape::line(points, stroke));
            }
            ShapeDescriptor::Trapezoid(trapezoid) => {
                let points: Vec<Pos2> = trapezoid
                    .vertices
                    .iter()
                    .map(|&(x, y)| map.point(x, y))
                    .collect();
                painter.add(egui::Shape::closed_line(points, stroke));
            }
        }
    }
}

fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
