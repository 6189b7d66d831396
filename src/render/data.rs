use crate::geom::{Point, ScreenPoint};
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::DisplayOptions;

use super::RenderSurface;

/// Diameter of a point marker in pixels.
pub const MARKER_DIAMETER: f32 = 5.0;

/// Pixel offset of a point's label from its marker.
///
/// Labels sit up and to the right of points in the positive quadrant and
/// move left or down on the other side of each axis.
pub fn label_offset(point: &Point) -> (f32, f32) {
    let dx = if point.x > 0.0 { 5.0 } else { -15.0 };
    let dy = if point.y > 0.0 { -5.0 } else { 15.0 };
    (dx, dy)
}

/// Draws sampled points as segments, labels and markers.
#[derive(Debug, Clone, Copy)]
pub struct DataRenderer<'a> {
    transform: &'a Transform,
    options: DisplayOptions,
    theme: &'a Theme,
}

impl<'a> DataRenderer<'a> {
    /// Create a renderer for one pass.
    pub fn new(transform: &'a Transform, options: DisplayOptions, theme: &'a Theme) -> Self {
        Self {
            transform,
            options,
            theme,
        }
    }

    /// Draw `points` in order.
    ///
    /// Per point the order is segment, label, marker. Segments use the color
    /// that was current when the pass began, which is restored afterwards.
    pub fn draw<S: RenderSurface + ?Sized>(&self, points: &[Point], surface: &mut S) {
        let base = surface.color();
        let mut last: Option<ScreenPoint> = None;
        for point in points {
            let screen = self.transform.data_to_screen(point);
            if self.options.draw_lines {
                if let Some(prev) = last {
                    surface.set_color(base);
                    surface.draw_line(prev, screen);
                }
                last = Some(screen);
            }
            if self.options.draw_labels && point.has_label() {
                let (dx, dy) = label_offset(point);
                surface.set_color(self.theme.label);
                surface.draw_text(&point.label, screen.offset(dx, dy));
            }
            if self.options.draw_points {
                surface.set_color(self.theme.marker);
                surface.fill_circle(screen, MARKER_DIAMETER);
            }
        }
        surface.set_color(base);
    }
}
