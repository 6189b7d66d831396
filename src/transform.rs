//! Coordinate transforms from data space into screen space.

use crate::geom::{Point, ScreenPoint};
use crate::view::Viewport;

/// Margin between the surface edge and the axis ends, in pixels.
pub const PADDING: f32 = 20.0;

/// Axis endpoints and origin for a viewport.
///
/// The origin sits at the viewport center and both axes run through it,
/// stopping [`PADDING`] pixels short of each edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    /// Screen position of the logical origin.
    pub zero: ScreenPoint,
    /// Left end of the horizontal axis.
    pub lowest_x: ScreenPoint,
    /// Right end of the horizontal axis.
    pub highest_x: ScreenPoint,
    /// Top end of the vertical axis.
    pub highest_y: ScreenPoint,
    /// Bottom end of the vertical axis.
    pub lowest_y: ScreenPoint,
}

impl AxisFrame {
    /// Lay out the axes for a viewport.
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width_px as f32;
        let height = viewport.height_px as f32;
        let zero = ScreenPoint::new(width / 2.0, height / 2.0);
        Self {
            zero,
            lowest_x: ScreenPoint::new(PADDING, zero.y),
            highest_x: ScreenPoint::new(width - PADDING, zero.y),
            highest_y: ScreenPoint::new(zero.x, PADDING),
            lowest_y: ScreenPoint::new(zero.x, height - PADDING),
        }
    }
}

/// Forward mapping from data space into screen space for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    frame: AxisFrame,
    x_range: u32,
    y_range: u32,
    x_pixels_per_unit: f64,
    y_pixels_per_unit: f64,
}

impl Transform {
    /// Build a transform for `viewport` with the given half-ranges.
    ///
    /// Ranges below 1 are treated as 1. Pixels per unit are the distance
    /// from the origin to an axis end divided by the half-range, truncated
    /// to whole pixels.
    pub fn new(viewport: Viewport, x_range: u32, y_range: u32) -> Self {
        let frame = AxisFrame::new(viewport);
        let x_range = x_range.max(1);
        let y_range = y_range.max(1);
        let x_pixels_per_unit = pixels_per_unit(frame.lowest_x.distance(frame.zero), x_range);
        let y_pixels_per_unit = pixels_per_unit(frame.lowest_y.distance(frame.zero), y_range);
        Self {
            frame,
            x_range,
            y_range,
            x_pixels_per_unit,
            y_pixels_per_unit,
        }
    }

    /// Axis layout this transform was built from.
    pub fn frame(&self) -> AxisFrame {
        self.frame
    }

    /// Screen position of the logical origin.
    pub fn zero(&self) -> ScreenPoint {
        self.frame.zero
    }

    /// Horizontal half-range in logical units.
    pub fn x_range(&self) -> u32 {
        self.x_range
    }

    /// Vertical half-range in logical units.
    pub fn y_range(&self) -> u32 {
        self.y_range
    }

    /// Horizontal scale in whole pixels per logical unit.
    pub fn x_pixels_per_unit(&self) -> f64 {
        self.x_pixels_per_unit
    }

    /// Vertical scale in whole pixels per logical unit.
    pub fn y_pixels_per_unit(&self) -> f64 {
        self.y_pixels_per_unit
    }

    /// Map a data point into screen space. Screen y grows downward.
    pub fn data_to_screen(&self, point: &Point) -> ScreenPoint {
        self.map_xy(point.x, point.y)
    }

    /// Map raw data coordinates into screen space.
    pub fn map_xy(&self, x: f64, y: f64) -> ScreenPoint {
        let sx = f64::from(self.frame.zero.x) + self.x_pixels_per_unit * x;
        let sy = f64::from(self.frame.zero.y) - self.y_pixels_per_unit * y;
        ScreenPoint::new(sx as f32, sy as f32)
    }
}

fn pixels_per_unit(half_axis: f32, range: u32) -> f64 {
    (f64::from(half_axis) / f64::from(range)).trunc()
}
