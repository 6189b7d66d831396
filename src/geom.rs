//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in data space and carries an optional annotation.
//! [`ScreenPoint`] is a pixel position on the rendering surface, with y
//! growing downward.

/// A sampled point in data space.
///
/// Equality is structural: two points with the same coordinates but a
/// different label are different values.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
    /// Annotation text; empty means no annotation.
    pub label: String,
}

impl Point {
    /// Create an unlabelled point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            label: String::new(),
        }
    }

    /// Create a point with annotation text.
    pub fn labelled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Whether the annotation has any visible text.
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a pixel offset.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another screen point.
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
