//! Rendering primitives and the drawing surface abstraction.
//!
//! Renderers draw through [`RenderSurface`], which any backend can implement.
//! [`RenderList`] is a backend-agnostic surface that records commands; the
//! GPUI backend replays a recorded list onto a window.

mod data;

pub use data::{DataRenderer, MARKER_DIAMETER, label_offset};

use crate::geom::ScreenPoint;
use crate::view::Viewport;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
}

/// Drawing capability provided by a rendering backend.
///
/// Primitives draw with the surface's current color. Text is positioned by
/// its baseline origin.
pub trait RenderSurface {
    /// Current pixel size of the surface.
    fn viewport(&self) -> Viewport;
    /// Current drawing color.
    fn color(&self) -> Color;
    /// Change the drawing color.
    fn set_color(&mut self, color: Color);
    /// Draw a straight line between two pixels.
    fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint);
    /// Draw text with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: ScreenPoint);
    /// Fill a circle of `diameter` pixels centered on `center`.
    fn fill_circle(&mut self, center: ScreenPoint, diameter: f32);
}

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a line.
    Line {
        /// Line start.
        start: ScreenPoint,
        /// Line end.
        end: ScreenPoint,
        /// Stroke color.
        color: Color,
    },
    /// Draw text.
    Text {
        /// Baseline origin.
        origin: ScreenPoint,
        /// Text content.
        text: String,
        /// Text color.
        color: Color,
    },
    /// Fill a circle.
    Circle {
        /// Circle center.
        center: ScreenPoint,
        /// Circle diameter in pixels.
        diameter: f32,
        /// Fill color.
        color: Color,
    },
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Clone)]
pub struct RenderList {
    viewport: Viewport,
    color: Color,
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty list for a surface of the given size.
    pub fn new(viewport: Viewport, color: Color) -> Self {
        Self {
            viewport,
            color,
            commands: Vec::new(),
        }
    }

    /// Access all recorded commands in drawing order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping size and color.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded lines.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Line { .. }))
            .count()
    }

    /// Recorded text strings in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RenderList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint) {
        self.commands.push(RenderCommand::Line {
            start,
            end,
            color: self.color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: ScreenPoint) {
        self.commands.push(RenderCommand::Text {
            origin,
            text: text.to_string(),
            color: self.color,
        });
    }

    fn fill_circle(&mut self, center: ScreenPoint, diameter: f32) {
        self.commands.push(RenderCommand::Circle {
            center,
            diameter,
            color: self.color,
        });
    }
}
