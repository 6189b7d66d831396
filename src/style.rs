//! Colors used by the plot.

use crate::render::Color;

/// Visual theme for plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Surface background.
    pub background: Color,
    /// Axes, tick labels and connecting segments.
    pub foreground: Color,
    /// Point annotation text.
    pub label: Color,
    /// Point markers.
    pub marker: Color,
}

impl Theme {
    /// Create the default (light) theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dark theme with light axes.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.08, 0.09, 1.0),
            foreground: Color::new(0.82, 0.82, 0.86, 1.0),
            label: Color::WHITE,
            marker: Color::new(0.25, 0.6, 1.0, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            label: Color::BLACK,
            marker: Color::BLUE,
        }
    }
}
