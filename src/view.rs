//! Viewport size and display options.

/// Pixel size of the rendering surface for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width_px: i32,
    /// Height in pixels.
    pub height_px: i32,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    pub fn new(width_px: i32, height_px: i32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Whether the viewport has positive area.
    pub fn is_valid(&self) -> bool {
        self.width_px > 0 && self.height_px > 0
    }
}

/// Half-width of the visible x axis, in logical units.
///
/// Always at least 1; the axis spans `[-value, +value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HorizontalRange(u32);

impl HorizontalRange {
    /// Create a range, clamping values below 1 up to 1.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// The half-width in logical units.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for HorizontalRange {
    fn default() -> Self {
        Self(10)
    }
}

impl From<u32> for HorizontalRange {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

/// Toggles and ranges read by the renderers on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Draw each point's annotation text.
    pub draw_labels: bool,
    /// Connect consecutive points with segments.
    pub draw_lines: bool,
    /// Draw a filled marker per point.
    pub draw_points: bool,
    /// Visible half-width of the x axis.
    pub horizontal_range: HorizontalRange,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            draw_labels: false,
            draw_lines: true,
            draw_points: true,
            horizontal_range: HorizontalRange::default(),
        }
    }
}
