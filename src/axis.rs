//! Axis lines, tick marks and tick label decimation.

use crate::geom::ScreenPoint;
use crate::render::RenderSurface;
use crate::transform::Transform;

/// Length of a tick mark on each side of its axis, in pixels.
pub const TICK_LENGTH: f32 = 3.0;

/// Offset of a vertical-axis label from its tick position.
const VERTICAL_LABEL_OFFSET: (f32, f32) = (-20.0, 5.0);
/// Offset of a horizontal-axis label from its tick position.
const HORIZONTAL_LABEL_OFFSET: (f32, f32) = (-3.0, 15.0);

/// Which of the two axes a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// The x axis (y = 0).
    Horizontal,
    /// The y axis (x = 0).
    Vertical,
}

/// A graduation at an integer logical value.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Logical value of the tick, never 0.
    pub value: i64,
    /// Pixel position on the axis, truncated to whole pixels.
    pub position: ScreenPoint,
    /// Label text when the label survives decimation.
    pub label: Option<String>,
}

/// Whether the label for tick `index` is drawn on an axis of half-range `range`.
///
/// Below 20 every tick is labelled, below 30 every second one, and beyond
/// that every fifth.
pub fn label_visible(range: u32, index: u32) -> bool {
    if range < 20 {
        true
    } else if range < 30 {
        index % 2 == 0
    } else {
        index % 5 == 0
    }
}

/// Compute the ticks of one axis, negative side first, in ascending value.
///
/// Only the vertical axis decimates its labels; every horizontal tick is
/// labelled.
pub fn ticks(transform: &Transform, kind: AxisKind) -> Vec<TickMark> {
    let frame = transform.frame();
    let zero = frame.zero;
    let (range, low_end, high_end) = match kind {
        AxisKind::Horizontal => (transform.x_range(), frame.lowest_x, frame.highest_x),
        AxisKind::Vertical => (transform.y_range(), frame.lowest_y, frame.highest_y),
    };
    let low_step = f64::from(low_end.distance(zero)) / f64::from(range);
    let high_step = f64::from(high_end.distance(zero)) / f64::from(range);

    let tick = |value: i64, step: f64| {
        let index = value.unsigned_abs() as u32;
        let offset = step * index as f64;
        let position = match kind {
            AxisKind::Horizontal => {
                let x = if value < 0 {
                    f64::from(zero.x) - offset
                } else {
                    f64::from(zero.x) + offset
                };
                ScreenPoint::new(x.trunc() as f32, zero.y.trunc())
            }
            AxisKind::Vertical => {
                // Screen y grows downward, so positive values sit above the origin.
                let y = if value < 0 {
                    f64::from(zero.y) + offset
                } else {
                    f64::from(zero.y) - offset
                };
                ScreenPoint::new(zero.x.trunc(), y.trunc() as f32)
            }
        };
        let labelled = match kind {
            AxisKind::Horizontal => true,
            AxisKind::Vertical => label_visible(range, index),
        };
        TickMark {
            value,
            position,
            label: labelled.then(|| value.to_string()),
        }
    };

    let negative = tick_indices(range, low_end.distance(zero))
        .rev()
        .map(|i| tick(-i, low_step));
    let positive = tick_indices(range, high_end.distance(zero)).map(|i| tick(i, high_step));
    negative.chain(positive).collect()
}

/// Tick indices `1..=range` thinned so no two land on the same pixel of a
/// half-axis `distance` pixels long.
///
/// Ranges that fit the axis keep every index; larger ones keep every
/// `stride`-th, so a side never has more ticks than whole pixels.
fn tick_indices(range: u32, distance: f32) -> impl DoubleEndedIterator<Item = i64> {
    let range = i64::from(range);
    let pixels = (f64::from(distance).floor() as i64).max(1);
    let stride = if range > pixels {
        (range + pixels - 1) / pixels
    } else {
        1
    };
    (1..=range / stride).map(move |k| k * stride)
}

/// Draws both axes with their ticks and labels.
#[derive(Debug, Clone, Copy)]
pub struct AxisRenderer<'a> {
    transform: &'a Transform,
}

impl<'a> AxisRenderer<'a> {
    /// Create a renderer for one pass.
    pub fn new(transform: &'a Transform) -> Self {
        Self { transform }
    }

    /// Draw axis lines, tick marks and visible labels in the current color.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let frame = self.transform.frame();
        surface.draw_line(frame.lowest_x, frame.highest_x);
        surface.draw_line(frame.highest_y, frame.lowest_y);

        for kind in [AxisKind::Horizontal, AxisKind::Vertical] {
            let (dx, dy) = match kind {
                AxisKind::Horizontal => HORIZONTAL_LABEL_OFFSET,
                AxisKind::Vertical => VERTICAL_LABEL_OFFSET,
            };
            for tick in ticks(self.transform, kind) {
                let p = tick.position;
                match kind {
                    AxisKind::Horizontal => surface.draw_line(
                        p.offset(0.0, TICK_LENGTH),
                        p.offset(0.0, -TICK_LENGTH),
                    ),
                    AxisKind::Vertical => surface.draw_line(
                        p.offset(TICK_LENGTH, 0.0),
                        p.offset(-TICK_LENGTH, 0.0),
                    ),
                }
                if let Some(label) = tick.label {
                    surface.draw_text(&label, p.offset(dx, dy));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, RenderCommand, RenderList};
    use crate::view::Viewport;

    fn labelled_indices(range: u32) -> Vec<u32> {
        (1..=range).filter(|&i| label_visible(range, i)).collect()
    }

    #[test]
    fn small_ranges_label_every_tick() {
        assert_eq!(labelled_indices(15), (1..=15).collect::<Vec<_>>());
        assert_eq!(labelled_indices(19).len(), 19);
    }

    #[test]
    fn medium_ranges_label_even_ticks() {
        assert_eq!(labelled_indices(25), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24]);
        assert!(label_visible(20, 20));
        assert!(!label_visible(29, 29));
    }

    #[test]
    fn large_ranges_label_multiples_of_five() {
        assert_eq!(labelled_indices(40), vec![5, 10, 15, 20, 25, 30, 35, 40]);
        assert_eq!(labelled_indices(30), vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn vertical_ticks_are_symmetric_and_decimated() {
        let transform = Transform::new(Viewport::new(800, 600), 10, 25);
        let ticks = ticks(&transform, AxisKind::Vertical);
        assert_eq!(ticks.len(), 50);
        assert_eq!(ticks.first().map(|t| t.value), Some(-25));
        assert_eq!(ticks.last().map(|t| t.value), Some(25));

        let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
        assert_eq!(labels.len(), 24);
        assert!(labels.contains(&"-2"));
        assert!(labels.contains(&"24"));
        assert!(!labels.contains(&"3"));

        // 280px from origin to the top end over 25 units.
        let top = ticks.last().map(|t| t.position);
        assert_eq!(top, Some(ScreenPoint::new(400.0, 20.0)));
        let one = ticks.iter().find(|t| t.value == 1).map(|t| t.position);
        assert_eq!(one, Some(ScreenPoint::new(400.0, (300.0_f64 - 11.2).trunc() as f32)));
    }

    #[test]
    fn horizontal_ticks_always_labelled() {
        let transform = Transform::new(Viewport::new(800, 600), 40, 10);
        let ticks = ticks(&transform, AxisKind::Horizontal);
        assert_eq!(ticks.len(), 80);
        assert!(ticks.iter().all(|t| t.label.is_some()));
        assert_eq!(ticks[0].label.as_deref(), Some("-40"));
        assert_eq!(ticks[0].position, ScreenPoint::new(20.0, 300.0));
        assert_eq!(ticks[79].position, ScreenPoint::new(780.0, 300.0));
    }

    #[test]
    fn huge_ranges_keep_one_tick_per_pixel() {
        let transform = Transform::new(Viewport::new(800, 600), 10, u32::MAX);
        let ticks = ticks(&transform, AxisKind::Vertical);
        // 280px from origin to either vertical end.
        assert!(ticks.len() <= 2 * 280);
        assert!(ticks.len() > 2 * 200);
        for pair in ticks.windows(2) {
            assert!(pair[0].value < pair[1].value);
            assert_ne!(pair[0].position, pair[1].position);
        }
        assert!(ticks.iter().all(|t| t.value != 0));
    }

    #[test]
    fn ranges_within_the_axis_are_not_thinned() {
        let transform = Transform::new(Viewport::new(800, 600), 380, 280);
        assert_eq!(ticks(&transform, AxisKind::Horizontal).len(), 760);
        assert_eq!(ticks(&transform, AxisKind::Vertical).len(), 560);
    }

    #[test]
    fn draws_axes_ticks_and_labels() {
        let viewport = Viewport::new(800, 600);
        let transform = Transform::new(viewport, 5, 10);
        let mut list = RenderList::new(viewport, Color::BLACK);
        AxisRenderer::new(&transform).draw(&mut list);

        // Two axis lines plus one mark per tick.
        assert_eq!(list.line_count(), 2 + 10 + 20);
        assert_eq!(list.texts().len(), 30);
        assert_eq!(
            list.commands()[0],
            RenderCommand::Line {
                start: ScreenPoint::new(20.0, 300.0),
                end: ScreenPoint::new(780.0, 300.0),
                color: Color::BLACK,
            }
        );
        assert_eq!(
            list.commands()[1],
            RenderCommand::Line {
                start: ScreenPoint::new(400.0, 20.0),
                end: ScreenPoint::new(400.0, 580.0),
                color: Color::BLACK,
            }
        );

        let vertical_label = list.commands().iter().find_map(|c| match c {
            RenderCommand::Text { text, origin, .. } if text == "10" => Some(*origin),
            _ => None,
        });
        assert_eq!(vertical_label, Some(ScreenPoint::new(380.0, 25.0)));
    }
}
