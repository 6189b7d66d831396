//! Vertical range estimation from sampled data.

use crate::geom::Point;

/// Smallest vertical half-range; also used when there is no data.
pub const MIN_VERTICAL_RANGE: u32 = 10;

/// Headroom added beyond the dominant extremum.
const MARGIN: i64 = 5;

/// Estimate the half-height of the vertical axis for `points`.
///
/// Y values are truncated toward zero. The extremum with the larger
/// magnitude decides the range, plus a margin of 5, with a floor of 10.
/// Non-finite y values are ignored.
pub fn estimate_vertical_range<'a, I>(points: I) -> u32
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut max: Option<i64> = None;
    let mut min: Option<i64> = None;
    for point in points {
        if !point.y.is_finite() {
            continue;
        }
        let y = point.y.trunc() as i64;
        max = Some(max.map_or(y, |m| m.max(y)));
        min = Some(min.map_or(y, |m| m.min(y)));
    }
    let floor = i64::from(MIN_VERTICAL_RANGE);
    let max = max.unwrap_or(floor);
    let min = min.unwrap_or(-floor);

    let out = if max.saturating_sub(min.saturating_abs()) >= 0 {
        if max < floor { floor } else { max.saturating_add(MARGIN) }
    } else if min > -floor {
        floor
    } else {
        min.saturating_sub(MARGIN)
    };
    out.unsigned_abs().min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ys(values: &[f64]) -> Vec<Point> {
        values.iter().map(|&y| Point::new(0.0, y)).collect()
    }

    #[test]
    fn empty_data_uses_floor() {
        assert_eq!(estimate_vertical_range(&[] as &[Point]), 10);
    }

    #[test]
    fn small_values_stay_at_floor() {
        assert_eq!(estimate_vertical_range(&ys(&[3.0, -2.0, 7.0])), 10);
        assert_eq!(estimate_vertical_range(&ys(&[-9.9, 9.9])), 10);
    }

    #[test]
    fn positive_extremum_adds_margin() {
        assert_eq!(estimate_vertical_range(&ys(&[24.0, -3.0])), 29);
        assert_eq!(estimate_vertical_range(&ys(&[10.0])), 15);
    }

    #[test]
    fn negative_extremum_adds_margin() {
        assert_eq!(estimate_vertical_range(&ys(&[-2.0, -31.0])), 36);
        assert_eq!(estimate_vertical_range(&ys(&[-10.0, 4.0])), 15);
    }

    #[test]
    fn values_truncate_toward_zero() {
        assert_eq!(estimate_vertical_range(&ys(&[19.99])), 24);
        assert_eq!(estimate_vertical_range(&ys(&[-10.9, 1.0])), 15);
    }

    #[test]
    fn banded_data_never_drops_below_floor() {
        for a in -10..=10 {
            for b in -10..=10 {
                let range = estimate_vertical_range(&ys(&[a as f64, b as f64 * 0.7]));
                assert!(range >= 10, "range {range} for {a}, {b}");
                assert!(range <= 15);
            }
        }
    }

    #[test]
    fn non_finite_values_are_ignored() {
        assert_eq!(estimate_vertical_range(&ys(&[f64::NAN, f64::INFINITY])), 10);
        assert_eq!(estimate_vertical_range(&ys(&[f64::NAN, 40.0])), 45);
    }
}
