//! Observable point storage that reports every structural change.

use std::fmt;

use tracing::trace;

use crate::geom::Point;

/// Callback invoked after a mutation, with the sequence in its new state.
pub type ChangeCallback = Box<dyn FnMut(&ObservableSequence) + Send>;

/// Ordered point storage with a single change listener.
///
/// Insertion order is the order points are connected when lines are drawn.
/// The listener runs exactly once per successful mutating call, always after
/// the mutation has been applied. Calls that change nothing (removing an
/// absent value, appending an empty batch) do not notify.
///
/// Index-based operations panic on out-of-range indices, like the matching
/// [`Vec`] methods.
#[derive(Default)]
pub struct ObservableSequence {
    points: Vec<Point>,
    on_change: Option<ChangeCallback>,
    generation: u64,
}

impl ObservableSequence {
    /// Create an empty sequence with no listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with a listener already registered.
    pub fn with_on_change(on_change: impl FnMut(&ObservableSequence) + Send + 'static) -> Self {
        Self {
            on_change: Some(Box::new(on_change)),
            ..Self::default()
        }
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&ObservableSequence) + Send + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Remove the change listener; later mutations are silent.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Append a point at the end.
    pub fn push(&mut self, point: Point) -> bool {
        self.points.push(point);
        self.notify("push");
        true
    }

    /// Insert a point at `index`, shifting later points right.
    pub fn insert(&mut self, index: usize, point: Point) {
        self.points.insert(index, point);
        self.notify("insert");
    }

    /// Remove and return the point at `index`.
    pub fn remove(&mut self, index: usize) -> Point {
        let removed = self.points.remove(index);
        self.notify("remove");
        removed
    }

    /// Remove the first point equal to `point`.
    ///
    /// Returns `false`, without notifying, when no such point exists.
    pub fn remove_value(&mut self, point: &Point) -> bool {
        let Some(index) = self.points.iter().position(|p| p == point) else {
            return false;
        };
        self.points.remove(index);
        self.notify("remove_value");
        true
    }

    /// Remove every point that appears in `points`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_all(&mut self, points: &[Point]) -> bool {
        let before = self.points.len();
        self.points.retain(|p| !points.contains(p));
        if self.points.len() == before {
            return false;
        }
        self.notify("remove_all");
        true
    }

    /// Remove every point. Always notifies.
    pub fn clear(&mut self) {
        self.points.clear();
        self.notify("clear");
    }

    /// Replace the point at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, point: Point) -> Point {
        let previous = std::mem::replace(&mut self.points[index], point);
        self.notify("set");
        previous
    }

    /// Append every point from `points` in iteration order.
    ///
    /// Notifies once for the whole batch. Returns `false` for an empty batch.
    pub fn extend<I>(&mut self, points: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        let before = self.points.len();
        self.points.extend(points);
        if self.points.len() == before {
            return false;
        }
        self.notify("extend");
        true
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Access a point by index.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Access all points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Count of successful mutations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn notify(&mut self, op: &'static str) {
        self.generation = self.generation.wrapping_add(1);
        trace!(op, len = self.points.len(), "point sequence changed");
        if let Some(mut on_change) = self.on_change.take() {
            on_change(self);
            // The listener only sees `&self`, so it cannot have registered a replacement.
            self.on_change = Some(on_change);
        }
    }
}

impl fmt::Debug for ObservableSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableSequence")
            .field("points", &self.points)
            .field("has_listener", &self.on_change.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}

impl<'a> IntoIterator for &'a ObservableSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
