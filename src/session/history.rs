use std::collections::VecDeque;

use crate::geometry::Polygon;

/// Default number of snapshots kept for undo.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Bounded, linear undo history of polygon snapshots.
///
/// Pushing beyond the capacity evicts the oldest snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Polygon>,
    capacity: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` snapshots (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a copy of `polygon` as the newest snapshot.
    pub fn push(&mut self, polygon: &Polygon) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(polygon.clone());
    }

    /// Removes and returns the newest snapshot.
    pub fn pop(&mut self) -> Option<Polygon> {
        self.snapshots.pop_back()
    }

    /// Returns the newest snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&Polygon> {
        self.snapshots.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[allow(clippy::cast_precision_loss)]
    fn polygon_with(n: usize) -> Polygon {
        (0..n).map(|i| Point2::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn push_and_pop_are_lifo() {
        let mut history = History::default();
        history.push(&polygon_with(1));
        history.push(&polygon_with(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap().len(), 2);
        assert_eq!(history.latest().unwrap().len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = History::new(3);
        for n in 1..=5 {
            history.push(&polygon_with(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().len(), 5);
        history.pop();
        history.pop();
        assert_eq!(history.pop().unwrap().len(), 3);
        assert!(history.is_empty());
    }

    #[test]
    fn default_capacity_is_twenty() {
        let mut history = History::default();
        assert_eq!(history.capacity(), 20);
        for n in 0..25 {
            history.push(&polygon_with(n));
        }
        assert_eq!(history.len(), 20);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = History::new(0);
        history.push(&polygon_with(1));
        history.push(&polygon_with(2));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut history = History::default();
        let mut poly = polygon_with(2);
        history.push(&poly);
        poly.clear();
        assert_eq!(history.latest().unwrap().len(), 2);
    }
}
