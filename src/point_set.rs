use crate::{Point, Rect};

/// A growable set of planar points.
///
/// Points are unique by approximate equality (see `Point`'s `PartialEq`). There is no removal.
pub trait PointSet {
    type Iter<'a>: Iterator<Item = &'a Point>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `point`. Return if the point was not in the set yet.
    fn put(&mut self, point: Point) -> bool;

    fn contains(&self, point: &Point) -> bool;

    /// All points inside `rect`, boundary included.
    fn range(&self, rect: &Rect) -> Vec<Point>;

    /// The closest point to `point`, if any.
    fn nearest(&self, point: &Point) -> Option<Point>;

    /// At most `k` points closest to `point`, ascending by distance.
    /// Points at the same distance are ordered by `Point::lex_cmp`.
    fn nearest_k(&self, point: &Point, k: usize) -> Vec<Point>;

    fn iter(&self) -> Self::Iter<'_>;
}
