//! Point set on top of a `BTreeSet`, ordered by `Point::lex_cmp`.
//!
//! Queries scan every point. Mostly useful as a reference for the tree.

use crate::nearest::Nearest;
use crate::{Point, PointSet, Rect};
use std::cmp::Ordering;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::FromIterator;

#[derive(Debug, Clone, Copy)]
struct Key(Point);

impl Ord for Key {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.0.lex_cmp(&rhs.0)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl PartialEq for Key {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for Key {}

#[derive(Clone, Default)]
pub struct OrderedSet {
    points: BTreeSet<Key>,
}

impl fmt::Debug for OrderedSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn put(&mut self, point: Point) -> bool {
        if self.contains(&point) {
            tracing::trace!(%point, "duplicate point ignored");
            return false;
        }
        self.points.insert(Key(point))
    }

    pub fn contains(&self, point: &Point) -> bool {
        // every point approximately equal to `point` has its x within epsilon
        let [x, _] = **point;
        let lo = Key(Point::new(x - f64::EPSILON, f64::NEG_INFINITY));
        let hi = Key(Point::new(x + f64::EPSILON, f64::INFINITY));
        self.points.range(lo..=hi).any(|k| k.0 == *point)
    }

    /// Points inside `rect` in ascending `Point::lex_cmp` order.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        self.iter().filter(|p| rect.contains(p)).copied().collect()
    }

    pub fn nearest(&self, point: &Point) -> Option<Point> {
        self.nearest_k(point, 1).pop()
    }

    pub fn nearest_k(&self, point: &Point, k: usize) -> Vec<Point> {
        let mut nearest = Nearest::new(*point, k);
        for p in self.iter() {
            nearest.offer(*p);
        }
        nearest.into_sorted()
    }

    /// Iterate in ascending `Point::lex_cmp` order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.points.iter())
    }
}

pub struct Iter<'a>(btree_set::Iter<'a, Key>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|k| &k.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Point> for OrderedSet {
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point>,
    {
        for p in it {
            self.put(p);
        }
    }
}

impl FromIterator<Point> for OrderedSet {
    fn from_iter<It>(it: It) -> Self
    where
        It: IntoIterator<Item = Point>,
    {
        let mut res = Self::new();
        res.extend(it);
        res
    }
}

impl PointSet for OrderedSet {
    type Iter<'a> = Iter<'a>;

    fn len(&self) -> usize {
        OrderedSet::len(self)
    }

    fn put(&mut self, point: Point) -> bool {
        OrderedSet::put(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        OrderedSet::contains(self, point)
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        OrderedSet::range(self, rect)
    }

    fn nearest(&self, point: &Point) -> Option<Point> {
        OrderedSet::nearest(self, point)
    }

    fn nearest_k(&self, point: &Point, k: usize) -> Vec<Point> {
        OrderedSet::nearest_k(self, point, k)
    }

    fn iter(&self) -> Self::Iter<'_> {
        OrderedSet::iter(self)
    }
}
