//! Planar point sets.
//!
//! Two interchangeable implementations of [`PointSet`]:
//! - [`OrderedSet`](ordered_set::OrderedSet) backed by a `BTreeSet`
//! - [`KdTree`](kdtree::KdTree) a 2d-tree splitting on x at even depths and on y at odd depths
//!
//! # Contracts:
//! - Two points are the same point if both of their coordinates differ by less than
//!   `f64::EPSILON`.
//! - Sets never hold two points that are the same by the rule above.
//!
pub mod error;
pub mod kdtree;
mod nearest;
pub mod ordered_set;
pub mod point_set;
pub mod rect;
pub mod text;

pub use error::{Error, Result};
pub use kdtree::KdTree;
pub use ordered_set::OrderedSet;
pub use point_set::PointSet;
pub use rect::Rect;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The split axis of a node at `depth`.
    pub fn for_depth(depth: u32) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Point(pub [f64; 2]);

impl Deref for Point {
    type Target = [f64; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Approximate equality, see the crate level contracts.
impl PartialEq for Point {
    fn eq(&self, rhs: &Self) -> bool {
        (self[0] - rhs[0]).abs() < f64::EPSILON && (self[1] - rhs[1]).abs() < f64::EPSILON
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self[0], self[1])
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> f64 {
        self[0]
    }

    pub fn y(&self) -> f64 {
        self[1]
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self[0],
            Axis::Y => self[1],
        }
    }

    pub fn distance_squared(&self, rhs: &Self) -> f64 {
        let x = self[0] - rhs[0];
        let y = self[1] - rhs[1];
        x * x + y * y
    }

    pub fn distance(&self, rhs: &Self) -> f64 {
        self.distance_squared(rhs).sqrt()
    }

    /// Lexicographic total order on (x, y).
    ///
    /// Exact, unlike `==`: two points may compare `Equal` here only if their coordinates are
    /// bit-for-bit identical (modulo the sign of zero, which `total_cmp` tells apart).
    pub fn lex_cmp(&self, rhs: &Self) -> Ordering {
        self[0]
            .total_cmp(&rhs[0])
            .then_with(|| self[1].total_cmp(&rhs[1]))
    }
}
