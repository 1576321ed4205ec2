use crate::{Axis, Point, Rect};
use arrayvec::ArrayVec;

/// Index of a node in `KdTree::nodes`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub point: Point,
    pub depth: u32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub fn new(point: Point, depth: u32) -> Self {
        Self {
            point,
            depth,
            left: None,
            right: None,
        }
    }

    pub fn axis(&self) -> Axis {
        Axis::for_depth(self.depth)
    }

    /// The side `point` belongs to: strictly less on the split axis goes left, the rest right.
    pub fn side_of(&self, point: &Point) -> Side {
        let axis = self.axis();
        if point.coord(axis) < self.point.coord(axis) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Return if `point` lies within epsilon of the split line.
    ///
    /// Points equal to such a point may sit on either side.
    pub fn near_split(&self, point: &Point) -> bool {
        let axis = self.axis();
        (point.coord(axis) - self.point.coord(axis)).abs() < f64::EPSILON
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Existing children, left first, each with the part of `region` its subtree lives in.
    pub fn children_in(&self, region: &Rect) -> ArrayVec<[(NodeId, Rect); 2]> {
        let (lower, upper) = region.split(self.axis(), self.point.coord(self.axis()));
        let mut res = ArrayVec::new();
        if let Some(left) = self.left {
            res.push((left, lower));
        }
        if let Some(right) = self.right {
            res.push((right, upper));
        }
        res
    }
}
