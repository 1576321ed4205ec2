//! 2d-tree.
//!
//! Nodes at even depth split on x, nodes at odd depth on y. On the split axis points strictly
//! less than the node go to the left subtree, everything else to the right.
//!
//! The tree is never rebalanced: its shape is decided by the insertion order, or by the median
//! splits of [`KdTree::from_points`].
//!
//! Nodes live in a single `Vec` and link to their children by index, every traversal uses an
//! explicit stack. Degenerate (list shaped) trees are fine.
mod build;
mod node;

pub use build::{AxisOrder, BuildOptions, PARALLEL_SORT_THRESHOLD};

use crate::nearest::Nearest;
use crate::{Point, PointSet, Rect};
use node::{Node, NodeId, Side};
use std::iter::FromIterator;

#[derive(Debug, Default)]
pub struct KdTree {
    // nodes[0] is the root
    nodes: Vec<Node>,
}

impl KdTree {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a tree of `points` by inserting the median of each level first.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self::from_points_with(points, &BuildOptions::default())
    }

    pub fn from_points_with(points: Vec<Point>, options: &BuildOptions) -> Self {
        let count = points.len();
        let mut tree = Self::with_capacity(count);
        build::build(&mut tree, points, options);
        tracing::debug!(
            points = count,
            size = tree.len(),
            depth = tree.depth(),
            axis_order = ?options.axis_order,
            "built 2d-tree"
        );
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels, 0 for the empty tree.
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Return `false` if the point, or one equal to it, was already in the tree.
    pub fn put(&mut self, point: Point) -> bool {
        if self.contains(&point) {
            tracing::trace!(%point, "duplicate point ignored");
            return false;
        }
        let mut current = match self.root() {
            Some(root) => root,
            None => {
                self.nodes.push(Node::new(point, 0));
                return true;
            }
        };
        loop {
            let node = self.node(current);
            let side = node.side_of(&point);
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let depth = node.depth + 1;
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(Node::new(point, depth));
                    *self.nodes[current.index()].child_mut(side) = Some(id);
                    return true;
                }
            }
        }
    }

    /// Return if the tree holds `point` or a point equal to it.
    ///
    /// Follows the insertion path, and also the other side of every node whose split line is
    /// within epsilon of `point`, where an equal point may have been routed.
    pub fn contains(&self, point: &Point) -> bool {
        let mut stack = self.root().into_iter().collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.point == *point {
                return true;
            }
            let side = node.side_of(point);
            if node.near_split(point) {
                let other = match side {
                    Side::Left => Side::Right,
                    Side::Right => Side::Left,
                };
                stack.extend(node.child(other));
            }
            stack.extend(node.child(side));
        }
        false
    }

    /// Points inside `rect` in pre-order: node, left subtree, right subtree.
    ///
    /// Subtrees whose region does not touch `rect` are skipped.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut out = Vec::new();
        let mut stack = match self.root() {
            Some(root) => vec![(root, Rect::everything())],
            None => return out,
        };
        while let Some((id, region)) = stack.pop() {
            let node = self.node(id);
            if rect.contains(&node.point) {
                out.push(node.point);
            }
            // reversed so the left child is popped first
            for (child, child_region) in node.children_in(&region).into_iter().rev() {
                if rect.intersects(&child_region) {
                    stack.push((child, child_region));
                }
            }
        }
        out
    }

    /// The point closest to `point`.
    ///
    /// Trees holding fewer than 2 points answer `None`.
    pub fn nearest(&self, point: &Point) -> Option<Point> {
        if self.len() < 2 {
            return None;
        }
        self.nearest_k(point, 1).pop()
    }

    /// The `k` points closest to `point`, or all of them if the tree holds fewer than `k`.
    ///
    /// Ascending by distance, equal distances ordered by `Point::lex_cmp`.
    pub fn nearest_k(&self, point: &Point, k: usize) -> Vec<Point> {
        let mut nearest = Nearest::new(*point, k);
        let mut stack = match self.root() {
            Some(root) if k > 0 => vec![(root, Rect::everything())],
            _ => return vec![],
        };
        let mut visited = 0usize;
        let mut pruned = 0usize;
        while let Some((id, region)) = stack.pop() {
            if !nearest.may_improve(region.distance(nearest.target())) {
                pruned += 1;
                continue;
            }
            visited += 1;
            let node = self.node(id);
            nearest.offer(node.point);

            let children = node.children_in(&region);
            // push the far side first, the side of the query is searched first
            match node.side_of(point) {
                Side::Left => stack.extend(children.into_iter().rev()),
                Side::Right => stack.extend(children),
            }
        }
        tracing::trace!(k, visited, pruned, "nearest search done");
        nearest.into_sorted()
    }

    /// Iterate in pre-order: node, left subtree, right subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            stack: self.root().into_iter().collect(),
            remaining: self.len(),
        }
    }
}

/// Inserts the points of `self` one by one into a new tree.
impl Clone for KdTree {
    fn clone(&self) -> Self {
        let mut res = Self::with_capacity(self.len());
        res.extend(self.iter().copied());
        res
    }
}

pub struct Iter<'a> {
    tree: &'a KdTree,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a KdTree {
    type Item = &'a Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Point> for KdTree {
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point>,
    {
        for p in it {
            self.put(p);
        }
    }
}

/// Bulk builds the tree, see [`KdTree::from_points`].
impl FromIterator<Point> for KdTree {
    fn from_iter<It>(it: It) -> Self
    where
        It: IntoIterator<Item = Point>,
    {
        Self::from_points(it.into_iter().collect())
    }
}

impl PointSet for KdTree {
    type Iter<'a> = Iter<'a>;

    fn len(&self) -> usize {
        KdTree::len(self)
    }

    fn put(&mut self, point: Point) -> bool {
        KdTree::put(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        KdTree::contains(self, point)
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        KdTree::range(self, rect)
    }

    fn nearest(&self, point: &Point) -> Option<Point> {
        KdTree::nearest(self, point)
    }

    fn nearest_k(&self, point: &Point, k: usize) -> Vec<Point> {
        KdTree::nearest_k(self, point, k)
    }

    fn iter(&self) -> Self::Iter<'_> {
        KdTree::iter(self)
    }
}
