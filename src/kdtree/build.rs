use super::KdTree;
use crate::{Axis, Point};
use rayon::prelude::*;

/// Slices at least this long are sorted in parallel during bulk builds.
pub const PARALLEL_SORT_THRESHOLD: usize = 1 << 13;

/// Axis used to sort the points of each level of a bulk build.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AxisOrder {
    /// Level `n` sorts by the axis nodes at depth `n` split on: x first.
    MatchDepth,
    /// Level `n` sorts by the other axis: y first.
    ///
    /// Reproduces the shape of trees built by earlier versions of this structure. Lookups are
    /// unaffected, the medians just split less evenly.
    Legacy,
}

impl AxisOrder {
    pub fn axis(self, level: u32) -> Axis {
        match self {
            AxisOrder::MatchDepth => Axis::for_depth(level),
            AxisOrder::Legacy => Axis::for_depth(level).other(),
        }
    }
}

impl Default for AxisOrder {
    fn default() -> Self {
        AxisOrder::MatchDepth
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BuildOptions {
    pub axis_order: AxisOrder,
    pub parallel_sort_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            axis_order: AxisOrder::default(),
            parallel_sort_threshold: PARALLEL_SORT_THRESHOLD,
        }
    }
}

/// Insert `points` median first, level by level, into `tree`.
pub(super) fn build(tree: &mut KdTree, mut points: Vec<Point>, options: &BuildOptions) {
    // half open ranges of `points` with their level
    let mut work = vec![(0, points.len(), 0u32)];
    while let Some((begin, end, level)) = work.pop() {
        if begin >= end {
            continue;
        }
        let axis = options.axis_order.axis(level);
        sort_by_axis(
            &mut points[begin..end],
            axis,
            options.parallel_sort_threshold,
        );

        let mid = begin + (end - begin) / 2;
        tree.put(points[mid]);

        // the upper half is built first
        work.push((begin, mid, level + 1));
        work.push((mid + 1, end, level + 1));
    }
}

fn sort_by_axis(points: &mut [Point], axis: Axis, parallel_threshold: usize) {
    let cmp = |a: &Point, b: &Point| a.coord(axis).total_cmp(&b.coord(axis));
    if points.len() >= parallel_threshold {
        points.par_sort_unstable_by(cmp);
    } else {
        points.sort_unstable_by(cmp);
    }
}
