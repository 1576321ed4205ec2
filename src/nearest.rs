use crate::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist: f64,
    point: Point,
}

impl Ord for Candidate {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.dist
            .total_cmp(&rhs.dist)
            .then_with(|| self.point.lex_cmp(&rhs.point))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Keeps the `k` smallest `(distance, point)` pairs offered to it.
#[derive(Debug)]
pub(crate) struct Nearest {
    target: Point,
    k: usize,
    // max-heap, the root is the current k-th best
    heap: BinaryHeap<Candidate>,
}

impl Nearest {
    pub fn new(target: Point, k: usize) -> Self {
        Self {
            target,
            k,
            heap: BinaryHeap::with_capacity(k.saturating_add(1).min(1024)),
        }
    }

    pub fn target(&self) -> &Point {
        &self.target
    }

    pub fn offer(&mut self, point: Point) {
        if self.k == 0 {
            return;
        }
        let dist = self.target.distance(&point);
        self.heap.push(Candidate { dist, point });
        if self.heap.len() > self.k {
            self.heap.pop();
        }
    }

    /// Distance of the worst kept candidate, once `k` candidates are kept.
    pub fn bound(&self) -> Option<f64> {
        if self.k == 0 {
            return Some(f64::NEG_INFINITY);
        }
        if self.heap.len() < self.k {
            return None;
        }
        self.heap.peek().map(|c| c.dist)
    }

    /// Return if a region whose closest point lies at `lower_bound` may hold a better candidate.
    pub fn may_improve(&self, lower_bound: f64) -> bool {
        match self.bound() {
            // equal distances still compete on the point order
            Some(bound) => lower_bound <= bound,
            None => true,
        }
    }

    /// Points by ascending distance, ties by `Point::lex_cmp`.
    pub fn into_sorted(self) -> Vec<Point> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| c.point)
            .collect()
    }
}
