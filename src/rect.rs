use crate::{Axis, Point};

/// Axis aligned, closed rectangle.
///
/// `from` is expected to be the lower left corner and `to` the upper right one, this is not
/// checked. An inverted rectangle contains no point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    from: Point,
    to: Point,
}

impl Rect {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(Point::new(xmin, ymin), Point::new(xmax, ymax))
    }

    /// The whole plane.
    pub fn everything() -> Self {
        Self::from_bounds(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        )
    }

    pub fn xmin(&self) -> f64 {
        self.from[0]
    }

    pub fn ymin(&self) -> f64 {
        self.from[1]
    }

    pub fn xmax(&self) -> f64 {
        self.to[0]
    }

    pub fn ymax(&self) -> f64 {
        self.to[1]
    }

    pub fn contains(&self, point: &Point) -> bool {
        let [x, y] = **point;
        self.from[0] <= x && self.from[1] <= y && x <= self.to[0] && y <= self.to[1]
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        // separating axis test
        if self.to[0] < other.from[0] || self.from[0] > other.to[0] {
            return false;
        }
        if self.to[1] < other.from[1] || self.from[1] > other.to[1] {
            return false;
        }
        true
    }

    /// Distance from `point` to the closest point of the rectangle. 0 if `point` is inside.
    pub fn distance(&self, point: &Point) -> f64 {
        let [x, y] = **point;
        let in_x = self.from[0] <= x && x <= self.to[0];
        let in_y = self.from[1] <= y && y <= self.to[1];
        match (in_x, in_y) {
            (true, true) => 0.0,
            (true, false) => (y - self.from[1]).abs().min((y - self.to[1]).abs()),
            (false, true) => (x - self.from[0]).abs().min((x - self.to[0]).abs()),
            (false, false) => {
                let corners = [
                    self.from,
                    self.to,
                    Point::new(self.from[0], self.to[1]),
                    Point::new(self.to[0], self.from[1]),
                ];
                corners
                    .iter()
                    .map(|c| c.distance(point))
                    .fold(f64::INFINITY, f64::min)
            }
        }
    }

    /// Cut the rectangle at `value` along `axis`.
    ///
    /// Returns the `(lower, upper)` halves. Both are closed, so they share the cutting line.
    pub fn split(&self, axis: Axis, value: f64) -> (Rect, Rect) {
        let mut lower = *self;
        let mut upper = *self;
        match axis {
            Axis::X => {
                lower.to.0[0] = value;
                upper.from.0[0] = value;
            }
            Axis::Y => {
                lower.to.0[1] = value;
                upper.from.0[1] = value;
            }
        }
        (lower, upper)
    }
}
