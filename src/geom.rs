//! Frame-space geometry: sizes, points, rectangles, and polygon helpers.
//!
//! Frame sizes are integral (they describe pixel buffers). Everything placed
//! on a frame is `f64`, because pan offsets, border compensation, and logo
//! scaling all produce fractional coordinates.

use num_traits::Float;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The full frame as a rectangle at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    /// Pixel area.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A point in frame-pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in frame-pixel space.
///
/// Width and height may come out negative from border compensation on tiny
/// frames; [`is_empty`](Self::is_empty) treats those as nothing to draw.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// No drawable area (zero, negative, or NaN extent).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Edge-inclusive containment.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Shift by a vector.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Signed area of a closed polygon (shoelace formula).
///
/// Positive for clockwise winding in y-down frame space. Self-intersecting
/// polygons yield the sum of their loops' signed areas.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice / 2.0
}

/// Nonzero-winding containment test, matching a 2D canvas `clip()`.
///
/// Points exactly on an edge may land on either side.
pub fn winding_contains(points: &[Point], p: Point) -> bool {
    winding_number(points, p) != 0
}

fn winding_number(points: &[Point], p: Point) -> i32 {
    let n = points.len();
    let mut winding = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && cross(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Z component of `(b - a) × (p - a)`.
fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Distance from `p` to the closed segment `a`–`b`.
pub fn distance_to_segment(a: Point, b: Point, p: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return Float::hypot(p.x - a.x, p.y - a.y);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    Float::hypot(p.x - (a.x + t * dx), p.y - (a.y + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, s: f64) -> [Point; 4] {
        [
            Point::new(x, y),
            Point::new(x + s, y),
            Point::new(x + s, y + s),
            Point::new(x, y + s),
        ]
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(30.1, 15.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }

    #[test]
    fn negative_extent_is_empty() {
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, f64::NAN, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 0.5, 0.5).is_empty());
    }

    #[test]
    fn shoelace_square() {
        assert_eq!(signed_area(&square(0.0, 0.0, 4.0)).abs(), 16.0);
    }

    #[test]
    fn winding_inside_outside() {
        let sq = square(0.0, 0.0, 10.0);
        assert!(winding_contains(&sq, Point::new(5.0, 5.0)));
        assert!(!winding_contains(&sq, Point::new(15.0, 5.0)));
        assert!(!winding_contains(&sq, Point::new(-1.0, -1.0)));
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(distance_to_segment(a, b, Point::new(5.0, 3.0)), 3.0);
        assert_eq!(distance_to_segment(a, b, Point::new(13.0, 4.0)), 5.0);
    }
}
