//! Geometric primitives for rasterization.
//!
//! All coordinates are integer pixel positions. Points may lie outside the
//! field; clipping happens when samples are written.

use serde::{Deserialize, Serialize};

/// A 2D point with integer pixel coordinates.
///
/// Serialized as a two-element `[x, y]` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Mirror across the `x == y` diagonal.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A stroked line segment: two endpoints, a pen radius and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Radius of the disc stamped at every step (0 = single pixel).
    pub radius: u32,
    /// Normalized height written by the stroke.
    pub height: f64,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point, radius: u32, height: f64) -> Self {
        Self {
            start,
            end,
            radius,
            height,
        }
    }
}

/// A regular, pointy-top hexagon outline.
///
/// Corners are computed once, at construction. Corner `i` lies at
/// `60 * i + 30` degrees from the positive x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexagon {
    center: Point,
    size: u32,
    corners: [Point; 6],
}

impl Hexagon {
    /// Create a hexagon from its center and circumradius.
    #[must_use]
    pub fn new(center: Point, size: u32) -> Self {
        Self {
            center,
            size,
            corners: hex_corners(center, size),
        }
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Circumradius in pixels.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// The six corners, in angular order starting at 30 degrees.
    #[must_use]
    pub const fn corners(&self) -> [Point; 6] {
        self.corners
    }

    /// The six outline edges as `(start, end)` pairs.
    ///
    /// The walk starts at corner 1 and wraps through corner 0 back to corner 1,
    /// so the end of edge `k` is always the start of edge `(k + 1) % 6`.
    #[must_use]
    pub fn edges(&self) -> [(Point, Point); 6] {
        std::array::from_fn(|k| (self.corners[(k + 1) % 6], self.corners[(k + 2) % 6]))
    }
}

/// Corner `i` of a hexagon, rounded to the nearest pixel.
///
/// Corners beyond the `i32` range are clamped to it.
#[must_use]
pub fn hex_corner(center: Point, size: u32, i: usize) -> Point {
    let angle = (60.0 * i as f64 + 30.0).to_radians();
    let size = f64::from(size);
    // |offset| <= u32::MAX, so the sum fits in i64
    let dx = (size * angle.cos()).round() as i64;
    let dy = (size * angle.sin()).round() as i64;
    Point::new(
        clamp_coord(i64::from(center.x) + dx),
        clamp_coord(i64::from(center.y) + dy),
    )
}

/// Clamp a wide coordinate to the `i32` range.
#[inline]
pub(crate) fn clamp_coord(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn hex_corners(center: Point, size: u32) -> [Point; 6] {
    std::array::from_fn(|i| hex_corner(center, size, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset_and_transpose() {
        let p = Point::new(3, -2);
        assert_eq!(p.offset(1, 1), Point::new(4, -1));
        assert_eq!(p.transpose(), Point::new(-2, 3));
        assert_eq!(Point::from((3, -2)), p);
        assert_eq!(Point::from([3, -2]), p);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Point::new(i32::MAX - 1, 0).offset(5, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(0, i32::MIN).offset(0, -1), Point::new(0, i32::MIN));
    }

    #[test]
    fn test_hex_corners_near_i32_limits() {
        let hex = Hexagon::new(Point::new(i32::MAX - 10, i32::MIN + 10), 100);
        let corners = hex.corners();
        // 30 degrees: x clamps, y = MIN + 10 + 50
        assert_eq!(corners[0], Point::new(i32::MAX, i32::MIN + 60));
        // 270 degrees: y clamps, x unchanged
        assert_eq!(corners[4], Point::new(i32::MAX - 10, i32::MIN));
    }

    #[test]
    fn test_hex_corners_huge_size() {
        let hex = Hexagon::new(Point::ORIGIN, u32::MAX);
        let corners = hex.corners();
        // 90 degrees: dy = u32::MAX overshoots, dx rounds to 0
        assert_eq!(corners[1], Point::new(0, i32::MAX));
        assert_eq!(corners[4], Point::new(0, i32::MIN));
    }

    #[test]
    fn test_hex_corner_positions() {
        let hex = Hexagon::new(Point::new(100, 100), 100);
        let corners = hex.corners();
        // 30 degrees: (cos, sin) = (0.866, 0.5)
        assert_eq!(corners[0], Point::new(187, 150));
        // 90 degrees: straight down in image space
        assert_eq!(corners[1], Point::new(100, 200));
        assert_eq!(corners[2], Point::new(13, 150));
        assert_eq!(corners[3], Point::new(13, 50));
        assert_eq!(corners[4], Point::new(100, 0));
        assert_eq!(corners[5], Point::new(187, 50));
    }

    #[test]
    fn test_hex_edges_close_loop() {
        let hex = Hexagon::new(Point::new(1024, 1024), 512);
        let edges = hex.edges();
        assert_eq!(edges[0].0, hex.corners()[1]);
        for k in 0..6 {
            assert_eq!(edges[k].1, edges[(k + 1) % 6].0);
        }
    }

    #[test]
    fn test_hex_zero_size_collapses() {
        let hex = Hexagon::new(Point::new(7, 9), 0);
        assert!(hex.corners().iter().all(|&c| c == Point::new(7, 9)));
    }
}
