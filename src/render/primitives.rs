//! Primitive rendering functions.
//!
//! Every primitive is built from one operation: stamping a filled disc of a
//! given radius. Lines walk an integer Bresenham path and stamp at each step;
//! hexagons chain six lines.

use crate::color::Gray16;
use crate::error::Result;
use crate::geometry::{clamp_coord, Hexagon, Point, Segment};
use crate::heightfield::HeightField;
use log::debug;

/// Stroke settings shared by every stamp of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pen {
    /// Disc radius in pixels (0 = single pixel).
    pub radius: u32,
    /// Normalized height written by the pen.
    pub height: f64,
}

impl Pen {
    /// Create a new pen.
    #[must_use]
    pub const fn new(radius: u32, height: f64) -> Self {
        Self { radius, height }
    }
}

/// Trait for primitives drawn with a [`Pen`].
pub trait Drawable {
    /// Draw this primitive onto a height field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidHeight`] before anything is written if the
    /// pen height is outside `[0, 1]`.
    fn draw(&self, field: &mut HeightField, pen: Pen) -> Result<()>;
}

// ============================================================================
// Circle Stamp
// ============================================================================

/// Stamp a filled disc: every `(dx, dy)` with `dx² + dy² <= radius²` around
/// `center` is set to `height`.
///
/// The part of the disc outside the field is clipped.
pub fn stamp_circle(field: &mut HeightField, center: Point, radius: u32, height: f64) -> Result<()> {
    let sample = Gray16::from_height(height)?;
    stamp_disc(field, center, radius, sample);
    Ok(())
}

/// Disc stamp with an already-encoded sample.
///
/// Only rows of the disc that intersect the field are visited; each gets one
/// clipped span of half-width `isqrt(r² - dy²)`.
fn stamp_disc(field: &mut HeightField, center: Point, radius: u32, sample: Gray16) {
    let r = i64::from(radius);
    // (u32::MAX)² fits in u64
    let r_sq = u64::from(radius) * u64::from(radius);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let top = (cy - r).max(0);
    let bottom = (cy + r).min(i64::from(field.height()) - 1);

    for y in top..=bottom {
        let dy = (y - cy).unsigned_abs();
        let half = isqrt(r_sq - dy * dy) as i64;
        field.fill_span(clamp_coord(cx - half), clamp_coord(cx + half), y as i32, sample);
    }
}

/// Largest `s` with `s² <= n`.
fn isqrt(n: u64) -> u64 {
    let n_wide = u128::from(n);
    let mut s = (n as f64).sqrt() as u64;
    while u128::from(s) * u128::from(s) > n_wide {
        s -= 1;
    }
    while u128::from(s + 1) * u128::from(s + 1) <= n_wide {
        s += 1;
    }
    s
}

/// Draw a single stamp (the degenerate segment).
pub fn draw_point(field: &mut HeightField, at: Point, radius: u32, height: f64) -> Result<()> {
    stamp_circle(field, at, radius, height)
}

impl Drawable for Point {
    fn draw(&self, field: &mut HeightField, pen: Pen) -> Result<()> {
        draw_point(field, *self, pen.radius, pen.height)
    }
}

// ============================================================================
// Line Rasterization
// ============================================================================

/// How a segment is walked. Variants are tested in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Both endpoints coincide.
    Point,
    /// Constant y.
    Horizontal,
    /// Constant x.
    Vertical,
    /// `|dx| == |dy|`.
    Diagonal,
    /// Wider than high.
    Shallow,
    /// Higher than wide.
    Steep,
}

impl SegmentKind {
    /// Classify the segment between two endpoints.
    #[must_use]
    pub fn classify(start: Point, end: Point) -> Self {
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();

        if start == end {
            Self::Point
        } else if dy == 0 {
            Self::Horizontal
        } else if dx == 0 {
            Self::Vertical
        } else if dx == dy {
            Self::Diagonal
        } else if dx > dy {
            Self::Shallow
        } else {
            Self::Steep
        }
    }
}

/// Walk the pixel centers of a segment, calling `visit` once per step.
///
/// Endpoints are first ordered by x so that `a -> b` and `b -> a` visit the
/// same centers. Both endpoints are always visited. The walk uses only
/// integer arithmetic; the error term starts at the major-axis delta and the
/// minor axis steps whenever it goes negative.
pub fn walk_segment<F: FnMut(Point)>(start: Point, end: Point, mut visit: F) -> SegmentKind {
    let (p1, p2) = if start.x > end.x { (end, start) } else { (start, end) };
    let kind = SegmentKind::classify(p1, p2);

    // dx >= 0 after ordering
    let dx = i64::from(p2.x) - i64::from(p1.x);
    let dy = (i64::from(p2.y) - i64::from(p1.y)).abs();
    let sy = if p1.y < p2.y { 1 } else { -1 };

    match kind {
        SegmentKind::Point => visit(p1),
        SegmentKind::Horizontal => {
            for x in p1.x..=p2.x {
                visit(Point::new(x, p1.y));
            }
        }
        SegmentKind::Vertical => {
            let (y0, y1) = if p1.y > p2.y { (p2.y, p1.y) } else { (p1.y, p2.y) };
            for y in y0..=y1 {
                visit(Point::new(p1.x, y));
            }
        }
        SegmentKind::Diagonal => {
            let mut p = p1;
            for _ in 0..dx {
                visit(p);
                p = p.offset(1, sy);
            }
            visit(p);
        }
        SegmentKind::Shallow => {
            let (mut p, mut e) = (p1, dx);
            for _ in 0..dx {
                visit(p);
                p.x += 1;
                e -= 2 * dy;
                if e < 0 {
                    p.y += sy;
                    e += 2 * dx;
                }
            }
            visit(p2);
        }
        SegmentKind::Steep => {
            let (mut p, mut e) = (p1, dy);
            for _ in 0..dy {
                visit(p);
                p.y += sy;
                e -= 2 * dx;
                if e < 0 {
                    p.x += 1;
                    e += 2 * dy;
                }
            }
            visit(p2);
        }
    }

    kind
}

/// Collect the pixel centers [`walk_segment`] visits.
#[must_use]
pub fn segment_centers(start: Point, end: Point) -> Vec<Point> {
    let mut centers = Vec::new();
    walk_segment(start, end, |p| centers.push(p));
    centers
}

/// Draw a thick line by stamping a disc at every center of the walk.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidHeight`] before anything is written if
/// `height` is outside `[0, 1]`.
pub fn draw_segment(
    field: &mut HeightField,
    start: Point,
    end: Point,
    radius: u32,
    height: f64,
) -> Result<()> {
    let sample = Gray16::from_height(height)?;
    let kind = walk_segment(start, end, |p| stamp_disc(field, p, radius, sample));
    debug!("segment {start:?} -> {end:?} ({kind:?}, radius {radius}, height {height})");
    Ok(())
}

impl Segment {
    /// The pen this segment is stroked with.
    #[must_use]
    pub const fn pen(&self) -> Pen {
        Pen::new(self.radius, self.height)
    }

    /// Draw this segment with its own radius and height.
    pub fn draw(&self, field: &mut HeightField) -> Result<()> {
        draw_segment(field, self.start, self.end, self.radius, self.height)
    }
}

// ============================================================================
// Hexagon Outline
// ============================================================================

/// Draw the closed outline of a regular hexagon.
///
/// Issues six segments between consecutive corners, see [`Hexagon::edges`].
///
/// # Errors
///
/// Returns [`crate::Error::InvalidHeight`] before anything is written if
/// `height` is outside `[0, 1]`.
pub fn draw_hex(
    field: &mut HeightField,
    center: Point,
    size: u32,
    radius: u32,
    height: f64,
) -> Result<()> {
    Hexagon::new(center, size).draw(field, Pen::new(radius, height))
}

impl Drawable for Hexagon {
    fn draw(&self, field: &mut HeightField, pen: Pen) -> Result<()> {
        // Validate once so a bad height cannot leave a partial outline
        Gray16::from_height(pen.height)?;
        debug!("hexagon at {:?} size {}: corners {:?}", self.center(), self.size(), self.corners());

        for (start, end) in self.edges() {
            draw_segment(field, start, end, pen.radius, pen.height)?;
        }
        Ok(())
    }
}

// ============================================================================
// Center Band
// ============================================================================

/// Draw a vertical band `line_width` columns wide, centered on the middle
/// column, spanning the full field height.
///
/// Columns outside the field are clipped.
pub fn draw_center_band(field: &mut HeightField, line_width: u32, height: f64) -> Result<()> {
    let sample = Gray16::from_height(height)?;
    let first = i64::from(field.width() / 2) - i64::from(line_width / 2);

    for i in 0..i64::from(line_width) {
        let x = clamp_coord(first + i);
        if !field.contains(x, 0) {
            continue;
        }
        for y in 0..field.height() as i32 {
            field.put_sample(x, y, sample);
        }
    }
    debug!("center band {line_width} columns wide at height {height}");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn point() -> impl Strategy<Value = Point> {
        (-60i32..60, -60i32..60).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// a -> b and b -> a visit the same centers.
        #[test]
        fn prop_walk_direction_independent(a in point(), b in point()) {
            let forward: BTreeSet<Point> = segment_centers(a, b).into_iter().collect();
            let backward: BTreeSet<Point> = segment_centers(b, a).into_iter().collect();
            prop_assert_eq!(forward, backward);
        }

        /// Consecutive centers are 8-connected and distinct.
        #[test]
        fn prop_walk_is_connected(a in point(), b in point()) {
            let centers = segment_centers(a, b);
            for w in centers.windows(2) {
                let (dx, dy) = ((w[1].x - w[0].x).abs(), (w[1].y - w[0].y).abs());
                prop_assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0));
            }
            let major = (a.x - b.x).abs().max((a.y - b.y).abs()) as usize;
            prop_assert_eq!(centers.len(), major + 1);
        }

        /// Ascending shallow and steep walks are mirror images.
        #[test]
        fn prop_steep_mirrors_shallow(x in 0i32..60, y in 0i32..60) {
            let a = segment_centers(Point::ORIGIN, Point::new(x, y));
            let b: Vec<Point> = segment_centers(Point::ORIGIN, Point::new(y, x))
                .into_iter()
                .map(Point::transpose)
                .collect();
            prop_assert_eq!(a, b);
        }

        /// Drawing in either direction yields identical fields.
        #[test]
        fn prop_draw_direction_independent(a in point(), b in point(), radius in 0u32..4) {
            let mut f1 = HeightField::with_initial_height(48, 48, 0.0).unwrap();
            let mut f2 = f1.clone();
            draw_segment(&mut f1, a, b, radius, 1.0).unwrap();
            draw_segment(&mut f2, b, a, radius, 1.0).unwrap();
            prop_assert_eq!(f1, f2);
        }

        /// Stamps never panic and only write in-bounds cells of the disc.
        #[test]
        fn prop_stamp_bounds_safe(
            c in prop_oneof![
                point(),
                (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::new(x, y)),
            ],
            radius in prop_oneof![0u32..40, any::<u32>()],
        ) {
            let mut field = HeightField::with_initial_height(16, 24, 0.0).unwrap();
            stamp_circle(&mut field, c, radius, 1.0).unwrap();

            let r = i128::from(radius);
            for y in 0..16i32 {
                for x in 0..24i32 {
                    let dx = i128::from(x) - i128::from(c.x);
                    let dy = i128::from(y) - i128::from(c.y);
                    let inside = dx * dx + dy * dy <= r * r;
                    let expected = if inside { 1.0 } else { 0.0 };
                    prop_assert_eq!(field.get(x, y), Some(expected));
                }
            }
        }
    }
}
