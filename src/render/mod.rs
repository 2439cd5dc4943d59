//! Rasterization of points, thick lines and hexagon outlines.
//!
//! # Algorithms
//!
//! - **Disc stamp**: filled circle written span by span, clipped to the field
//! - **Bresenham's Line**: integer error-accumulation walk, one stamp per step
//! - **Hexagon**: six chained segments between corners at `60 * i + 30` degrees
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;

pub use primitives::{
    draw_center_band, draw_hex, draw_point, draw_segment, segment_centers, stamp_circle,
    walk_segment, Drawable, Pen, SegmentKind,
};
