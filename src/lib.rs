//! # terrain-raster
//!
//! Rasterizes points, thick lines and hexagon outlines onto a 16-bit
//! grayscale height field and saves it as PNG.
//!
//! Every primitive is built from a single operation, the disc stamp: lines
//! walk an integer Bresenham path and stamp a filled circle at each step,
//! hexagons chain six lines between their corners.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use terrain_raster::prelude::*;
//!
//! # fn main() -> terrain_raster::Result<()> {
//! // 2048 rows x 2048 columns, every sample at 0.5
//! let mut field = HeightField::new(2048, 2048)?;
//!
//! draw_hex(&mut field, Point::new(1024, 1024), 512, 10, 0.8)?;
//! draw_segment(&mut field, Point::new(0, 0), Point::new(2047, 600), 3, 1.0)?;
//!
//! field.save_image("heightmap.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Bounds
//!
//! Stamps are clipped to the field. Direct writes through
//! [`HeightField::set`](heightfield::HeightField::set) outside the field fail
//! with [`Error::OutOfBounds`]. Heights outside `[0, 1]` fail with
//! [`Error::InvalidHeight`] before any sample of the primitive is written.
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Height-to-sample encoding.
pub mod color;

/// Height field storage.
pub mod heightfield;

/// Geometric primitives (points, segments, hexagons).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of stamps, lines and hexagons.
pub mod render;

/// Output encoders (PNG).
pub mod output;

/// YAML scene descriptions.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for terrain-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use terrain_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Gray16, MAX_SAMPLE};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Hexagon, Point, Segment};
    pub use crate::heightfield::HeightField;
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        draw_center_band, draw_hex, draw_point, draw_segment, stamp_circle, Drawable, Pen,
    };
    pub use crate::scene::{Scene, Shape};
}
