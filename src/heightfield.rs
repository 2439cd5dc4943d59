//! Height field storage.
//!
//! A dense, row-major grid of 16-bit gray samples. Every stored sample decodes
//! to a height in `[0.0, 1.0]` because the only way in is through
//! [`Gray16::from_height`] or an already-valid [`Gray16`].
//!
//! Bounds policy: direct writes through [`HeightField::set`] fail with
//! [`Error::OutOfBounds`]; writes issued by the rasterizer
//! ([`HeightField::put_sample`], [`HeightField::fill_span`]) are clipped.

use crate::color::{Gray16, DEFAULT_HEIGHT};
use crate::error::{Error, Result};
use std::path::Path;
use trueno::Vector;

/// A single-channel height field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    /// Width in samples.
    width: u32,
    /// Height in samples.
    height: u32,
    /// Samples in row-major order.
    samples: Vec<Gray16>,
}

impl HeightField {
    /// Create a `height` x `width` field filled with 0.5.
    ///
    /// Arguments are rows first, then columns.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use terrain_raster::heightfield::HeightField;
    ///
    /// let field = HeightField::new(600, 800).unwrap();
    /// assert_eq!(field.width(), 800);
    /// assert_eq!(field.height(), 600);
    /// ```
    pub fn new(height: u32, width: u32) -> Result<Self> {
        Self::with_initial_height(height, width, DEFAULT_HEIGHT)
    }

    /// Create a `height` x `width` field filled with `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero, the sample buffer cannot be
    /// allocated, or `initial` is not a valid height.
    pub fn with_initial_height(height: u32, width: u32, initial: f64) -> Result<Self> {
        let invalid = || Error::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let sample = Gray16::from_height(initial)?;
        let len = (width as usize).checked_mul(height as usize).ok_or_else(invalid)?;

        let mut samples = Vec::new();
        samples.try_reserve_exact(len).map_err(|_| invalid())?;
        samples.resize(len, sample);

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Get the width in samples.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in samples.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of samples.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` lies inside the field.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Get the raw samples in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[Gray16] {
        &self.samples
    }

    /// Read the normalized height at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<f64> {
        self.get_sample(x, y).map(Gray16::to_height)
    }

    /// Read the raw sample at `(x, y)`.
    #[must_use]
    pub fn get_sample(&self, x: i32, y: i32) -> Option<Gray16> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.samples[self.index(x as u32, y as u32)])
    }

    /// Write a normalized height at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeight`] for a value outside `[0, 1]` and
    /// [`Error::OutOfBounds`] for coordinates outside the field. Nothing is
    /// written in either case.
    pub fn set(&mut self, x: i32, y: i32, value: f64) -> Result<()> {
        let sample = Gray16::from_height(value)?;
        if !self.put_sample(x, y, sample) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Write a sample at `(x, y)` if it lies inside the field.
    ///
    /// Returns whether the sample was written.
    pub fn put_sample(&mut self, x: i32, y: i32, sample: Gray16) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        self.samples[idx] = sample;
        true
    }

    /// Write `sample` to columns `x0..=x1` of row `y`, clipped to the field.
    pub fn fill_span(&mut self, x0: i32, x1: i32, y: i32, sample: Gray16) {
        if y < 0 || y >= self.height as i32 {
            return;
        }

        let start = x0.max(0);
        let end = x1.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let base = (y as usize) * (self.width as usize);
        self.samples[base + start as usize..=base + end as usize].fill(sample);
    }

    /// Set every sample to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeight`] for a value outside `[0, 1]`.
    pub fn fill(&mut self, value: f64) -> Result<()> {
        let sample = Gray16::from_height(value)?;
        self.samples.fill(sample);
        Ok(())
    }

    /// Samples as big-endian bytes, two per sample, as 16-bit PNG expects.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.value().to_be_bytes()).collect()
    }

    /// Minimum, maximum and mean height.
    #[must_use]
    pub fn stats(&self) -> (f64, f64, f64) {
        let heights: Vec<f32> = self.samples.iter().map(|s| s.to_height() as f32).collect();

        // trueno picks the widest SIMD backend available
        let vec = Vector::from_vec(heights);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(1.0);
        let mean = vec.mean().unwrap_or(0.5);

        (f64::from(min), f64::from(max), f64::from(mean))
    }

    /// Encode the field as a 16-bit grayscale PNG at `path`.
    ///
    /// The file is created or truncated.
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::output::PngEncoder::write_to_file(self, path)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
