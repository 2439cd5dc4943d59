//! Height-to-sample encoding.
//!
//! Heights are normalized `f64` values in `[0.0, 1.0]`. The field stores them as
//! 16-bit unsigned gray samples using a linear mapping:
//! `sample = round(height * MAX_SAMPLE)`.

use crate::error::{Error, Result};

/// Largest representable sample value.
pub const MAX_SAMPLE: u16 = u16::MAX;

/// Height of a freshly created field.
pub const DEFAULT_HEIGHT: f64 = 0.5;

/// A 16-bit grayscale sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Gray16(pub u16);

impl Gray16 {
    /// Lowest sample (height 0.0).
    pub const BLACK: Self = Self(0);
    /// Highest sample (height 1.0).
    pub const WHITE: Self = Self(MAX_SAMPLE);

    /// Encode a normalized height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeight`] when `height` is below 0.0, above 1.0, or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use terrain_raster::color::Gray16;
    ///
    /// assert_eq!(Gray16::from_height(1.0).unwrap(), Gray16::WHITE);
    /// assert!(Gray16::from_height(1.1).is_err());
    /// ```
    pub fn from_height(height: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&height) {
            return Err(Error::InvalidHeight(height));
        }
        Ok(Self((height * f64::from(MAX_SAMPLE)).round() as u16))
    }

    /// Decode back to a normalized height.
    #[must_use]
    pub fn to_height(self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SAMPLE)
    }

    /// Raw sample value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

/// Encode a normalized height to its native sample.
///
/// Shorthand for [`Gray16::from_height`].
pub fn encode(height: f64) -> Result<Gray16> {
    Gray16::from_height(height)
}

/// Decode a native sample to a normalized height.
#[must_use]
pub fn decode(sample: Gray16) -> f64 {
    sample.to_height()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Decoding an encoded height is within one quantization step.
        #[test]
        fn prop_round_trip_within_one_step(height in 0.0f64..=1.0) {
            let sample = encode(height).unwrap();
            let step = 1.0 / f64::from(MAX_SAMPLE);
            prop_assert!((decode(sample) - height).abs() <= step);
        }

        /// Encoding is monotonic.
        #[test]
        fn prop_encode_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(encode(lo).unwrap() <= encode(hi).unwrap());
        }

        /// Anything above 1.0 is rejected.
        #[test]
        fn prop_above_one_rejected(height in 1.000_001f64..1e6) {
            prop_assert!(encode(height).is_err());
        }
    }
}
