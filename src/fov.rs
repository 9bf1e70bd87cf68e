//! Diagonal field-of-view decomposition.
//!
//! A headset or camera is usually specified by a single diagonal FOV. A
//! renderer wants the horizontal and vertical angles instead. Both are
//! derived from the same rectangle at unit distance: half-width `aspect`,
//! half-height `1`, half-diagonal `sqrt(aspect² + 1)`, all scaled by the
//! tangent of the half-diagonal angle.
//!
//! # Example
//!
//! ```
//! use zenfov::FovSpec;
//!
//! let pair = FovSpec::new(46.0, 1.0).decompose().unwrap();
//! assert_eq!(pair.horizontal, pair.vertical);
//! assert!((pair.diagonal() - 46.0).abs() < 1e-9);
//! ```

#[allow(unused_imports)]
use num_traits::Float;

use crate::error::{FovError, Result, check_fov, check_positive};

/// A diagonal field of view and the aspect ratio of the surface it spans.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FovSpec {
    /// Diagonal field of view in degrees, `(0, 180)`.
    pub diagonal: f64,
    /// Width divided by height.
    pub aspect_ratio: f64,
}

impl FovSpec {
    pub const fn new(diagonal: f64, aspect_ratio: f64) -> Self {
        Self {
            diagonal,
            aspect_ratio,
        }
    }

    /// Take the aspect ratio from integer surface dimensions.
    pub fn from_dimensions(diagonal: f64, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FovError::ZeroDimension);
        }
        Ok(Self::new(diagonal, width as f64 / height as f64))
    }

    /// Split into horizontal and vertical components.
    pub fn decompose(&self) -> Result<FovPair> {
        decompose_fov(self.diagonal, self.aspect_ratio)
    }
}

/// Horizontal and vertical field of view, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FovPair {
    pub horizontal: f64,
    pub vertical: f64,
}

impl FovPair {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Diagonal FOV of the frustum spanned by this pair.
    ///
    /// Inverse of [`decompose_fov`]: `tan(d/2)² = tan(h/2)² + tan(v/2)²`.
    pub fn diagonal(&self) -> f64 {
        let (th, tv) = self.half_tangents();
        2.0 * (th * th + tv * tv).sqrt().atan().to_degrees()
    }

    /// Width over height of the frustum cross-section.
    pub fn aspect_ratio(&self) -> f64 {
        let (th, tv) = self.half_tangents();
        th / tv
    }

    /// Check both components lie in `(0, 180)`.
    pub fn validate(&self) -> Result<()> {
        check_fov(self.horizontal, FovError::FovComponentOutOfRange)?;
        check_fov(self.vertical, FovError::FovComponentOutOfRange)?;
        Ok(())
    }

    /// Tangents of the half-angles, i.e. the half-extent at unit distance.
    pub(crate) fn half_tangents(&self) -> (f64, f64) {
        (
            (self.horizontal.to_radians() / 2.0).tan(),
            (self.vertical.to_radians() / 2.0).tan(),
        )
    }
}

/// Decompose a diagonal FOV into horizontal and vertical FOV.
///
/// `diagonal` is in degrees and must lie in `(0, 180)`; `aspect_ratio` is
/// width over height and must be finite and positive.
pub fn decompose_fov(diagonal: f64, aspect_ratio: f64) -> Result<FovPair> {
    check_fov(diagonal, FovError::DiagonalFovOutOfRange)?;
    check_positive(aspect_ratio, FovError::InvalidAspectRatio)?;

    let half_diag = (aspect_ratio * aspect_ratio + 1.0).sqrt();
    let tan_half = (diagonal.to_radians() / 2.0).tan();

    let horizontal = 2.0 * (tan_half * aspect_ratio / half_diag).atan();
    let vertical = 2.0 * (tan_half / half_diag).atan();

    Ok(FovPair {
        horizontal: horizontal.to_degrees(),
        vertical: vertical.to_degrees(),
    })
}
