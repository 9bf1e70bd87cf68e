//! Input-contract violations.
//!
//! Every variant is a caller error detected before any geometry is computed.
//! A solver that runs out of iterations is not an error; see
//! [`ScaleSolve::Degraded`](crate::ScaleSolve::Degraded).

/// Geometry computation error.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum FovError {
    /// Diagonal field of view outside the open interval (0°, 180°).
    #[error("diagonal field of view must be in (0, 180) degrees, got {0}")]
    DiagonalFovOutOfRange(f64),
    /// Horizontal or vertical field of view outside (0°, 180°).
    #[error("field of view component must be in (0, 180) degrees, got {0}")]
    FovComponentOutOfRange(f64),
    /// Aspect ratio is zero, negative, or not finite.
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),
    /// Viewing distance is zero, negative, or not finite.
    #[error("distance must be finite and positive, got {0}")]
    InvalidDistance(f64),
    /// Angular offset outside (-90°, 90°), where its tangent diverges.
    #[error("angular offset must be in (-90, 90) degrees, got {0}")]
    OffsetOutOfRange(f64),
    /// Rectangle center is not a finite point.
    #[error("center offset must be finite, got ({x}, {y})")]
    NonFiniteCenter { x: f64, y: f64 },
    /// Unscaled rectangle has a non-positive or non-finite side.
    #[error("base rectangle must be finite and positive, got {width}x{height}")]
    InvalidBaseSize { width: f64, height: f64 },
    /// Search bracket is not `0 < min < max`.
    #[error("scale bracket must satisfy 0 < min < max, got [{min}, {max}]")]
    InvalidBracket { min: f64, max: f64 },
    /// Convergence tolerance is negative or NaN.
    #[error("tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),
    /// Surface width or height is zero.
    #[error("surface dimensions must be non-zero")]
    ZeroDimension,
}

/// Shorthand for results in this crate.
pub type Result<T> = core::result::Result<T, FovError>;

/// Reject anything outside the open interval (0, 180).
pub(crate) fn check_fov(degrees: f64, err: fn(f64) -> FovError) -> Result<f64> {
    if degrees.is_finite() && degrees > 0.0 && degrees < 180.0 {
        Ok(degrees)
    } else {
        Err(err(degrees))
    }
}

pub(crate) fn check_positive(value: f64, err: fn(f64) -> FovError) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

pub(crate) fn check_offset(degrees: f64) -> Result<f64> {
    if degrees.is_finite() && degrees > -90.0 && degrees < 90.0 {
        Ok(degrees)
    } else {
        Err(FovError::OffsetOutOfRange(degrees))
    }
}
