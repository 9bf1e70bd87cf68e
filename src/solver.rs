//! Uniform scale search for off-axis rectangles.
//!
//! A rectangle sized from the horizontal and vertical FOV subtends exactly the
//! diagonal FOV only when it is centered on the forward axis. Move it off-axis
//! and its diagonal shrinks in angular terms, so it has to grow to compensate.
//! The diagonal angle is a non-linear function of the scale, so the scale is
//! found by bisection on the cosine of that angle.
//!
//! The eye sits at the origin looking down `+z`; the rectangle lies in the
//! plane `z = distance`, centered at `(x, y)`.

#[allow(unused_imports)]
use num_traits::Float;

use crate::error::{FovError, Result, check_fov, check_positive};

/// Bisection parameters.
///
/// The default bracket `[1, 3]` assumes the unscaled rectangle is never too
/// large, i.e. off-axis placement only ever needs to grow it. Widen the
/// bracket below 1 when that does not hold.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveParams {
    /// Lower end of the scale bracket.
    pub min_ratio: f64,
    /// Upper end of the scale bracket.
    pub max_ratio: f64,
    /// Maximum `|cos(target) - cos(current)|` accepted as converged.
    pub tolerance: f64,
    /// Iteration budget. The search always terminates after this many steps.
    pub max_iterations: u32,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            min_ratio: 1.0,
            max_ratio: 3.0,
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl SolveParams {
    /// Set the scale bracket `[min, max]`.
    pub fn bracket(mut self, min: f64, max: f64) -> Self {
        self.min_ratio = min;
        self.max_ratio = max;
        self
    }

    /// Set the cosine tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration budget.
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<()> {
        let (min, max) = (self.min_ratio, self.max_ratio);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(FovError::InvalidBracket { min, max });
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(FovError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }

    /// Find the scale factor for the rectangle `base_width × base_height`
    /// centered at `(x, y)` on the plane `z = distance` whose diagonal
    /// subtends `target_diagonal_fov` degrees from the origin.
    pub fn solve(
        &self,
        x: f64,
        y: f64,
        distance: f64,
        base_width: f64,
        base_height: f64,
        target_diagonal_fov: f64,
    ) -> Result<ScaleSolve> {
        self.validate()?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(FovError::NonFiniteCenter { x, y });
        }
        check_positive(distance, FovError::InvalidDistance)?;
        if !(base_width.is_finite() && base_height.is_finite())
            || base_width <= 0.0
            || base_height <= 0.0
        {
            return Err(FovError::InvalidBaseSize {
                width: base_width,
                height: base_height,
            });
        }
        check_fov(target_diagonal_fov, FovError::DiagonalFovOutOfRange)?;

        let cos_target = target_diagonal_fov.to_radians().cos();
        let (mut lo, mut hi) = (self.min_ratio, self.max_ratio);
        let mut ratio = (lo + hi) / 2.0;
        let mut residual = f64::NAN;

        for i in 0..self.max_iterations {
            ratio = (lo + hi) / 2.0;
            let cos_current =
                diagonal_cos(x, y, distance, ratio * base_width, ratio * base_height);
            residual = cos_target - cos_current;

            if residual.abs() < self.tolerance {
                tracing::debug!(
                    ratio,
                    iterations = i + 1,
                    achieved_fov = cos_current.acos().to_degrees(),
                    "scale solve converged"
                );
                return Ok(ScaleSolve::Converged {
                    ratio,
                    iterations: i + 1,
                });
            }
            // Cosine falls as the angle grows: a larger current cosine means
            // the rectangle is still too small.
            if residual < 0.0 {
                lo = ratio;
            } else {
                hi = ratio;
            }
        }

        tracing::warn!(
            ratio,
            residual,
            target_diagonal_fov,
            "scale solve did not converge within {} iterations",
            self.max_iterations
        );
        Ok(ScaleSolve::Degraded { ratio, residual })
    }
}

/// Outcome of a scale search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScaleSolve {
    /// The achieved diagonal matches the target within tolerance.
    Converged { ratio: f64, iterations: u32 },
    /// The iteration budget ran out. `ratio` is the last midpoint tried and
    /// `residual` is `cos(target) - cos(achieved)` at that ratio
    /// (NaN when the budget was zero).
    Degraded { ratio: f64, residual: f64 },
}

impl ScaleSolve {
    /// Best scale factor found, converged or not.
    pub fn ratio(&self) -> f64 {
        match *self {
            Self::Converged { ratio, .. } | Self::Degraded { ratio, .. } => ratio,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Scale search with [`SolveParams::default`].
pub fn solve_scale(
    x: f64,
    y: f64,
    distance: f64,
    base_width: f64,
    base_height: f64,
    target_diagonal_fov: f64,
) -> Result<ScaleSolve> {
    SolveParams::default().solve(x, y, distance, base_width, base_height, target_diagonal_fov)
}

/// Angle in degrees subtended at the origin by the diagonal of a
/// `width × height` rectangle centered at `(x, y, distance)`.
pub fn diagonal_fov(x: f64, y: f64, distance: f64, width: f64, height: f64) -> f64 {
    diagonal_cos(x, y, distance, width, height)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

/// Cosine of the angle between the eye rays to the lower-left and
/// upper-right corners.
pub(crate) fn diagonal_cos(x: f64, y: f64, distance: f64, width: f64, height: f64) -> f64 {
    let (ax, ay) = (x - width / 2.0, y - height / 2.0);
    let (cx, cy) = (x + width / 2.0, y + height / 2.0);
    let dd = distance * distance;

    let oa = (ax * ax + ay * ay + dd).sqrt();
    let oc = (cx * cx + cy * cy + dd).sqrt();
    (ax * cx + ay * cy + dd) / (oa * oc)
}
