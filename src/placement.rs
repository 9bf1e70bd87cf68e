//! Virtual screen placement.
//!
//! Sizes and positions a flat rectangle at a viewing distance so that, seen
//! from the origin, it is centered at the requested angular offset and its
//! diagonal subtends the requested diagonal FOV.
//!
//! # Example
//!
//! ```
//! use zenfov::{FovSpec, PlacementRequest};
//!
//! let fov = FovSpec::new(46.0, 16.0 / 9.0).decompose().unwrap();
//! let screen = PlacementRequest::new(fov, 2.0)
//!     .offset(10.0, -5.0)
//!     .place(46.0)
//!     .unwrap();
//!
//! assert!(screen.is_converged());
//! assert!((screen.diagonal_fov() - 46.0).abs() < 0.01);
//! ```

#[allow(unused_imports)]
use num_traits::Float;

use crate::error::{FovError, Result, check_fov, check_offset, check_positive};
use crate::fov::FovPair;
use crate::solver::{ScaleSolve, SolveParams, diagonal_fov};

/// Where and how large the screen should be, before diagonal correction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Horizontal and vertical FOV of the unscaled screen, in degrees.
    pub fov: FovPair,
    /// Distance from the eye to the screen plane.
    pub distance: f64,
    /// Angle above (+) or below (-) the forward axis, in degrees.
    pub vertical_offset: f64,
    /// Angle right (+) or left (-) of the forward axis, in degrees.
    pub horizontal_offset: f64,
}

impl PlacementRequest {
    /// Centered request at `distance`.
    pub fn new(fov: FovPair, distance: f64) -> Self {
        Self {
            fov,
            distance,
            vertical_offset: 0.0,
            horizontal_offset: 0.0,
        }
    }

    /// Set the angular offset of the screen center.
    pub fn offset(mut self, vertical: f64, horizontal: f64) -> Self {
        self.vertical_offset = vertical;
        self.horizontal_offset = horizontal;
        self
    }

    /// Place with default solver parameters.
    pub fn place(&self, target_diagonal_fov: f64) -> Result<Placement> {
        self.place_with(&SolveParams::default(), target_diagonal_fov)
    }

    /// Place the screen so its diagonal subtends `target_diagonal_fov` degrees.
    pub fn place_with(&self, params: &SolveParams, target_diagonal_fov: f64) -> Result<Placement> {
        self.fov.validate()?;
        let distance = check_positive(self.distance, FovError::InvalidDistance)?;
        let vertical = check_offset(self.vertical_offset)?;
        let horizontal = check_offset(self.horizontal_offset)?;
        check_fov(target_diagonal_fov, FovError::DiagonalFovOutOfRange)?;

        let x = horizontal.to_radians().tan() * distance;
        let y = vertical.to_radians().tan() * distance;

        let (tan_h, tan_v) = self.fov.half_tangents();
        let base_width = 2.0 * tan_h * distance;
        let base_height = 2.0 * tan_v * distance;

        // Scale about the screen's own center; (x, y) stays put.
        let solve = params.solve(x, y, distance, base_width, base_height, target_diagonal_fov)?;
        let ratio = solve.ratio();

        Ok(Placement {
            width: base_width * ratio,
            height: base_height * ratio,
            x,
            y,
            distance,
            solve,
        })
    }
}

/// A sized and positioned screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    /// Horizontal center offset in world units.
    pub x: f64,
    /// Vertical center offset in world units.
    pub y: f64,
    pub distance: f64,
    /// How the scale correction went.
    pub solve: ScaleSolve,
}

impl Placement {
    /// Screen center, `[x, y, distance]`.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.distance]
    }

    /// Per-axis scale for a unit quad, `[width, height, 1]`.
    pub fn scale(&self) -> [f64; 3] {
        [self.width, self.height, 1.0]
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Diagonal angle actually subtended from the origin, in degrees.
    pub fn diagonal_fov(&self) -> f64 {
        diagonal_fov(self.x, self.y, self.distance, self.width, self.height)
    }

    /// False when the solver ran out of iterations and the size is a best effort.
    pub fn is_converged(&self) -> bool {
        self.solve.is_converged()
    }
}

/// Size and position a screen at `distance` and the given angular offsets.
///
/// Returns `(width, height, x, y)` wrapped in a [`Placement`] that also
/// records whether the diagonal correction converged.
pub fn place_screen(
    horizontal_fov: f64,
    vertical_fov: f64,
    distance: f64,
    vertical_offset: f64,
    horizontal_offset: f64,
    target_diagonal_fov: f64,
) -> Result<Placement> {
    PlacementRequest::new(FovPair::new(horizontal_fov, vertical_fov), distance)
        .offset(vertical_offset, horizontal_offset)
        .place(target_diagonal_fov)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fov::decompose_fov;

    fn assert_close(actual: f64, expected: f64, eps: f64) {
        assert!(
            (actual - expected).abs() < eps,
            "expected {expected}, got {actual} (eps {eps})"
        );
    }

    // ── centered ────────────────────────────────────────────────────────

    #[test]
    fn centered_square_46_degrees() {
        let fov = decompose_fov(46.0, 1.0).unwrap();
        let p = place_screen(fov.horizontal, fov.vertical, 1.0, 0.0, 0.0, 46.0).unwrap();
        assert!(p.is_converged());
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.width, p.height);
        assert_close(p.width, 0.6003, 1e-3);
        assert_close(p.diagonal_fov(), 46.0, 0.01);
    }

    #[test]
    fn zero_offsets_are_exactly_zero() {
        for d in [0.5, 1.0, 7.25] {
            let fov = decompose_fov(90.0, 4.0 / 3.0).unwrap();
            let p = PlacementRequest::new(fov, d).place(90.0).unwrap();
            assert_eq!(p.position(), [0.0, 0.0, d]);
        }
    }

    // ── off-axis ────────────────────────────────────────────────────────

    #[test]
    fn off_axis_grows_to_keep_diagonal() {
        let fov = decompose_fov(46.0, 1.0).unwrap();
        let centered = PlacementRequest::new(fov, 1.0).place(46.0).unwrap();
        let shifted = PlacementRequest::new(fov, 1.0)
            .offset(10.0, 20.0)
            .place(46.0)
            .unwrap();
        assert!(shifted.is_converged());
        assert!(shifted.width > centered.width);
        assert_close(shifted.x, 20f64.to_radians().tan(), 1e-12);
        assert_close(shifted.y, 10f64.to_radians().tan(), 1e-12);
        assert_close(shifted.diagonal_fov(), 46.0, 0.01);
    }

    #[test]
    fn offsets_are_signed() {
        let fov = decompose_fov(46.0, 1.0).unwrap();
        let p = PlacementRequest::new(fov, 2.0)
            .offset(-15.0, -5.0)
            .place(46.0)
            .unwrap();
        assert!(p.x < 0.0 && p.y < 0.0);
        assert_close(p.y, -2.0 * 15f64.to_radians().tan(), 1e-12);
    }

    #[test]
    fn aspect_is_preserved() {
        let fov = decompose_fov(46.0, 16.0 / 9.0).unwrap();
        let p = PlacementRequest::new(fov, 2.0)
            .offset(15.0, -5.0)
            .place(46.0)
            .unwrap();
        assert!(p.is_converged());
        let (th, tv) = fov.half_tangents();
        assert_close(p.aspect_ratio(), th / tv, 1e-12);
        assert_close(p.aspect_ratio(), 16.0 / 9.0, 1e-9);
    }

    #[test]
    fn transform_parts() {
        let fov = decompose_fov(46.0, 2.0).unwrap();
        let p = PlacementRequest::new(fov, 3.0).place(46.0).unwrap();
        assert_eq!(p.scale(), [p.width, p.height, 1.0]);
        assert_eq!(p.position()[2], 3.0);
    }

    #[test]
    fn degraded_solve_still_places() {
        // Target smaller than the base rectangle's own diagonal.
        let fov = decompose_fov(60.0, 1.0).unwrap();
        let p = PlacementRequest::new(fov, 1.0).place(30.0).unwrap();
        assert!(!p.is_converged());
        assert_close(p.solve.ratio(), 1.0, 1e-9);
        assert!(p.width > 0.0 && p.height > 0.0);
    }

    // ── Error cases ─────────────────────────────────────────────────────

    #[test]
    fn rejects_bad_requests() {
        assert_eq!(
            place_screen(33.0, 33.0, 0.0, 0.0, 0.0, 46.0),
            Err(FovError::InvalidDistance(0.0))
        );
        assert_eq!(
            place_screen(33.0, 33.0, -1.0, 0.0, 0.0, 46.0),
            Err(FovError::InvalidDistance(-1.0))
        );
        assert_eq!(
            place_screen(0.0, 33.0, 1.0, 0.0, 0.0, 46.0),
            Err(FovError::FovComponentOutOfRange(0.0))
        );
        assert_eq!(
            place_screen(33.0, 33.0, 1.0, 90.0, 0.0, 46.0),
            Err(FovError::OffsetOutOfRange(90.0))
        );
        assert_eq!(
            place_screen(33.0, 33.0, 1.0, 0.0, 0.0, 200.0),
            Err(FovError::DiagonalFovOutOfRange(200.0))
        );
    }
}
