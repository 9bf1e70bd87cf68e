//! Simulator rig setup: from a headset description to camera and screen.
//!
//! A rig reproduces a target display's field of view on a virtual screen.
//! [`RigConfig`] holds the headset description; [`RigConfig::layout`] runs
//! decomposition and placement and returns everything the host needs to
//! configure its camera and position its screen quad.

use crate::error::Result;
use crate::fov::{FovPair, FovSpec};
use crate::placement::{Placement, PlacementRequest};
use crate::solver::SolveParams;

/// Headset description and viewing geometry.
///
/// Defaults describe a 46° square display one unit in front of the eye.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RigConfig {
    /// Diagonal field of view to reproduce, in degrees.
    pub diagonal_fov: f64,
    /// Surface width; only the ratio to `surface_height` matters.
    pub surface_width: u32,
    pub surface_height: u32,
    /// Eye to screen distance in world units.
    pub distance: f64,
    /// Degrees above (+) or below (-) straight ahead.
    pub vertical_offset: f64,
    /// Degrees right (+) or left (-) of straight ahead.
    pub horizontal_offset: f64,
    pub solver: SolveParams,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            diagonal_fov: 46.0,
            surface_width: 40,
            surface_height: 40,
            distance: 1.0,
            vertical_offset: 0.0,
            horizontal_offset: 0.0,
            solver: SolveParams::default(),
        }
    }
}

/// Vertical FOV and aspect for a perspective camera.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraSetup {
    /// Vertical field of view in degrees.
    pub vertical_fov: f64,
    pub aspect_ratio: f64,
}

/// Everything derived from a [`RigConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigLayout {
    pub fov: FovPair,
    pub camera: CameraSetup,
    pub screen: Placement,
}

impl RigConfig {
    pub fn fov_spec(&self) -> Result<FovSpec> {
        FovSpec::from_dimensions(self.diagonal_fov, self.surface_width, self.surface_height)
    }

    /// Decompose the diagonal FOV and place the screen.
    pub fn layout(&self) -> Result<RigLayout> {
        let spec = self.fov_spec()?;
        let fov = spec.decompose()?;
        tracing::debug!(
            horizontal_fov = fov.horizontal,
            vertical_fov = fov.vertical,
            "decomposed diagonal FOV"
        );

        let camera = CameraSetup {
            vertical_fov: fov.vertical,
            aspect_ratio: spec.aspect_ratio,
        };

        let screen = PlacementRequest::new(fov, self.distance)
            .offset(self.vertical_offset, self.horizontal_offset)
            .place_with(&self.solver, self.diagonal_fov)?;
        tracing::debug!(
            width = screen.width,
            height = screen.height,
            x = screen.x,
            y = screen.y,
            converged = screen.is_converged(),
            "placed virtual screen"
        );

        Ok(RigLayout {
            fov,
            camera,
            screen,
        })
    }
}
