//! Angular viewport geometry for AR/VR simulation rigs.
//!
//! Places a flat virtual screen in front of a fixed eye so that its diagonal
//! subtends a given field of view, at a given distance and angular offset.
//! Pure geometry: no rendering, no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fov`] — Diagonal FOV to horizontal/vertical FOV, and back
//! - [`solver`] — Bisection search for the off-axis scale correction
//! - [`placement`] — Screen size and position from FOV, distance, offsets
//! - [`rig`] — One-shot setup from a headset description
//!
//! # Example
//!
//! ```
//! use zenfov::{decompose_fov, place_screen};
//!
//! let fov = decompose_fov(46.0, 1.0).unwrap();
//! let screen = place_screen(fov.horizontal, fov.vertical, 1.0, 0.0, 0.0, 46.0).unwrap();
//!
//! assert_eq!((screen.x, screen.y), (0.0, 0.0));
//! assert_eq!(screen.width, screen.height);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fov;
pub mod placement;
pub mod rig;
pub mod solver;

pub use error::FovError;
pub use fov::{FovPair, FovSpec, decompose_fov};
pub use placement::{Placement, PlacementRequest, place_screen};
pub use rig::{CameraSetup, RigConfig, RigLayout};
pub use solver::{ScaleSolve, SolveParams, diagonal_fov, solve_scale};
