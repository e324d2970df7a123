//! Parametric **bowl** generator: a flat bottom plate plus one wall fragment,
//! both as triangle meshes, together with robot-simulator descriptions that
//! tile the fragment `N` times around the vertical axis.
//!
//! # Outputs
//! - `meshes/<name>_bottom.stl` and `meshes/<name>_fragment.stl`
//! - `model.config` + `model.sdf` (Gazebo / SDFormat 1.7, rotations in radians)
//! - optionally `<name>.xml` for MuJoCo (rotations in degrees)
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bowl;
pub mod cli;
pub mod emit;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bowl::BowlParameters;
pub use errors::BowlError;
pub use mesh::Mesh;
