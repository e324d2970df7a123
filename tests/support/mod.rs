//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use bowlgen::float_types::Real;
use bowlgen::mesh::Mesh;
use nalgebra::Point3;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// `true` when every coordinate of `a` and `b` is within `eps`.
pub fn points_approx_eq(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).abs().max() < eps
}

/// Radial distance of `p` from the Z axis.
pub fn radius_xy(p: &Point3<Real>) -> Real {
    p.x.hypot(p.y)
}

/// Centroid of triangle `i` of `mesh`.
pub fn triangle_centroid(mesh: &Mesh, i: usize) -> Point3<Real> {
    let [a, b, c] = mesh.triangle(i);
    Point3::from((a.coords + b.coords + c.coords) / 3.0)
}

/// Scratch directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let path = std::env::temp_dir().join(format!(
            "bowlgen-{label}-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = std::fs::remove_dir_all(&path);
        TempDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
