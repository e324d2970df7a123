use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// One output triangle: its three corners and the facet normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub normal: Vector3<Real>,
    pub corners: [Point3<Real>; 3],
}

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle, in face order.
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(Facet);
}
