//! `Mesh` struct: an indexed triangle list with shared vertex positions

use crate::errors::BowlError;
use crate::float_types::Real;
use crate::triangulated::{Facet, Triangulated3D};
use nalgebra::{Point3, Rotation3, Vector3};

/// Indexed triangle mesh.
///
/// Triangles are `[a, b, c]` indices into `vertices`; the winding follows the
/// right-hand rule, so `(b - a) × (c - a)` points away from solid material.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<Real>>,
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    /// Build a mesh from raw vertex positions and triangle indices.
    ///
    /// Fails if any index points past the end of `vertices`.
    pub fn from_parts(
        vertices: Vec<Point3<Real>>,
        triangles: Vec<[usize; 3]>,
    ) -> Result<Self, BowlError> {
        if let Some(&idx) = triangles
            .iter()
            .flatten()
            .find(|&&idx| idx >= vertices.len())
        {
            return Err(BowlError::invalid(format!(
                "face index {idx} is out of range (points.len = {})",
                vertices.len()
            )));
        }
        Ok(Mesh {
            vertices,
            triangles,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Corner positions of triangle `i`.
    pub fn triangle(&self, i: usize) -> [Point3<Real>; 3] {
        self.triangles[i].map(|idx| self.vertices[idx])
    }

    /// Unit normal of triangle `i` by the right-hand rule.
    ///
    /// Degenerate (zero-area) triangles yield the zero vector.
    pub fn face_normal(&self, i: usize) -> Vector3<Real> {
        let [a, b, c] = self.triangle(i);
        (b - a)
            .cross(&(c - a))
            .try_normalize(Real::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Axis aligned bounding box as `(mins, maxs)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(mins, maxs), p| {
            (mins.inf(p), maxs.sup(p))
        }))
    }

    /// Return a copy rotated by `angle` radians about the +Z axis.
    ///
    /// Triangle indices are untouched; only positions move.
    pub fn rotated_about_z(&self, angle: Real) -> Mesh {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        Mesh {
            vertices: self.vertices.iter().map(|p| rotation * p).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// Signed enclosed volume (divergence theorem over the triangle fan from the origin).
    ///
    /// Positive when a closed mesh is wound with outward normals.
    pub fn signed_volume(&self) -> Real {
        (0..self.triangle_count())
            .map(|i| {
                let [a, b, c] = self.triangle(i);
                a.coords.dot(&b.coords.cross(&c.coords))
            })
            .sum::<Real>()
            / 6.0
    }
}

impl Triangulated3D for Mesh {
    fn visit_facets<F>(&self, mut f: F)
    where
        F: FnMut(Facet),
    {
        for i in 0..self.triangle_count() {
            f(Facet {
                normal: self.face_normal(i),
                corners: self.triangle(i),
            });
        }
    }
}
