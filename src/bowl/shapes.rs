//! Bottom plate and wall fragment as indexed triangle meshes

use super::{check_division, check_positive};
use crate::errors::BowlError;
use crate::float_types::{Real, TAU};
use crate::mesh::Mesh;
use log::debug;
use nalgebra::Point3;

/// Winding of the wall fragment's twelve triangles.
///
/// Indices follow the vertex order of [`wall_fragment`]:
/// `0..4` at θ = 0 and `4..8` at θ = width, each group ordered
/// inner-bottom, outer-bottom, inner-top, outer-top.
pub const FRAGMENT_TRIANGLES: [[usize; 3]; 12] = [
    // side at θ = 0
    [0, 1, 2],
    [1, 3, 2],
    // side at θ = width
    [4, 6, 5],
    [5, 6, 7],
    // inside
    [0, 2, 4],
    [2, 6, 4],
    // outside
    [1, 5, 3],
    [3, 5, 7],
    // bottom
    [0, 4, 1],
    [1, 4, 5],
    // top
    [2, 3, 7],
    [2, 7, 6],
];

/// Floor of the bowl: a flat cylinder of radius `radius_bottom` extruded
/// from `z = 0` up to `z = thickness`.
///
/// ## Vertex layout (`2N + 4` vertices)
/// ```text
/// 0            bottom center (0, 0, 0)
/// 1            top center    (0, 0, thickness)
/// 2 ..= N+2    bottom rim, θ_k = k·2π/N for k in 0..N, then θ_0 again
/// N+3 ..= 2N+3 top rim, same angles at z = thickness
/// ```
///
/// The rim loops repeat their first sample so that face `k` can always use
/// `k + 1` without wrapping.
///
/// ## Faces (`4N` triangles), for `k in 0..N`
/// - **Bottom**: `[0, 3+k, 2+k]` (normal -Z)
/// - **Top**: `[1, N+3+k, N+4+k]` (normal +Z)
/// - **Side**: `[2+k, 3+k, N+4+k]` and `[N+4+k, N+3+k, 2+k]` (outward)
pub fn bottom_plate(
    num_division: usize,
    radius_bottom: Real,
    thickness: Real,
) -> Result<Mesh, BowlError> {
    check_division(num_division)?;
    check_positive("radius_bottom", radius_bottom)?;
    check_positive("thickness", thickness)?;

    let n = num_division;
    let step = TAU / n as Real;
    let mut rim: Vec<(Real, Real)> = reserve(n.checked_add(1), num_division)?;
    rim.extend((0..n).chain(std::iter::once(0)).map(|k| {
        let theta = k as Real * step;
        (radius_bottom * theta.cos(), radius_bottom * theta.sin())
    }));

    let mut vertices: Vec<Point3<Real>> =
        reserve(n.checked_mul(2).and_then(|v| v.checked_add(4)), num_division)?;
    vertices.push(Point3::new(0.0, 0.0, 0.0));
    vertices.push(Point3::new(0.0, 0.0, thickness));
    vertices.extend(rim.iter().map(|&(x, y)| Point3::new(x, y, 0.0)));
    vertices.extend(rim.iter().map(|&(x, y)| Point3::new(x, y, thickness)));

    let bottom_ring = 2;
    let top_ring = n + 3;

    let mut triangles: Vec<[usize; 3]> = reserve(n.checked_mul(4), num_division)?;
    triangles.extend((0..n).map(|k| [0, bottom_ring + k + 1, bottom_ring + k]));
    triangles.extend((0..n).map(|k| [1, top_ring + k, top_ring + k + 1]));
    triangles.extend(
        (0..n).map(|k| [bottom_ring + k, bottom_ring + k + 1, top_ring + k + 1]),
    );
    triangles.extend((0..n).map(|k| [top_ring + k + 1, top_ring + k, bottom_ring + k]));

    debug!(
        "bottom plate: {} vertices, {} triangles (N = {n})",
        vertices.len(),
        triangles.len()
    );
    Mesh::from_parts(vertices, triangles)
}

/// Empty vector with room for `count` items; fails instead of aborting
/// when `num_division` is too large to allocate.
fn reserve<T>(count: Option<usize>, num_division: usize) -> Result<Vec<T>, BowlError> {
    let too_large =
        || BowlError::invalid(format!("num_division {num_division} is too large to allocate"));
    let count = count.ok_or_else(too_large)?;
    let mut items = Vec::new();
    items.try_reserve_exact(count).map_err(|_| too_large())?;
    Ok(items)
}

/// One wedge of the bowl wall, spanning `θ ∈ [0, 2π/N]`.
///
/// The wall sits on top of the bottom plate: its lower face is at
/// `z = thickness` and its upper face at `z = thickness + height`.
/// Inner radii are `radius_bottom`/`radius_top`, outer radii add `thickness`.
///
/// ```text
///   2---3        6---7      inner-top, outer-top
///   |   |  ...   |   |
///   0---1        4---5      inner-bottom, outer-bottom
///   θ = 0        θ = 2π/N
/// ```
///
/// Faces are [`FRAGMENT_TRIANGLES`]. Rotating copies by `i·2π/N` about +Z
/// tiles the full wall with no further alignment.
pub fn wall_fragment(
    num_division: usize,
    radius_bottom: Real,
    radius_top: Real,
    height: Real,
    thickness: Real,
) -> Result<Mesh, BowlError> {
    check_division(num_division)?;
    check_positive("radius_bottom", radius_bottom)?;
    check_positive("radius_top", radius_top)?;
    check_positive("height", height)?;
    check_positive("thickness", thickness)?;

    let width = TAU / num_division as Real;
    let z_bottom = thickness;
    let z_top = thickness + height;
    let profile = [
        (radius_bottom, z_bottom),
        (radius_bottom + thickness, z_bottom),
        (radius_top, z_top),
        (radius_top + thickness, z_top),
    ];

    let (sin, cos) = width.sin_cos();
    let vertices: Vec<Point3<Real>> = profile
        .iter()
        .map(|&(r, z)| Point3::new(r, 0.0, z))
        .chain(profile.iter().map(|&(r, z)| Point3::new(r * cos, r * sin, z)))
        .collect();

    debug!(
        "wall fragment: width {:.6} rad, radii {radius_bottom}..{radius_top}, z {z_bottom}..{z_top}",
        width
    );
    Mesh::from_parts(vertices, FRAGMENT_TRIANGLES.to_vec())
}
