use crate::triangulated::{Facet, Triangulated3D};
use std::collections::HashSet;
use std::io::Cursor;

/// Collect the facets of `shape`, dropping exact duplicates.
///
/// Two triangles are duplicates when their corners, as written to the file
/// (`f32`), are the same three points in any order. The first occurrence wins.
#[allow(clippy::unnecessary_cast)]
pub fn unique_facets<T: Triangulated3D>(shape: &T) -> Vec<Facet> {
    let mut seen = HashSet::new();
    let mut facets = Vec::new();

    shape.visit_facets(|facet| {
        let mut key = facet
            .corners
            .map(|p| [p.x as f32, p.y as f32, p.z as f32].map(f32::to_bits));
        key.sort_unstable();
        if seen.insert(key) {
            facets.push(facet);
        }
    });

    facets
}

/// Export to ASCII STL
///
/// ```rust
/// # use bowlgen::bowl::bottom_plate;
/// # use bowlgen::io::stl::to_stl_ascii;
/// let plate = bottom_plate(8, 1.0, 0.1).unwrap();
/// let text = to_stl_ascii(&plate, "plate");
/// assert!(text.starts_with("solid plate"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for Facet { normal: n, corners } in unique_facets(shape) {
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in &corners {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The 80-byte header is left zeroed by `stl_io`, so the name is not stored.
#[allow(clippy::unnecessary_cast)]
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let triangles: Vec<Triangle> = unique_facets(shape)
        .into_iter()
        .map(|Facet { normal: n, corners }| Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: corners.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
        })
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Serialized size of a binary STL holding `triangles` facets.
pub const fn binary_stl_len(triangles: usize) -> usize {
    80 + 4 + 50 * triangles
}

impl crate::mesh::Mesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}
