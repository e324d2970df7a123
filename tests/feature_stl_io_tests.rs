use bowlgen::bowl::{bottom_plate, wall_fragment};
use bowlgen::io::stl::{binary_stl_len, unique_facets};
use bowlgen::mesh::Mesh;
use nalgebra::Point3;
use std::io::Cursor;

#[test]
fn mesh_to_stl_ascii() {
    let plate = bottom_plate(4, 1.0, 0.1).unwrap();
    let stl_str = plate.to_stl_ascii("bowl_bottom");
    // Basic checks
    assert!(stl_str.starts_with("solid bowl_bottom\n"));
    assert!(stl_str.ends_with("endsolid bowl_bottom\n"));

    assert_eq!(stl_str.matches("facet normal").count(), 16);
    assert_eq!(stl_str.matches("outer loop").count(), 16);
    assert_eq!(stl_str.matches("      vertex ").count(), 48);
    // first bottom-cap facet faces down
    assert!(stl_str.contains("facet normal 0.000000 0.000000 -1.000000"));
}

#[test]
fn mesh_to_stl_binary_and_back() -> Result<(), Box<dyn std::error::Error>> {
    let plate = bottom_plate(4, 1.0, 0.1)?;
    let bytes = plate.to_stl_binary()?;
    assert_eq!(bytes.len(), binary_stl_len(16));

    let read_back = stl_io::read_stl(&mut Cursor::new(bytes))?;
    assert_eq!(read_back.faces.len(), 16);
    // the closing rim samples merge with the first ones: 2 centers + 2 rims of 4
    assert_eq!(read_back.vertices.len(), 10);
    Ok(())
}

#[test]
fn fragment_to_stl_binary() -> Result<(), Box<dyn std::error::Error>> {
    let fragment = wall_fragment(16, 1.0, 1.5, 1.0, 0.1)?;
    let bytes = fragment.to_stl_binary()?;
    assert_eq!(bytes.len(), binary_stl_len(12));

    let read_back = stl_io::read_stl(&mut Cursor::new(bytes))?;
    assert_eq!(read_back.faces.len(), 12);
    assert_eq!(read_back.vertices.len(), 8);

    for (face, expected) in read_back.faces.iter().zip(0..fragment.triangle_count()) {
        let normal = fragment.face_normal(expected);
        #[allow(clippy::unnecessary_cast)]
        let expected_normal = [normal.x as f32, normal.y as f32, normal.z as f32];
        for axis in 0..3 {
            assert!((face.normal[axis] - expected_normal[axis]).abs() < 1e-6);
        }
    }
    Ok(())
}

#[test]
fn duplicate_triangles_are_dropped() {
    let mesh = Mesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ],
        vec![[0, 1, 2], [1, 2, 0], [2, 1, 0], [0, 1, 3]],
    )
    .unwrap();

    let facets = unique_facets(&mesh);
    assert_eq!(facets.len(), 2);
    assert_eq!(facets[0].corners, mesh.triangle(0));
    assert_eq!(facets[1].corners, mesh.triangle(3));

    let bytes = mesh.to_stl_binary().unwrap();
    assert_eq!(bytes.len(), binary_stl_len(2));
    assert_eq!(mesh.to_stl_ascii("dup").matches("endfacet").count(), 2);
}

#[test]
fn coincident_vertices_do_not_make_duplicates() {
    // repeated rim samples share positions but never a whole triangle
    for n in 3..=24 {
        let plate = bottom_plate(n, 1.0, 0.1).unwrap();
        assert_eq!(unique_facets(&plate).len(), 4 * n, "N = {n}");
    }
}
