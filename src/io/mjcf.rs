//! MuJoCo (MJCF) scene for the bowl.
//!
//! MuJoCo is told `angle="degree"`, so fragment rotations are written in degrees.

use super::escape_attribute;
use crate::bowl::FragmentPlacement;
use std::fmt::Write;

/// Asset name of a mesh file: the file name without its extension.
fn asset_name(mesh_file: &str) -> &str {
    mesh_file
        .rsplit_once('.')
        .map_or(mesh_file, |(stem, _)| stem)
}

/// MJCF document placing the bottom plate once and the fragment at every placement.
///
/// `mesh_dir` is written as the compiler `meshdir`, escaped for an attribute value.
pub fn model_mjcf(
    model_name: &str,
    mesh_dir: &str,
    bottom_file: &str,
    fragment_file: &str,
    placements: &[FragmentPlacement],
) -> String {
    let bottom = asset_name(bottom_file);
    let fragment = asset_name(fragment_file);

    let mut out = String::new();
    let _ = writeln!(out, "<mujoco model=\"{model_name}\">");
    let _ = writeln!(
        out,
        "  <compiler angle=\"degree\" meshdir=\"{}\"/>",
        escape_attribute(mesh_dir)
    );
    out.push_str("  <asset>\n");
    let _ = writeln!(out, "    <mesh name=\"{bottom}\" file=\"{bottom_file}\"/>");
    let _ = writeln!(out, "    <mesh name=\"{fragment}\" file=\"{fragment_file}\"/>");
    out.push_str("  </asset>\n");
    out.push_str("  <worldbody>\n");
    let _ = writeln!(out, "    <body name=\"{model_name}\" pos=\"0 0 0\">");
    let _ = writeln!(
        out,
        "      <geom name=\"bottom_plate\" type=\"mesh\" mesh=\"{bottom}\"/>"
    );
    for placement in placements {
        let _ = writeln!(
            out,
            "      <geom name=\"side_fragment_{}\" type=\"mesh\" mesh=\"{fragment}\" euler=\"0 0 {:?}\"/>",
            placement.index,
            placement.angle_degrees()
        );
    }
    out.push_str("    </body>\n");
    out.push_str("  </worldbody>\n");
    out.push_str("</mujoco>\n");
    out
}
