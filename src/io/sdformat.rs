//! Gazebo model bundle: `model.config` and `model.sdf` (SDFormat 1.7).
//!
//! Fragment links carry their z rotation in radians inside `<pose>`.

use crate::bowl::FragmentPlacement;
use std::fmt::Write;

/// SDFormat version written into both files.
pub const SDF_VERSION: &str = "1.7";

/// Mass given to every link; the model is static so only its presence matters.
const LINK_MASS: &str = "0.01";

/// `model.config` naming the model and pointing at `sdf_file`.
pub fn model_config(model_name: &str, sdf_file: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n\
         <model>\n  \
           <name>{model_name}</name>\n  \
           <version>1.0</version>\n  \
           <sdf version=\"{SDF_VERSION}\">{sdf_file}</sdf>\n\
         </model>\n"
    )
}

/// `model://` URI of a mesh stored in the model's `meshes/` directory.
pub fn mesh_uri(model_name: &str, mesh_file: &str) -> String {
    format!("model://{model_name}/meshes/{mesh_file}")
}

/// `model.sdf` with one `bottom_plate` link and one `side_fragment_<i>` link per placement.
pub fn model_sdf(
    model_name: &str,
    bottom_file: &str,
    fragment_file: &str,
    placements: &[FragmentPlacement],
) -> String {
    let bottom_uri = mesh_uri(model_name, bottom_file);
    let fragment_uri = mesh_uri(model_name, fragment_file);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?>\n");
    let _ = writeln!(out, "<sdf version=\"{SDF_VERSION}\">");
    let _ = writeln!(out, "  <model name=\"{model_name}\">");
    out.push_str("    <pose>0 0 0 0 0 0</pose>\n");
    out.push_str("    <static>true</static>\n");
    push_link(&mut out, "bottom_plate", &bottom_uri, None);
    for placement in placements {
        push_link(
            &mut out,
            &format!("side_fragment_{}", placement.index),
            &fragment_uri,
            Some(format!("0 0 0 0 0 {:?}", placement.angle)),
        );
    }
    out.push_str("  </model>\n");
    out.push_str("</sdf>\n");
    out
}

fn push_link(out: &mut String, name: &str, uri: &str, pose: Option<String>) {
    let _ = writeln!(out, "    <link name=\"{name}\">");
    out.push_str("      <inertial>\n");
    let _ = writeln!(out, "        <mass>{LINK_MASS}</mass>");
    out.push_str("      </inertial>\n");
    for (element, element_name) in [("collision", "collision"), ("visual", "visual")] {
        let _ = writeln!(out, "      <{element} name=\"{element_name}\">");
        if let Some(pose) = &pose {
            let _ = writeln!(out, "        <pose>{pose}</pose>");
        }
        out.push_str("        <geometry>\n");
        out.push_str("          <mesh>\n");
        let _ = writeln!(out, "            <uri>{uri}</uri>");
        out.push_str("          </mesh>\n");
        out.push_str("        </geometry>\n");
        let _ = writeln!(out, "      </{element}>");
    }
    out.push_str("    </link>\n");
}
