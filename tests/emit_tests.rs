mod support;

use bowlgen::bowl::BowlParameters;
use bowlgen::emit::{OutputLayout, StlEncoding, emit};
use bowlgen::errors::BowlError;
use bowlgen::io::stl::binary_stl_len;
use std::fs;
use support::TempDir;

#[test]
fn layout_names_follow_model_name() {
    let layout = OutputLayout::new("cup", "/models/cup");
    assert_eq!(layout.bottom_file_name(), "cup_bottom.stl");
    assert_eq!(layout.fragment_file_name(), "cup_fragment.stl");
    assert_eq!(
        layout.bottom_mesh_path(),
        std::path::Path::new("/models/cup/meshes/cup_bottom.stl")
    );
    assert_eq!(
        layout.fragment_mesh_path(),
        std::path::Path::new("/models/cup/meshes/cup_fragment.stl")
    );
    assert_eq!(
        layout.model_sdf_path(),
        std::path::Path::new("/models/cup/model.sdf")
    );
    assert!(layout.mjcf_path().is_none());

    let layout = layout.with_mjcf_dir("/mujoco");
    assert_eq!(
        layout.mjcf_path().unwrap(),
        std::path::Path::new("/mujoco/cup.xml")
    );
}

#[test]
fn emit_writes_every_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new("emit");
    let params = BowlParameters::new("bowl", 4, 1.0, 1.0, 1.0, 0.1)?;
    let layout = OutputLayout::new("bowl", tmp.path().join("bowl"));

    let written = emit(&params, &layout, StlEncoding::Binary)?;
    assert_eq!(
        written,
        vec![
            layout.fragment_mesh_path(),
            layout.bottom_mesh_path(),
            layout.model_config_path(),
            layout.model_sdf_path(),
        ]
    );

    assert_eq!(
        fs::read(layout.bottom_mesh_path())?.len(),
        binary_stl_len(16)
    );
    assert_eq!(
        fs::read(layout.fragment_mesh_path())?.len(),
        binary_stl_len(12)
    );

    let sdf = fs::read_to_string(layout.model_sdf_path())?;
    assert_eq!(sdf.matches("<link name=\"side_fragment_").count(), 4);
    assert_eq!(sdf.matches("<link name=\"bottom_plate\">").count(), 1);

    let config = fs::read_to_string(layout.model_config_path())?;
    assert!(config.contains("<name>bowl</name>"));
    Ok(())
}

#[test]
fn emit_ascii_and_mjcf() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new("emit-mjcf");
    let params = BowlParameters::new("cup", 6, 0.5, 0.8, 0.4, 0.02)?;
    let out_dir = tmp.path().join("cup");
    let layout = OutputLayout::new("cup", &out_dir).with_mjcf_dir(&out_dir);

    let written = emit(&params, &layout, StlEncoding::Ascii)?;
    assert_eq!(written.len(), 5);
    assert_eq!(written[4], out_dir.join("cup.xml"));

    let bottom = fs::read_to_string(layout.bottom_mesh_path())?;
    assert!(bottom.starts_with("solid cup_bottom"));
    assert_eq!(bottom.matches("endfacet").count(), 24);

    let xml = fs::read_to_string(&written[4])?;
    assert!(xml.contains("meshdir=\"meshes\""));
    assert_eq!(xml.matches("mesh=\"cup_fragment\"").count(), 6);
    Ok(())
}

#[test]
fn emit_mjcf_elsewhere_uses_absolute_mesh_dir() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new("emit-mjcf-dir");
    let params = BowlParameters::new("bowl", 3, 1.0, 1.2, 1.0, 0.1)?;
    let layout = OutputLayout::new("bowl", tmp.path().join("model"))
        .with_mjcf_dir(tmp.path().join("mujoco"));

    emit(&params, &layout, StlEncoding::Binary)?;

    let xml = fs::read_to_string(layout.mjcf_path().unwrap())?;
    let mesh_dir = std::path::absolute(layout.mesh_dir())?;
    assert!(xml.contains(&format!("meshdir=\"{}\"", mesh_dir.display())));
    Ok(())
}

#[test]
fn invalid_parameters_write_nothing() {
    let tmp = TempDir::new("emit-invalid");
    let params = BowlParameters {
        model_name: "bowl".to_string(),
        num_division: 2,
        radius_bottom: 1.0,
        radius_top: 1.0,
        height: 1.0,
        thickness: 0.1,
    };
    let layout = OutputLayout::new("bowl", tmp.path());

    let err = emit(&params, &layout, StlEncoding::Binary).unwrap_err();
    assert!(matches!(err, BowlError::InvalidParameter(_)));
    assert!(!tmp.path().exists());
}

#[test]
fn unwritable_output_is_an_io_failure() {
    let tmp = TempDir::new("emit-io");
    fs::create_dir_all(tmp.path()).unwrap();
    // a regular file where the model directory should go
    let blocker = tmp.path().join("blocked");
    fs::write(&blocker, b"not a directory").unwrap();

    let params = BowlParameters::new("bowl", 8, 1.0, 1.0, 1.0, 0.1).unwrap();
    let layout = OutputLayout::new("bowl", &blocker);

    let err = emit(&params, &layout, StlEncoding::Binary).unwrap_err();
    assert!(matches!(err, BowlError::Io { .. }));
    assert!(err.to_string().starts_with("(IoFailure)"));
}
