//! Writes the bowl's meshes and description files to disk.
//!
//! Geometry is computed before anything touches the filesystem, so an
//! invalid parameter never leaves partial output behind. Once writing has
//! started, files already written stay in place if a later write fails.

use crate::bowl::BowlParameters;
use crate::errors::BowlError;
use crate::io::{mjcf, sdformat};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the mesh directory inside the model directory.
pub const MESH_DIR: &str = "meshes";
pub const MODEL_CONFIG: &str = "model.config";
pub const MODEL_SDF: &str = "model.sdf";

/// STL flavour for the two mesh files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StlEncoding {
    #[default]
    Binary,
    Ascii,
}

/// Where every output file goes, derived from the model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub model_name: String,
    pub out_dir: PathBuf,
    pub mjcf_dir: Option<PathBuf>,
}

impl OutputLayout {
    pub fn new(model_name: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        OutputLayout {
            model_name: model_name.into(),
            out_dir: out_dir.into(),
            mjcf_dir: None,
        }
    }

    /// Also emit a MuJoCo scene into `mjcf_dir`.
    pub fn with_mjcf_dir(mut self, mjcf_dir: impl Into<PathBuf>) -> Self {
        self.mjcf_dir = Some(mjcf_dir.into());
        self
    }

    pub fn mesh_dir(&self) -> PathBuf {
        self.out_dir.join(MESH_DIR)
    }

    pub fn bottom_file_name(&self) -> String {
        format!("{}_bottom.stl", self.model_name)
    }

    pub fn fragment_file_name(&self) -> String {
        format!("{}_fragment.stl", self.model_name)
    }

    pub fn bottom_mesh_path(&self) -> PathBuf {
        self.mesh_dir().join(self.bottom_file_name())
    }

    pub fn fragment_mesh_path(&self) -> PathBuf {
        self.mesh_dir().join(self.fragment_file_name())
    }

    pub fn model_config_path(&self) -> PathBuf {
        self.out_dir.join(MODEL_CONFIG)
    }

    pub fn model_sdf_path(&self) -> PathBuf {
        self.out_dir.join(MODEL_SDF)
    }

    pub fn mjcf_path(&self) -> Option<PathBuf> {
        self.mjcf_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.xml", self.model_name)))
    }

    /// `meshdir` attribute for the MJCF file.
    ///
    /// MuJoCo resolves relative paths against the MJCF file, so anything
    /// other than the sibling `meshes/` directory is made absolute.
    fn mjcf_mesh_dir(&self, mjcf_dir: &Path) -> Result<String, BowlError> {
        if mjcf_dir == self.out_dir {
            return Ok(MESH_DIR.to_string());
        }
        let mesh_dir = self.mesh_dir();
        let absolute = std::path::absolute(&mesh_dir).map_err(|e| BowlError::io(&mesh_dir, e))?;
        Ok(absolute.display().to_string())
    }
}

/// Compute both meshes and write every file of `layout`.
///
/// Returns the written paths in write order.
pub fn emit(
    params: &BowlParameters,
    layout: &OutputLayout,
    encoding: StlEncoding,
) -> Result<Vec<PathBuf>, BowlError> {
    let fragment = params.wall_fragment()?;
    let bottom = params.bottom_plate()?;
    let placements = params.fragment_placements();
    debug!(
        "{} fragment placements, width {:.6} rad",
        placements.len(),
        params.fragment_width()
    );

    let fragment_bytes = encode(&fragment, &layout.fragment_file_name(), encoding, layout)?;
    let bottom_bytes = encode(&bottom, &layout.bottom_file_name(), encoding, layout)?;

    create_dir(&layout.out_dir)?;
    create_dir(&layout.mesh_dir())?;

    let mut written = Vec::new();
    written.push(write_file(layout.fragment_mesh_path(), &fragment_bytes)?);
    written.push(write_file(layout.bottom_mesh_path(), &bottom_bytes)?);
    written.push(write_file(
        layout.model_config_path(),
        sdformat::model_config(&layout.model_name, MODEL_SDF).as_bytes(),
    )?);
    written.push(write_file(
        layout.model_sdf_path(),
        sdformat::model_sdf(
            &layout.model_name,
            &layout.bottom_file_name(),
            &layout.fragment_file_name(),
            &placements,
        )
        .as_bytes(),
    )?);

    if let (Some(mjcf_dir), Some(mjcf_path)) = (&layout.mjcf_dir, layout.mjcf_path()) {
        create_dir(mjcf_dir)?;
        let contents = mjcf::model_mjcf(
            &layout.model_name,
            &layout.mjcf_mesh_dir(mjcf_dir)?,
            &layout.bottom_file_name(),
            &layout.fragment_file_name(),
            &placements,
        );
        written.push(write_file(mjcf_path, contents.as_bytes())?);
    }

    Ok(written)
}

fn encode(
    mesh: &crate::mesh::Mesh,
    file_name: &str,
    encoding: StlEncoding,
    layout: &OutputLayout,
) -> Result<Vec<u8>, BowlError> {
    match encoding {
        StlEncoding::Ascii => Ok(mesh
            .to_stl_ascii(file_name.trim_end_matches(".stl"))
            .into_bytes()),
        StlEncoding::Binary => mesh
            .to_stl_binary()
            .map_err(|e| BowlError::io(layout.mesh_dir().join(file_name), e)),
    }
}

fn create_dir(dir: &Path) -> Result<(), BowlError> {
    fs::create_dir_all(dir).map_err(|e| BowlError::io(dir, e))
}

fn write_file(path: PathBuf, contents: &[u8]) -> Result<PathBuf, BowlError> {
    fs::write(&path, contents).map_err(|e| BowlError::io(&path, e))?;
    info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}
