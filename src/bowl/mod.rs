//! Bowl parameters and the mesh builders for its two parts

use crate::errors::BowlError;
use crate::float_types::{Real, TAU};
use crate::mesh::Mesh;

pub mod placement;
pub mod shapes;

pub use placement::{FragmentPlacement, fragment_placements};
pub use shapes::{bottom_plate, wall_fragment};

/// Model name used when none is given.
pub const DEFAULT_MODEL_NAME: &str = "bowl";

/// Angular subdivision count used when none is given.
pub const DEFAULT_NUM_DIVISION: usize = 16;

/// Smallest division count that still closes a polygon.
pub const MIN_NUM_DIVISION: usize = 3;

/// Validated bowl description.
///
/// `thickness` is expected to stay below both radii; that is not checked and
/// violating it yields self-intersecting geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BowlParameters {
    pub model_name: String,
    pub num_division: usize,
    pub radius_bottom: Real,
    pub radius_top: Real,
    pub height: Real,
    pub thickness: Real,
}

impl BowlParameters {
    pub fn new(
        model_name: impl Into<String>,
        num_division: usize,
        radius_bottom: Real,
        radius_top: Real,
        height: Real,
        thickness: Real,
    ) -> Result<Self, BowlError> {
        let model_name = model_name.into();
        if model_name.is_empty() {
            return Err(BowlError::invalid("model name must not be empty"));
        }
        if !model_name.chars().all(is_model_name_char) {
            return Err(BowlError::invalid(format!(
                "model name `{model_name}` may only contain ASCII letters, digits, `_`, `.` and `-`"
            )));
        }
        check_division(num_division)?;
        check_positive("radius_bottom", radius_bottom)?;
        check_positive("radius_top", radius_top)?;
        check_positive("height", height)?;
        check_positive("thickness", thickness)?;

        Ok(BowlParameters {
            model_name,
            num_division,
            radius_bottom,
            radius_top,
            height,
            thickness,
        })
    }

    /// Arc spanned by one wall fragment, `2π / num_division`.
    pub fn fragment_width(&self) -> Real {
        TAU / self.num_division as Real
    }

    pub fn bottom_plate(&self) -> Result<Mesh, BowlError> {
        bottom_plate(self.num_division, self.radius_bottom, self.thickness)
    }

    pub fn wall_fragment(&self) -> Result<Mesh, BowlError> {
        wall_fragment(
            self.num_division,
            self.radius_bottom,
            self.radius_top,
            self.height,
            self.thickness,
        )
    }

    pub fn fragment_placements(&self) -> Vec<FragmentPlacement> {
        fragment_placements(self.num_division)
    }
}

/// Model names end up in file names, `model://` URIs and XML text unescaped.
const fn is_model_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

pub(crate) fn check_division(num_division: usize) -> Result<(), BowlError> {
    if num_division < MIN_NUM_DIVISION {
        return Err(BowlError::invalid(format!(
            "num_division must be at least {MIN_NUM_DIVISION}, got {num_division}"
        )));
    }
    Ok(())
}

pub(crate) fn check_positive(name: &str, value: Real) -> Result<(), BowlError> {
    // NaN fails the comparison as well
    if !(value.is_finite() && value > 0.0) {
        return Err(BowlError::invalid(format!(
            "{name} must be a finite value > 0, got {value}"
        )));
    }
    Ok(())
}
