use crate::float_types::{Real, TAU};

/// Where one copy of the wall fragment goes: a rotation about +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentPlacement {
    pub index: usize,
    /// Radians.
    pub angle: Real,
}

impl FragmentPlacement {
    pub fn angle_degrees(&self) -> Real {
        self.angle.to_degrees()
    }
}

/// `θ_i = i·2π/N` for `i in 0..N`.
pub fn fragment_placements(num_division: usize) -> Vec<FragmentPlacement> {
    let step = TAU / num_division as Real;
    (0..num_division)
        .map(|index| FragmentPlacement {
            index,
            angle: index as Real * step,
        })
        .collect()
}
