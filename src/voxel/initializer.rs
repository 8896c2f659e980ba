//! Strategies for filling a freshly allocated grid

use crate::core::types::{IVec3, Vec4};
use super::voxel::{random_color, Voxel};

/// Alpha of the randomly colored starting cells
pub const INITIAL_ALPHA: f32 = 0.8;

/// Produces the starting state of each cell when a grid is built.
///
/// Called once per coordinate in `x, y, z` scan order.
pub trait CellInitializer {
    fn init_cell(&mut self, coord: IVec3, scale: f32) -> Voxel;
}

impl<F> CellInitializer for F
where
    F: FnMut(IVec3, f32) -> Voxel,
{
    fn init_cell(&mut self, coord: IVec3, scale: f32) -> Voxel {
        self(coord, scale)
    }
}

/// Every cell visible with its own random color
pub struct RandomColors {
    rng: fastrand::Rng,
    alpha: f32,
}

impl RandomColors {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new(), alpha: INITIAL_ALPHA }
    }

    /// Reproducible colors
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed), alpha: INITIAL_ALPHA }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl CellInitializer for RandomColors {
    fn init_cell(&mut self, coord: IVec3, scale: f32) -> Voxel {
        Voxel::new(coord, scale, random_color(&mut self.rng, self.alpha))
    }
}

/// Every cell visible with the same color
pub struct SolidColor(pub Vec4);

impl CellInitializer for SolidColor {
    fn init_cell(&mut self, coord: IVec3, scale: f32) -> Voxel {
        Voxel::new(coord, scale, self.0)
    }
}

/// Every cell invisible
pub struct Empty;

impl CellInitializer for Empty {
    fn init_cell(&mut self, coord: IVec3, scale: f32) -> Voxel {
        Voxel::empty(coord, scale)
    }
}
