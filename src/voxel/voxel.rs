//! Voxel cell record

use crate::core::types::{IVec3, Vec3, Vec4};
use crate::math::Aabb;

/// Build an opaque color from an RGB triple
pub fn opaque(rgb: Vec3) -> Vec4 {
    rgb.extend(1.0)
}

/// Random RGB color with the given alpha
pub fn random_color(rng: &mut fastrand::Rng, alpha: f32) -> Vec4 {
    Vec4::new(rng.f32(), rng.f32(), rng.f32(), alpha)
}

/// One cell of the editing grid.
///
/// Cells are created once with the grid and never deallocated individually;
/// "adding" and "removing" toggle `visible`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voxel {
    /// Integer grid coordinate
    pub coord: IVec3,
    /// Same coordinate as floats, for rendering
    pub position: Vec3,
    /// Cube edge length (the grid spacing)
    pub scale: f32,
    /// RGBA color
    pub color: Vec4,
    /// False means the cell is logically empty
    pub visible: bool,
    /// The grid's current selection target
    pub selected: bool,
}

impl Voxel {
    /// Create a visible, unselected cell
    pub fn new(coord: IVec3, scale: f32, color: Vec4) -> Self {
        Self {
            coord,
            position: coord.as_vec3(),
            scale,
            color,
            visible: true,
            selected: false,
        }
    }

    /// Create an invisible cell (loaded scenes start from these)
    pub fn empty(coord: IVec3, scale: f32) -> Self {
        Self {
            visible: false,
            ..Self::new(coord, scale, Vec4::ONE)
        }
    }

    /// Bounding box used for picking: centered on the lattice point
    pub fn aabb(&self) -> Aabb {
        Aabb::cube(self.position, self.scale)
    }

    /// RGB part of the color
    pub fn rgb(&self) -> Vec3 {
        self.color.truncate()
    }
}
