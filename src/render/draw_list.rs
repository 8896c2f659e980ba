//! Per-frame cube instances built from the grid

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::scene::EditorConfig;
use crate::voxel::{Voxel, VoxelGrid};

/// Outline color for an empty selected cell
pub const GHOST_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// One cube as the shader sees it (must match `CubeInstance` in voxel.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    /// xyz = center, w = edge length
    pub position_scale: [f32; 4],
    pub color: [f32; 4],
}

impl CubeInstance {
    pub fn new(position: Vec3, scale: f32, color: Vec4) -> Self {
        Self {
            position_scale: position.extend(scale).to_array(),
            color: color.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec4::from_array(self.position_scale).truncate()
    }
}

/// How selection is shown
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPolicy {
    /// Outline the selected cell when it is empty
    pub ghost_wireframe: bool,
    /// Added to the selected voxel's RGB
    pub selection_highlight: f32,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            ghost_wireframe: true,
            selection_highlight: 0.5,
        }
    }
}

impl From<&EditorConfig> for RenderPolicy {
    fn from(config: &EditorConfig) -> Self {
        Self {
            ghost_wireframe: config.ghost_wireframe,
            selection_highlight: config.selection_highlight,
        }
    }
}

/// Instances for one frame: filled cubes sorted far to near, then outlines.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub fills: Vec<CubeInstance>,
    pub outlines: Vec<CubeInstance>,
}

impl DrawList {
    pub fn build(grid: &VoxelGrid, camera_position: Vec3, policy: &RenderPolicy) -> Self {
        let mut keyed: Vec<(f32, CubeInstance)> = grid
            .visible()
            .map(|v| (v.position.distance_squared(camera_position), fill_instance(v, policy)))
            .collect();
        // Alpha blending without a depth buffer: farthest first
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

        let selected = grid.selected_voxel();
        let outlines = if policy.ghost_wireframe && !selected.visible {
            vec![CubeInstance::new(selected.position, selected.scale, GHOST_COLOR)]
        } else {
            Vec::new()
        };

        Self {
            fills: keyed.into_iter().map(|(_, instance)| instance).collect(),
            outlines,
        }
    }

    /// Fills followed by outlines, the order the GPU buffer expects
    pub fn instances(&self) -> Vec<CubeInstance> {
        let mut all = Vec::with_capacity(self.len());
        all.extend_from_slice(&self.fills);
        all.extend_from_slice(&self.outlines);
        all
    }

    pub fn len(&self) -> usize {
        self.fills.len() + self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn fill_instance(voxel: &Voxel, policy: &RenderPolicy) -> CubeInstance {
    let mut color = voxel.color;
    if voxel.selected {
        color += Vec3::splat(policy.selection_highlight).extend(0.0);
    }
    CubeInstance::new(voxel.position, voxel.scale, color)
}
