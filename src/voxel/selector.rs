//! Raycast selection over the voxel grid

use crate::core::types::{IVec3, Vec3};
use crate::math::Ray;
use super::grid::VoxelGrid;

/// Default reach of the picking ray
pub const DEFAULT_MAX_DISTANCE: f32 = 20.0;

/// Nearest cell hit by a picking ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    /// Grid coordinate of the hit cell
    pub coord: IVec3,
    /// Ray parameter where the ray enters the cell (0 if it starts inside)
    pub distance: f32,
    /// World position of the entry point
    pub point: Vec3,
}

/// Chooses the grid's selected cell from a camera ray.
///
/// Every cell is tested, visible or not, so an empty slot can be targeted
/// for placing a new voxel. The scan is O(size³).
#[derive(Clone, Copy, Debug)]
pub struct Selector {
    pub max_distance: f32,
}

impl Selector {
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Find the nearest cell whose box the ray crosses within `max_distance`.
    ///
    /// Ties on distance go to the first cell in `x, y, z` scan order.
    pub fn pick(&self, grid: &VoxelGrid, ray: &Ray) -> Option<Pick> {
        ray.intersect_aabb(&grid.bounds(), self.max_distance)?;

        let mut best: Option<(IVec3, f32)> = None;
        for voxel in grid.iter() {
            let Some((t_near, _)) = ray.intersect_aabb(&voxel.aabb(), self.max_distance) else {
                continue;
            };
            if best.is_none_or(|(_, best_t)| t_near < best_t) {
                best = Some((voxel.coord, t_near));
            }
        }

        best.map(|(coord, distance)| Pick {
            coord,
            distance,
            point: ray.at(distance),
        })
    }

    /// Pick and move the grid's selection to the hit cell.
    ///
    /// On a miss the previous selection stays as it was.
    pub fn update(&self, grid: &mut VoxelGrid, ray: &Ray) -> Option<IVec3> {
        let pick = self.pick(grid, ray)?;
        if pick.coord != grid.selection() {
            log::trace!("Selection {} -> {} (t = {:.3})", grid.selection(), pick.coord, pick.distance);
        }
        // pick.coord came from the grid's own cells
        grid.select(pick.coord).ok()?;
        Some(pick.coord)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::initializer::Empty;

    fn selected_count(grid: &VoxelGrid) -> usize {
        grid.iter().filter(|v| v.selected).count()
    }

    #[test]
    fn test_nearest_cell_along_negative_z() {
        let mut grid = VoxelGrid::new(3, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let selector = Selector::new(20.0);

        // Along x = y = 0 the nearest face belongs to (0, 0, 2)
        let pick = selector.pick(&grid, &ray).unwrap();
        assert_eq!(pick.coord, IVec3::new(0, 0, 2));
        assert!((pick.distance - 2.5).abs() < 1e-5);

        // Centered on the middle column the front cell wins
        let ray = Ray::new(Vec3::new(1.0, 1.0, 5.0), Vec3::NEG_Z);
        assert_eq!(selector.update(&mut grid, &ray), Some(IVec3::new(1, 1, 2)));
        assert_eq!(grid.selection(), IVec3::new(1, 1, 2));
    }

    #[test]
    fn test_shared_face_tie_goes_to_scan_order() {
        // Spacing 1.0: the ray at x = y = 0.5 grazes four columns at once
        let grid = VoxelGrid::new(3, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(0.5, 0.5, 5.0), Vec3::NEG_Z);
        let pick = Selector::new(20.0).pick(&grid, &ray).unwrap();
        assert_eq!(pick.coord, IVec3::new(0, 0, 2));
    }

    #[test]
    fn test_gap_between_cells_with_small_spacing() {
        let grid = VoxelGrid::new(3, 0.5).unwrap();
        // x = 0.5 falls in the gap between columns 0 and 1
        let ray = Ray::new(Vec3::new(0.5, 1.0, 5.0), Vec3::NEG_Z);
        assert!(Selector::new(20.0).pick(&grid, &ray).is_none());
    }

    #[test]
    fn test_invisible_cells_are_selectable() {
        let mut grid = VoxelGrid::with_initializer(3, 1.0, &mut Empty).unwrap();
        let ray = Ray::new(Vec3::new(2.0, 1.0, -5.0), Vec3::Z);
        assert_eq!(Selector::default().update(&mut grid, &ray), Some(IVec3::new(2, 1, 0)));
        assert!(!grid.selected_voxel().visible);
    }

    #[test]
    fn test_miss_keeps_previous_selection() {
        let mut grid = VoxelGrid::new(3, 1.0).unwrap();
        let selector = Selector::new(20.0);
        selector.update(&mut grid, &Ray::new(Vec3::new(1.0, 1.0, 5.0), Vec3::NEG_Z));
        let before = grid.selection();

        // Pointing away from the grid
        let away = Ray::new(Vec3::new(1.0, 1.0, 5.0), Vec3::Z);
        assert_eq!(selector.update(&mut grid, &away), None);
        // Passing beside it
        let beside = Ray::new(Vec3::new(10.0, 10.0, 5.0), Vec3::NEG_Z);
        assert_eq!(selector.update(&mut grid, &beside), None);

        assert_eq!(grid.selection(), before);
        assert!(grid.cell(before).unwrap().selected);
        assert_eq!(selected_count(&grid), 1);
    }

    #[test]
    fn test_out_of_reach_is_a_miss() {
        let grid = VoxelGrid::new(3, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(1.0, 1.0, 30.0), Vec3::NEG_Z);
        assert!(Selector::new(20.0).pick(&grid, &ray).is_none());
        assert!(Selector::new(50.0).pick(&grid, &ray).is_some());
    }

    #[test]
    fn test_origin_inside_cell_picks_it() {
        let grid = VoxelGrid::new(3, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(1.1, 1.0, 1.0), Vec3::X);
        let pick = Selector::default().pick(&grid, &ray).unwrap();
        assert_eq!(pick.coord, IVec3::new(1, 1, 1));
        assert_eq!(pick.distance, 0.0);
    }

    #[test]
    fn test_diagonal_ray_selects_corner() {
        let grid = VoxelGrid::new(4, 1.0).unwrap();
        let ray = Ray::new(Vec3::splat(-5.0), Vec3::ONE);
        let pick = Selector::default().pick(&grid, &ray).unwrap();
        assert_eq!(pick.coord, IVec3::ZERO);
    }

    #[test]
    fn test_sweep_keeps_single_selection() {
        let mut grid = VoxelGrid::new(4, 0.75).unwrap();
        let selector = Selector::new(50.0);
        for step in 0..64 {
            let angle = step as f32 * 0.1;
            let origin = Vec3::new(1.5 + 8.0 * angle.cos(), 1.5 + (angle * 0.7).sin(), 1.5 + 8.0 * angle.sin());
            let ray = Ray::new(origin, Vec3::splat(1.5) - origin);
            selector.update(&mut grid, &ray);
            assert_eq!(selected_count(&grid), 1);
            assert!(grid.cell(grid.selection()).unwrap().selected);
        }
    }
}
