//! Discrete editing actions

use glam::Vec3;

/// One user action applied between selection and drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorCommand {
    /// Fill the selected cell
    AddVoxel,
    /// Empty the selected cell
    RemoveVoxel,
    /// Recolor the selected cell
    Paint(Vec3),
    /// Grow (positive) or shrink (negative) the cubes by one step
    AdjustSpacing(f32),
    /// Write the scene file
    Save,
    /// Replace the grid with the scene file
    Load,
}
