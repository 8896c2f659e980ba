//! Voxel grid, cell records and raycast selection

pub mod voxel;
pub mod initializer;
pub mod grid;
pub mod selector;

pub use voxel::Voxel;
pub use initializer::{CellInitializer, RandomColors, SolidColor, Empty};
pub use grid::{VoxelGrid, MAX_GRID_SIZE, MIN_SPACING, MAX_SPACING, SPACING_STEP};
pub use selector::{Pick, Selector};
