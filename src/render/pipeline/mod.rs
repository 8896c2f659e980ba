//! Render pipelines

pub mod voxel;

pub use voxel::{VoxelPipeline, CLEAR_COLOR};
