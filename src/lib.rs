//! Voxedit - an interactive voxel scene editor

pub mod core;
pub mod math;
pub mod voxel;
pub mod scene;
pub mod audio;
pub mod editor;
pub mod render;
