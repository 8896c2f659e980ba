//! Scene files on disk

use std::path::{Path, PathBuf};

use crate::core::types::Result;
use crate::voxel::VoxelGrid;
use super::config::SceneFormat;
use super::format;

/// Reads and writes the scene file at a fixed path.
pub struct SceneManager {
    path: PathBuf,
    format: SceneFormat,
}

impl SceneManager {
    pub fn new(path: impl Into<PathBuf>, format: SceneFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point save/load at another file
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn format(&self) -> SceneFormat {
        self.format
    }

    /// Write the grid's visible voxels, creating the parent directory if needed
    pub fn save(&self, grid: &VoxelGrid) -> Result<&Path> {
        let text = match self.format {
            SceneFormat::Headered => format::save(grid),
            SceneFormat::Legacy => format::save_legacy(grid),
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, text)?;

        log::info!("Saved {} voxels to {}", grid.visible_count(), self.path.display());
        Ok(&self.path)
    }

    /// Read the scene file into a new grid.
    ///
    /// `current` supplies size and spacing for the headerless format; it is
    /// never modified.
    pub fn load(&self, current: &VoxelGrid) -> Result<VoxelGrid> {
        let text = std::fs::read_to_string(&self.path)?;
        let grid = match self.format {
            SceneFormat::Headered => format::load(&text)?,
            SceneFormat::Legacy => format::load_legacy(&text, current.size(), current.spacing())?,
        };

        log::info!(
            "Loaded {}³ scene with {} voxels from {}",
            grid.size(), grid.visible_count(), self.path.display()
        );
        Ok(grid)
    }
}
