//! Editor configuration

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::voxel::MAX_GRID_SIZE;

/// On-disk layout used by save/load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneFormat {
    /// `SIZE` / `SPACE` header followed by voxel lines
    #[default]
    Headered,
    /// Voxel lines only, read against the current grid size and spacing
    Legacy,
}

/// Everything the editor reads at startup.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid edge length in cells
    pub grid_size: i32,
    /// Starting cube edge length
    pub grid_spacing: f32,
    /// How far the picking ray reaches
    pub pick_distance: f32,
    /// Where save/load read and write
    pub scene_path: PathBuf,
    pub scene_format: SceneFormat,
    /// Colors bound to the number keys, in order
    pub palette: Vec<[f32; 3]>,
    /// Play a cue when a voxel is added or removed
    pub sound_on_edit: bool,
    /// Outline the selected cell when it is empty
    pub ghost_wireframe: bool,
    /// Added to the RGB of the selected voxel when drawn
    pub selection_highlight: f32,
    /// Directory holding `add.*` and `remove.*` sound files
    pub sound_dir: PathBuf,
    pub camera_start: [f32; 3],
    /// Units per second
    pub camera_speed: f32,
    pub mouse_sensitivity: f32,
    pub window_title: String,
    pub window_size: [u32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            grid_spacing: 0.75,
            pick_distance: 50.0,
            scene_path: PathBuf::from("saves/scene.txt"),
            scene_format: SceneFormat::Headered,
            palette: vec![
                [1.0, 0.0, 0.0], // red
                [0.0, 1.0, 0.0], // green
                [0.0, 0.0, 1.0], // blue
                [1.0, 1.0, 0.0], // yellow
                [1.0, 1.0, 1.0], // white
            ],
            sound_on_edit: true,
            ghost_wireframe: true,
            selection_highlight: 0.5,
            sound_dir: PathBuf::from("sounds"),
            camera_start: [4.5, 4.5, 18.0],
            camera_speed: 10.0,
            mouse_sensitivity: 1.0,
            window_title: "Voxel Scene Editor".to_string(),
            window_size: [800, 600],
        }
    }
}

impl EditorConfig {
    /// Read a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the editor cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(Error::InvalidDimension(self.grid_size));
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(Error::Config(format!("grid_spacing must be positive, got {}", self.grid_spacing)));
        }
        if !(self.pick_distance.is_finite() && self.pick_distance > 0.0) {
            return Err(Error::Config(format!("pick_distance must be positive, got {}", self.pick_distance)));
        }
        Ok(())
    }

    /// Palette entry `index` as a color
    pub fn palette_color(&self, index: usize) -> Option<Vec3> {
        self.palette.get(index).map(|c| Vec3::from_array(*c))
    }

    pub fn camera_start(&self) -> Vec3 {
        Vec3::from_array(self.camera_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.palette_color(3), Some(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(config.palette_color(5), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "grid_size": 4, "scene_format": "legacy" }"#).unwrap();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.scene_format, SceneFormat::Legacy);
        assert_eq!(config.grid_spacing, 0.75);
        assert!(config.sound_on_edit);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("editor.json");
        std::fs::write(&path, r#"{ "grid_size": 6, "pick_distance": 12.5 }"#).unwrap();

        let config = EditorConfig::from_file(&path).unwrap();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.pick_distance, 12.5);
    }

    #[test]
    fn test_from_file_rejects_bad_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("editor.json");

        std::fs::write(&path, r#"{ "grid_size": 0 }"#).unwrap();
        assert!(matches!(EditorConfig::from_file(&path), Err(Error::InvalidDimension(0))));

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(EditorConfig::from_file(&path), Err(Error::Config(_))));

        assert!(matches!(EditorConfig::from_file(dir.path().join("missing.json")), Err(Error::Io(_))));
    }

    #[test]
    fn test_validate_grid_size_range() {
        let mut config = EditorConfig { grid_size: MAX_GRID_SIZE, ..Default::default() };
        assert!(config.validate().is_ok());

        config.grid_size = MAX_GRID_SIZE + 1;
        assert!(matches!(config.validate(), Err(Error::InvalidDimension(65))));
        config.grid_size = 3_000_000;
        assert!(matches!(config.validate(), Err(Error::InvalidDimension(3_000_000))));
    }
}
