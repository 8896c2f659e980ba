//! Editing context: grid, selection, persistence and sound in one owner

pub mod bindings;
pub mod command;

pub use command::EditorCommand;

use glam::{IVec3, Vec3};

use crate::audio::{AudioCue, AudioSink};
use crate::core::types::Result;
use crate::math::Ray;
use crate::scene::{EditorConfig, SceneManager};
use crate::voxel::{Selector, VoxelGrid};

/// Owns all editing state; the window layer drives it once per frame.
///
/// Frame order: [`update_selection`](Self::update_selection) with the camera
/// pose, then [`apply`](Self::apply) for each queued command, then the
/// renderer reads [`grid`](Self::grid).
pub struct EditorContext<A: AudioSink = Box<dyn AudioSink>> {
    grid: VoxelGrid,
    selector: Selector,
    scenes: SceneManager,
    audio: A,
    sound_on_edit: bool,
    status: Option<String>,
}

impl<A: AudioSink> EditorContext<A> {
    /// Build the starting grid described by `config`
    pub fn new(config: &EditorConfig, audio: A) -> Result<Self> {
        config.validate()?;
        let grid = VoxelGrid::new(config.grid_size, config.grid_spacing)?;
        Ok(Self::with_grid(grid, config, audio))
    }

    /// Wrap an existing grid
    pub fn with_grid(grid: VoxelGrid, config: &EditorConfig, audio: A) -> Self {
        Self {
            grid,
            selector: Selector::new(config.pick_distance),
            scenes: SceneManager::new(config.scene_path.clone(), config.scene_format),
            audio,
            sound_on_edit: config.sound_on_edit,
            status: None,
        }
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    /// Last save/load message for the user
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Recompute the selection from the camera pose
    pub fn update_selection(&mut self, camera_position: Vec3, camera_forward: Vec3) -> Option<IVec3> {
        let ray = Ray::new(camera_position, camera_forward);
        self.selector.update(&mut self.grid, &ray)
    }

    /// Apply one command to the selected cell. Returns whether the grid changed.
    ///
    /// Failures are logged and never propagate: a bad command must not stop
    /// the frame loop.
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        let target = self.grid.selection();
        match command {
            EditorCommand::AddVoxel => {
                let outcome = self.grid.add_voxel(target);
                self.edit(outcome, Some(AudioCue::Add))
            }
            EditorCommand::RemoveVoxel => {
                let outcome = self.grid.remove_voxel(target);
                self.edit(outcome, Some(AudioCue::Remove))
            }
            EditorCommand::Paint(rgb) => {
                let outcome = self.grid.paint_voxel(target, rgb);
                self.edit(outcome, None)
            }
            EditorCommand::AdjustSpacing(delta) => {
                let before = self.grid.spacing();
                self.grid.set_spacing(delta) != before
            }
            EditorCommand::Save => {
                self.save();
                false
            }
            EditorCommand::Load => self.load(),
        }
    }

    fn edit(&mut self, outcome: Result<bool>, cue: Option<AudioCue>) -> bool {
        match outcome {
            Ok(changed) => {
                if let Some(cue) = cue.filter(|_| changed && self.sound_on_edit) {
                    self.audio.notify(cue);
                }
                changed
            }
            Err(e) => {
                log::error!("Edit rejected: {}", e);
                false
            }
        }
    }

    /// Write the scene file. Returns whether it succeeded.
    pub fn save(&mut self) -> bool {
        let result = self.scenes.save(&self.grid).map(|p| p.display().to_string());
        match result {
            Ok(path) => {
                let message = format!("Saved {} voxels to {}", self.grid.visible_count(), path);
                self.report(message, false);
                true
            }
            Err(e) => {
                self.report(format!("Save failed: {}", e), true);
                false
            }
        }
    }

    /// Replace the grid with the scene file. On any failure the current grid
    /// stays exactly as it was. Returns whether the grid was replaced.
    pub fn load(&mut self) -> bool {
        match self.scenes.load(&self.grid) {
            Ok(grid) => {
                self.grid = grid;
                let message = format!("Loaded {} voxels from {}", self.grid.visible_count(), self.scenes.path().display());
                self.report(message, false);
                true
            }
            Err(e) => {
                self.report(format!("Load failed: {}", e), true);
                false
            }
        }
    }

    fn report(&mut self, message: String, failed: bool) {
        if failed {
            log::error!("{}", message);
        }
        self.status = Some(message);
    }
}
