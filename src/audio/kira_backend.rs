//! kira playback of cue sounds

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kira::manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings};
use kira::sound::static_sound::StaticSoundData;

use crate::core::error::Error;
use crate::core::types::Result;
use super::{AudioCue, AudioSink};

/// Extensions tried, in order, for each cue's file
const EXTENSIONS: [&str; 4] = ["wav", "ogg", "mp3", "flac"];

/// Plays one preloaded sound per cue on kira's audio thread
pub struct KiraAudio {
    manager: AudioManager<DefaultBackend>,
    sounds: HashMap<AudioCue, StaticSoundData>,
}

impl KiraAudio {
    /// Open the default output device and load `<cue name>.<ext>` files from
    /// `sound_dir`. A cue without a file stays silent.
    pub fn new(sound_dir: &Path) -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| Error::Audio(format!("failed to open output device: {:?}", e)))?;

        let mut sounds = HashMap::new();
        for cue in AudioCue::ALL {
            let Some(path) = find_sound(sound_dir, cue) else {
                log::warn!("No sound file for '{}' in {}", cue.name(), sound_dir.display());
                continue;
            };
            match StaticSoundData::from_file(&path) {
                Ok(data) => {
                    log::debug!("Loaded '{}' cue from {}", cue.name(), path.display());
                    sounds.insert(cue, data);
                }
                Err(e) => log::warn!("Failed to decode {}: {:?}", path.display(), e),
            }
        }

        Ok(Self { manager, sounds })
    }
}

fn find_sound(dir: &Path, cue: AudioCue) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", cue.name(), ext)))
        .find(|p| p.is_file())
}

impl AudioSink for KiraAudio {
    fn notify(&mut self, cue: AudioCue) {
        let Some(data) = self.sounds.get(&cue) else {
            return;
        };
        // StaticSoundData clones share the decoded frames
        if let Err(e) = self.manager.play(data.clone()) {
            log::warn!("Failed to play '{}': {:?}", cue.name(), e);
        }
    }
}
