//! Sound cues for editing actions
//!
//! The editor only ever says *what* happened; sinks decide how (or whether)
//! to play it. Notifying must never block the frame loop.

#[cfg(feature = "audio")]
pub mod kira_backend;

#[cfg(feature = "audio")]
pub use kira_backend::KiraAudio;

/// Something the user did that has a sound
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Add,
    Remove,
}

impl AudioCue {
    pub const ALL: [AudioCue; 2] = [AudioCue::Add, AudioCue::Remove];

    /// Symbolic name, also the sound file stem
    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Add => "add",
            AudioCue::Remove => "remove",
        }
    }
}

/// Fire-and-forget receiver of cues
pub trait AudioSink {
    fn notify(&mut self, cue: AudioCue);
}

/// Discards every cue
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn notify(&mut self, cue: AudioCue) {
        log::trace!("Audio cue '{}' (muted)", cue.name());
    }
}

/// Keeps every cue it receives, in order
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub cues: Vec<AudioCue>,
}

impl AudioSink for RecordingAudio {
    fn notify(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn notify(&mut self, cue: AudioCue) {
        (**self).notify(cue);
    }
}

/// Best available sink: kira when the `audio` feature is on and a device
/// opens, otherwise silence.
pub fn default_sink(sound_dir: &std::path::Path) -> Box<dyn AudioSink> {
    #[cfg(feature = "audio")]
    {
        match KiraAudio::new(sound_dir) {
            Ok(audio) => return Box::new(audio),
            Err(e) => log::warn!("Sound disabled: {}", e),
        }
    }
    #[cfg(not(feature = "audio"))]
    {
        log::info!("Built without the `audio` feature; cues from {} stay silent", sound_dir.display());
    }

    Box::new(NullAudio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(AudioCue::Add.name(), "add");
        assert_eq!(AudioCue::Remove.name(), "remove");
    }

    #[test]
    fn test_recording_through_box() {
        let mut sink: Box<RecordingAudio> = Box::default();
        sink.notify(AudioCue::Remove);
        sink.notify(AudioCue::Add);
        assert_eq!(sink.cues, vec![AudioCue::Remove, AudioCue::Add]);
    }
}
