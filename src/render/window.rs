//! Window setup and cursor capture

use winit::{
    dpi::PhysicalSize,
    window::{CursorGrabMode, Window, WindowAttributes},
};

use crate::core::error::Error;
use crate::scene::EditorConfig;

/// Window configuration
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for WindowConfig {
    fn from(config: &EditorConfig) -> Self {
        Self {
            title: config.window_title.clone(),
            width: config.window_size[0].max(1),
            height: config.window_size[1].max(1),
        }
    }
}

impl WindowConfig {
    pub fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(self.width, self.height))
    }
}

/// Confine (or lock, where confining is unsupported) and hide the cursor, or
/// release it.
pub fn set_cursor_grab(window: &Window, grab: bool) -> Result<(), Error> {
    if grab {
        window.set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
            .map_err(|e| Error::Window(format!("Cursor grab failed: {}", e)))?;
    } else {
        window.set_cursor_grab(CursorGrabMode::None)
            .map_err(|e| Error::Window(format!("Cursor release failed: {}", e)))?;
    }
    window.set_cursor_visible(!grab);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_editor_config() {
        let config = EditorConfig {
            window_title: "Scene".to_string(),
            window_size: [1024, 0],
            ..Default::default()
        };
        let window = WindowConfig::from(&config);
        assert_eq!(window.title, "Scene");
        assert_eq!((window.width, window.height), (1024, 1));
    }

    #[test]
    fn test_default_matches_editor_defaults() {
        let window = WindowConfig::default();
        assert_eq!((window.width, window.height), (800, 600));
        assert_eq!(window.title, "Voxel Scene Editor");
    }
}
