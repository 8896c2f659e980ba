//! Scene persistence and editor configuration

pub mod config;
pub mod format;
pub mod manager;

pub use config::{EditorConfig, SceneFormat};
pub use manager::SceneManager;
