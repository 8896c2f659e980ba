//! Rendering system and GPU interfaces

pub mod buffer;
pub mod context;
pub mod draw_list;
pub mod pipeline;
pub mod renderer;
pub mod window;

pub use draw_list::{CubeInstance, DrawList, RenderPolicy};
pub use renderer::Renderer;
pub use window::WindowConfig;
