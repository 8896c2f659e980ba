//! GPU uniform buffer for camera and overlay data

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use crate::core::camera::Camera;

/// Crosshair arm length in NDC height units
pub const CROSSHAIR_SIZE: f32 = 0.03;
pub const CROSSHAIR_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Per-frame uniform data (must match `Camera` in voxel.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    /// View-projection matrix (64 bytes, offset 0)
    pub view_proj: [[f32; 4]; 4],
    /// Crosshair color (16 bytes, offset 64)
    pub crosshair_color: [f32; 4],
    /// x = aspect ratio, y = crosshair size, zw unused (16 bytes, offset 80)
    pub params: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            crosshair_color: CROSSHAIR_COLOR.to_array(),
            params: [camera.aspect, CROSSHAIR_SIZE, 0.0, 0.0],
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::from_camera(&Camera::default())
    }
}

/// GPU buffer for camera uniform
pub struct CameraBuffer {
    buffer: wgpu::Buffer,
}

impl CameraBuffer {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniform"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self { buffer }
    }

    /// Upload this frame's camera
    pub fn update(&self, queue: &wgpu::Queue, camera: &Camera) {
        let uniform = CameraUniform::from_camera(camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&uniform));
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        // Must be exactly 96 bytes to match WGSL struct layout
        let size = std::mem::size_of::<CameraUniform>();
        assert_eq!(size, 96, "CameraUniform must be exactly 96 bytes, got {} bytes", size);
    }

    #[test]
    fn test_from_camera() {
        let camera = Camera::default();
        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(uniform.view_proj, camera.view_projection().to_cols_array_2d());
        assert_eq!(uniform.params[0], camera.aspect);
        assert_eq!(uniform.crosshair_color, [1.0, 0.0, 0.0, 1.0]);
    }
}
