//! Frame rendering for the editor

use std::sync::Arc;
use winit::window::Window;

use crate::core::camera::Camera;
use crate::core::error::Error;
use crate::voxel::VoxelGrid;
use super::context::GpuContext;
use super::draw_list::{DrawList, RenderPolicy};
use super::pipeline::VoxelPipeline;

/// GPU context plus the voxel pipeline
pub struct Renderer {
    gpu: GpuContext,
    pipeline: VoxelPipeline,
    policy: RenderPolicy,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, policy: RenderPolicy) -> Result<Self, Error> {
        let gpu = GpuContext::new(window).await?;
        let pipeline = VoxelPipeline::new(&gpu.device, gpu.format());
        log::info!("GPU: {} ({:?})", gpu.adapter.get_info().name, gpu.format());
        Ok(Self { gpu, pipeline, policy })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        self.gpu.size()
    }

    /// Draw the grid as seen from `camera`.
    ///
    /// When no surface texture can be acquired the surface is reconfigured,
    /// the frame skipped and the error returned for logging.
    pub fn render(&mut self, camera: &Camera, grid: &VoxelGrid) -> Result<(), Error> {
        let output = match self.gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(e) => {
                self.gpu.reconfigure();
                return Err(e);
            }
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let list = DrawList::build(grid, camera.position, &self.policy);
        self.pipeline.prepare(&self.gpu.device, &self.gpu.queue, camera, &list);

        let mut encoder = self.gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });
        self.pipeline.render(&mut encoder, &view);
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
