//! Instanced cube pipelines: filled voxels, selection outline, crosshair

use crate::core::camera::Camera;
use crate::render::buffer::{CameraBuffer, InstanceBuffer};
use crate::render::draw_list::DrawList;

/// Sky color behind the grid
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color { r: 0.5, g: 0.7, b: 1.0, a: 1.0 };

const FILL_VERTICES: u32 = 36;
const EDGE_VERTICES: u32 = 24;
const CROSSHAIR_VERTICES: u32 = 4;

/// Draws a [`DrawList`] and the crosshair straight to the surface
pub struct VoxelPipeline {
    fill: wgpu::RenderPipeline,
    edges: wgpu::RenderPipeline,
    crosshair: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    camera: CameraBuffer,
    instances: InstanceBuffer,
    fill_count: u32,
    outline_count: u32,
}

impl VoxelPipeline {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("voxel_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../../shaders/voxel.wgsl").into()),
        });

        // Camera uniform + instance storage
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("voxel_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("voxel_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let create = |label: &str, entry_point: &str, topology: wgpu::PrimitiveTopology, cull_mode: Option<wgpu::Face>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(entry_point),
                    buffers: &[], // Geometry comes from vertex/instance index
                    compilation_options: Default::default(),
                },
                primitive: wgpu::PrimitiveState {
                    topology,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                multiview_mask: None,
                cache: None,
            })
        };

        let fill = create("voxel_fill_pipeline", "vs_fill", wgpu::PrimitiveTopology::TriangleList, Some(wgpu::Face::Back));
        let edges = create("voxel_edge_pipeline", "vs_edges", wgpu::PrimitiveTopology::LineList, None);
        let crosshair = create("crosshair_pipeline", "vs_crosshair", wgpu::PrimitiveTopology::LineList, None);

        let camera = CameraBuffer::new(device);
        let instances = InstanceBuffer::new(device);
        let bind_group = Self::create_bind_group(device, &bind_group_layout, &camera, &instances);

        Self {
            fill,
            edges,
            crosshair,
            bind_group_layout,
            bind_group,
            camera,
            instances,
            fill_count: 0,
            outline_count: 0,
        }
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        camera: &CameraBuffer,
        instances: &InstanceBuffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("voxel_bind_group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera.buffer().as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: instances.buffer().as_entire_binding(),
                },
            ],
        })
    }

    /// Upload the camera and this frame's instances
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, camera: &Camera, list: &DrawList) {
        self.camera.update(queue, camera);
        if self.instances.upload(device, queue, &list.instances()) {
            self.bind_group = Self::create_bind_group(device, &self.bind_group_layout, &self.camera, &self.instances);
        }
        self.fill_count = list.fills.len() as u32;
        self.outline_count = list.outlines.len() as u32;
    }

    /// Clear the target and draw cubes, outlines, then the crosshair
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("voxel_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pass.set_bind_group(0, &self.bind_group, &[]);

        if self.fill_count > 0 {
            pass.set_pipeline(&self.fill);
            pass.draw(0..FILL_VERTICES, 0..self.fill_count);
        }
        if self.outline_count > 0 {
            // Outlines follow the fills in the instance buffer
            pass.set_pipeline(&self.edges);
            pass.draw(0..EDGE_VERTICES, self.fill_count..self.fill_count + self.outline_count);
        }

        pass.set_pipeline(&self.crosshair);
        pass.draw(0..CROSSHAIR_VERTICES, 0..1);
    }
}
