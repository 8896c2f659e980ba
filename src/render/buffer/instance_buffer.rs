//! Growable storage buffer of cube instances

use crate::render::draw_list::CubeInstance;

/// Instances reserved up front; the buffer doubles when a frame needs more
const INITIAL_CAPACITY: usize = 1024;

pub struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
}

impl InstanceBuffer {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            buffer: Self::allocate(device, INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    fn allocate(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube_instances"),
            size: (capacity * std::mem::size_of::<CubeInstance>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Write `instances`, reallocating first if they do not fit.
    ///
    /// Returns true when the buffer was replaced and bind groups referencing
    /// it must be rebuilt.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, instances: &[CubeInstance]) -> bool {
        let grown = instances.len() > self.capacity;
        if grown {
            self.capacity = grown_capacity(self.capacity, instances.len());
            self.buffer = Self::allocate(device, self.capacity);
            log::debug!("Instance buffer grown to {} cubes", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
        grown
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}
