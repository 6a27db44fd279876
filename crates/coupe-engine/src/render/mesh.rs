use wgpu::util::DeviceExt;

use crate::geometry::{MeshData, VertexCounts};
use crate::scene::{MeshId, MeshInfo};

/// One immutable vertex buffer plus its region counts.
pub struct Mesh {
    label: String,
    buffer: Option<wgpu::Buffer>,
    counts: VertexCounts,
}

impl Mesh {
    pub fn upload(device: &wgpu::Device, data: &MeshData, label: &str) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("mesh `{label}`: {} vertices", data.len());

        Self {
            label: label.to_string(),
            buffer: Some(buffer),
            counts: data.counts,
        }
    }

    /// `None` once destroyed.
    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }

    pub fn counts(&self) -> VertexCounts {
        self.counts
    }

    /// Releases the GPU buffer. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            buffer.destroy();
            log::debug!("mesh `{}` released", self.label);
        }
    }
}

/// Meshes by id, in upload order.
#[derive(Default)]
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mesh: Mesh) -> MeshInfo {
        let info = MeshInfo {
            id: MeshId::new(self.meshes.len() as u32),
            counts: mesh.counts(),
        };
        self.meshes.push(mesh);
        info
    }

    pub fn get(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.raw() as usize)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn destroy_all(&mut self) {
        for mesh in &mut self.meshes {
            mesh.destroy();
        }
    }
}
