use crate::geometry::{VertexCounts, VertexRange};
use crate::shader::UniformBlock;

use super::{MeshId, ProgramId, TextureId};

/// How a vertex range is assembled into primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    TriangleStrip,
    /// First vertex shared by every triangle.
    TriangleFan,
    LineList,
}

/// Texture addressing outside 0..1, applied to both axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WrapMode {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl WrapMode {
    pub fn address_mode(self) -> wgpu::AddressMode {
        match self {
            WrapMode::Repeat => wgpu::AddressMode::Repeat,
            WrapMode::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
            WrapMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
        }
    }
}

/// Diffuse + specular map pair sampled with one wrap mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Material {
    pub diffuse: TextureId,
    pub specular: TextureId,
    pub wrap: WrapMode,
}

impl Material {
    pub const fn new(diffuse: TextureId, specular: TextureId, wrap: WrapMode) -> Self {
        Self { diffuse, specular, wrap }
    }

    pub const fn with_wrap(self, wrap: WrapMode) -> Self {
        Self { wrap, ..self }
    }
}

/// Uploaded mesh as seen by the composer: id plus region counts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MeshInfo {
    pub id: MeshId,
    pub counts: VertexCounts,
}

impl MeshInfo {
    pub const fn total(&self) -> u32 {
        self.counts.total()
    }

    pub const fn all(&self) -> VertexRange {
        self.counts.all()
    }

    pub const fn side(&self) -> VertexRange {
        self.counts.side()
    }

    pub const fn top(&self) -> VertexRange {
        self.counts.top()
    }

    pub const fn bottom(&self) -> VertexRange {
        self.counts.bottom()
    }
}

/// One recorded draw.
#[derive(Debug, Clone)]
pub struct DrawCmd {
    pub program: ProgramId,
    pub mesh: MeshId,
    pub topology: Topology,
    pub range: VertexRange,
    pub material: Material,
    pub uniforms: UniformBlock,
}
