use glam::{Mat3, Mat4};

use crate::geometry::VertexRange;
use crate::shader::UniformBlock;

use super::{DrawCmd, Material, MeshInfo, ProgramId, Topology};

/// Recorded draw stream for a frame, replayed in insertion order.
///
/// Commands are only added through the builder chain:
///
/// ```ignore
/// let mut scope = list.bind_program(lit, base_uniforms);
/// scope
///     .mesh(cube)
///     .material(paint)
///     .transform(model)
///     .draw(Topology::TriangleList, cube.all());
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Starts recording for `program`. `base` holds the per-pass uniforms
    /// (camera, lights) every draw in the scope starts from.
    pub fn bind_program(&mut self, program: ProgramId, base: UniformBlock) -> ProgramScope<'_> {
        ProgramScope { list: self, program, base }
    }
}

/// Draws recorded against one program.
pub struct ProgramScope<'l> {
    list: &'l mut DrawList,
    program: ProgramId,
    base: UniformBlock,
}

impl<'l> ProgramScope<'l> {
    pub fn program(&self) -> ProgramId {
        self.program
    }

    /// Per-pass uniforms shared by later draws in this scope.
    pub fn base_mut(&mut self) -> &mut UniformBlock {
        &mut self.base
    }

    pub fn mesh(&mut self, mesh: MeshInfo) -> MeshScope<'_, 'l> {
        MeshScope { scope: self, mesh }
    }
}

/// A bound mesh still waiting for its material.
pub struct MeshScope<'s, 'l> {
    scope: &'s mut ProgramScope<'l>,
    mesh: MeshInfo,
}

impl<'s, 'l> MeshScope<'s, 'l> {
    pub fn material(self, material: Material) -> DrawBuilder<'s, 'l> {
        let uniforms = self.scope.base.clone();
        DrawBuilder { scope: self.scope, mesh: self.mesh, material, uniforms }
    }
}

/// Mesh + material bound; per-instance uniforms can be set and draws issued.
///
/// Each `draw` snapshots the current uniforms, so several ranges of one
/// instance share a transform.
pub struct DrawBuilder<'s, 'l> {
    scope: &'s mut ProgramScope<'l>,
    mesh: MeshInfo,
    material: Material,
    uniforms: UniformBlock,
}

impl<'s, 'l> DrawBuilder<'s, 'l> {
    /// Sets `model` and the matching `normal_matrix` (inverse-transpose).
    pub fn transform(mut self, model: Mat4) -> Self {
        self.uniforms.set_mat4("model", model);
        self.uniforms.set_mat3("normal_matrix", Mat3::from_mat4(model).inverse().transpose());
        self
    }

    pub fn uniforms(mut self, f: impl FnOnce(&mut UniformBlock)) -> Self {
        f(&mut self.uniforms);
        self
    }

    pub fn mesh(&self) -> MeshInfo {
        self.mesh
    }

    pub fn draw(&mut self, topology: Topology, range: VertexRange) -> &mut Self {
        debug_assert!(
            range.end() <= self.mesh.total(),
            "range {range:?} exceeds mesh of {} vertices",
            self.mesh.total()
        );
        self.scope.list.items.push(DrawCmd {
            program: self.scope.program,
            mesh: self.mesh.id,
            topology,
            range,
            material: self.material,
            uniforms: self.uniforms.clone(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use super::*;
    use crate::geometry::VertexCounts;
    use crate::scene::{MeshId, TextureId, WrapMode};
    use crate::shader::{UniformKind, UniformLayout};

    fn block() -> UniformBlock {
        UniformBlock::new(Arc::new(
            UniformLayout::new(128)
                .with("model", 0, UniformKind::Mat4)
                .with("shininess", 64, UniformKind::Float),
        ))
    }

    fn mesh() -> MeshInfo {
        MeshInfo {
            id: MeshId::new(3),
            counts: VertexCounts { side: 10, top: 6, bottom: 6 },
        }
    }

    fn material() -> Material {
        Material::new(TextureId::new(0), TextureId::new(1), WrapMode::Repeat)
    }

    fn f32_at(block: &UniformBlock, offset: usize) -> f32 {
        bytemuck::pod_read_unaligned(&block.as_bytes()[offset..offset + 4])
    }

    #[test]
    fn draws_are_recorded_in_order() {
        let mut list = DrawList::new();
        let m = mesh();
        {
            let mut scope = list.bind_program(ProgramId::new(1), block());
            scope
                .mesh(m)
                .material(material())
                .draw(Topology::TriangleStrip, m.side())
                .draw(Topology::TriangleFan, m.top())
                .draw(Topology::TriangleFan, m.bottom());
        }

        let items = list.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].topology, Topology::TriangleStrip);
        assert_eq!(items[1].range, VertexRange::new(10, 6));
        assert_eq!(items[2].range, VertexRange::new(16, 6));
        assert!(items.iter().all(|c| c.program == ProgramId::new(1) && c.mesh == MeshId::new(3)));
    }

    #[test]
    fn base_uniforms_flow_into_each_draw() {
        let mut list = DrawList::new();
        let mut base = block();
        base.set_float("shininess", 9.99);
        {
            let mut scope = list.bind_program(ProgramId::new(0), base);
            scope
                .mesh(mesh())
                .material(material())
                .transform(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)))
                .draw(Topology::TriangleList, mesh().all());
            scope
                .mesh(mesh())
                .material(material())
                .uniforms(|u| u.set_float("shininess", 256.0))
                .draw(Topology::TriangleList, mesh().all());
        }

        let items = list.items();
        assert_eq!(f32_at(&items[0].uniforms, 64), 9.99);
        // Column 3 of the model matrix holds the translation.
        assert_eq!(f32_at(&items[0].uniforms, 48), 1.0);
        assert_eq!(f32_at(&items[1].uniforms, 64), 256.0);
        assert_eq!(f32_at(&items[1].uniforms, 48), 0.0);
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut list = DrawList::new();
        list.bind_program(ProgramId::new(0), block())
            .mesh(mesh())
            .material(material())
            .draw(Topology::LineList, mesh().side());
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
