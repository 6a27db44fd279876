use std::collections::HashMap;
use std::sync::Arc;

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Host-side shape of a uniform member.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UniformKind {
    /// WGSL has no host-shareable `bool`; stored as `u32`.
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    /// Three columns, each padded to 16 bytes.
    Mat3,
    Mat4,
}

impl UniformKind {
    pub const fn size(self) -> usize {
        match self {
            UniformKind::Bool | UniformKind::Int | UniformKind::Float => 4,
            UniformKind::Vec2 => 8,
            UniformKind::Vec3 => 12,
            UniformKind::Vec4 | UniformKind::Mat2 => 16,
            UniformKind::Mat3 => 48,
            UniformKind::Mat4 => 64,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformSlot {
    pub offset: usize,
    pub kind: UniformKind,
}

/// Name → slot table for one program's uniform struct, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct UniformLayout {
    size: usize,
    slots: HashMap<String, UniformSlot>,
}

impl UniformLayout {
    /// `size` is the full struct size including trailing padding.
    pub fn new(size: usize) -> Self {
        Self { size, slots: HashMap::new() }
    }

    /// Adds a member. A member that does not fit inside the struct is
    /// rejected with an error log and never written.
    pub fn with(mut self, name: impl Into<String>, offset: usize, kind: UniformKind) -> Self {
        let name = name.into();
        let fits = offset.checked_add(kind.size()).is_some_and(|end| end <= self.size);
        if !fits {
            log::error!("uniform `{name}` at {offset} overflows a {}-byte block; dropped", self.size);
            return self;
        }
        self.slots.insert(name, UniformSlot { offset, kind });
        self
    }

    pub fn slot(&self, name: &str) -> Option<UniformSlot> {
        self.slots.get(name).copied()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// CPU copy of one uniform struct, written by name through a shared layout.
///
/// Unknown names are ignored. Writing a member with the wrong kind is ignored
/// too; both cases log so typos show up with `RUST_LOG=trace`.
#[derive(Debug, Clone)]
pub struct UniformBlock {
    layout: Arc<UniformLayout>,
    bytes: Vec<u8>,
}

impl UniformBlock {
    /// Zero-filled block.
    pub fn new(layout: Arc<UniformLayout>) -> Self {
        let bytes = vec![0; layout.size()];
        Self { layout, bytes }
    }

    pub fn layout(&self) -> &Arc<UniformLayout> {
        &self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn set_bool(&mut self, name: &str, v: bool) {
        self.write(name, UniformKind::Bool, bytemuck::bytes_of(&u32::from(v)));
    }

    pub fn set_int(&mut self, name: &str, v: i32) {
        self.write(name, UniformKind::Int, bytemuck::bytes_of(&v));
    }

    pub fn set_float(&mut self, name: &str, v: f32) {
        self.write(name, UniformKind::Float, bytemuck::bytes_of(&v));
    }

    pub fn set_vec2(&mut self, name: &str, v: Vec2) {
        self.write(name, UniformKind::Vec2, bytemuck::bytes_of(&v.to_array()));
    }

    pub fn set_vec3(&mut self, name: &str, v: Vec3) {
        self.write(name, UniformKind::Vec3, bytemuck::bytes_of(&v.to_array()));
    }

    pub fn set_vec4(&mut self, name: &str, v: Vec4) {
        self.write(name, UniformKind::Vec4, bytemuck::bytes_of(&v.to_array()));
    }

    pub fn set_mat2(&mut self, name: &str, m: Mat2) {
        self.write(name, UniformKind::Mat2, bytemuck::bytes_of(&m.to_cols_array()));
    }

    pub fn set_mat3(&mut self, name: &str, m: Mat3) {
        let padded = [m.x_axis, m.y_axis, m.z_axis].map(|c| c.extend(0.0).to_array());
        self.write(name, UniformKind::Mat3, bytemuck::bytes_of(&padded));
    }

    pub fn set_mat4(&mut self, name: &str, m: Mat4) {
        self.write(name, UniformKind::Mat4, bytemuck::bytes_of(&m.to_cols_array()));
    }

    fn write(&mut self, name: &str, kind: UniformKind, data: &[u8]) {
        let Some(slot) = self.layout.slot(name) else {
            log::trace!("uniform `{name}` not in layout; ignored");
            return;
        };
        if slot.kind != kind {
            log::debug!("uniform `{name}` is {:?}, got {kind:?}; ignored", slot.kind);
            return;
        }
        if let Some(dst) = self.bytes.get_mut(slot.offset..slot.offset + data.len()) {
            dst.copy_from_slice(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Arc<UniformLayout> {
        Arc::new(
            UniformLayout::new(128)
                .with("model", 0, UniformKind::Mat4)
                .with("normal_matrix", 64, UniformKind::Mat3)
                .with("shininess", 112, UniformKind::Float)
                .with("lit", 116, UniformKind::Bool)
                .with("uv_scale", 120, UniformKind::Vec2),
        )
    }

    fn f32_at(block: &UniformBlock, offset: usize) -> f32 {
        bytemuck::pod_read_unaligned(&block.as_bytes()[offset..offset + 4])
    }

    #[test]
    fn setters_write_at_cached_offsets() {
        let mut block = UniformBlock::new(layout());
        block.set_float("shininess", 32.0);
        block.set_vec2("uv_scale", Vec2::new(3.0, 6.0));
        block.set_bool("lit", true);

        assert_eq!(f32_at(&block, 112), 32.0);
        assert_eq!(f32_at(&block, 120), 3.0);
        assert_eq!(f32_at(&block, 124), 6.0);
        assert_eq!(bytemuck::pod_read_unaligned::<u32>(&block.as_bytes()[116..120]), 1);
    }

    #[test]
    fn mat3_columns_are_padded() {
        let mut block = UniformBlock::new(layout());
        block.set_mat3("normal_matrix", Mat3::from_cols(Vec3::X, Vec3::Y * 2.0, Vec3::Z * 3.0));

        assert_eq!(f32_at(&block, 64), 1.0);
        assert_eq!(f32_at(&block, 64 + 16 + 4), 2.0);
        assert_eq!(f32_at(&block, 64 + 32 + 8), 3.0);
        assert_eq!(f32_at(&block, 64 + 12), 0.0);
    }

    #[test]
    fn unknown_names_and_wrong_kinds_are_ignored() {
        let mut block = UniformBlock::new(layout());
        block.set_float("material.shininess", 8.0);
        block.set_vec3("shininess", Vec3::ONE);
        block.set_int("uv_scale", 7);

        assert!(block.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn block_size_matches_layout() {
        let block = UniformBlock::new(layout());
        assert_eq!(block.as_bytes().len(), 128);
        assert_eq!(block.layout().len(), 5);
    }

    #[test]
    fn overflowing_members_are_dropped() {
        let layout = Arc::new(
            UniformLayout::new(64)
                .with("model", 0, UniformKind::Mat4)
                .with("tint", 56, UniformKind::Vec4)
                .with("far", usize::MAX, UniformKind::Float),
        );
        assert_eq!(layout.len(), 1);
        assert!(layout.slot("tint").is_none());

        let mut block = UniformBlock::new(layout);
        block.set_vec4("tint", Vec4::ONE);
        block.set_float("far", 1.0);
        assert!(block.as_bytes().iter().all(|&b| b == 0));
    }
}
