//! The two shading models and their host-side uniform layouts.
//!
//! The `#[repr(C)]` structs mirror the WGSL structs byte for byte; offsets
//! for the name table come from them, and `validate_wgsl` checks the total
//! size against the shader at startup.

use std::borrow::Cow;
use std::mem::{offset_of, size_of};
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use coupe_engine::render::BindingLayouts;
use coupe_engine::scene::ProgramId;
use coupe_engine::shader::{
    PipelineTargets, ProgramDesc, ProgramStore, ShaderError, ShaderProgram, UniformBlock, UniformKind,
    UniformLayout,
};

pub const LIT_WGSL: &str = include_str!("shaders/lit.wgsl");
pub const BASIC_WGSL: &str = include_str!("shaders/basic.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct DirLightRaw {
    pub direction: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub _pad3: f32,
}

/// Attenuation terms ride in the padding slot after each vec3.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 3],
    pub constant_att: f32,
    pub ambient: [f32; 3],
    pub linear_att: f32,
    pub diffuse: [f32; 3],
    pub quadratic_att: f32,
    pub specular: [f32; 3],
    pub _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LitUniforms {
    pub model: [[f32; 4]; 4],
    /// mat3x3 columns padded to 16 bytes.
    pub normal_matrix: [[f32; 4]; 3],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_pos: [f32; 3],
    pub shininess: f32,
    pub uv_scale: [f32; 2],
    pub _pad: [f32; 2],
    pub dir_light: DirLightRaw,
    pub point_light: PointLightRaw,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct BasicUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub uv_scale: [f32; 2],
    pub _pad: [f32; 2],
    pub tint: [f32; 4],
}

pub fn lit_layout() -> UniformLayout {
    let dir = offset_of!(LitUniforms, dir_light);
    let point = offset_of!(LitUniforms, point_light);

    UniformLayout::new(size_of::<LitUniforms>())
        .with("model", offset_of!(LitUniforms, model), UniformKind::Mat4)
        .with("normal_matrix", offset_of!(LitUniforms, normal_matrix), UniformKind::Mat3)
        .with("view", offset_of!(LitUniforms, view), UniformKind::Mat4)
        .with("projection", offset_of!(LitUniforms, projection), UniformKind::Mat4)
        .with("view_pos", offset_of!(LitUniforms, view_pos), UniformKind::Vec3)
        .with("shininess", offset_of!(LitUniforms, shininess), UniformKind::Float)
        .with("uv_scale", offset_of!(LitUniforms, uv_scale), UniformKind::Vec2)
        .with("dir_light.direction", dir + offset_of!(DirLightRaw, direction), UniformKind::Vec3)
        .with("dir_light.ambient", dir + offset_of!(DirLightRaw, ambient), UniformKind::Vec3)
        .with("dir_light.diffuse", dir + offset_of!(DirLightRaw, diffuse), UniformKind::Vec3)
        .with("dir_light.specular", dir + offset_of!(DirLightRaw, specular), UniformKind::Vec3)
        .with("point_light.position", point + offset_of!(PointLightRaw, position), UniformKind::Vec3)
        .with("point_light.constant_att", point + offset_of!(PointLightRaw, constant_att), UniformKind::Float)
        .with("point_light.ambient", point + offset_of!(PointLightRaw, ambient), UniformKind::Vec3)
        .with("point_light.linear_att", point + offset_of!(PointLightRaw, linear_att), UniformKind::Float)
        .with("point_light.diffuse", point + offset_of!(PointLightRaw, diffuse), UniformKind::Vec3)
        .with("point_light.quadratic_att", point + offset_of!(PointLightRaw, quadratic_att), UniformKind::Float)
        .with("point_light.specular", point + offset_of!(PointLightRaw, specular), UniformKind::Vec3)
}

pub fn basic_layout() -> UniformLayout {
    UniformLayout::new(size_of::<BasicUniforms>())
        .with("model", offset_of!(BasicUniforms, model), UniformKind::Mat4)
        .with("view", offset_of!(BasicUniforms, view), UniformKind::Mat4)
        .with("projection", offset_of!(BasicUniforms, projection), UniformKind::Mat4)
        .with("uv_scale", offset_of!(BasicUniforms, uv_scale), UniformKind::Vec2)
        .with("tint", offset_of!(BasicUniforms, tint), UniformKind::Vec4)
}

/// A program id paired with the layout its uniform blocks are built from.
#[derive(Debug, Clone)]
pub struct ProgramHandle {
    pub id: ProgramId,
    pub uniforms: Arc<UniformLayout>,
}

impl ProgramHandle {
    /// Fresh zeroed uniform block for this program.
    pub fn block(&self) -> UniformBlock {
        UniformBlock::new(self.uniforms.clone())
    }
}

/// Lit and basic programs as the scene composer sees them.
#[derive(Debug, Clone)]
pub struct ProgramSet {
    pub lit: ProgramHandle,
    pub basic: ProgramHandle,
}

impl ProgramSet {
    /// Handles over already-registered ids. Layouts are built here.
    pub fn new(lit: ProgramId, basic: ProgramId) -> Self {
        Self {
            lit: ProgramHandle { id: lit, uniforms: Arc::new(lit_layout()) },
            basic: ProgramHandle { id: basic, uniforms: Arc::new(basic_layout()) },
        }
    }

    /// Compiles both programs into `store`. Any shader error aborts startup.
    pub fn load(
        device: &wgpu::Device,
        layouts: &BindingLayouts,
        targets: PipelineTargets,
        store: &mut ProgramStore,
    ) -> Result<Self, ShaderError> {
        let mut set = Self::new(ProgramId::new(0), ProgramId::new(0));

        let lit = ProgramDesc {
            label: "lit".to_string(),
            source: Cow::Borrowed(LIT_WGSL),
            uniforms: set.lit.uniforms.clone(),
        };
        set.lit.id = store.insert(ShaderProgram::load(device, layouts, targets, &lit)?);

        let basic = ProgramDesc {
            label: "basic".to_string(),
            source: Cow::Borrowed(BASIC_WGSL),
            uniforms: set.basic.uniforms.clone(),
        };
        set.basic.id = store.insert(ShaderProgram::load(device, layouts, targets, &basic)?);

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use coupe_engine::shader::validate_wgsl;

    use super::*;

    #[test]
    fn host_structs_match_wgsl_sizes() {
        assert_eq!(size_of::<DirLightRaw>(), 64);
        assert_eq!(size_of::<PointLightRaw>(), 64);
        assert_eq!(size_of::<LitUniforms>(), 400);
        assert_eq!(size_of::<BasicUniforms>(), 224);
    }

    #[test]
    fn lit_shader_validates_against_its_layout() {
        let layout = lit_layout();
        validate_wgsl("lit", LIT_WGSL, layout.size()).unwrap();
    }

    #[test]
    fn basic_shader_validates_against_its_layout() {
        let layout = basic_layout();
        validate_wgsl("basic", BASIC_WGSL, layout.size()).unwrap();
    }

    #[test]
    fn nested_light_members_sit_inside_their_struct() {
        let layout = lit_layout();
        assert_eq!(layout.slot("dir_light.direction").unwrap().offset, 272);
        assert_eq!(layout.slot("point_light.position").unwrap().offset, 336);
        assert_eq!(layout.slot("point_light.constant_att").unwrap().offset, 348);
        assert_eq!(layout.slot("point_light.specular").unwrap().offset, 384);
        assert_eq!(layout.slot("uv_scale").unwrap().offset, 256);
    }

    #[test]
    fn basic_layout_has_no_normal_matrix() {
        assert!(basic_layout().slot("normal_matrix").is_none());
        assert_eq!(basic_layout().slot("tint").unwrap().offset, 208);
    }
}
