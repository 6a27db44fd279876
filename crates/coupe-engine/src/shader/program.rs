use std::borrow::Cow;
use std::sync::Arc;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::geometry::Vertex;
use crate::render::BindingLayouts;
use crate::scene::{ProgramId, Topology};

use super::{ShaderError, UniformLayout};

/// Source and uniform layout of one shading model.
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    pub label: String,
    pub source: Cow<'static, str>,
    pub uniforms: Arc<UniformLayout>,
}

/// Attachment formats the pipelines are built for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PipelineTargets {
    pub color: wgpu::TextureFormat,
    pub depth: wgpu::TextureFormat,
}

/// Parses and validates WGSL, and checks the `@group(0) @binding(0)` uniform
/// struct against the host layout size.
///
/// wgpu would otherwise report these problems through its device error
/// callback, long after the program was assumed to exist.
pub fn validate_wgsl(label: &str, source: &str, uniform_size: usize) -> Result<naga::Module, ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
        label: label.to_string(),
        message: e.emit_to_string(source),
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| ShaderError::Validate {
            label: label.to_string(),
            message: e.to_string(),
        })?;

    let uniforms = naga::ResourceBinding { group: 0, binding: 0 };
    let ty = module
        .global_variables
        .iter()
        .find(|(_, var)| var.binding.as_ref() == Some(&uniforms))
        .map(|(_, var)| var.ty)
        .ok_or_else(|| ShaderError::MissingUniforms { label: label.to_string() })?;

    let shader_size = module.types[ty].inner.size(module.to_ctx());
    if shader_size as usize != uniform_size {
        return Err(ShaderError::LayoutMismatch {
            label: label.to_string(),
            shader: shader_size,
            host: uniform_size as u32,
        });
    }

    Ok(module)
}

/// Compiled program: one pipeline per primitive topology plus its uniform layout.
///
/// Fans have no wgpu topology; the renderer expands them into indexed
/// triangle lists drawn with the list pipeline.
pub struct ShaderProgram {
    triangles: wgpu::RenderPipeline,
    strip: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    uniforms: Arc<UniformLayout>,
}

impl ShaderProgram {
    pub fn load(
        device: &wgpu::Device,
        layouts: &BindingLayouts,
        targets: PipelineTargets,
        desc: &ProgramDesc,
    ) -> Result<Self, ShaderError> {
        validate_wgsl(&desc.label, &desc.source, desc.uniforms.size())?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.label.as_str()),
            source: wgpu::ShaderSource::Wgsl(desc.source.clone()),
        });

        let build = |topology: wgpu::PrimitiveTopology, suffix: &str| {
            let label = format!("{} {suffix}", desc.label);
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label.as_str()),
                layout: Some(&layouts.pipeline),

                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: targets.color,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Literal meshes mix windings.
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },

                depth_stencil: Some(wgpu::DepthStencilState {
                    format: targets.depth,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),

                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let triangles = build(wgpu::PrimitiveTopology::TriangleList, "triangles");
        let strip = build(wgpu::PrimitiveTopology::TriangleStrip, "strip");
        let lines = build(wgpu::PrimitiveTopology::LineList, "lines");

        log::debug!("shader program `{}` ready", desc.label);

        Ok(Self {
            triangles,
            strip,
            lines,
            uniforms: desc.uniforms.clone(),
        })
    }

    pub fn pipeline(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::TriangleList | Topology::TriangleFan => &self.triangles,
            Topology::TriangleStrip => &self.strip,
            Topology::LineList => &self.lines,
        }
    }
}

/// Programs by id, in creation order.
#[derive(Default)]
pub struct ProgramStore {
    programs: Vec<ShaderProgram>,
}

impl ProgramStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, program: ShaderProgram) -> ProgramId {
        let id = ProgramId::new(self.programs.len() as u32);
        self.programs.push(program);
        id
    }

    pub fn get(&self, id: ProgramId) -> Option<&ShaderProgram> {
        self.programs.get(id.raw() as usize)
    }

    /// Largest uniform block any program needs; sizes the per-draw binding.
    pub fn max_uniform_size(&self) -> usize {
        self.programs.iter().map(|p| p.uniforms.size()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::UniformKind;

    const SRC: &str = r#"
struct U {
    model: mat4x4<f32>,
    tint: vec4<f32>,
}

@group(0) @binding(0) var<uniform> u: U;

@vertex
fn vs_main(@location(0) pos: vec3<f32>) -> @builtin(position) vec4<f32> {
    return u.model * vec4<f32>(pos, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return u.tint;
}
"#;

    #[test]
    fn valid_source_with_matching_layout_passes() {
        let layout = UniformLayout::new(80)
            .with("model", 0, UniformKind::Mat4)
            .with("tint", 64, UniformKind::Vec4);
        assert!(validate_wgsl("test", SRC, layout.size()).is_ok());
    }

    #[test]
    fn layout_size_mismatch_is_reported() {
        let err = validate_wgsl("test", SRC, 96).unwrap_err();
        assert!(matches!(err, ShaderError::LayoutMismatch { shader: 80, host: 96, .. }));
    }

    #[test]
    fn parse_errors_carry_the_label() {
        let err = validate_wgsl("broken", "fn vs_main( {", 0).unwrap_err();
        assert!(matches!(err, ShaderError::Parse { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn missing_uniform_block_is_reported() {
        let src = "@vertex fn vs_main() -> @builtin(position) vec4<f32> { return vec4<f32>(0.0); }";
        let err = validate_wgsl("bare", src, 16).unwrap_err();
        assert!(matches!(err, ShaderError::MissingUniforms { .. }));
    }
}
