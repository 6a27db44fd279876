use std::collections::HashMap;
use std::num::NonZeroU64;
use std::ops::Range;

use crate::geometry::VertexRange;
use crate::scene::{DrawList, Material, Topology};
use crate::shader::ProgramStore;

use super::{BindingLayouts, MeshStore, RenderCtx, RenderTarget, TextureStore};

/// Everything a draw list refers to by id.
pub struct SceneResources<'a> {
    pub layouts: &'a BindingLayouts,
    pub programs: &'a ProgramStore,
    pub meshes: &'a MeshStore,
    pub textures: &'a TextureStore,
}

/// Appends triangle-list indices for a fan over `range`.
///
/// Indices are absolute vertex indices; fewer than three vertices add nothing.
pub fn fan_indices(range: VertexRange, out: &mut Vec<u32>) {
    let first = range.first;
    for i in 1..range.count.saturating_sub(1) {
        out.extend_from_slice(&[first, first + i, first + i + 1]);
    }
}

/// Replays a `DrawList` into a single depth-tested render pass.
///
/// Per frame, every draw's uniform block is packed into one buffer at an
/// aligned stride and bound with a dynamic offset. Fans are expanded into an
/// index buffer. Material bind groups are cached across frames.
#[derive(Default)]
pub struct SceneRenderer {
    uniform_buffer: Option<wgpu::Buffer>,
    uniform_capacity: u64,
    uniform_binding_size: u64,
    uniform_bind_group: Option<wgpu::BindGroup>,
    uniform_staging: Vec<u8>,

    index_buffer: Option<wgpu::Buffer>,
    index_capacity: u64,
    indices: Vec<u32>,
    fan_ranges: Vec<Option<Range<u32>>>,

    material_groups: HashMap<Material, wgpu::BindGroup>,

    warned_missing: bool,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        res: &SceneResources<'_>,
        list: &DrawList,
    ) {
        if list.is_empty() {
            return;
        }

        let stride = self.write_uniforms(ctx, res, list);
        self.write_fan_indices(ctx, list);
        self.ensure_material_groups(ctx, res, list);

        // Mutations done; take immutable borrows.
        let Some(uniform_group) = self.uniform_bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("coupe scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if let Some(index_buffer) = self.index_buffer.as_ref() {
            rpass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        }

        for (i, cmd) in list.items().iter().enumerate() {
            let program = res.programs.get(cmd.program);
            let buffer = res.meshes.get(cmd.mesh).and_then(|m| m.buffer());
            let material = self.material_groups.get(&cmd.material);

            let (Some(program), Some(buffer), Some(material)) = (program, buffer, material) else {
                if !self.warned_missing {
                    log::warn!(
                        "SceneRenderer: draw {i} references a missing program, mesh or texture; skipped"
                    );
                    self.warned_missing = true;
                }
                continue;
            };

            let offset = (i as u64 * stride) as u32;
            rpass.set_pipeline(program.pipeline(cmd.topology));
            rpass.set_bind_group(0, uniform_group, &[offset]);
            rpass.set_bind_group(1, material, &[]);
            rpass.set_vertex_buffer(0, buffer.slice(..));

            match (&cmd.topology, self.fan_ranges.get(i).cloned().flatten()) {
                (Topology::TriangleFan, Some(indices)) => rpass.draw_indexed(indices, 0, 0..1),
                (Topology::TriangleFan, None) => {}
                _ => rpass.draw(cmd.range.first..cmd.range.end(), 0..1),
            }
        }
    }

    /// Packs every draw's uniform block and uploads them. Returns the stride.
    fn write_uniforms(&mut self, ctx: &RenderCtx<'_>, res: &SceneResources<'_>, list: &DrawList) -> u64 {
        let align = u64::from(ctx.device.limits().min_uniform_buffer_offset_alignment);
        let largest = list
            .items()
            .iter()
            .map(|c| c.uniforms.as_bytes().len())
            .chain(std::iter::once(res.programs.max_uniform_size()))
            .max()
            .unwrap_or(0) as u64;
        let binding_size = align_up(largest.max(16), 16);
        let stride = align_up(binding_size, align);

        self.uniform_staging.clear();
        self.uniform_staging.resize((stride * list.len() as u64) as usize, 0);
        for (i, cmd) in list.items().iter().enumerate() {
            let start = i * stride as usize;
            let bytes = cmd.uniforms.as_bytes();
            self.uniform_staging[start..start + bytes.len()].copy_from_slice(bytes);
        }

        let needed = self.uniform_staging.len() as u64;
        if self.uniform_buffer.is_none()
            || needed > self.uniform_capacity
            || binding_size != self.uniform_binding_size
        {
            let capacity = needed.next_power_of_two().max(stride);
            let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("coupe draw uniforms"),
                size: capacity,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            self.uniform_bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("coupe draw uniforms bg"),
                layout: &res.layouts.uniforms,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &buffer,
                        offset: 0,
                        size: NonZeroU64::new(binding_size),
                    }),
                }],
            }));

            log::debug!("SceneRenderer: uniform buffer grown to {capacity} bytes");
            self.uniform_buffer = Some(buffer);
            self.uniform_capacity = capacity;
            self.uniform_binding_size = binding_size;
        }

        if let Some(buffer) = self.uniform_buffer.as_ref() {
            ctx.queue.write_buffer(buffer, 0, &self.uniform_staging);
        }

        stride
    }

    fn write_fan_indices(&mut self, ctx: &RenderCtx<'_>, list: &DrawList) {
        self.indices.clear();
        self.fan_ranges.clear();

        for cmd in list.items() {
            if cmd.topology != Topology::TriangleFan {
                self.fan_ranges.push(None);
                continue;
            }
            let start = self.indices.len() as u32;
            fan_indices(cmd.range, &mut self.indices);
            let end = self.indices.len() as u32;
            self.fan_ranges.push((end > start).then_some(start..end));
        }

        if self.indices.is_empty() {
            return;
        }

        let needed = (self.indices.len() * std::mem::size_of::<u32>()) as u64;
        if self.index_buffer.is_none() || needed > self.index_capacity {
            let capacity = needed.next_power_of_two();
            self.index_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("coupe fan indices"),
                size: capacity,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.index_capacity = capacity;
        }

        if let Some(buffer) = self.index_buffer.as_ref() {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(&self.indices));
        }
    }

    fn ensure_material_groups(&mut self, ctx: &RenderCtx<'_>, res: &SceneResources<'_>, list: &DrawList) {
        for cmd in list.items() {
            let material = cmd.material;
            if self.material_groups.contains_key(&material) {
                continue;
            }

            let (Some(diffuse), Some(specular), Some(sampler)) = (
                res.textures.view(material.diffuse),
                res.textures.view(material.specular),
                res.textures.sampler(material.wrap),
            ) else {
                continue;
            };

            let group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("coupe material bg"),
                layout: &res.layouts.material,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(diffuse),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(specular),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            });
            self.material_groups.insert(material, group);
        }
    }
}

fn align_up(value: u64, align: u64) -> u64 {
    if align <= 1 {
        return value;
    }
    value.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_over_cap_region() {
        let mut out = Vec::new();
        fan_indices(VertexRange::new(10, 5), &mut out);
        assert_eq!(out, vec![10, 11, 12, 10, 12, 13, 10, 13, 14]);
    }

    #[test]
    fn short_fans_emit_nothing() {
        let mut out = Vec::new();
        fan_indices(VertexRange::new(0, 2), &mut out);
        fan_indices(VertexRange::new(0, 0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn fan_triangle_count_is_count_minus_two() {
        let mut out = Vec::new();
        fan_indices(VertexRange::new(130, 66), &mut out);
        assert_eq!(out.len(), 64 * 3);
        assert_eq!(*out.last().unwrap_or(&0), 195);
    }

    #[test]
    fn alignment_rounds_up() {
        assert_eq!(align_up(400, 256), 512);
        assert_eq!(align_up(224, 256), 256);
        assert_eq!(align_up(512, 256), 512);
        assert_eq!(align_up(7, 1), 7);
    }
}
