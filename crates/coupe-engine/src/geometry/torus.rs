use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::{MeshData, Vertex};

/// Torus around +Z.
///
/// `scale` multiplies the whole shape and the tube height a second time, so
/// values above 1 flatten the ring into a tire profile.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TorusParams {
    pub tube_radius: f32,
    pub ring_radius: f32,
    pub ring_segments: u32,
    pub tube_segments: u32,
    pub scale: f32,
}

impl TorusParams {
    pub const fn vertex_count(&self) -> u32 {
        self.ring_segments * (self.tube_segments + 1) * 2
    }
}

/// One triangle strip of `R (C+1) 2` vertices.
///
/// Normals are the normalized position, an approximation that is exact only
/// for a sphere. A vertex at the origin falls back to +Z.
pub fn torus(p: TorusParams) -> MeshData {
    let ring = p.ring_segments.max(1);
    let tube = p.tube_segments.max(1);
    let (r, c, m) = (p.tube_radius, p.ring_radius, p.scale);

    let mut vertices = Vec::with_capacity((ring * (tube + 1) * 2) as usize);

    for i in 0..ring {
        for j in 0..=tube {
            for k in 0..=1 {
                let s = ((i + k) % ring) as f32 + 0.5;
                let t = j as f32;

                let (sin_s, cos_s) = (s * TAU / ring as f32).sin_cos();
                let (sin_t, cos_t) = (t * TAU / tube as f32).sin_cos();

                let reach = c + 0.5 * r * cos_s;
                let position = Vec3::new(m * reach * cos_t, m * reach * sin_t, m * m * r * sin_s);
                let uv = Vec2::new((i + k) as f32 / ring as f32, t / tube as f32);

                vertices.push(Vertex::new(position, position.normalize_or(Vec3::Z), uv));
            }
        }
    }

    MeshData::single(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIRE: TorusParams = TorusParams {
        tube_radius: 10.0,
        ring_radius: 30.0,
        ring_segments: 30,
        tube_segments: 36,
        scale: 2.0,
    };

    #[test]
    fn vertex_count_matches_formula() {
        let mesh = torus(TIRE);
        assert_eq!(mesh.len(), 30 * 37 * 2);
        assert_eq!(mesh.len() as u32, TIRE.vertex_count());
        assert_eq!(mesh.counts.side, mesh.counts.total());
    }

    #[test]
    fn normals_are_unit_length() {
        for v in &torus(TIRE).vertices {
            assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn degenerate_torus_uses_fallback_normal() {
        let mesh = torus(TorusParams { tube_radius: 0.0, ring_radius: 0.0, ..TIRE });
        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn tube_height_scales_by_square_of_scale() {
        let mesh = torus(TIRE);
        let max_z = mesh.vertices.iter().map(|v| v.position[2]).fold(f32::MIN, f32::max);
        assert!(max_z <= 2.0 * 2.0 * 10.0 + 1e-3);
        assert!(max_z > 30.0);
    }
}
