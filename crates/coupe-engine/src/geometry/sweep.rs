use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::{MeshData, Vertex, VertexCounts};

pub const CYLINDER_SEGMENTS: u32 = 64;
pub const RECTANGLE_SEGMENTS: u32 = 4;

/// Closed prism swept around +Z: radius in XY, extruded from z = 0 to `height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepParams {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

/// Round cylinder.
pub fn cylinder(radius: f32, height: f32) -> MeshData {
    sweep(SweepParams { radius, height, segments: CYLINDER_SEGMENTS })
}

/// Square prism: the same sweep with four segments.
pub fn rectangle(radius: f32, height: f32) -> MeshData {
    sweep(SweepParams { radius, height, segments: RECTANGLE_SEGMENTS })
}

/// Builds `side | top | bottom` regions.
///
/// - side: a triangle strip of `2(n+1)` vertices, top/bottom pair per step
/// - top and bottom caps: triangle fans of `n+2` vertices each
///
/// Steps run over `0..=n`, so the last step lands back on the seam and
/// duplicates the first one. Each cap appends one more closing vertex at the
/// seam after its rim.
pub fn sweep(p: SweepParams) -> MeshData {
    let n = p.segments.max(1);
    let steps = n + 1;

    let mut vertices = Vec::with_capacity((steps * 2 + (steps + 1) * 2) as usize);

    for i in 0..steps {
        let (theta, dir) = step_dir(i, n);
        let rim = dir * p.radius;
        let normal = Vec3::new(dir.x, dir.y, 0.0);

        vertices.push(Vertex::new(rim.extend(p.height), normal, Vec2::new(theta, 1.0)));
        vertices.push(Vertex::new(rim.extend(0.0), normal, Vec2::new(theta, 0.0)));
    }
    let side = vertices.len() as u32;

    push_cap(&mut vertices, &p, n, p.height, Vec3::Z);
    let top = vertices.len() as u32 - side;

    push_cap(&mut vertices, &p, n, 0.0, Vec3::NEG_Z);
    let bottom = vertices.len() as u32 - side - top;

    MeshData { vertices, counts: VertexCounts { side, top, bottom } }
}

fn step_dir(i: u32, n: u32) -> (f32, Vec2) {
    let theta = i as f32 * TAU / n as f32;
    (theta, Vec2::from_angle(theta))
}

fn push_cap(out: &mut Vec<Vertex>, p: &SweepParams, n: u32, z: f32, normal: Vec3) {
    let cap_vertex = |dir: Vec2| {
        let uv = Vec2::splat(0.5) + dir * 0.5;
        Vertex::new((dir * p.radius).extend(z), normal, uv)
    };

    for i in 0..=n {
        out.push(cap_vertex(step_dir(i, n).1));
    }
    out.push(cap_vertex(Vec2::X));
}
