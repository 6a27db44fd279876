use super::{MeshData, Vertex};

// Row layout: position xyz, normal xyz, texcoord uv. Six vertices per quad.

/// Unit quad at y = -0.5 facing +Y.
const PLANE: [[f32; 8]; 6] = [
    [-0.5, -0.5, -0.5, 0.0, 1.0, 0.0, 1.0, 0.0],
    [0.5, -0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
    [0.5, -0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 1.0],
    [-0.5, -0.5, 0.5, 0.0, 1.0, 0.0, 1.0, 1.0],
    [-0.5, -0.5, -0.5, 0.0, 1.0, 0.0, 1.0, 0.0],
];

/// Unit cube centred on the origin.
const CUBE: [[f32; 8]; 36] = [
    // back, -Z
    [-0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [0.5, 0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [0.5, 0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [-0.5, 0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [-0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    // front, +Z
    [-0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    [0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    [0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0],
    [0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0],
    [-0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 1.0],
    [-0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    // left, -X
    [-0.5, 0.5, 0.5, -1.0, 0.0, 0.0, 1.0, 0.0],
    [-0.5, 0.5, -0.5, -1.0, 0.0, 0.0, 1.0, 1.0],
    [-0.5, -0.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0],
    [-0.5, -0.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0],
    [-0.5, -0.5, 0.5, -1.0, 0.0, 0.0, 0.0, 0.0],
    [-0.5, 0.5, 0.5, -1.0, 0.0, 0.0, 1.0, 0.0],
    // right, +X
    [0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0, 0.0],
    [0.5, 0.5, -0.5, 1.0, 0.0, 0.0, 1.0, 1.0],
    [0.5, -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0],
    [0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0, 0.0],
    // bottom, -Y
    [-0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 1.0, 1.0],
    [0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0],
    [0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0],
    [-0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 0.0, 0.0],
    [-0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0],
    // top, +Y
    [-0.5, 0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 1.0],
    [0.5, 0.5, -0.5, 0.0, 1.0, 0.0, 1.0, 1.0],
    [0.5, 0.5, 0.5, 0.0, 1.0, 0.0, 1.0, 0.0],
    [0.5, 0.5, 0.5, 0.0, 1.0, 0.0, 1.0, 0.0],
    [-0.5, 0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-0.5, 0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 1.0],
];

/// Truncated pyramid: unit base, top face shrunk to half width.
///
/// Slanted faces reuse the axis normals of the cube faces they replace.
const PYRAMID: [[f32; 8]; 36] = [
    // back, -Z
    [-0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [0.25, 0.5, -0.25, 0.0, 0.0, -1.0, 1.0, 1.0],
    [0.25, 0.5, -0.25, 0.0, 0.0, -1.0, 1.0, 1.0],
    [-0.25, 0.5, -0.25, 0.0, 0.0, -1.0, 0.0, 1.0],
    [-0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    // front, +Z
    [-0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    [0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    [0.25, 0.5, 0.25, 0.0, 0.0, 1.0, 1.0, 1.0],
    [0.25, 0.5, 0.25, 0.0, 0.0, 1.0, 1.0, 1.0],
    [-0.25, 0.5, 0.25, 0.0, 0.0, 1.0, 0.0, 1.0],
    [-0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    // left, -X
    [-0.25, 0.5, 0.25, -1.0, 0.0, 0.0, 1.0, 0.0],
    [-0.25, 0.5, -0.25, -1.0, 0.0, 0.0, 1.0, 1.0],
    [-0.5, -0.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0],
    [-0.5, -0.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0],
    [-0.5, -0.5, 0.5, -1.0, 0.0, 0.0, 0.0, 0.0],
    [-0.25, 0.5, 0.25, -1.0, 0.0, 0.0, 1.0, 0.0],
    // right, +X
    [0.25, 0.5, 0.25, 1.0, 0.0, 0.0, 1.0, 0.0],
    [0.25, 0.5, -0.25, 1.0, 0.0, 0.0, 1.0, 1.0],
    [0.5, -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0],
    [0.25, 0.5, 0.25, 1.0, 0.0, 0.0, 1.0, 0.0],
    // bottom, -Y
    [-0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0],
    [0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 1.0, 1.0],
    [0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0],
    [0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0],
    [-0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 0.0, 0.0],
    [-0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0],
    // top, +Y
    [-0.25, 0.5, -0.25, 0.0, 1.0, 0.0, 0.0, 1.0],
    [0.25, 0.5, -0.25, 0.0, 1.0, 0.0, 1.0, 1.0],
    [0.25, 0.5, 0.25, 0.0, 1.0, 0.0, 1.0, 0.0],
    [0.25, 0.5, 0.25, 0.0, 1.0, 0.0, 1.0, 0.0],
    [-0.25, 0.5, 0.25, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-0.25, 0.5, -0.25, 0.0, 1.0, 0.0, 0.0, 1.0],
];

/// Rear wing: two tapered uprights joined by a flat bar.
const WING: [[f32; 8]; 96] = [
    // right upright
    [2.5, 2.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [2.5, 1.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [2.0, 1.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [2.5, 1.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [2.25, 2.5, 0.5, 0.0, 0.0, 1.0, 0.0, 1.0],
    [2.25, 2.25, 0.5, 0.0, 0.0, 1.0, 0.0, 0.75],
    [2.0, 2.5, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0],
    [2.0, 2.5, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0],
    [2.25, 2.25, 0.5, 0.0, 0.0, 1.0, 0.0, 0.75],
    [2.0, 2.25, 0.5, 0.0, 0.0, 1.0, 1.0, 0.75],
    [2.5, 2.5, -0.5, 1.0, 0.0, 0.0, 1.0, 1.0],
    [2.5, 1.5, -0.5, 1.0, 0.0, 0.0, 1.0, 0.0],
    [2.25, 2.25, 0.5, 1.0, 0.0, 0.0, 0.0, 0.75],
    [2.25, 2.25, 0.5, 1.0, 0.0, 0.0, 0.0, 0.75],
    [2.25, 2.5, 0.5, 1.0, 0.0, 0.0, 0.0, 1.0],
    [2.5, 2.5, -0.5, 1.0, 0.0, 0.0, 1.0, 1.0],
    [2.0, 2.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0],
    [2.0, 1.5, -0.5, -1.0, 0.0, 0.0, 0.0, 0.0],
    [2.0, 2.25, 0.5, -1.0, 0.0, 0.0, 1.0, 0.75],
    [2.0, 2.25, 0.5, -1.0, 0.0, 0.0, 1.0, 0.75],
    [2.0, 2.5, 0.5, -1.0, 0.0, 0.0, 1.0, 1.0],
    [2.0, 2.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0],
    [2.5, 2.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [2.25, 2.5, 0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [2.0, 2.5, 0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [2.25, 2.5, 0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [2.5, 1.5, -0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    [2.0, 1.5, -0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    [2.0, 2.25, 0.5, 0.0, 0.0, 1.0, 0.0, 1.0],
    [2.0, 2.25, 0.5, 0.0, 0.0, 1.0, 0.0, 1.0],
    [2.25, 2.25, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0],
    [2.5, 1.5, -0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    // left upright
    [-2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [-2.0, 1.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [-2.5, 2.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [-2.5, 2.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [-2.5, 1.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [-2.0, 1.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [-2.0, 2.5, 0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    [-2.0, 2.25, 0.5, 0.0, 0.0, 1.0, 1.0, 0.25],
    [-2.25, 2.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    [-2.25, 2.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    [-2.25, 2.25, 0.5, 0.0, 0.0, 1.0, 0.0, 0.25],
    [-2.0, 2.25, 0.5, 0.0, 0.0, 1.0, 1.0, 0.25],
    [-2.25, 2.5, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-2.25, 2.25, 0.5, 0.0, 1.0, 0.0, 0.0, 0.25],
    [-2.5, 1.5, -0.5, 0.0, 1.0, 0.0, 1.0, 1.0],
    [-2.5, 1.5, -0.5, 0.0, 1.0, 0.0, 1.0, 1.0],
    [-2.5, 2.5, -0.5, 0.0, 1.0, 0.0, 1.0, 0.0],
    [-2.25, 2.5, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-2.0, 2.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0],
    [-2.0, 2.25, 0.5, 0.0, -1.0, 0.0, 1.0, 0.25],
    [-2.0, 1.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0],
    [-2.0, 1.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0],
    [-2.0, 2.5, -0.5, 0.0, -1.0, 0.0, 0.0, 0.0],
    [-2.0, 2.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0],
    [-2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [-2.5, 2.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0],
    [-2.25, 2.5, 0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [-2.25, 2.5, 0.5, 0.0, 0.0, -1.0, 1.0, 1.0],
    [-2.0, 2.5, 0.5, 0.0, 0.0, -1.0, 0.0, 1.0],
    [-2.0, 2.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0],
    [-2.0, 1.5, -0.5, 0.0, 0.0, 1.0, 0.0, 1.0],
    [-2.5, 1.5, -0.5, 0.0, 0.0, 1.0, 1.0, 1.0],
    [-2.25, 2.25, 0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    [-2.25, 2.25, 0.5, 0.0, 0.0, 1.0, 1.0, 0.0],
    [-2.0, 2.25, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
    [-2.0, 1.5, -0.5, 0.0, 0.0, 1.0, 0.0, 1.0],
    // cross bar
    [2.0, 2.5, 0.25, 0.0, 0.0, -1.0, 0.0, 1.0],
    [2.0, 2.25, 0.25, 0.0, 0.0, -1.0, 0.0, 0.0],
    [-2.0, 2.5, 0.25, 0.0, 0.0, -1.0, 1.0, 1.0],
    [-2.0, 2.5, 0.25, 0.0, 0.0, -1.0, 1.0, 1.0],
    [2.0, 2.25, 0.25, 0.0, 0.0, -1.0, 0.0, 0.0],
    [-2.0, 2.25, 0.25, 0.0, 0.0, -1.0, 1.0, 0.0],
    [2.0, 2.5, 0.35, 0.0, 0.0, 1.0, 0.0, 1.0],
    [2.0, 2.25, 0.35, 0.0, 0.0, 1.0, 0.0, 0.0],
    [-2.0, 2.5, 0.35, 0.0, 0.0, 1.0, 1.0, 1.0],
    [-2.0, 2.5, 0.35, 0.0, 0.0, 1.0, 1.0, 1.0],
    [2.0, 2.25, 0.35, 0.0, 0.0, 1.0, 0.0, 0.0],
    [-2.0, 2.25, 0.35, 0.0, 0.0, 1.0, 1.0, 0.0],
    [2.0, 2.25, 0.25, 0.0, -1.0, 0.0, 0.0, 0.0],
    [-2.0, 2.25, 0.25, 0.0, -1.0, 0.0, 1.0, 0.0],
    [-2.0, 2.25, 0.35, 0.0, -1.0, 0.0, 1.0, 1.0],
    [-2.0, 2.25, 0.35, 0.0, -1.0, 0.0, 1.0, 1.0],
    [2.0, 2.25, 0.35, 0.0, -1.0, 0.0, 0.0, 1.0],
    [2.0, 2.25, 0.25, 0.0, -1.0, 0.0, 0.0, 0.0],
    [2.0, 2.5, 0.25, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-2.0, 2.5, 0.25, 0.0, 1.0, 0.0, 1.0, 0.0],
    [-2.0, 2.5, 0.35, 0.0, 1.0, 0.0, 1.0, 1.0],
    [-2.0, 2.5, 0.35, 0.0, 1.0, 0.0, 1.0, 1.0],
    [2.0, 2.5, 0.35, 0.0, 1.0, 0.0, 0.0, 1.0],
    [2.0, 2.5, 0.25, 0.0, 1.0, 0.0, 0.0, 0.0],
];

fn from_rows(rows: &[[f32; 8]]) -> MeshData {
    MeshData::single(rows.iter().copied().map(Vertex::from_row).collect())
}

pub fn plane() -> MeshData {
    from_rows(&PLANE)
}

pub fn cube() -> MeshData {
    from_rows(&CUBE)
}

pub fn pyramid() -> MeshData {
    from_rows(&PYRAMID)
}

pub fn wing() -> MeshData {
    from_rows(&WING)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn normal(v: &Vertex) -> Vec3 {
        Vec3::from_array(v.normal)
    }

    #[test]
    fn literal_vertex_counts() {
        assert_eq!(plane().len(), 6);
        assert_eq!(cube().len(), 36);
        assert_eq!(pyramid().len(), 36);
        assert_eq!(wing().len(), 96);
        assert_eq!(wing().counts.total(), 96);
        assert_eq!(wing().counts.top, 0);
    }

    #[test]
    fn cube_face_normals_are_axis_aligned() {
        let cube = cube();
        let expected = [Vec3::NEG_Z, Vec3::Z, Vec3::NEG_X, Vec3::X, Vec3::NEG_Y, Vec3::Y];
        for (face, axis) in cube.vertices.chunks(6).zip(expected) {
            for v in face {
                assert_eq!(normal(v), axis);
            }
        }
    }

    #[test]
    fn literal_normals_are_unit_length() {
        for mesh in [plane(), cube(), pyramid(), wing()] {
            for v in &mesh.vertices {
                assert!((normal(v).length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn pyramid_top_is_half_width() {
        let top = &pyramid().vertices[30..36];
        for v in top {
            assert_eq!(v.position[1], 0.5);
            assert_eq!(v.position[0].abs(), 0.25);
            assert_eq!(v.position[2].abs(), 0.25);
        }
    }
}
