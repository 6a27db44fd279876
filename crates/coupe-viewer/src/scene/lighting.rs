use glam::Vec3;

use coupe_engine::shader::UniformBlock;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirLight {
    /// Direction the light travels, not the direction towards it.
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// Material shininess plus both lights, written into a program's base block
/// once per bind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightConfig {
    pub shininess: f32,
    pub dir: DirLight,
    pub point: PointLight,
}

const SUN: DirLight = DirLight {
    direction: Vec3::new(2.0, -2.0, 0.03),
    ambient: Vec3::splat(0.5),
    diffuse: Vec3::splat(0.4),
    specular: Vec3::splat(0.5),
};

const ABOVE_GROUND: Vec3 = Vec3::new(1.0, 10.0, 4.0);
const BEHIND_CAR: Vec3 = Vec3::new(0.0, 6.0, -3.0);

const fn point(position: Vec3, ambient: f32, diffuse: f32, specular: f32) -> PointLight {
    PointLight {
        position,
        ambient: Vec3::splat(ambient),
        diffuse: Vec3::splat(diffuse),
        specular: Vec3::splat(specular),
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    }
}

impl LightConfig {
    pub const fn ground() -> Self {
        Self { shininess: 256.0, dir: SUN, point: point(ABOVE_GROUND, 1.0, 1.0, 0.3) }
    }

    pub const fn wing() -> Self {
        Self { shininess: 256.0, dir: SUN, point: point(ABOVE_GROUND, 0.25, 0.4, 0.774597) }
    }

    /// Dull and dark: the tire.
    pub const fn rubber() -> Self {
        Self { shininess: 9.99, dir: SUN, point: point(BEHIND_CAR, 0.02, 0.01, 0.4) }
    }

    /// Rim, hub, spokes and the car body.
    pub const fn chrome() -> Self {
        Self { shininess: 256.0, dir: SUN, point: point(BEHIND_CAR, 0.25, 0.4, 0.774597) }
    }

    pub fn apply(&self, block: &mut UniformBlock) {
        block.set_float("shininess", self.shininess);

        block.set_vec3("dir_light.direction", self.dir.direction);
        block.set_vec3("dir_light.ambient", self.dir.ambient);
        block.set_vec3("dir_light.diffuse", self.dir.diffuse);
        block.set_vec3("dir_light.specular", self.dir.specular);

        block.set_vec3("point_light.position", self.point.position);
        block.set_vec3("point_light.ambient", self.point.ambient);
        block.set_vec3("point_light.diffuse", self.point.diffuse);
        block.set_vec3("point_light.specular", self.point.specular);
        block.set_float("point_light.constant_att", self.point.constant);
        block.set_float("point_light.linear_att", self.point.linear);
        block.set_float("point_light.quadratic_att", self.point.quadratic);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::programs::{basic_layout, lit_layout};

    fn f32_at(block: &UniformBlock, offset: usize) -> f32 {
        bytemuck::pod_read_unaligned(&block.as_bytes()[offset..offset + 4])
    }

    #[test]
    fn apply_fills_light_members() {
        let layout = Arc::new(lit_layout());
        let mut block = UniformBlock::new(layout.clone());
        LightConfig::rubber().apply(&mut block);

        let at = |name: &str| layout.slot(name).unwrap().offset;
        assert_eq!(f32_at(&block, at("shininess")), 9.99);
        assert_eq!(f32_at(&block, at("dir_light.direction")), 2.0);
        assert_eq!(f32_at(&block, at("point_light.position") + 8), -3.0);
        assert_eq!(f32_at(&block, at("point_light.constant_att")), 1.0);
        assert_eq!(f32_at(&block, at("point_light.quadratic_att")), 0.032);
    }

    #[test]
    fn apply_to_unlit_block_writes_nothing() {
        let mut block = UniformBlock::new(Arc::new(basic_layout()));
        LightConfig::ground().apply(&mut block);
        assert!(block.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn presets_share_the_sun() {
        let presets = [LightConfig::ground(), LightConfig::wing(), LightConfig::rubber(), LightConfig::chrome()];
        assert!(presets.iter().all(|p| p.dir == SUN));
        assert_eq!(LightConfig::chrome().point.position, BEHIND_CAR);
        assert_eq!(LightConfig::ground().point.position, ABOVE_GROUND);
    }
}
