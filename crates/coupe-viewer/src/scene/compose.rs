//! Records the fixed car scene into a `DrawList`.
//!
//! Transforms compose as translate · rotate · scale, applied to the mesh in
//! reverse order.

use glam::{Mat4, Vec2, Vec3};

use coupe_engine::scene::{DrawList, ProgramScope, Topology, WrapMode};
use coupe_engine::shader::UniformBlock;

use crate::programs::{ProgramHandle, ProgramSet};

use super::assets::SceneAssets;
use super::lighting::LightConfig;

/// Per-frame camera state shared by every program.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub position: Vec3,
}

/// Draw list being recorded plus what every program bind needs.
pub struct SceneFrame<'a> {
    list: &'a mut DrawList,
    programs: &'a ProgramSet,
    camera: CameraUniforms,
}

impl<'a> SceneFrame<'a> {
    pub fn new(list: &'a mut DrawList, programs: &'a ProgramSet, camera: CameraUniforms) -> Self {
        Self { list, programs, camera }
    }

    fn camera_block(&self, program: &ProgramHandle) -> UniformBlock {
        let mut block = program.block();
        block.set_mat4("view", self.camera.view);
        block.set_mat4("projection", self.camera.projection);
        block.set_vec3("view_pos", self.camera.position);
        block
    }

    /// Binds the lit program with `light` applied to its base block.
    pub fn lit(&mut self, light: &LightConfig) -> ProgramScope<'_> {
        let programs = self.programs;
        let mut base = self.camera_block(&programs.lit);
        light.apply(&mut base);
        self.list.bind_program(programs.lit.id, base)
    }

    pub fn basic(&mut self) -> ProgramScope<'_> {
        let programs = self.programs;
        let base = self.camera_block(&programs.basic);
        self.list.bind_program(programs.basic.id, base)
    }
}

fn uv_scale(scale: Vec2) -> impl FnOnce(&mut UniformBlock) {
    move |u| u.set_vec2("uv_scale", scale)
}

fn trs(translation: Vec3, rotation: Mat4, scale: Vec3) -> Mat4 {
    Mat4::from_translation(translation) * rotation * Mat4::from_scale(scale)
}

pub fn draw_ground(frame: &mut SceneFrame<'_>, assets: &SceneAssets) {
    let plane = assets.meshes.plane;
    frame
        .lit(&LightConfig::ground())
        .mesh(plane)
        .material(assets.textures.pavement.material(WrapMode::Repeat))
        .transform(Mat4::from_scale(Vec3::new(100.0, 1.0, 100.0)))
        .uniforms(uv_scale(Vec2::splat(25.0)))
        .draw(Topology::TriangleList, plane.all());
}

pub fn draw_wing(frame: &mut SceneFrame<'_>, assets: &SceneAssets) {
    let wing = assets.meshes.wing;
    let model = trs(
        Vec3::new(0.0, 4.05, 0.6),
        Mat4::from_rotation_x((-90.0f32).to_radians()),
        Vec3::new(1.0, 1.25, 1.25),
    );
    frame
        .lit(&LightConfig::wing())
        .mesh(wing)
        .material(assets.textures.paint.material(WrapMode::MirroredRepeat))
        .transform(model)
        .uniforms(uv_scale(Vec2::ONE))
        .draw(Topology::TriangleList, wing.all());
}

/// Placement of one wheel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelParams {
    pub location: Vec3,
    /// Yaw in degrees.
    pub angle: f32,
    pub scale: Vec3,
    /// Right-hand wheels push hub and spokes towards +X.
    pub outer_right: bool,
}

const WHEEL_SCALE: Vec3 = Vec3::splat(0.0225);

pub const WHEELS: [WheelParams; 4] = [
    WheelParams { location: Vec3::new(-2.5, 1.0, 1.0), angle: -90.0, scale: WHEEL_SCALE, outer_right: false },
    WheelParams { location: Vec3::new(2.5, 1.0, 1.0), angle: 90.0, scale: WHEEL_SCALE, outer_right: true },
    WheelParams { location: Vec3::new(-2.5, 1.0, 9.0), angle: -90.0, scale: WHEEL_SCALE, outer_right: false },
    WheelParams { location: Vec3::new(2.5, 1.0, 9.0), angle: 90.0, scale: WHEEL_SCALE, outer_right: true },
];

const SPOKES: u32 = 8;

impl WheelParams {
    fn outward(&self, distance: f32) -> Vec3 {
        let x = if self.outer_right { distance } else { -distance };
        self.location + Vec3::new(x, 0.0, 0.0) * self.scale
    }
}

/// Tire, rim, hub and eight spokes: 29 draws.
pub fn draw_wheel(frame: &mut SceneFrame<'_>, assets: &SceneAssets, wheel: &WheelParams) {
    let meshes = &assets.meshes;
    let paint = assets.textures.paint;
    let yaw = Mat4::from_rotation_y(wheel.angle.to_radians());
    let model = trs(wheel.location, yaw, wheel.scale);

    frame
        .lit(&LightConfig::rubber())
        .mesh(meshes.tire)
        .material(assets.textures.tread.material(WrapMode::MirroredRepeat))
        .transform(model)
        .uniforms(uv_scale(Vec2::splat(3.0)))
        .draw(Topology::TriangleStrip, meshes.tire.all());

    let mut chrome = frame.lit(&LightConfig::chrome());

    chrome
        .mesh(meshes.rim)
        .material(paint.material(WrapMode::MirroredRepeat))
        .transform(model)
        .uniforms(uv_scale(Vec2::ONE))
        .draw(Topology::TriangleStrip, meshes.rim.all());

    chrome
        .mesh(meshes.hub)
        .material(paint.material(WrapMode::ClampToEdge))
        .transform(trs(wheel.outward(15.0), yaw, wheel.scale))
        .uniforms(uv_scale(Vec2::ONE))
        .draw(Topology::TriangleStrip, meshes.hub.side())
        .draw(Topology::TriangleFan, meshes.hub.top())
        .draw(Topology::TriangleFan, meshes.hub.bottom());

    let spoke_base = Mat4::from_translation(wheel.outward(22.0))
        * Mat4::from_rotation_x(wheel.angle.to_radians())
        * Mat4::from_rotation_z(90.0f32.to_radians());
    for i in 0..SPOKES {
        let step = (i as f32 * 45.0).to_radians();
        let model = spoke_base * Mat4::from_rotation_y(step) * Mat4::from_scale(wheel.scale);
        chrome
            .mesh(meshes.spoke)
            .material(paint.material(WrapMode::ClampToEdge))
            .transform(model)
            .uniforms(uv_scale(Vec2::ONE))
            .draw(Topology::TriangleStrip, meshes.spoke.side())
            .draw(Topology::TriangleFan, meshes.spoke.top())
            .draw(Topology::TriangleFan, meshes.spoke.bottom());
    }
}

/// Placement of the car body.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CarParams {
    pub location: Vec3,
    pub scale: Vec3,
}

pub const CAR: CarParams = CarParams {
    location: Vec3::new(0.0, 1.5, -0.6),
    scale: Vec3::new(0.5, 0.5, 1.0),
};

/// One of the four cylinder panels closing the body.
struct Panel {
    location: Vec3,
    scale: Vec3,
    axis: Vec3,
    angle: f32,
    uv: Vec2,
}

const PANELS: [Panel; 4] = [
    Panel { location: Vec3::new(2.5, 1.5, 2.6), scale: Vec3::new(0.25, 0.1, 1.0), axis: Vec3::Z, angle: -90.0, uv: Vec2::new(1.0, 6.0) },
    Panel { location: Vec3::new(-2.5, 1.5, 2.6), scale: Vec3::new(0.25, 0.1, 1.0), axis: Vec3::Z, angle: 90.0, uv: Vec2::new(1.0, 1.0) },
    Panel { location: Vec3::new(0.0, 3.4, 10.6), scale: Vec3::new(0.6, 0.5, 0.6), axis: Vec3::X, angle: 90.0, uv: Vec2::new(0.3, 1.0) },
    Panel { location: Vec3::new(0.0, 0.5, -0.6), scale: Vec3::new(0.6, 0.5, 0.6), axis: Vec3::X, angle: -90.0, uv: Vec2::new(0.3, 1.0) },
];

/// Body, cab, roof, outline, wheel wells and side panels: 19 draws.
pub fn draw_car(frame: &mut SceneFrame<'_>, assets: &SceneAssets, car: &CarParams) {
    let meshes = &assets.meshes;
    let tex = &assets.textures;
    let paint = tex.paint.material(WrapMode::MirroredRepeat);
    let roof_at = Vec3::new(0.0, 4.29, 5.0);

    {
        let mut chrome = frame.lit(&LightConfig::chrome());

        chrome
            .mesh(meshes.body)
            .material(paint)
            .transform(trs(car.location, Mat4::from_rotation_z(45.0f32.to_radians()), car.scale))
            .uniforms(uv_scale(Vec2::splat(3.0)))
            .draw(Topology::TriangleStrip, meshes.body.all());

        chrome
            .mesh(meshes.cab)
            .material(tex.side.material(WrapMode::MirroredRepeat))
            .transform(trs(Vec3::new(0.0, 3.0, 5.0), Mat4::IDENTITY, Vec3::new(6.0, 0.8, 11.5)))
            .uniforms(uv_scale(Vec2::ONE))
            .draw(Topology::TriangleList, meshes.cab.all());

        chrome
            .mesh(meshes.roof)
            .material(tex.glass.material(WrapMode::MirroredRepeat))
            .transform(trs(roof_at, Mat4::IDENTITY, Vec3::new(6.0, 1.76, 11.5)))
            .uniforms(uv_scale(Vec2::splat(3.0)))
            .draw(Topology::TriangleList, meshes.roof.all());

        chrome
            .mesh(meshes.cab)
            .material(paint)
            .transform(trs(roof_at, Mat4::IDENTITY, Vec3::new(3.0, 1.761, 5.75)))
            .uniforms(uv_scale(Vec2::splat(3.0)))
            .draw(Topology::TriangleList, meshes.cab.all());
    }

    frame
        .basic()
        .mesh(meshes.roof)
        .material(paint)
        .transform(trs(roof_at, Mat4::IDENTITY, Vec3::new(6.0, 1.76, 11.5)))
        .uniforms(uv_scale(Vec2::splat(3.0)))
        .draw(Topology::LineList, meshes.roof.all());

    let mut chrome = frame.lit(&LightConfig::chrome());
    let wells = [(meshes.front_well, Vec3::new(-3.0, 1.0, 9.0)), (meshes.rear_well, Vec3::new(-3.0, 1.0, 1.0))];
    for (well, at) in wells {
        chrome
            .mesh(well)
            .material(paint)
            .transform(trs(at, Mat4::from_rotation_y(90.0f32.to_radians()), car.scale / 3.0))
            .uniforms(uv_scale(Vec2::ONE))
            .draw(Topology::TriangleStrip, well.side().halved());
    }

    let panel_textures = [tex.side, tex.side, tex.front_nose, tex.back_side];
    let panel = meshes.side_panel;
    for (p, pair) in PANELS.iter().zip(panel_textures) {
        chrome
            .mesh(panel)
            .material(pair.material(WrapMode::Repeat))
            .transform(trs(p.location, Mat4::from_axis_angle(p.axis, p.angle.to_radians()), p.scale / 3.0))
            .uniforms(uv_scale(p.uv))
            .draw(Topology::TriangleStrip, panel.side().halved())
            .draw(Topology::TriangleFan, panel.top().halved())
            .draw(Topology::TriangleFan, panel.bottom().halved());
    }
}

/// Records the whole scene: ground, wing, four wheels and the car.
pub fn compose_scene(frame: &mut SceneFrame<'_>, assets: &SceneAssets) {
    draw_ground(frame, assets);
    draw_wing(frame, assets);
    for wheel in &WHEELS {
        draw_wheel(frame, assets, wheel);
    }
    draw_car(frame, assets, &CAR);
}

#[cfg(test)]
mod tests {
    use coupe_engine::geometry::VertexRange;
    use coupe_engine::scene::{DrawCmd, ProgramId};

    use super::*;
    use crate::scene::assets::tests::fake_assets;

    fn programs() -> ProgramSet {
        ProgramSet::new(ProgramId::new(0), ProgramId::new(1))
    }

    fn camera() -> CameraUniforms {
        CameraUniforms {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            position: Vec3::new(0.0, 8.0, 25.0),
        }
    }

    fn record(f: impl FnOnce(&mut SceneFrame<'_>, &SceneAssets)) -> Vec<DrawCmd> {
        let programs = programs();
        let assets = fake_assets();
        let mut list = DrawList::new();
        {
            let mut frame = SceneFrame::new(&mut list, &programs, camera());
            f(&mut frame, &assets);
        }
        list.items().to_vec()
    }

    fn f32_at(cmd: &DrawCmd, name: &str) -> f32 {
        let offset = cmd.uniforms.layout().slot(name).unwrap().offset;
        bytemuck::pod_read_unaligned(&cmd.uniforms.as_bytes()[offset..offset + 4])
    }

    #[test]
    fn each_wheel_records_29_draws() {
        let cmds = record(|frame, assets| draw_wheel(frame, assets, &WHEELS[0]));
        assert_eq!(cmds.len(), 29);
        assert_eq!(cmds[0].topology, Topology::TriangleStrip);
        assert_eq!(f32_at(&cmds[0], "shininess"), 9.99);
        assert!(cmds[1..].iter().all(|c| f32_at(c, "shininess") == 256.0));
    }

    #[test]
    fn four_wheels_record_4_times_29() {
        let cmds = record(|frame, assets| {
            for wheel in &WHEELS {
                draw_wheel(frame, assets, wheel);
            }
        });
        assert_eq!(cmds.len(), 4 * 29);
    }

    #[test]
    fn hub_and_spokes_draw_full_regions() {
        let assets = fake_assets();
        let cmds = record(|frame, assets| draw_wheel(frame, assets, &WHEELS[1]));
        let hub = assets.meshes.hub;
        assert_eq!(cmds[2].range, hub.side());
        assert_eq!(cmds[3].topology, Topology::TriangleFan);
        assert_eq!(cmds[3].range, VertexRange::new(130, 66));
        assert_eq!(cmds[4].range, VertexRange::new(196, 66));
        assert_eq!(cmds[5].range, assets.meshes.spoke.side());
    }

    #[test]
    fn car_records_19_draws() {
        let cmds = record(|frame, assets| draw_car(frame, assets, &CAR));
        assert_eq!(cmds.len(), 19);

        let programs = programs();
        let outline: Vec<_> = cmds.iter().filter(|c| c.topology == Topology::LineList).collect();
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].program, programs.basic.id);
        assert!(cmds.iter().filter(|c| c.topology != Topology::LineList).all(|c| c.program == programs.lit.id));
    }

    #[test]
    fn side_panels_draw_half_regions() {
        let assets = fake_assets();
        let cmds = record(|frame, assets| draw_car(frame, assets, &CAR));
        let panel = assets.meshes.side_panel;

        let last = &cmds[cmds.len() - 3..];
        assert_eq!(last[0].range, VertexRange::new(0, 65));
        assert_eq!(last[1].range, VertexRange::new(130, 33));
        assert_eq!(last[2].range, VertexRange::new(196, 33));
        assert!(last.iter().all(|c| c.mesh == panel.id && c.material.wrap == WrapMode::Repeat));
    }

    #[test]
    fn wheel_wells_draw_half_the_side() {
        let assets = fake_assets();
        let cmds = record(|frame, assets| draw_car(frame, assets, &CAR));
        let front = cmds.iter().find(|c| c.mesh == assets.meshes.front_well.id).unwrap();
        assert_eq!(front.range, VertexRange::new(0, 65));
    }

    #[test]
    fn camera_uniforms_reach_every_draw() {
        let cmds = record(compose_scene);
        assert_eq!(cmds.len(), 2 + 4 * 29 + 19);
        assert!(cmds.iter().all(|c| f32_at(c, "view") == 1.0));
        let lit: Vec<_> = cmds.iter().filter(|c| c.topology != Topology::LineList).collect();
        assert!(lit.iter().all(|c| f32_at(c, "view_pos") == 0.0));
    }

    #[test]
    fn ground_repeats_its_texture() {
        let cmds = record(draw_ground);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].material.wrap, WrapMode::Repeat);
        assert_eq!(f32_at(&cmds[0], "uv_scale"), 25.0);
    }
}
