use anyhow::{Context, Result};

use coupe_engine::camera::FlyCamera;
use coupe_engine::core::{App, AppControl, FrameCtx};
use coupe_engine::device::{Gpu, DEPTH_FORMAT};
use coupe_engine::render::{BindingLayouts, Mesh, MeshStore, SceneRenderer, SceneResources, TextureStore};
use coupe_engine::scene::DrawList;
use coupe_engine::shader::{PipelineTargets, ProgramStore};

use crate::config::ViewerConfig;
use crate::controls::Controls;
use crate::programs::ProgramSet;
use crate::scene::{compose_scene, CameraUniforms, SceneAssets, SceneFrame, SceneMeshes, SceneTextures};

/// GPU-side state, created once the device exists.
struct GpuScene {
    layouts: BindingLayouts,
    store: ProgramStore,
    meshes: MeshStore,
    textures: TextureStore,
    renderer: SceneRenderer,
    programs: ProgramSet,
    assets: SceneAssets,
}

impl GpuScene {
    fn new(gpu: &Gpu<'_>, config: &ViewerConfig) -> Result<Self> {
        let device = gpu.device();
        let layouts = BindingLayouts::new(device);

        let mut store = ProgramStore::new();
        let targets = PipelineTargets { color: gpu.surface_format(), depth: DEPTH_FORMAT };
        let programs =
            ProgramSet::load(device, &layouts, targets, &mut store).context("failed to build shader programs")?;

        let mut meshes = MeshStore::new();
        let scene_meshes = SceneMeshes::build(|label, data| meshes.insert(Mesh::upload(device, &data, label)));

        SceneTextures::check_files(&config.asset_root)
            .with_context(|| format!("textures missing under {}", config.asset_root.display()))?;

        let mut textures = TextureStore::new(device);
        let scene_textures = SceneTextures::load(&config.asset_root, |path| textures.load(device, gpu.queue(), path))
            .with_context(|| format!("failed to load textures from {}", config.asset_root.display()))?;

        log::info!("scene ready: {} meshes uploaded", meshes.len());

        Ok(Self {
            layouts,
            store,
            meshes,
            textures,
            renderer: SceneRenderer::new(),
            programs,
            assets: SceneAssets { meshes: scene_meshes, textures: scene_textures },
        })
    }

    fn destroy(&mut self) {
        self.meshes.destroy_all();
        self.textures.destroy_all();
    }
}

/// The car viewer: owns the camera, its controls and every GPU resource.
pub struct Viewer {
    config: ViewerConfig,
    camera: FlyCamera,
    controls: Controls,
    list: DrawList,
    scene: Option<GpuScene>,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            camera: FlyCamera::new(config.camera_start),
            controls: Controls::new(config.key_speed, config.min_speed),
            list: DrawList::new(),
            scene: None,
            config,
        }
    }
}

impl App for Viewer {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let info = gpu.adapter_info();
        log::info!("rendering on {} ({:?}), surface {:?}", info.name, info.backend, gpu.surface_format());

        self.scene = Some(GpuScene::new(gpu, &self.config)?);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.controls.update(&mut self.camera, ctx.input, ctx.input_frame, ctx.time.dt) == AppControl::Exit {
            return AppControl::Exit;
        }

        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        let camera = CameraUniforms {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(ctx.window.aspect_ratio(), self.config.near, self.config.far),
            position: self.camera.position,
        };

        self.list.clear();
        compose_scene(&mut SceneFrame::new(&mut self.list, &scene.programs, camera), &scene.assets);

        let GpuScene { layouts, store, meshes, textures, renderer, .. } = scene;
        let res = SceneResources { layouts, programs: store, meshes, textures };
        let list = &self.list;

        ctx.render(self.config.clear_color, |rctx, target| {
            renderer.render(rctx, target, &res, list);
        })
    }

    fn on_exit(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            log::info!("releasing {} meshes", scene.meshes.len());
            scene.destroy();
        }
    }
}
