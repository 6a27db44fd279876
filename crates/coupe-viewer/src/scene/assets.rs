use std::path::{Path, PathBuf};

use coupe_engine::geometry::{
    cube, cylinder, plane, pyramid, rectangle, torus, wing, MeshData, TorusParams,
};
use coupe_engine::render::TextureError;
use coupe_engine::scene::{Material, MeshInfo, TextureId, WrapMode};

/// Diffuse and specular file names, relative to the asset root.
pub const TEXTURE_FILES: [(&str, &str); 7] = [
    ("pavement.png", "pavement_specular.png"),
    ("TruePaintColor.png", "TruePaintColor_specular3.png"),
    ("tire_tread.png", "tire_tread_specular.png"),
    ("keyshot-materials-glitter-glass.png", "keyshot-materials-glitter-glass_specular.png"),
    ("FrontNose_1.png", "FrontNose_specular.png"),
    ("BackSide.png", "BackSide_specular.png"),
    ("theSide.png", "theSide_specular.png"),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TexturePair {
    pub diffuse: TextureId,
    pub specular: TextureId,
}

impl TexturePair {
    pub const fn material(self, wrap: WrapMode) -> Material {
        Material::new(self.diffuse, self.specular, wrap)
    }
}

/// Texture pairs in `TEXTURE_FILES` order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SceneTextures {
    pub pavement: TexturePair,
    pub paint: TexturePair,
    pub tread: TexturePair,
    pub glass: TexturePair,
    pub front_nose: TexturePair,
    pub back_side: TexturePair,
    pub side: TexturePair,
}

impl SceneTextures {
    /// Loads every pair under `root` through `load`, stopping at the first failure.
    pub fn load<F>(root: &Path, mut load: F) -> Result<Self, TextureError>
    where
        F: FnMut(&Path) -> Result<TextureId, TextureError>,
    {
        let mut pair = |row: usize| -> Result<TexturePair, TextureError> {
            let (diffuse, specular) = TEXTURE_FILES[row];
            Ok(TexturePair {
                diffuse: load(&root.join(diffuse))?,
                specular: load(&root.join(specular))?,
            })
        };

        // Field initializers run in order, so ids follow the table.
        Ok(Self {
            pavement: pair(0)?,
            paint: pair(1)?,
            tread: pair(2)?,
            glass: pair(3)?,
            front_nose: pair(4)?,
            back_side: pair(5)?,
            side: pair(6)?,
        })
    }

    /// Logs whether each texture file exists, then fails naming every
    /// missing one.
    pub fn check_files(root: &Path) -> Result<(), TextureError> {
        let missing: Vec<PathBuf> = Self::paths(root)
            .into_iter()
            .filter(|path| {
                let found = path.is_file();
                if found {
                    log::info!("texture {} found", path.display());
                } else {
                    log::error!("texture {} missing", path.display());
                }
                !found
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TextureError::MissingFiles(missing))
        }
    }

    /// Every file `load` will ask for, in order.
    pub fn paths(root: &Path) -> Vec<PathBuf> {
        TEXTURE_FILES
            .iter()
            .flat_map(|(d, s)| [root.join(d), root.join(s)])
            .collect()
    }
}

/// Meshes generated once at startup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneMeshes {
    pub plane: MeshInfo,
    pub wing: MeshInfo,
    pub tire: MeshInfo,
    pub rim: MeshInfo,
    pub hub: MeshInfo,
    pub spoke: MeshInfo,
    pub body: MeshInfo,
    pub front_well: MeshInfo,
    pub rear_well: MeshInfo,
    pub side_panel: MeshInfo,
    pub cab: MeshInfo,
    pub roof: MeshInfo,
}

const TIRE: TorusParams = TorusParams {
    tube_radius: 10.0,
    ring_radius: 30.0,
    ring_segments: 30,
    tube_segments: 36,
    scale: 2.0,
};

const RIM: TorusParams = TorusParams { ring_radius: 28.0, ..TIRE };

impl SceneMeshes {
    /// Generates every mesh and hands it to `upload` with a debug label.
    pub fn build<F>(mut upload: F) -> Self
    where
        F: FnMut(&str, MeshData) -> MeshInfo,
    {
        Self {
            plane: upload("plane", plane()),
            wing: upload("wing", wing()),
            tire: upload("tire", torus(TIRE)),
            rim: upload("rim", torus(RIM)),
            hub: upload("hub", cylinder(10.0, 11.0)),
            spoke: upload("spoke", rectangle(4.0, 50.0)),
            body: upload("body", rectangle(4.0, 11.2)),
            front_well: upload("front well", cylinder(10.0, 18.0)),
            rear_well: upload("rear well", cylinder(10.0, 18.0)),
            side_panel: upload("side panel", cylinder(15.0, 14.5)),
            cab: upload("cab", cube()),
            roof: upload("roof", pyramid()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneAssets {
    pub meshes: SceneMeshes,
    pub textures: SceneTextures,
}

#[cfg(test)]
pub(crate) mod tests {
    use coupe_engine::scene::MeshId;

    use super::*;

    /// Assets with sequential ids and the real vertex counts, no GPU involved.
    pub(crate) fn fake_assets() -> SceneAssets {
        let mut next_mesh = 0;
        let meshes = SceneMeshes::build(|_, data| {
            let info = MeshInfo { id: MeshId::new(next_mesh), counts: data.counts };
            next_mesh += 1;
            info
        });

        let mut next_texture = 0;
        let textures = SceneTextures::load(Path::new("assets"), |_| {
            next_texture += 1;
            Ok(TextureId::new(next_texture - 1))
        })
        .unwrap();

        SceneAssets { meshes, textures }
    }

    #[test]
    fn textures_load_in_table_order() {
        let assets = fake_assets();
        assert_eq!(assets.textures.pavement, TexturePair { diffuse: TextureId::new(0), specular: TextureId::new(1) });
        assert_eq!(assets.textures.side.specular, TextureId::new(13));
    }

    #[test]
    fn first_missing_texture_stops_loading() {
        let mut calls = 0;
        let err = SceneTextures::load(Path::new("assets"), |path| {
            calls += 1;
            if calls == 3 {
                return Err(TextureError::Missing(path.to_path_buf()));
            }
            Ok(TextureId::new(calls))
        })
        .unwrap_err();

        assert!(matches!(err, TextureError::Missing(p) if p.ends_with("TruePaintColor.png")));
        assert_eq!(calls, 3);
    }

    #[test]
    fn check_files_reports_every_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        for (diffuse, _) in TEXTURE_FILES {
            std::fs::write(dir.path().join(diffuse), b"").unwrap();
        }

        let err = SceneTextures::check_files(dir.path()).unwrap_err();
        let TextureError::MissingFiles(missing) = &err else {
            panic!("unexpected error {err}");
        };
        assert_eq!(missing.len(), 7);
        assert_eq!(missing[0], dir.path().join("pavement_specular.png"));
        assert_eq!(missing[6], dir.path().join("theSide_specular.png"));
        assert!(err.to_string().starts_with("7 texture files missing"));
    }

    #[test]
    fn check_files_passes_when_all_present() {
        let dir = tempfile::tempdir().unwrap();
        for path in SceneTextures::paths(dir.path()) {
            std::fs::write(path, b"").unwrap();
        }
        assert!(SceneTextures::check_files(dir.path()).is_ok());
    }

    #[test]
    fn fourteen_texture_paths() {
        let paths = SceneTextures::paths(Path::new("Resources/Textures"));
        assert_eq!(paths.len(), 14);
        assert_eq!(paths[13], Path::new("Resources/Textures/theSide_specular.png"));
    }

    #[test]
    fn mesh_counts_follow_generators() {
        let meshes = fake_assets().meshes;
        assert_eq!(meshes.tire.total(), 2220);
        assert_eq!(meshes.cab.total(), 36);
        // 64 segments: 130 side, 66 per cap.
        assert_eq!(meshes.hub.counts.side, 130);
        assert_eq!(meshes.hub.counts.top, 66);
        // Square prism: 10 side, 6 per cap.
        assert_eq!(meshes.spoke.counts.side, 10);
        assert_eq!(meshes.spoke.counts.bottom, 6);
    }
}
