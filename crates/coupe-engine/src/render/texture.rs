use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use thiserror::Error;

use crate::scene::{TextureId, WrapMode};

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("{} texture files missing: {}", .0.len(), join_paths(.0))]
    MissingFiles(Vec<PathBuf>),

    #[error("failed to decode texture {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Decoded RGBA pixels with a full CPU-built mip chain, level 0 first.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub label: String,
    pub levels: Vec<RgbaImage>,
}

impl TextureImage {
    pub fn width(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.width())
    }

    pub fn height(&self) -> u32 {
        self.levels.first().map_or(0, |l| l.height())
    }
}

/// Levels needed to reach 1x1 by halving.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Flips rows so v = 0 is the bottom of the image, converts to RGBA and
/// builds the mip chain.
///
/// Images that are neither RGB nor RGBA are converted anyway, with a warning.
pub fn prepare_image(img: DynamicImage, label: &str) -> TextureImage {
    let channels = img.color().channel_count();
    if !matches!(channels, 3 | 4) {
        log::warn!("texture `{label}`: {channels}-channel image, converting to RGBA");
    }

    let base = img.flipv().into_rgba8();
    let count = mip_level_count(base.width(), base.height());

    let mut levels = Vec::with_capacity(count as usize);
    levels.push(base);
    for _ in 1..count {
        let Some(prev) = levels.last() else { break };
        let (w, h) = ((prev.width() / 2).max(1), (prev.height() / 2).max(1));
        let next = imageops::resize(prev, w, h, FilterType::Triangle);
        levels.push(next);
    }

    TextureImage { label: label.to_string(), levels }
}

/// Checks that `path` exists, then decodes it.
pub fn open_image(path: &Path) -> Result<DynamicImage, TextureError> {
    if !path.is_file() {
        return Err(TextureError::Missing(path.to_path_buf()));
    }
    log::info!("loading texture {}", path.display());

    image::open(path).map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Sampled GPU texture (sRGB, mipmapped).
pub struct Texture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl Texture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &TextureImage) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(image.label.as_str()),
            size: wgpu::Extent3d {
                width: image.width().max(1),
                height: image.height().max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: image.levels.len().max(1) as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (level, pixels) in image.levels.iter().enumerate() {
            let (w, h) = pixels.dimensions();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                pixels.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn destroy(&self) {
        self.texture.destroy();
    }
}

/// Textures by id plus one linear/mipmapped sampler per wrap mode.
pub struct TextureStore {
    textures: Vec<Texture>,
    samplers: HashMap<WrapMode, wgpu::Sampler>,
}

impl TextureStore {
    pub fn new(device: &wgpu::Device) -> Self {
        let samplers = [WrapMode::Repeat, WrapMode::MirroredRepeat, WrapMode::ClampToEdge]
            .into_iter()
            .map(|wrap| {
                let mode = wrap.address_mode();
                let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
                    label: Some("coupe material sampler"),
                    address_mode_u: mode,
                    address_mode_v: mode,
                    address_mode_w: mode,
                    mag_filter: wgpu::FilterMode::Linear,
                    min_filter: wgpu::FilterMode::Linear,
                    mipmap_filter: wgpu::MipmapFilterMode::Linear,
                    ..Default::default()
                });
                (wrap, sampler)
            })
            .collect();

        Self { textures: Vec::new(), samplers }
    }

    /// Decodes and uploads the image at `path`.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<TextureId, TextureError> {
        let img = open_image(path)?;

        let label = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let prepared = prepare_image(img, &label);
        log::debug!(
            "texture `{label}`: {}x{}, {} mip levels",
            prepared.width(),
            prepared.height(),
            prepared.levels.len()
        );

        Ok(self.insert(Texture::upload(device, queue, &prepared)))
    }

    pub fn insert(&mut self, texture: Texture) -> TextureId {
        let id = TextureId::new(self.textures.len() as u32);
        self.textures.push(texture);
        id
    }

    pub fn view(&self, id: TextureId) -> Option<&wgpu::TextureView> {
        self.textures.get(id.raw() as usize).map(Texture::view)
    }

    pub fn sampler(&self, wrap: WrapMode) -> Option<&wgpu::Sampler> {
        self.samplers.get(&wrap)
    }

    pub fn destroy_all(&mut self) {
        for texture in self.textures.drain(..) {
            texture.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgba};

    use super::*;

    #[test]
    fn mip_counts() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(4, 2), 3);
        assert_eq!(mip_level_count(1024, 512), 11);
        assert_eq!(mip_level_count(0, 0), 1);
    }

    #[test]
    fn prepared_image_is_flipped_with_full_chain() {
        let mut img = RgbaImage::new(4, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));

        let prepared = prepare_image(DynamicImage::ImageRgba8(img), "test");
        let sizes: Vec<_> = prepared.levels.iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(4, 2), (2, 1), (1, 1)]);

        let base = &prepared.levels[0];
        assert_eq!(base.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
        assert_eq!(base.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn single_channel_images_become_rgba() {
        let gray = GrayImage::from_pixel(2, 2, Luma([128]));
        let prepared = prepare_image(DynamicImage::ImageLuma8(gray), "gray");
        assert_eq!(prepared.levels[0].get_pixel(1, 1), &Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn missing_file_is_reported_before_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.png");

        let err = open_image(&path).unwrap_err();
        assert!(matches!(&err, TextureError::Missing(p) if p == &path));
        assert!(err.to_string().contains("none.png"));
    }

    #[test]
    fn undecodable_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png at all").unwrap();

        let err = open_image(&path).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
    }

    #[test]
    fn valid_png_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255])).save(&path).unwrap();

        let img = open_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
    }
}
