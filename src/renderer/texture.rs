use image::RgbaImage;
use wgpu::util::DeviceExt;

use crate::tileset::Tileset;

/// One uploaded image plus the bind group that samples it.
pub struct GpuTexture {
    texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

impl GpuTexture {
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        img: &RgbaImage,
        label: &str,
    ) -> Self {
        let (width, height) = img.dimensions();
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            img.as_raw(),
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self { texture, bind_group, width, height }
    }

    pub fn size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32, self.height as f32)
    }

    fn destroy(&self) {
        self.texture.destroy();
    }
}

/// Nearest-neighbour sampler shared by every sprite texture.
pub fn pixel_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("pixel_sampler"),
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

/// GPU copies of every tile in a `Tileset`, same order, one texture each.
///
/// The textures are destroyed exactly once, when this value is dropped.
pub struct GpuTileset {
    tiles: Vec<GpuTexture>,
}

impl GpuTileset {
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        tileset: &Tileset,
    ) -> Self {
        let tiles = tileset
            .tiles()
            .iter()
            .enumerate()
            .map(|(i, img)| GpuTexture::from_image(device, queue, layout, sampler, img, &format!("tile_{i}")))
            .collect();
        Self { tiles }
    }

    pub fn get(&self, index: usize) -> Option<&GpuTexture> {
        self.tiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Release the textures now rather than at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for GpuTileset {
    fn drop(&mut self) {
        for tile in &self.tiles {
            tile.destroy();
        }
        log::debug!("released {} tile textures", self.tiles.len());
    }
}
