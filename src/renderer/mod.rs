pub mod pipeline;
pub mod texture;

use std::ops::Range;
use std::sync::Arc;

use image::RgbaImage;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use pipeline::{SpritePipeline, SpriteVertex, create_sprite_pipeline, quad_vertices};
use texture::{GpuTexture, GpuTileset, pixel_sampler};

use crate::camera::CameraUniform;
use crate::error::RenderError;
use crate::frame::{FrameBatch, Sprite, TextureKey};
use crate::tileset::Tileset;

/// Clear colour behind the background (off-white).
const CLEAR_COLOR: wgpu::Color = wgpu::Color { r: 0.96, g: 0.96, b: 0.96, a: 1.0 };

pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: SpritePipeline,
    /// Static orthographic projection (no camera), used by the background and overlay.
    screen_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
    /// Camera view-projection buffer, used by the world layer.
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    tiles: GpuTileset,
    background: GpuTexture,
}

/// A contiguous run of vertices drawn with one texture.
struct DrawRange<'a> {
    bind_group: &'a wgpu::BindGroup,
    vertices: Range<u32>,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        tileset: &Tileset,
        background: &RgbaImage,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_sprite_pipeline(&device, format);

        let screen_uniform = CameraUniform::identity_ortho(config.width as f32, config.height as f32);
        let screen_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("screen_projection_buffer"),
            contents: bytemuck::cast_slice(&[screen_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("screen_projection_bg"),
            layout: &pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        // Same matrix until the first update_camera call.
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera_buffer"),
            contents: bytemuck::cast_slice(&[screen_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &pipeline.projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let sampler = pixel_sampler(&device);
        let tiles = GpuTileset::upload(
            &device,
            &queue,
            &pipeline.texture_bind_group_layout,
            &sampler,
            tileset,
        );
        let background = GpuTexture::from_image(
            &device,
            &queue,
            &pipeline.texture_bind_group_layout,
            &sampler,
            background,
            "background",
        );
        log::info!("uploaded {} tile textures and background", tiles.len());

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            screen_buffer,
            screen_bind_group,
            camera_buffer,
            camera_bind_group,
            tiles,
            background,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        log::debug!("resizing surface to {}x{}", new_size.width, new_size.height);
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let uniform = CameraUniform::identity_ortho(new_size.width as f32, new_size.height as f32);
        self.queue
            .write_buffer(&self.screen_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Upload a new camera view-projection matrix to the GPU.
    /// Call once per frame before `render`.
    pub fn update_camera(&mut self, uniform: &CameraUniform) {
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(std::slice::from_ref(uniform)),
        );
    }

    fn texture(&self, key: TextureKey) -> Option<&GpuTexture> {
        match key {
            TextureKey::Tile(i) => self.tiles.get(i),
            TextureKey::Background => Some(&self.background),
        }
    }

    /// Append quads for `sprites` to `verts`, one draw range per sprite.
    /// Sprites whose texture does not exist are skipped.
    fn build_layer<'a>(
        &'a self,
        sprites: &[Sprite],
        verts: &mut Vec<SpriteVertex>,
    ) -> Vec<DrawRange<'a>> {
        let mut ranges = Vec::with_capacity(sprites.len());
        for sprite in sprites {
            let Some(tex) = self.texture(sprite.texture) else { continue };
            let start = verts.len() as u32;
            verts.extend_from_slice(&quad_vertices(sprite.position, tex.size()));
            ranges.push(DrawRange {
                bind_group: &tex.bind_group,
                vertices: start..verts.len() as u32,
            });
        }
        ranges
    }

    /// Render one frame.
    ///
    /// Draw order within the single render pass:
    /// 1. `batch.background`: screen projection
    /// 2. `batch.world`: camera projection
    /// 3. `batch.overlay`: screen projection
    pub fn render(&mut self, batch: &FrameBatch) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut verts = Vec::new();
        let layers = [
            (&self.screen_bind_group, self.build_layer(&batch.background, &mut verts)),
            (&self.camera_bind_group, self.build_layer(&batch.world, &mut verts)),
            (&self.screen_bind_group, self.build_layer(&batch.overlay, &mut verts)),
        ];

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !verts.is_empty() {
                let vbuf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite_vertex_buffer"),
                    contents: bytemuck::cast_slice(&verts),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                pass.set_pipeline(&self.pipeline.render_pipeline);
                pass.set_vertex_buffer(0, vbuf.slice(..));

                for (projection, ranges) in &layers {
                    if ranges.is_empty() {
                        continue;
                    }
                    pass.set_bind_group(0, *projection, &[]);
                    for range in ranges {
                        pass.set_bind_group(1, range.bind_group, &[]);
                        pass.draw(range.vertices.clone(), 0..1);
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
