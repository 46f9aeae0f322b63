//====================================================================

use arena::{ArenaTarget, BlitPipeline};
use common::{Color, Size, Viewport};
use shared::SharedRenderResources;
use wgpu::SurfaceTarget;

mod arena;
pub mod screen;
pub mod shared;
pub mod texture;
pub mod tools;

pub use screen::Screen;

//====================================================================

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("failed to create window surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter found")]
    NoAdapter,

    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("window surface reports no supported formats")]
    UnsupportedSurface,
}

#[inline]
fn to_wgpu_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

//====================================================================

pub struct RendererState {
    core: RendererCore,
    shared_resources: SharedRenderResources,
    blit: BlitPipeline,
    arena: Option<ArenaTarget>,

    /// Arena color when the frame was not filled.
    pub clear_color: Color,
    /// Color of the bars around the letterboxed arena.
    pub letterbox_color: Color,
}

impl RendererState {
    pub fn new(
        window: impl Into<SurfaceTarget<'static>>,
        window_size: Size<u32>,
    ) -> Result<Self, RendererError> {
        let core = pollster::block_on(RendererCore::new(window, window_size))?;
        let shared_resources = SharedRenderResources::new(&core.device);
        let blit = BlitPipeline::new(&core, &shared_resources);

        Ok(Self {
            core,
            shared_resources,
            blit,
            arena: None,
            clear_color: Color::BLACK,
            letterbox_color: Color::BLACK,
        })
    }

    pub fn resize(&mut self, new_size: Size<u32>) {
        self.core.config.width = new_size.width.max(1);
        self.core.config.height = new_size.height.max(1);
        self.core
            .surface
            .configure(&self.core.device, &self.core.config);
    }

    #[inline]
    pub fn surface_size(&self) -> Size<u32> {
        Size::new(self.core.config.width, self.core.config.height)
    }

    pub fn render(&mut self, screen: &Screen) {
        let arena_size = screen.size();
        if arena_size.is_empty() {
            log::warn!("Arena has no area - skipping frame");
            return;
        }

        // Get and check surface
        let surface_texture = match self.core.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated - reconfiguring");
                self.core
                    .surface
                    .configure(&self.core.device, &self.core.config);
                return;
            }
            Err(e) => {
                log::warn!("Unable to get surface texture - skipping frame: {}", e);
                return;
            }
        };

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if !matches!(&self.arena, Some(arena) if arena.size() == arena_size) {
            self.arena = Some(ArenaTarget::new(
                &self.core,
                &self.shared_resources,
                arena_size,
            ));
        }

        let Some(arena) = &self.arena else {
            return;
        };

        let viewport = Viewport::letterbox(arena_size, self.surface_size());
        let clear_color = screen.clear_color().unwrap_or(self.clear_color);

        let mut encoder = self
            .core
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        // Arena pass
        let arena_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Arena Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: arena.view(),
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(to_wgpu_color(clear_color)),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        std::mem::drop(arena_pass);

        // Present pass
        let mut present_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Present Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(to_wgpu_color(self.letterbox_color)),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !viewport.is_empty() {
            present_pass.set_viewport(
                viewport.x,
                viewport.y,
                viewport.width,
                viewport.height,
                0.,
                1.,
            );
            self.blit.render(&mut present_pass, arena);
        }

        std::mem::drop(present_pass);

        // Finish and submit
        self.core.queue.submit(Some(encoder.finish()));
        surface_texture.present();
    }
}

//====================================================================

pub struct RendererCore {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl RendererCore {
    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    #[inline]
    pub fn config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }
}

impl RendererCore {
    pub async fn new(
        window: impl Into<SurfaceTarget<'static>>,
        window_size: Size<u32>,
    ) -> Result<Self, RendererError> {
        log::debug!("Creating core wgpu renderer components.");

        log::debug!("Window inner size = {:?}", window_size);

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(RendererError::NoAdapter)?;

        log::debug!("Chosen device adapter: {:#?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);

        let surface_format = surface_capabilities
            .formats
            .iter()
            .find(|format| format.is_srgb())
            .copied()
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(RendererError::UnsupportedSurface)?;

        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: window_size.width.max(1),
            height: window_size.height.max(1),
            present_mode: wgpu::PresentMode::AutoNoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };

        surface.configure(&device, &config);

        log::debug!("Successfully created core wgpu components.");

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }
}

//====================================================================


//====================================================================
