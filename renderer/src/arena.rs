//====================================================================

use common::Size;

use crate::{
    shared::{
        SharedRenderResources, TextureRectVertex, Vertex, FULLSCREEN_RECT_VERTICES,
        TEXTURE_RECT_INDEX_COUNT, TEXTURE_RECT_INDICES,
    },
    texture::Texture,
    tools, RendererCore,
};

//====================================================================

/// Offscreen texture holding the arena at its logical resolution.
pub(crate) struct ArenaTarget {
    texture: Texture,
    bind_group: wgpu::BindGroup,
}

impl ArenaTarget {
    pub fn new(core: &RendererCore, shared: &SharedRenderResources, size: Size<u32>) -> Self {
        log::debug!("Creating arena render target {}x{}", size.width, size.height);

        let texture = Texture::create_render_target(
            core.device(),
            size,
            core.config().format,
            "Arena Texture",
        );

        let bind_group =
            shared.create_texture_bind_group(core.device(), &texture, Some("Arena Bind Group"));

        Self {
            texture,
            bind_group,
        }
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        self.texture.size()
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.texture.view
    }
}

//====================================================================

/// Copies the arena target onto the window surface.
pub(crate) struct BlitPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl BlitPipeline {
    pub fn new(core: &RendererCore, shared: &SharedRenderResources) -> Self {
        let pipeline = tools::create_pipeline(
            core.device(),
            core.config(),
            "Arena Blit Pipeline",
            &[shared.texture_bind_group_layout()],
            &[TextureRectVertex::desc()],
            include_str!("shaders/blit.wgsl"),
        );

        let vertex_buffer = tools::buffer(
            core.device(),
            tools::BufferType::Vertex,
            "Arena Blit",
            &FULLSCREEN_RECT_VERTICES,
        );

        let index_buffer = tools::buffer(
            core.device(),
            tools::BufferType::Index,
            "Arena Blit",
            &TEXTURE_RECT_INDICES,
        );

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
        }
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass, target: &ArenaTarget) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &target.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..TEXTURE_RECT_INDEX_COUNT, 0, 0..1);
    }
}

//====================================================================
