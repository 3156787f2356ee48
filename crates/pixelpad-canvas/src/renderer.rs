//! GPU half of the canvas render pipeline.

use anyhow::Result;
use pixelpad_engine::coords::ColorRgba;
use pixelpad_engine::render::{PlanePlacement, RenderCtx, RenderTarget, TriangleBatchRenderer};

use crate::grid::PixelGrid;
use crate::mesh::PixelMesh;

/// Draws a [`PixelGrid`] as one batch of colored quads over a white backdrop.
///
/// [`rebuild`](Self::rebuild) regenerates the mesh on the CPU after a grid
/// mutation; the next [`render`](Self::render) uploads it, replacing the
/// previous buffer contents.
pub struct CanvasRenderer {
    batch: TriangleBatchRenderer,
    mesh: PixelMesh,
    upload_pending: bool,
}

impl CanvasRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        let batch = TriangleBatchRenderer::new(device, surface_format, ColorRgba::WHITE)?;
        Ok(Self {
            batch,
            mesh: PixelMesh::new(),
            upload_pending: false,
        })
    }

    /// Regenerates every quad from `grid`. O(width * height).
    pub fn rebuild(&mut self, grid: &PixelGrid) {
        self.mesh.rebuild(grid);
        self.upload_pending = true;
        log::debug!("canvas mesh rebuilt: {} quads", self.mesh.quad_count());
    }

    pub fn mesh(&self) -> &PixelMesh {
        &self.mesh
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.batch.surface_format()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, placement: PlanePlacement) {
        if self.upload_pending {
            self.batch
                .submit(ctx.device, ctx.queue, self.mesh.positions(), self.mesh.colors());
            self.upload_pending = false;
        }
        self.batch.render(ctx, target, placement);
    }
}
