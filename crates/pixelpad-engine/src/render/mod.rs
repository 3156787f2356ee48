//! GPU drawing.
//!
//! Renderers own their shader, pipeline and buffers, and record into a
//! [`RenderTarget`] during [`FrameCtx::render`](crate::core::FrameCtx::render).
//!
//! Plane geometry is given in plane-local NDC (`[-1, 1]`, +Y up). The vertex
//! shader places the plane on screen from a [`PlanePlacement`] and the
//! viewport in [`RenderCtx`].

pub mod triangles;

use crate::coords::Viewport;

pub use triangles::{PlanePlacement, TriangleBatchRenderer};

/// Shared handles a renderer needs while recording one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical window size.
    pub viewport: Viewport,
}

/// Where a renderer records its passes: the frame's encoder and color view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl RenderTarget<'_> {
    /// Begins a pass that draws over what earlier passes left in the image.
    pub fn overlay_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
