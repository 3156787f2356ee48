use winit::dpi::PhysicalSize;

/// Next step for the frame loop after a failed acquire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering resumes next frame.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Out of memory. The app should exit.
    Fatal,
}

/// One acquired swapchain image with its encoder.
///
/// Holding it blocks the next acquire, so it lives for one frame only.
pub struct Frame {
    pub(super) texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl Frame {
    /// Records a pass that clears the whole image to `color`.
    pub fn clear(&mut self, color: wgpu::Color) {
        let _pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("pixelpad clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
}

/// Window surface plus the configuration it was last set up with.
pub(super) struct WindowSurface<'w> {
    pub(super) surface: wgpu::Surface<'w>,
    pub(super) config: wgpu::SurfaceConfiguration,
    /// Physical size; may be zero while minimized.
    pub(super) size: PhysicalSize<u32>,
}

impl<'w> WindowSurface<'w> {
    fn is_drawable(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }

    /// Records `new_size`; reconfigures only when it is drawable.
    pub(super) fn resize(&mut self, device: &wgpu::Device, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if !self.is_drawable() {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(device, &self.config);
    }

    pub(super) fn recover(&self, device: &wgpu::Device, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                if self.is_drawable() {
                    self.surface.configure(device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
                log::debug!("surface error {err:?}; frame skipped");
                SurfaceErrorAction::SkipFrame
            }
        }
    }
}

/// First sRGB format when preferred and offered, else the platform's first.
pub(super) fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let srgb = formats.iter().copied().find(|f| f.is_srgb());
    match srgb {
        Some(f) if prefer_srgb => Some(f),
        _ => formats.first().copied(),
    }
}

/// The requested mode if supported, else the platform's first, else `Auto`.
pub(super) fn pick_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
