use winit::window::Window;

use crate::coords::{ColorRgba, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Everything [`App::on_frame`](super::App::on_frame) may touch for one redraw.
///
/// `'a` is the callback; `'w` is how long the GPU surface borrows the window.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub runtime: &'a mut RuntimeCtx,
}

impl FrameCtx<'_, '_> {
    /// Window size in logical pixels.
    pub fn viewport(&self) -> Viewport {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        Viewport::new(size.width as f32, size.height as f32)
    }

    /// Clears to `background`, lets `draw` record its passes, then presents.
    ///
    /// A lost or outdated surface skips the frame; running out of GPU memory
    /// returns `Exit`.
    pub fn render<F>(&mut self, background: ColorRgba, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.viewport();

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.recover(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        AppControl::Continue
                    }
                };
            }
        };

        frame.clear(background.to_wgpu());

        let rctx = RenderCtx {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
            viewport,
        };
        draw(
            &rctx,
            &mut RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            },
        );

        self.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
