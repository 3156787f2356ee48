use pixelpad_canvas::{CanvasRenderer, CanvasSession, ContactId, PointerSample, Response};
use pixelpad_engine::coords::{ColorRgba, Vec2};
use pixelpad_engine::core::{App, AppControl, FrameCtx};
use pixelpad_engine::input::{InputEvent, Key, KeyState, MouseButton, TouchPhase};

use crate::palette;

/// Window background around the canvas.
const BACKGROUND: ColorRgba = ColorRgba::from_rgb8(241, 245, 249);

/// Host of one canvas session: feeds it window input and draws it every frame.
pub struct StudioApp {
    session: CanvasSession,
    /// Created on the first frame, once a device exists.
    renderer: Option<CanvasRenderer>,
    mesh_dirty: bool,
    title_dirty: bool,
    mouse_dragging: bool,
}

impl StudioApp {
    pub fn new(session: CanvasSession) -> Self {
        Self {
            session,
            renderer: None,
            mesh_dirty: true,
            title_dirty: true,
            mouse_dragging: false,
        }
    }

    /// Routes one input event. Returns `Exit` on Escape.
    fn handle_event(&mut self, event: &InputEvent) -> AppControl {
        let response = match *event {
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false, .. } => {
                return self.handle_key(key);
            }

            InputEvent::PointerButton { button: MouseButton::Left, pressed, position } => {
                let sample = PointerSample::mouse(position);
                self.mouse_dragging = pressed;
                if pressed {
                    self.session.pointer_down(sample)
                } else {
                    self.session.pointer_up(sample)
                }
            }

            InputEvent::PointerMoved { position } if self.mouse_dragging => {
                self.session.pointer_move(PointerSample::mouse(position))
            }

            InputEvent::Focused(false) if self.mouse_dragging => {
                self.mouse_dragging = false;
                let at = self
                    .session
                    .contacts()
                    .get(ContactId::MOUSE)
                    .map_or(Vec2::zero(), |c| c.position);
                self.session.pointer_cancel(PointerSample::mouse(at))
            }

            InputEvent::Touch { id, phase, position } => {
                self.handle_touch(phase, PointerSample::touch(id, position))
            }

            _ => Response::NONE,
        };

        self.absorb(response);
        AppControl::Continue
    }

    fn handle_touch(&mut self, phase: TouchPhase, sample: PointerSample) -> Response {
        match phase {
            TouchPhase::Started => self.session.pointer_down(sample),
            TouchPhase::Moved => self.session.pointer_move(sample),
            TouchPhase::Ended => self.session.pointer_up(sample),
            TouchPhase::Cancelled => self.session.pointer_cancel(sample),
        }
    }

    fn handle_key(&mut self, key: Key) -> AppControl {
        match key {
            Key::Escape => return AppControl::Exit,
            Key::Delete => {
                let r = self.session.reset_grid();
                self.absorb(r);
            }
            _ => {
                if let Some(color) = palette::color_for_key(key) {
                    log::debug!("color: {color:?}");
                    self.session.set_color(color);
                    self.title_dirty = true;
                } else {
                    let r = self.session.key_press(key);
                    self.absorb(r);
                }
            }
        }
        AppControl::Continue
    }

    fn absorb(&mut self, r: Response) {
        self.mesh_dirty |= r.grid_changed;
        self.title_dirty |= r.tool_changed;
    }

    fn title(&self) -> String {
        let c = self.session.color();
        format!(
            "pixelpad - {} - #{:02x}{:02x}{:02x}{:02x}",
            self.session.tool(),
            c.r,
            c.g,
            c.b,
            c.a
        )
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.session.set_viewport(ctx.viewport());

        for event in ctx.input_frame.iter() {
            if self.handle_event(event) == AppControl::Exit {
                return AppControl::Exit;
            }
        }
        let r = self.session.end_frame();
        self.absorb(r);

        if self.title_dirty {
            ctx.runtime.set_title(self.title());
            self.title_dirty = false;
        }

        if self.renderer.is_none() {
            match CanvasRenderer::new(ctx.gpu.device(), ctx.gpu.surface_format()) {
                Ok(r) => self.renderer = Some(r),
                Err(err) => {
                    log::error!("canvas renderer unavailable: {err:#}");
                    return AppControl::Exit;
                }
            }
        }
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Exit;
        };

        if self.mesh_dirty {
            renderer.rebuild(self.session.grid());
            self.mesh_dirty = false;
        }

        let placement = self.session.placement();
        ctx.render(BACKGROUND, |rctx, target| {
            renderer.render(rctx, target, placement);
        })
    }
}
