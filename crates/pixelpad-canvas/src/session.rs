//! Input dispatcher and owner of all canvas state.
//!
//! A [`CanvasSession`] is the single context object handed to every input
//! handler: grid, view transform, selected tool, current color and tracked
//! contacts all live here. Handlers run to completion and report what changed
//! through a [`Response`], so the host knows when to rebuild the mesh.
//!
//! Two-contact gestures are classified once per frame: the host feeds every
//! event of a frame, then calls [`CanvasSession::end_frame`].

use pixelpad_engine::coords::{Rect, Vec2, Viewport};
use pixelpad_engine::input::Key;
use pixelpad_engine::render::PlanePlacement;

use crate::config::{CanvasConfig, ConfigError};
use crate::contacts::{ContactId, ContactTable};
use crate::gesture::GestureResult;
use crate::grid::{GridPos, PixelGrid};
use crate::mapper::{canvas_bounds, screen_to_grid};
use crate::pixel::Pixel;
use crate::tool::Tool;
use crate::view::ViewTransform;

/// Source device of a pointer sample.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// One pointer event in client coordinates (logical px).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub id: ContactId,
    pub kind: PointerKind,
    pub position: Vec2,
}

impl PointerSample {
    pub fn mouse(position: Vec2) -> Self {
        Self { id: ContactId::MOUSE, kind: PointerKind::Mouse, position }
    }

    pub fn touch(id: u64, position: Vec2) -> Self {
        Self { id: ContactId(id), kind: PointerKind::Touch, position }
    }
}

/// What a handler changed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Response {
    /// Grid contents changed; the mesh must be rebuilt.
    pub grid_changed: bool,
    pub view_changed: bool,
    pub tool_changed: bool,
}

impl Response {
    pub const NONE: Response = Response {
        grid_changed: false,
        view_changed: false,
        tool_changed: false,
    };

    fn grid(changed: bool) -> Self {
        Self { grid_changed: changed, ..Self::NONE }
    }

    fn view(changed: bool) -> Self {
        Self { view_changed: changed, ..Self::NONE }
    }

    pub fn any(self) -> bool {
        self.grid_changed || self.view_changed || self.tool_changed
    }
}

/// State of the active drag.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Drag {
    start: Vec2,
    tool: Tool,
    /// Cell painted by the previous move of this drag.
    last_cell: Option<GridPos>,
}

pub struct CanvasSession {
    config: CanvasConfig,
    grid: PixelGrid,
    view: ViewTransform,
    tool: Tool,
    color: Pixel,
    contacts: ContactTable,
    drag: Option<Drag>,
    /// Pan offset at the end of the last drag; Move-tool drags start here.
    pan_baseline: Vec2,
    viewport: Viewport,
    /// A touch move with exactly two contacts arrived this frame.
    gesture_pending: bool,
}

impl CanvasSession {
    pub fn new(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = PixelGrid::new(config.width, config.height);
        let view = ViewTransform::new(config.initial_scale);
        let viewport = Viewport::new(config.display_size.x, config.display_size.y);
        Ok(Self {
            config,
            grid,
            view,
            tool: Tool::default(),
            color: Pixel::BLACK,
            contacts: ContactTable::new(),
            drag: None,
            pan_baseline: Vec2::zero(),
            viewport,
            gesture_pending: false,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Pixel {
        self.color
    }

    pub fn contacts(&self) -> &ContactTable {
        &self.contacts
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ── external state ────────────────────────────────────────────────────

    pub fn set_tool(&mut self, tool: Tool) -> Response {
        if tool == self.tool {
            return Response::NONE;
        }
        log::debug!("tool: {} -> {}", self.tool, tool);
        self.tool = tool;
        Response { tool_changed: true, ..Response::NONE }
    }

    pub fn set_color(&mut self, color: Pixel) {
        self.color = color;
    }

    /// Window size the canvas is centered in.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Tool shortcuts. Other keys are ignored.
    pub fn key_press(&mut self, key: Key) -> Response {
        match Tool::from_key(key) {
            Some(tool) => self.set_tool(tool),
            None => Response::NONE,
        }
    }

    /// Replaces the grid with an empty one of the same size.
    pub fn reset_grid(&mut self) -> Response {
        let had_paint = self.grid.painted_count() > 0;
        self.grid = PixelGrid::new(self.config.width, self.config.height);
        if let Some(drag) = self.drag.as_mut() {
            drag.last_cell = None;
        }
        Response::grid(had_paint)
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// On-screen bounding rectangle of the canvas.
    pub fn bounds(&self) -> Rect {
        canvas_bounds(&self.view, self.viewport, self.config.display_size)
    }

    /// Grid cell under a client-space point; may be out of bounds.
    pub fn screen_to_grid(&self, client: Vec2) -> GridPos {
        screen_to_grid(
            client,
            self.bounds(),
            &self.view,
            self.config.display_size,
            (self.grid.width(), self.grid.height()),
        )
    }

    /// Where the renderer should place the canvas this frame.
    pub fn placement(&self) -> PlanePlacement {
        PlanePlacement {
            center: self.viewport.center() + self.view.offset,
            size: self.config.display_size,
            rotation_deg: self.view.rotation_deg,
            scale: self.view.scale,
        }
    }

    // ── pointer handlers ──────────────────────────────────────────────────

    /// Contact start: tracks the contact and begins a drag from its position.
    pub fn pointer_down(&mut self, sample: PointerSample) -> Response {
        self.contacts.insert(sample.id, sample.position);
        self.drag = Some(Drag {
            start: sample.position,
            tool: self.tool,
            last_cell: None,
        });
        Response::NONE
    }

    /// Contact move.
    ///
    /// With two or more contacts active the selected tool is suspended. Touch
    /// moves with exactly two contacts are deferred to
    /// [`end_frame`](Self::end_frame), which classifies them as one gesture.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Response {
        self.contacts.update(sample.id, sample.position);

        if self.contacts.len() >= 2 {
            if sample.kind == PointerKind::Touch && self.contacts.len() == 2 {
                self.gesture_pending = true;
            }
            return Response::NONE;
        }

        self.single_contact_move(sample.position)
    }

    /// Contact end: stops tracking it and ends the drag.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Response {
        self.contacts.remove(sample.id);
        self.end_drag();
        Response::NONE
    }

    /// Contact cancelled by the platform; same as [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self, sample: PointerSample) -> Response {
        self.pointer_up(sample)
    }

    /// Closes the current input frame.
    ///
    /// Applies the gesture of the two active contacts from the movement they
    /// accumulated over the frame, then starts a new frame.
    pub fn end_frame(&mut self) -> Response {
        let pending = std::mem::take(&mut self.gesture_pending);
        let response = if pending && self.contacts.len() == 2 {
            self.two_contact_move()
        } else {
            Response::NONE
        };
        self.contacts.end_frame();
        response
    }

    fn end_drag(&mut self) {
        self.drag = None;
        self.pan_baseline = self.view.offset;
    }

    fn two_contact_move(&mut self) -> Response {
        let Some((a, b)) = self.contacts.first_two() else {
            return Response::NONE;
        };

        let GestureResult { gesture, .. } = self.config.thresholds.classify(
            a.position.midpoint(b.position),
            a.position,
            b.position,
            a.movement,
            b.movement,
        );
        log::debug!("gesture: {gesture:?}");

        Response::view(self.view.apply_gesture(gesture, &self.config))
    }

    fn single_contact_move(&mut self, position: Vec2) -> Response {
        let tool = self.tool;
        let Some(drag) = self.drag.as_mut() else {
            return Response::NONE;
        };

        // Switching tools mid-drag must not join strokes across the switch.
        if drag.tool != tool {
            drag.tool = tool;
            drag.last_cell = None;
        }
        let start = drag.start;

        match tool {
            Tool::Draw | Tool::Eraser => {
                let cell = self.screen_to_grid(position);
                let color = if tool == Tool::Draw { Some(self.color) } else { None };
                let last = self.drag.as_mut().and_then(|d| d.last_cell.replace(cell));

                let changed = match last {
                    Some(last) => self.grid.set_line(last, cell, color) > 0,
                    None => self.grid.set_pixel(cell.x, cell.y, color),
                };
                Response::grid(changed)
            }

            Tool::Move => {
                let before = self.view.offset;
                self.view.offset = position - start + self.pan_baseline;
                Response::view(self.view.offset != before)
            }

            Tool::Rotation => {
                // Rebased on the live rotation each move, so the turn accelerates
                // with drag distance.
                let delta = (position.x - start.x) * self.config.rotate_drag_factor;
                self.view.rotation_deg += delta;
                Response::view(delta != 0.0)
            }

            Tool::Zoom => {
                let before = self.view.scale;
                self.view.step_zoom(start.x - position.x < 0.0, &self.config);
                Response::view(self.view.scale != before)
            }
        }
    }
}
