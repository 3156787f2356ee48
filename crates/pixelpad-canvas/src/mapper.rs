//! Screen to grid coordinate mapping.
//!
//! The canvas is presented centered on `viewport center + offset`, rotated
//! clockwise by `rotation_deg` and scaled by `scale` about that center. Mapping
//! undoes those steps in reverse order.

use pixelpad_engine::coords::{Rect, Vec2, Viewport};

use crate::grid::GridPos;
use crate::view::ViewTransform;

/// On-screen bounding rectangle of the presented canvas.
pub fn canvas_bounds(view: &ViewTransform, viewport: Viewport, display_size: Vec2) -> Rect {
    let center = viewport.center() + view.offset;
    Rect::bounding_rotated_scaled(center, display_size, view.rotation_deg, view.scale)
}

/// Maps a client-space point to a grid cell.
///
/// The result may lie outside `[0, width) x [0, height)`; callers bounds-check.
pub fn screen_to_grid(
    client: Vec2,
    bounds: Rect,
    view: &ViewTransform,
    display_size: Vec2,
    grid_size: (u32, u32),
) -> GridPos {
    let center = bounds.center();
    let rel = (client - center).rotate_about(Vec2::zero(), -view.rotation_deg);

    let (w, h) = (grid_size.0 as f32, grid_size.1 as f32);
    let x = (rel.x / view.scale + display_size.x / 2.0) * (w / display_size.x);
    let y = (rel.y / view.scale + display_size.y / 2.0) * (h / display_size.y);

    GridPos::new(x.floor() as i32, y.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: Vec2 = Vec2::new(300.0, 300.0);
    const GRID: (u32, u32) = (300, 300);

    fn viewport() -> Viewport {
        Viewport::new(600.0, 400.0)
    }

    fn map(client: Vec2, view: &ViewTransform) -> GridPos {
        let bounds = canvas_bounds(view, viewport(), DISPLAY);
        screen_to_grid(client, bounds, view, DISPLAY, GRID)
    }

    /// Screen position of the center of cell `(gx, gy)`, by forward transform.
    fn cell_center_on_screen(gx: i32, gy: i32, view: &ViewTransform) -> Vec2 {
        let local = Vec2::new(
            (gx as f32 + 0.5) * DISPLAY.x / GRID.0 as f32 - DISPLAY.x / 2.0,
            (gy as f32 + 0.5) * DISPLAY.y / GRID.1 as f32 - DISPLAY.y / 2.0,
        );
        let center = viewport().center() + view.offset;
        center + (local * view.scale).rotate_about(Vec2::zero(), view.rotation_deg)
    }

    // ── identity view ─────────────────────────────────────────────────────

    #[test]
    fn canvas_origin_maps_to_first_cell() {
        let view = ViewTransform::new(1.0);
        // Canvas is 300x300 centered at (300, 200).
        assert_eq!(map(Vec2::new(150.0, 50.0), &view), GridPos::new(0, 0));
        assert_eq!(map(Vec2::new(150.9, 50.9), &view), GridPos::new(0, 0));
        assert_eq!(map(Vec2::new(449.5, 349.5), &view), GridPos::new(299, 299));
    }

    #[test]
    fn points_outside_canvas_map_out_of_bounds() {
        let view = ViewTransform::new(1.0);
        assert_eq!(map(Vec2::new(149.0, 50.0), &view), GridPos::new(-1, 0));
        assert_eq!(map(Vec2::new(450.0, 350.0), &view), GridPos::new(300, 300));
    }

    #[test]
    fn y_axis_uses_height() {
        let view = ViewTransform::new(1.0);
        let display = Vec2::new(300.0, 150.0);
        let bounds = canvas_bounds(&view, viewport(), display);
        // Bottom-left corner region of a 300x150 canvas on a 300x300 grid.
        let p = screen_to_grid(Vec2::new(150.5, 274.9), bounds, &view, display, (300, 300));
        assert_eq!(p, GridPos::new(0, 299));
    }

    // ── transformed view ──────────────────────────────────────────────────

    #[test]
    fn pan_and_scale_shift_the_mapping() {
        let mut view = ViewTransform::new(2.0);
        view.offset = Vec2::new(40.0, -10.0);
        // Canvas center (340, 190) is the grid center.
        assert_eq!(map(Vec2::new(340.5, 190.5), &view), GridPos::new(150, 150));
        // One display px left of center is two screen px at scale 2.
        assert_eq!(map(Vec2::new(338.5, 190.5), &view), GridPos::new(149, 150));
    }

    #[test]
    fn quarter_turn_maps_up_to_left() {
        let mut view = ViewTransform::new(1.0);
        view.rotation_deg = 90.0;
        // Above the center on screen is the left half of the grid.
        let p = map(Vec2::new(300.0, 200.0 - 40.5), &view);
        assert_eq!(p.x, 109);
        assert!((149..=150).contains(&p.y), "{p:?}");
    }

    #[test]
    fn inverse_matches_forward_rotation() {
        let cells = [(0, 0), (17, 250), (150, 150), (299, 3), (42, 299)];
        for &deg in &[0.0f32, 30.0, 90.0, -135.0, 200.0] {
            for &scale in &[0.5f32, 1.7, 3.0] {
                let mut view = ViewTransform::new(scale);
                view.rotation_deg = deg;
                view.offset = Vec2::new(-25.0, 12.0);
                for &(gx, gy) in &cells {
                    let screen = cell_center_on_screen(gx, gy, &view);
                    assert_eq!(
                        map(screen, &view),
                        GridPos::new(gx, gy),
                        "deg={deg} scale={scale} cell=({gx},{gy})"
                    );
                }
            }
        }
    }
}
