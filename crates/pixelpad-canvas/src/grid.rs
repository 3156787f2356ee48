use crate::pixel::Pixel;

/// Integer cell coordinates. May lie outside the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed `width × height` grid of optional colors, row-major.
///
/// `None` is an unpainted (erased) cell. Writes outside the grid are ignored:
/// pointer positions routinely leave the canvas during a drag.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<Pixel>>,
    /// Bumped on every write that changes a cell.
    revision: u64,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            revision: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Color at `(x, y)`; `None` when unpainted or out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Count of changed-cell writes since construction.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Painted cells in row-major order as `(x, y, color)`.
    pub fn iter_painted(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|p| ((i % w) as u32, (i / w) as u32, p)))
    }

    /// Writes `color` into `(x, y)`, or clears the cell when `color` is `None`.
    ///
    /// Returns `true` when the cell changed. Out-of-bounds positions and writes
    /// of the value already stored are no-ops.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Option<Pixel>) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };

        if self.cells[i] == color {
            return false;
        }

        self.cells[i] = color;
        self.revision += 1;
        true
    }

    /// Paints every cell along the segment `from → to`.
    ///
    /// The segment is sampled `ceil(length)` times (at least once) and each
    /// sample is rounded to the nearest cell, so consecutive samples are never
    /// more than one cell apart. Only samples within one cell of the grid are
    /// visited, so far off-grid endpoints cost no more than the grid span.
    /// Returns the number of cells that changed.
    pub fn set_line(&mut self, from: GridPos, to: GridPos, color: Option<Pixel>) -> usize {
        let (x0, y0) = (f64::from(from.x), f64::from(from.y));
        let dx = f64::from(to.x) - x0;
        let dy = f64::from(to.y) - y0;
        let steps = dx.hypot(dy).ceil().max(1.0);

        let bounds = (f64::from(self.width), f64::from(self.height));
        let Some((t0, t1)) = clip_segment((x0, y0), (dx, dy), bounds) else {
            return 0;
        };
        let first = (t0 * steps).ceil() as u64;
        let last = ((t1 * steps).floor() as u64).min(steps as u64);

        let mut changed = 0;
        for i in first..=last {
            let t = i as f64 / steps;
            let x = round_half_up(x0 + dx * t);
            let y = round_half_up(y0 + dy * t);
            if self.set_pixel(x, y, color) {
                changed += 1;
            }
        }
        changed
    }
}

/// Parameter range of `origin + t * dir`, `t` in `[0, 1]`, that stays inside
/// `[-1, w] × [-1, h]`. `None` when the segment misses that box.
///
/// Liang–Barsky: each side contributes `p * t <= q`.
fn clip_segment(origin: (f64, f64), dir: (f64, f64), (w, h): (f64, f64)) -> Option<(f64, f64)> {
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let sides = [
        (-dir.0, origin.0 + 1.0),
        (dir.0, w - origin.0),
        (-dir.1, origin.1 + 1.0),
        (dir.1, h - origin.1),
    ];
    for (p, q) in sides {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    (t0 <= t1).then_some((t0, t1))
}

// Ties round toward +inf (0.5 -> 1, -0.5 -> 0).
#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Pixel = Pixel::rgb(255, 0, 0);
    const BLUE: Pixel = Pixel::rgb(0, 0, 255);

    // ── set_pixel ─────────────────────────────────────────────────────────

    #[test]
    fn new_grid_is_unpainted() {
        let g = PixelGrid::new(4, 3);
        assert_eq!(g.painted_count(), 0);
        assert_eq!(g.get(0, 0), None);
        assert_eq!(g.revision(), 0);
    }

    #[test]
    fn later_color_wins() {
        let mut g = PixelGrid::new(8, 8);
        assert!(g.set_pixel(2, 3, Some(RED)));
        assert!(g.set_pixel(2, 3, Some(BLUE)));
        assert_eq!(g.get(2, 3), Some(BLUE));
    }

    #[test]
    fn same_color_twice_is_a_no_op() {
        let mut g = PixelGrid::new(8, 8);
        assert!(g.set_pixel(1, 1, Some(RED)));
        let rev = g.revision();
        assert!(!g.set_pixel(1, 1, Some(RED)));
        assert_eq!(g.revision(), rev);
    }

    #[test]
    fn none_clears_cell() {
        let mut g = PixelGrid::new(8, 8);
        g.set_pixel(5, 5, Some(RED));
        assert!(g.set_pixel(5, 5, None));
        assert_eq!(g.get(5, 5), None);
        // Clearing an empty cell changes nothing.
        assert!(!g.set_pixel(5, 5, None));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut g = PixelGrid::new(8, 6);
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 6), (i32::MIN, i32::MAX), (100, 100)] {
            assert!(!g.set_pixel(x, y, Some(RED)));
        }
        assert_eq!(g.painted_count(), 0);
        assert_eq!(g.revision(), 0);
    }

    #[test]
    fn edges_are_in_bounds() {
        let mut g = PixelGrid::new(8, 6);
        assert!(g.set_pixel(7, 5, Some(RED)));
        assert!(g.set_pixel(0, 0, Some(RED)));
        assert_eq!(g.painted_count(), 2);
    }

    // ── set_line ──────────────────────────────────────────────────────────

    #[test]
    fn zero_length_line_paints_one_cell() {
        let mut g = PixelGrid::new(8, 8);
        let p = GridPos::new(3, 4);
        assert_eq!(g.set_line(p, p, Some(RED)), 1);
        assert_eq!(g.painted_count(), 1);
        assert_eq!(g.get(3, 4), Some(RED));
    }

    #[test]
    fn horizontal_line_is_inclusive() {
        let mut g = PixelGrid::new(20, 4);
        g.set_line(GridPos::new(0, 0), GridPos::new(10, 0), Some(RED));
        assert_eq!(g.painted_count(), 11);
        for x in 0..=10 {
            assert_eq!(g.get(x, 0), Some(RED), "cell ({x}, 0)");
        }
        assert_eq!(g.get(11, 0), None);
    }

    #[test]
    fn diagonal_line_has_no_gaps() {
        let mut g = PixelGrid::new(32, 32);
        g.set_line(GridPos::new(2, 1), GridPos::new(25, 14), Some(RED));

        // Every column between the endpoints holds at least one painted cell.
        for x in 2..=25 {
            assert!((0..32).any(|y| g.get(x, y).is_some()), "gap at column {x}");
        }
    }

    #[test]
    fn line_leaving_the_grid_paints_only_inside() {
        let mut g = PixelGrid::new(5, 5);
        g.set_line(GridPos::new(-3, 2), GridPos::new(8, 2), Some(RED));
        assert_eq!(g.painted_count(), 5);
    }

    #[test]
    fn far_off_grid_endpoints_paint_the_crossing() {
        let mut g = PixelGrid::new(8, 8);
        let from = GridPos::new(i32::MIN, 3);
        let to = GridPos::new(i32::MAX, 3);
        assert_eq!(g.set_line(from, to, Some(RED)), 8);
        assert!((0..8).all(|x| g.get(x, 3) == Some(RED)));
    }

    #[test]
    fn line_missing_the_grid_paints_nothing() {
        let mut g = PixelGrid::new(8, 8);
        let from = GridPos::new(-4_000_000, -20);
        let to = GridPos::new(4_000_000, -20);
        assert_eq!(g.set_line(from, to, Some(RED)), 0);
        assert_eq!(g.revision(), 0);
    }

    #[test]
    fn clipping_keeps_the_same_cells() {
        // Every sample of the unclipped segment, rounded and kept if in bounds.
        fn sampled(g: &PixelGrid, from: GridPos, to: GridPos) -> Vec<(i32, i32)> {
            let dx = f64::from(to.x - from.x);
            let dy = f64::from(to.y - from.y);
            let steps = dx.hypot(dy).ceil().max(1.0) as u64;
            let mut cells: Vec<_> = (0..=steps)
                .map(|i| {
                    let t = i as f64 / steps as f64;
                    (
                        round_half_up(f64::from(from.x) + dx * t),
                        round_half_up(f64::from(from.y) + dy * t),
                    )
                })
                .filter(|&(x, y)| g.in_bounds(x, y))
                .collect();
            cells.sort_unstable();
            cells.dedup();
            cells
        }

        let segments = [
            (GridPos::new(-7, -3), GridPos::new(14, 11)),
            (GridPos::new(12, -5), GridPos::new(-9, 6)),
            (GridPos::new(3, -40), GridPos::new(4, 50)),
            (GridPos::new(-1, -1), GridPos::new(10, 10)),
        ];
        for (from, to) in segments {
            let mut g = PixelGrid::new(10, 10);
            g.set_line(from, to, Some(RED));
            let mut painted: Vec<_> = g.iter_painted().map(|(x, y, _)| (x as i32, y as i32)).collect();
            painted.sort_unstable();
            assert_eq!(painted, sampled(&g, from, to), "{from:?} -> {to:?}");
        }
    }

    #[test]
    fn erasing_line_clears_cells() {
        let mut g = PixelGrid::new(10, 10);
        g.set_line(GridPos::new(0, 5), GridPos::new(9, 5), Some(RED));
        let cleared = g.set_line(GridPos::new(3, 5), GridPos::new(6, 5), None);
        assert_eq!(cleared, 4);
        assert_eq!(g.painted_count(), 6);
    }

    // ── iteration ─────────────────────────────────────────────────────────

    #[test]
    fn iter_painted_is_row_major() {
        let mut g = PixelGrid::new(4, 4);
        g.set_pixel(3, 0, Some(RED));
        g.set_pixel(0, 2, Some(BLUE));
        g.set_pixel(1, 0, Some(BLUE));

        let cells: Vec<_> = g.iter_painted().collect();
        assert_eq!(cells, vec![(1, 0, BLUE), (3, 0, RED), (0, 2, BLUE)]);
    }
}
