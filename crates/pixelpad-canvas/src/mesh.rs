use crate::grid::PixelGrid;

/// Vertices per painted cell: two triangles.
pub const VERTICES_PER_CELL: usize = 6;

/// CPU-side triangle list for the painted cells of a grid.
///
/// Positions are in plane space, `[-1, 1]` on both axes with +Y up, so cell
/// `(0, 0)` is the top-left quad. Each vertex carries its cell's color.
#[derive(Debug, Clone, Default)]
pub struct PixelMesh {
    positions: Vec<[f32; 2]>,
    colors: Vec<[f32; 4]>,
}

impl PixelMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerates the whole mesh from `grid`, replacing previous contents.
    pub fn rebuild(&mut self, grid: &PixelGrid) {
        self.positions.clear();
        self.colors.clear();

        let sx = 2.0 / grid.width() as f32;
        let sy = 2.0 / grid.height() as f32;

        for (x, y, pixel) in grid.iter_painted() {
            let fx = x as f32 * sx - 1.0;
            let fy = 1.0 - y as f32 * sy;

            self.positions.extend_from_slice(&[
                [fx, fy],
                [fx + sx, fy],
                [fx, fy - sy],
                [fx + sx, fy],
                [fx + sx, fy - sy],
                [fx, fy - sy],
            ]);
            self.colors.extend(std::iter::repeat_n(pixel.to_f32(), VERTICES_PER_CELL));
        }
    }

    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn quad_count(&self) -> usize {
        self.positions.len() / VERTICES_PER_CELL
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-6 && (a[1] - b[1]).abs() < 1e-6
    }

    #[test]
    fn empty_grid_has_no_vertices() {
        let mut mesh = PixelMesh::new();
        mesh.rebuild(&PixelGrid::new(8, 8));
        assert!(mesh.is_empty());
        assert_eq!(mesh.colors().len(), 0);
    }

    #[test]
    fn one_quad_per_painted_cell() {
        let mut grid = PixelGrid::new(10, 10);
        grid.set_pixel(1, 1, Some(Pixel::BLACK));
        grid.set_pixel(2, 7, Some(Pixel::WHITE));
        grid.set_pixel(9, 9, Some(Pixel::rgb(1, 2, 3)));

        let mut mesh = PixelMesh::new();
        mesh.rebuild(&grid);
        assert_eq!(mesh.quad_count(), 3);
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.colors().len(), 18);
    }

    #[test]
    fn top_left_cell_occupies_top_left_corner() {
        let mut grid = PixelGrid::new(4, 2);
        grid.set_pixel(0, 0, Some(Pixel::rgb(255, 0, 0)));

        let mut mesh = PixelMesh::new();
        mesh.rebuild(&grid);

        let p = mesh.positions();
        assert!(approx(p[0], [-1.0, 1.0]));
        assert!(approx(p[1], [-0.5, 1.0]));
        assert!(approx(p[2], [-1.0, 0.0]));
        assert!(approx(p[4], [-0.5, 0.0]));
        assert!(mesh.colors().iter().all(|&c| c == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn bottom_right_cell_reaches_plane_edge() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set_pixel(2, 2, Some(Pixel::BLACK));

        let mut mesh = PixelMesh::new();
        mesh.rebuild(&grid);
        assert!(approx(mesh.positions()[4], [1.0, -1.0]));
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut grid = PixelGrid::new(5, 5);
        grid.set_pixel(0, 0, Some(Pixel::BLACK));
        grid.set_pixel(1, 0, Some(Pixel::BLACK));

        let mut mesh = PixelMesh::new();
        mesh.rebuild(&grid);
        assert_eq!(mesh.quad_count(), 2);

        grid.set_pixel(0, 0, None);
        mesh.rebuild(&grid);
        assert_eq!(mesh.quad_count(), 1);
    }
}
