use super::Projection;
use crate::config::Config;

/// Square cells laid out on a plain rectangular lattice
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthogonal {
    pub cell_size: f32,
}

impl Orthogonal {
    pub const fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }
}

impl Projection for Orthogonal {
    fn from_config(config: &Config) -> Self {
        Self::new(config.cell_size)
    }

    /// Top-left corner of the cell
    fn to_screen(&self, col: i32, row: i32) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Truncates toward zero, so the first cell also picks up
    /// points up to one cell left of or above the grid.
    fn to_grid(&self, x: f32, y: f32) -> (i32, i32) {
        ((x / self.cell_size) as i32, (y / self.cell_size) as i32)
    }

    fn center_of(&self, rows: usize, cols: usize) -> (f32, f32) {
        (
            cols as f32 * self.cell_size / 2.0,
            rows as f32 * self.cell_size / 2.0,
        )
    }

    fn tile_corners(&self, (x, y): (f32, f32), zoom: f32) -> [(f32, f32); 4] {
        let size = self.cell_size * zoom;
        [(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
    }
}
