use super::Projection;
use crate::config::Config;

/// Diamond tiles: the grid's column axis runs down-right on screen and the
/// row axis runs down-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Isometric {
    pub half_width: f32,
    pub half_height: f32,
}

impl Isometric {
    pub const fn new(half_width: f32, half_height: f32) -> Self {
        Self { half_width, half_height }
    }

    /// Fractional grid position of a screen point, before rounding
    pub fn to_cartesian(&self, x: f32, y: f32) -> (f32, f32) {
        let u = x / (2.0 * self.half_width);
        let v = y / (2.0 * self.half_height);
        (u + v, v - u)
    }
}

impl Projection for Isometric {
    fn from_config(config: &Config) -> Self {
        Self::new(config.iso_half_width, config.iso_half_height)
    }

    /// Screen anchor of the cell. `tile_corners` draws the diamond
    /// centered on this point so the drawn tile matches the pick region.
    /// Summed in f32 so no `i32` pair can overflow.
    fn to_screen(&self, col: i32, row: i32) -> (f32, f32) {
        let (col, row) = (col as f32, row as f32);
        ((col - row) * self.half_width, (col + row) * self.half_height)
    }

    /// Rounds each axis to the nearest cell, ties away from zero.
    /// For non-negative values this is "add 0.5 and truncate", so a point
    /// exactly on a tile border goes to the cell further from the origin.
    fn to_grid(&self, x: f32, y: f32) -> (i32, i32) {
        let (col, row) = self.to_cartesian(x, y);
        (col.round() as i32, row.round() as i32)
    }

    fn center_of(&self, rows: usize, cols: usize) -> (f32, f32) {
        let col = (cols as f32 - 1.0) / 2.0;
        let row = (rows as f32 - 1.0) / 2.0;
        ((col - row) * self.half_width, (col + row) * self.half_height)
    }

    /// Top, right, bottom, left
    fn tile_corners(&self, (x, y): (f32, f32), zoom: f32) -> [(f32, f32); 4] {
        let w = self.half_width * zoom;
        let h = self.half_height * zoom;
        [(x, y - h), (x + w, y), (x, y + h), (x - w, y)]
    }
}
