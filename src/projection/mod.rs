//! Mapping between logical grid coordinates and screen space.
//!
//! A projection knows nothing about zoom or pan, those are applied on top
//! by [`ViewState`](crate::application::ViewState). Grid coordinates are
//! `(col, row)` pairs, matching the `(x, y)` order of screen points.

mod isometric;
mod orthogonal;

pub use isometric::Isometric;
pub use orthogonal::Orthogonal;

use crate::config::Config;

pub trait Projection {
    fn from_config(config: &Config) -> Self
    where
        Self: Sized;

    /// Screen anchor of a cell at unit zoom with no pan
    fn to_screen(&self, col: i32, row: i32) -> (f32, f32);

    /// Cell whose pick region contains the point.
    /// The result may lie outside any particular grid.
    fn to_grid(&self, x: f32, y: f32) -> (i32, i32);

    /// Projected center of a `rows` x `cols` grid at unit zoom
    fn center_of(&self, rows: usize, cols: usize) -> (f32, f32);

    /// Corners of the tile drawn for the cell anchored at `anchor`, in
    /// drawing order. The tile covers exactly the cell's pick region.
    fn tile_corners(&self, anchor: (f32, f32), zoom: f32) -> [(f32, f32); 4];
}

/// Projection chosen for this build
#[cfg(not(feature = "orthogonal"))]
pub type ActiveProjection = Isometric;

#[cfg(feature = "orthogonal")]
pub type ActiveProjection = Orthogonal;
