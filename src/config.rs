//! Tunable constants for one session.
//!
//! Everything the engine, the camera and the renderer need to know about
//! sizes and speeds lives here so tests can vary it.

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Window size in pixels, used to center the grid
    pub screen_width: f32,
    pub screen_height: f32,
    /// Side of one square cell in the orthogonal projection
    pub cell_size: f32,
    /// Half the width of an isometric diamond tile
    pub iso_half_width: f32,
    /// Half the height of an isometric diamond tile
    pub iso_half_height: f32,
    pub default_zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom change per button click or wheel notch
    pub zoom_step: f32,
    /// Pan distance per frame while an arrow key is held
    pub pan_step: f32,
    /// Seconds between generations while playing
    pub step_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1280.0,
            screen_height: 720.0,
            cell_size: 40.0,
            iso_half_width: 20.0,
            iso_half_height: 10.0,
            default_zoom: 1.0,
            min_zoom: 0.2,
            max_zoom: 3.0,
            zoom_step: 0.1,
            pan_step: 10.0,
            step_interval: 0.2,
        }
    }
}
