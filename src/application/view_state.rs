use crate::config::Config;
use crate::projection::Projection;

/// ViewState is the camera: a projection plus zoom and pan.
///
/// Forward path (grid to screen): projection, then zoom, then pan.
/// `screen_to_grid` undoes the three in reverse order.
#[derive(Clone, Debug)]
pub struct ViewState<P: Projection> {
    projection: P,
    pub offset_x: f32,
    pub offset_y: f32,
    zoom: f32,
    default_zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    screen_width: f32,
    screen_height: f32,
}

impl<P: Projection> ViewState<P> {
    pub fn new(config: &Config) -> Self {
        Self::with_projection(P::from_config(config), config)
    }

    pub fn with_projection(projection: P, config: &Config) -> Self {
        Self {
            projection,
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: config.default_zoom.clamp(config.min_zoom, config.max_zoom),
            default_zoom: config.default_zoom,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
        }
    }

    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    pub const fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Add to the zoom factor, saturating at the configured bounds.
    /// A NaN delta leaves the zoom unchanged.
    pub fn apply_zoom_delta(&mut self, delta: f32) {
        if delta.is_nan() {
            return;
        }
        self.zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
    }

    /// Pan camera, unbounded
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Cell under a screen point, as (col, row).
    /// Callers must bounds-check before indexing a grid.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let x = (screen_x - self.offset_x) / self.zoom;
        let y = (screen_y - self.offset_y) / self.zoom;
        self.projection.to_grid(x, y)
    }

    /// Screen anchor of a cell
    pub fn grid_to_screen(&self, col: i32, row: i32) -> (f32, f32) {
        let (x, y) = self.projection.to_screen(col, row);
        (x * self.zoom + self.offset_x, y * self.zoom + self.offset_y)
    }

    /// Screen corners of a cell's tile at the current zoom
    pub fn tile_corners(&self, col: i32, row: i32) -> [(f32, f32); 4] {
        self.projection
            .tile_corners(self.grid_to_screen(col, row), self.zoom)
    }

    /// Move the pan so the grid's center sits at the screen center
    pub fn center_on(&mut self, rows: usize, cols: usize) {
        let (cx, cy) = self.projection.center_of(rows, cols);
        self.offset_x = self.screen_width / 2.0 - cx * self.zoom;
        self.offset_y = self.screen_height / 2.0 - cy * self.zoom;
    }

    /// Default zoom, grid centered
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.zoom = self.default_zoom.clamp(self.min_zoom, self.max_zoom);
        self.center_on(rows, cols);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{Isometric, Orthogonal};

    fn ortho_view() -> ViewState<Orthogonal> {
        ViewState::new(&Config::default())
    }

    fn iso_view() -> ViewState<Isometric> {
        ViewState::new(&Config::default())
    }

    #[test]
    fn test_zoom_saturates_at_max() {
        let mut view = ortho_view();
        view.apply_zoom_delta(2.0);
        assert_eq!(view.zoom(), 3.0);
        view.apply_zoom_delta(0.1);
        assert_eq!(view.zoom(), 3.0);
    }

    #[test]
    fn test_zoom_saturates_at_min() {
        let mut view = ortho_view();
        view.apply_zoom_delta(-0.8);
        assert_eq!(view.zoom(), 0.2);
        view.apply_zoom_delta(-0.1);
        assert_eq!(view.zoom(), 0.2);
        view.apply_zoom_delta(-1000.0);
        assert_eq!(view.zoom(), 0.2);
    }

    #[test]
    fn test_zoom_steps_stay_in_range() {
        let mut view = iso_view();
        let deltas = [
            0.1, 0.7, f32::NAN, -2.5, 0.3, 4.0, -0.05, f32::MAX, f32::MIN,
            f32::INFINITY, f32::NAN, f32::NEG_INFINITY,
        ];
        for delta in deltas {
            view.apply_zoom_delta(delta);
            assert!((0.2..=3.0).contains(&view.zoom()), "zoom {} after {delta}", view.zoom());
        }
    }

    #[test]
    fn test_nan_zoom_delta_keeps_picking_intact() {
        let mut view = ortho_view();
        view.apply_zoom_delta(1.0);
        view.apply_zoom_delta(f32::NAN);
        assert_eq!(view.zoom(), 2.0);
        let (x, y) = view.grid_to_screen(7, 3);
        assert_eq!(view.screen_to_grid(x + 1.0, y + 1.0), (7, 3));
    }

    #[test]
    fn test_pan_is_unbounded() {
        let mut view = ortho_view();
        view.pan(10.0, -20.0);
        view.pan(1.0e7, -1.0e7);
        assert_eq!(view.offset(), (10.0 + 1.0e7, -20.0 - 1.0e7));
    }

    #[test]
    fn test_orthogonal_screen_to_grid_inverts_forward_path() {
        let mut view = ortho_view();
        view.apply_zoom_delta(1.0);
        view.pan(100.0, 60.0);
        for c in 0..50 {
            for r in 0..50 {
                let (x, y) = view.grid_to_screen(c, r);
                assert_eq!(view.screen_to_grid(x, y), (c, r));
                // Middle of the cell as well
                assert_eq!(view.screen_to_grid(x + 40.0, y + 40.0), (c, r));
            }
        }
    }

    #[test]
    fn test_isometric_screen_to_grid_inverts_forward_path() {
        let mut view = iso_view();
        view.apply_zoom_delta(-0.5);
        view.pan(640.0, 50.0);
        for c in -20..60 {
            for r in -20..60 {
                let (x, y) = view.grid_to_screen(c, r);
                assert_eq!(view.screen_to_grid(x, y), (c, r), "cell ({c}, {r})");
            }
        }
    }

    #[test]
    fn test_pan_undone_before_zoom() {
        // (screen - offset) / (cell * zoom), truncated
        let mut view = ortho_view();
        view.apply_zoom_delta(1.0);
        view.pan(30.0, 30.0);
        assert_eq!(view.screen_to_grid(30.0 + 80.0 * 3.5, 30.0 + 80.0 * 1.2), (3, 1));
    }

    #[test]
    fn test_off_grid_points_are_returned_unchanged() {
        let view = iso_view();
        let (x, y) = view.grid_to_screen(-5, 120);
        assert_eq!(view.screen_to_grid(x, y), (-5, 120));
    }

    #[test]
    fn test_center_on_puts_grid_center_mid_screen() {
        let mut view = ortho_view();
        view.center_on(10, 20);
        let (x, y) = view.grid_to_screen(10, 5);
        assert_eq!((x, y), (640.0, 360.0));
    }

    #[test]
    fn test_reset_restores_default_zoom() {
        let mut view = iso_view();
        view.apply_zoom_delta(1.5);
        view.pan(500.0, 500.0);
        view.reset(40, 40);
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.offset(), (640.0, 360.0 - 390.0));
    }

    #[test]
    fn test_tile_corners_follow_zoom() {
        let mut view = ortho_view();
        view.apply_zoom_delta(1.0);
        let corners = view.tile_corners(1, 0);
        assert_eq!(corners[0], (80.0, 0.0));
        assert_eq!(corners[2], (160.0, 80.0));
    }
}
