use macroquad::prelude::*;
use super::{panel_x, Button};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudAction {
    ZoomIn,
    ZoomOut,
}

/// Top of the zoom row in the right panel
pub const ZOOM_ROW_Y: f32 = 100.0;
const ZOOM_BUTTON_SIZE: f32 = 30.0;

/// Buttons shown over the grid while playing or paused
pub struct HudLayout {
    pub panel_x: f32,
    zoom_out: Button,
    zoom_in: Button,
}

impl HudLayout {
    pub fn new(screen_width: f32) -> Self {
        let x = panel_x(screen_width);
        let zoom_out = Button::new(x + 70.0, ZOOM_ROW_Y, ZOOM_BUTTON_SIZE, ZOOM_BUTTON_SIZE, "-", GRAY);
        let zoom_in = Button::new(
            zoom_out.x + ZOOM_BUTTON_SIZE + 10.0,
            ZOOM_ROW_Y,
            ZOOM_BUTTON_SIZE,
            ZOOM_BUTTON_SIZE,
            "+",
            GRAY,
        );
        Self { panel_x: x, zoom_out, zoom_in }
    }

    /// A click here must not reach the grid
    pub fn action_at(&self, mouse_pos: (f32, f32)) -> Option<HudAction> {
        if self.zoom_in.is_hovered(mouse_pos) {
            Some(HudAction::ZoomIn)
        } else if self.zoom_out.is_hovered(mouse_pos) {
            Some(HudAction::ZoomOut)
        } else {
            None
        }
    }

    /// Zoom buttons take the current cell color
    pub fn draw_zoom_buttons(&self, cell_color: Color, mouse_pos: (f32, f32)) {
        self.zoom_out.draw_filled(cell_color, mouse_pos, 20.0);
        self.zoom_in.draw_filled(cell_color, mouse_pos, 20.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_buttons_sit_in_right_panel() {
        let hud = HudLayout::new(1280.0);
        assert_eq!(hud.panel_x, 1100.0);
        assert_eq!(hud.action_at((1185.0, 115.0)), Some(HudAction::ZoomOut));
        assert_eq!(hud.action_at((1225.0, 115.0)), Some(HudAction::ZoomIn));
        assert_eq!(hud.action_at((1205.0, 115.0)), None);
        assert_eq!(hud.action_at((400.0, 300.0)), None);
    }
}
