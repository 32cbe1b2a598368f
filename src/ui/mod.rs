mod button;
mod hud;
mod menu;

pub use button::Button;
pub use hud::{HudAction, HudLayout, ZOOM_ROW_Y};
pub use menu::{MenuAction, MenuLayout};

use macroquad::prelude::*;
use crate::application::PALETTE_SIZE;

#[cfg(not(feature = "orthogonal"))]
pub const SUBTITLE: &str = "Isometric Edition";

#[cfg(feature = "orthogonal")]
pub const SUBTITLE: &str = "Classic Edition";

pub fn window_title() -> String {
    format!("Game of Life - {SUBTITLE}")
}

/// Width of the info panel on the right of the playing screen
pub const PANEL_WIDTH: f32 = 180.0;

pub const BACKGROUND: Color = BLACK;
pub const GRID_LINE: Color = DARKGRAY;

/// Selectable cell colors, indexed by `MenuSelection::palette_index`
pub const PALETTE: [Color; PALETTE_SIZE] = [GREEN, BLUE, RED, PURPLE, ORANGE, PINK, YELLOW];

pub fn cell_color(palette_index: usize) -> Color {
    PALETTE.get(palette_index).copied().unwrap_or(PALETTE[0])
}

/// X position where the right panel starts
pub fn panel_x(screen_width: f32) -> f32 {
    screen_width - PANEL_WIDTH
}
