use macroquad::prelude::*;
use super::{Button, PALETTE, SUBTITLE};
use crate::application::{GridSize, MenuSelection};

/// What a click on the menu asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    SelectSize(GridSize),
    SelectPalette(usize),
}

const PLAY_Y: f32 = 250.0;
const SIZE_LABEL_Y: f32 = PLAY_Y + 60.0;
const SIZE_BUTTON_Y: f32 = SIZE_LABEL_Y + 30.0;
const SIZE_BUTTON_WIDTH: f32 = 90.0;
const PALETTE_LABEL_Y: f32 = SIZE_LABEL_Y + 90.0;
const SWATCH_Y: f32 = PALETTE_LABEL_Y + 30.0;
const SWATCH_SIZE: f32 = 40.0;
const SPACING: f32 = 10.0;

/// Main menu buttons, laid out around the horizontal center of the screen
pub struct MenuLayout {
    center_x: f32,
    screen_height: f32,
    play: Button,
    sizes: Vec<(GridSize, Button)>,
    swatches: Vec<Button>,
}

impl MenuLayout {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let center_x = screen_width / 2.0;

        let play = Button::new(center_x - 150.0, PLAY_Y, 300.0, 50.0, "Play", DARKGREEN);

        let sizes_width = GridSize::ALL.len() as f32 * (SIZE_BUTTON_WIDTH + SPACING) - SPACING;
        let sizes = GridSize::ALL
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let x = center_x - sizes_width / 2.0 + i as f32 * (SIZE_BUTTON_WIDTH + SPACING);
                (size, Button::new(x, SIZE_BUTTON_Y, SIZE_BUTTON_WIDTH, 40.0, size.label(), DARKBLUE))
            })
            .collect();

        let swatches_width = PALETTE.len() as f32 * (SWATCH_SIZE + SPACING) - SPACING;
        let swatches = PALETTE
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let x = center_x - swatches_width / 2.0 + i as f32 * (SWATCH_SIZE + SPACING);
                Button::new(x, SWATCH_Y, SWATCH_SIZE, SWATCH_SIZE, "", color)
            })
            .collect();

        Self { center_x, screen_height, play, sizes, swatches }
    }

    /// Action for a click at `mouse_pos`, if it hit a button
    pub fn action_at(&self, mouse_pos: (f32, f32)) -> Option<MenuAction> {
        if self.play.is_hovered(mouse_pos) {
            return Some(MenuAction::Play);
        }
        if let Some((size, _)) = self.sizes.iter().find(|(_, b)| b.is_hovered(mouse_pos)) {
            return Some(MenuAction::SelectSize(*size));
        }
        self.swatches
            .iter()
            .position(|b| b.is_hovered(mouse_pos))
            .map(MenuAction::SelectPalette)
    }

    pub fn draw(&self, selection: &MenuSelection, mouse_pos: (f32, f32)) {
        draw_centered("GAME OF LIFE", self.center_x, 100.0, 40.0, WHITE);
        draw_centered(SUBTITLE, self.center_x, 150.0, 25.0, LIGHTGRAY);

        self.play.draw(mouse_pos, 20.0);

        draw_centered("Grid Size:", self.center_x, SIZE_LABEL_Y + 20.0, 20.0, WHITE);
        for (size, button) in &self.sizes {
            let fill = if *size == selection.grid_size { BLUE } else { DARKBLUE };
            button.draw_filled(fill, mouse_pos, 18.0);
        }

        draw_centered("Cell Color:", self.center_x, PALETTE_LABEL_Y + 20.0, 20.0, WHITE);
        for (i, swatch) in self.swatches.iter().enumerate() {
            swatch.draw(mouse_pos, 0.0);
            if i == selection.palette_index {
                draw_rectangle_lines(swatch.x - 3.0, swatch.y - 3.0, swatch.width + 6.0, swatch.height + 6.0, 2.0, WHITE);
            }
        }

        draw_centered(
            "Controls: Space = Play/Pause | R = Randomize | C = Clear | Arrows/WASD = Move | +/- = Zoom | Esc = Menu",
            self.center_x,
            self.screen_height - 40.0,
            16.0,
            GRAY,
        );
    }
}

fn draw_centered(text: &str, center_x: f32, baseline_y: f32, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - size.width / 2.0, baseline_y, font_size, color);
}
