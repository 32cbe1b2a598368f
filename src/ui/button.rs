use macroquad::prelude::*;

/// Rectangular button with hover highlight
#[derive(Clone, Debug)]
pub struct Button {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    text: String,
    color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color,
        }
    }

    /// Check if a point is inside the button, edges included
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw with the button's own fill
    pub fn draw(&self, mouse_pos: (f32, f32), font_size: f32) {
        self.draw_filled(self.color, mouse_pos, font_size);
    }

    /// Draw with an explicit fill, e.g. to mark the selected option
    pub fn draw_filled(&self, fill: Color, mouse_pos: (f32, f32), font_size: f32) {
        draw_rectangle(self.x, self.y, self.width, self.height, fill);

        let (border, thickness) = if self.is_hovered(mouse_pos) {
            (WHITE, 2.0)
        } else {
            (LIGHTGRAY, 1.0)
        };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, thickness, border);

        if !self.text.is_empty() {
            let size = measure_text(&self.text, None, font_size as u16, 1.0);
            draw_text(
                &self.text,
                self.x + (self.width - size.width) / 2.0,
                self.y + (self.height + size.height) / 2.0,
                font_size,
                WHITE,
            );
        }
    }
}
