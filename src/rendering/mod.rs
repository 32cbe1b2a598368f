use macroquad::prelude::*;
use crate::application::{GameState, Phase};
use crate::projection::Projection;
use crate::ui::{self, HudLayout, MenuLayout, BACKGROUND, GRID_LINE};

/// Draw one complete frame for the current phase
pub fn draw_frame<P: Projection>(
    state: &GameState<P>,
    menu: &MenuLayout,
    hud: &HudLayout,
    mouse_pos: (f32, f32),
) {
    clear_background(BACKGROUND);

    if state.phase == Phase::Menu {
        menu.draw(&state.menu, mouse_pos);
        return;
    }

    draw_grid(state);
    draw_game_info(state, hud, mouse_pos);

    if state.phase == Phase::Paused {
        draw_pause_overlay();
    }
}

/// Draw every tile on screen: filled when alive, outlined always
pub fn draw_grid<P: Projection>(state: &GameState<P>) {
    let color = ui::cell_color(state.menu.palette_index);
    let (width, height) = (screen_width(), screen_height());

    for (row, col, cell) in state.grid.iter_cells() {
        let corners = state.view.tile_corners(col as i32, row as i32);

        // Cull tiles entirely off screen
        let (min_x, max_x, min_y, max_y) = corners.iter().fold(
            (f32::MAX, f32::MIN, f32::MAX, f32::MIN),
            |(lx, hx, ly, hy), &(x, y)| (lx.min(x), hx.max(x), ly.min(y), hy.max(y)),
        );
        if max_x < 0.0 || min_x > width || max_y < 0.0 || min_y > height {
            continue;
        }

        let [a, b, c, d] = corners.map(|(x, y)| vec2(x, y));
        if cell.is_alive() {
            draw_triangle(a, b, c, color);
            draw_triangle(a, c, d, color);
        }
        for (from, to) in [(a, b), (b, c), (c, d), (d, a)] {
            draw_line(from.x, from.y, to.x, to.y, 1.0, GRID_LINE);
        }
    }
}

/// Generation counter, help line and the right panel
fn draw_game_info<P: Projection>(state: &GameState<P>, hud: &HudLayout, mouse_pos: (f32, f32)) {
    let color = ui::cell_color(state.menu.palette_index);
    let px = hud.panel_x;

    draw_text(&format!("Generations: {}", state.grid.generation()), 20.0, 36.0, 20.0, WHITE);
    draw_text(
        "Space: Play/Pause | R: Randomize | C: Clear | Arrows/WASD: Move | Wheel, +/-: Zoom | ESC: Menu",
        20.0,
        screen_height() - 16.0,
        16.0,
        WHITE,
    );

    let (rows, cols) = state.grid.dimensions();
    draw_text(&format!("Grid: {rows}x{cols}"), px, 36.0, 20.0, WHITE);

    draw_text("Cell Color:", px, 76.0, 20.0, WHITE);
    draw_rectangle(px + 120.0, 60.0, 30.0, 30.0, color);
    draw_rectangle_lines(px + 120.0, 60.0, 30.0, 30.0, 1.0, WHITE);

    draw_text("Zoom:", px, ui::ZOOM_ROW_Y + 20.0, 20.0, WHITE);
    hud.draw_zoom_buttons(color, mouse_pos);
    draw_text(&format!("{:.1}x", state.view.zoom()), px, ui::ZOOM_ROW_Y + 50.0, 16.0, WHITE);
}

fn draw_pause_overlay() {
    let (width, height) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, width, height, Color::new(0.0, 0.0, 0.0, 0.7));

    for (text, font_size, y) in [
        ("PAUSED", 40.0, height / 2.0),
        ("Press SPACE to resume", 20.0, height / 2.0 + 40.0),
    ] {
        let size = measure_text(text, None, font_size as u16, 1.0);
        draw_text(text, (width - size.width) / 2.0, y, font_size, WHITE);
    }
}
