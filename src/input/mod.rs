use macroquad::prelude::*;
use crate::application::{GameState, PhaseEvent};
use crate::domain::GridError;
use crate::projection::Projection;
use crate::ui::{HudAction, HudLayout, MenuAction, MenuLayout};

/// Keys held down to pan, with the direction in pan steps.
/// The keys move the grid, so Up pushes it down the screen.
pub const PAN_KEYS: [(KeyCode, (f32, f32)); 8] = [
    (KeyCode::Up, (0.0, 1.0)),
    (KeyCode::W, (0.0, 1.0)),
    (KeyCode::Down, (0.0, -1.0)),
    (KeyCode::S, (0.0, -1.0)),
    (KeyCode::Left, (1.0, 0.0)),
    (KeyCode::A, (1.0, 0.0)),
    (KeyCode::Right, (-1.0, 0.0)),
    (KeyCode::D, (-1.0, 0.0)),
];

/// Actions fired once per key press
pub fn key_actions<P: Projection>() -> [(KeyCode, fn(&mut GameState<P>)); 8] {
    [
        (KeyCode::Space, |s| s.handle(PhaseEvent::TogglePause)),
        (KeyCode::Escape, |s| s.handle(PhaseEvent::ToggleMenu)),
        (KeyCode::R, GameState::randomize),
        (KeyCode::C, GameState::clear),
        (KeyCode::Equal, GameState::zoom_in),
        (KeyCode::KpAdd, GameState::zoom_in),
        (KeyCode::Minus, GameState::zoom_out),
        (KeyCode::KpSubtract, GameState::zoom_out),
    ]
}

/// Handle key presses and held pan keys
pub fn process_keyboard_input<P: Projection>(state: &mut GameState<P>) {
    for (key, action) in key_actions() {
        if is_key_pressed(key) {
            action(state);
        }
    }

    for (key, (dx, dy)) in PAN_KEYS {
        if is_key_down(key) {
            state.pan_steps(dx, dy);
        }
    }
}

/// Handle the mouse wheel and left clicks
pub fn process_mouse_input<P: Projection>(
    state: &mut GameState<P>,
    menu: &MenuLayout,
    hud: &HudLayout,
    mouse_pos: (f32, f32),
) -> Result<(), GridError> {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        state.zoom_in();
    } else if wheel < 0.0 {
        state.zoom_out();
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        handle_click(state, menu, hud, mouse_pos)?;
    }
    Ok(())
}

/// Route a click to the menu, the HUD or the grid, in that order
pub fn handle_click<P: Projection>(
    state: &mut GameState<P>,
    menu: &MenuLayout,
    hud: &HudLayout,
    mouse_pos: (f32, f32),
) -> Result<(), GridError> {
    if state.in_menu() {
        return match menu.action_at(mouse_pos) {
            Some(action) => apply_menu_action(state, action),
            None => Ok(()),
        };
    }

    match hud.action_at(mouse_pos) {
        Some(HudAction::ZoomIn) => state.zoom_in(),
        Some(HudAction::ZoomOut) => state.zoom_out(),
        None => {
            state.toggle_at(mouse_pos.0, mouse_pos.1);
        }
    }
    Ok(())
}

pub fn apply_menu_action<P: Projection>(
    state: &mut GameState<P>,
    action: MenuAction,
) -> Result<(), GridError> {
    match action {
        MenuAction::Play => state.handle(PhaseEvent::Play),
        MenuAction::SelectSize(size) => state.select_grid_size(size)?,
        MenuAction::SelectPalette(index) => state.select_palette(index),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{GridSize, Phase};
    use crate::config::Config;
    use crate::projection::Orthogonal;

    fn fixture() -> (GameState<Orthogonal>, MenuLayout, HudLayout) {
        let config = Config::default();
        (
            GameState::new(&config).unwrap(),
            MenuLayout::new(config.screen_width, config.screen_height),
            HudLayout::new(config.screen_width),
        )
    }

    #[test]
    fn test_menu_clicks_select_then_play() {
        let (mut state, menu, hud) = fixture();
        handle_click(&mut state, &menu, &hud, (500.0, 350.0)).unwrap();
        assert_eq!(state.grid.dimensions(), (20, 20));
        handle_click(&mut state, &menu, &hud, (780.0, 450.0)).unwrap();
        assert_eq!(state.menu.palette_index, 6);
        handle_click(&mut state, &menu, &hud, (640.0, 275.0)).unwrap();
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_hud_click_zooms_without_toggling() {
        let (mut state, menu, hud) = fixture();
        state.handle(PhaseEvent::Play);
        handle_click(&mut state, &menu, &hud, (1225.0, 115.0)).unwrap();
        assert_eq!(state.view.zoom(), 1.1);
        handle_click(&mut state, &menu, &hud, (1185.0, 115.0)).unwrap();
        assert_eq!(state.view.zoom(), 1.0);
        assert_eq!(state.grid.population(), 0);
    }

    fn press<P: Projection>(state: &mut GameState<P>, key: KeyCode) {
        for (bound, action) in key_actions() {
            if bound == key {
                action(state);
            }
        }
    }

    #[test]
    fn test_zoom_keys() {
        let (mut state, _, _) = fixture();
        press(&mut state, KeyCode::Equal);
        assert_eq!(state.view.zoom(), 1.1);
        press(&mut state, KeyCode::Minus);
        press(&mut state, KeyCode::KpSubtract);
        assert_eq!(state.view.zoom(), 0.9);
        press(&mut state, KeyCode::KpAdd);
        assert_eq!(state.view.zoom(), 1.0);
    }

    #[test]
    fn test_wasd_pans_like_arrows() {
        let direction = |key: KeyCode| PAN_KEYS.iter().find(|(k, _)| *k == key).map(|(_, d)| *d);
        for (letter, arrow) in [
            (KeyCode::W, KeyCode::Up),
            (KeyCode::A, KeyCode::Left),
            (KeyCode::S, KeyCode::Down),
            (KeyCode::D, KeyCode::Right),
        ] {
            assert!(direction(letter).is_some());
            assert_eq!(direction(letter), direction(arrow));
        }
    }

    #[test]
    fn test_space_and_escape_drive_phases() {
        let (mut state, _, _) = fixture();
        press(&mut state, KeyCode::Space);
        assert_eq!(state.phase, Phase::Menu);
        press(&mut state, KeyCode::Escape);
        assert_eq!(state.phase, Phase::Playing);
        press(&mut state, KeyCode::Space);
        assert_eq!(state.phase, Phase::Paused);
    }

    #[test]
    fn test_grid_click_toggles_cell() {
        let (mut state, menu, hud) = fixture();
        apply_menu_action(&mut state, MenuAction::SelectSize(GridSize::Small)).unwrap();
        apply_menu_action(&mut state, MenuAction::Play).unwrap();
        let (x, y) = state.view.grid_to_screen(3, 4);
        handle_click(&mut state, &menu, &hud, (x + 5.0, y + 5.0)).unwrap();
        assert!(state.grid.is_alive(4, 3));
    }
}
