use macroquad::prelude::*;
use isometric_life::{
    ActiveProjection, Config, GameState,
    logging::{self, LoggingConfig},
    ui::{self, HudLayout, MenuLayout},
    rendering, input,
};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: ui::window_title(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init_logging(LoggingConfig::default());

    let config = Config::default();
    let mut state = match GameState::<ActiveProjection>::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start session: {err}");
            return;
        }
    };
    let menu = MenuLayout::new(config.screen_width, config.screen_height);
    let hud = HudLayout::new(config.screen_width);
    log::info!("session started with a {}x{} grid", state.grid.rows(), state.grid.cols());

    loop {
        let mouse_pos = mouse_position();

        input::process_keyboard_input(&mut state);
        if let Err(err) = input::process_mouse_input(&mut state, &menu, &hud, mouse_pos) {
            log::warn!("keeping current grid: {err}");
        }

        state.tick(get_frame_time());

        rendering::draw_frame(&state, &menu, &hud, mouse_pos);

        next_frame().await;
    }
}
