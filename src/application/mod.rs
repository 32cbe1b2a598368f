mod game_state;
mod view_state;

pub use game_state::{GameState, GridSize, MenuSelection, Phase, PhaseEvent, PALETTE_SIZE};
pub use view_state::ViewState;
