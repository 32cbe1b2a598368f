use crate::config::Config;
use crate::domain::{Grid, GridError};
use crate::projection::{ActiveProjection, Projection};
use super::ViewState;

/// Number of selectable cell colors
pub const PALETTE_SIZE: usize = 7;

/// Top-level screen the session is on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Paused,
}

/// Discrete inputs that move the session between phases
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Space bar
    TogglePause,
    /// Escape
    ToggleMenu,
    /// Play button on the menu
    Play,
}

impl Phase {
    pub const fn on(self, event: PhaseEvent) -> Self {
        match (self, event) {
            (Phase::Playing, PhaseEvent::TogglePause) => Phase::Paused,
            (Phase::Paused, PhaseEvent::TogglePause) => Phase::Playing,
            (Phase::Menu, PhaseEvent::TogglePause) => Phase::Menu,
            (Phase::Menu, PhaseEvent::ToggleMenu) => Phase::Playing,
            (_, PhaseEvent::ToggleMenu) => Phase::Menu,
            (Phase::Menu, PhaseEvent::Play) => Phase::Playing,
            (phase, PhaseEvent::Play) => phase,
        }
    }
}

/// Grid sizes offered by the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Small, GridSize::Medium, GridSize::Large];

    /// Rows and columns of the square grid
    pub const fn side(self) -> usize {
        match self {
            GridSize::Small => 20,
            GridSize::Medium => 40,
            GridSize::Large => 60,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GridSize::Small => "20x20",
            GridSize::Medium => "40x40",
            GridSize::Large => "60x60",
        }
    }
}

/// Choices made on the menu, scoped to one session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuSelection {
    pub grid_size: GridSize,
    pub palette_index: usize,
}

/// GameState is one interactive session.
/// It owns the grid and the camera and decides when a generation runs.
pub struct GameState<P: Projection = ActiveProjection> {
    pub grid: Grid,
    pub view: ViewState<P>,
    pub phase: Phase,
    pub menu: MenuSelection,
    update_timer: f32,
    step_interval: f32,
    zoom_step: f32,
    pan_step: f32,
}

impl<P: Projection> GameState<P> {
    /// Session on the menu with a centered grid of the default size
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let menu = MenuSelection::default();
        let side = menu.grid_size.side();
        let mut view = ViewState::new(config);
        view.center_on(side, side);

        Ok(Self {
            grid: Grid::new(side, side)?,
            view,
            phase: Phase::default(),
            menu,
            update_timer: 0.0,
            step_interval: config.step_interval,
            zoom_step: config.zoom_step,
            pan_step: config.pan_step,
        })
    }

    pub fn handle(&mut self, event: PhaseEvent) {
        let next = self.phase.on(event);
        if next != self.phase {
            log::info!("{:?} -> {:?}", self.phase, next);
            self.phase = next;
            self.update_timer = 0.0;
        }
    }

    pub fn in_menu(&self) -> bool {
        self.phase == Phase::Menu
    }

    /// Resize to a menu preset and recenter the camera
    pub fn select_grid_size(&mut self, size: GridSize) -> Result<(), GridError> {
        self.grid.resize(size.side(), size.side())?;
        self.menu.grid_size = size;
        self.view.reset(size.side(), size.side());
        Ok(())
    }

    /// Ignores indices past the palette
    pub fn select_palette(&mut self, index: usize) {
        if index < PALETTE_SIZE {
            self.menu.palette_index = index;
        }
    }

    /// Flip the cell under a screen point. Returns the (row, col) toggled,
    /// or None when in the menu or off the grid.
    pub fn toggle_at(&mut self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if self.in_menu() {
            return None;
        }
        let (col, row) = self.view.screen_to_grid(screen_x, screen_y);
        let row = usize::try_from(row).ok().filter(|&r| r < self.grid.rows())?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.grid.cols())?;
        self.grid.toggle_cell(row, col);
        Some((row, col))
    }

    /// Randomize the grid (not from the menu)
    pub fn randomize(&mut self) {
        if !self.in_menu() {
            self.grid.randomize();
        }
    }

    /// Clear the grid (not from the menu)
    pub fn clear(&mut self) {
        if !self.in_menu() {
            self.grid.clear();
        }
    }

    pub fn zoom_in(&mut self) {
        self.view.apply_zoom_delta(self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.view.apply_zoom_delta(-self.zoom_step);
    }

    /// Pan by whole steps, e.g. (1, 0) for one step right
    pub fn pan_steps(&mut self, x_steps: f32, y_steps: f32) {
        self.view.pan(x_steps * self.pan_step, y_steps * self.pan_step);
    }

    /// Advance the clock by one frame.
    /// Runs at most one generation, and only while playing.
    /// Returns true when a generation ran.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.update_timer += delta_time;
        if self.update_timer < self.step_interval {
            return false;
        }

        self.grid.next_generation();
        self.update_timer = 0.0;
        true
    }
}
