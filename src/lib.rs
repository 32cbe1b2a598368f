// Domain layer - grid engine
pub mod domain;

// Coordinate transforms between grid and screen
pub mod projection;

// Application layer - camera and session
pub mod application;

pub mod config;
pub mod logging;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError};
pub use projection::{ActiveProjection, Isometric, Orthogonal, Projection};
pub use application::{GameState, Phase, PhaseEvent, ViewState};
pub use config::Config;
