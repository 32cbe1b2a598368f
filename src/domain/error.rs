use thiserror::Error;

use super::grid::MAX_DIMENSION;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: each side must be in 1..={max}", max = MAX_DIMENSION)]
    InvalidDimension { rows: usize, cols: usize },
}
