/// Cell is a single position on the grid, either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23:
    /// exactly 3 neighbors gives life, 2 keeps the current state,
    /// anything else is death.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) => Cell::Alive,
            (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
