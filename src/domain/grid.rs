use super::{Cell, GridError};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Largest accepted side length, keeps allocations bounded.
pub const MAX_DIMENSION: usize = 10_000;

/// A draw from [0, 1) above this value makes a cell alive on randomize,
/// which gives each cell a 0.15 chance of life.
pub const RANDOMIZE_THRESHOLD: f32 = 0.85;

/// Grid owns the cellular automaton state.
///
/// Cells are stored row-major. A scratch buffer of the same shape receives
/// each new generation so neighbor counts always read the previous one.
/// Positions outside the grid are dead; there is no wraparound.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    generation: u64,
    rng: StdRng,
}

impl Grid {
    /// Create a new grid with all cells dead.
    /// The random source is seeded once here and reused by every `randomize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::from_rng(&mut rand::rng()))
    }

    /// Same as `new` but with a reproducible random source
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, cols: usize, rng: StdRng) -> Result<Self, GridError> {
        validate(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            scratch: vec![Cell::Dead; rows * cols],
            generation: 0,
            rng,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Generations computed since the last clear, randomize or resize
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell at position (None when out of bounds)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out of bounds is ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip a cell. Out of bounds is a silent no-op.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = self.cells[idx].toggle();
            log::debug!("toggled cell ({row}, {col}) -> {:?}", self.cells[idx]);
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live cells among the 8 Moore neighbors of an in-bounds position.
    /// Neighbors past the edge count as dead.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(self.in_bounds(row, col));
        let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);

        row_range
            .flat_map(|r| {
                let col_range = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);
                col_range.map(move |c| (r, c))
            })
            .filter(|&(r, c)| (r, c) != (row, col))
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Advance one generation.
    /// Every new state is computed from the current buffer into the scratch
    /// buffer, then the two are swapped.
    pub fn next_generation(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let neighbors = self.count_neighbors(row, col);
                self.scratch[idx] = self.cells[idx].evolve(neighbors);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;

        if self.generation % 100 == 0 {
            log::debug!("reached generation {}", self.generation);
        }
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
        log::debug!("grid cleared");
    }

    /// Each cell becomes alive with probability 0.15, independently.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from_alive(rng.random::<f32>() > RANDOMIZE_THRESHOLD);
        });
        self.generation = 0;
        log::debug!("grid randomized, population {}", self.population());
    }

    /// Reallocate to new dimensions with every cell dead.
    /// Prior content is discarded; on error the grid is unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        validate(rows, cols)?;
        self.rows = rows;
        self.cols = cols;
        self.cells = vec![Cell::Dead; rows * cols];
        self.scratch = vec![Cell::Dead; rows * cols];
        self.generation = 0;
        log::info!("grid resized to {rows}x{cols}");
        Ok(())
    }

    /// Iterate over all cells as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

fn validate(rows: usize, cols: usize) -> Result<(), GridError> {
    let valid = |n: usize| (1..=MAX_DIMENSION).contains(&n);
    if valid(rows) && valid(cols) {
        Ok(())
    } else {
        Err(GridError::InvalidDimension { rows, cols })
    }
}
