use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A finite Game of Life field with a generation counter.
///
/// Dimensions are fixed at construction. Cells outside the field count as
/// dead for every query, so the boundary never wraps around.
pub struct Board {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
    generation: u64,
}

impl Board {
    /// Creates a field filled with dead cells at generation 0.
    pub fn blank(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of transition steps this field is derived from.
    ///
    /// Interactive edits never change it; only [`Board::next_generation`]
    /// does.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the cell is alive. Out-of-range coordinates are dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Counts alive cells among the 8 Moore neighbors.
    ///
    /// Neighbors outside the field contribute 0, so the result is in
    /// `[0, 8]` even at corners.
    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr, dc) == (0, 0) {
                    continue;
                }
                if self.alive_at(row as isize + dr, col as isize + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    fn alive_at(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && self.is_alive(row as usize, col as usize)
    }

    /// Derives the successor field without touching this one.
    ///
    /// A live cell survives with 2 or 3 live neighbors and dies of
    /// under- or over-population otherwise; a dead cell becomes alive
    /// with exactly 3. The successor's generation is this one's plus 1.
    pub fn next_generation(&self) -> Self {
        let mut cells = vec![false; self.rows * self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let n = self.neighbor_count(row, col);
                let alive = if self.cells[row * self.cols + col] {
                    n == 2 || n == 3
                } else {
                    n == 3
                };
                cells[row * self.cols + col] = alive;
            }
        }
        Self {
            cells,
            rows: self.rows,
            cols: self.cols,
            generation: self.generation + 1,
        }
    }

    /// Sets one cell. Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, state: bool) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = state;
        }
    }

    /// Flips one cell and returns the resulting state.
    ///
    /// The press that starts a paint gesture uses the returned state to
    /// decide whether the drag spawns or kills cells. Out-of-range
    /// coordinates stay dead.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let state = !self.cells[row * self.cols + col];
        self.cells[row * self.cols + col] = state;
        state
    }

    /// Sets one cell only if its state differs; reports whether it changed.
    pub fn set_cell_if_different(&mut self, row: usize, col: usize, state: bool) -> bool {
        if row >= self.rows || col >= self.cols || self.cells[row * self.cols + col] == state {
            return false;
        }
        self.cells[row * self.cols + col] = state;
        true
    }

    /// Fills the field with random cells.
    ///
    /// `seed` - random seed (if `None`, then a random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
