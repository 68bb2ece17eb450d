//! The board.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt::{self, Display, Formatter};

/// Offsets of the 8 cells in the Moore neighborhood.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size Game of Life board.
///
/// Cells are stored row-major: the cell at `(column, row)` has index
/// `row * columns + column`. The dimensions are fixed for the lifetime of
/// the board; changing the size means constructing a new board.
///
/// Everything outside the grid behaves as a permanently dead border:
/// out-of-range reads return dead and out-of-range writes are silently
/// ignored, so boundary neighbor lookups and careless callers never panic.
#[derive(Clone, Debug)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
    stalled: bool,
    rng: StdRng,
}

impl Board {
    /// Creates a fully dead board with the given dimensions.
    ///
    /// The random source for [`randomize`](Self::randomize) is seeded from
    /// entropy once, here, and never reseeded.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::with_rng(columns, rows, StdRng::from_entropy())
    }

    /// Creates a fully dead board whose random source is seeded with `seed`,
    /// so that successive [`randomize`](Self::randomize) calls are
    /// reproducible.
    pub fn with_seed(columns: usize, rows: usize, seed: u64) -> Self {
        Self::with_rng(columns, rows, StdRng::seed_from_u64(seed))
    }

    fn with_rng(columns: usize, rows: usize, rng: StdRng) -> Self {
        Self {
            columns,
            rows,
            cells: vec![false; columns * rows],
            stalled: false,
            rng,
        }
    }

    /// The number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of cells, i.e. `columns * rows`.
    #[inline]
    pub fn total_size(&self) -> usize {
        self.columns * self.rows
    }

    /// Whether the last [`advance`](Self::advance) left the board unchanged.
    ///
    /// `false` before the first `advance`. Mutating the board after a stall
    /// leaves this flag stale until the next `advance` recomputes it.
    #[inline]
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Maps a coordinate pair to its row-major index.
    ///
    /// A pure mapping with no bounds check; the result is only meaningful
    /// for in-range coordinates.
    #[inline]
    pub fn index_of(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    /// The `(column, row)` of the cell at `index`, or `None` if the index
    /// is out of range.
    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.total_size()).then(|| (index % self.columns, index / self.columns))
    }

    /// The state of the cell at `index`; dead if the index is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// The state of the cell at `(column, row)`; dead if either coordinate
    /// is outside the grid.
    #[inline]
    pub fn get_at(&self, column: isize, row: isize) -> bool {
        if self.contains(column, row) {
            self.get(self.index_of(column as usize, row as usize))
        } else {
            false
        }
    }

    /// Sets the cell at `index`; a no-op if the index is out of range.
    #[inline]
    pub fn set(&mut self, index: usize, alive: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = alive;
        }
    }

    /// Sets the cell at `(column, row)`; a no-op if either coordinate is
    /// outside the grid.
    #[inline]
    pub fn set_at(&mut self, column: isize, row: isize, alive: bool) {
        if self.contains(column, row) {
            self.set(self.index_of(column as usize, row as usize), alive);
        }
    }

    /// Flips the cell at `index`; a no-op if the index is out of range.
    #[inline]
    pub fn toggle(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = !*cell;
        }
    }

    /// Flips the cell at `(column, row)`; a no-op if either coordinate is
    /// outside the grid.
    #[inline]
    pub fn toggle_at(&mut self, column: isize, row: isize) {
        if self.contains(column, row) {
            self.toggle(self.index_of(column as usize, row as usize));
        }
    }

    /// The cells in row-major order. For renderers.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Sets every cell independently to a uniformly random state.
    pub fn randomize(&mut self) {
        for cell in &mut self.cells {
            *cell = self.rng.gen();
        }
    }

    /// Advances the board by one generation under the B3/S23 rule.
    ///
    /// The next generation is computed entirely from the current one into a
    /// fresh buffer, then swapped in, so a neighbor count never mixes old
    /// and new values and readers never see a half-updated grid. If no cell
    /// changed the board has reached a fixed point: the new buffer is
    /// discarded, the grid is left bit-for-bit as it was, and
    /// [`is_stalled`](Self::is_stalled) reports `true` until an external
    /// mutation and a later `advance` say otherwise.
    pub fn advance(&mut self) {
        let mut next = vec![false; self.total_size()];
        let mut stalled = true;

        for (index, cell) in next.iter_mut().enumerate() {
            *cell = self.next_value(index);
            if *cell != self.cells[index] {
                stalled = false;
            }
        }

        self.stalled = stalled;
        if !stalled {
            self.cells = next;
        }
    }

    /// The state of the cell at in-range `index` in the next generation.
    fn next_value(&self, index: usize) -> bool {
        let column = (index % self.columns) as isize;
        let row = (index / self.columns) as isize;

        let live_neighbors = NEIGHBORHOOD
            .iter()
            .filter(|&&(dx, dy)| self.get_at(column + dx, row + dy))
            .count();

        if self.cells[index] {
            live_neighbors == 2 || live_neighbors == 3
        } else {
            live_neighbors == 3
        }
    }

    /// Whether `(column, row)` is inside the grid.
    #[inline]
    fn contains(&self, column: isize, row: isize) -> bool {
        (0..self.columns as isize).contains(&column) && (0..self.rows as isize).contains(&row)
    }
}

/// Plaintext rendering: one line per row, `O` for live cells, `.` for dead.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            for &alive in row {
                f.write_str(if alive { "O" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
