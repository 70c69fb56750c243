use std::fmt;

use super::Cell;
use crate::error::{Error, Result};

/// The two characters a grid is drawn with, also the two characters a
/// pattern source may contain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub const fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub const fn glyph(&self, alive: bool) -> char {
        if alive { self.alive } else { self.dead }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new('o', ' ')
    }
}

/// Grid owns the board: a fixed `rows` x `columns` matrix of cells kept in a
/// single row-major buffer. Edges are hard walls, there is no wraparound.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    glyphs: Glyphs,
}

impl Grid {
    /// Create a grid with every cell dead.
    /// Fails on a zero dimension or when the buffer cannot be reserved.
    pub fn new(rows: usize, columns: usize, glyphs: Glyphs) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidParameter(format!(
                "grid must have at least one row and one column, got {rows}x{columns}"
            )));
        }
        let allocation = Error::Allocation { rows, columns };
        let len = rows.checked_mul(columns).ok_or(allocation)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { rows, columns })?;
        cells.resize(len, Cell::dead());

        Ok(Self {
            rows,
            columns,
            cells,
            glyphs,
        })
    }

    /// (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    const fn index(&self, y: usize, x: usize) -> usize {
        y * self.columns + x
    }

    /// Cell at (y, x), or None when off the grid
    pub fn get(&self, y: usize, x: usize) -> Option<&Cell> {
        (y < self.rows && x < self.columns).then(|| &self.cells[self.index(y, x)])
    }

    pub fn is_alive(&self, y: usize, x: usize) -> bool {
        self.get(y, x).is_some_and(|cell| cell.alive_this_round)
    }

    /// Set the current state of a cell. Off-grid coordinates are ignored.
    pub fn set(&mut self, y: usize, x: usize, alive: bool) {
        if y < self.rows && x < self.columns {
            let idx = self.index(y, x);
            self.cells[idx].alive_this_round = alive;
        }
    }

    /// Write the next-round state of a cell without touching its current state.
    pub(crate) fn stage(&mut self, y: usize, x: usize, alive_next: bool) {
        let idx = self.index(y, x);
        self.cells[idx].alive_next_round = alive_next;
    }

    /// Number of live cells among the up to eight in-grid neighbors of (y, x).
    /// The caller guarantees (y, x) is on the grid.
    pub fn neighbor_count(&self, y: usize, x: usize) -> u8 {
        debug_assert!(y < self.rows && x < self.columns);
        let ys = y.saturating_sub(1)..=(y + 1).min(self.rows - 1);
        let xs = x.saturating_sub(1)..=(x + 1).min(self.columns - 1);

        let mut n = 0;
        for ny in ys {
            for nx in xs.clone() {
                if (ny, nx) != (y, x) && self.cells[self.index(ny, nx)].alive_this_round {
                    n += 1;
                }
            }
        }
        n
    }

    /// Visit every cell in row-major order
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &Cell),
    {
        for (idx, cell) in self.cells.iter().enumerate() {
            visit(idx / self.columns, idx % self.columns, cell);
        }
    }

    /// Iterate over rows as slices
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// Promote every staged next-round state to the current state.
    /// Returns how many cells flipped; zero means the board is a fixed point.
    pub fn commit_generation(&mut self) -> usize {
        self.cells
            .iter_mut()
            .map(Cell::commit)
            .filter(|&changed| changed)
            .count()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive_this_round).count()
    }
}

/// One plain-text frame: `rows` lines of `columns` glyphs, each newline-terminated.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::with_capacity(self.columns * 4 + 1);
        for row in self.row_slices() {
            line.clear();
            line.extend(row.iter().map(|cell| self.glyphs.glyph(cell.alive_this_round)));
            line.push('\n');
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn grid(rows: usize, columns: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, columns, Glyphs::default()).unwrap();
        for &(y, x) in alive {
            grid.set(y, x, true);
        }
        grid
    }

    /// Reference count using signed offsets and explicit bounds tests
    fn brute_force_count(grid: &Grid, y: usize, x: usize) -> u8 {
        let (rows, columns) = grid.dimensions();
        let mut n = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dy == 0 && dx == 0 {
                    continue;
                }
                let (ny, nx) = (y as i64 + dy, x as i64 + dx);
                if ny >= 0 && nx >= 0 && (ny as usize) < rows && (nx as usize) < columns {
                    n += grid.is_alive(ny as usize, nx as usize) as u8;
                }
            }
        }
        n
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(3, 4, Glyphs::default()).unwrap();
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Grid::new(0, 4, Glyphs::default()),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            Grid::new(4, 0, Glyphs::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_overflowing_size_is_allocation_error() {
        assert!(matches!(
            Grid::new(usize::MAX, 2, Glyphs::default()),
            Err(Error::Allocation { .. })
        ));
    }

    #[test]
    fn test_corner_has_three_neighbors_when_full() {
        let mut grid = grid(3, 3, &[]);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(y, x, true);
            }
        }
        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(0, 1), 5);
        assert_eq!(grid.neighbor_count(1, 1), 8);
        assert_eq!(grid.neighbor_count(2, 2), 3);
    }

    #[test]
    fn test_no_wraparound() {
        let grid = grid(3, 3, &[(0, 2), (2, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 0);
        assert_eq!(grid.neighbor_count(2, 2), 0);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = grid(1, 1, &[(0, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_matches_reference_on_random_grids() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let rows = rng.random_range(1..7);
            let columns = rng.random_range(1..7);
            let mut grid = grid(rows, columns, &[]);
            for y in 0..rows {
                for x in 0..columns {
                    grid.set(y, x, rng.random_bool(0.5));
                }
            }
            for y in 0..rows {
                for x in 0..columns {
                    let n = grid.neighbor_count(y, x);
                    assert!(n <= 8);
                    assert_eq!(n, brute_force_count(&grid, y, x), "({y}, {x}) in {rows}x{columns}");
                }
            }
        }
    }

    #[test]
    fn test_for_each_is_row_major() {
        let grid = grid(2, 3, &[]);
        let mut seen = Vec::new();
        grid.for_each(|y, x, _| seen.push((y, x)));
        assert_eq!(seen, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_commit_counts_flips_and_clears_scratch() {
        let mut grid = grid(2, 2, &[(0, 0), (1, 1)]);
        grid.stage(0, 0, true);
        grid.stage(0, 1, true);
        // (1, 1) dies, (1, 0) stays dead
        assert_eq!(grid.commit_generation(), 2);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(0, 1));
        assert!(!grid.is_alive(1, 1));
        grid.for_each(|_, _, cell| assert!(!cell.alive_next_round));
    }

    #[test]
    fn test_display_draws_one_line_per_row() {
        let grid = grid(2, 3, &[(0, 1), (1, 0), (1, 2)]);
        assert_eq!(grid.to_string(), " o \no o\n");
    }
}
