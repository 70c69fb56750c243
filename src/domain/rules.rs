use super::Grid;

/// Conway's Game of Life (B3/S23):
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive_now: bool, neighbors: u8) -> bool {
    matches!((alive_now, neighbors), (true, 2 | 3) | (false, 3))
}

/// Stage the next generation of every cell.
/// Only `alive_next_round` is written, so every cell sees the same
/// current generation when its neighbors are counted.
pub fn compute_next_generation(grid: &mut Grid) {
    let (rows, columns) = grid.dimensions();
    for y in 0..rows {
        for x in 0..columns {
            let alive_next = next_state(grid.is_alive(y, x), grid.neighbor_count(y, x));
            grid.stage(y, x, alive_next);
        }
    }
}
