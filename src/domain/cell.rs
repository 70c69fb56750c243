/// Cell is one square of the board, double-buffered.
/// `alive_next_round` is scratch space that only holds a value between
/// computing the next generation and committing it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive_this_round: bool,
    pub alive_next_round: bool,
}

impl Cell {
    /// A cell that is alive this round with an empty scratch slot
    pub const fn alive() -> Self {
        Self {
            alive_this_round: true,
            alive_next_round: false,
        }
    }

    /// A dead cell
    pub const fn dead() -> Self {
        Self {
            alive_this_round: false,
            alive_next_round: false,
        }
    }

    /// Move the scratch state into the current state.
    /// Returns true when the cell flipped.
    pub fn commit(&mut self) -> bool {
        let changed = self.alive_this_round != self.alive_next_round;
        self.alive_this_round = self.alive_next_round;
        self.alive_next_round = false;
        changed
    }
}
