use crate::domain::rules::next_state;

use super::*;

/// What one `advance()` changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    pub births: u32,
    pub deaths: u32,
    pub live: u32,
}

impl Grid {
    /// Compute the next generation into `scratch`, then swap it in.
    ///
    /// Every read comes from `cells` and every write goes to `scratch`, so no
    /// cell observes a neighbor's new state. The swap is the only point where
    /// the visible generation changes.
    pub fn advance(&mut self) -> GenerationDelta {
        let mut delta = GenerationDelta::default();

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let current = self.cells[idx];
                let next = next_state(current, self.live_neighbors(row, col));

                match (current, next) {
                    (Cell::Dead, Cell::Alive) => delta.births += 1,
                    (Cell::Alive, Cell::Dead) => delta.deaths += 1,
                    _ => {}
                }
                if next == Cell::Alive {
                    delta.live += 1;
                }
                self.scratch[idx] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        delta
    }
}
