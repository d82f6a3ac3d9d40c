//! Conway's B3/S23 transition rule.

use super::cell::Cell;

/// Next state of a cell given its current state and live neighbor count.
///
/// Born with exactly 3 neighbors, survives with 2 or 3, dead otherwise.
#[inline(always)]
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_neighbors_always_alive() {
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
    }

    #[test]
    fn survival_only_on_two_or_three() {
        for n in 0..=8u8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Alive, n), expected, "alive with {n}");
        }
    }

    #[test]
    fn birth_only_on_three() {
        for n in 0..=8u8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Dead, n), expected, "dead with {n}");
        }
    }
}
