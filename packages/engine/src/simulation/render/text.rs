use std::fmt;

use crate::domain::Cell;

use super::{CellsView, UniverseCore};

const ALIVE_GLYPH: char = '◼';
const DEAD_GLYPH: char = '◻';

impl fmt::Display for CellsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                let glyph = if cell == Cell::Alive { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for UniverseCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cells(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Seed;
    use crate::simulation::UniverseCore;

    #[test]
    fn renders_one_line_per_row() {
        let universe = UniverseCore::new(3, 2, Seed::Alive { cells: vec![(0, 1), (1, 2)] }).unwrap();
        assert_eq!(universe.render(), "◻◼◻\n◻◻◼\n");
    }

    #[test]
    fn dead_universe_renders_blank_squares() {
        let universe = UniverseCore::new(2, 1, Seed::Dead).unwrap();
        assert_eq!(universe.render(), "◻◻\n");
    }
}
