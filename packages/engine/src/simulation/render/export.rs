//! Zero-copy view of the current generation for renderers.
//!
//! A `CellsView` borrows the universe, so the borrow checker rejects any
//! `advance()` while one is alive. JS callers get the same bytes through
//! `Universe::cells()` and must re-read the pointer after every tick.

use crate::domain::cell::{cells_as_bytes, Cell};

use super::UniverseCore;

#[derive(Clone, Copy, Debug)]
pub struct CellsView<'a> {
    cells: &'a [Cell],
    width: u32,
    height: u32,
}

pub(super) fn view(universe: &UniverseCore) -> CellsView<'_> {
    CellsView {
        cells: universe.grid.cells(),
        width: universe.width(),
        height: universe.height(),
    }
}

impl<'a> CellsView<'a> {
    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// Row-major bytes, 0 = dead, 1 = alive.
    pub fn as_bytes(&self) -> &'a [u8] {
        cells_as_bytes(self.cells)
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row as usize * self.width as usize + col as usize])
    }

    pub fn row(&self, row: u32) -> Option<&'a [Cell]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks_exact(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Cell, Seed};
    use crate::simulation::UniverseCore;

    #[test]
    fn bytes_are_row_major_zero_one() {
        let universe = UniverseCore::new(3, 2, Seed::Alive { cells: vec![(0, 2), (1, 0)] }).unwrap();
        let view = universe.cells();
        assert_eq!(view.as_bytes(), &[0, 0, 1, 1, 0, 0]);
        assert_eq!(view.len(), 6);
        assert!(!view.is_empty());
    }

    #[test]
    fn view_points_at_the_live_buffer() {
        let universe = UniverseCore::new(4, 4, Seed::Classic).unwrap();
        assert_eq!(universe.cells().as_ptr(), universe.cells_ptr() as *const u8);
    }

    #[test]
    fn rows_and_lookup_agree() {
        let universe = UniverseCore::new(3, 2, Seed::Alive { cells: vec![(1, 1)] }).unwrap();
        let view = universe.cells();
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Cell::Dead, Cell::Alive, Cell::Dead]);
        assert_eq!(view.row(1), Some(rows[1]));
        assert_eq!(view.row(2), None);
        assert_eq!(view.get(1, 1), Some(Cell::Alive));
        assert_eq!(view.get(0, 3), None);
    }
}
