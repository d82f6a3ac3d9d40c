use super::super::*;

impl Grid {
    // === Whole-buffer access ===
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn live_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u32
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    // === Single cell access ===
    pub fn get(&self, row: u32, col: u32) -> Result<Cell, GridError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell; returns its new state.
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<Cell, GridError> {
        let idx = self.checked_index(row, col)?;
        let next = self.cells[idx].toggled();
        self.cells[idx] = next;
        Ok(next)
    }

    /// Set every listed cell, or none of them if any coordinate is out of bounds.
    pub fn set_many(&mut self, coords: &[(u32, u32)], cell: Cell) -> Result<(), GridError> {
        let indices = coords
            .iter()
            .map(|&(r, c)| self.checked_index(r, c))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            self.cells[idx] = cell;
        }
        Ok(())
    }
}
