use super::*;

impl Grid {
    /// Live cells among the 8 toroidal neighbors of `(row, col)`.
    ///
    /// Offsets are counted as positions: on a grid 1 or 2 cells wide or high
    /// several offsets land on the same cell (or the cell itself) and each
    /// landing counts.
    #[inline]
    pub fn live_neighbors(&self, row: u32, col: u32) -> u8 {
        let up = self.index(self.row_above(row), 0);
        let mid = self.index(row, 0);
        let down = self.index(self.row_below(row), 0);
        let left = self.col_left(col) as usize;
        let c = col as usize;
        let right = self.col_right(col) as usize;

        let cells = &self.cells;
        cells[up + left] as u8
            + cells[up + c] as u8
            + cells[up + right] as u8
            + cells[mid + left] as u8
            + cells[mid + right] as u8
            + cells[down + left] as u8
            + cells[down + c] as u8
            + cells[down + right] as u8
    }
}
