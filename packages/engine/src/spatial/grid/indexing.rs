use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx / w) as u32, (idx % w) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Index of `(row, col)` or `OutOfBounds`.
    #[inline]
    pub fn checked_index(&self, row: u32, col: u32) -> Result<usize, GridError> {
        if self.in_bounds(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    // === Toroidal wrap ===
    #[inline(always)]
    pub(crate) fn row_above(&self, row: u32) -> u32 {
        if row == 0 { self.height - 1 } else { row - 1 }
    }

    #[inline(always)]
    pub(crate) fn row_below(&self, row: u32) -> u32 {
        if row + 1 == self.height { 0 } else { row + 1 }
    }

    #[inline(always)]
    pub(crate) fn col_left(&self, col: u32) -> u32 {
        if col == 0 { self.width - 1 } else { col - 1 }
    }

    #[inline(always)]
    pub(crate) fn col_right(&self, col: u32) -> u32 {
        if col + 1 == self.width { 0 } else { col + 1 }
    }

    /// Wrap an arbitrary offset from `(row, col)` onto the torus.
    #[inline]
    pub fn wrap(&self, row: u32, col: u32, dr: u32, dc: u32) -> (u32, u32) {
        let r = (row as u64 + dr as u64) % self.height as u64;
        let c = (col as u64 + dc as u64) % self.width as u64;
        (r as u32, c as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 3), 3);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(2, 3), 11);
    }

    #[test]
    fn coords_invert_index() {
        let grid = Grid::new(5, 4).unwrap();
        for idx in 0..grid.size() {
            let (r, c) = grid.coords(idx);
            assert!(grid.in_bounds(r, c));
            assert_eq!(grid.index(r, c), idx);
        }
    }

    #[test]
    fn checked_index_reports_dimensions() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.checked_index(2, 3), Ok(11));
        assert_eq!(
            grid.checked_index(3, 0),
            Err(GridError::OutOfBounds { row: 3, col: 0, height: 3, width: 4 })
        );
        assert!(grid.checked_index(0, 4).is_err());
    }

    #[test]
    fn edges_wrap_to_opposite_side() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.row_above(0), 2);
        assert_eq!(grid.row_below(2), 0);
        assert_eq!(grid.col_left(0), 3);
        assert_eq!(grid.col_right(3), 0);
        assert_eq!(grid.row_above(1), 0);
        assert_eq!(grid.col_right(1), 2);
    }

    #[test]
    fn single_row_wraps_onto_itself() {
        let grid = Grid::new(3, 1).unwrap();
        assert_eq!(grid.row_above(0), 0);
        assert_eq!(grid.row_below(0), 0);
    }

    #[test]
    fn wrap_handles_large_offsets() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.wrap(2, 3, 1, 1), (0, 0));
        assert_eq!(grid.wrap(0, 0, 7, 9), (1, 1));
    }
}
