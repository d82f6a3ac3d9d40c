use super::super::*;

impl Grid {
    // === Raw pointer for JS interop ===
    // Valid until the next `advance()`, which swaps the buffers.
    pub fn cells_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }

    pub fn cells_byte_len(&self) -> usize {
        self.size * std::mem::size_of::<Cell>()
    }
}
