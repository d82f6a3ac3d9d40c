//! Cell state - one byte per cell, shared verbatim with the renderer.
//!
//! `#[repr(u8)]` with `Dead = 0` / `Alive = 1` means a `&[Cell]` is the
//! exported byte layout, no conversion pass needed.

use bytemuck::NoUninit;
use wasm_bindgen::prelude::*;

pub const CELL_DEAD: u8 = 0;
pub const CELL_ALIVE: u8 = 1;

#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, NoUninit)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Decode an exported byte. Anything other than 0/1 is rejected.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Cell> {
        match byte {
            CELL_DEAD => Some(Cell::Dead),
            CELL_ALIVE => Some(Cell::Alive),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Reinterpret a cell slice as its exported bytes.
#[inline]
pub fn cells_as_bytes(cells: &[Cell]) -> &[u8] {
    bytemuck::cast_slice(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_encoding_is_zero_one() {
        assert_eq!(Cell::Dead.as_byte(), 0);
        assert_eq!(Cell::Alive.as_byte(), 1);
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn from_byte_rejects_other_values() {
        assert_eq!(Cell::from_byte(0), Some(Cell::Dead));
        assert_eq!(Cell::from_byte(1), Some(Cell::Alive));
        assert_eq!(Cell::from_byte(2), None);
        assert_eq!(Cell::from_byte(255), None);
    }

    #[test]
    fn cast_keeps_row_major_order() {
        let cells = [Cell::Alive, Cell::Dead, Cell::Dead, Cell::Alive];
        assert_eq!(cells_as_bytes(&cells), &[1, 0, 0, 1]);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
    }
}
