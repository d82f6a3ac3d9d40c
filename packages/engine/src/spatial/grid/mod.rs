//! Grid - flat row-major cell storage with a double buffer
//!
//! Instead of: Vec<Vec<Cell>>      // Bad: scattered rows, no single export pointer
//! We have:    cells[row * width + col]  // Good: one contiguous block the renderer scans
//!
//! `scratch` has the same length as `cells` and is only written during
//! `advance()`; the two vectors are swapped once a generation is complete.

use crate::core::GridError;
use crate::domain::Cell;

mod indexing;
mod accessors;
mod neighbors;
mod generation;

pub use generation::GenerationDelta;

/// wasm32 hands the renderer a `u32` length, so cell counts must fit one.
pub const MAX_CELLS: usize = u32::MAX as usize;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// All-dead grid. Both buffers are allocated up front so stepping never allocates.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let size = checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            size,
            cells: allocate(size)?,
            scratch: allocate(size)?,
        })
    }
}

fn checked_size(width: u32, height: u32) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&size| size <= MAX_CELLS)
        .ok_or(GridError::InvalidDimensions { width, height })
}

fn allocate(size: usize) -> Result<Vec<Cell>, GridError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| GridError::AllocationFailed { cells: size })?;
    buf.resize(size, Cell::Dead);
    Ok(buf)
}
