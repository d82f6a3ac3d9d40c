use crate::core::GridError;
use crate::domain::{Cell, Preset, Seed};

use super::init::apply_seed;
use super::UniverseCore;

pub(super) fn toggle(universe: &mut UniverseCore, row: u32, col: u32) -> Result<Cell, GridError> {
    let next = universe.grid.toggle(row, col)?;
    match next {
        Cell::Alive => universe.live += 1,
        Cell::Dead => universe.live -= 1,
    }
    Ok(next)
}

pub(super) fn set_cell(
    universe: &mut UniverseCore,
    row: u32,
    col: u32,
    cell: Cell,
) -> Result<(), GridError> {
    let prev = universe.grid.get(row, col)?;
    universe.grid.set(row, col, cell)?;
    match (prev, cell) {
        (Cell::Dead, Cell::Alive) => universe.live += 1,
        (Cell::Alive, Cell::Dead) => universe.live -= 1,
        _ => {}
    }
    Ok(())
}

pub(super) fn set_cells(
    universe: &mut UniverseCore,
    coords: &[(u32, u32)],
    cell: Cell,
) -> Result<(), GridError> {
    universe.grid.set_many(coords, cell)?;
    universe.live = universe.grid.live_count();
    Ok(())
}

pub(super) fn clear(universe: &mut UniverseCore) {
    universe.grid.clear();
    universe.seed = Seed::Dead;
    universe.live = 0;
    universe.generation = 0;
    engine_log!("universe cleared");
}

pub(super) fn reseed(universe: &mut UniverseCore, seed: Seed) -> Result<(), GridError> {
    apply_seed(&mut universe.grid, &seed)?;
    engine_log!("universe reseeded '{}'", seed.kind());
    universe.seed = seed;
    universe.live = universe.grid.live_count();
    universe.generation = 0;
    Ok(())
}

pub(super) fn place_preset(
    universe: &mut UniverseCore,
    preset: Preset,
    row: u32,
    col: u32,
) -> Result<(), GridError> {
    universe.grid.checked_index(row, col)?;
    let coords: Vec<(u32, u32)> = preset
        .offsets()
        .into_iter()
        .map(|(dr, dc)| universe.grid.wrap(row, col, dr, dc))
        .collect();
    set_cells(universe, &coords, Cell::Alive)
}
