use crate::core::GridError;
use crate::domain::{Cell, Seed};
use crate::spatial::grid::Grid;

use super::perf_stats::PerfStats;
use super::random::{next_unit, ZERO_SEED_FALLBACK};
use super::UniverseCore;

pub(super) fn create_universe_core(
    width: u32,
    height: u32,
    seed: Seed,
) -> Result<UniverseCore, GridError> {
    let mut grid = Grid::new(width, height)?;
    apply_seed(&mut grid, &seed)?;
    let live = grid.live_count();

    engine_log!(
        "universe {}x{} seeded '{}' ({} alive)",
        width,
        height,
        seed.kind(),
        live
    );

    Ok(UniverseCore {
        grid,
        seed,
        generation: 0,
        live,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Rewrite every cell of `grid` from `seed`.
///
/// Parameters are validated before the first write, so an error leaves the
/// grid exactly as it was.
pub(super) fn apply_seed(grid: &mut Grid, seed: &Seed) -> Result<(), GridError> {
    match seed {
        Seed::Dead => grid.clear(),
        Seed::Classic => fill_by_index(grid, |i| i % 2 == 0 || i % 7 == 0),
        Seed::EveryNth { n } => {
            if *n == 0 {
                return Err(GridError::InvalidSeed("everyNth needs n >= 1".to_string()));
            }
            let n = *n as usize;
            fill_by_index(grid, |i| i % n == 0);
        }
        Seed::Random { seed, density } => {
            let density = *density;
            if density.is_nan() {
                return Err(GridError::InvalidSeed("random density is NaN".to_string()));
            }
            let density = density.clamp(0.0, 1.0);
            let mut state = if *seed == 0 { ZERO_SEED_FALLBACK } else { *seed };
            for cell in grid.cells_mut() {
                *cell = Cell::from(next_unit(&mut state) < density);
            }
        }
        Seed::Explicit { cells } => {
            if cells.len() != grid.size() {
                return Err(GridError::PatternSizeMismatch {
                    expected: grid.size(),
                    actual: cells.len(),
                });
            }
            let decoded = cells
                .iter()
                .map(|&b| Cell::from_byte(b))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| GridError::InvalidSeed("explicit cells must be 0 or 1".to_string()))?;
            grid.cells_mut().copy_from_slice(&decoded);
        }
        Seed::Alive { cells } => {
            for &(row, col) in cells {
                grid.checked_index(row, col)?;
            }
            grid.clear();
            grid.set_many(cells, Cell::Alive)?;
        }
    }
    Ok(())
}

fn fill_by_index(grid: &mut Grid, alive: impl Fn(usize) -> bool) {
    for (i, cell) in grid.cells_mut().iter_mut().enumerate() {
        *cell = Cell::from(alive(i));
    }
}
