//! Universe - Game of Life orchestration
//!
//! `UniverseCore` owns the grid and everything that changes per tick
//! (generation counter, population, perf snapshot). It delegates:
//! - seeding and construction to init/
//! - the per-frame tick to step/
//! - coordinate-addressed editing to commands/
//! - renderer-facing views to render/
//!
//! The `#[wasm_bindgen]` wrapper lives in facade.rs and only converts types.

use crate::core::GridError;
use crate::domain::{Cell, Preset, Seed, UniverseConfig};
use crate::spatial::grid::Grid;

#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/export.rs"]
mod export;
#[path = "render/text.rs"]
mod text;
mod facade;

pub use export::CellsView;
pub use facade::{CellsLayout, Universe};
pub use perf_stats::PerfStats;

pub(crate) struct CellsLayoutData {
    pub(crate) cells_ptr: *const Cell,
    pub(crate) len_elements: usize,
    pub(crate) len_bytes: usize,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) generation: u64,
}

/// The simulation state driven by one render loop.
pub struct UniverseCore {
    grid: Grid,
    seed: Seed,

    // State
    generation: u64,
    live: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl UniverseCore {
    /// Create a universe and fill it from `seed`.
    pub fn new(width: u32, height: u32, seed: Seed) -> Result<Self, GridError> {
        init::create_universe_core(width, height, seed)
    }

    /// The 64x64 classic-seeded universe.
    pub fn classic() -> Result<Self, GridError> {
        Self::from_config(&UniverseConfig::default())
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self, GridError> {
        Self::new(config.width, config.height, config.seed.clone())
    }

    pub fn from_config_json(json: &str) -> Result<Self, GridError> {
        let config = UniverseConfig::from_json(json)?;
        engine_log!("loaded universe config {}x{}", config.width, config.height);
        Self::from_config(&config)
    }

    /// Config that rebuilds this universe's initial state.
    pub fn config(&self) -> UniverseConfig {
        UniverseConfig {
            width: self.width(),
            height: self.height(),
            seed: self.seed.clone(),
        }
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Completed `advance()` calls since construction, `clear` or `reseed`.
    pub fn generation(&self) -> u64 { self.generation }

    pub fn live_count(&self) -> u32 { self.live }

    pub fn seed(&self) -> &Seed { &self.seed }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Compute and swap in the next generation.
    pub fn advance(&mut self) {
        step::step(self);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Editing ===

    pub fn get(&self, row: u32, col: u32) -> Result<Cell, GridError> {
        self.grid.get(row, col)
    }

    /// Flip one cell; returns its new state.
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<Cell, GridError> {
        commands::toggle(self, row, col)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), GridError> {
        commands::set_cell(self, row, col, cell)
    }

    /// Set all listed cells or, on any out-of-bounds coordinate, none.
    pub fn set_cells(&mut self, coords: &[(u32, u32)], cell: Cell) -> Result<(), GridError> {
        commands::set_cells(self, coords, cell)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn reseed(&mut self, seed: Seed) -> Result<(), GridError> {
        commands::reseed(self, seed)
    }

    /// Stamp `preset` with its top-left at `(row, col)`, wrapping across edges.
    pub fn place_preset(&mut self, preset: Preset, row: u32, col: u32) -> Result<(), GridError> {
        commands::place_preset(self, preset, row, col)
    }

    pub fn live_neighbors(&self, row: u32, col: u32) -> Result<u8, GridError> {
        self.grid.checked_index(row, col)?;
        Ok(self.grid.live_neighbors(row, col))
    }

    // === Export ===

    /// Read-only view of the current generation, valid until the next `advance()`.
    pub fn cells(&self) -> CellsView<'_> {
        export::view(self)
    }

    /// Pointer to the current cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const Cell {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }

    pub fn cells_byte_len(&self) -> usize {
        self.grid.cells_byte_len()
    }

    /// One line per row, `◼` alive and `◻` dead.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn layout_data(&self) -> CellsLayoutData {
        CellsLayoutData {
            cells_ptr: self.cells_ptr(),
            len_elements: self.cells_len(),
            len_bytes: self.cells_byte_len(),
            width: self.width(),
            height: self.height(),
            generation: self.generation,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
