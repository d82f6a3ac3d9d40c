use wasm_bindgen::prelude::*;

use crate::domain::{Cell, Preset, Seed};

use super::perf_stats::PerfStats;
use super::UniverseCore;

/// Where the current generation lives in linear memory.
///
/// Only valid until the next `tick()`: the engine double-buffers, so the
/// pointer alternates between two allocations.
#[wasm_bindgen]
pub struct CellsLayout {
    cells_ptr: u32,
    len_elements: u32,
    len_bytes: u32,
    width: u32,
    height: u32,
    generation: u64,
}

#[wasm_bindgen]
impl CellsLayout {
    #[wasm_bindgen(getter)]
    pub fn cells_ptr(&self) -> u32 { self.cells_ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 { self.len_bytes }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}

#[wasm_bindgen]
pub struct Universe {
    core: UniverseCore,
}

#[wasm_bindgen]
impl Universe {
    /// Create a classic-seeded universe with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Universe, JsValue> {
        Ok(Self {
            core: UniverseCore::new(width, height, Seed::Classic)?,
        })
    }

    /// The 64x64 tutorial universe
    pub fn classic() -> Result<Universe, JsValue> {
        Ok(Self { core: UniverseCore::classic()? })
    }

    /// `seed_json` is a tagged seed, e.g. `{"kind":"random","seed":42}`
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed_json: &str) -> Result<Universe, JsValue> {
        let seed = parse_seed(seed_json)?;
        Ok(Self {
            core: UniverseCore::new(width, height, seed)?,
        })
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Universe, JsValue> {
        Ok(Self {
            core: UniverseCore::from_config_json(json)?,
        })
    }

    pub fn width(&self) -> u32 { self.core.width() }

    pub fn height(&self) -> u32 { self.core.height() }

    pub fn generation(&self) -> u64 { self.core.generation() }

    pub fn live_count(&self) -> u32 { self.core.live_count() }

    /// Advance one generation
    pub fn tick(&mut self) {
        self.core.advance();
    }

    pub fn advance(&mut self) {
        self.core.advance();
    }

    /// Get pointer to cells array (for JS rendering)
    pub fn cells(&self) -> *const Cell {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    pub fn cells_byte_len(&self) -> usize {
        self.core.cells_byte_len()
    }

    pub fn layout(&self) -> CellsLayout {
        let data = self.core.layout_data();
        CellsLayout {
            cells_ptr: data.cells_ptr as u32,
            len_elements: data.len_elements as u32,
            len_bytes: data.len_bytes as u32,
            width: data.width,
            height: data.height,
            generation: data.generation,
        }
    }

    pub fn render(&self) -> String {
        self.core.render()
    }

    // === Editing ===

    pub fn toggle(&mut self, row: u32, col: u32) -> Result<(), JsValue> {
        self.core.toggle(row, col)?;
        Ok(())
    }

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool, JsValue> {
        Ok(self.core.get(row, col)?.is_alive())
    }

    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> Result<(), JsValue> {
        self.core.set_cell(row, col, Cell::from(alive))?;
        Ok(())
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reseed(&mut self, seed_json: &str) -> Result<(), JsValue> {
        let seed = parse_seed(seed_json)?;
        self.core.reseed(seed)?;
        Ok(())
    }

    /// Stamp a named preset ("glider", "pulsar", ...) with its top-left at (row, col)
    pub fn place_preset(&mut self, name: &str, row: u32, col: u32) -> Result<(), JsValue> {
        let preset: Preset = name.parse()?;
        self.core.place_preset(preset, row, col)?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}

impl Universe {
    pub fn core(&self) -> &UniverseCore {
        &self.core
    }
}

fn parse_seed(json: &str) -> Result<Seed, crate::core::GridError> {
    Ok(Seed::from_json(json)?)
}
