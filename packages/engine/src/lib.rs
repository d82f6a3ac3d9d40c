//! Conway Engine - toroidal Game of Life simulation for WASM canvas rendering
//!
//! The render loop calls `tick()` once per frame and then reads the cell
//! buffer straight out of linear memory: one byte per cell, 0 dead / 1 alive,
//! row-major. Nothing here draws; the engine never calls back into JS.
//!
//! Architecture:
//! - core/        - Errors and logging
//! - domain/      - Cell states, the B3/S23 rule, seeds, presets, config
//! - spatial/     - Flat double-buffered grid
//! - simulation/  - Orchestration and the wasm-bindgen facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("conway engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names accepted by `Universe.place_preset`
#[wasm_bindgen]
pub fn preset_names() -> js_sys::Array {
    domain::Preset::ALL
        .iter()
        .map(|p| JsValue::from_str(p.name()))
        .collect()
}

// Re-export main types
pub use crate::core::GridError;
pub use domain::{Cell, Preset, Seed, UniverseConfig};
pub use simulation::{CellsLayout, CellsView, PerfStats, Universe, UniverseCore};
pub use spatial::grid::{GenerationDelta, Grid};
