//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use conway_engine::Universe;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tick_swaps_exported_buffer() {
    let mut universe = Universe::new(16, 16).unwrap();
    let first = universe.layout();
    assert_eq!(first.len_bytes(), 256);
    universe.tick();
    assert_ne!(first.cells_ptr(), universe.layout().cells_ptr());
}

#[wasm_bindgen_test]
fn seed_json_errors_surface_as_js_errors() {
    assert!(Universe::with_seed(4, 4, r#"{"kind":"nope"}"#).is_err());
    assert!(Universe::new(0, 4).is_err());
}

#[wasm_bindgen_test]
fn toggle_out_of_bounds_throws() {
    let mut universe = Universe::with_seed(4, 4, r#"{"kind":"dead"}"#).unwrap();
    assert!(universe.toggle(4, 0).is_err());
    universe.toggle(0, 0).unwrap();
    assert_eq!(universe.live_count(), 1);
    assert!(universe.is_alive(0, 0).unwrap());
}

#[wasm_bindgen_test]
fn presets_are_listed() {
    let names = conway_engine::preset_names();
    assert_eq!(names.length(), 8);
    let mut universe = Universe::with_seed(10, 10, r#"{"kind":"dead"}"#).unwrap();
    universe.place_preset("glider", 0, 0).unwrap();
    assert!(universe.place_preset("ufo", 0, 0).is_err());
}
