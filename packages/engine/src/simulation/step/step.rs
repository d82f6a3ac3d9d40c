use super::clock::now_ms;
use super::UniverseCore;

pub(super) fn step(universe: &mut UniverseCore) {
    let perf_on = universe.perf_enabled;
    let t0 = if perf_on { now_ms() } else { 0.0 };

    let delta = universe.grid.advance();
    universe.generation += 1;
    universe.live = delta.live;

    if perf_on {
        let size = universe.grid.size() as u32;
        let stats = &mut universe.perf_stats;
        stats.reset();
        stats.step_ms = now_ms() - t0;
        stats.births = delta.births;
        stats.deaths = delta.deaths;
        stats.live_cells = delta.live;
        stats.grid_size = size;
        stats.generation = universe.generation;
        // current + scratch buffer, one byte per cell each
        stats.memory_bytes = size.saturating_mul(2);
    }
}
