use super::perf_stats::PerfStats;
use super::UniverseCore;

pub(super) fn enable_perf_metrics(universe: &mut UniverseCore, enabled: bool) {
    universe.perf_enabled = enabled;
    if !enabled {
        universe.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(universe: &UniverseCore) -> PerfStats {
    universe.perf_stats.clone()
}
