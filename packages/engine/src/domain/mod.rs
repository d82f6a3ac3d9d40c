//! Domain vocabulary: cell states, the life rule, seeds, presets and config.

pub mod cell;
pub mod config;
pub mod presets;
pub mod rules;
pub mod seed;

pub use cell::{Cell, CELL_ALIVE, CELL_DEAD};
pub use config::UniverseConfig;
pub use presets::Preset;
pub use seed::Seed;
