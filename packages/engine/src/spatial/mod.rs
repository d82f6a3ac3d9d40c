//! Spatial storage for the simulation.

pub mod grid;
