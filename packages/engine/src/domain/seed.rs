//! Initial seed rules.
//!
//! A `Seed` is plain data; `simulation::init` turns it into cells for a
//! concrete grid size. JSON form is tagged by `kind`:
//!
//! ```json
//! { "kind": "random", "seed": 42, "density": 0.3 }
//! { "kind": "alive", "cells": [[0, 1], [1, 1], [2, 1]] }
//! ```

use serde::{Deserialize, Serialize};

fn default_density() -> f64 {
    0.5
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Seed {
    /// Every cell dead.
    Dead,
    /// Cell `i` alive iff `i % 2 == 0 || i % 7 == 0`.
    #[default]
    Classic,
    /// Cell `i` alive iff `i % n == 0`.
    EveryNth { n: u32 },
    /// xorshift32 stream, alive when the draw falls below `density`.
    Random {
        seed: u32,
        #[serde(default = "default_density")]
        density: f64,
    },
    /// Row-major 0/1 bytes, exactly `width * height` of them.
    Explicit { cells: Vec<u8> },
    /// Listed `(row, col)` cells alive, the rest dead.
    Alive { cells: Vec<(u32, u32)> },
}

impl Seed {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Seed::Dead => "dead",
            Seed::Classic => "classic",
            Seed::EveryNth { .. } => "everyNth",
            Seed::Random { .. } => "random",
            Seed::Explicit { .. } => "explicit",
            Seed::Alive { .. } => "alive",
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
