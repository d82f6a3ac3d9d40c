//! Universe configuration loaded from JSON.
//!
//! ```json
//! { "width": 128, "height": 96, "seed": { "kind": "random", "seed": 9 } }
//! ```
//!
//! Missing fields fall back to the classic 64x64 tutorial universe.

use serde::{Deserialize, Serialize};

use super::seed::Seed;
use crate::core::GridError;

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub seed: Seed,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: Seed::Classic,
        }
    }
}

impl UniverseConfig {
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
