//! Named shapes that can be stamped onto a grid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GridError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Block,
    Beehive,
    Blinker,
    Toad,
    Beacon,
    Glider,
    Lwss,
    Pulsar,
}

const BLOCK: &[(u32, u32)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BEEHIVE: &[(u32, u32)] = &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)];
const BLINKER: &[(u32, u32)] = &[(0, 0), (0, 1), (0, 2)];
const TOAD: &[(u32, u32)] = &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];
const BEACON: &[(u32, u32)] = &[
    (0, 0), (0, 1), (1, 0), (1, 1),
    (2, 2), (2, 3), (3, 2), (3, 3),
];
// Travels down-right one cell every 4 generations.
const GLIDER: &[(u32, u32)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const LWSS: &[(u32, u32)] = &[
    (0, 1), (0, 4),
    (1, 0),
    (2, 0), (2, 4),
    (3, 0), (3, 1), (3, 2), (3, 3),
];

const PULSAR_ARMS: [u32; 6] = [2, 3, 4, 8, 9, 10];
const PULSAR_BARS: [u32; 4] = [0, 5, 7, 12];

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Block,
        Preset::Beehive,
        Preset::Blinker,
        Preset::Toad,
        Preset::Beacon,
        Preset::Glider,
        Preset::Lwss,
        Preset::Pulsar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Block => "block",
            Preset::Beehive => "beehive",
            Preset::Blinker => "blinker",
            Preset::Toad => "toad",
            Preset::Beacon => "beacon",
            Preset::Glider => "glider",
            Preset::Lwss => "lwss",
            Preset::Pulsar => "pulsar",
        }
    }

    /// Live cells as `(row, col)` offsets from the top-left anchor.
    pub fn offsets(self) -> Vec<(u32, u32)> {
        match self {
            Preset::Block => BLOCK.to_vec(),
            Preset::Beehive => BEEHIVE.to_vec(),
            Preset::Blinker => BLINKER.to_vec(),
            Preset::Toad => TOAD.to_vec(),
            Preset::Beacon => BEACON.to_vec(),
            Preset::Glider => GLIDER.to_vec(),
            Preset::Lwss => LWSS.to_vec(),
            Preset::Pulsar => {
                let mut cells = Vec::with_capacity(48);
                for &bar in PULSAR_BARS.iter() {
                    for &arm in PULSAR_ARMS.iter() {
                        cells.push((bar, arm));
                        cells.push((arm, bar));
                    }
                }
                cells
            }
        }
    }

    /// `(rows, cols)` of the bounding box.
    pub fn extent(self) -> (u32, u32) {
        self.offsets()
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

impl FromStr for Preset {
    type Err = GridError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_ascii_lowercase();
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| GridError::UnknownPreset(name.to_string()))
    }
}
