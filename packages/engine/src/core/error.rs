//! Error taxonomy for grid construction and editing.
//!
//! `advance()` has no error path; everything here comes from construction,
//! seeding, configuration or coordinate-addressed editing.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors reported by the grid engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero, or `width * height` does not fit a cell count.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A coordinate outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },

    /// Explicit seed buffer with the wrong number of cells.
    #[error("pattern has {actual} cells, grid needs {expected}")]
    PatternSizeMismatch { expected: usize, actual: usize },

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid universe config: {0}")]
    Config(String),

    /// Cell storage could not be reserved.
    #[error("could not allocate storage for {cells} cells")]
    AllocationFailed { cells: usize },
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Config(err.to_string())
    }
}

impl From<GridError> for JsValue {
    fn from(err: GridError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = GridError::OutOfBounds {
            row: 7,
            col: 2,
            height: 4,
            width: 4,
        };
        assert_eq!(err.to_string(), "cell (7, 2) is outside the 4x4 grid");

        let err = GridError::InvalidDimensions {
            width: 0,
            height: 3,
        };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x3");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: GridError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, GridError::Config(_)));
    }
}
