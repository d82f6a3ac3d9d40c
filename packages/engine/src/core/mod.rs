//! Crate-wide plumbing shared by every layer.

pub mod error;
#[macro_use]
pub mod log;

pub use error::GridError;
