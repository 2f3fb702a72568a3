//! Sensitivity sweeps: price curves over one input with the others held fixed.

pub mod config;
pub mod generator;
pub mod types;

pub use config::*;
pub use generator::*;
pub use types::*;
