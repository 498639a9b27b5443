//! # Config Crate
//!
//! Centralized configuration constants for the compressor blade-row
//! pipeline. Tolerances, tessellation defaults and assembly spacing are
//! defined here so the solver, mesh and parameter crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MeshSettings, DEFAULT_RESOLUTION, EPSILON};
//!
//! let settings = MeshSettings::default();
//! assert_eq!(settings.resolution, DEFAULT_RESOLUTION);
//!
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Settings**: Tessellation density travels as a value, never as global state
//! - **NACA Conventions**: Airfoil defaults follow the 4-digit series

pub mod constants;

pub use constants::{ConfigError, MeshSettings};

#[cfg(test)]
mod tests;
