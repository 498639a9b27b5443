//! # Compressor Mean-Line
//!
//! Velocity-triangle solver for axial-compressor stages.
//! Turns stage coefficients into flow angles at root, mean and tip radii.
//!
//! ## Architecture
//!
//! ```text
//! StageCoefficients → compressor-meanline (StageVelocityTriangles) → compressor-mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use compressor_meanline::StageCoefficients;
//!
//! let stage = StageCoefficients::new(0.4, 0.482, 0.691, 30_000.0, 22.5).unwrap();
//! let triangles = stage.solve_stage(15.0, 30.0).unwrap();
//! assert!(triangles.is_free_vortex_consistent());
//! assert!(triangles.root.rotor_deflection() > triangles.tip.rotor_deflection());
//! ```

pub mod error;
pub mod stage;
pub mod triangle;

// Re-export public API
pub use error::SolverError;
pub use stage::{solve_stage, StageVelocityTriangles};
pub use triangle::{blade_speed, solve_triangle, StageCoefficients, VelocityTriangle};
