//! # Compressor Mesh
//!
//! Blade-row solid generation for axial compressors.
//! Turns stage coefficients and row parameters into triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! compressor-meanline (StageVelocityTriangles)
//!     → airfoil (AirfoilProfile) → loft (BladeSolid)
//!     → row (RowMesh) → assembly (Assembly)
//!     → export (STL)
//! ```
//!
//! ## Algorithms
//!
//! - **Sections**: NACA 4-digit camber line and thickness distribution
//! - **Blades**: linear loft with span-wise twist, zig-zag end caps
//! - **Rows**: blades bent onto the annulus and replicated about +Z
//! - **Primitives**: faceted cylinders and ducts
//!
//! Rows are merged as triangle soups; no boolean union is performed.
//!
//! ## Usage
//!
//! ```rust
//! use compressor_meanline::StageCoefficients;
//! use compressor_mesh::row::{build_rotor, RotorParams};
//! use config::MeshSettings;
//!
//! let stage = StageCoefficients::new(0.5, 0.5, 0.6, 10_000.0, 37.5).unwrap();
//! let rotor = RotorParams {
//!     rotor_diameter: 100.0,
//!     hub_diameter: 50.0,
//!     hub_length: 30.0,
//!     blade_count: 12,
//!     root_chord: 20.0,
//!     tip_chord: 15.0,
//!     thickness: 8.0,
//!     clearance: 0.5,
//!     twist_x: 30.0,
//!     twist_y: 0.0,
//! };
//! let row = build_rotor(&stage, &rotor, false, &MeshSettings::default()).unwrap();
//! assert!(row.triangle_count() > 0);
//! ```

pub mod airfoil;
pub mod assembly;
pub mod bounds;
pub mod error;
pub mod export;
pub mod loft;
pub mod mesh;
pub mod primitives;
pub mod row;
pub mod transform;

pub use airfoil::{camber_for_deflection, section, AirfoilProfile};
pub use assembly::{assemble_stages, Assembly, PlacedRow, StageDesign};
pub use bounds::{bounding_box, BoundingBox};
pub use error::MeshError;
pub use export::{load_stl, read_stl, save_stl, StlFormat};
pub use loft::{loft, BladeDesign, BladeSolid, LoftParams};
pub use mesh::Mesh;
pub use primitives::{cylinder, duct};
pub use row::{build_rotor, build_stator, RotorParams, RowKind, RowMesh, StatorParams};
pub use transform::{rotate_about, rotation_matrix};
