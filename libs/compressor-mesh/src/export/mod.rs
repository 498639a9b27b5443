//! Mesh export.
//!
//! Writers and a reader for the STL interchange format, in both the
//! binary and ASCII encodings.

pub mod stl;

pub use stl::{load_stl, read_stl, save_stl, write_stl_ascii, write_stl_binary, StlFormat};
