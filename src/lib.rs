//! A polygon Boolean-clipping engine: intersection, union, difference and XOR over
//! closed polygons (with open-path clipping against a closed clip set), using a
//! Vatti-style sweep-line algorithm over integer coordinates.
//!
//! [`Clipper64`](engine_public::Clipper64) and [`ClipperD`](engine_public::ClipperD) are
//! the entry points: add subject/clip paths, `execute` with a [`ClipType`](engine::ClipType)
//! and [`FillRule`](core::FillRule), and read back either flat paths or a
//! [`PolyTree64`](engine_public::PolyTree64)/[`PolyTreeD`](engine_public::PolyTreeD)
//! describing outer/hole nesting. [`api`] wraps the common operations as free functions.

pub mod api;
pub mod core;
pub mod engine;
pub mod engine_fns;
pub mod engine_public;
pub mod version;

pub use api::*;
pub use core::*;
pub use engine::*;
pub use engine_fns::*;
pub use engine_public::*;
pub use version::*;
