//! meshport-export library
//!
//! Walks a host-supplied renderable scene, packs the visible triangle-mesh
//! geometry into one shared binary buffer, and writes a glTF 2.0 document
//! (`<prefix>.gltf`) with its sibling binary file (`<prefix>.bin`).
//!
//! The export is one-shot and synchronous: one call traverses, encodes and
//! writes, with no partial output on failure.

pub mod encode;
pub mod error;
pub mod export;
pub mod extract;
pub mod walk;

pub use encode::encode_part;
pub use error::ExportError;
pub use export::{GENERATOR, build_asset, export_scene};
pub use extract::resolve_geometry;
pub use walk::{ExportPart, collect_exportable};
