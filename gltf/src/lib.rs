//! glTF document construction for the Meshport export tools
//!
//! This library provides the two builders the exporter accumulates into:
//! - [`BufferBuilder`]: the single append-only binary buffer of an export,
//!   together with the buffer views and accessors describing its spans
//! - [`DocumentBuilder`]: meshes, nodes and the default scene, assembled
//!   into a final `json::Root`
//!
//! # Example
//!
//! ```
//! use meshport_gltf::{BufferBuilder, DocumentBuilder};
//!
//! let mut buffer = BufferBuilder::new();
//! let positions = buffer.pack_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]]);
//! let indices = buffer.pack_indices(&[0, 1, 2]);
//!
//! let mut document = DocumentBuilder::new("example");
//! let mesh = document.add_mesh("triangle", positions, indices);
//! let node = document.add_node("triangle", mesh);
//! document.add_scene_root(node);
//!
//! let root = document.into_root(&buffer, "triangle.bin");
//! assert_eq!(root.asset.version, "2.0");
//! ```

pub mod buffer;
pub mod document;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::DocumentBuilder;
pub use utils::compute_bounds;

// Re-export commonly used gltf-json types
pub use gltf_json as json;
