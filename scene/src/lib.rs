//! Host-side scene model for the Meshport export tools
//!
//! The exporter does not own a renderer; it consumes a scene supplied by the
//! host application. This crate defines the minimal model of that scene:
//!
//! - [`Scene`] / [`RenderProp`] / [`Part`]: the renderable-prop hierarchy,
//!   with per-prop and per-part visibility
//! - [`GeometrySource`]: the "mapper" seam, a pipeline that can be asked to
//!   bring its output up to date and hand out the current dataset
//! - [`DataObject`] / [`PolyData`]: datasets, either a simple polygonal mesh
//!   or a composite container of nested datasets

pub mod data;
pub mod prop;
pub mod source;

pub use data::{CellArray, DataObject, PolyData};
pub use prop::{Part, RenderProp, Scene};
pub use source::{GeometrySource, SphereSource, StaticSource};
