//! Geometry resolution for renderable parts

use meshport_scene::{Part, PolyData};

/// Resolve a part to its polygonal mesh, if it has one.
///
/// Requires an attached geometry source; brings it up to date (the host
/// exposes this as an idempotent operation), then searches the output
/// dataset for the first simple mesh. Any missing link yields `None`,
/// which callers treat as "skip this part", never as an error.
pub fn resolve_geometry(part: &Part) -> Option<&PolyData> {
    let source = part.source.as_deref()?;
    source.update();
    source.output()?.first_poly_data()
}
