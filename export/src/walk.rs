//! Scene traversal and the exportable-part filter

use crate::extract::resolve_geometry;
use meshport_scene::{PolyData, Scene};
use tracing::debug;

/// One accepted part: its display name and resolved geometry.
pub struct ExportPart<'a> {
    pub name: &'a str,
    pub geometry: &'a PolyData,
}

/// Collect every exportable part of the scene, eagerly, in the scene's
/// native enumeration order (props in insertion order, each expanded into
/// its parts).
///
/// A part is accepted iff its prop is visible, the part itself is visible,
/// a geometry source is attached, the source resolves to a simple mesh,
/// and that mesh has at least one point and one polygon cell. Everything
/// else is skipped silently. The result is deterministic for a fixed
/// scene.
pub fn collect_exportable(scene: &Scene) -> Vec<ExportPart<'_>> {
    let mut exportable = Vec::new();

    for prop in scene.props() {
        if !prop.visible {
            continue;
        }
        for part in &prop.parts {
            if !part.visible {
                continue;
            }
            let Some(geometry) = resolve_geometry(part) else {
                debug!("skipping part '{}': no resolvable geometry", part.name);
                continue;
            };
            if geometry.points.is_empty() || geometry.polys.is_empty() {
                debug!("skipping part '{}': no polygonal cells", part.name);
                continue;
            }
            exportable.push(ExportPart {
                name: &part.name,
                geometry,
            });
        }
    }

    exportable
}
