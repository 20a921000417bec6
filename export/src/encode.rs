//! Per-part mesh encoding into the shared buffer and document

use crate::walk::ExportPart;
use meshport_gltf::{BufferBuilder, DocumentBuilder};
use tracing::debug;

/// Encode one part: a position span, an index span, and one mesh, node and
/// default-scene entry referencing them.
///
/// Positions go into the buffer as a single appended span of f32 triples
/// in point order; the index stream follows as a single span of u32
/// scalars in cell-traversal order. Degenerate cells (fewer than three
/// vertices) are passed through as-is. The walker guarantees at least one
/// point and one cell.
pub fn encode_part(
    part: &ExportPart<'_>,
    buffer: &mut BufferBuilder,
    document: &mut DocumentBuilder,
) {
    let geometry = part.geometry;
    debug_assert!(!geometry.points.is_empty() && !geometry.polys.is_empty());

    let points: Vec<[f32; 3]> = geometry.points.iter().map(|point| point.to_array()).collect();
    let positions = buffer.pack_positions(&points);

    let mut index_stream = Vec::with_capacity(geometry.polys.index_count());
    for cell in geometry.polys.iter() {
        index_stream.extend_from_slice(cell);
    }
    let indices = buffer.pack_indices(&index_stream);

    let mesh = document.add_mesh(part.name, positions, indices);
    let node = document.add_node(part.name, mesh);
    document.add_scene_root(node);

    debug!(
        "encoded part '{}': {} points, {} indices",
        part.name,
        points.len(),
        index_stream.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use meshport_scene::{CellArray, PolyData};

    fn quad_mesh() -> PolyData {
        let mut polys = CellArray::new();
        polys.push_cell(&[0, 1, 2, 3]);
        PolyData {
            points: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            polys,
        }
    }

    #[test]
    fn test_encode_single_part() {
        let geometry = quad_mesh();
        let part = ExportPart {
            name: "quad",
            geometry: &geometry,
        };

        let mut buffer = BufferBuilder::new();
        let mut document = DocumentBuilder::new("test");
        encode_part(&part, &mut buffer, &mut document);

        // 4 points * 12 bytes + 4 indices * 4 bytes
        assert_eq!(buffer.byte_length(), 48 + 16);
        assert_eq!(buffer.accessors().len(), 2);
        assert_eq!(document.mesh_count(), 1);
        assert_eq!(document.node_count(), 1);
    }

    #[test]
    fn test_encode_accumulates_across_parts() {
        let geometry = quad_mesh();
        let first = ExportPart {
            name: "first",
            geometry: &geometry,
        };
        let second = ExportPart {
            name: "second",
            geometry: &geometry,
        };

        let mut buffer = BufferBuilder::new();
        let mut document = DocumentBuilder::new("test");
        encode_part(&first, &mut buffer, &mut document);
        let after_first = buffer.byte_length();
        encode_part(&second, &mut buffer, &mut document);

        assert_eq!(buffer.byte_length(), after_first * 2);
        assert_eq!(document.mesh_count(), 2);

        // The second part's views start exactly where the first part's
        // data ended: shared storage, no gaps.
        let offsets: Vec<u64> = buffer
            .views()
            .iter()
            .map(|view| view.byte_offset.unwrap().0)
            .collect();
        assert_eq!(offsets, vec![0, 48, 64, 112]);
    }

    #[test]
    fn test_index_stream_follows_cell_order() {
        let mut polys = CellArray::new();
        polys.push_cell(&[2, 1, 0]);
        polys.push_cell(&[0, 2, 3]);
        let geometry = PolyData {
            points: quad_mesh().points,
            polys,
        };
        let part = ExportPart {
            name: "tris",
            geometry: &geometry,
        };

        let mut buffer = BufferBuilder::new();
        let mut document = DocumentBuilder::new("test");
        encode_part(&part, &mut buffer, &mut document);

        // Index span sits after the 48-byte position span.
        let index_bytes = &buffer.data()[48..];
        let decoded: Vec<u32> = index_bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
            .collect();
        assert_eq!(decoded, vec![2, 1, 0, 0, 2, 3]);
    }
}
