//! Geometry pipelines attached to renderable parts

use crate::data::{CellArray, DataObject, PolyData};
use glam::Vec3;
use std::cell::OnceCell;
use std::f32::consts::PI;
use tracing::warn;

/// The "mapper" seam between a renderable part and its geometry.
///
/// `update` is the host's ensure-up-to-date operation: idempotent, callable
/// any number of times. `output` hands out the current dataset, or `None`
/// when the pipeline has nothing to offer; the exporter treats that as a
/// skip signal, never as an error.
pub trait GeometrySource {
    fn update(&self);
    fn output(&self) -> Option<&DataObject>;
}

/// A source wrapping an already-materialized dataset.
#[derive(Debug, Clone)]
pub struct StaticSource {
    data: DataObject,
}

impl StaticSource {
    pub fn new(data: DataObject) -> Self {
        Self { data }
    }
}

impl GeometrySource for StaticSource {
    fn update(&self) {}

    fn output(&self) -> Option<&DataObject> {
        Some(&self.data)
    }
}

/// Procedural UV-sphere source, triangulated on first `update`.
///
/// Produces `(rings + 1) * segments` points and `2 * rings * segments`
/// triangle cells.
#[derive(Debug)]
pub struct SphereSource {
    radius: f32,
    segments: u32,
    rings: u32,
    output: OnceCell<DataObject>,
}

impl SphereSource {
    pub fn new(radius: f32, segments: u32, rings: u32) -> Self {
        Self {
            radius,
            segments,
            rings,
            output: OnceCell::new(),
        }
    }
}

impl GeometrySource for SphereSource {
    fn update(&self) {
        self.output.get_or_init(|| {
            DataObject::Poly(triangulate_sphere(self.radius, self.segments, self.rings))
        });
    }

    fn output(&self) -> Option<&DataObject> {
        self.output.get()
    }
}

fn triangulate_sphere(radius: f32, segments: u32, rings: u32) -> PolyData {
    let radius = if radius <= 0.0 {
        warn!("SphereSource: radius must be > 0.0, clamping to 0.001");
        0.001
    } else {
        radius
    };
    let segments = segments.clamp(3, 256);
    let rings = rings.clamp(2, 256);

    let mut points = Vec::with_capacity(((rings + 1) * segments) as usize);
    for ring in 0..=rings {
        let phi = (ring as f32 / rings as f32) * PI;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..segments {
            let theta = (seg as f32 / segments as f32) * 2.0 * PI;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            points.push(Vec3::new(x, y, z));
        }
    }

    let mut polys = CellArray::new();
    for ring in 0..rings {
        for seg in 0..segments {
            let next_seg = (seg + 1) % segments;

            let i0 = ring * segments + seg;
            let i1 = ring * segments + next_seg;
            let i2 = (ring + 1) * segments + seg;
            let i3 = (ring + 1) * segments + next_seg;

            // Two triangles per quad, CCW when viewed from outside.
            polys.push_cell(&[i0, i1, i3]);
            polys.push_cell(&[i0, i3, i2]);
        }
    }

    PolyData { points, polys }
}
