//! Append-only binary buffer with buffer-view and accessor bookkeeping

use crate::utils::compute_bounds;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// The single growable byte store shared by every mesh in an export, plus
/// the buffer views and accessors describing the spans written into it.
///
/// The store is append-only: it is never truncated or rewritten, so offsets
/// handed out by [`BufferBuilder::append`] stay valid for the lifetime of
/// the builder. All multi-byte values are packed little-endian regardless
/// of host byte order.
pub struct BufferBuilder {
    data: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Append raw bytes, returning the offset at which the write began
    /// (equal to the store's length before the call).
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);
        offset
    }

    /// Get the packed buffer data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the builder, keeping only the packed bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack point positions as consecutive little-endian f32 triples.
    ///
    /// Records one buffer view over exactly the appended span and a
    /// `VEC3`/`F32` accessor carrying the component-wise min/max bounds of
    /// the point set.
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let mut bytes = Vec::with_capacity(positions.len() * 12);
        for position in positions {
            for component in position {
                bytes.extend_from_slice(&component.to_le_bytes());
            }
        }
        let offset = self.append(&bytes);

        self.push_view(
            offset,
            positions.len() * 12,
            json::buffer::Target::ArrayBuffer,
        );

        let (min, max) = compute_bounds(positions);
        self.push_accessor(
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some((min, max)),
        )
    }

    /// Pack a vertex-index stream as consecutive little-endian u32 scalars.
    ///
    /// The accessor's `count` is the number of index values, so
    /// `count * 4 == byteLength` holds for the recorded view.
    pub fn pack_indices(&mut self, indices: &[u32]) -> AccessorIndex {
        let mut bytes = Vec::with_capacity(indices.len() * 4);
        for index in indices {
            bytes.extend_from_slice(&index.to_le_bytes());
        }
        let offset = self.append(&bytes);

        self.push_view(
            offset,
            indices.len() * 4,
            json::buffer::Target::ElementArrayBuffer,
        );

        self.push_accessor(
            indices.len(),
            json::accessor::ComponentType::U32,
            json::accessor::Type::Scalar,
            None,
        )
    }

    fn push_view(&mut self, offset: usize, byte_length: usize, target: json::buffer::Target) {
        // Bookkeeping invariants: the view covers exactly the bytes the
        // preceding append wrote, and every span starts 4-byte aligned
        // (element sizes are multiples of 4, so no padding is needed).
        debug_assert_eq!(offset + byte_length, self.data.len());
        debug_assert_eq!(offset % 4, 0);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: byte_length.into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });
    }

    fn push_accessor(
        &mut self,
        count: usize,
        component_type: json::accessor::ComponentType,
        type_: json::accessor::Type,
        bounds: Option<([f32; 3], [f32; 3])>,
    ) -> AccessorIndex {
        let (min, max) = match bounds {
            Some((min, max)) => (
                Some(json::Value::Array(
                    min.into_iter().map(json::Value::from).collect(),
                )),
                Some(json::Value::Array(
                    max.into_iter().map(json::Value::from).collect(),
                )),
            ),
            None => (None, None),
        };

        let accessor_index = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });
        AccessorIndex(accessor_index)
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
