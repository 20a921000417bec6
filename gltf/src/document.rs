//! glTF document assembly

use crate::buffer::{AccessorIndex, BufferBuilder};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Accumulates meshes, nodes and the default scene's root list while an
/// export runs, then assembles the final `json::Root`.
///
/// Asset metadata (format version, generator) is fixed at construction,
/// before any geometry is recorded. All cross-references are index-based;
/// every index emitted by the builder is valid for the sequence it points
/// into when the document is serialized.
pub struct DocumentBuilder {
    generator: String,
    meshes: Vec<json::Mesh>,
    nodes: Vec<json::Node>,
    scene_roots: Vec<u32>,
}

impl DocumentBuilder {
    pub fn new(generator: &str) -> Self {
        Self {
            generator: generator.to_string(),
            meshes: Vec::new(),
            nodes: Vec::new(),
            scene_roots: Vec::new(),
        }
    }

    /// Add a mesh with a single triangle primitive mapping `POSITION` to
    /// `positions` and the element indices to `indices`. Returns the mesh
    /// index.
    pub fn add_mesh(
        &mut self,
        name: &str,
        positions: AccessorIndex,
        indices: AccessorIndex,
    ) -> u32 {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            Valid(json::mesh::Semantic::Positions),
            positions.as_json_index(),
        );

        let primitive = json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: Some(indices.as_json_index()),
            material: None,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };

        let index = self.meshes.len() as u32;
        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![primitive],
            weights: None,
        });
        index
    }

    /// Add a node referencing `mesh`. Returns the node index.
    pub fn add_node(&mut self, name: &str, mesh: u32) -> u32 {
        let index = self.nodes.len() as u32;
        self.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(json::Index::new(mesh)),
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            translation: None,
            skin: None,
            weights: None,
        });
        index
    }

    /// Append a node to the default scene's root list.
    pub fn add_scene_root(&mut self, node: u32) {
        self.scene_roots.push(node);
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Assemble the final document. The single buffer covers `buffer`'s
    /// packed bytes and carries `bin_uri` as its external-file reference.
    pub fn into_root(self, buffer: &BufferBuilder, bin_uri: &str) -> json::Root {
        let buffers = vec![json::Buffer {
            byte_length: (buffer.byte_length() as u64).into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: Some(bin_uri.to_string()),
        }];

        let scene = json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            nodes: self
                .scene_roots
                .iter()
                .map(|&node| json::Index::new(node))
                .collect(),
        };

        json::Root {
            accessors: buffer.accessors().to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(self.generator),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: buffer.views().to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: Vec::new(),
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene: Some(json::Index::new(0)),
            scenes: vec![scene],
            skins: Vec::new(),
            textures: Vec::new(),
        }
    }
}
