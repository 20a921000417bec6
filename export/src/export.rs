//! Asset assembly and writing

use crate::encode::encode_part;
use crate::error::ExportError;
use crate::walk::collect_exportable;
use meshport_gltf::{BufferBuilder, DocumentBuilder, json};
use meshport_scene::Scene;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Generator string stamped into `asset.generator`.
pub const GENERATOR: &str = concat!("meshport-export ", env!("CARGO_PKG_VERSION"));

/// Build the document and packed buffer for a scene without touching disk.
///
/// `bin_uri` is the URI recorded on the document's single buffer, i.e. the
/// file name of the sibling `.bin` when the asset is written out.
///
/// Fails with [`ExportError::EmptyScene`] when the walk accepts nothing.
pub fn build_asset(scene: &Scene, bin_uri: &str) -> Result<(json::Root, Vec<u8>), ExportError> {
    // Asset metadata and the default scene exist before any part is
    // encoded; the walk and encode steps only ever append.
    let mut document = DocumentBuilder::new(GENERATOR);

    let parts = collect_exportable(scene);
    if parts.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    let mut buffer = BufferBuilder::new();
    for part in &parts {
        encode_part(part, &mut buffer, &mut document);
    }

    info!(
        "exported {} part(s), {} buffer bytes",
        parts.len(),
        buffer.byte_length()
    );

    let root = document.into_root(&buffer, bin_uri);
    Ok((root, buffer.into_data()))
}

/// Export a scene to `<prefix>.gltf` and `<prefix>.bin`.
///
/// The suffixes are appended to the prefix as given (no extension
/// substitution). Nothing is written when the scene has no exportable
/// content or the document fails to serialize; if a file write fails
/// midway, already-written output is removed so the pair exists in full
/// or not at all.
pub fn export_scene(scene: &Scene, prefix: impl AsRef<Path>) -> Result<(), ExportError> {
    let prefix = prefix.as_ref();
    let gltf_path = with_suffix(prefix, ".gltf");
    let bin_path = with_suffix(prefix, ".bin");
    let bin_uri = bin_path
        .file_name()
        .unwrap_or(bin_path.as_os_str())
        .to_string_lossy()
        .into_owned();

    let (root, buffer) = build_asset(scene, &bin_uri)?;
    let json_text = serde_json::to_string(&root)?;

    if let Err(err) = fs::write(&bin_path, &buffer) {
        let _ = fs::remove_file(&bin_path);
        return Err(err.into());
    }
    if let Err(err) = fs::write(&gltf_path, json_text) {
        let _ = fs::remove_file(&gltf_path);
        let _ = fs::remove_file(&bin_path);
        return Err(err.into());
    }

    Ok(())
}

/// `<prefix>.gltf`-style naming: appends to the path as given.
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}
