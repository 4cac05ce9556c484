//! Asset loading collaborator surface: a content-addressed model registry
//! and poll-driven load slots with deterministic placeholder fallback.
//!
//! The simulation never waits on an asset. A slot that has not been
//! fulfilled (or whose load failed) resolves to a placeholder with an
//! equivalent collision footprint, so the loop is never starved of
//! geometry.
//!
//! # Layout
//! Models are identified by content-addressed hashes. The registry can be
//! persisted to disk as JSON for inspection.

mod slot;

pub use slot::{LoadSlot, SlotStatus};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content-addressed asset ID computed from the model metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub u64);

/// A minimal model representation: enough for the renderer collaborator to
/// reference and for scene construction to size a collider around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub vertex_count: u32,
    pub index_count: u32,
    /// Full extents of the model's bounding box, in world units.
    pub footprint: [f32; 3],
}

/// Errors from asset operations. These stop at the loading boundary; the
/// simulation path only ever sees resolved models.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset not found: {0:?}")]
    NotFound(AssetId),
    #[error("glTF parse error: {0}")]
    GltfParse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("load failed: {0}")]
    LoadFailed(String),
}

/// Content-addressed model registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetStore {
    models: BTreeMap<AssetId, Model>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model and return its asset ID. Identical metadata hashes
    /// to the same ID, so re-registration deduplicates.
    pub fn register_model(&mut self, model: Model) -> AssetId {
        let id = content_hash(&model);
        self.models.insert(id, model);
        id
    }

    pub fn get(&self, id: AssetId) -> Option<&Model> {
        self.models.get(&id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Import a glTF file's metadata (stub).
    ///
    /// Reads the glTF JSON and registers one model per mesh entry. Vertex
    /// data decoding is out of scope; counts stay zero and the footprint
    /// defaults to a unit box.
    pub fn import_gltf(&mut self, path: impl AsRef<Path>) -> Result<Vec<AssetId>, AssetError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let json: serde_json::Value =
            serde_json::from_str(&data).map_err(|e| AssetError::GltfParse(e.to_string()))?;

        let mut ids = Vec::new();
        if let Some(meshes) = json.get("meshes").and_then(|m| m.as_array()) {
            for (i, mesh_val) in meshes.iter().enumerate() {
                let name = mesh_val
                    .get("name")
                    .and_then(|n| n.as_str())
                    .unwrap_or("unnamed")
                    .to_string();
                ids.push(self.register_model(Model {
                    name: format!("{name}_{i}"),
                    vertex_count: 0,
                    index_count: 0,
                    footprint: [1.0, 1.0, 1.0],
                }));
            }
        }

        if ids.is_empty() {
            tracing::warn!(path = %path.as_ref().display(), "glTF had no meshes; registering default");
            ids.push(self.register_model(Model {
                name: "gltf_default".into(),
                vertex_count: 0,
                index_count: 0,
                footprint: [1.0, 1.0, 1.0],
            }));
        }

        Ok(ids)
    }

    /// Save the registry to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let file = std::fs::File::open(path)?;
        let store: Self = serde_json::from_reader(file)?;
        Ok(store)
    }
}

fn content_hash(model: &Model) -> AssetId {
    let mut hasher = Sha256::new();
    hasher.update(model.name.as_bytes());
    hasher.update(model.vertex_count.to_le_bytes());
    hasher.update(model.index_count.to_le_bytes());
    for f in model.footprint {
        hasher.update(f.to_le_bytes());
    }
    let result = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&result[..8]);
    AssetId(u64::from_le_bytes(bytes))
}

/// Deterministic placeholder stand-ins, footprint-matched to the real
/// models they substitute for.
pub mod placeholder {
    use super::Model;

    pub fn boat() -> Model {
        Model {
            name: "placeholder_boat".into(),
            vertex_count: 0,
            index_count: 0,
            footprint: [2.0, 1.5, 6.0],
        }
    }

    pub fn palm_tree() -> Model {
        Model {
            name: "placeholder_palm".into(),
            vertex_count: 0,
            index_count: 0,
            footprint: [1.0, 6.0, 1.0],
        }
    }

    pub fn house() -> Model {
        Model {
            name: "placeholder_house".into(),
            vertex_count: 0,
            index_count: 0,
            footprint: [6.0, 4.0, 6.0],
        }
    }

    pub fn slum_house() -> Model {
        Model {
            name: "placeholder_slum_house".into(),
            vertex_count: 0,
            index_count: 0,
            footprint: [4.0, 3.0, 4.0],
        }
    }
}

pub fn crate_info() -> &'static str {
    "skerry-assets v0.1.0"
}
