//! # Mesh Sources
//!
//! Input rows for the stats pass: one entry per mesh reference found in a
//! scene, with the import settings of the asset it comes from.

use std::sync::Arc;

use cylinder_mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Import flags of the asset a mesh was loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Mesh data stays readable from scripts after import.
    pub is_readable: bool,
    /// Importer generates a secondary UV set for lightmaps.
    pub generate_lightmap_uvs: bool,
}

/// A mesh reference together with its import settings.
///
/// Several sources may point at the same geometry; the mesh is shared.
#[derive(Debug, Clone)]
pub struct MeshSource {
    /// Display name
    pub name: String,
    /// Shared geometry
    pub mesh: Arc<Mesh>,
    /// Import flags
    pub import: ImportSettings,
}

impl MeshSource {
    /// Creates a source named after its mesh.
    pub fn new(mesh: Arc<Mesh>, import: ImportSettings) -> Self {
        Self {
            name: mesh.name().to_string(),
            mesh,
            import,
        }
    }

    /// Overrides the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
