//! # Cylinder Generator
//!
//! Stateful front end for the cylinder primitive: holds the user-edited
//! dimensions and owns the output mesh. Setters only store (clamped) values;
//! nothing is rebuilt until [`CylinderGenerator::generate`] is called.

use config::constants::{GeneratorConfig, DEFAULT_EDGE_COUNT, DEFAULT_HEIGHT, DEFAULT_RADIUS};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::cylinder::{
    clamp_edge_count, clamp_height, clamp_radius, generate_into, CylinderSpec,
};

/// Cylinder parameters plus a reusable output mesh.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::CylinderGenerator;
///
/// let mut generator = CylinderGenerator::new();
/// generator.set_edge_count(16);
/// let mesh = generator.generate()?;
/// assert_eq!(mesh.triangle_count(), 64);
/// # Ok::<(), cylinder_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CylinderGenerator {
    radius: f32,
    height: f32,
    edge_count: u32,
    config: GeneratorConfig,
    mesh: Mesh,
}

impl Default for CylinderGenerator {
    fn default() -> Self {
        Self::with_config(GeneratorConfig::default())
    }
}

impl CylinderGenerator {
    /// Creates a generator with default dimensions and no edge ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with default dimensions and the given config.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            edge_count: DEFAULT_EDGE_COUNT,
            config,
            mesh: Mesh::new(),
        }
    }

    /// Creates a generator that refuses edge counts above `max_edge_count`.
    ///
    /// Fails if the ceiling is below the minimum edge count.
    pub fn with_max_edge_count(max_edge_count: u32) -> Result<Self, MeshError> {
        let config = GeneratorConfig::new(Some(max_edge_count))?;
        Ok(Self::with_config(config))
    }

    /// Current radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Sets the radius, clamping non-positive values.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = clamp_radius(radius);
    }

    /// Current height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Sets the height, clamping non-positive values.
    pub fn set_height(&mut self, height: f32) {
        self.height = clamp_height(height);
    }

    /// Current edge count.
    pub fn edge_count(&self) -> u32 {
        self.edge_count
    }

    /// Sets the edge count, raising values below three.
    pub fn set_edge_count(&mut self, edge_count: u32) {
        self.edge_count = clamp_edge_count(edge_count);
    }

    /// Current dimensions as a spec.
    pub fn spec(&self) -> CylinderSpec {
        CylinderSpec::new(self.radius, self.height, self.edge_count)
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Last generated mesh; empty before the first [`generate`](Self::generate).
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the generator, returning the last generated mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Rebuilds the owned mesh from the current dimensions.
    ///
    /// On error the previous mesh is left untouched.
    pub fn generate(&mut self) -> Result<&Mesh, MeshError> {
        if let Some(max) = self.config.max_edge_count {
            if self.edge_count > max {
                return Err(MeshError::TooManyEdges {
                    count: self.edge_count,
                    max,
                });
            }
        }

        let spec = self.spec();
        generate_into(&spec, &mut self.mesh);
        Ok(&self.mesh)
    }
}
