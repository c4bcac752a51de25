//! # Cylinder Mesh
//!
//! Pure Rust generation of capped cylinder meshes for renderers and
//! colliders.
//!
//! ## Architecture
//!
//! ```text
//! (radius, height, edge_count) → clamp → vertex/triangle buffers → normals → Mesh
//! ```
//!
//! - [`generate_cylinder`] / [`generate`]: pure functions, fresh mesh per call
//! - [`generate_into`]: same, reusing an existing container
//! - [`CylinderGenerator`]: stateful parameters with an optional edge ceiling
//!
//! ## Usage
//!
//! ```rust
//! use cylinder_mesh::generate_cylinder;
//!
//! let mesh = generate_cylinder(1.0, 2.0, 4);
//! assert_eq!(mesh.vertex_count(), 10);
//! assert!(mesh.check_closed_manifold().is_ok());
//! ```

pub mod error;
pub mod generator;
pub mod mesh;
pub mod primitives;

pub use error::MeshError;
pub use generator::CylinderGenerator;
pub use mesh::Mesh;
pub use primitives::{generate, generate_cylinder, generate_into, CylinderSpec};
