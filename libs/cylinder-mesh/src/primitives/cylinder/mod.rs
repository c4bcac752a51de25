//! # Cylinder Primitive
//!
//! Generates a closed, capped cylinder standing on the Y axis and centered at
//! the origin.
//!
//! ## Vertex layout
//!
//! For `n` edges the buffer holds `2n + 2` vertices:
//!
//! ```text
//! 0            top cap center
//! 1 ..= n      top rim, increasing angle
//! n+1 ..= 2n   bottom rim, same angles as the top rim
//! 2n+1         bottom cap center
//! ```
//!
//! Triangles are emitted as top fan, bottom fan, then the side wall, `4n` in
//! total.

use std::f32::consts::TAU;

use config::constants::{
    CYLINDER_MESH_NAME, DEFAULT_EDGE_COUNT, DEFAULT_HEIGHT, DEFAULT_RADIUS, MIN_EDGE_COUNT,
    MIN_HEIGHT, MIN_RADIUS,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::mesh::Mesh;

/// Dimensions of a cylinder.
///
/// Values are not checked on construction; generation clamps them with
/// [`CylinderSpec::clamped`].
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::CylinderSpec;
///
/// let spec = CylinderSpec::new(-1.0, 5.0, 1).clamped();
/// assert_eq!(spec.radius, 0.01);
/// assert_eq!(spec.edge_count, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    /// Distance from the axis to the rim.
    pub radius: f32,
    /// Distance between the two caps.
    pub height: f32,
    /// Number of edges around each rim.
    pub edge_count: u32,
}

impl Default for CylinderSpec {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            edge_count: DEFAULT_EDGE_COUNT,
        }
    }
}

impl CylinderSpec {
    /// Creates a spec from raw values.
    pub fn new(radius: f32, height: f32, edge_count: u32) -> Self {
        Self {
            radius,
            height,
            edge_count,
        }
    }

    /// Returns a copy with every value coerced into its valid range.
    pub fn clamped(self) -> Self {
        Self {
            radius: clamp_radius(self.radius),
            height: clamp_height(self.height),
            edge_count: clamp_edge_count(self.edge_count),
        }
    }

    /// Number of vertices a generated mesh will have.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        2 * (clamp_edge_count_quiet(self.edge_count) as usize + 1)
    }

    /// Number of triangles a generated mesh will have.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        4 * clamp_edge_count_quiet(self.edge_count) as usize
    }
}

/// Replaces a non-positive (or NaN) radius with [`MIN_RADIUS`].
pub fn clamp_radius(radius: f32) -> f32 {
    if radius > 0.0 {
        radius
    } else {
        warn!("cylinder: radius must be > 0.0 (got {radius}), clamping to {MIN_RADIUS}");
        MIN_RADIUS
    }
}

/// Replaces a non-positive (or NaN) height with [`MIN_HEIGHT`].
pub fn clamp_height(height: f32) -> f32 {
    if height > 0.0 {
        height
    } else {
        warn!("cylinder: height must be > 0.0 (got {height}), clamping to {MIN_HEIGHT}");
        MIN_HEIGHT
    }
}

/// Raises an edge count below [`MIN_EDGE_COUNT`] to the minimum.
pub fn clamp_edge_count(edge_count: u32) -> u32 {
    if edge_count >= MIN_EDGE_COUNT {
        edge_count
    } else {
        warn!(
            "cylinder: edge_count must be >= {MIN_EDGE_COUNT} (got {edge_count}), clamping to {MIN_EDGE_COUNT}"
        );
        MIN_EDGE_COUNT
    }
}

#[inline]
fn clamp_edge_count_quiet(edge_count: u32) -> u32 {
    edge_count.max(MIN_EDGE_COUNT)
}

/// Generates a cylinder mesh from raw dimensions.
///
/// Invalid values are clamped, never rejected: `radius <= 0` and
/// `height <= 0` become `0.01`, `edge_count <= 2` becomes `3`.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::generate_cylinder;
///
/// let mesh = generate_cylinder(1.0, 2.0, 4);
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn generate_cylinder(radius: f32, height: f32, edge_count: u32) -> Mesh {
    generate(&CylinderSpec::new(radius, height, edge_count))
}

/// Generates a cylinder mesh from a spec into a fresh [`Mesh`].
pub fn generate(spec: &CylinderSpec) -> Mesh {
    let mut mesh = Mesh::with_capacity(spec.vertex_count(), spec.triangle_count());
    generate_into(spec, &mut mesh);
    mesh
}

/// Generates a cylinder mesh into an existing container.
///
/// The container is cleared first, so nothing from a previous mesh survives;
/// only its allocations are reused.
pub fn generate_into(spec: &CylinderSpec, mesh: &mut Mesh) {
    let CylinderSpec {
        radius,
        height,
        edge_count: n,
    } = spec.clamped();
    let theta = TAU / n as f32;

    mesh.clear();
    mesh.set_name(CYLINDER_MESH_NAME);

    // Both rims share the same angular positions; caps start at y = 0.
    let rim: Vec<Vec3> = (0..n)
        .map(|edge| {
            let (sin, cos) = (edge as f32 * theta).sin_cos();
            Vec3::new(cos * radius, 0.0, sin * radius)
        })
        .collect();

    let top_center = mesh.add_vertex(Vec3::ZERO);
    for &p in &rim {
        mesh.add_vertex(p);
    }
    for &p in &rim {
        mesh.add_vertex(p);
    }
    let bottom_center = mesh.add_vertex(Vec3::ZERO);

    let top = |j: u32| 1 + j % n;
    let bottom = |j: u32| n + 1 + j % n;

    for j in 0..n {
        mesh.add_triangle(top(j), top_center, top(j + 1));
    }
    for j in 0..n {
        mesh.add_triangle(bottom(j), bottom(j + 1), bottom_center);
    }
    for j in 0..n {
        mesh.add_triangle(top(j), top(j + 1), bottom(j + 1));
    }
    for j in 0..n {
        mesh.add_triangle(top(j), bottom(j + 1), bottom(j));
    }

    let half = height / 2.0;
    let (upper, lower) = mesh.vertices_mut().split_at_mut(n as usize + 1);
    for v in upper {
        v.y += half;
    }
    for v in lower {
        v.y -= half;
    }

    mesh.compute_normals();

    debug!(
        radius,
        height,
        edge_count = n,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );
}
