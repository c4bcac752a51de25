//! # Mesh Data Structure
//!
//! Triangle mesh with vertices, triangle indices and optional per-vertex
//! normals.

use std::collections::HashMap;

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// A named triangle mesh.
///
/// Positions are single precision, matching what renderers and colliders
/// consume. Triangles are wound counter-clockwise when seen from outside.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::Mesh;
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(Vec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Display name
    name: String,
    /// Vertex positions
    vertices: Vec<Vec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<Vec3>>,
}

impl Mesh {
    /// Creates an empty, unnamed mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            name: String::new(),
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Removes all geometry while keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.normals = None;
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the mesh name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the vertex positions for in-place edits.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Vec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    /// Recomputes per-vertex normals from the triangle buffer.
    ///
    /// Each vertex normal is the normalized sum of the unnormalized face
    /// normals of its triangles, so larger faces weigh more.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Signed volume enclosed by the triangles.
    ///
    /// Positive when the mesh is closed and its triangles face outward.
    pub fn signed_volume(&self) -> f32 {
        self.triangles
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                v0.dot(v1.cross(v2))
            })
            .sum::<f32>()
            / 6.0
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - No zero-area triangles
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() >= DEGENERATE_AREA_EPSILON
        })
    }

    /// Checks that the mesh is a closed, consistently oriented manifold.
    ///
    /// Every directed edge must occur exactly once and its reverse must occur
    /// exactly once, which means each undirected edge is shared by exactly two
    /// triangles that agree on orientation.
    pub fn check_closed_manifold(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;
        let mut half_edges: HashMap<(u32, u32), u32> =
            HashMap::with_capacity(self.triangles.len() * 3);

        for (index, tri) in self.triangles.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} references vertex {bad} of {vertex_count}"
                )));
            }
            for edge in directed_edges(tri) {
                *half_edges.entry(edge).or_insert(0) += 1;
            }
        }

        for tri in &self.triangles {
            for (a, b) in directed_edges(tri) {
                if half_edges.get(&(a, b)).copied().unwrap_or(0) > 1 {
                    return Err(MeshError::non_manifold(format!(
                        "edge ({a}, {b}) is used twice in the same direction"
                    )));
                }
                if !half_edges.contains_key(&(b, a)) {
                    return Err(MeshError::non_manifold(format!(
                        "edge ({a}, {b}) has no opposite triangle"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals
            .as_ref()
            .map(|normals| normals.iter().flat_map(|n| n.to_array()).collect())
    }
}

#[inline]
fn directed_edges(tri: &[u32; 3]) -> [(u32, u32); 3] {
    [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
}
