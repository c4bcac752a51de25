//! # Duplicate Collapsing
//!
//! Groups sources with identical geometry into one [`MeshInfo`] row.

use std::sync::Arc;

use cylinder_mesh::Mesh;
use tracing::debug;

use crate::info::MeshInfo;
use crate::source::MeshSource;

/// Compares two meshes element by element, ignoring names.
///
/// Positions, triangles and normals must match exactly.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::generate_cylinder;
/// use mesh_stats::meshes_equal;
///
/// let mut renamed = generate_cylinder(1.0, 2.0, 8);
/// renamed.set_name("copy");
/// assert!(meshes_equal(&generate_cylinder(1.0, 2.0, 8), &renamed));
/// assert!(!meshes_equal(&generate_cylinder(1.0, 2.0, 8), &generate_cylinder(1.0, 2.0, 9)));
/// ```
pub fn meshes_equal(a: &Mesh, b: &Mesh) -> bool {
    a.vertex_count() == b.vertex_count()
        && a.triangle_count() == b.triangle_count()
        && a.vertices() == b.vertices()
        && a.triangles() == b.triangles()
        && a.normals() == b.normals()
}

/// Builds one row per distinct geometry, in order of first appearance.
///
/// Each row takes its name and import settings from the first source with
/// that geometry and counts every source sharing it.
pub fn collect_mesh_infos(sources: &[MeshSource]) -> Vec<MeshInfo> {
    let mut absorbed = vec![false; sources.len()];
    let mut infos = Vec::new();

    for (i, source) in sources.iter().enumerate() {
        if absorbed[i] {
            continue;
        }

        let mut count = 1;
        for (j, other) in sources.iter().enumerate().skip(i + 1) {
            if !absorbed[j] && same_geometry(&source.mesh, &other.mesh) {
                absorbed[j] = true;
                count += 1;
            }
        }

        infos.push(MeshInfo::new(i, source, count));
    }

    debug!(
        sources = sources.len(),
        unique = infos.len(),
        "collapsed duplicate meshes"
    );
    infos
}

#[inline]
fn same_geometry(a: &Arc<Mesh>, b: &Arc<Mesh>) -> bool {
    Arc::ptr_eq(a, b) || meshes_equal(a, b)
}
