//! # Mesh Info
//!
//! One stats row per distinct mesh.

use serde::{Deserialize, Serialize};

use crate::grid::GridRow;
use crate::search::CellValue;
use crate::source::{ImportSettings, MeshSource};

/// Columns of the stats grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshColumn {
    /// Mesh name
    Mesh,
    /// Vertex count
    Vertices,
    /// Triangle count
    Polygons,
    /// Number of references to identical geometry
    Count,
    /// Vertices times references
    TotalVertices,
    /// Readable import flag
    IsReadable,
    /// Lightmap UV import flag
    GenerateLightmap,
}

impl MeshColumn {
    /// Every column in display order.
    pub const ALL: [MeshColumn; 7] = [
        MeshColumn::Mesh,
        MeshColumn::Vertices,
        MeshColumn::Polygons,
        MeshColumn::Count,
        MeshColumn::TotalVertices,
        MeshColumn::IsReadable,
        MeshColumn::GenerateLightmap,
    ];

    /// Header caption.
    pub fn header(self) -> &'static str {
        match self {
            MeshColumn::Mesh => "Mesh",
            MeshColumn::Vertices => "Vertices",
            MeshColumn::Polygons => "Polygons",
            MeshColumn::Count => "Used",
            MeshColumn::TotalVertices => "Total vertices",
            MeshColumn::IsReadable => "Readable",
            MeshColumn::GenerateLightmap => "UV Lightmap",
        }
    }
}

/// Statistics for one distinct mesh.
///
/// Changing an import flag marks the row dirty; the owner is expected to
/// write the flags back to the asset and call [`MeshInfo::mark_clean`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshInfo {
    /// Index of the first source with this geometry
    pub source_index: usize,
    /// Mesh name
    pub name: String,
    /// Vertex count
    pub vertices: usize,
    /// Triangle count
    pub polygons: usize,
    /// Number of sources sharing this geometry
    pub count: usize,
    import: ImportSettings,
    dirty: bool,
}

impl MeshInfo {
    /// Builds a row for `source`, seen `count` times.
    pub fn new(source_index: usize, source: &MeshSource, count: usize) -> Self {
        Self {
            source_index,
            name: source.name.clone(),
            vertices: source.mesh.vertex_count(),
            polygons: source.mesh.triangle_count(),
            count,
            import: source.import,
            dirty: false,
        }
    }

    /// Vertices summed over every reference.
    pub fn total_vertices(&self) -> usize {
        self.vertices * self.count
    }

    /// Current import flags.
    pub fn import_settings(&self) -> ImportSettings {
        self.import
    }

    /// Readable import flag.
    pub fn is_readable(&self) -> bool {
        self.import.is_readable
    }

    /// Sets the readable flag. Returns true if it changed.
    pub fn set_readable(&mut self, value: bool) -> bool {
        let changed = self.import.is_readable != value;
        self.import.is_readable = value;
        self.dirty |= changed;
        changed
    }

    /// Lightmap UV import flag.
    pub fn generate_lightmap(&self) -> bool {
        self.import.generate_lightmap_uvs
    }

    /// Sets the lightmap UV flag. Returns true if it changed.
    pub fn set_generate_lightmap(&mut self, value: bool) -> bool {
        let changed = self.import.generate_lightmap_uvs != value;
        self.import.generate_lightmap_uvs = value;
        self.dirty |= changed;
        changed
    }

    /// Whether import flags changed since the last [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty marker once the flags have been applied.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl GridRow for MeshInfo {
    type Column = MeshColumn;

    fn columns() -> &'static [MeshColumn] {
        &MeshColumn::ALL
    }

    fn cell(&self, column: MeshColumn) -> CellValue {
        match column {
            MeshColumn::Mesh => self.name.as_str().into(),
            MeshColumn::Vertices => self.vertices.into(),
            MeshColumn::Polygons => self.polygons.into(),
            MeshColumn::Count => self.count.into(),
            MeshColumn::TotalVertices => self.total_vertices().into(),
            MeshColumn::IsReadable => self.is_readable().into(),
            MeshColumn::GenerateLightmap => self.generate_lightmap().into(),
        }
    }

    fn is_editable(column: MeshColumn) -> bool {
        matches!(column, MeshColumn::IsReadable | MeshColumn::GenerateLightmap)
    }

    fn set_toggle(&mut self, column: MeshColumn, value: bool) -> bool {
        match column {
            MeshColumn::IsReadable => self.set_readable(value),
            MeshColumn::GenerateLightmap => self.set_generate_lightmap(value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cylinder_mesh::generate_cylinder;
    use std::sync::Arc;

    fn info(count: usize) -> MeshInfo {
        let source = MeshSource::new(
            Arc::new(generate_cylinder(1.0, 1.0, 8)),
            ImportSettings::default(),
        );
        MeshInfo::new(0, &source, count)
    }

    #[test]
    fn test_counts() {
        let row = info(3);
        assert_eq!(row.name, "Generated Cylinder");
        assert_eq!(row.vertices, 18);
        assert_eq!(row.polygons, 32);
        assert_eq!(row.total_vertices(), 54);
    }

    #[test]
    fn test_flags_mark_dirty() {
        let mut row = info(1);
        assert!(!row.is_dirty());
        assert!(!row.set_readable(false));
        assert!(!row.is_dirty());
        assert!(row.set_generate_lightmap(true));
        assert!(row.is_dirty());
        assert!(row.import_settings().generate_lightmap_uvs);
        row.mark_clean();
        assert!(!row.is_dirty());
    }

    #[test]
    fn test_cells() {
        let row = info(2);
        assert_eq!(row.cell(MeshColumn::Mesh), CellValue::from("Generated Cylinder"));
        assert_eq!(row.cell(MeshColumn::TotalVertices), CellValue::Int(36));
        assert_eq!(row.cell(MeshColumn::IsReadable), CellValue::Bool(false));
    }

    #[test]
    fn test_only_flags_are_editable() {
        let editable: Vec<_> = MeshColumn::ALL
            .into_iter()
            .filter(|&c| MeshInfo::is_editable(c))
            .collect();
        assert_eq!(editable, vec![MeshColumn::IsReadable, MeshColumn::GenerateLightmap]);
    }

    #[test]
    fn test_serializes_flags() {
        let json = serde_json::to_value(info(1)).unwrap();
        assert_eq!(json["name"], "Generated Cylinder");
        assert_eq!(json["import"]["is_readable"], false);
    }
}
