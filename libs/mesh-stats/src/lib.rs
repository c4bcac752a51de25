//! # Mesh Stats
//!
//! Table model for inspecting the meshes of a scene: identical geometry is
//! collapsed into one row with a reference count, rows can be searched, and
//! import flags can be toggled.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cylinder_mesh::generate_cylinder;
//! use mesh_stats::{collect_mesh_infos, DataGrid, ImportSettings, MeshSource};
//!
//! let pillar = Arc::new(generate_cylinder(0.5, 4.0, 12));
//! let sources = vec![
//!     MeshSource::new(Arc::clone(&pillar), ImportSettings::default()),
//!     MeshSource::new(Arc::clone(&pillar), ImportSettings::default()),
//! ];
//!
//! let mut grid = DataGrid::new(collect_mesh_infos(&sources));
//! assert_eq!(grid.data_source()[0].count, 2);
//!
//! grid.set_search("52");
//! assert_eq!(grid.visible_rows(), vec![0]);
//! ```

pub mod dedup;
pub mod error;
pub mod grid;
pub mod info;
pub mod search;
pub mod source;

pub use dedup::{collect_mesh_infos, meshes_equal};
pub use error::{StatsError, StatsResult};
pub use grid::{DataGrid, GridRow};
pub use info::{MeshColumn, MeshInfo};
pub use search::{CellValue, SearchQuery};
pub use source::{ImportSettings, MeshSource};
