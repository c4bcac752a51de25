use std::sync::Arc;

use cylinder_mesh::generate_cylinder;
use mesh_stats::{
    collect_mesh_infos, CellValue, DataGrid, GridRow, ImportSettings, MeshColumn, MeshSource,
    StatsError,
};

fn scene() -> Vec<MeshSource> {
    let pillar = Arc::new(generate_cylinder(0.5, 4.0, 12));
    let pipe = Arc::new(generate_cylinder(0.1, 10.0, 6));
    let column = Arc::new(generate_cylinder(1.0, 3.0, 32));

    vec![
        MeshSource::new(Arc::clone(&pillar), ImportSettings::default()).with_name("Pillar"),
        MeshSource::new(Arc::clone(&pipe), ImportSettings::default()).with_name("Pipe"),
        MeshSource::new(Arc::clone(&pillar), ImportSettings::default()).with_name("Pillar (1)"),
        MeshSource::new(Arc::new(generate_cylinder(0.5, 4.0, 12)), ImportSettings::default())
            .with_name("Pillar copy"),
        MeshSource::new(
            column,
            ImportSettings {
                is_readable: true,
                generate_lightmap_uvs: true,
            },
        )
        .with_name("Column"),
    ]
}

#[test]
fn duplicates_collapse_into_counted_rows() {
    let infos = collect_mesh_infos(&scene());
    let names: Vec<_> = infos.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Pillar", "Pipe", "Column"]);

    let counts: Vec<_> = infos.iter().map(|i| i.count).collect();
    assert_eq!(counts, [3, 1, 1]);

    assert_eq!(infos[0].vertices, 26);
    assert_eq!(infos[0].polygons, 48);
    assert_eq!(infos[0].total_vertices(), 78);
}

#[test]
fn search_filters_rows() {
    let mut grid = DataGrid::new(collect_mesh_infos(&scene()));

    grid.set_search("Pi");
    assert_eq!(grid.visible_rows(), vec![0, 1]);

    grid.set_search("true");
    assert_eq!(grid.visible_rows(), vec![2]);

    // Pipe has 14 vertices, Pillar 26.
    grid.set_search("10-20");
    assert_eq!(grid.visible_rows(), vec![1]);

    grid.set_search("78");
    assert_eq!(grid.visible_rows(), vec![0]);
}

#[test]
fn toggles_mark_rows_dirty() {
    let mut grid = DataGrid::new(collect_mesh_infos(&scene()));

    assert_eq!(grid.set_toggle(1, MeshColumn::IsReadable, true), Ok(true));
    assert_eq!(grid.set_toggle(2, MeshColumn::GenerateLightmap, true), Ok(false));

    let dirty: Vec<_> = grid
        .data_source()
        .iter()
        .filter(|info| info.is_dirty())
        .map(|info| info.source_index)
        .collect();
    assert_eq!(dirty, [1]);

    let row = grid.row(1).expect("row exists");
    assert_eq!(row.cell(MeshColumn::IsReadable), CellValue::Bool(true));
}

#[test]
fn read_only_columns_reject_edits() {
    let mut grid = DataGrid::new(collect_mesh_infos(&scene()));
    assert_eq!(
        grid.set_toggle(0, MeshColumn::Count, true),
        Err(StatsError::ColumnNotEditable {
            column: "Count".into()
        })
    );
}

#[test]
fn headers_cover_every_column() {
    let headers: Vec<_> = mesh_stats::MeshInfo::columns()
        .iter()
        .map(|c| c.header())
        .collect();
    assert_eq!(headers.len(), 7);
    assert!(headers.contains(&"UV Lightmap"));
}
