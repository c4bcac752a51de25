use cylinder_mesh::{generate, generate_cylinder, CylinderSpec, Mesh};

const RADII: [f32; 4] = [0.01, 0.5, 1.0, 37.25];
const HEIGHTS: [f32; 3] = [0.01, 2.0, 100.0];
const EDGE_COUNTS: [u32; 7] = [3, 4, 5, 7, 16, 33, 360];

fn for_each_mesh(mut check: impl FnMut(f32, f32, u32, &Mesh)) {
    for radius in RADII {
        for height in HEIGHTS {
            for edges in EDGE_COUNTS {
                let mesh = generate_cylinder(radius, height, edges);
                check(radius, height, edges, &mesh);
            }
        }
    }
}

#[test]
fn counts_follow_edge_count() {
    for_each_mesh(|_, _, n, mesh| {
        assert_eq!(mesh.vertex_count(), 2 * n as usize + 2);
        assert_eq!(mesh.triangle_count(), 4 * n as usize);
    });
}

#[test]
fn indices_are_in_bounds() {
    for_each_mesh(|_, _, _, mesh| {
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices_u32().iter().all(|&i| i < count));
    });
}

#[test]
fn rims_differ_only_by_height() {
    for_each_mesh(|_, height, n, mesh| {
        for i in 1..=n {
            let top = mesh.vertex(i);
            let bottom = mesh.vertex(i + n);
            assert_eq!(top.x, bottom.x);
            assert_eq!(top.z, bottom.z);
            assert_eq!(top.y, height / 2.0);
            assert_eq!(bottom.y, -height / 2.0);
            assert!((top.y - bottom.y - height).abs() <= height * 1e-6);
        }
    });
}

#[test]
fn rim_lies_on_radius() {
    for_each_mesh(|radius, _, n, mesh| {
        for i in 1..=2 * n {
            let v = mesh.vertex(i);
            let distance = (v.x * v.x + v.z * v.z).sqrt();
            assert!((distance - radius).abs() <= radius * 1e-5);
        }
    });
}

#[test]
fn every_mesh_is_closed_and_valid() {
    for_each_mesh(|radius, height, n, mesh| {
        assert!(mesh.validate(), "r={radius} h={height} n={n}");
        assert!(
            mesh.check_closed_manifold().is_ok(),
            "r={radius} h={height} n={n}"
        );
        assert!(mesh.signed_volume() > 0.0, "r={radius} h={height} n={n}");
    });
}

#[test]
fn bounding_box_matches_dimensions() {
    let mesh = generate_cylinder(2.0, 6.0, 4);
    let (min, max) = mesh.bounding_box();
    assert_eq!(min.y, -3.0);
    assert_eq!(max.y, 3.0);
    assert!((max.x - 2.0).abs() < 1e-6);
    assert!((min.x + 2.0).abs() < 1e-6);
}

#[test]
fn generation_is_deterministic() {
    let spec = CylinderSpec::new(1.25, 3.5, 48);
    let first = generate(&spec);
    let second = generate(&spec);
    assert_eq!(first.vertices_f32(), second.vertices_f32());
    assert_eq!(first.indices_u32(), second.indices_u32());
    assert_eq!(first.normals_f32(), second.normals_f32());
}

#[test]
fn clamping_equivalences() {
    assert_eq!(generate_cylinder(-1.0, 5.0, 8), generate_cylinder(0.01, 5.0, 8));
    assert_eq!(generate_cylinder(1.0, -5.0, 8), generate_cylinder(1.0, 0.01, 8));
    assert_eq!(generate_cylinder(1.0, 5.0, 1), generate_cylinder(1.0, 5.0, 3));
}

#[test]
fn normals_cover_every_vertex() {
    for_each_mesh(|_, _, _, mesh| {
        let normals = mesh.normals().expect("normals are computed");
        assert_eq!(normals.len(), mesh.vertex_count());
        assert!(normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-4));
    });
}

#[test]
fn cylinder_spec_serializes_with_field_names() {
    let json = serde_json::to_value(CylinderSpec::new(1.0, 2.0, 4)).expect("serializes");
    assert_eq!(json["radius"], 1.0);
    assert_eq!(json["height"], 2.0);
    assert_eq!(json["edge_count"], 4);
}
