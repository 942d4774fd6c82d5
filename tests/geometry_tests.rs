// Host-side tests for the pure geometry builders.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;
use glam::Vec2;

fn bbox(mesh: &MeshData) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for p in &mesh.positions {
        for a in 0..3 {
            min[a] = min[a].min(p[a]);
            max[a] = max[a].max(p[a]);
        }
    }
    (min, max)
}

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.positions.is_empty());
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.positions.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {i} out of range ({n} vertices)");
    }
}

fn assert_centered(mesh: &MeshData) {
    let (min, max) = bbox(mesh);
    for a in 0..3 {
        let mid = (min[a] + max[a]) * 0.5;
        assert!(mid.abs() < 1e-3, "axis {a} not centered: mid={mid}");
    }
}

#[test]
fn profile_path_drops_duplicate_and_closing_points() {
    let mut path = ProfilePath::new();
    path.move_to(Vec2::new(0.0, 0.0));
    path.line_to(Vec2::new(0.0, 0.0)); // duplicate, dropped
    path.line_to(Vec2::new(1.0, 0.0));
    path.line_to(Vec2::new(1.0, 1.0));
    path.line_to(Vec2::new(0.0, 0.0)); // closes back onto the start, dropped
    let outline = path.into_outline();
    assert_eq!(outline.len(), 3);
}

#[test]
fn profile_path_flattens_quadratic_spans() {
    let mut path = ProfilePath::new();
    path.move_to(Vec2::new(0.0, 0.0));
    path.quad_to(Vec2::new(0.5, 1.0), Vec2::new(1.0, 0.0));
    let outline = path.into_outline();
    // start plus the flattened curve samples
    assert!(outline.len() > 4);
    // curve apex of this symmetric quadratic is y = 0.5 at t = 0.5
    let apex = outline
        .iter()
        .map(|p| p.y)
        .fold(f32::MIN, f32::max);
    assert!((apex - 0.5).abs() < 0.05, "apex {apex}");
}

#[test]
fn extruded_square_has_expected_extents() {
    let outline = [
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
    ];
    let mesh = extrude_profile(&outline, 0.4, 0.1, 4);
    assert_well_formed(&mesh);
    assert_centered(&mesh);
    let (min, max) = bbox(&mesh);
    // bevel pushes the walls out by its radius and caps past both rims
    assert!((max[0] - min[0] - 1.2).abs() < 1e-3);
    assert!((max[1] - min[1] - 1.2).abs() < 1e-3);
    assert!((max[2] - min[2] - 0.6).abs() < 1e-3);
}

#[test]
fn extrude_rejects_degenerate_outlines() {
    let mesh = extrude_profile(&[Vec2::ZERO, Vec2::new(1.0, 0.0)], 0.2, 0.05, 2);
    assert!(mesh.positions.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn extrude_is_orientation_independent() {
    let ccw = [
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
    ];
    let mut cw = ccw;
    cw.reverse();
    let a = extrude_profile(&ccw, 0.4, 0.1, 4);
    let b = extrude_profile(&cw, 0.4, 0.1, 4);
    assert_eq!(a.positions.len(), b.positions.len());
    let (amin, amax) = bbox(&a);
    let (bmin, bmax) = bbox(&b);
    for i in 0..3 {
        assert!((amin[i] - bmin[i]).abs() < 1e-4);
        assert!((amax[i] - bmax[i]).abs() < 1e-4);
    }
}

#[test]
fn sine_solid_spans_one_period() {
    let mesh = sine_wave_solid(1.33, 0.665, 0.266, 0.0665, 16, 64);
    assert_well_formed(&mesh);
    assert_centered(&mesh);
    let (min, max) = bbox(&mesh);
    // width plus the mitered bevel overhang at the band's turnaround points
    let width = max[0] - min[0];
    assert!((width - (1.33 + 2.0 * 0.0665)).abs() < 0.01, "width {width}");
    // crest-to-trough of the wave plus the ribbon thickness
    let height = max[1] - min[1];
    assert!((height - (0.665 + 2.0 * 0.0665)).abs() < 0.05, "height {height}");
    // depth plus both rounded rims
    let depth = max[2] - min[2];
    assert!((depth - (0.266 + 2.0 * 0.0665)).abs() < 1e-3, "depth {depth}");
}

#[test]
fn triangle_solid_matches_profile_dimensions() {
    let mesh = rounded_triangle_solid(1.0, 0.866, 0.2, 0.05, 4);
    assert_well_formed(&mesh);
    assert_centered(&mesh);
    let (min, max) = bbox(&mesh);
    assert!((max[0] - min[0] - 1.1).abs() < 0.01);
    assert!((max[2] - min[2] - 0.3).abs() < 1e-3);
}

#[test]
fn box_solid_reads_as_cube() {
    let mesh = rounded_box_solid(0.8, 0.8, 0.8, 0.05, 16);
    assert_well_formed(&mesh);
    assert_centered(&mesh);
    let (min, max) = bbox(&mesh);
    // profile expands by the bevel; extrusion depth is trimmed so the
    // total z span equals the requested size
    assert!((max[0] - min[0] - 0.9).abs() < 0.01);
    assert!((max[1] - min[1] - 0.9).abs() < 0.01);
    assert!((max[2] - min[2] - 0.8).abs() < 1e-3);
}

#[test]
fn normals_are_unit_length() {
    for mesh in [
        rounded_triangle_solid(1.0, 0.866, 0.2, 0.05, 4),
        rounded_box_solid(0.8, 0.8, 0.8, 0.05, 16),
        uv_sphere(1.0, 8, 8),
        icosahedron(1.0),
    ] {
        for n in &mesh.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
        }
    }
}

#[test]
fn uv_sphere_vertices_sit_on_the_sphere() {
    let r = 0.5;
    let mesh = uv_sphere(r, 8, 8);
    assert_well_formed(&mesh);
    for p in &mesh.positions {
        let d = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((d - r).abs() < 1e-4);
    }
}

#[test]
fn icosahedron_has_twenty_faces() {
    let mesh = icosahedron(1.0);
    assert_eq!(mesh.positions.len(), 12);
    assert_eq!(mesh.indices.len(), 60);
    assert_well_formed(&mesh);
}

#[test]
fn center_moves_bbox_midpoint_to_origin() {
    let mut mesh = box_solid(1.0, 2.0, 3.0);
    for p in &mut mesh.positions {
        p[0] += 5.0;
        p[1] -= 2.0;
    }
    mesh.center();
    assert_centered(&mesh);
}
