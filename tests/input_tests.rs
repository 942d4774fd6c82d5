// Host-side tests for pure picking math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_hits_head_on() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    let t = result.expect("expected a hit");
    assert!((t - 3.0).abs() < 1e-4, "entry point at t={t}");
}

#[test]
fn ray_sphere_misses_off_axis() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_plane_z_intersects_forward_plane() {
    let hit = ray_plane_z(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 5.5)
        .expect("expected plane hit");
    assert!((hit.z - 5.5).abs() < 1e-5);
    assert!(hit.x.abs() < 1e-5 && hit.y.abs() < 1e-5);
}

#[test]
fn ray_plane_z_rejects_parallel_and_backward() {
    assert!(ray_plane_z(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 5.0).is_none());
    assert!(ray_plane_z(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), -5.0).is_none());
}

#[test]
fn annulus_band_membership() {
    let center = Vec3::new(10.0, 6.0, 5.5);
    let inner = 0.89;
    let outer = 1.11;
    assert!(annulus_contains(center + Vec3::new(1.0, 0.0, 0.0), center, inner, outer));
    assert!(annulus_contains(center + Vec3::new(0.0, -1.05, 0.0), center, inner, outer));
    // dead center and far outside both miss the band
    assert!(!annulus_contains(center, center, inner, outer));
    assert!(!annulus_contains(center + Vec3::new(2.0, 0.0, 0.0), center, inner, outer));
}

#[test]
fn ray_ring_hits_the_band_only() {
    let center = Vec3::new(0.0, 0.0, 5.5);
    let dir = Vec3::new(0.0, 0.0, 1.0);
    // straight through the ring band
    assert!(ray_ring(Vec3::new(1.0, 0.0, -5.0), dir, center, 1.0, 0.11));
    // through the middle of the ring
    assert!(!ray_ring(Vec3::new(0.0, 0.0, -5.0), dir, center, 1.0, 0.11));
    // parallel to the ring plane
    assert!(!ray_ring(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(1.0, 0.0, 0.0),
        center,
        1.0,
        0.11
    ));
}

#[test]
fn pick_nearest_prefers_the_closer_sphere() {
    let spheres = [
        (Vec3::new(0.0, 0.0, 8.0), 0.5),
        (Vec3::new(0.0, 0.0, 4.0), 0.5),
        (Vec3::new(3.0, 0.0, 4.0), 0.5),
    ];
    let hit = pick_nearest(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &spheres);
    assert_eq!(hit, Some(1));
}

#[test]
fn pick_nearest_reports_no_hit() {
    let spheres = [(Vec3::new(0.0, 5.0, 5.0), 0.5)];
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &spheres), None);
}
