// Host-side tests for the particle clusters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/particles.rs");
}

use constants::*;
use particles::*;

fn spawn_green() -> ParticleGroup {
    ParticleGroup::spawn(
        PARTICLE_GROUP_ORIGINS[0],
        PARTICLE_WHITE,
        SUNLIT_SAND,
        PARTICLE_COUNT,
        GROUP_SEEDS[0],
    )
}

#[test]
fn spawn_is_deterministic_for_a_seed() {
    let a = spawn_green();
    let b = spawn_green();
    assert_eq!(a.particles.len(), PARTICLE_COUNT);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.initial, pb.initial);
        assert_eq!(pa.size, pb.size);
        assert_eq!(pa.shape, pb.shape);
    }
}

#[test]
fn particles_scatter_around_the_ring() {
    let group = spawn_green();
    for p in &group.particles {
        let r = (p.initial.x * p.initial.x + p.initial.y * p.initial.y).sqrt();
        assert!(
            (r - PARTICLE_RING_RADIUS).abs() <= PARTICLE_RING_JITTER / 2.0 + 1e-5,
            "radius {r}"
        );
        assert_eq!(p.initial.z, 0.0);
        assert!(p.size >= PARTICLE_SIZE_MIN && p.size < PARTICLE_SIZE_MAX);
    }
}

#[test]
fn phases_derive_from_particle_identity() {
    let group = spawn_green();
    for (i, p) in group.particles.iter().enumerate() {
        assert_eq!(p.phase, i as f32);
    }
}

#[test]
fn excite_round_trip_restores_color_and_scale() {
    let mut group = spawn_green();
    let before: Vec<([f32; 3], f32)> =
        group.particles.iter().map(|p| (p.color, p.scale)).collect();

    group.set_excited(true);
    for p in &group.particles {
        assert_eq!(p.color, SUNLIT_SAND);
        assert_eq!(p.scale, PARTICLE_EXCITED_SCALE);
    }

    group.set_excited(false);
    for (p, (color, scale)) in group.particles.iter().zip(&before) {
        assert_eq!(p.color, *color);
        assert_eq!(p.scale, *scale);
    }
}

#[test]
fn jitter_is_a_bounded_circle_in_the_cluster_plane() {
    let mut t = 0.0f32;
    while t < 20.0 {
        let j = ParticleGroup::jitter(t, 3.0);
        let mag = (j.x * j.x + j.y * j.y).sqrt();
        assert!((mag - PARTICLE_JITTER_AMPLITUDE).abs() < 1e-5);
        assert_eq!(j.z, 0.0);
        t += 0.31;
    }
}

#[test]
fn position_composes_origin_rest_position_and_jitter() {
    let group = spawn_green();
    let t = 1.25;
    let p = &group.particles[4];
    let expected = group.origin + p.initial + ParticleGroup::jitter(t, p.phase);
    assert_eq!(group.position_at(4, t), expected);
}
