use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Decorative primitive each particle is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Sphere,
    Box,
    Icosahedron,
}

/// One ephemeral decorative particle. `initial` is its resting position in
/// cluster-local space; `phase` derives from its identity and offsets the
/// per-frame jitter so the cluster doesn't move in lockstep.
#[derive(Debug, Clone)]
pub struct Particle {
    pub initial: Vec3,
    pub phase: f32,
    pub size: f32,
    pub scale: f32,
    pub color: [f32; 3],
    pub shape: ParticleShape,
}

/// A ring-shaped cluster of particles with a shared excited/idle state.
#[derive(Debug, Clone)]
pub struct ParticleGroup {
    pub origin: Vec3,
    pub base_color: [f32; 3],
    pub excited_color: [f32; 3],
    pub excited: bool,
    pub particles: Vec<Particle>,
}

impl ParticleGroup {
    /// Scatter `count` particles around a ring, deterministically from `seed`.
    pub fn spawn(
        origin: Vec3,
        base_color: [f32; 3],
        excited_color: [f32; 3],
        count: usize,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let radius = PARTICLE_RING_RADIUS
                + (rng.gen::<f32>() - 0.5) * PARTICLE_RING_JITTER;
            let angle = rng.gen::<f32>() * TAU;
            let shape = match rng.gen::<f32>() {
                r if r < 0.33 => ParticleShape::Sphere,
                r if r < 0.66 => ParticleShape::Box,
                _ => ParticleShape::Icosahedron,
            };
            particles.push(Particle {
                initial: Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0),
                phase: i as f32,
                size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
                scale: 1.0,
                color: base_color,
                shape,
            });
        }
        Self {
            origin,
            base_color,
            excited_color,
            excited: false,
            particles,
        }
    }

    /// Flip the cluster's excited state, recoloring and rescaling every
    /// particle. Two flips restore the original color and scale exactly.
    pub fn set_excited(&mut self, on: bool) {
        self.excited = on;
        let (color, scale) = if on {
            (self.excited_color, PARTICLE_EXCITED_SCALE)
        } else {
            (self.base_color, 1.0)
        };
        for p in &mut self.particles {
            p.color = color;
            p.scale = scale;
        }
    }

    /// Circular jitter applied to a particle's resting position at time `t`.
    pub fn jitter(t: f32, phase: f32) -> Vec3 {
        Vec3::new(
            (t + phase).sin() * PARTICLE_JITTER_AMPLITUDE,
            (t + phase).cos() * PARTICLE_JITTER_AMPLITUDE,
            0.0,
        )
    }

    /// World position of particle `i` at time `t`.
    pub fn position_at(&self, i: usize, t: f32) -> Vec3 {
        let p = &self.particles[i];
        self.origin + p.initial + Self::jitter(t, p.phase)
    }
}
