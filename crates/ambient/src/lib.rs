//! Decorative background particles bouncing inside a rectangular viewport.
//!
//! Owns no application state; a renderer calls [`ParticleField::step`] once
//! per frame and paints [`ParticleField::particles`].

use rand::Rng;

pub const DEFAULT_PARTICLE_COUNT: usize = 50;

const MAX_SPEED: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.random_range(0.0..=width.max(0.0)),
            y: rng.random_range(0.0..=height.max(0.0)),
            vx: rng.random_range(-MAX_SPEED..MAX_SPEED),
            vy: rng.random_range(-MAX_SPEED..MAX_SPEED),
            size: rng.random_range(1.0..3.0),
            opacity: rng.random_range(0.2..0.7),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Particles left outside a shrunken viewport head back in on later steps.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;

            if particle.x < 0.0 {
                particle.vx = particle.vx.abs();
            } else if particle.x > self.width {
                particle.vx = -particle.vx.abs();
            }
            if particle.y < 0.0 {
                particle.vy = particle.vy.abs();
            } else if particle.y > self.height {
                particle.vy = -particle.vy.abs();
            }
        }
    }
}
