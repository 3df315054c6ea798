use glam::Vec3;

use crate::scene::{Material, Quad};

/// Seconds a particle lives unless configured otherwise
pub const DEFAULT_LIFETIME: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleState {
    Alive,
    Expired,
}

/// A short-lived point with semi-implicit Euler physics
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub width: f32,
    pub height: f32,
    /// Seconds since spawn, never decreases
    pub age: f32,
    pub lifetime: f32,
}

impl Particle {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            width: 1.0,
            height: 1.0,
            age: 0.0,
            lifetime: DEFAULT_LIFETIME,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_lifetime(mut self, lifetime: f32) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Replace velocity and acceleration
    pub fn apply_force(&mut self, velocity: Vec3, acceleration: Vec3) {
        self.velocity = velocity;
        self.acceleration = acceleration;
    }

    /// Alive while `age <= lifetime`
    pub fn state(&self) -> ParticleState {
        if self.age > self.lifetime {
            ParticleState::Expired
        } else {
            ParticleState::Alive
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state() == ParticleState::Alive
    }

    /// Age by `delta` seconds and integrate if still alive
    ///
    /// Velocity is updated before position. An expired particle keeps its last
    /// position and velocity. Negative or non-finite deltas count as zero.
    pub fn update(&mut self, delta: f32) -> ParticleState {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

        self.age += delta;
        if self.state() == ParticleState::Expired {
            return ParticleState::Expired;
        }

        self.velocity += self.acceleration * delta;
        self.position += self.velocity * delta;
        ParticleState::Alive
    }

    /// Visual for this particle at its current position
    pub fn quad(&self, material: Material) -> Quad {
        Quad {
            width: self.width,
            height: self.height,
            position: self.position,
            material,
        }
    }
}
