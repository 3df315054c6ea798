use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::anchor::resolve_origin;
use super::particle::{Particle, ParticleState};
use crate::config::EmitterConfig;
use crate::scene::{Material, NodeId, RenderRoot, SceneNode};
use crate::texture::TextureSlot;

#[derive(Debug, Clone)]
struct LiveParticle {
    particle: Particle,
    visual: NodeId,
}

/// Counts from one emitter frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub expired: usize,
    pub spawned: usize,
    pub live: usize,
}

/// Cap on storage reserved at construction
const PREALLOCATED_PARTICLES: usize = 1024;

/// Emitter that keeps a population of particles alive around a moving origin
///
/// Each particle's quad is attached to the render root for exactly as long as
/// the particle is in the live set. Spawning is rate-limited to
/// `spawn_count` per call and only happens while below `target_population`.
#[derive(Debug)]
pub struct ParticleSystem {
    config: EmitterConfig,
    particles: Vec<LiveParticle>,
    texture: TextureSlot,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create an emitter seeded from the OS
    pub fn new(config: EmitterConfig, texture: TextureSlot) -> Self {
        Self::with_rng(config, texture, StdRng::from_os_rng())
    }

    /// Create an emitter with a reproducible velocity sequence
    pub fn with_seed(config: EmitterConfig, texture: TextureSlot, seed: u64) -> Self {
        Self::with_rng(config, texture, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EmitterConfig, texture: TextureSlot, rng: StdRng) -> Self {
        Self {
            particles: Vec::with_capacity(config.target_population.min(PREALLOCATED_PARTICLES)),
            config,
            texture,
            rng,
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn texture(&self) -> &TextureSlot {
        &self.texture
    }

    /// The asset layer reports load progress through this slot
    pub fn texture_mut(&mut self) -> &mut TextureSlot {
        &mut self.texture
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().map(|live| &live.particle)
    }

    /// Scene handles of the live particles' quads, in spawn order
    pub fn visuals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.particles.iter().map(|live| live.visual)
    }

    /// Age and integrate every particle, detaching those that expired
    ///
    /// Returns the number of particles removed.
    pub fn tick(&mut self, delta: f32, root: &mut dyn RenderRoot) -> usize {
        let mut expired = 0;

        self.particles.retain_mut(|live| match live.particle.update(delta) {
            ParticleState::Alive => {
                if let Some(node) = root.node_mut(live.visual) {
                    node.set_position(live.particle.position);
                }
                true
            }
            ParticleState::Expired => {
                if root.detach(live.visual).is_none() {
                    log::debug!("particle visual {:?} was already detached", live.visual);
                }
                expired += 1;
                false
            }
        });

        if expired > 0 {
            log::debug!("expired {expired} particles, {} live", self.particles.len());
        }
        expired
    }

    /// Spawn up to `spawn_count` particles at `origin`
    ///
    /// Skipped while at or above the target population, while the texture is
    /// unavailable, or when no origin is known and the origin policy has no
    /// fallback. Returns the number of particles spawned.
    pub fn replenish(&mut self, origin: Option<Vec3>, root: &mut dyn RenderRoot) -> usize {
        if self.particles.len() >= self.config.target_population {
            return 0;
        }

        let origin = match resolve_origin(origin, self.config.origin_policy) {
            Some(origin) => origin,
            None => {
                log::trace!("no spawn origin yet, skipping spawn");
                return 0;
            }
        };

        let Some(texture) = self.texture.ready().cloned() else {
            log::trace!("particle texture not ready, skipping spawn");
            return 0;
        };

        for _ in 0..self.config.spawn_count {
            let velocity = Vec3::new(
                self.rng.random_range(-1.0..=1.0),
                self.rng.random_range(-1.0..=1.0),
                self.rng.random_range(-1.0..=1.0),
            ) * self.config.velocity_scale;

            let mut particle = Particle::new(origin)
                .with_size(self.config.width, self.config.height)
                .with_lifetime(self.config.lifetime);
            particle.apply_force(velocity, self.config.force);

            let material = Material::textured(texture.clone(), self.config.tint);
            let visual = root.attach(SceneNode::Quad(particle.quad(material)));
            self.particles.push(LiveParticle { particle, visual });
        }

        log::debug!(
            "spawned {} particles at {origin}, {} live",
            self.config.spawn_count,
            self.particles.len()
        );
        self.config.spawn_count
    }

    /// One frame: `tick` then `replenish`
    pub fn step(
        &mut self,
        delta: f32,
        origin: Option<Vec3>,
        root: &mut dyn RenderRoot,
    ) -> FrameReport {
        let expired = self.tick(delta, root);
        let spawned = self.replenish(origin, root);
        FrameReport {
            expired,
            spawned,
            live: self.particles.len(),
        }
    }

    /// Detach every live particle
    pub fn clear(&mut self, root: &mut dyn RenderRoot) {
        for live in self.particles.drain(..) {
            root.detach(live.visual);
        }
    }
}
