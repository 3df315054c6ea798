mod anchor;
mod particle;
mod system;

pub use anchor::{resolve_origin, OriginPolicy, SpawnAnchor};
pub use particle::{Particle, ParticleState, DEFAULT_LIFETIME};
pub use system::{FrameReport, ParticleSystem};
