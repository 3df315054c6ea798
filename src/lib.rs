pub mod camera;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod frame;
pub mod input;
pub mod math;
pub mod particles;
pub mod scene;
pub mod texture;

pub use error::{Error, Result};

// Re-export the emitter surface used by hosts
pub use particles::{OriginPolicy, Particle, ParticleState, ParticleSystem, SpawnAnchor};
pub use scene::{RenderRoot, SceneGraph};
