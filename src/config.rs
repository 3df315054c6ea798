use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::{Color, GREEN};
use crate::particles::{OriginPolicy, DEFAULT_LIFETIME};

/// Which demo scene to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    /// Rippling point-cloud surface
    Graph,
    /// Room with table and phone, cursor-driven look
    Room,
    /// Particle fountain following the bobbing phone
    #[default]
    Particles,
    /// Ground plane lit by two orbiting lights
    Garden,
}

/// Emitter tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Population the emitter refills towards; not a hard cap
    pub target_population: usize,
    /// Particles spawned per replenish call
    pub spawn_count: usize,
    pub lifetime: f32,
    /// Scale applied to the per-axis [-1, 1] random velocity
    pub velocity_scale: f32,
    /// Constant acceleration given to every particle
    pub force: Vec3,
    pub width: f32,
    pub height: f32,
    pub tint: Color,
    pub origin_policy: OriginPolicy,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            target_population: 200,
            spawn_count: 2,
            lifetime: DEFAULT_LIFETIME,
            velocity_scale: 1.0,
            force: Vec3::new(0.0, 0.01, 0.0),
            width: 1.0,
            height: 1.0,
            tint: GREEN,
            origin_policy: OriginPolicy::Skip,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_population == 0 {
            return Err(Error::InvalidConfig("target_population must be positive".into()));
        }
        if self.spawn_count == 0 {
            return Err(Error::InvalidConfig("spawn_count must be positive".into()));
        }
        if !(self.lifetime.is_finite() && self.lifetime > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "lifetime must be a positive number of seconds, got {}",
                self.lifetime
            )));
        }
        if !self.force.is_finite() || !self.velocity_scale.is_finite() {
            return Err(Error::InvalidConfig("force and velocity_scale must be finite".into()));
        }
        Ok(())
    }
}

/// Top-level settings for a headless demo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub demo: DemoKind,
    /// Frames to simulate
    pub frames: u64,
    /// Fixed frame delta in seconds; `None` runs against the wall clock
    pub fixed_dt: Option<f32>,
    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Frames the particle texture stays unavailable after start
    pub texture_delay: u64,
    pub emitter: EmitterConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: DemoKind::default(),
            frames: 600,
            fixed_dt: Some(1.0 / 60.0),
            seed: None,
            texture_delay: 0,
            emitter: EmitterConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(dt) = self.fixed_dt {
            if !(dt.is_finite() && dt > 0.0) {
                return Err(Error::InvalidConfig(format!("fixed_dt must be positive, got {dt}")));
            }
        }
        self.emitter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fountain() {
        let config = EmitterConfig::default();
        assert_eq!(config.target_population, 200);
        assert_eq!(config.spawn_count, 2);
        assert_eq!(config.lifetime, 2.0);
        assert_eq!(config.force, Vec3::new(0.0, 0.01, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = DemoConfig::from_json_str(
            r#"{ "demo": "graph", "emitter": { "spawn_count": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config.demo, DemoKind::Graph);
        assert_eq!(config.emitter.spawn_count, 5);
        assert_eq!(config.emitter.target_population, 200);
        assert_eq!(config.frames, 600);
    }

    #[test]
    fn rejects_zero_spawn_count() {
        let err = DemoConfig::from_json_str(r#"{ "emitter": { "spawn_count": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_non_positive_lifetime() {
        let config = EmitterConfig {
            lifetime: 0.0,
            ..EmitterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(DemoConfig::from_json_str("{ demo"), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DemoConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        std::fs::write(&path, r#"{ "demo": "garden", "frames": 5, "fixed_dt": 0.1 }"#).unwrap();

        let config = DemoConfig::load(&path).unwrap();
        assert_eq!(config.demo, DemoKind::Garden);
        assert_eq!(config.frames, 5);
        assert_eq!(config.fixed_dt, Some(0.1));
    }
}
