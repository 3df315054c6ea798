use glam::Vec3;
use serde::{Deserialize, Serialize};

/// What to spawn from while the anchor has never been written
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginPolicy {
    /// Skip spawning until a position is known
    #[default]
    Skip,
    /// Spawn from a fixed point until a position is known
    Fallback(Vec3),
}

/// Last known position of the object particles emanate from
///
/// Written by the animated object after it moves, read by the emitter before
/// the object moves, so reads may lag by one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnAnchor {
    last: Option<Vec3>,
}

impl SpawnAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, position: Vec3) {
        self.last = Some(position);
    }

    pub fn get(&self) -> Option<Vec3> {
        self.last
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Spawn origin for this frame under `policy`
    pub fn resolve(&self, policy: OriginPolicy) -> Option<Vec3> {
        resolve_origin(self.last, policy)
    }
}

/// A known origin always wins; otherwise the policy decides
pub fn resolve_origin(known: Option<Vec3>, policy: OriginPolicy) -> Option<Vec3> {
    match (known, policy) {
        (Some(position), _) => Some(position),
        (None, OriginPolicy::Fallback(origin)) => Some(origin),
        (None, OriginPolicy::Skip) => None,
    }
}
