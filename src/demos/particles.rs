use glam::Vec3;

use super::phone::PhoneMotion;
use super::{Demo, FrameInput};
use crate::camera::CameraView;
use crate::config::EmitterConfig;
use crate::frame::FrameInfo;
use crate::math::GREEN;
use crate::particles::{FrameReport, ParticleSystem, SpawnAnchor};
use crate::scene::{cuboid, Material, Mesh, NodeId, RenderRoot, SceneGraph, SceneNode, Transform};
use crate::texture::{Texture, TextureSlot};

/// Particle fountain trailing the bobbing phone
///
/// The phone writes its position into the anchor after it moves; the emitter
/// reads the anchor before that, so spawns lag the phone by one frame and
/// nothing spawns on the very first frame.
pub struct ParticlesDemo {
    system: ParticleSystem,
    motion: PhoneMotion,
    anchor: SpawnAnchor,
    marker: Option<NodeId>,
    pending_texture: Option<(u64, Texture)>,
    last_report: FrameReport,
}

impl ParticlesDemo {
    pub fn new(config: EmitterConfig, sprite: TextureSlot, seed: Option<u64>) -> Self {
        let system = match seed {
            Some(seed) => ParticleSystem::with_seed(config, sprite, seed),
            None => ParticleSystem::new(config, sprite),
        };
        Self {
            system,
            motion: PhoneMotion::default(),
            anchor: SpawnAnchor::new(),
            marker: None,
            pending_texture: None,
            last_report: FrameReport::default(),
        }
    }

    /// Hold the sprite back until frame `frame`, as a slow asset load would
    pub fn deliver_texture_at(mut self, frame: u64, texture: Texture) -> Self {
        *self.system.texture_mut() = TextureSlot::Loading;
        self.pending_texture = Some((frame, texture));
        self
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut ParticleSystem {
        &mut self.system
    }

    pub fn anchor(&self) -> SpawnAnchor {
        self.anchor
    }

    pub fn last_report(&self) -> FrameReport {
        self.last_report
    }
}

impl Demo for ParticlesDemo {
    fn name(&self) -> &str {
        "particles"
    }

    fn build(&mut self, scene: &mut SceneGraph) {
        let marker = Mesh::new(cuboid(Vec3::new(0.07, 0.15, 0.008)), Material::solid(GREEN))
            .with_transform(Transform::at(self.motion.position()));
        self.marker = Some(scene.attach(SceneNode::Mesh(marker)));
    }

    fn update(&mut self, frame: &FrameInfo, _input: &FrameInput, scene: &mut SceneGraph) {
        let pending = self.pending_texture.take_if(|(due, _)| frame.number >= *due);
        if let Some((_, texture)) = pending {
            log::info!(
                "particle texture {} loaded at frame {}",
                texture.name,
                frame.number
            );
            self.system.texture_mut().set_ready(texture);
        }

        let origin = self.anchor.get();
        self.last_report = self.system.step(frame.delta, origin, scene);

        self.motion.advance();
        self.anchor.set(self.motion.position());
        if let Some(node) = self.marker.and_then(|id| scene.node_mut(id)) {
            node.set_position(self.motion.position());
        }
    }

    fn camera(&self) -> CameraView {
        CameraView::looking(Vec3::new(0.0, 1.75, 3.0), self.motion.position())
    }

    fn summary(&self, scene: &SceneGraph) -> String {
        format!(
            "particles: {} live (+{} -{}), {} nodes",
            self.last_report.live,
            self.last_report.spawned,
            self.last_report.expired,
            scene.len()
        )
    }
}
