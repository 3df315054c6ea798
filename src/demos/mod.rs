mod garden;
mod graph;
mod particles;
mod phone;
mod room;

pub use garden::GardenDemo;
pub use graph::PointGraphDemo;
pub use particles::ParticlesDemo;
pub use phone::PhoneMotion;
pub use room::{placeholder_phone, placeholder_table, RoomDemo, TABLE_NODE};

use crate::camera::{CameraState, CameraView};
use crate::config::{DemoConfig, DemoKind};
use crate::frame::FrameInfo;
use crate::scene::{NodeSet, SceneGraph};
use crate::texture::TextureSlot;

/// Per-frame input handed to a demo
///
/// Replaces global cursor state: whoever owns the input passes it down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub camera_state: CameraState,
}

/// Decoded assets a demo may draw from
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub phone: NodeSet,
    pub table: NodeSet,
    pub sprite: TextureSlot,
}

/// A self-contained scene: builds its nodes once, then animates them per frame
pub trait Demo {
    fn name(&self) -> &str;

    /// Attach the demo's nodes to `scene`
    fn build(&mut self, scene: &mut SceneGraph);

    /// Advance one frame
    fn update(&mut self, frame: &FrameInfo, input: &FrameInput, scene: &mut SceneGraph);

    fn camera(&self) -> CameraView;

    /// One-line status for periodic logging
    fn summary(&self, scene: &SceneGraph) -> String {
        format!("{}: {} nodes", self.name(), scene.len())
    }
}

/// Construct the demo selected in `config`
pub fn create_demo(config: &DemoConfig, assets: Assets) -> Box<dyn Demo> {
    match config.demo {
        DemoKind::Graph => Box::new(PointGraphDemo::new(assets.sprite.ready().cloned())),
        DemoKind::Room => Box::new(RoomDemo::new(&assets.phone, &assets.table)),
        DemoKind::Particles => Box::new(ParticlesDemo::new(
            config.emitter.clone(),
            assets.sprite,
            config.seed,
        )),
        DemoKind::Garden => Box::new(GardenDemo::new()),
    }
}
