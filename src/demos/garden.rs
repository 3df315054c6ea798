use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::{Demo, FrameInput};
use crate::camera::CameraView;
use crate::frame::FrameInfo;
use crate::math::{rgb_from_hex, WHITE};
use crate::scene::{
    plane, Material, Mesh, NodeId, PointLight, RenderRoot, SceneGraph, SceneNode, Transform,
};

const GROUND_SIZE: f32 = 200.0;
const ORBIT_RADIUS: f32 = 20.0;
const LIGHT_HEIGHT: f32 = 15.0;
const SHADOW_MAP_SIZE: u32 = 4096;

/// Position on the light orbit at `time` seconds
pub fn orbit(time: f32) -> Vec3 {
    Vec3::new(time.cos() * ORBIT_RADIUS, LIGHT_HEIGHT, time.sin() * ORBIT_RADIUS)
}

/// Green ground plane lit by two shadow-casting lights circling overhead
pub struct GardenDemo {
    lights: Vec<NodeId>,
    time: f32,
}

impl GardenDemo {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            time: 0.0,
        }
    }
}

impl Default for GardenDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for GardenDemo {
    fn name(&self) -> &str {
        "garden"
    }

    fn build(&mut self, scene: &mut SceneGraph) {
        scene.background = Some(WHITE);

        let mut ground = Mesh::new(
            plane(GROUND_SIZE, GROUND_SIZE),
            Material::solid(rgb_from_hex(0x0a7d15)),
        )
        .with_transform(Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)));
        ground.receive_shadow = true;
        scene.attach(SceneNode::Mesh(ground));

        for color in [0xff6666, 0x33ff33] {
            let light = PointLight {
                color: rgb_from_hex(color),
                intensity: 1.0,
                range: 100.0,
                position: orbit(self.time),
                cast_shadow: true,
                shadow_map_size: SHADOW_MAP_SIZE,
            };
            self.lights.push(scene.attach(SceneNode::Light(light)));
        }
    }

    fn update(&mut self, frame: &FrameInfo, _input: &FrameInput, scene: &mut SceneGraph) {
        self.time = frame.time;
        let position = orbit(self.time);
        for id in &self.lights {
            if let Some(light) = scene.node_mut(*id).and_then(SceneNode::as_light_mut) {
                light.position = position;
            }
        }
    }

    fn camera(&self) -> CameraView {
        CameraView::looking(Vec3::new(3.0, 20.0, 45.0), Vec3::new(0.0, 0.0, -40.0)).with_fov(45.0)
    }
}
