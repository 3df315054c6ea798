use glam::Vec3;

use super::{Demo, FrameInput};
use crate::camera::CameraView;
use crate::frame::FrameInfo;
use crate::math::surface_height;
use crate::scene::{NodeId, PointCloud, RenderRoot, SceneGraph, SceneNode};
use crate::texture::TextureHandle;

const GRID_COUNT: usize = 10;
const SEPARATION: f32 = 3.0;
const AMPLITUDE: f32 = 5.0;
const FREQUENCY: f32 = 0.004;
const SHIFT_STEP: f32 = 15.0;

/// Grid coordinate along one axis for index `i`
fn grid_coord(i: usize) -> f32 {
    SEPARATION * (i as f32 - GRID_COUNT as f32 / 2.0)
}

/// Rippling surface sampled on a square grid of point sprites
pub struct PointGraphDemo {
    shift: f32,
    sprite: Option<TextureHandle>,
    points: Option<NodeId>,
}

impl PointGraphDemo {
    pub fn new(sprite: Option<TextureHandle>) -> Self {
        Self {
            shift: 0.0,
            sprite,
            points: None,
        }
    }

    pub fn shift(&self) -> f32 {
        self.shift
    }

    /// Sample the surface at the current shift, row-major in x then z
    pub fn sample(&self) -> Vec<Vec3> {
        (0..GRID_COUNT)
            .flat_map(|xi| (0..GRID_COUNT).map(move |zi| (grid_coord(xi), grid_coord(zi))))
            .map(|(x, z)| Vec3::new(x, surface_height(x, z, self.shift, FREQUENCY, AMPLITUDE), z))
            .collect()
    }
}

impl Demo for PointGraphDemo {
    fn name(&self) -> &str {
        "graph"
    }

    fn build(&mut self, scene: &mut SceneGraph) {
        let cloud = PointCloud {
            positions: self.sample(),
            size: 3.0,
            size_attenuation: true,
            alpha_test: 0.5,
            texture: self.sprite.clone(),
        };
        self.points = Some(scene.attach(SceneNode::Points(cloud)));
    }

    fn update(&mut self, _frame: &FrameInfo, _input: &FrameInput, scene: &mut SceneGraph) {
        self.shift += SHIFT_STEP;

        let Some(cloud) = self
            .points
            .and_then(|id| scene.node_mut(id))
            .and_then(SceneNode::as_points_mut)
        else {
            log::warn!("point cloud is not attached; call build first");
            return;
        };

        for p in &mut cloud.positions {
            p.y = surface_height(p.x, p.z, self.shift, FREQUENCY, AMPLITUDE);
        }
    }

    fn camera(&self) -> CameraView {
        CameraView::looking(Vec3::new(100.0, 10.0, 0.0), Vec3::ZERO)
    }

    fn summary(&self, scene: &SceneGraph) -> String {
        format!("graph: shift {:.0}, {} nodes", self.shift, scene.len())
    }
}
