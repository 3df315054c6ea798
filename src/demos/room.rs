use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use super::phone::PhoneMotion;
use super::{Demo, FrameInput};
use crate::camera::{CameraView, LookCamera};
use crate::frame::FrameInfo;
use crate::math::{Color, GREEN, WHITE};
use crate::scene::{
    box_edges, cuboid, merge_geometries, plane, Geometry, LineSet, Material, Mesh, NodeId,
    NodeSet, PointLight, RenderRoot, SceneGraph, SceneNode, Transform,
};

/// Name of the desk mesh inside the table asset
pub const TABLE_NODE: &str = "Desk_LP_01_-_Default_0";

const ROOM_SIZE: f32 = 5.0;
const TABLE_POSITION: Vec3 = Vec3::new(2.0, 0.0, -2.0);
/// Assets are authored in centimetres
const ASSET_SCALE: f32 = 0.01;

fn outlined(color: Color) -> Material {
    Material::solid(color).with_edges(color)
}

/// Merge every mesh in the phone asset into one geometry
///
/// Non-mesh nodes are skipped. `None` if the asset has no meshes.
pub fn phone_geometry(nodes: &NodeSet) -> Option<Geometry> {
    let meshes: Vec<&Mesh> = nodes.values().flat_map(SceneNode::meshes).collect();
    merge_geometries(meshes.iter().map(|mesh| &mesh.geometry))
}

/// Desk geometry from the table asset, if the named node is a mesh
pub fn table_geometry(nodes: &NodeSet) -> Option<Geometry> {
    nodes
        .get(TABLE_NODE)
        .and_then(SceneNode::as_mesh)
        .map(|mesh| mesh.geometry.clone())
        .filter(|geometry| !geometry.is_empty())
}

/// Wireframe room with a table and a spinning phone, viewed from inside
pub struct RoomDemo {
    camera: LookCamera,
    motion: PhoneMotion,
    phone_geometry: Option<Geometry>,
    table_geometry: Option<Geometry>,
    phone: Option<NodeId>,
}

impl RoomDemo {
    pub fn new(phone: &NodeSet, table: &NodeSet) -> Self {
        let phone_geometry = phone_geometry(phone);
        if phone_geometry.is_none() {
            log::warn!("phone asset has no meshes; phone omitted");
        }
        let table_geometry = table_geometry(table);
        if table_geometry.is_none() {
            log::warn!("table asset has no mesh named {TABLE_NODE}; table omitted");
        }

        Self {
            camera: LookCamera::new(Vec3::new(0.0, 1.75, 0.0), 75.0),
            motion: PhoneMotion::default(),
            phone_geometry,
            table_geometry,
            phone: None,
        }
    }

    pub fn look(&self) -> &LookCamera {
        &self.camera
    }

    pub fn phone(&self) -> Option<NodeId> {
        self.phone
    }
}

impl Demo for RoomDemo {
    fn name(&self) -> &str {
        "room"
    }

    fn build(&mut self, scene: &mut SceneGraph) {
        scene.attach(SceneNode::Lines(LineSet {
            segments: box_edges(ROOM_SIZE),
            color: GREEN,
            transform: Transform::at(Vec3::new(0.0, ROOM_SIZE / 2.0, 0.0)),
        }));

        if let Some(geometry) = &self.table_geometry {
            let transform = Transform::at(TABLE_POSITION)
                .with_rotation(Vec3::new(0.0, 0.0, PI))
                .with_scale(ASSET_SCALE);
            scene.attach(SceneNode::Mesh(
                Mesh::new(geometry.clone(), outlined(GREEN)).with_transform(transform),
            ));
        }

        if let Some(geometry) = &self.phone_geometry {
            let transform = Transform::at(self.motion.position())
                .with_rotation(Vec3::new(0.5 * PI, 0.0, self.motion.spin()))
                .with_scale(ASSET_SCALE);
            self.phone = Some(scene.attach(SceneNode::Mesh(
                Mesh::new(geometry.clone(), outlined(GREEN)).with_transform(transform),
            )));
        }
    }

    fn update(&mut self, _frame: &FrameInfo, input: &FrameInput, scene: &mut SceneGraph) {
        self.camera.apply(input.camera_state);
        self.motion.advance();

        if let Some(mesh) = self
            .phone
            .and_then(|id| scene.node_mut(id))
            .and_then(SceneNode::as_mesh_mut)
        {
            mesh.transform.position = self.motion.position();
            mesh.transform.rotation.z = self.motion.spin();
        }
    }

    fn camera(&self) -> CameraView {
        self.camera.view()
    }

    fn summary(&self, scene: &SceneGraph) -> String {
        format!(
            "room: yaw {:.2}, pitch {:.2}, phone y {:.3}, {} nodes",
            self.camera.yaw,
            self.camera.pitch,
            self.motion.position().y,
            scene.len()
        )
    }
}

/// Stand-in phone asset: a body, a screen and a light that must be filtered out
pub fn placeholder_phone() -> NodeSet {
    let body = Mesh::new(cuboid(Vec3::new(7.0, 15.0, 0.8)), Material::solid(WHITE));
    let screen = Mesh::new(
        plane(6.4, 13.6).transformed(&Mat4::from_translation(Vec3::new(0.0, 0.0, 0.41))),
        Material::solid(WHITE),
    );
    let glow = PointLight {
        color: WHITE,
        intensity: 0.2,
        range: 10.0,
        position: Vec3::ZERO,
        cast_shadow: false,
        shadow_map_size: 256,
    };

    NodeSet::from([
        ("Body".to_string(), SceneNode::Mesh(body)),
        ("Screen".to_string(), SceneNode::Mesh(screen)),
        ("Glow".to_string(), SceneNode::Light(glow)),
    ])
}

/// Stand-in table asset with the desk mesh under its expected name
pub fn placeholder_table() -> NodeSet {
    let desk = Mesh::new(cuboid(Vec3::new(120.0, 75.0, 60.0)), Material::solid(WHITE));
    NodeSet::from([(TABLE_NODE.to_string(), SceneNode::Mesh(desk))])
}
