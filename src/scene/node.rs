use glam::{EulerRot, Mat4, Quat, Vec3};

use super::geometry::Geometry;
use crate::math::{Color, WHITE};
use crate::texture::TextureHandle;

/// Position, Euler rotation and scale of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians about x, y and z, composed in `order`
    pub rotation: Vec3,
    pub order: EulerRot,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            order: EulerRot::XYZ,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn quat(&self) -> Quat {
        let Vec3 { x, y, z } = self.rotation;
        let (a, b, c) = match self.order {
            EulerRot::XZY => (x, z, y),
            EulerRot::YXZ => (y, x, z),
            EulerRot::YZX => (y, z, x),
            EulerRot::ZXY => (z, x, y),
            EulerRot::ZYX => (z, y, x),
            _ => (x, y, z),
        };
        Quat::from_euler(self.order, a, b, c)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

/// Surface description shared by meshes, quads and point sprites
#[derive(Debug, Clone)]
pub struct Material {
    pub color: Color,
    pub texture: Option<TextureHandle>,
    pub transparent: bool,
    /// Outline color drawn over the surface, if any
    pub edges: Option<Color>,
}

impl Material {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            texture: None,
            transparent: false,
            edges: None,
        }
    }

    pub fn textured(texture: TextureHandle, color: Color) -> Self {
        Self {
            color,
            texture: Some(texture),
            transparent: true,
            edges: None,
        }
    }

    pub fn with_edges(mut self, color: Color) -> Self {
        self.edges = Some(color);
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::solid(WHITE)
    }
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub receive_shadow: bool,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
            receive_shadow: false,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// Line segments drawn as a wireframe
#[derive(Debug, Clone)]
pub struct LineSet {
    pub segments: Vec<[Vec3; 2]>,
    pub color: Color,
    pub transform: Transform,
}

/// Point sprites sharing one texture
#[derive(Debug, Clone)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub size: f32,
    pub size_attenuation: bool,
    pub alpha_test: f32,
    pub texture: Option<TextureHandle>,
}

/// Camera-independent textured rectangle
#[derive(Debug, Clone)]
pub struct Quad {
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
    pub shadow_map_size: u32,
}

/// Every kind of node the scene graph can hold
#[derive(Debug, Clone)]
pub enum SceneNode {
    Mesh(Mesh),
    Lines(LineSet),
    Points(PointCloud),
    Quad(Quad),
    Light(PointLight),
    Group(Vec<SceneNode>),
}

/// Discriminant of [`SceneNode`], for logging and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Mesh,
    Lines,
    Points,
    Quad,
    Light,
    Group,
}

impl SceneNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SceneNode::Mesh(_) => NodeKind::Mesh,
            SceneNode::Lines(_) => NodeKind::Lines,
            SceneNode::Points(_) => NodeKind::Points,
            SceneNode::Quad(_) => NodeKind::Quad,
            SceneNode::Light(_) => NodeKind::Light,
            SceneNode::Group(_) => NodeKind::Group,
        }
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            SceneNode::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match self {
            SceneNode::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_points_mut(&mut self) -> Option<&mut PointCloud> {
        match self {
            SceneNode::Points(points) => Some(points),
            _ => None,
        }
    }

    pub fn as_light_mut(&mut self) -> Option<&mut PointLight> {
        match self {
            SceneNode::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Move the node to `position`; returns false for nodes without a position
    pub fn set_position(&mut self, position: Vec3) -> bool {
        match self {
            SceneNode::Mesh(mesh) => mesh.transform.position = position,
            SceneNode::Lines(lines) => lines.transform.position = position,
            SceneNode::Quad(quad) => quad.position = position,
            SceneNode::Light(light) => light.position = position,
            SceneNode::Points(_) | SceneNode::Group(_) => return false,
        }
        true
    }

    /// Meshes in this node and, for groups, all descendants
    pub fn meshes(&self) -> Vec<&Mesh> {
        match self {
            SceneNode::Group(children) => children.iter().flat_map(SceneNode::meshes).collect(),
            node => node.as_mesh().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::geometry::plane;
    use std::f32::consts::PI;

    fn light() -> SceneNode {
        SceneNode::Light(PointLight {
            color: WHITE,
            intensity: 1.0,
            range: 100.0,
            position: Vec3::ZERO,
            cast_shadow: false,
            shadow_map_size: 512,
        })
    }

    #[test]
    fn capability_query_filters_meshes() {
        let mesh = SceneNode::Mesh(Mesh::new(plane(1.0, 1.0), Material::default()));
        assert!(mesh.as_mesh().is_some());
        assert!(light().as_mesh().is_none());
        assert_eq!(light().kind(), NodeKind::Light);
    }

    #[test]
    fn group_meshes_are_collected_recursively() {
        let mesh = || SceneNode::Mesh(Mesh::new(plane(1.0, 1.0), Material::default()));
        let group = SceneNode::Group(vec![
            mesh(),
            light(),
            SceneNode::Group(vec![mesh(), mesh()]),
        ]);
        assert_eq!(group.meshes().len(), 3);
    }

    #[test]
    fn set_position_skips_point_clouds() {
        let mut points = SceneNode::Points(PointCloud {
            positions: vec![Vec3::ZERO],
            size: 3.0,
            size_attenuation: true,
            alpha_test: 0.5,
            texture: None,
        });
        assert!(!points.set_position(Vec3::ONE));

        let mut lamp = light();
        assert!(lamp.set_position(Vec3::ONE));
        assert_eq!(lamp.as_light_mut().map(|l| l.position), Some(Vec3::ONE));
    }

    #[test]
    fn yxz_transform_applies_yaw_before_pitch() {
        let t = Transform {
            rotation: Vec3::new(0.0, PI / 2.0, 0.0),
            order: EulerRot::YXZ,
            ..Transform::default()
        };
        let forward = t.quat() * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn matrix_scales_rotates_then_translates() {
        let t = Transform::at(Vec3::new(2.0, 0.0, -2.0))
            .with_rotation(Vec3::new(0.0, 0.0, PI))
            .with_scale(0.01);
        let p = t.matrix().transform_point3(Vec3::new(100.0, 0.0, 0.0));
        assert!((p - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-5);
    }
}
