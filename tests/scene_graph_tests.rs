use glam::Vec3;
use scene_demos::math::GREEN;
use scene_demos::scene::{
    cuboid, merge_geometries, Material, Mesh, NodeKind, Quad, RenderRoot, SceneGraph, SceneNode,
};

fn quad_at(position: Vec3) -> SceneNode {
    SceneNode::Quad(Quad {
        width: 1.0,
        height: 1.0,
        position,
        material: Material::solid(GREEN),
    })
}

#[cfg(test)]
mod render_root_tests {
    use super::*;

    #[test]
    fn test_len_tracks_attach_and_detach() {
        let mut scene = SceneGraph::new();
        let ids: Vec<_> = (0..10).map(|i| scene.attach(quad_at(Vec3::X * i as f32))).collect();
        assert_eq!(scene.len(), 10);

        for id in ids.iter().step_by(2) {
            scene.detach(*id);
        }
        assert_eq!(scene.len(), 5);
        assert_eq!(scene.iter().count(), 5);
        assert_eq!(scene.count(NodeKind::Quad), 5);
    }

    #[test]
    fn test_node_mut_moves_visual() {
        let mut scene = SceneGraph::new();
        let id = scene.attach(quad_at(Vec3::ZERO));
        scene.node_mut(id).unwrap().set_position(Vec3::ONE);

        match scene.get(id) {
            Some(SceneNode::Quad(quad)) => assert_eq!(quad.position, Vec3::ONE),
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_slots_are_reused() {
        let mut scene = SceneGraph::new();
        for _ in 0..100 {
            let id = scene.attach(quad_at(Vec3::ZERO));
            scene.detach(id);
        }
        let id = scene.attach(quad_at(Vec3::ZERO));
        assert_eq!(id.index(), 0);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_meshes_includes_groups() {
        let mut scene = SceneGraph::new();
        let mesh = || SceneNode::Mesh(Mesh::new(cuboid(Vec3::ONE), Material::default()));
        scene.attach(mesh());
        scene.attach(SceneNode::Group(vec![mesh(), quad_at(Vec3::ZERO)]));
        scene.attach(quad_at(Vec3::ZERO));

        assert_eq!(scene.meshes().count(), 2);
        let merged = merge_geometries(scene.meshes().map(|m| &m.geometry)).unwrap();
        assert_eq!(merged.vertex_count(), 16);
    }
}
