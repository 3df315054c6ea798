pub mod geometry;
pub mod graph;
pub mod node;

use std::collections::BTreeMap;

pub use geometry::{box_edges, cuboid, merge_geometries, plane, Geometry};
pub use graph::{NodeId, RenderRoot, SceneGraph};
pub use node::{
    LineSet, Material, Mesh, NodeKind, PointCloud, PointLight, Quad, SceneNode, Transform,
};

/// Named nodes of a decoded asset, as the asset layer hands them over
pub type NodeSet = BTreeMap<String, SceneNode>;
