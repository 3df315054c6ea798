use crate::error::{Error, Result};
use crate::math::Color;

use super::node::{Mesh, NodeKind, SceneNode};

/// Handle to a node attached to a [`RenderRoot`]
///
/// Handles carry a generation so a detached handle never aliases a node that
/// later reuses the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Scene root that visuals are attached to and detached from
pub trait RenderRoot {
    /// Attach a node and return its handle
    fn attach(&mut self, node: SceneNode) -> NodeId;

    /// Detach a node, returning it if the handle was live
    fn detach(&mut self, id: NodeId) -> Option<SceneNode>;

    /// Mutable access to a live node
    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;

    fn is_attached(&self, id: NodeId) -> bool;
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<SceneNode>,
}

/// In-memory scene root
///
/// Stands in for the rendering engine's scene: it owns attached nodes and
/// hands out stable [`NodeId`]s. Freed slots are reused.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    pub background: Option<Color>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Like [`RenderRoot::node_mut`], but a stale handle is an error
    pub fn try_node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode> {
        self.node_mut(id).ok_or(Error::UnknownNode(id.index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.node.as_ref().map(|node| {
                (
                    NodeId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    node,
                )
            })
        })
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.iter().filter(|(_, node)| node.kind() == kind).count()
    }

    /// All attached meshes, including those nested in groups
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.iter().flat_map(|(_, node)| node.meshes())
    }
}

impl RenderRoot for SceneGraph {
    fn attach(&mut self, node: SceneNode) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        }
    }

    fn detach(&mut self, id: NodeId) -> Option<SceneNode> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(node)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn is_attached(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}
