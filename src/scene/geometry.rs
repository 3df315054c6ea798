use glam::{Mat4, Vec3};

/// Indexed triangle geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Copy of this geometry with every position transformed by `matrix`
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            positions: self
                .positions
                .iter()
                .map(|p| matrix.transform_point3(*p))
                .collect(),
            indices: self.indices.clone(),
        }
    }
}

/// Concatenate geometries into one buffer, rebasing indices
///
/// Returns `None` when there is nothing to merge.
pub fn merge_geometries<'a>(parts: impl IntoIterator<Item = &'a Geometry>) -> Option<Geometry> {
    let mut merged = Geometry::default();
    let mut any = false;

    for part in parts {
        any = true;
        let base = merged.positions.len() as u32;
        merged.positions.extend_from_slice(&part.positions);
        merged.indices.extend(part.indices.iter().map(|i| i + base));
    }

    any.then_some(merged)
}

/// Axis-aligned box centred on the origin
pub fn cuboid(size: Vec3) -> Geometry {
    let h = size * 0.5;
    let positions = vec![
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1, 0, 3, 2, // back
        4, 5, 6, 4, 6, 7, // front
        0, 1, 5, 0, 5, 4, // bottom
        3, 7, 6, 3, 6, 2, // top
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
    ];
    Geometry::new(positions, indices)
}

/// Box outline: the 12 edges of a cube, without face diagonals
pub fn box_edges(size: f32) -> Vec<[Vec3; 2]> {
    let h = size * 0.5;
    let corner = |x: f32, y: f32, z: f32| Vec3::new(x * h, y * h, z * h);
    let mut edges = Vec::with_capacity(12);
    for &a in &[-1.0, 1.0] {
        for &b in &[-1.0, 1.0] {
            edges.push([corner(-1.0, a, b), corner(1.0, a, b)]);
            edges.push([corner(a, -1.0, b), corner(a, 1.0, b)]);
            edges.push([corner(a, b, -1.0), corner(a, b, 1.0)]);
        }
    }
    edges
}

/// Quad in the XY plane centred on the origin, facing +Z
pub fn plane(width: f32, height: f32) -> Geometry {
    let (w, h) = (width * 0.5, height * 0.5);
    Geometry::new(
        vec![
            Vec3::new(-w, -h, 0.0),
            Vec3::new(w, -h, 0.0),
            Vec3::new(w, h, 0.0),
            Vec3::new(-w, h, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}
