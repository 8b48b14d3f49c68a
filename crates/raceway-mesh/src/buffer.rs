use raceway_core::traits::BoundingBox;
use raceway_math::{Aabb3, Point2, Point3, Vector3};

/// Renderer-ready triangle mesh with parallel vertex attribute arrays.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Derive vertex normals from triangle winding.
    ///
    /// Each face normal is accumulated into its three vertices and the sums
    /// normalized, so shared vertices get smooth-shaded normals and the
    /// facing follows the index winding order.
    pub fn compute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vector3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.positions[i1] - self.positions[i0])
                .cross(self.positions[i2] - self.positions[i0]);
            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }

        for n in &mut self.normals {
            let len = n.length();
            if len > 1e-12 {
                *n /= len;
            }
        }
    }

    /// Axis-aligned bounds of all vertex positions.
    pub fn bounds(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions)
            .unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl BoundingBox for MeshBuffer {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let bb = self.bounds();
        (bb.min, bb.max)
    }
}
