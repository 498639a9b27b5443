//! # Mesh Data Structure
//!
//! Indexed triangle soup shared by primitives, lofted blades and whole rows.
//! A row is built by merging closed shells, so a finished mesh is usually
//! several disjoint solids in one index space.

use crate::bounds::BoundingBox;
use crate::error::MeshError;
use config::constants::EPSILON;
use glam::{DMat3, DVec3};
use std::collections::HashMap;

/// Vertices plus outward-wound triangles, in millimetres.
///
/// Geometry stays f64 until STL export narrows it.
///
/// # Example
///
/// ```rust
/// use compressor_mesh::{cylinder, Mesh};
/// use glam::DVec3;
///
/// let hub = cylinder(20.0, 10.0, 12).unwrap();
/// let mut row = Mesh::new();
/// row.merge(&hub);
/// row.merge(&hub.translated(DVec3::new(0.0, 0.0, 10.0)));
/// assert_eq!(row.vertex_count(), 2 * hub.vertex_count());
/// assert!(row.is_closed_manifold());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    /// Counter-clockwise seen from outside.
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Empty mesh to merge shells into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh sized for a known vertex and facet count.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Facet count, which is also the STL record count.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True before any shell has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a point and returns the index facets refer to it by.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a facet. Indices are not checked until [`Mesh::validate`].
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Position of one vertex. Panics on an out-of-range index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Corner positions of one facet in winding order.
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Unit normal of a triangle from its winding.
    ///
    /// Degenerate triangles report +Z so exporters always have a unit vector.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_corners(index);
        let normal = (v1 - v0).cross(v2 - v0);
        let len = normal.length();
        if len > EPSILON {
            normal / len
        } else {
            DVec3::Z
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Fails with `EmptyMesh` if the mesh has no vertices.
    pub fn bounding_box(&self) -> Result<BoundingBox, MeshError> {
        BoundingBox::from_points(&self.vertices)
    }

    /// Copy rotated about the origin, used to place blades around the axis.
    pub fn rotated(&self, rotation: &DMat3) -> Mesh {
        Mesh {
            vertices: self.vertices.iter().map(|v| *rotation * *v).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// Copy shifted by `offset`, used to stack rows along the axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compressor_mesh::primitives::cylinder;
    /// use glam::DVec3;
    ///
    /// let hub = cylinder(10.0, 5.0, 16).unwrap();
    /// let moved = hub.translated(DVec3::new(0.0, 0.0, 20.0));
    /// assert_eq!(moved.bounding_box().unwrap().min.z, 20.0);
    /// ```
    pub fn translated(&self, offset: DVec3) -> Mesh {
        Mesh {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// Maps every vertex through a closure, keeping the topology.
    pub fn map_vertices(&self, f: impl Fn(DVec3) -> DVec3) -> Mesh {
        Mesh {
            vertices: self.vertices.iter().map(|v| f(*v)).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// Appends another mesh, re-indexing its facets after the existing
    /// vertices. Shells are not welded.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles.push([
                tri[0] + offset,
                tri[1] + offset,
                tri[2] + offset,
            ]);
        }
    }

    /// False if any facet has an out-of-range or repeated index, or no area.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }

    /// Returns true if every edge is shared by exactly two faces with
    /// opposite directions, i.e. the mesh is a set of closed oriented shells.
    pub fn is_closed_manifold(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let mut edges: HashMap<(u32, u32), u32> = HashMap::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            for k in 0..3 {
                *edges.entry((tri[k], tri[(k + 1) % 3])).or_insert(0) += 1;
            }
        }

        edges
            .iter()
            .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Signed volume enclosed by the mesh (positive for outward winding).
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Unit corner tetrahedron, wound outward.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        for v in [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z] {
            mesh.add_vertex(v);
        }
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(matches!(mesh.bounding_box(), Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_vertex_indices_follow_insertion_order() {
        let mut mesh = Mesh::with_capacity(2, 0);
        assert_eq!(mesh.add_vertex(DVec3::new(30.0, 0.0, 5.0)), 0);
        assert_eq!(mesh.add_vertex(DVec3::new(0.0, 30.0, 5.0)), 1);
        assert_eq!(mesh.vertex(1), DVec3::new(0.0, 30.0, 5.0));
    }

    #[test]
    fn test_bounding_box_spans_all_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-25.0, -25.0, 0.0));
        mesh.add_vertex(DVec3::new(25.0, 25.0, 40.0));
        let bounds = mesh.bounding_box().unwrap();
        assert_eq!(bounds.min, DVec3::new(-25.0, -25.0, 0.0));
        assert_eq!(bounds.max, DVec3::new(25.0, 25.0, 40.0));
    }

    #[test]
    fn test_validate_rejects_dangling_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_validate_rejects_sliver() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_tetrahedron_is_closed_and_outward() {
        let mesh = tetrahedron();
        assert!(mesh.validate());
        assert!(mesh.is_closed_manifold());
        assert_abs_diff_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_shell_is_not_manifold() {
        let mut mesh = tetrahedron();
        mesh.triangles.pop();
        assert!(!mesh.is_closed_manifold());
    }

    #[test]
    fn test_face_normal_points_outward() {
        let mesh = tetrahedron();
        assert_eq!(mesh.face_normal(0), -DVec3::Z);
    }

    #[test]
    fn test_rotation_about_axis_keeps_volume() {
        let quarter = DMat3::from_rotation_z(std::f64::consts::FRAC_PI_2);
        let turned = tetrahedron().rotated(&quarter);
        assert!(turned.is_closed_manifold());
        assert_abs_diff_eq!(turned.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(turned.vertex(1).y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translated_leaves_original_untouched() {
        let mesh = tetrahedron();
        let moved = mesh.translated(DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(mesh.vertex(3), DVec3::Z);
        assert_eq!(moved.vertex(3), DVec3::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn test_merge_offsets_second_shell() {
        let mut row = tetrahedron();
        row.merge(&tetrahedron().translated(DVec3::splat(3.0)));
        assert_eq!(row.vertex_count(), 8);
        assert_eq!(row.triangles()[4], [4, 6, 5]);
        assert!(row.is_closed_manifold());
        assert_abs_diff_eq!(row.signed_volume(), 2.0 / 6.0, epsilon = 1e-12);
    }
}
