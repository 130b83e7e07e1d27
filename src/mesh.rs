use crate::geometry::Circumcircle;
use std::collections::HashMap;

/// Distinguishes the four synthetic frame corners from real inserted points.
///
/// Carrying the tag in the vertex record keeps export filtering independent
/// of index arithmetic; the frame corners are still always the first four
/// entries of the vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    /// Synthetic corner of the bounding frame, excluded from exports.
    Frame,
    /// A real point inserted through `add_point`.
    Generator,
}

/// An immutable 2D point in the append-only vertex list. Its index in that
/// list is its permanent identifier for the lifetime of the mesh.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub position: [f64; 2],
    pub kind: VertexKind,
}

/// A triangle keyed by its three vertex identifiers, stored in the CCW
/// order it was created with.
///
/// Triangles are created and destroyed, never edited, and each one is
/// created exactly once, so the exact triple is a stable arena key. Neighbor
/// slots store these keys instead of references, which keeps removal a plain
/// map erase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Triangle {
        Triangle { a, b, c }
    }

    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Vertex at slot `i` (0, 1 or 2).
    pub fn vertex(&self, i: usize) -> usize {
        self.vertices()[i]
    }

    pub fn contains(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// The directed edge opposite vertex slot `i`, oriented CCW: slot 0
    /// faces edge (b, c), slot 1 faces (c, a), slot 2 faces (a, b).
    pub fn opposite_edge(&self, i: usize) -> (usize, usize) {
        let v = self.vertices();
        (v[(i + 1) % 3], v[(i + 2) % 3])
    }

    /// The three cyclic rotations of this triangle, starting with itself.
    /// Rotations preserve orientation; the Voronoi exporter registers all
    /// three so a triangle can be looked up from any of its vertices.
    pub fn rotations(&self) -> [Triangle; 3] {
        [
            Triangle::new(self.a, self.b, self.c),
            Triangle::new(self.b, self.c, self.a),
            Triangle::new(self.c, self.a, self.b),
        ]
    }
}

/// Arena of live triangles with per-edge neighbor links and cached
/// circumcircles.
///
/// Neighbor slot `i` of a triangle holds the key of the triangle across the
/// edge opposite vertex `i`, or `None` for the mesh boundary. Because the
/// frame closes the mesh, the only `None` slots are the four outer frame
/// edges. The circumcircle cache is filled at insertion and dropped at
/// removal; it is never recomputed in place.
pub struct TriangleMesh {
    vertices: Vec<Vertex>,
    triangles: HashMap<Triangle, [Option<Triangle>; 3]>,
    circles: HashMap<Triangle, Circumcircle>,
}

impl TriangleMesh {
    pub fn new() -> TriangleMesh {
        TriangleMesh {
            vertices: Vec::new(),
            triangles: HashMap::new(),
            circles: HashMap::new(),
        }
    }

    /// Appends a vertex and returns its identifier.
    pub fn push_vertex(&mut self, position: [f64; 2], kind: VertexKind) -> usize {
        self.vertices.push(Vertex { position, kind });
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn position(&self, id: usize) -> [f64; 2] {
        self.vertices[id].position
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn contains_triangle(&self, tri: &Triangle) -> bool {
        self.triangles.contains_key(tri)
    }

    /// Iterates over the keys of all live triangles, in arbitrary order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.keys().copied()
    }

    /// Iterates over all live triangles with their neighbor slots.
    pub fn triangle_entries(&self) -> impl Iterator<Item = (Triangle, &[Option<Triangle>; 3])> {
        self.triangles.iter().map(|(t, n)| (*t, n))
    }

    /// Computes the circumcircle of a triangle from the current vertex
    /// positions. Collinear vertices make the solve singular; see
    /// [`Circumcircle::of`].
    pub fn circumcircle(&self, tri: &Triangle) -> Circumcircle {
        Circumcircle::of(
            self.position(tri.a),
            self.position(tri.b),
            self.position(tri.c),
        )
    }

    /// The cached circumcircle of a live triangle.
    pub fn cached_circle(&self, tri: &Triangle) -> Option<&Circumcircle> {
        self.circles.get(tri)
    }

    /// Closed test of `p` against the cached circumcircle of a live
    /// triangle: points exactly on the circle count as inside. Referencing a
    /// removed triangle is a programmer error and panics.
    pub fn in_circumcircle(&self, tri: &Triangle, p: [f64; 2]) -> bool {
        self.circles[tri].contains(p)
    }

    /// Adds a triangle to the arena with its circumcircle computed and
    /// cached. Slot 0 is set to `first_neighbor`; the caller fills the
    /// remaining slots afterwards.
    pub fn insert_triangle(&mut self, tri: Triangle, first_neighbor: Option<Triangle>) {
        self.circles.insert(tri, self.circumcircle(&tri));
        self.triangles.insert(tri, [first_neighbor, None, None]);
    }

    /// Removes a triangle and its cached circle. Stale keys may linger in
    /// the neighbor slots of adjacent triangles until the caller relinks
    /// them; the store itself never resolves those keys afterwards.
    pub fn remove_triangle(&mut self, tri: &Triangle) {
        self.triangles.remove(tri);
        self.circles.remove(tri);
    }

    /// Neighbor across the edge opposite vertex slot `slot`.
    pub fn neighbor(&self, tri: &Triangle, slot: usize) -> Option<Triangle> {
        self.triangles[tri][slot]
    }

    pub fn set_neighbor(&mut self, tri: &Triangle, slot: usize, neighbor: Option<Triangle>) {
        if let Some(slots) = self.triangles.get_mut(tri) {
            slots[slot] = neighbor;
        }
    }

    /// The slot of `tri` whose neighbor is `target`, if any.
    pub fn slot_of(&self, tri: &Triangle, target: &Triangle) -> Option<usize> {
        self.triangles
            .get(tri)?
            .iter()
            .position(|n| n.as_ref() == Some(target))
    }

    /// Repoints the slot of `outside` that faces the shared edge `(e0, e1)`
    /// at `replacement`. The slot is found by vertex membership of its
    /// current (possibly already removed) neighbor, so relinking works while
    /// stale cavity keys are still in place.
    pub fn relink(&mut self, outside: &Triangle, replacement: Triangle, edge: (usize, usize)) {
        if let Some(slots) = self.triangles.get_mut(outside) {
            for slot in slots.iter_mut() {
                if let Some(n) = slot {
                    if n.contains(edge.0) && n.contains(edge.1) {
                        *slot = Some(replacement);
                        break;
                    }
                }
            }
        }
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        TriangleMesh::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_mesh() -> TriangleMesh {
        // Unit square: two CCW triangles across the diagonal (1, 3).
        let mut mesh = TriangleMesh::new();
        mesh.push_vertex([0.0, 0.0], VertexKind::Generator);
        mesh.push_vertex([1.0, 0.0], VertexKind::Generator);
        mesh.push_vertex([1.0, 1.0], VertexKind::Generator);
        mesh.push_vertex([0.0, 1.0], VertexKind::Generator);

        let t1 = Triangle::new(0, 1, 3);
        let t2 = Triangle::new(2, 3, 1);
        mesh.insert_triangle(t1, Some(t2));
        mesh.insert_triangle(t2, Some(t1));
        mesh
    }

    #[test]
    fn test_opposite_edges() {
        let tri = Triangle::new(4, 7, 9);
        assert_eq!(tri.opposite_edge(0), (7, 9));
        assert_eq!(tri.opposite_edge(1), (9, 4));
        assert_eq!(tri.opposite_edge(2), (4, 7));
    }

    #[test]
    fn test_insert_caches_circle() {
        let mesh = mock_mesh();
        let circle = mesh
            .cached_circle(&Triangle::new(0, 1, 3))
            .expect("circle cached at insertion");
        assert!((circle.center[0] - 0.5).abs() < 1e-12);
        assert!((circle.center[1] - 0.5).abs() < 1e-12);
        assert!((circle.radius_sq - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_remove_drops_circle() {
        let mut mesh = mock_mesh();
        let t1 = Triangle::new(0, 1, 3);
        mesh.remove_triangle(&t1);
        assert!(!mesh.contains_triangle(&t1));
        assert!(mesh.cached_circle(&t1).is_none());
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_slot_of_mutual_neighbors() {
        let mesh = mock_mesh();
        let t1 = Triangle::new(0, 1, 3);
        let t2 = Triangle::new(2, 3, 1);
        assert_eq!(mesh.slot_of(&t1, &t2), Some(0));
        assert_eq!(mesh.slot_of(&t2, &t1), Some(0));
        assert_eq!(mesh.slot_of(&t1, &t1), None);
    }

    #[test]
    fn test_relink_repoints_shared_edge() {
        let mut mesh = mock_mesh();
        let t1 = Triangle::new(0, 1, 3);
        let t2 = Triangle::new(2, 3, 1);

        // Pretend t2 got replaced by a new triangle over the same edge.
        mesh.push_vertex([2.0, 2.0], VertexKind::Generator);
        let replacement = Triangle::new(4, 1, 3);
        mesh.remove_triangle(&t2);
        mesh.insert_triangle(replacement, Some(t1));
        mesh.relink(&t1, replacement, (1, 3));

        assert_eq!(mesh.neighbor(&t1, 0), Some(replacement));
    }

    #[test]
    fn test_relink_ignores_boundary() {
        let mut mesh = mock_mesh();
        let t1 = Triangle::new(0, 1, 3);
        let before: Vec<_> = (0..3).map(|s| mesh.neighbor(&t1, s)).collect();

        // Edge (0, 1) faces the boundary sentinel; nothing to repoint.
        mesh.relink(&t1, Triangle::new(9, 0, 1), (0, 1));
        let after: Vec<_> = (0..3).map(|s| mesh.neighbor(&t1, s)).collect();
        assert_eq!(before, after);
    }
}
