use crate::frame::Frame;
use crate::mesh::{Triangle, TriangleMesh, VertexKind};

/// Incremental 2D Delaunay triangulation built with the Bowyer-Watson
/// algorithm.
///
/// The triangulation is seeded with a square frame large enough to enclose
/// every point that will ever be inserted. Points are added one at a time;
/// each insertion removes the triangles whose circumcircle contains the new
/// point and re-fans the resulting cavity, so the Delaunay property holds
/// after every step. Exports run once insertion is complete.
///
/// Input constraints (not validated): points must lie strictly inside the
/// frame, must not duplicate an existing point, and no three points may be
/// exactly collinear nor four exactly cocircular. Violations leave the mesh
/// in an undefined state.
pub struct Triangulation {
    pub(crate) mesh: TriangleMesh,
}

impl Triangulation {
    /// Creates an empty triangulation enclosed by a frame with the given
    /// `center` and corner distance `radius`.
    pub fn new(center: [f64; 2], radius: f64) -> Triangulation {
        let frame = Frame::new(center, radius);
        let mut mesh = TriangleMesh::new();

        for corner in frame.corners() {
            mesh.push_vertex(corner, VertexKind::Frame);
        }

        let (t1, t2) = frame.seed_triangles();
        mesh.insert_triangle(t1, Some(t2));
        mesh.insert_triangle(t2, Some(t1));

        Triangulation { mesh }
    }

    /// Read-only access to the underlying mesh.
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Number of real points inserted so far.
    pub fn count_generators(&self) -> usize {
        self.mesh
            .vertices()
            .iter()
            .filter(|v| v.kind == VertexKind::Generator)
            .count()
    }

    /// Inserts a point and restores the Delaunay property by local repair.
    /// Returns the zero-based index of the new generator.
    pub fn add_point(&mut self, p: [f64; 2]) -> usize {
        let idx = self.mesh.push_vertex(p, VertexKind::Generator);

        // Every live triangle whose circumcircle contains p. For a valid
        // mesh and a point inside the frame this set is non-empty and forms
        // a single edge-connected disk.
        let bad: Vec<Triangle> = self
            .mesh
            .triangles()
            .filter(|t| self.mesh.in_circumcircle(t, p))
            .collect();

        // Walk the CCW boundary of the cavity, recording each boundary edge
        // together with the triangle on its far side. Starting from an
        // arbitrary edge of an arbitrary bad triangle: if the neighbor
        // across the current edge is outside the cavity the edge is part of
        // the boundary, otherwise cross into the neighbor and continue from
        // the matching edge. The walk ends when the loop closes.
        let mut boundary: Vec<(usize, usize, Option<Triangle>)> = Vec::new();
        let mut tri = bad[0];
        let mut slot = 0;
        loop {
            let across = self.mesh.neighbor(&tri, slot);
            let across_is_bad = across.map_or(false, |t| bad.contains(&t));

            if !across_is_bad {
                let (e0, e1) = tri.opposite_edge(slot);
                boundary.push((e0, e1, across));
                slot = (slot + 1) % 3;

                if boundary[0].0 == boundary[boundary.len() - 1].1 {
                    break;
                }
            } else {
                let next = across.unwrap();
                let back = self
                    .mesh
                    .slot_of(&next, &tri)
                    .expect("cavity neighbor links back to the triangle it was entered from");
                slot = (back + 1) % 3;
                tri = next;
            }
        }

        // Drop the cavity. Neighbor slots of the outside triangles still
        // hold the removed keys; relinking below replaces them.
        for t in &bad {
            self.mesh.remove_triangle(t);
        }

        // Fan the new vertex to every boundary edge, in cycle order. Slot 0
        // of each fan triangle faces the outside neighbor across the edge.
        let mut fan: Vec<Triangle> = Vec::with_capacity(boundary.len());
        for &(e0, e1, outside) in &boundary {
            let t = Triangle::new(idx, e0, e1);
            self.mesh.insert_triangle(t, outside);

            if let Some(outside) = outside {
                self.mesh.relink(&outside, t, (e0, e1));
            }

            fan.push(t);
        }

        // The fan triangles share the two edges meeting at the apex with
        // their cyclic successor and predecessor.
        let n = fan.len();
        for (i, t) in fan.iter().enumerate() {
            self.mesh.set_neighbor(t, 1, Some(fan[(i + 1) % n]));
            self.mesh.set_neighbor(t, 2, Some(fan[(i + n - 1) % n]));
        }

        idx - crate::frame::FRAME_VERTEX_COUNT
    }

    /// Inserts points from a flat coordinate array `[x, y, x, y, ...]`.
    pub fn add_points(&mut self, points: &[f64]) {
        for chunk in points.chunks_exact(2) {
            self.add_point([chunk[0], chunk[1]]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_triangulation_is_two_frame_triangles() {
        let dt = Triangulation::new([0.0, 0.0], 100.0);
        assert_eq!(dt.mesh().triangle_count(), 2);
        assert_eq!(dt.count_generators(), 0);

        let (t1, t2) = Frame::new([0.0, 0.0], 100.0).seed_triangles();
        assert_eq!(dt.mesh().neighbor(&t1, 0), Some(t2));
        assert_eq!(dt.mesh().neighbor(&t2, 0), Some(t1));
        assert_eq!(dt.mesh().neighbor(&t1, 1), None);
        assert_eq!(dt.mesh().neighbor(&t2, 2), None);
    }

    #[test]
    fn test_first_point_fans_the_frame() {
        let mut dt = Triangulation::new([0.0, 0.0], 100.0);
        let idx = dt.add_point([1.0, 2.0]);
        assert_eq!(idx, 0);

        // The first point invalidates both frame triangles and is fanned to
        // the four frame edges.
        assert_eq!(dt.mesh().triangle_count(), 4);
        assert_eq!(dt.count_generators(), 1);
        for tri in dt.mesh().triangles() {
            assert!(tri.contains(4), "every triangle uses the new vertex");
        }
    }

    #[test]
    fn test_insertions_keep_triangle_count() {
        // Euler count inside the closed frame: 2 + 2 * generators.
        let mut dt = Triangulation::new([0.5, 0.5], 1000.0);
        let points = [[0.31, 0.41], [0.59, 0.26], [0.53, 0.58], [0.97, 0.93], [0.23, 0.84]];
        for (i, p) in points.iter().enumerate() {
            dt.add_point(*p);
            assert_eq!(dt.mesh().triangle_count(), 2 + 2 * (i + 1));
        }
    }

    #[test]
    fn test_add_points_flat_array() {
        let mut dt = Triangulation::new([0.5, 0.5], 1000.0);
        dt.add_points(&[0.1, 0.2, 0.8, 0.3, 0.4, 0.9]);
        assert_eq!(dt.count_generators(), 3);
    }
}
