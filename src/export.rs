use crate::frame::FRAME_VERTEX_COUNT;
use crate::mesh::{Triangle, TriangleMesh, VertexKind};
use crate::triangulation::Triangulation;
use std::collections::HashMap;

/// The Voronoi dual of a finished triangulation, as indexed data.
///
/// `cell_vertices` holds one circumcenter per live triangle (frame-touching
/// triangles included, since hull regions reach their circumcenters);
/// `regions[i]` is the ordered polygon of generator `i`, as indices into
/// `cell_vertices`.
#[derive(Clone, Debug)]
pub struct VoronoiDiagram {
    pub cell_vertices: Vec<[f64; 2]>,
    pub regions: Vec<Vec<usize>>,
}

impl TriangleMesh {
    /// Live triangle keys in sorted order, for deterministic exports.
    fn sorted_triangles(&self) -> Vec<Triangle> {
        let mut tris: Vec<Triangle> = self.triangles().collect();
        tris.sort();
        tris
    }

    fn is_real(&self, tri: &Triangle) -> bool {
        tri.vertices()
            .iter()
            .all(|&v| self.vertices()[v].kind == VertexKind::Generator)
    }

    /// The triangles of the final answer: every live triangle that touches
    /// no frame corner, with vertex ids re-based so generators are
    /// zero-indexed.
    pub fn delaunay_triangles(&self) -> Vec<[usize; 3]> {
        self.sorted_triangles()
            .into_iter()
            .filter(|t| self.is_real(t))
            .map(|t| {
                [
                    t.a - FRAME_VERTEX_COUNT,
                    t.b - FRAME_VERTEX_COUNT,
                    t.c - FRAME_VERTEX_COUNT,
                ]
            })
            .collect()
    }

    /// `(center, radius)` of the circumcircle of every exported triangle,
    /// in the same order as [`TriangleMesh::delaunay_triangles`].
    pub fn circumcircles(&self) -> Vec<([f64; 2], f64)> {
        self.sorted_triangles()
            .into_iter()
            .filter(|t| self.is_real(t))
            .map(|t| {
                let circle = self.cached_circle(&t).expect("live triangle has a cached circle");
                (circle.center, circle.radius())
            })
            .collect()
    }

    /// Positions of the real points, in insertion order.
    pub fn generator_positions(&self) -> Vec<[f64; 2]> {
        self.vertices()
            .iter()
            .filter(|v| v.kind == VertexKind::Generator)
            .map(|v| v.position)
            .collect()
    }

    /// Builds the Voronoi dual from the live mesh.
    ///
    /// Every live triangle contributes its circumcenter as one cell vertex.
    /// Each generator's region is the cycle of its incident triangles,
    /// ordered by repeatedly choosing the triangle whose leading vertex
    /// equals the current successor vertex. For a generator strictly inside
    /// the frame that cycle always closes, because the incident triangles
    /// form a fan around it.
    pub fn voronoi(&self) -> VoronoiDiagram {
        let mut cell_vertices: Vec<[f64; 2]> = Vec::with_capacity(self.triangle_count());
        let mut index: HashMap<Triangle, usize> = HashMap::with_capacity(self.triangle_count() * 3);
        let mut incident: Vec<Vec<Triangle>> = vec![Vec::new(); self.vertices().len()];

        for (tidx, tri) in self.sorted_triangles().into_iter().enumerate() {
            let circle = self.cached_circle(&tri).expect("live triangle has a cached circle");
            cell_vertices.push(circle.center);

            // Register every rotation: each puts a different vertex last, so
            // a triangle can be found from any of its corners, under any
            // rotation, without losing orientation.
            for rot in tri.rotations() {
                incident[rot.c].push(rot);
                index.insert(rot, tidx);
            }
        }

        let mut regions: Vec<Vec<usize>> = Vec::new();
        for (v_id, vertex) in self.vertices().iter().enumerate() {
            if vertex.kind != VertexKind::Generator {
                continue;
            }

            let fan = &incident[v_id];
            let mut region = Vec::with_capacity(fan.len());
            let mut next = fan[0].a;
            for _ in 0..fan.len() {
                let tri = fan
                    .iter()
                    .find(|t| t.a == next)
                    .expect("incident triangles close into a fan around the generator");
                region.push(index[tri]);
                next = tri.b;
            }
            regions.push(region);
        }

        VoronoiDiagram { cell_vertices, regions }
    }
}

impl Triangulation {
    /// See [`TriangleMesh::delaunay_triangles`].
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        self.mesh.delaunay_triangles()
    }

    /// See [`TriangleMesh::circumcircles`].
    pub fn circumcircles(&self) -> Vec<([f64; 2], f64)> {
        self.mesh.circumcircles()
    }

    /// See [`TriangleMesh::generator_positions`].
    pub fn generators(&self) -> Vec<[f64; 2]> {
        self.mesh.generator_positions()
    }

    /// See [`TriangleMesh::voronoi`].
    pub fn voronoi(&self) -> VoronoiDiagram {
        self.mesh.voronoi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_triangles_are_filtered() {
        let mut dt = Triangulation::new([0.0, 0.0], 100.0);
        dt.add_point([0.0, 0.0]);

        // A single point only produces frame-touching triangles.
        assert_eq!(dt.mesh().triangle_count(), 4);
        assert!(dt.triangles().is_empty());
        assert!(dt.circumcircles().is_empty());
    }

    #[test]
    fn test_triangle_ids_are_rebased() {
        let mut dt = Triangulation::new([0.5, 0.5], 1000.0);
        dt.add_points(&[0.0, 0.0, 1.0, 0.0, 0.5, 1.0]);

        let tris = dt.triangles();
        assert_eq!(tris.len(), 1);
        let mut ids = tris[0].to_vec();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_circumcircles_match_triangles() {
        let mut dt = Triangulation::new([0.5, 0.5], 1000.0);
        dt.add_points(&[0.0, 0.0, 2.0, 0.0, 0.0, 2.0]);

        let circles = dt.circumcircles();
        assert_eq!(circles.len(), 1);
        let (center, radius) = circles[0];
        assert!((center[0] - 1.0).abs() < 1e-9);
        assert!((center[1] - 1.0).abs() < 1e-9);
        assert!((radius - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_generator_positions_in_insertion_order() {
        let mut dt = Triangulation::new([0.5, 0.5], 1000.0);
        dt.add_point([0.2, 0.3]);
        dt.add_point([0.7, 0.6]);
        assert_eq!(dt.generators(), vec![[0.2, 0.3], [0.7, 0.6]]);
    }
}
