use crate::export::VoronoiDiagram;
use crate::triangulation::Triangulation;
use rand::prelude::*;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// WASM-facing wrapper around [`Triangulation`].
///
/// All exports are flat arrays so they cross the JS boundary as typed
/// arrays: coordinates as `[x, y, x, y, ...]`, triangles as three indices
/// each, Voronoi regions as a counts array plus a flattened index array.
#[wasm_bindgen]
pub struct Delaunay2D {
    inner: Triangulation,
    // The Voronoi dual is rebuilt lazily and dropped on mutation.
    voronoi: Option<VoronoiDiagram>,
    center: [f64; 2],
    radius: f64,
}

#[wasm_bindgen]
impl Delaunay2D {
    /// Creates a triangulation enclosed by a frame centered at
    /// `(center_x, center_y)` with corner distance `radius`. The frame must
    /// be large enough that every point added later lies strictly inside it.
    #[wasm_bindgen(constructor)]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Delaunay2D {
        Delaunay2D {
            inner: Triangulation::new([center_x, center_y], radius),
            voronoi: None,
            center: [center_x, center_y],
            radius,
        }
    }

    /// Inserts a single point and returns its zero-based generator index.
    pub fn add_point(&mut self, x: f64, y: f64) -> usize {
        self.voronoi = None;
        self.inner.add_point([x, y])
    }

    /// Inserts points from a flat array `[x, y, x, y, ...]`.
    pub fn add_points(&mut self, points: &[f64]) {
        self.voronoi = None;
        self.inner.add_points(points);
    }

    /// Generates `count` seeded random points inside the frame and inserts
    /// them. Points are placed in the central half of the frame so they
    /// stay well clear of the corners.
    pub fn random_generators(&mut self, count: usize) {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let half = self.radius * 0.5;
        let mut points = Vec::with_capacity(count * 2);
        for _ in 0..count {
            points.push(self.center[0] + (rng.r#gen::<f64>() * 2.0 - 1.0) * half);
            points.push(self.center[1] + (rng.r#gen::<f64>() * 2.0 - 1.0) * half);
        }
        self.add_points(&points);
    }

    #[wasm_bindgen(getter)]
    pub fn count_generators(&self) -> usize {
        self.inner.count_generators()
    }

    /// Flat coordinates of the inserted points, in insertion order.
    #[wasm_bindgen(getter)]
    pub fn generators(&self) -> Vec<f64> {
        self.inner.generators().into_iter().flatten().collect()
    }

    #[wasm_bindgen(getter)]
    pub fn count_triangles(&self) -> usize {
        self.inner.triangles().len()
    }

    /// Flattened triangle list: three zero-based generator indices per
    /// triangle, frame triangles excluded.
    pub fn triangles(&self) -> Vec<u32> {
        self.inner
            .triangles()
            .into_iter()
            .flat_map(|t| t.into_iter().map(|v| v as u32))
            .collect()
    }

    /// Circumcircles of the exported triangles as `[cx, cy, r, ...]`.
    pub fn circumcircles(&self) -> Vec<f64> {
        self.inner
            .circumcircles()
            .into_iter()
            .flat_map(|(center, radius)| [center[0], center[1], radius])
            .collect()
    }

    /// Flat coordinates of the Voronoi cell vertices (one circumcenter per
    /// live triangle).
    pub fn voronoi_vertices(&mut self) -> Vec<f64> {
        self.ensure_voronoi();
        self.voronoi
            .as_ref()
            .unwrap()
            .cell_vertices
            .iter()
            .flat_map(|p| *p)
            .collect()
    }

    /// Number of cell vertices in each generator's Voronoi region.
    pub fn voronoi_region_counts(&mut self) -> Vec<u32> {
        self.ensure_voronoi();
        self.voronoi
            .as_ref()
            .unwrap()
            .regions
            .iter()
            .map(|r| r.len() as u32)
            .collect()
    }

    /// Flattened Voronoi regions: indices into the cell vertex list, one
    /// run per generator, with run lengths given by
    /// [`Delaunay2D::voronoi_region_counts`].
    pub fn voronoi_region_indices(&mut self) -> Vec<u32> {
        self.ensure_voronoi();
        self.voronoi
            .as_ref()
            .unwrap()
            .regions
            .iter()
            .flat_map(|r| r.iter().map(|&i| i as u32))
            .collect()
    }

    fn ensure_voronoi(&mut self) {
        if self.voronoi.is_none() {
            self.voronoi = Some(self.inner.voronoi());
        }
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_flat_exports() {
        let mut dt = Delaunay2D::new(0.5, 0.5, 1000.0);
        dt.add_points(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);

        assert_eq!(dt.count_generators(), 4);
        assert_eq!(dt.count_triangles(), 2);
        assert_eq!(dt.generators().len(), 8);
        assert_eq!(dt.triangles().len(), 6);
        assert_eq!(dt.circumcircles().len(), 6);
    }

    #[test]
    fn test_wasm_voronoi_flattening() {
        let mut dt = Delaunay2D::new(0.5, 0.5, 1000.0);
        dt.add_points(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 0.5]);

        let counts = dt.voronoi_region_counts();
        let indices = dt.voronoi_region_indices();
        assert_eq!(counts.len(), 5);
        assert_eq!(indices.len(), counts.iter().sum::<u32>() as usize);

        // Every region index points at a real cell vertex.
        let vertex_count = (dt.voronoi_vertices().len() / 2) as u32;
        assert!(indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn test_random_generators_inside_frame() {
        let mut dt = Delaunay2D::new(0.0, 0.0, 100.0);
        dt.random_generators(50);
        assert_eq!(dt.count_generators(), 50);

        let coords = dt.generators();
        assert!(coords.iter().all(|c| c.abs() < 100.0));
    }
}
