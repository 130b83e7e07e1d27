use crate::mesh::Triangle;

/// Number of synthetic frame corners seeded at the front of the vertex list.
pub const FRAME_VERTEX_COUNT: usize = 4;

/// Square bounding frame that encloses the triangulation.
///
/// The four corners close the mesh topologically, so during construction
/// there is never a true boundary edge next to a real point. Every point
/// later inserted must lie strictly inside the frame; that is a caller
/// obligation and is not validated.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Frame {
    pub fn new(center: [f64; 2], radius: f64) -> Frame {
        Frame { center, radius }
    }

    /// The four corner positions, in the fixed order the seed triangles
    /// refer to: bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [[f64; 2]; FRAME_VERTEX_COUNT] {
        let [cx, cy] = self.center;
        let r = self.radius;
        [
            [cx - r, cy - r], // 0: Bottom-Left
            [cx + r, cy - r], // 1: Bottom-Right
            [cx + r, cy + r], // 2: Top-Right
            [cx - r, cy + r], // 3: Top-Left
        ]
    }

    /// The two CCW triangles covering the frame. They are mutual neighbors
    /// across the diagonal (slot 0 of each faces the other); their remaining
    /// slots hold the boundary sentinel.
    pub fn seed_triangles(&self) -> (Triangle, Triangle) {
        (Triangle::new(0, 1, 3), Triangle::new(2, 3, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_corners() {
        let frame = Frame::new([10.0, 20.0], 5.0);
        let corners = frame.corners();
        assert_eq!(corners[0], [5.0, 15.0]);
        assert_eq!(corners[1], [15.0, 15.0]);
        assert_eq!(corners[2], [15.0, 25.0]);
        assert_eq!(corners[3], [5.0, 25.0]);
    }

    #[test]
    fn test_seed_triangles_share_diagonal() {
        let frame = Frame::new([0.0, 0.0], 1.0);
        let (t1, t2) = frame.seed_triangles();

        // Slot 0 is opposite vertex 0, so each triangle's slot-0 edge is the
        // shared diagonal (1, 3).
        assert_eq!(t1.opposite_edge(0), (1, 3));
        assert_eq!(t2.opposite_edge(0), (3, 1));
    }
}
