/// Circumscribed circle of a triangle, cached with its squared radius.
///
/// The squared radius is kept instead of the radius itself because every
/// consumer (the cavity search) compares squared distances; exporters call
/// [`Circumcircle::radius`] once at the end.
#[derive(Clone, Copy, Debug)]
pub struct Circumcircle {
    pub center: [f64; 2],
    pub radius_sq: f64,
}

impl Circumcircle {
    /// Computes the circumcircle of the triangle `a`, `b`, `c`.
    ///
    /// Solves the linear system given by equal power distance from the
    /// unknown center to all three vertices, reduced to closed form. The
    /// system is singular for exactly collinear input: the divisor becomes
    /// zero and the resulting center is non-finite. Collinear triples are a
    /// documented input constraint, not defended against here.
    pub fn of(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Circumcircle {
        let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));

        let aa = a[0] * a[0] + a[1] * a[1];
        let bb = b[0] * b[0] + b[1] * b[1];
        let cc = c[0] * c[0] + c[1] * c[1];

        let ux = (aa * (b[1] - c[1]) + bb * (c[1] - a[1]) + cc * (a[1] - b[1])) / d;
        let uy = (aa * (c[0] - b[0]) + bb * (a[0] - c[0]) + cc * (b[0] - a[0])) / d;

        let dx = a[0] - ux;
        let dy = a[1] - uy;

        Circumcircle {
            center: [ux, uy],
            radius_sq: dx * dx + dy * dy,
        }
    }

    /// Closed containment test: points exactly on the circle count as
    /// inside. The cavity boundary walk relies on this convention.
    pub fn contains(&self, p: [f64; 2]) -> bool {
        let dx = p[0] - self.center[0];
        let dy = p[1] - self.center[1];
        dx * dx + dy * dy <= self.radius_sq
    }

    pub fn radius(&self) -> f64 {
        self.radius_sq.sqrt()
    }
}

/// Orientation of the triple `a`, `b`, `c`.
/// Positive for counter-clockwise, negative for clockwise, zero for collinear.
pub fn orient2d(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// Strict in-circle test via the 3x3 determinant, without going through a
/// computed center. Returns true iff `p` lies strictly inside the
/// circumcircle of the CCW triangle `a`, `b`, `c`; points on the circle
/// report false. Used to verify the Delaunay property independently of the
/// cached circles.
pub fn in_circle_strict(a: [f64; 2], b: [f64; 2], c: [f64; 2], p: [f64; 2]) -> bool {
    let ax = a[0] - p[0];
    let ay = a[1] - p[1];
    let bx = b[0] - p[0];
    let by = b[1] - p[1];
    let cx = c[0] - p[0];
    let cy = c[1] - p[1];

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by) > 0.0
}
