//! # vorotwo
//!
//! `vorotwo` is a Rust library for incremental 2D Delaunay triangulation and
//! its Voronoi dual, designed to be used in Rust as well as compiled to
//! WebAssembly (WASM). It maintains a dynamic mesh of triangles with mutual
//! neighbor links and cached circumcircles, and repairs the Delaunay
//! property locally after every insertion (Bowyer-Watson).
//!
//! ## Features
//!
//! - **Incremental construction**: points are inserted one at a time; each
//!   insertion only touches the cavity of invalidated triangles.
//! - **Voronoi dual**: the finished mesh exports one ordered polygon of
//!   circumcenters per inserted point.
//! - **WASM-first**: built with `wasm-bindgen`; all exports are flat typed
//!   arrays for seamless JavaScript and TypeScript integration.
//!
//! ## Input constraints
//!
//! The mesh is seeded with a square frame that must enclose every point
//! inserted later. Duplicate points, points outside the frame, and exactly
//! collinear or cocircular configurations are not defended against; see
//! [`Triangulation`].
//!
//! ## Example
//!
//! ```
//! use vorotwo::Triangulation;
//!
//! let mut dt = Triangulation::new([0.5, 0.5], 1000.0);
//! dt.add_points(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
//!
//! // A unit square triangulates into two triangles across a diagonal.
//! assert_eq!(dt.triangles().len(), 2);
//!
//! // One Voronoi region per inserted point.
//! let voronoi = dt.voronoi();
//! assert_eq!(voronoi.regions.len(), 4);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`Triangulation`] struct; the WASM surface
//! wraps it as [`Delaunay2D`].

mod export;
mod frame;
mod geometry;
mod mesh;
mod triangulation;
mod wasm;

pub use export::VoronoiDiagram;
pub use frame::Frame;
pub use frame::FRAME_VERTEX_COUNT;
pub use geometry::Circumcircle;
pub use geometry::in_circle_strict;
pub use geometry::orient2d;
pub use mesh::Triangle;
pub use mesh::TriangleMesh;
pub use mesh::Vertex;
pub use mesh::VertexKind;
pub use triangulation::Triangulation;
pub use wasm::Delaunay2D;
