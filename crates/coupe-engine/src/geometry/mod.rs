//! Procedural and literal mesh generators.
//!
//! Everything here is pure CPU: generators return a [`MeshData`] (interleaved
//! vertices plus region counts) that the render layer uploads once.

mod literal;
mod mesh_data;
mod sweep;
mod torus;
mod vertex;

pub use literal::{cube, plane, pyramid, wing};
pub use mesh_data::{MeshData, VertexCounts, VertexRange};
pub use sweep::{cylinder, rectangle, sweep, SweepParams, CYLINDER_SEGMENTS, RECTANGLE_SEGMENTS};
pub use torus::{torus, TorusParams};
pub use vertex::Vertex;
