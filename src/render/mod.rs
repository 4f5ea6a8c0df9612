//! Mesh-Emission für den Rendering-Kollaborateur.
//!
//! Die Engine erzeugt nur CPU-seitige Vertex-Ströme; Pipeline-Aufbau
//! und Buffer-Verwaltung liegen außerhalb.

pub mod mesh;
pub mod types;

pub use mesh::build_tube_mesh;
pub use types::{MeshData, PolygonMode, Renderable, TubeVertex};
