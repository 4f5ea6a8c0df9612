//! Wormhole Tunnel Engine.
//! Prozedural generierter, endlos verlängerbarer Röhren-Tunnel:
//! B-Spline-Sweep, Mesh-Erzeugung und Kollisionserkennung als Library.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{TickOutcome, TunnelController, TunnelPhase};
pub use crate::core::{
    check_collision, generate, point_to_segment_distance, ControlPointWindow, Craft, Sector,
    SplineBasis, TunnelParams, TunnelState,
};
pub use render::{build_tube_mesh, MeshData, PolygonMode, Renderable, TubeVertex};
pub use shared::{EngineOptions, TunnelConfig};
