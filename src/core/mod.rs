//! Core-Domänentypen und -Algorithmen: Spline-Basis, Kontrollpunkt-
//! Fenster, Röhren-Erzeugung, Kollision.

pub mod collision;
pub mod control_points;
pub mod craft;
pub mod sector;
pub mod spline;
pub mod tube;

pub use collision::{check_collision, point_to_segment_distance};
pub use control_points::ControlPointWindow;
pub use craft::Craft;
pub use sector::{Sector, TunnelParams, TunnelState};
pub use spline::SplineBasis;
pub use tube::generate;
