//! Application-Layer: Tunnel-Controller und Tick-Ereignisse.

pub mod controller;

pub use controller::{TickOutcome, TunnelController, TunnelPhase};
