//! Flugkörper-Pose als Wert-Typ.

use glam::Vec3;

/// Position und Kollisionsradius des Flugkörpers.
///
/// Das Modell selbst (Mesh, Darstellung) liegt beim Rendering-
/// Kollaborateur; für Kollision und Tunnel-Verlängerung zählen nur
/// Pose und Radius. Die Pose wird explizit an die Engine übergeben,
/// nicht über geteilten Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Craft {
    /// Aktuelle Position (Flug monoton in +x)
    pub position: Vec3,
    /// Kollisionsradius des Rumpfes
    pub radius: f32,
}

impl Craft {
    /// Erstellt einen Flugkörper am Ursprung.
    pub fn new(radius: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            radius,
        }
    }

    /// Setzt den Flugkörper an den Ursprung zurück (Tunnel-Eingang).
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
    }
}
