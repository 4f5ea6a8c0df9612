//! Rendering-Typen: Vertex-Layout, Polygon-Modus, Mesh-Daten.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Primitiv-Art des erzeugten Vertex-Stroms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolygonMode {
    /// Zwei Dreiecke pro Röhren-Fläche (6 Vertices)
    #[default]
    Triangles,
    /// Ein Quad pro Röhren-Fläche (4 Vertices)
    Quads,
}

/// Vertex der Röhren-Oberfläche (Position + Normale).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TubeVertex {
    /// Position in Welt-Koordinaten
    pub position: [f32; 3],
    /// Normierte Vertex-Normale
    pub normal: [f32; 3],
}

impl TubeVertex {
    /// Erstellt einen Vertex aus glam-Vektoren.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Read-only Vertex-Strom für den Rendering-Kollaborateur.
///
/// Der Strom referenziert keine GPU-Ressourcen; wer daraus Buffer baut,
/// ist auch für deren Freigabe bei der nächsten Regeneration zuständig.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertices in Primitiv-Reihenfolge
    pub vertices: Vec<TubeVertex>,
    /// Primitiv-Art des Stroms
    pub mode: PolygonMode,
}

impl MeshData {
    /// Anzahl der Vertices im Strom.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True wenn der Strom keine Vertices enthält.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Fähigkeit eines Szenen-Objekts, sein Mesh zu liefern.
///
/// Ersetzt die gemeinsame Basisklasse der beiden renderbaren
/// Objektarten des Vorbilds durch eine schmale Capability-Schnittstelle
/// ohne geerbten veränderlichen Zustand.
pub trait Renderable {
    /// Erzeugt den vollständigen Vertex-Strom des Objekts.
    fn produce_mesh(&self, mode: PolygonMode) -> MeshData;

    /// Baut die Geometrie des Objekts vollständig neu auf.
    fn rebuild(&mut self);
}
