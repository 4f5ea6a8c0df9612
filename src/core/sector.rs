//! Sektor- und Tunnelzustands-Typen.

use glam::Vec3;

/// Ein Querschnitt der Röhre.
///
/// `ring` und `normals` sind gleich lang (circle_segments) und offen:
/// zwischen letztem und erstem Element wird beim Konsumieren
/// umgebrochen, es gibt keinen doppelten Schlussvertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    /// Mittellinien-Punkt des Querschnitts
    pub center: Vec3,
    /// Skalarer Röhren-Radius an diesem Querschnitt
    pub radius: f32,
    /// Ringpunkte des Querschnitts (offener Kreis)
    pub ring: Vec<Vec3>,
    /// Vertex-Normale je Ringpunkt (normiert)
    pub normals: Vec<Vec3>,
}

/// Parameter, mit denen ein Tunnelzustand gebaut wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunnelParams {
    /// Anzahl der Querschnitte
    pub sector_count: usize,
    /// Ringpunkte pro Querschnitt
    pub circle_segments: usize,
    /// Spline-Parameter `n` des Kontrollpunkt-Fensters
    pub control_point_count: usize,
    /// Spline-Ordnung `t`
    pub spline_order: usize,
}

/// Vollständig aufgebauter Tunnel: geordnete Sektorfolge plus
/// Bau-Parameter.
///
/// Wird als Wert behandelt: bei jeder Regeneration komplett neu gebaut
/// und am Stück eingetauscht (build-then-swap); Ringe werden nie in
/// place verändert, ein Leser sieht nie einen halbfertigen Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct TunnelState {
    /// Geordnete Querschnitte entlang der Mittellinie
    pub sectors: Vec<Sector>,
    /// Bau-Parameter dieses Zustands
    pub params: TunnelParams,
}

impl TunnelState {
    /// Anzahl der Sektoren.
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Ringpunkte pro Sektor.
    pub fn circle_segments(&self) -> usize {
        self.params.circle_segments
    }

    /// x-Koordinate des mittleren Sektors — Schwelle für die
    /// Tunnel-Verlängerung.
    pub fn midpoint_x(&self) -> f32 {
        self.sectors[self.sectors.len() / 2].center.x
    }

    /// Iterator über die Mittellinien-Punkte.
    pub fn centerline(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.sectors.iter().map(|s| s.center)
    }
}
