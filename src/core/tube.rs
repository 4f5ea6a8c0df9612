//! Röhren-Erzeugung: Mittellinien-Abtastung, Querschnittsringe und
//! Vertex-Normalen.

use std::f32::consts::TAU;

use glam::Vec3;

use super::control_points::ControlPointWindow;
use super::sector::{Sector, TunnelParams, TunnelState};
use super::spline::SplineBasis;

/// Rückfall-Normale für degenerierte Geometrie (Null-Tangente,
/// Null-Flächen-Normale, Null-Summen-Vertexnormale).
const FALLBACK_NORMAL: Vec3 = Vec3::X;

/// Baut aus dem Kontrollpunkt-Fenster einen vollständigen Tunnelzustand.
///
/// Reine, beschränkte Berechnung in O(sector_count · circle_segments);
/// der zurückgegebene Zustand ist ein fertiger Wert und wird vom
/// Aufrufer am Stück eingetauscht. Gültige Parameter (sector_count ≥ 2,
/// circle_segments ≥ 3) stellt die Konfigurations-Validierung sicher,
/// bevor hier gerechnet wird.
pub fn generate(
    window: &ControlPointWindow,
    sector_count: usize,
    circle_segments: usize,
    spline_order: usize,
) -> TunnelState {
    let basis = SplineBasis::new(window.len(), spline_order);

    let centers = sample_curve(&basis, window.centers(), sector_count);
    let radii: Vec<f32> = sample_curve(&basis, window.radii(), sector_count)
        .iter()
        .map(|p| p.y)
        .collect();

    let rings = build_rings(&centers, &radii, circle_segments);
    let normals = build_vertex_normals(&rings, circle_segments);

    let sectors = centers
        .into_iter()
        .zip(radii)
        .zip(rings.into_iter().zip(normals))
        .map(|((center, radius), (ring, normals))| Sector {
            center,
            radius,
            ring,
            normals,
        })
        .collect();

    TunnelState {
        sectors,
        params: TunnelParams {
            sector_count,
            circle_segments,
            control_point_count: window.control_point_count(),
            spline_order,
        },
    }
}

/// Tastet die Spline an `sector_count - 1` äquidistanten Parametern ab
/// und erzwingt als letzte Probe exakt den letzten Kontrollpunkt.
///
/// Die offene uniforme Basis erreicht den oberen Rand des
/// Parameterbereichs konstruktionsbedingt nicht, daher die erzwungene
/// letzte Probe (exakt, nicht approximativ).
fn sample_curve(basis: &SplineBasis, points: &[Vec3], sector_count: usize) -> Vec<Vec3> {
    let increment = basis.domain_end() / (sector_count - 1) as f32;

    let mut samples = Vec::with_capacity(sector_count);
    let mut v = 0.0;
    for _ in 0..sector_count - 1 {
        samples.push(basis.point(points, v));
        v += increment;
    }
    samples.push(points[points.len() - 1]);

    samples
}

/// Rechtssystem (u, v) senkrecht zur Vorwärtsrichtung.
///
/// Legacy-Konstruktion `u = normalize(-f.z, 0, f.x)`, `v = f × u`: kippt
/// die Ring-Orientierung sprunghaft, wenn f.x und f.z gleichzeitig gegen
/// null gehen (nahezu senkrechte Fahrt). Das ist dokumentiertes
/// Altverhalten und wird nicht korrigiert; nur die Division durch null
/// selbst wird mit der Rückfall-Achse abgefangen, damit kein NaN ins
/// Mesh gelangt.
fn cross_section_frame(forward: Vec3) -> (Vec3, Vec3) {
    let planar = forward.x * forward.x + forward.z * forward.z;
    let u = if planar <= f32::EPSILON {
        FALLBACK_NORMAL
    } else {
        let factor = 1.0 / planar.sqrt();
        Vec3::new(-forward.z * factor, 0.0, forward.x * factor)
    };
    (u, forward.cross(u))
}

/// Erzeugt für jeden Sektor den offenen Querschnittsring.
///
/// Ringpunkt j: `center + r·cos(αⱼ)·u + r·sin(αⱼ)·v` mit
/// `αⱼ = 2π·j / circle_segments`. Der letzte Sektor hat keinen
/// Nachfolger und übernimmt den Rahmen des vorherigen Paares.
fn build_rings(centers: &[Vec3], radii: &[f32], circle_segments: usize) -> Vec<Vec<Vec3>> {
    let mut rings = Vec::with_capacity(centers.len());
    let mut frame = (FALLBACK_NORMAL, Vec3::Z);

    for (i, (&center, &radius)) in centers.iter().zip(radii).enumerate() {
        if i + 1 < centers.len() {
            let direction = centers[i + 1] - center;
            let forward = if direction.length_squared() <= f32::EPSILON {
                FALLBACK_NORMAL
            } else {
                direction.normalize()
            };
            frame = cross_section_frame(forward);
        }
        let (u, v) = frame;

        let mut ring = Vec::with_capacity(circle_segments);
        for j in 0..circle_segments {
            let angle = TAU * j as f32 / circle_segments as f32;
            ring.push(center + radius * angle.cos() * u + radius * angle.sin() * v);
        }
        rings.push(ring);
    }

    rings
}

/// Normale der Fläche durch drei Punkte (normiert).
///
/// Entartete Fläche (Null-Kreuzprodukt) fällt auf die Rückfall-Achse
/// zurück, statt einen Fehler zu melden.
fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    let normal = (p1 - p0).cross(p2 - p0);
    let length = normal.length();
    if length == 0.0 {
        FALLBACK_NORMAL
    } else {
        normal / length
    }
}

/// Akkumuliert Flächen-Normalen in Vertex-Normalen und normiert sie.
///
/// Für jede Quad-Fläche zwischen Ring i und Ring i+1 — einschließlich
/// der Umbruch-Fläche zwischen letztem und erstem Ringelement — wird die
/// Flächen-Normale auf alle vier berührten Vertex-Normalen aufsummiert
/// (Summe, kein Mittelwert). Null-Summen normieren auf die
/// Rückfall-Achse.
fn build_vertex_normals(rings: &[Vec<Vec3>], circle_segments: usize) -> Vec<Vec<Vec3>> {
    let mut normals = vec![vec![Vec3::ZERO; circle_segments]; rings.len()];

    for j in 0..rings.len().saturating_sub(1) {
        for i in 0..circle_segments {
            let i_next = (i + 1) % circle_segments;
            let face = face_normal(rings[j][i], rings[j + 1][i], rings[j + 1][i_next]);

            normals[j][i] += face;
            normals[j + 1][i] += face;
            normals[j + 1][i_next] += face;
            normals[j][i_next] += face;
        }
    }

    for ring_normals in &mut normals {
        for normal in ring_normals {
            let length = normal.length();
            *normal = if length == 0.0 {
                FALLBACK_NORMAL
            } else {
                *normal / length
            };
        }
    }

    normals
}
