//! Uniforme B-Spline-Basis über einem Kontrollpolygon.
//!
//! Layer-neutral: kann von `tube`, `app` und Tests importiert werden,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Cox–de-Boor-Basis über einem geclampten uniformen Knotenvektor.
///
/// Für `n+1` Kontrollpunkte und Ordnung `t` (Polynomgrad `t-1`) werden
/// `n+t+1` ganzzahlige Knoten erzeugt: die ersten `t` sind 0, die
/// inneren steigen um 1, die letzten `t` sind `n-t+2`. Der
/// Parameterbereich ist `[0, n-t+2]`.
#[derive(Debug, Clone)]
pub struct SplineBasis {
    /// Knotenvektor (ganzzahlig, geclampt)
    knots: Vec<u32>,
    /// Ordnung `t` (Polynomgrad + 1)
    order: usize,
    /// Anzahl der Kontrollpunkte (`n + 1`)
    point_count: usize,
}

impl SplineBasis {
    /// Erstellt die Basis für `point_count` Kontrollpunkte und Ordnung `order`.
    ///
    /// Voraussetzung: `point_count > order` (wird von der Konfigurations-
    /// Validierung sichergestellt, bevor hier gerechnet wird).
    pub fn new(point_count: usize, order: usize) -> Self {
        let n = point_count - 1;
        let knots = (0..=n + order)
            .map(|j| {
                if j < order {
                    0
                } else if j <= n {
                    (j - order + 1) as u32
                } else {
                    (n + 2 - order) as u32
                }
            })
            .collect();

        Self {
            knots,
            order,
            point_count,
        }
    }

    /// Obere Grenze des Parameterbereichs (`n - t + 2`).
    pub fn domain_end(&self) -> f32 {
        (self.point_count + 1 - self.order) as f32
    }

    /// Knotenvektor (read-only, für Tests).
    pub fn knots(&self) -> &[u32] {
        &self.knots
    }

    /// Berechnet alle `n+1` Basisgewichte an der Parameterstelle `v`.
    ///
    /// Iterative Dynamic-Programming-Form der Cox–de-Boor-Rekursion:
    /// Zeile für Teilgrad 1 aufbauen, dann in-place bis zur Ordnung `t`
    /// hochrechnen. Terme mit Null-Nenner (zusammenfallende Knoten)
    /// tragen 0 bei. Arithmetik pro Term ist identisch zur Rekursion,
    /// die Kosten sind linear statt exponentiell im Grad.
    pub fn weights(&self, v: f32) -> Vec<f32> {
        let u = &self.knots;

        // Teilgrad 1: Indikator des Knotenintervalls.
        // Die Zeile braucht n+t Einträge, damit Teilgrad t für alle
        // n+1 Kontrollpunkte aufgebaut werden kann.
        let mut w = vec![0.0f32; self.point_count + self.order - 1];
        for (k, weight) in w.iter_mut().enumerate() {
            if u[k] as f32 <= v && v < u[k + 1] as f32 {
                *weight = 1.0;
            }
        }

        for d in 2..=self.order {
            // Aufsteigend: w[k] neu liest altes w[k] und altes w[k+1],
            // das erst im nächsten Schritt überschrieben wird.
            for k in 0..=self.point_count + self.order - 1 - d {
                let mut value = 0.0;

                let denom_a = u[k + d - 1] - u[k];
                if denom_a != 0 {
                    value += (v - u[k] as f32) / denom_a as f32 * w[k];
                }
                let denom_b = u[k + d] - u[k + 1];
                if denom_b != 0 {
                    value += (u[k + d] as f32 - v) / denom_b as f32 * w[k + 1];
                }

                w[k] = value;
            }
        }

        w.truncate(self.point_count);
        w
    }

    /// Summiert alle Kontrollpunkte gewichtet mit ihrer Basis an `v`.
    ///
    /// Am oberen Rand des Parameterbereichs erreicht die offene uniforme
    /// Basis den letzten Kontrollpunkt konstruktionsbedingt nicht; der
    /// Aufrufer erzwingt dort den letzten Punkt exakt (siehe `tube`).
    pub fn point(&self, points: &[Vec3], v: f32) -> Vec3 {
        debug_assert_eq!(points.len(), self.point_count);

        let mut result = Vec3::ZERO;
        for (p, weight) in points.iter().zip(self.weights(v)) {
            result += *p * weight;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_knot_vector_is_clamped_uniform() {
        // n = 20, t = 4 → 25 Knoten: 4× 0, innere 1..17, 4× 18
        let basis = SplineBasis::new(21, 4);
        let knots = basis.knots();

        assert_eq!(knots.len(), 25);
        assert_eq!(&knots[..4], &[0, 0, 0, 0]);
        assert_eq!(&knots[21..], &[18, 18, 18, 18]);
        for j in 4..=20 {
            assert_eq!(knots[j], (j - 3) as u32);
        }
        assert_relative_eq!(basis.domain_end(), 18.0);
    }

    #[test]
    fn test_partition_of_unity() {
        // 50 Parameterwerte im Inneren des Bereichs: Σₖ blend(k,t,v) = 1
        let basis = SplineBasis::new(21, 4);
        let end = basis.domain_end();

        for sample in 0..50 {
            let v = end * sample as f32 / 50.0;
            let sum: f32 = basis.weights(v).iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-4,
                "Gewichtssumme bei v={} war {}",
                v,
                sum
            );
        }
    }

    #[test]
    fn test_weights_vanish_at_domain_end() {
        // Die offene Basis erreicht den Rand nicht: alle Gewichte 0.
        let basis = SplineBasis::new(21, 4);
        let sum: f32 = basis.weights(basis.domain_end()).iter().sum();
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn test_point_starts_at_first_control_point() {
        let points: Vec<Vec3> = (0..8).map(|i| Vec3::new(i as f32, 1.0, -1.0)).collect();
        let basis = SplineBasis::new(points.len(), 4);

        let start = basis.point(&points, 0.0);
        assert_relative_eq!(start.x, points[0].x, epsilon = 1e-5);
        assert_relative_eq!(start.y, points[0].y, epsilon = 1e-5);
        assert_relative_eq!(start.z, points[0].z, epsilon = 1e-5);
    }

    #[test]
    fn test_point_interpolates_straight_polygon() {
        // Kollineare Kontrollpunkte → Kurve bleibt auf der Geraden
        let points: Vec<Vec3> = (0..10).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let basis = SplineBasis::new(points.len(), 4);

        let mid = basis.point(&points, basis.domain_end() * 0.5);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(mid.z, 0.0, epsilon = 1e-5);
        assert!(mid.x > 0.0 && mid.x < 9.0);
    }

    #[test]
    fn test_coincident_knots_contribute_zero() {
        // Kleinstes Polygon: alle Randknoten fallen zusammen. Darf weder
        // NaN liefern noch die Teilung der Eins im Inneren verletzen.
        let basis = SplineBasis::new(5, 4);
        for sample in 0..50 {
            let v = basis.domain_end() * sample as f32 / 50.0;
            for weight in basis.weights(v) {
                assert!(weight.is_finite(), "Gewicht bei v={} nicht endlich", v);
            }
        }
    }
}
