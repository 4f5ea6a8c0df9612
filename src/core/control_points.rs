//! Gleitendes Fenster der Kontrollpunkte für Mittellinie und Radius.

use glam::Vec3;
use rand::Rng;

/// Mittellinien-Querablage: y und z uniform in [-1, 1].
const LATERAL_RANGE: std::ops::Range<f32> = -1.0..1.0;
/// Radius-Bereich der Röhre (y-Kanal der Radius-Kontrollpunkte).
const RADIUS_RANGE: std::ops::Range<f32> = 0.2..0.6;
/// Anzahl der kollinearen Punkte am Tunnel-Eingang.
const STRAIGHT_ENTRANCE_POINTS: usize = 4;

/// Zwei parallele Sequenzen fester Länge: Mittellinien- und
/// Radius-Kontrollpunkte.
///
/// Das Fenster hält `control_point_count + 1` Einträge (Spline-Indizes
/// `0..=n` mit `n = control_point_count`). Beide Listen werden immer
/// gemeinsam verdrängt und angehängt, damit die Sektor-Zuordnung nie
/// auseinanderläuft. Zufall fließt ausschließlich über `initialize` und
/// `advance` ein.
#[derive(Debug, Clone)]
pub struct ControlPointWindow {
    /// Spline-Parameter `n`; Fensterlänge ist `n + 1`
    control_point_count: usize,
    /// Mittellinien-Kontrollpunkte
    centers: Vec<Vec3>,
    /// Radius-Kontrollpunkte (y = Radius, z = 0)
    radii: Vec<Vec3>,
}

impl ControlPointWindow {
    /// Erstellt ein initialisiertes Fenster ab x = 0.
    pub fn new(control_point_count: usize, rng: &mut impl Rng) -> Self {
        let mut window = Self {
            control_point_count,
            centers: Vec::with_capacity(control_point_count + 1),
            radii: Vec::with_capacity(control_point_count + 1),
        };
        window.initialize(rng);
        window
    }

    /// Baut das Fenster neu ab x = 0 auf.
    ///
    /// Die ersten vier Mittellinien-Punkte sind kollinear (y = z = 0)
    /// und simulieren einen geraden Tunnel-Eingang; der Rest wird
    /// uniform in [-1, 1] gestreut. Radius-Punkte tragen den Radius im
    /// y-Kanal, uniform in [0.2, 0.6].
    pub fn initialize(&mut self, rng: &mut impl Rng) {
        self.centers.clear();
        self.radii.clear();

        for i in 0..=self.control_point_count {
            let x = i as f32;
            let (y, z) = if i < STRAIGHT_ENTRANCE_POINTS {
                (0.0, 0.0)
            } else {
                (
                    rng.random_range(LATERAL_RANGE),
                    rng.random_range(LATERAL_RANGE),
                )
            };
            self.centers.push(Vec3::new(x, y, z));
            self.radii
                .push(Vec3::new(x, rng.random_range(RADIUS_RANGE), 0.0));
        }
    }

    /// Verdrängt die ältesten `batch_size` Einträge beider Listen und
    /// hängt ebenso viele neue an; x läuft monoton (+1.0 pro Punkt)
    /// vom bisher letzten Punkt weiter. `batch_size` ist ein Viertel
    /// der Kontrollpunkt-Anzahl. Gibt `batch_size` zurück.
    pub fn advance(&mut self, rng: &mut impl Rng) -> usize {
        let batch_size = self.control_point_count / 4;

        for _ in 0..batch_size {
            self.centers.remove(0);
            let x = self.centers[self.centers.len() - 1].x + 1.0;
            self.centers.push(Vec3::new(
                x,
                rng.random_range(LATERAL_RANGE),
                rng.random_range(LATERAL_RANGE),
            ));

            self.radii.remove(0);
            let x = self.radii[self.radii.len() - 1].x + 1.0;
            self.radii
                .push(Vec3::new(x, rng.random_range(RADIUS_RANGE), 0.0));
        }

        batch_size
    }

    /// Spline-Parameter `n` (Fensterlänge minus 1).
    pub fn control_point_count(&self) -> usize {
        self.control_point_count
    }

    /// Anzahl der Einträge pro Liste (`n + 1`).
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// True wenn das Fenster (noch) leer ist.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Mittellinien-Kontrollpunkte (read-only).
    pub fn centers(&self) -> &[Vec3] {
        &self.centers
    }

    /// Radius-Kontrollpunkte (read-only).
    pub fn radii(&self) -> &[Vec3] {
        &self.radii
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initialize_window_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = ControlPointWindow::new(20, &mut rng);

        assert_eq!(window.len(), 21);
        assert_eq!(window.centers().len(), window.radii().len());

        // Gerader Eingang: die ersten vier Punkte sind kollinear
        for p in &window.centers()[..4] {
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z, 0.0);
        }

        for (i, p) in window.centers().iter().enumerate() {
            assert_eq!(p.x, i as f32);
            assert!(p.y >= -1.0 && p.y < 1.0);
            assert!(p.z >= -1.0 && p.z < 1.0);
        }
        for r in window.radii() {
            assert!(r.y >= 0.2 && r.y < 0.6, "Radius außerhalb: {}", r.y);
            assert_eq!(r.z, 0.0);
        }
    }

    #[test]
    fn test_advance_keeps_length_and_extends_x() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut window = ControlPointWindow::new(20, &mut rng);

        let mut last_x = window.centers()[window.len() - 1].x;
        for _ in 0..8 {
            let batch = window.advance(&mut rng);
            assert_eq!(batch, 5);
            assert_eq!(window.len(), 21);

            // Neuester Punkt rückt pro Aufruf um batch_size weiter
            let new_last_x = window.centers()[window.len() - 1].x;
            assert_eq!(new_last_x, last_x + batch as f32);
            assert_eq!(window.radii()[window.len() - 1].x, new_last_x);
            last_x = new_last_x;
        }
    }

    #[test]
    fn test_advance_evicts_oldest_entries() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut window = ControlPointWindow::new(20, &mut rng);
        let kept = window.centers()[5];

        window.advance(&mut rng);

        // batch_size = 5: Eintrag 5 wird zum neuen Kopf
        assert_eq!(window.centers()[0], kept);
        assert_eq!(window.centers()[0].x, 5.0);
    }

    #[test]
    fn test_parallel_lists_share_x() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut window = ControlPointWindow::new(16, &mut rng);
        window.advance(&mut rng);

        for (c, r) in window.centers().iter().zip(window.radii()) {
            assert_eq!(c.x, r.x);
        }
    }
}
