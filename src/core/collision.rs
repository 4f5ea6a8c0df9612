//! Kollisionstest des Flugkörpers gegen aufeinanderfolgende
//! Tunnel-Segmente.

use glam::Vec3;

use super::sector::TunnelState;

/// Abstand eines Punktes von der Geraden durch A und B:
/// `|(P-A) × (P-B)| / |B-A|`.
pub fn point_to_segment_distance(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let x01 = point - a;
    let x02 = point - b;
    let x21 = b - a;
    x01.cross(x02).length() / x21.length()
}

/// Prüft die Flugkörper-Position gegen alle Sektor-Paare.
///
/// Der Flug verläuft monoton in +x. Für jedes Paar (j-1, j), dessen
/// x-Intervall die Position einschließt, wird der Abstand zur
/// Mittellinien-Strecke mit dem Sektor-Radius verglichen: Kollision
/// genau dann, wenn `radius ≤ d + craft_radius` (der Rumpf berührt
/// oder durchstößt die Wand). Der Scan läuft bei jedem Aufruf über das
/// volle Sektor-Array (O(sector_count)); mehrere getroffene Segmente in
/// einem Durchlauf ergeben trotzdem nur ein Kollisionsereignis.
pub fn check_collision(tunnel: &TunnelState, craft_pos: Vec3, craft_radius: f32) -> bool {
    let mut hits = 0usize;

    for j in 1..tunnel.sectors.len().saturating_sub(1) {
        let a = tunnel.sectors[j - 1].center;
        let b = tunnel.sectors[j].center;

        if a.x < craft_pos.x && craft_pos.x < b.x {
            let distance = point_to_segment_distance(craft_pos, a, b);
            if tunnel.sectors[j - 1].radius <= distance + craft_radius {
                hits += 1;
            }
        }
    }

    hits != 0
}
