//! Vertex-Generierung für die Röhren-Oberfläche.

use glam::Vec3;

use super::types::{MeshData, PolygonMode, TubeVertex};
use crate::core::sector::TunnelState;

/// Baut den Vertex-Strom der Röhre aus einem fertigen Tunnelzustand.
///
/// Läuft alle Quad-Flächen zwischen aufeinanderfolgenden Ringen ab,
/// einschließlich der Umbruch-Fläche zwischen letztem und erstem
/// Ringelement. Im Dreiecks-Modus entstehen zwei Dreiecke pro Fläche
/// mit der Wicklung des Vorbilds, im Quad-Modus vier Vertices pro
/// Fläche.
pub fn build_tube_mesh(tunnel: &TunnelState, mode: PolygonMode) -> MeshData {
    let circle_segments = tunnel.circle_segments();
    let face_count = tunnel.sector_count().saturating_sub(1) * circle_segments;
    let mut vertices = Vec::with_capacity(match mode {
        PolygonMode::Triangles => face_count * 6,
        PolygonMode::Quads => face_count * 4,
    });

    for j in 0..tunnel.sector_count().saturating_sub(1) {
        let near = &tunnel.sectors[j];
        let far = &tunnel.sectors[j + 1];

        for i in 0..circle_segments {
            let i_next = (i + 1) % circle_segments;

            let corners = [
                (near.ring[i], near.normals[i]),
                (far.ring[i], far.normals[i]),
                (far.ring[i_next], far.normals[i_next]),
                (near.ring[i_next], near.normals[i_next]),
            ];

            match mode {
                PolygonMode::Quads => push_quad(&mut vertices, &corners),
                PolygonMode::Triangles => {
                    push_triangle(&mut vertices, corners[0], corners[1], corners[2]);
                    push_triangle(&mut vertices, corners[2], corners[3], corners[0]);
                }
            }
        }
    }

    MeshData { vertices, mode }
}

/// Hängt die vier Ecken einer Fläche in Wicklungs-Reihenfolge an.
fn push_quad(vertices: &mut Vec<TubeVertex>, corners: &[(Vec3, Vec3); 4]) {
    for &(position, normal) in corners {
        vertices.push(TubeVertex::new(position, normal));
    }
}

/// Hängt ein Dreieck an.
fn push_triangle(
    vertices: &mut Vec<TubeVertex>,
    a: (Vec3, Vec3),
    b: (Vec3, Vec3),
    c: (Vec3, Vec3),
) {
    vertices.push(TubeVertex::new(a.0, a.1));
    vertices.push(TubeVertex::new(b.0, b.1));
    vertices.push(TubeVertex::new(c.0, c.1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{generate, ControlPointWindow};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_tunnel() -> TunnelState {
        let mut rng = StdRng::seed_from_u64(11);
        let window = ControlPointWindow::new(20, &mut rng);
        generate(&window, 30, 8, 4)
    }

    #[test]
    fn test_triangle_mesh_vertex_count() {
        let tunnel = small_tunnel();
        let mesh = build_tube_mesh(&tunnel, PolygonMode::Triangles);
        // (sectors-1) · segments Flächen · 6 Vertices
        assert_eq!(mesh.vertex_count(), 29 * 8 * 6);
        assert_eq!(mesh.mode, PolygonMode::Triangles);
    }

    #[test]
    fn test_quad_mesh_vertex_count() {
        let tunnel = small_tunnel();
        let mesh = build_tube_mesh(&tunnel, PolygonMode::Quads);
        assert_eq!(mesh.vertex_count(), 29 * 8 * 4);
        assert_eq!(mesh.mode, PolygonMode::Quads);
    }

    #[test]
    fn test_wraparound_face_uses_first_ring_element() {
        let tunnel = small_tunnel();
        let mesh = build_tube_mesh(&tunnel, PolygonMode::Quads);

        // Letzte Fläche des ersten Ring-Bandes: Ecken 3/4 liegen auf
        // Ringindex 0 (Umbruch, kein doppelter Schlussvertex)
        let last_face_start = (8 - 1) * 4;
        let face = &mesh.vertices[last_face_start..last_face_start + 4];
        assert_eq!(face[0].position, tunnel.sectors[0].ring[7].to_array());
        assert_eq!(face[2].position, tunnel.sectors[1].ring[0].to_array());
        assert_eq!(face[3].position, tunnel.sectors[0].ring[0].to_array());
    }

}
