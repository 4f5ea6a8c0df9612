//! Zentrale Konfiguration der Wurmloch-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte und wird
//! als TOML persistiert. Die `const`-Werte bleiben als
//! Fallback/Default und Validierungsgrenzen erhalten.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::render::PolygonMode;

// ── Tunnel-Auflösung ────────────────────────────────────────────────

/// Minimale Anzahl der Querschnitte.
pub const SECTOR_COUNT_MIN: usize = 20;
/// Maximale Anzahl der Querschnitte.
pub const SECTOR_COUNT_MAX: usize = 400;
/// Minimale Ringpunkte pro Querschnitt.
pub const CIRCLE_SEGMENTS_MIN: usize = 3;
/// Maximale Ringpunkte pro Querschnitt.
pub const CIRCLE_SEGMENTS_MAX: usize = 200;

// ── Spline ──────────────────────────────────────────────────────────

/// Standard-Anzahl der Kontrollpunkte (Spline-Parameter `n`).
pub const DEFAULT_CONTROL_POINT_COUNT: usize = 20;
/// Standard-Spline-Ordnung `t` (Polynomgrad 3).
pub const DEFAULT_SPLINE_ORDER: usize = 4;

// ── Flugkörper ──────────────────────────────────────────────────────

/// Standard-Kollisionsradius des Flugkörpers.
pub const DEFAULT_CRAFT_RADIUS: f32 = 0.05;

/// Vollständige Bau- und Kollisions-Konfiguration der Engine.
///
/// Wird vor jeder Zustandsänderung validiert; bei Ablehnung bleibt der
/// vorherige Tunnelzustand unverändert gültig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TunnelConfig {
    /// Anzahl der Querschnitte entlang der Mittellinie
    pub sector_count: usize,
    /// Ringpunkte pro Querschnitt
    pub circle_segments: usize,
    /// Spline-Parameter `n` (Fenster hält `n + 1` Punkte)
    pub control_point_count: usize,
    /// Spline-Ordnung `t`
    pub spline_order: usize,
    /// Kollisionsradius des Flugkörpers
    pub craft_radius: f32,
    /// Primitiv-Art des Vertex-Stroms
    pub polygon_mode: PolygonMode,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            sector_count: 200,
            circle_segments: 25,
            control_point_count: DEFAULT_CONTROL_POINT_COUNT,
            spline_order: DEFAULT_SPLINE_ORDER,
            craft_radius: DEFAULT_CRAFT_RADIUS,
            polygon_mode: PolygonMode::Triangles,
        }
    }
}

impl TunnelConfig {
    /// Prüft alle Wertebereiche, bevor irgendein Zustand angefasst wird.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(SECTOR_COUNT_MIN..=SECTOR_COUNT_MAX).contains(&self.sector_count) {
            bail!(
                "sector_count {} außerhalb [{}, {}]",
                self.sector_count,
                SECTOR_COUNT_MIN,
                SECTOR_COUNT_MAX
            );
        }
        if !(CIRCLE_SEGMENTS_MIN..=CIRCLE_SEGMENTS_MAX).contains(&self.circle_segments) {
            bail!(
                "circle_segments {} außerhalb [{}, {}]",
                self.circle_segments,
                CIRCLE_SEGMENTS_MIN,
                CIRCLE_SEGMENTS_MAX
            );
        }
        if self.spline_order < 2 {
            bail!("spline_order {} < 2", self.spline_order);
        }
        if self.control_point_count < self.spline_order {
            bail!(
                "control_point_count {} kleiner als spline_order {}",
                self.control_point_count,
                self.spline_order
            );
        }
        if !(self.craft_radius > 0.0) {
            bail!("craft_radius {} muss positiv sein", self.craft_radius);
        }
        Ok(())
    }
}

/// Persistente Engine-Optionen (TOML-Datei).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Bau- und Kollisions-Konfiguration
    pub tunnel: TunnelConfig,
    /// Bestes bisher erreichtes Ergebnis (überlebt Resets)
    pub best_score: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tunnel: TunnelConfig::default(),
            best_score: 0,
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei; fehlende oder fehlerhafte
    /// Datei fällt mit Log-Hinweis auf Standardwerte zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen serialisieren")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen schreiben nach {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TunnelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sector_count_bounds() {
        let mut config = TunnelConfig::default();
        config.sector_count = 19;
        assert!(config.validate().is_err());
        config.sector_count = 20;
        assert!(config.validate().is_ok());
        config.sector_count = 400;
        assert!(config.validate().is_ok());
        config.sector_count = 401;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_circle_segment_bounds() {
        let mut config = TunnelConfig::default();
        config.circle_segments = 2;
        assert!(config.validate().is_err());
        config.circle_segments = 3;
        assert!(config.validate().is_ok());
        config.circle_segments = 200;
        assert!(config.validate().is_ok());
        config.circle_segments = 201;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_control_points_must_cover_order() {
        let mut config = TunnelConfig::default();
        config.control_point_count = 3;
        assert!(config.validate().is_err(), "n=3 < t=4 muss abgelehnt werden");
    }

    #[test]
    fn test_craft_radius_must_be_positive() {
        let mut config = TunnelConfig::default();
        config.craft_radius = 0.0;
        assert!(config.validate().is_err());
        config.craft_radius = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_options_toml_roundtrip() {
        let mut options = EngineOptions::default();
        options.best_score = 1234;
        options.tunnel.circle_segments = 40;
        options.tunnel.polygon_mode = PolygonMode::Quads;

        let toml_text = toml::to_string_pretty(&options).expect("serialisieren");
        let restored: EngineOptions = toml::from_str(&toml_text).expect("deserialisieren");
        assert_eq!(restored, options);
    }
}
