//! Tunnel-Controller: Regenerations-Auslöser, Kollisions-Tick und
//! Punktestand.

use anyhow::Context;
use rand::rngs::StdRng;

use crate::core::{check_collision, generate, ControlPointWindow, Craft, TunnelState};
use crate::render::{build_tube_mesh, MeshData, PolygonMode, Renderable};
use crate::shared::TunnelConfig;

/// Phase des Tunnel-Lebenszyklus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TunnelPhase {
    /// Flugkörper gut innerhalb des aktuellen Fensters
    #[default]
    Steady,
    /// Mittelpunkt überschritten, Fenster wird gerade verlängert
    Extending,
}

/// Ergebnis eines Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nichts zu tun, Tunnel unverändert
    Steady,
    /// Fenster verlängert und Tunnel neu generiert
    Extended,
    /// Kollision erkannt; Tunnel neu initialisiert, Flugkörper am Ursprung
    Collision,
}

/// Besitzt Kontrollpunkt-Fenster und den aktuell gültigen Tunnelzustand
/// exklusiv und orchestriert alle Regenerationen.
///
/// Jede Regeneration baut einen vollständigen neuen `TunnelState` und
/// tauscht ihn am Stück ein; Leser sehen ausschließlich committete
/// Zustände. Ausführung ist synchron und single-threaded: `tick`
/// erledigt Kollision, Verlängerung und Punktestand im selben
/// Animations-Takt.
#[derive(Debug)]
pub struct TunnelController {
    config: TunnelConfig,
    window: ControlPointWindow,
    tunnel: TunnelState,
    phase: TunnelPhase,
    rng: StdRng,
    score: u32,
    best_score: u32,
}

impl TunnelController {
    /// Erstellt Fenster und ersten Tunnelzustand aus der Konfiguration.
    ///
    /// Die Konfiguration wird validiert, bevor irgendein Zustand
    /// aufgebaut wird.
    pub fn new(config: TunnelConfig, mut rng: StdRng) -> anyhow::Result<Self> {
        config.validate().context("Tunnel-Konfiguration")?;

        let window = ControlPointWindow::new(config.control_point_count, &mut rng);
        let tunnel = generate(
            &window,
            config.sector_count,
            config.circle_segments,
            config.spline_order,
        );

        Ok(Self {
            config,
            window,
            tunnel,
            phase: TunnelPhase::Steady,
            rng,
            score: 0,
            best_score: 0,
        })
    }

    /// Aktuell gültiger Tunnelzustand (read-only).
    pub fn tunnel(&self) -> &TunnelState {
        &self.tunnel
    }

    /// Aktive Konfiguration.
    pub fn config(&self) -> &TunnelConfig {
        &self.config
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> TunnelPhase {
        self.phase
    }

    /// Punktestand seit dem letzten Reset.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Bestes Ergebnis über alle Resets.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Übernimmt ein persistiertes bestes Ergebnis.
    pub fn set_best_score(&mut self, best_score: u32) {
        self.best_score = best_score;
    }

    /// Ein Animations-Takt: Kollisionsprüfung, Punktestand,
    /// Mittelpunkts-Prüfung.
    ///
    /// Bei Kollision wird der Tunnel neu initialisiert und der
    /// Flugkörper an den Ursprung gesetzt. Überschreitet der Flugkörper
    /// die x-Koordinate des mittleren Sektors, wird das Fenster
    /// verlängert und der Tunnel einmal regeneriert; die Phase kehrt
    /// noch im selben Takt zu `Steady` zurück.
    pub fn tick(&mut self, craft: &mut Craft) -> TickOutcome {
        if check_collision(&self.tunnel, craft.position, craft.radius) {
            if self.score > self.best_score {
                self.best_score = self.score;
                log::info!("Neues bestes Ergebnis: {}", self.best_score);
            }
            self.reset();
            craft.reset();
            return TickOutcome::Collision;
        }

        let flown = (craft.position.x * 10.0).max(0.0) as u32;
        if flown > self.score {
            self.score = flown;
        }

        if craft.position.x > self.tunnel.midpoint_x() {
            self.phase = TunnelPhase::Extending;
            self.advance();
            self.phase = TunnelPhase::Steady;
            return TickOutcome::Extended;
        }

        TickOutcome::Steady
    }

    /// Verlängert das Fenster um eine Charge und regeneriert den Tunnel.
    pub fn advance(&mut self) -> &TunnelState {
        let batch = self.window.advance(&mut self.rng);
        self.regenerate();
        log::debug!(
            "Tunnel verlängert: {} Kontrollpunkte nachgeschoben, Mittelpunkt bei x={}",
            batch,
            self.tunnel.midpoint_x()
        );
        &self.tunnel
    }

    /// Initialisiert das Fenster neu und regeneriert den Tunnel —
    /// Neustart ab dem Ursprung, aus jeder Phase erreichbar.
    ///
    /// Der Punktestand fällt auf 0, das beste Ergebnis bleibt erhalten.
    /// Der Aufrufer setzt den Flugkörper an den Ursprung (`Craft::reset`).
    pub fn reset(&mut self) -> &TunnelState {
        self.window.initialize(&mut self.rng);
        self.regenerate();
        self.phase = TunnelPhase::Steady;
        self.score = 0;
        log::info!("Tunnel zurückgesetzt");
        &self.tunnel
    }

    /// Ändert die Tunnel-Auflösung und regeneriert vollständig.
    ///
    /// Wertebereiche werden geprüft, BEVOR Zustand angefasst wird; bei
    /// Ablehnung bleibt der vorherige Tunnelzustand gültig.
    pub fn set_resolution(
        &mut self,
        sector_count: usize,
        circle_segments: usize,
    ) -> anyhow::Result<()> {
        let mut candidate = self.config;
        candidate.sector_count = sector_count;
        candidate.circle_segments = circle_segments;
        if let Err(e) = candidate.validate() {
            log::warn!("Auflösung abgelehnt: {}", e);
            return Err(e);
        }

        self.config = candidate;
        self.regenerate();
        Ok(())
    }

    /// Baut einen neuen Tunnelzustand und tauscht ihn am Stück ein.
    fn regenerate(&mut self) {
        self.tunnel = generate(
            &self.window,
            self.config.sector_count,
            self.config.circle_segments,
            self.config.spline_order,
        );
    }
}

impl Renderable for TunnelController {
    fn produce_mesh(&self, mode: PolygonMode) -> MeshData {
        build_tube_mesh(&self.tunnel, mode)
    }

    fn rebuild(&mut self) {
        self.regenerate();
    }
}
