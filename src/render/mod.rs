//! Ecosystem simulator: entity batch, particle pool, frame loop body.
//!
//! The simulator is either idle or running. While running, each frame spawns
//! emission particles, advances and evicts the pool, and redraws the scene.
//! Regeneration of the entity batch is orthogonal to that state machine and
//! may happen while idle (e.g. previewing slider changes).

pub mod canvas;
pub mod sprites;

pub use canvas::{Canvas, Color, DrawOp, Recorder};

use crate::{
    entity::{self, Entity, EntityKind},
    metrics::EcosystemMetrics,
    particle::{Particle, ParticlePool, CLEAN_SPAWN_CHANCE, POLLUTION_SPAWN_CHANCE},
    rng::VisualRng,
    state::EnvironmentalState,
};

pub struct Simulator {
    entities: Vec<Entity>,
    pool: ParticlePool,
    rng: VisualRng,
    frame: u64,
    running: bool,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self {
            entities: Vec::new(),
            pool: ParticlePool::new(),
            rng: VisualRng::new(seed),
            frame: 0,
            running: false,
        }
    }

    /// Replaces the entire entity batch from fresh state and metrics. The
    /// previous batch is discarded; there is no identity continuity.
    pub fn regenerate(&mut self, state: &EnvironmentalState, metrics: &EcosystemMetrics) {
        self.entities = entity::generate(state, metrics, &mut self.rng);
        tracing::debug!(
            entities = self.entities.len(),
            biodiversity = metrics.biodiversity_index,
            "regenerated ecosystem population"
        );
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Synchronous stop: no particle or frame mutation can happen afterwards
    /// until resumed.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.pool
    }

    /// One animation frame. A missing canvas skips the draw phase only; the
    /// particle simulation still advances.
    pub fn advance_frame(&mut self, state: &EnvironmentalState, canvas: Option<&mut (dyn Canvas + '_)>) {
        if !self.running {
            return;
        }
        self.spawn_particles();
        self.pool.advance();
        self.frame += 1;
        if let Some(canvas) = canvas {
            self.draw(canvas, state);
        }
    }

    /// Redraws the scene without advancing the simulation; usable while idle.
    pub fn draw(&self, canvas: &mut dyn Canvas, state: &EnvironmentalState) {
        sprites::draw_background(canvas, state);
        for entity in &self.entities {
            sprites::draw_entity(canvas, entity, self.frame);
        }
        for particle in self.pool.iter() {
            sprites::draw_particle(canvas, particle);
        }
    }

    fn spawn_particles(&mut self) {
        for entity in &self.entities {
            match entity.kind {
                EntityKind::IndustrySource => {
                    if self.rng.chance(POLLUTION_SPAWN_CHANCE) {
                        let _ = self
                            .pool
                            .try_spawn(Particle::pollution(entity.x, entity.y, &mut self.rng));
                    }
                }
                EntityKind::EnergySource => {
                    if self.rng.chance(CLEAN_SPAWN_CHANCE) {
                        let _ = self
                            .pool
                            .try_spawn(Particle::clean(entity.x, entity.y, &mut self.rng));
                    }
                }
                EntityKind::Flora | EntityKind::Fauna => {}
            }
        }
    }
}
