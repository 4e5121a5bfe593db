//! Emission particles and the bounded pool that owns them.

use crate::{
    render::canvas::{palette, Color},
    rng::VisualRng,
};

/// Hard ceiling on live particles; spawn attempts beyond it are dropped.
pub const POOL_CAPACITY: usize = 100;

/// Per-frame spawn probability for each industry source.
pub const POLLUTION_SPAWN_CHANCE: f32 = 0.2;
/// Per-frame spawn probability for each energy source.
pub const CLEAN_SPAWN_CHANCE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Pollution,
    Clean,
}

impl ParticleKind {
    pub fn color(self) -> Color {
        match self {
            ParticleKind::Pollution => palette::INDUSTRY_GRAY,
            ParticleKind::Clean => palette::CLEAN_EMERALD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Frames lived so far.
    pub life: u32,
    pub max_life: u32,
    pub radius: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Smoke rising from an industry source's stacks.
    pub fn pollution(source_x: f32, source_y: f32, rng: &mut VisualRng) -> Self {
        Self {
            x: source_x + (rng.range(0.0, 1.0) - 0.5) * 20.0,
            y: source_y - 25.0,
            vx: (rng.range(0.0, 1.0) - 0.5) * 2.0,
            vy: -rng.range(0.0, 1.0) * 2.0 - 1.0,
            life: 0,
            max_life: 120,
            radius: rng.range(0.0, 1.0) * 4.0 + 2.0,
            kind: ParticleKind::Pollution,
        }
    }

    /// Shimmer drifting off a renewable energy source.
    pub fn clean(source_x: f32, source_y: f32, rng: &mut VisualRng) -> Self {
        Self {
            x: source_x + (rng.range(0.0, 1.0) - 0.5) * 10.0,
            y: source_y,
            vx: (rng.range(0.0, 1.0) - 0.5) * 1.0,
            vy: -rng.range(0.0, 1.0) * 1.0 - 0.5,
            life: 0,
            max_life: 80,
            radius: rng.range(0.0, 1.0) * 3.0 + 1.0,
            kind: ParticleKind::Clean,
        }
    }

    /// Remaining-lifetime fraction: strictly decreasing per frame, exactly 0
    /// at expiry.
    pub fn opacity(&self) -> f32 {
        1.0 - self.life as f32 / self.max_life as f32
    }
}

#[derive(Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(POOL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Admits a particle unless the pool is at capacity; the overflow case is
    /// a silent drop.
    pub fn try_spawn(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= POOL_CAPACITY {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Moves and ages every particle, evicting those that reached max_life.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.life += 1;
        }
        self.particles.retain(|p| p.life < p.max_life);
    }
}
