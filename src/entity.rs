//! Ecosystem entities.
//!
//! The visual population is regenerated as a whole batch whenever the state
//! or metrics change; the previous batch is discarded. Counts and energy
//! subtypes are deterministic functions of the inputs, while positions, phase
//! offsets, sizes, and fauna colors come from the injected [`VisualRng`].

use serde::{Deserialize, Serialize};

use crate::{
    metrics::EcosystemMetrics,
    render::canvas::{palette, Color},
    rng::VisualRng,
    state::EnvironmentalState,
};

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 400.0;

const MAX_FLORA: f64 = 30.0;
const MAX_FAUNA: f64 = 15.0;
const MAX_ENERGY: f64 = 8.0;
const MAX_INDUSTRY: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Flora,
    Fauna,
    EnergySource,
    IndustrySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyKind {
    Wind,
    Solar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    /// 0..=1; meaningful for flora and fauna, fixed at 1 otherwise.
    pub health: f32,
    pub size: f32,
    pub color: Color,
    /// Animation phase offset in radians, stable for the entity's lifetime.
    pub phase: f32,
    /// Set for energy sources only.
    pub energy_kind: Option<EnergyKind>,
}

/// Deterministic batch sizes for a given state and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCounts {
    pub flora: usize,
    pub fauna: usize,
    pub energy: usize,
    pub industry: usize,
}

impl EntityCounts {
    pub fn derive(state: &EnvironmentalState, metrics: &EcosystemMetrics) -> Self {
        Self {
            flora: (state.forest_cover / 100.0 * MAX_FLORA).floor() as usize,
            fauna: (metrics.biodiversity_index as f64 / 100.0 * MAX_FAUNA).floor() as usize,
            energy: (state.renewable_energy / 100.0 * MAX_ENERGY).floor() as usize,
            industry: (state.industry_level / 100.0 * MAX_INDUSTRY).floor() as usize,
        }
    }

    pub fn total(&self) -> usize {
        self.flora + self.fauna + self.energy + self.industry
    }
}

/// Flora vigor from temperature stress and CO2 load.
pub fn flora_health(state: &EnvironmentalState) -> f32 {
    let temp_factor = (2.0 - state.temperature).max(0.0) / 2.0;
    let co2_factor = ((450.0 - state.co2_levels) / 100.0).max(0.0);
    (((temp_factor + co2_factor) / 2.0) as f32).min(1.0)
}

/// Fauna vigor from biodiversity and distance to the 1°C comfort point.
pub fn fauna_health(state: &EnvironmentalState, metrics: &EcosystemMetrics) -> f32 {
    let biodiversity_factor = metrics.biodiversity_index as f64 / 100.0;
    let temp_factor = ((3.0 - (state.temperature - 1.0).abs()) / 3.0).max(0.0);
    (((biodiversity_factor + temp_factor) / 2.0) as f32).min(1.0)
}

/// Flora crown color is a step function of health, not randomized.
pub fn flora_color(health: f32) -> Color {
    if health > 0.8 {
        palette::VIBRANT_GREEN
    } else if health > 0.6 {
        palette::YELLOW_GREEN
    } else if health > 0.4 {
        palette::WILTED_YELLOW
    } else {
        palette::DISTRESSED_RED
    }
}

/// Builds a fresh entity batch. Order is flora, fauna, energy, industry.
pub fn generate(
    state: &EnvironmentalState,
    metrics: &EcosystemMetrics,
    rng: &mut VisualRng,
) -> Vec<Entity> {
    let counts = EntityCounts::derive(state, metrics);
    let mut entities = Vec::with_capacity(counts.total());

    let tree_health = flora_health(state);
    let tree_color = flora_color(tree_health);
    for _ in 0..counts.flora {
        entities.push(Entity {
            kind: EntityKind::Flora,
            x: rng.range(10.0, 790.0),
            y: rng.range(200.0, 400.0),
            health: tree_health,
            size: rng.range(15.0, 30.0),
            color: tree_color,
            phase: rng.range(0.0, std::f32::consts::TAU),
            energy_kind: None,
        });
    }

    let animal_health = fauna_health(state, metrics);
    for _ in 0..counts.fauna {
        entities.push(Entity {
            kind: EntityKind::Fauna,
            x: rng.range(10.0, 790.0),
            y: rng.range(250.0, 350.0),
            health: animal_health,
            size: rng.range(5.0, 13.0),
            color: *rng.pick(&palette::FAUNA),
            phase: rng.range(0.0, std::f32::consts::TAU),
            energy_kind: None,
        });
    }

    for index in 0..counts.energy {
        // Subtype alternates by creation index; never randomized.
        let energy_kind = if index % 2 == 0 {
            EnergyKind::Wind
        } else {
            EnergyKind::Solar
        };
        entities.push(Entity {
            kind: EntityKind::EnergySource,
            x: rng.range(10.0, 790.0),
            y: rng.range(100.0, 250.0),
            health: 1.0,
            size: 20.0,
            color: palette::ENERGY_BLUE,
            phase: rng.range(0.0, std::f32::consts::TAU),
            energy_kind: Some(energy_kind),
        });
    }

    for _ in 0..counts.industry {
        entities.push(Entity {
            kind: EntityKind::IndustrySource,
            x: rng.range(10.0, 790.0),
            y: rng.range(150.0, 270.0),
            health: 1.0,
            size: 25.0,
            color: palette::INDUSTRY_GRAY,
            phase: 0.0,
            energy_kind: None,
        });
    }

    entities
}
