//! Derived ecological metrics.
//!
//! Pure, total mapping from an [`EnvironmentalState`] to a scorecard. The
//! formulas are intentionally simplified, monotonic, pedagogical mappings,
//! not a climate model. Inputs are expected pre-clamped by the caller; the
//! `max`/`clamp` floors inside the formulas are the only defense.

use serde::{Deserialize, Serialize};

use crate::state::EnvironmentalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQuality {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl AirQuality {
    /// Classifies CO2 adjusted for renewable offset. Thresholds are strict
    /// and checked most-restrictive-first.
    pub fn classify(adjusted_co2: f64) -> Self {
        if adjusted_co2 > 450.0 {
            AirQuality::Poor
        } else if adjusted_co2 > 420.0 {
            AirQuality::Moderate
        } else if adjusted_co2 > 380.0 {
            AirQuality::Good
        } else {
            AirQuality::Excellent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AirQuality::Excellent => "Excellent",
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcosystemMetrics {
    pub species_count: u32,
    pub air_quality: AirQuality,
    /// Gigatons, one decimal of precision.
    pub carbon_storage: f64,
    /// 0..=100.
    pub biodiversity_index: u32,
    /// 0..=100.
    pub sustainability_score: u32,
}

impl EcosystemMetrics {
    /// Recomputes the full scorecard from a state. Referentially transparent:
    /// equal inputs give bit-for-bit equal outputs.
    pub fn compute(state: &EnvironmentalState) -> Self {
        let species_base = 1500.0;
        let co2_impact = (state.co2_levels - 350.0) * -2.0;
        let forest_impact = (state.forest_cover - 50.0) * 4.0;
        let temp_impact = state.temperature * -100.0;
        let species_count =
            (species_base + co2_impact + forest_impact + temp_impact).max(100.0).round() as u32;

        let adjusted_co2 = state.co2_levels - state.renewable_energy * 2.0;
        let air_quality = AirQuality::classify(adjusted_co2);

        let carbon_raw =
            (state.forest_cover / 100.0) * 3.5 - (state.industry_level / 100.0) * 1.2;
        let carbon_storage = (carbon_raw.max(0.0) * 10.0).round() / 10.0;

        let biodiversity_raw = state.forest_cover * 0.6
            + (100.0 - state.co2_levels + 300.0) / 10.0
            + state.renewable_energy * 0.3
            - state.temperature * 5.0
            - state.industry_level * 0.2;
        let biodiversity_index = biodiversity_raw.clamp(0.0, 100.0).round() as u32;

        let sustainability_raw = state.renewable_energy * 0.4
            + state.forest_cover * 0.3
            + (100.0 - state.industry_level + 50.0) * 0.2
            + (450.0 - state.co2_levels) / 10.0
            - state.temperature * 3.0;
        let sustainability_score = sustainability_raw.clamp(0.0, 100.0).round() as u32;

        Self {
            species_count,
            air_quality,
            carbon_storage,
            biodiversity_index,
            sustainability_score,
        }
    }

    /// Initial display values shown before the first recompute. A separate
    /// static default, deliberately not derived from the formulas.
    pub fn placeholder() -> Self {
        Self {
            species_count: 1247,
            air_quality: AirQuality::Good,
            carbon_storage: 2.3,
            biodiversity_index: 75,
            sustainability_score: 68,
        }
    }
}
