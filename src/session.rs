//! Session controller: owns the environmental state, recomputes metrics on
//! every change, feeds the simulator, and produces the results summary at
//! stop.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    metrics::EcosystemMetrics,
    render::{Canvas, Simulator},
    state::{EnvironmentalState, Parameter},
};

pub const BASELINE_CO2: f64 = 410.0;
pub const BASELINE_TEMPERATURE: f64 = 1.2;
pub const BASELINE_BIODIVERSITY: f64 = 75.0;

/// Immutable results handed to the reward/persistence collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResultsSummary {
    pub elapsed_seconds: u64,
    pub final_metrics: EcosystemMetrics,
    pub biodiversity_change: f64,
    /// Percent change of CO2 versus the 410 ppm baseline.
    pub carbon_change: f64,
    pub temperature_change: f64,
    pub sustainability_index: u32,
    pub economic_value: u64,
    pub xp_earned: u32,
    pub credits_earned: u32,
    pub completed_at: DateTime<Utc>,
}

impl SimulationResultsSummary {
    pub fn build(
        elapsed_seconds: u64,
        final_metrics: &EcosystemMetrics,
        final_state: &EnvironmentalState,
    ) -> Self {
        let sustainability = final_metrics.sustainability_score;
        let biodiversity = final_metrics.biodiversity_index;
        Self {
            elapsed_seconds,
            final_metrics: *final_metrics,
            biodiversity_change: biodiversity as f64 - BASELINE_BIODIVERSITY,
            carbon_change: (final_state.co2_levels - BASELINE_CO2) / 4.1,
            temperature_change: final_state.temperature - BASELINE_TEMPERATURE,
            sustainability_index: sustainability,
            economic_value: sustainability as u64 * 1000,
            xp_earned: (sustainability * 2).max(50),
            credits_earned: ((biodiversity as f64 / 2.0).round() as u32).max(10),
            completed_at: Utc::now(),
        }
    }
}

/// In-session conservation actions the learner can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConservationAction {
    PlantTrees,
    AddSolar,
    WindPower,
}

impl ConservationAction {
    pub fn impact(self) -> f64 {
        match self {
            ConservationAction::PlantTrees => 5.0,
            ConservationAction::AddSolar => 10.0,
            ConservationAction::WindPower => 8.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConservationAction::PlantTrees => "Plant Trees",
            ConservationAction::AddSolar => "Add Solar",
            ConservationAction::WindPower => "Wind Power",
        }
    }
}

/// Immediate reward for recording a conservation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionReward {
    pub xp: u32,
    pub credits: u32,
}

impl ActionReward {
    fn for_impact(impact: f64) -> Self {
        Self {
            xp: ((impact * 5.0).round() as u32).max(25),
            credits: ((impact * 2.0).round() as u32).max(5),
        }
    }
}

pub struct Session {
    state: EnvironmentalState,
    metrics: EcosystemMetrics,
    simulator: Simulator,
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl Session {
    pub fn new(state: EnvironmentalState, seed: u64) -> Self {
        let metrics = EcosystemMetrics::compute(&state);
        let mut simulator = Simulator::new(seed);
        simulator.regenerate(&state, &metrics);
        Self {
            state,
            metrics,
            simulator,
            accumulated: Duration::ZERO,
            started_at: None,
        }
    }

    pub fn state(&self) -> &EnvironmentalState {
        &self.state
    }

    pub fn metrics(&self) -> &EcosystemMetrics {
        &self.metrics
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn is_running(&self) -> bool {
        self.simulator.is_running()
    }

    /// Adjusts one slider; metrics and the entity batch refresh immediately,
    /// running or not.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f64) {
        self.state.set(parameter, value);
        self.refresh();
    }

    /// Replaces the state wholesale.
    pub fn set_state(&mut self, state: EnvironmentalState) {
        self.state = state;
        self.refresh();
    }

    pub fn apply_action(&mut self, action: ConservationAction) -> ActionReward {
        let impact = action.impact();
        match action {
            ConservationAction::PlantTrees => {
                self.state
                    .set(Parameter::ForestCover, self.state.forest_cover + impact);
            }
            ConservationAction::AddSolar => {
                self.state.set(
                    Parameter::RenewableEnergy,
                    self.state.renewable_energy + impact,
                );
            }
            ConservationAction::WindPower => {
                self.state.set(
                    Parameter::RenewableEnergy,
                    self.state.renewable_energy + impact,
                );
                self.state
                    .set(Parameter::Co2Levels, self.state.co2_levels - impact * 2.0);
            }
        }
        self.refresh();
        tracing::info!(action = action.label(), "conservation action applied");
        ActionReward::for_impact(impact)
    }

    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        self.simulator.start();
        tracing::info!("session running");
    }

    /// Stops the run synchronously; later frame calls are no-ops until the
    /// session is started again.
    pub fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
        self.simulator.stop();
        tracing::info!(elapsed_seconds = self.elapsed().as_secs(), "session stopped");
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    pub fn advance_frame(&mut self, canvas: Option<&mut (dyn Canvas + '_)>) {
        self.simulator.advance_frame(&self.state, canvas);
    }

    /// Stops the session and packages the results for the reward
    /// collaborator.
    pub fn finish(&mut self) -> SimulationResultsSummary {
        self.stop();
        SimulationResultsSummary::build(self.elapsed().as_secs(), &self.metrics, &self.state)
    }

    fn refresh(&mut self) {
        self.metrics = EcosystemMetrics::compute(&self.state);
        self.simulator.regenerate(&self.state, &self.metrics);
    }
}
