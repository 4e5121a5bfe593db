use std::io::Write;
use std::path::PathBuf;

use ecosphere::{
    session::{ActionReward, BASELINE_BIODIVERSITY},
    AirQuality, ConservationAction, EcosystemMetrics, EnvironmentalState, Parameter,
    ScenarioLoader, Session, SimulationResultsSummary,
};

fn scenario_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn metrics_with(sustainability: u32, biodiversity: u32) -> EcosystemMetrics {
    EcosystemMetrics {
        species_count: 1000,
        air_quality: AirQuality::Good,
        carbon_storage: 2.0,
        biodiversity_index: biodiversity,
        sustainability_score: sustainability,
    }
}

#[test]
fn reward_computation_matches_reference_values() {
    let state = EnvironmentalState::default();
    let summary = SimulationResultsSummary::build(90, &metrics_with(68, 75), &state);
    assert_eq!(summary.elapsed_seconds, 90);
    assert_eq!(summary.xp_earned, 136);
    assert_eq!(summary.credits_earned, 38);
    assert_eq!(summary.economic_value, 68_000);
    assert_eq!(summary.sustainability_index, 68);
    assert_eq!(summary.biodiversity_change, 75.0 - BASELINE_BIODIVERSITY);
}

#[test]
fn reward_floors_apply_to_poor_outcomes() {
    let state = EnvironmentalState::default();
    let summary = SimulationResultsSummary::build(10, &metrics_with(0, 0), &state);
    assert_eq!(summary.xp_earned, 50);
    assert_eq!(summary.credits_earned, 10);
    assert_eq!(summary.economic_value, 0);
}

#[test]
fn deltas_are_measured_against_fixed_baselines() {
    let mut state = EnvironmentalState::default();
    state.co2_levels = 430.5;
    state.temperature = 2.2;
    let summary = SimulationResultsSummary::build(0, &metrics_with(50, 50), &state);
    assert!((summary.carbon_change - 5.0).abs() < 1e-9);
    assert!((summary.temperature_change - 1.0).abs() < 1e-9);
}

#[test]
fn conservation_actions_shift_state_with_clamps() {
    let mut session = Session::new(EnvironmentalState::default(), 42);

    let reward = session.apply_action(ConservationAction::PlantTrees);
    assert_eq!(session.state().forest_cover, 70.0);
    assert_eq!(reward, ActionReward { xp: 25, credits: 10 });

    let reward = session.apply_action(ConservationAction::AddSolar);
    assert_eq!(session.state().renewable_energy, 35.0);
    assert_eq!(reward, ActionReward { xp: 50, credits: 20 });

    let reward = session.apply_action(ConservationAction::WindPower);
    assert_eq!(session.state().renewable_energy, 43.0);
    assert_eq!(session.state().co2_levels, 394.0);
    assert_eq!(reward, ActionReward { xp: 40, credits: 16 });

    // Clamped at the domain ceiling.
    session.set_parameter(Parameter::ForestCover, 98.0);
    session.apply_action(ConservationAction::PlantTrees);
    assert_eq!(session.state().forest_cover, 100.0);

    // Clamped at the CO2 floor.
    session.set_parameter(Parameter::Co2Levels, 355.0);
    session.apply_action(ConservationAction::WindPower);
    assert_eq!(session.state().co2_levels, 350.0);
}

#[test]
fn actions_refresh_metrics_immediately() {
    let mut session = Session::new(EnvironmentalState::default(), 42);
    let before = *session.metrics();
    session.apply_action(ConservationAction::PlantTrees);
    assert!(session.metrics().biodiversity_index > before.biodiversity_index);
}

#[test]
fn finish_stops_the_session_and_snapshots_metrics() {
    let mut session = Session::new(EnvironmentalState::default(), 42);
    session.start();
    session.advance_frame(None);
    let summary = session.finish();
    assert!(!session.is_running());
    assert_eq!(
        summary.final_metrics,
        EcosystemMetrics::compute(session.state())
    );
    assert_eq!(summary.sustainability_index, 48);
}

#[test]
fn baseline_scenario_fixture_loads() {
    let scenario = scenario_loader()
        .load(PathBuf::from("scenarios/baseline.yaml"))
        .expect("scenario parses");
    assert_eq!(scenario.name, "baseline");
    assert_eq!(scenario.seed, 42);
    assert_eq!(scenario.frame_rate, 30);
    assert_eq!(scenario.frames(None), 600);
    assert_eq!(scenario.frames(Some(10)), 10);
    assert_eq!(*scenario.build_session().state(), EnvironmentalState::default());
}

#[test]
fn out_of_domain_scenario_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "name: broken\nstate:\n  co2_levels: 9999\n  forest_cover: 65\n  temperature: 1.2\n  renewable_energy: 25\n  population: 50\n  industry_level: 60"
    )
    .unwrap();

    let err = ScenarioLoader::new(dir.path())
        .load("broken.yaml")
        .expect_err("validation should fail");
    assert!(format!("{err:#}").contains("co2_levels"));
}

#[test]
fn results_summary_serializes_for_the_persistence_collaborator() {
    let summary =
        SimulationResultsSummary::build(42, &metrics_with(68, 75), &EnvironmentalState::default());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["xp_earned"], 136);
    assert_eq!(json["final_metrics"]["air_quality"], "Good");
}
