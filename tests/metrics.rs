use ecosphere::{AirQuality, EcosystemMetrics, EnvironmentalState};

fn state(
    co2: f64,
    forest: f64,
    temp: f64,
    renewable: f64,
    industry: f64,
) -> EnvironmentalState {
    EnvironmentalState {
        co2_levels: co2,
        forest_cover: forest,
        temperature: temp,
        renewable_energy: renewable,
        population: 50.0,
        industry_level: industry,
    }
}

#[test]
fn golden_scenario_matches_formulas() {
    let metrics = EcosystemMetrics::compute(&state(410.0, 65.0, 1.2, 25.0, 60.0));
    assert_eq!(metrics.species_count, 1320);
    assert_eq!(metrics.air_quality, AirQuality::Excellent);
    assert_eq!(metrics.carbon_storage, 1.6);
    assert_eq!(metrics.biodiversity_index, 28);
    assert_eq!(metrics.sustainability_score, 48);
}

#[test]
fn air_quality_is_a_step_function_of_adjusted_co2() {
    // co2 410, renewable 25 -> adjusted 360.
    assert_eq!(
        EcosystemMetrics::compute(&state(410.0, 65.0, 1.2, 25.0, 60.0)).air_quality,
        AirQuality::Excellent
    );
    assert_eq!(
        EcosystemMetrics::compute(&state(460.0, 65.0, 1.2, 0.0, 60.0)).air_quality,
        AirQuality::Poor
    );
    // Thresholds are strict: adjusted exactly 450/420/380 falls to the next
    // band down.
    assert_eq!(
        EcosystemMetrics::compute(&state(450.0, 65.0, 1.2, 0.0, 60.0)).air_quality,
        AirQuality::Moderate
    );
    assert_eq!(
        EcosystemMetrics::compute(&state(420.0, 65.0, 1.2, 0.0, 60.0)).air_quality,
        AirQuality::Good
    );
    assert_eq!(
        EcosystemMetrics::compute(&state(380.0, 65.0, 1.2, 0.0, 60.0)).air_quality,
        AirQuality::Excellent
    );
    assert_eq!(
        EcosystemMetrics::compute(&state(381.0, 65.0, 1.2, 0.0, 60.0)).air_quality,
        AirQuality::Good
    );
}

#[test]
fn indices_clamp_at_domain_corners() {
    let worst = EcosystemMetrics::compute(&state(500.0, 0.0, 5.0, 0.0, 100.0));
    assert_eq!(worst.biodiversity_index, 0);
    assert_eq!(worst.sustainability_score, 0);
    assert_eq!(worst.carbon_storage, 0.0);
    assert!(worst.species_count >= 100);

    let best = EcosystemMetrics::compute(&state(350.0, 100.0, -2.0, 100.0, 0.0));
    assert_eq!(best.biodiversity_index, 100);
    assert_eq!(best.sustainability_score, 100);
    assert_eq!(best.air_quality, AirQuality::Excellent);
}

#[test]
fn species_count_never_drops_below_floor() {
    // Within documented domains the raw value stays well above the floor.
    let worst = EcosystemMetrics::compute(&state(500.0, 0.0, 5.0, 0.0, 100.0));
    assert_eq!(worst.species_count, 500);
    // The floor is the only defense against hostile out-of-domain input.
    let hostile = EcosystemMetrics::compute(&state(500.0, 0.0, 12.0, 0.0, 100.0));
    assert_eq!(hostile.species_count, 100);
}

#[test]
fn compute_is_referentially_transparent() {
    let input = state(432.0, 47.0, 2.3, 61.0, 18.0);
    let first = EcosystemMetrics::compute(&input);
    let second = EcosystemMetrics::compute(&input);
    assert_eq!(first, second);
}

#[test]
fn placeholder_is_not_derived_from_the_formulas() {
    let placeholder = EcosystemMetrics::placeholder();
    assert_eq!(placeholder.species_count, 1247);
    assert_eq!(placeholder.biodiversity_index, 75);
    assert_eq!(placeholder.sustainability_score, 68);
    // The default slider state computes to a different scorecard.
    assert_ne!(
        EcosystemMetrics::compute(&EnvironmentalState::default()),
        placeholder
    );
}
