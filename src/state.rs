use serde::{Deserialize, Serialize};

/// Environmental control parameters for one simulation session.
///
/// Values are owned by the session controller and replaced wholesale on each
/// parameter change. Callers are expected to keep values inside the documented
/// domains; [`EnvironmentalState::set`] clamps for convenience.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalState {
    /// Atmospheric CO2 in ppm, domain [350, 500].
    pub co2_levels: f64,
    /// Forest cover in percent, domain [0, 100].
    pub forest_cover: f64,
    /// Degrees above the pre-industrial baseline, domain [-2, 5].
    pub temperature: f64,
    /// Renewable share of energy production in percent, domain [0, 100].
    pub renewable_energy: f64,
    /// Population density in percent, domain [0, 100]. Accepted as input but
    /// consumed by no metric formula yet.
    pub population: f64,
    /// Industrial activity in percent, domain [0, 100].
    pub industry_level: f64,
}

impl EnvironmentalState {
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Co2Levels => self.co2_levels,
            Parameter::ForestCover => self.forest_cover,
            Parameter::Temperature => self.temperature,
            Parameter::RenewableEnergy => self.renewable_energy,
            Parameter::Population => self.population,
            Parameter::IndustryLevel => self.industry_level,
        }
    }

    /// Sets a parameter, clamped to its domain.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let (min, max) = parameter.domain();
        let value = value.clamp(min, max);
        match parameter {
            Parameter::Co2Levels => self.co2_levels = value,
            Parameter::ForestCover => self.forest_cover = value,
            Parameter::Temperature => self.temperature = value,
            Parameter::RenewableEnergy => self.renewable_energy = value,
            Parameter::Population => self.population = value,
            Parameter::IndustryLevel => self.industry_level = value,
        }
    }

    pub fn in_domain(&self) -> bool {
        Parameter::ALL.iter().all(|&p| {
            let (min, max) = p.domain();
            let value = self.get(p);
            value >= min && value <= max
        })
    }
}

impl Default for EnvironmentalState {
    /// The platform's starting slider positions.
    fn default() -> Self {
        Self {
            co2_levels: 410.0,
            forest_cover: 65.0,
            temperature: 1.2,
            renewable_energy: 25.0,
            population: 50.0,
            industry_level: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Co2Levels,
    ForestCover,
    Temperature,
    RenewableEnergy,
    Population,
    IndustryLevel,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Co2Levels,
        Parameter::ForestCover,
        Parameter::Temperature,
        Parameter::RenewableEnergy,
        Parameter::Population,
        Parameter::IndustryLevel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Parameter::Co2Levels => "co2_levels",
            Parameter::ForestCover => "forest_cover",
            Parameter::Temperature => "temperature",
            Parameter::RenewableEnergy => "renewable_energy",
            Parameter::Population => "population",
            Parameter::IndustryLevel => "industry_level",
        }
    }

    pub fn domain(self) -> (f64, f64) {
        match self {
            Parameter::Co2Levels => (350.0, 500.0),
            Parameter::Temperature => (-2.0, 5.0),
            Parameter::ForestCover
            | Parameter::RenewableEnergy
            | Parameter::Population
            | Parameter::IndustryLevel => (0.0, 100.0),
        }
    }
}
