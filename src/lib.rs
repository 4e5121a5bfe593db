pub mod entity;
pub mod metrics;
pub mod particle;
pub mod render;
pub mod rng;
pub mod scenario;
pub mod scheduler;
pub mod session;
pub mod state;

pub use metrics::{AirQuality, EcosystemMetrics};
pub use scenario::{Scenario, ScenarioLoader};
pub use session::{ConservationAction, Session, SimulationResultsSummary};
pub use state::{EnvironmentalState, Parameter};
