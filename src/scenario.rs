use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    session::Session,
    state::{EnvironmentalState, Parameter},
};

fn default_seed() -> u64 {
    42
}

fn default_frame_rate() -> u32 {
    30
}

const DEFAULT_FRAMES: u64 = 600;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default)]
    pub frames: Option<u64>,
    #[serde(default)]
    pub state: EnvironmentalState,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario validation error: {0}")]
    Validation(String),
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.name.is_empty() {
            return Err(ScenarioError::Validation(
                "scenario must define a name".into(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ScenarioError::Validation(
                "frame_rate must be greater than zero".into(),
            ));
        }
        for parameter in Parameter::ALL {
            let (min, max) = parameter.domain();
            let value = self.state.get(parameter);
            if value < min || value > max {
                return Err(ScenarioError::Validation(format!(
                    "{} = {} outside domain [{}, {}]",
                    parameter.name(),
                    value,
                    min,
                    max
                )));
            }
        }
        Ok(())
    }

    pub fn frames(&self, override_frames: Option<u64>) -> u64 {
        override_frames.or(self.frames).unwrap_or(DEFAULT_FRAMES)
    }

    pub fn build_session(&self) -> Session {
        Session::new(self.state, self.seed)
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        Ok(scenario)
    }
}
