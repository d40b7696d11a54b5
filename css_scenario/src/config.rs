use std::{fs::File, path::Path};

use nalgebra::Vector3;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};

use crate::ScenarioErrors;

/// Astronomical unit in meters
pub const AU: f64 = 1.49597870693e11;

/// Upper bound on the number of steps of one run, the history is kept in memory.
pub const MAX_STEPS: usize = 10_000_000;

/// Which variant of the scenario to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSetup {
    pub constellation: bool,
    pub platform: bool,
    pub eclipse: bool,
    pub kelly: bool,
}

impl ScenarioSetup {
    /// Four digit tag, one per flag, used to name the result folder.
    pub fn tag(&self) -> String {
        [self.constellation, self.platform, self.eclipse, self.kelly]
            .iter()
            .map(|flag| if *flag { '1' } else { '0' })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub setup: ScenarioSetup,
    /// s
    pub duration: f64,
    /// s
    pub step: f64,
    /// rad/s about body z
    pub spin_rate: f64,
    /// inertial sun position, m
    pub r_sun: Vector3<f64>,
    /// inertial spacecraft position, m
    pub r_spacecraft: Vector3<f64>,
    /// rad
    pub fov: f64,
    pub scale_factor: f64,
    /// used when `setup.kelly` is set
    pub kelly_factor: f64,
    /// used when `setup.eclipse` is set
    pub shadow_factor: f64,
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            setup: ScenarioSetup::default(),
            duration: 3000.0,
            step: 1.0,
            spin_rate: 1f64.to_radians(),
            r_sun: Vector3::zeros(),
            r_spacecraft: Vector3::new(-AU, 0.0, 0.0),
            fov: 80f64.to_radians(),
            scale_factor: 2.0,
            kelly_factor: 0.2,
            shadow_factor: 0.5,
            seed: 0,
        }
    }
}

impl ScenarioConfig {
    pub fn from_file(path: &Path) -> Result<Self, ScenarioErrors> {
        let file = File::open(path)?;
        Ok(ron::de::from_reader(file)?)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ScenarioErrors> {
        let text = to_string_pretty(self, PrettyConfig::new())?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Number of steps after the initial one.
    pub fn steps(&self) -> Result<usize, ScenarioErrors> {
        let invalid = ScenarioErrors::InvalidTiming {
            duration: self.duration,
            step: self.step,
        };
        if !(self.step > 0.0 && self.duration >= 0.0 && self.duration.is_finite()) {
            return Err(invalid);
        }
        let steps = (self.duration / self.step).round();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(invalid);
        }
        Ok(steps as usize)
    }
}
