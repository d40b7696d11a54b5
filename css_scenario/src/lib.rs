//! Coarse sun sensors on a spacecraft spinning at a fixed position 1 AU from the sun.
//!
//! Two units are evaluated either one by one or grouped in a constellation,
//! optionally mounted on a yawed platform, eclipsed and Kelly distorted.

pub mod config;
pub mod kinematics;
pub mod scenario;

use coarse_sun_sensor::{ConfigurationErrors, ConstellationErrors, InputErrors};
use sim_result::ResultErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioErrors {
    #[error("{0}")]
    Configuration(#[from] ConfigurationErrors),
    #[error("{0}")]
    Constellation(#[from] ConstellationErrors),
    #[error("{0}")]
    Input(#[from] InputErrors),
    #[error("{0}")]
    Result(#[from] ResultErrors),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("{0}")]
    RonWrite(#[from] ron::Error),
    #[error("invalid timing: duration {duration} s with step {step} s")]
    InvalidTiming { duration: f64, step: f64 },
}
