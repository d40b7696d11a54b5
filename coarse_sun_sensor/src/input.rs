use nalgebra::Vector3;
use rotations::{rotation_matrix::RotationMatrix, RotationTrait};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::unit_vector;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InputErrors {
    #[error("sun direction has zero length")]
    ZeroSunDirection,
    #[error("eclipse shadow factor {0} is outside [0, 1]")]
    InvalidShadowFactor(f64),
}

/// Sun direction expressed in the spacecraft body frame, refreshed once per step.
/// It does not have to be unit length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunInput {
    pub direction_body: Vector3<f64>,
}

impl SunInput {
    pub fn new(direction_body: Vector3<f64>) -> Self {
        Self { direction_body }
    }

    /// Builds the body frame sun heading from inertial positions.
    ///
    /// # Arguments
    ///
    /// * `r_sun` - Sun position in the inertial frame.
    /// * `r_spacecraft` - Spacecraft position in the inertial frame.
    /// * `attitude` - Rotation from the inertial frame to the body frame.
    pub fn from_positions(
        r_sun: &Vector3<f64>,
        r_spacecraft: &Vector3<f64>,
        attitude: &RotationMatrix,
    ) -> Self {
        Self {
            direction_body: attitude.transform(&(r_sun - r_spacecraft)),
        }
    }

    pub fn unit_direction(&self) -> Result<Vector3<f64>, InputErrors> {
        unit_vector(&self.direction_body).ok_or(InputErrors::ZeroSunDirection)
    }
}

impl From<Vector3<f64>> for SunInput {
    fn from(direction_body: Vector3<f64>) -> Self {
        Self::new(direction_body)
    }
}

/// Resolves the optional eclipse input, full sun when none is connected.
pub fn shadow_factor(eclipse: Option<f64>) -> Result<f64, InputErrors> {
    match eclipse {
        None => Ok(1.0),
        Some(factor) if (0.0..=1.0).contains(&factor) => Ok(factor),
        Some(factor) => Err(InputErrors::InvalidShadowFactor(factor)),
    }
}
