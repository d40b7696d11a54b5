use rotations::rotation_matrix::RotationMatrix;
use serde::{Deserialize, Serialize};

/// Constant rate spin about the body z axis, starting aligned with the inertial frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinKinematics {
    /// rad/s
    pub rate: f64,
}

impl SpinKinematics {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Rotation from the inertial frame to the body frame at time `t`.
    pub fn attitude(&self, t: f64) -> RotationMatrix {
        RotationMatrix::about_z(self.rate * t)
    }
}
