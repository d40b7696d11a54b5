use crate::RotationTrait;
use crate::euler_angles::{EulerAngles, EulerSequence};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A struct representing a 3x3 rotation matrix.
/// The columns are the axes of the new frame expressed in the old frame,
/// so the transpose is the direction cosine matrix [new <- old].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix(pub Matrix3<f64>);

impl RotationMatrix {
    /// Right hand rotation of `angle` radians about the x axis.
    pub fn about_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c))
    }

    /// Right hand rotation of `angle` radians about the y axis.
    pub fn about_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c))
    }

    /// Right hand rotation of `angle` radians about the z axis.
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self(Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0))
    }
}

impl From<EulerAngles> for RotationMatrix {
    /// Converts intrinsic `EulerAngles` into a `RotationMatrix`.
    fn from(euler_angles: EulerAngles) -> RotationMatrix {
        let x = RotationMatrix::about_x;
        let y = RotationMatrix::about_y;
        let z = RotationMatrix::about_z;

        let (phi, theta, psi) = (euler_angles.phi, euler_angles.theta, euler_angles.psi);
        match euler_angles.sequence {
            EulerSequence::XYZ => x(phi) * y(theta) * z(psi),
            EulerSequence::XZY => x(phi) * z(theta) * y(psi),
            EulerSequence::YXZ => y(phi) * x(theta) * z(psi),
            EulerSequence::YZX => y(phi) * z(theta) * x(psi),
            EulerSequence::ZXY => z(phi) * x(theta) * y(psi),
            EulerSequence::ZYX => z(phi) * y(theta) * x(psi),
            EulerSequence::XYX => x(phi) * y(theta) * x(psi),
            EulerSequence::YXY => y(phi) * x(theta) * y(psi),
            EulerSequence::XZX => x(phi) * z(theta) * x(psi),
            EulerSequence::ZXZ => z(phi) * x(theta) * z(psi),
            EulerSequence::YZY => y(phi) * z(theta) * y(psi),
            EulerSequence::ZYZ => z(phi) * y(theta) * z(psi),
        }
    }
}

impl RotationTrait for RotationMatrix {
    fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.0 * v
    }

    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.0.transpose() * v
    }

    fn inv(&self) -> Self {
        Self(self.0.transpose())
    }

    fn identity() -> Self {
        Self(Matrix3::identity())
    }
}

impl Mul<RotationMatrix> for RotationMatrix {
    type Output = RotationMatrix;

    /// Composes two rotations, `self` applied first and `rhs` relative to the result.
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        Self(self.0 * rhs.0)
    }
}
