use serde::{Deserialize, Serialize};

/// Order of the body axes about which the three angles are applied.
/// `ZYX` is the aerospace 3-2-1 (yaw, pitch, roll) sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum EulerSequence {
    #[default]
    ZYX,
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    XYX,
    XZX,
    YXY,
    YZY,
    ZXZ,
    ZYZ,
}

/// Intrinsic Euler angles in radians.
/// `phi` is applied first about the first axis of the sequence,
/// `theta` about the second and `psi` about the third.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
    pub sequence: EulerSequence,
}

impl EulerAngles {
    pub fn new(phi: f64, theta: f64, psi: f64, sequence: EulerSequence) -> Self {
        Self {
            phi,
            theta,
            psi,
            sequence,
        }
    }

    /// 3-2-1 angles in the conventional yaw, pitch, roll argument order.
    pub fn yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self::new(yaw, pitch, roll, EulerSequence::ZYX)
    }
}
