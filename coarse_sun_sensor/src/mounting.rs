use nalgebra::Vector3;
use rand::rngs::SmallRng;
use rotations::{
    euler_angles::EulerAngles, rotation_matrix::RotationMatrix, RotationTrait,
};
use serde::{Deserialize, Serialize};
use uncertainty::{SimValue, Uncertainty, UncertaintyErrors};

/// How the sensor boresight is specified in the body frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mounting {
    /// Boresight given directly in body components.
    Boresight(Vector3<f64>),
    /// Boresight given by azimuth and elevation on a common sensor platform.
    Platform(PlatformMounting),
}

impl Default for Mounting {
    fn default() -> Self {
        Mounting::Boresight(Vector3::x())
    }
}

impl Mounting {
    /// Resolves the mounting into a body frame boresight, not yet normalized.
    pub fn resolve(
        &self,
        nominal: bool,
        rng: &mut SmallRng,
    ) -> Result<Vector3<f64>, UncertaintyErrors> {
        match self {
            Mounting::Boresight(boresight) => Ok(*boresight),
            Mounting::Platform(platform) => platform.sample(nominal, rng),
        }
    }
}

/// A sensor mounted on a platform frame P.
/// `body_to_platform` orients P relative to the body (3-2-1 angles by default),
/// `azimuth` is measured in the platform x-y plane from +x toward +y and
/// `elevation` out of that plane toward +z.
/// The perturbations are added to the angles before resolving, for misalignment studies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformMounting {
    pub body_to_platform: EulerAngles,
    pub azimuth: f64,
    pub elevation: f64,
    pub azimuth_perturbation: SimValue,
    pub elevation_perturbation: SimValue,
}

impl PlatformMounting {
    pub fn new(body_to_platform: EulerAngles, azimuth: f64, elevation: f64) -> Self {
        Self {
            body_to_platform,
            azimuth,
            elevation,
            ..Default::default()
        }
    }
}

impl Uncertainty for PlatformMounting {
    type Output = Vector3<f64>;
    type Error = UncertaintyErrors;

    fn sample(&self, nominal: bool, rng: &mut SmallRng) -> Result<Vector3<f64>, UncertaintyErrors> {
        let azimuth = self.azimuth + self.azimuth_perturbation.sample(nominal, rng)?;
        let elevation = self.elevation + self.elevation_perturbation.sample(nominal, rng)?;
        let body_to_platform = RotationMatrix::from(self.body_to_platform);
        Ok(platform_boresight(&body_to_platform, azimuth, elevation))
    }
}

/// Body frame boresight of a sensor at `azimuth`, `elevation` on a platform.
pub fn platform_boresight(
    body_to_platform: &RotationMatrix,
    azimuth: f64,
    elevation: f64,
) -> Vector3<f64> {
    let (sa, ca) = azimuth.sin_cos();
    let (se, ce) = elevation.sin_cos();
    let n_platform = Vector3::new(ce * ca, ce * sa, se);
    body_to_platform.rotate(&n_platform)
}
