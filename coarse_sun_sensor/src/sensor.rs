use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::NormalError;
use rotations::euler_angles::EulerAngles;
use serde::{Deserialize, Serialize};
use sim_result::{ResultErrors, ResultManager, SimResult};
use thiserror::Error;
use tracing::debug;
use uncertainty::{Distributions, SimValue, Uncertainty, UncertaintyErrors};

use crate::{
    input::{shadow_factor, InputErrors, SunInput},
    mounting::{Mounting, PlatformMounting},
    noise::Noise,
    unit_vector,
};

/// Kelly factors at or below this are treated as off.
const KELLY_EPSILON: f64 = 1e-10;

#[derive(Debug, Error)]
pub enum ConfigurationErrors {
    #[error("field of view half angle {0} rad is outside (0, pi/2]")]
    InvalidFieldOfView(f64),
    #[error("kelly factor {0} is outside [0, 1]")]
    InvalidKellyFactor(f64),
    #[error("scale factor {0} must be finite and non-negative")]
    InvalidScaleFactor(f64),
    #[error("bias {0} must be finite")]
    InvalidBias(f64),
    #[error("noise standard deviation {0} must be finite and non-negative")]
    InvalidNoiseStd(f64),
    #[error("saturation band [{0}, {1}] is invalid")]
    InvalidSaturation(f64, f64),
    #[error("boresight has zero length")]
    ZeroBoresight,
    #[error("{0}")]
    Noise(#[from] NormalError),
    #[error("{0}")]
    Uncertainty(#[from] UncertaintyErrors),
}

/// Output of one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CssMeasurement {
    /// Corrupted, clamped sensor output
    pub signal: f64,
    /// Scaled signal before bias and noise
    pub true_value: f64,
    /// Raw cosine between boresight and sun, not clipped to the field of view
    pub cosine: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct Saturation {
    min: f64,
    max: f64,
}

/// Configuration of a single coarse sun sensor.
/// Units are copied by cloning the builder and overriding what differs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoarseSunSensorBuilder {
    pub name: String,
    mounting: Mounting,
    fov: f64,
    scale_factor: SimValue,
    kelly_factor: f64,
    bias: f64,
    noise_std: f64,
    saturation: Option<Saturation>,
    seed: Option<u64>,
}

impl CoarseSunSensorBuilder {
    /// A unit looking along body +x with a 60 deg half angle and unit scale.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mounting: Mounting::default(),
            fov: 60f64.to_radians(),
            scale_factor: SimValue::new(1.0),
            kelly_factor: 0.0,
            bias: 0.0,
            noise_std: 0.0,
            saturation: None,
            seed: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_boresight(mut self, boresight: Vector3<f64>) -> Self {
        self.mounting = Mounting::Boresight(boresight);
        self
    }

    pub fn with_mounting(mut self, mounting: Mounting) -> Self {
        self.mounting = mounting;
        self
    }

    /// Orients the sensor platform relative to the body.
    /// Switches a directly specified boresight to platform mounting at zero azimuth and elevation.
    pub fn with_body_to_platform(mut self, body_to_platform: EulerAngles) -> Self {
        let mut platform = self.current_platform();
        platform.body_to_platform = body_to_platform;
        self.mounting = Mounting::Platform(platform);
        self
    }

    /// Points the sensor on its platform, keeping the platform orientation.
    pub fn with_azimuth_elevation(mut self, azimuth: f64, elevation: f64) -> Self {
        let mut platform = self.current_platform();
        platform.azimuth = azimuth;
        platform.elevation = elevation;
        self.mounting = Mounting::Platform(platform);
        self
    }

    /// Adds misalignment angles on top of azimuth and elevation.
    pub fn with_direction_perturbation(mut self, azimuth: SimValue, elevation: SimValue) -> Self {
        let mut platform = self.current_platform();
        platform.azimuth_perturbation = azimuth;
        platform.elevation_perturbation = elevation;
        self.mounting = Mounting::Platform(platform);
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor.nominal = scale_factor;
        self
    }

    pub fn with_uncertain_scale_factor_normal(
        mut self,
        mean: f64,
        std: f64,
    ) -> Result<Self, ConfigurationErrors> {
        let dist = Distributions::normal(mean, std)?;
        self.scale_factor = SimValue::new(mean).with_distribution(dist);
        Ok(self)
    }

    pub fn with_kelly_factor(mut self, kelly_factor: f64) -> Self {
        self.kelly_factor = kelly_factor;
        self
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_saturation(mut self, min: f64, max: f64) -> Self {
        self.saturation = Some(Saturation { min, max });
        self
    }

    /// Fixes the noise stream seed instead of drawing one at build time.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn mounting(&self) -> &Mounting {
        &self.mounting
    }

    /// The platform mounting to edit, a default one if the boresight is direct.
    fn current_platform(&self) -> PlatformMounting {
        match &self.mounting {
            Mounting::Platform(platform) => platform.clone(),
            Mounting::Boresight(_) => PlatformMounting::default(),
        }
    }

    /// Builds the nominal sensor, drawing a noise seed from the thread generator if none is set.
    pub fn build(&self) -> Result<CoarseSunSensor, ConfigurationErrors> {
        let mut rng = SmallRng::seed_from_u64(rand::rng().random());
        self.sample(true, &mut rng)
    }

    fn validate(&self, scale_factor: f64) -> Result<(), ConfigurationErrors> {
        if !(self.fov > 0.0 && self.fov <= FRAC_PI_2) {
            return Err(ConfigurationErrors::InvalidFieldOfView(self.fov));
        }
        if !(0.0..=1.0).contains(&self.kelly_factor) {
            return Err(ConfigurationErrors::InvalidKellyFactor(self.kelly_factor));
        }
        if !(scale_factor.is_finite() && scale_factor >= 0.0) {
            return Err(ConfigurationErrors::InvalidScaleFactor(scale_factor));
        }
        if !self.bias.is_finite() {
            return Err(ConfigurationErrors::InvalidBias(self.bias));
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(ConfigurationErrors::InvalidNoiseStd(self.noise_std));
        }
        if let Some(Saturation { min, max }) = self.saturation {
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ConfigurationErrors::InvalidSaturation(min, max));
            }
        }
        Ok(())
    }
}

impl Default for CoarseSunSensorBuilder {
    fn default() -> Self {
        Self::new("css")
    }
}

impl Uncertainty for CoarseSunSensorBuilder {
    type Output = CoarseSunSensor;
    type Error = ConfigurationErrors;

    fn sample(
        &self,
        nominal: bool,
        rng: &mut SmallRng,
    ) -> Result<CoarseSunSensor, ConfigurationErrors> {
        let scale_factor = self.scale_factor.sample(nominal, rng)?;
        self.validate(scale_factor)?;

        let boresight = self.mounting.resolve(nominal, rng)?;
        let boresight = unit_vector(&boresight).ok_or(ConfigurationErrors::ZeroBoresight)?;

        // the seed is drawn even when fixed so dispersions of later sensors don't depend on it
        let drawn_seed: u64 = rng.random();
        let noise = if self.noise_std > 0.0 {
            Some(Noise::new(self.noise_std, self.seed.unwrap_or(drawn_seed))?)
        } else {
            None
        };

        debug!(
            "css '{}' boresight [{:.6}, {:.6}, {:.6}] fov {:.3} deg scale {}",
            self.name,
            boresight[0],
            boresight[1],
            boresight[2],
            self.fov.to_degrees(),
            scale_factor
        );

        Ok(CoarseSunSensor {
            name: self.name.clone(),
            parameters: CoarseSunSensorParameters {
                boresight,
                fov: self.fov,
                cos_fov: self.fov.cos(),
                scale_factor,
                kelly_factor: self.kelly_factor,
                bias: self.bias,
                noise,
                saturation: self.saturation,
            },
            state: CoarseSunSensorState::default(),
            result_id: None,
        })
    }
}

#[derive(Debug)]
struct CoarseSunSensorParameters {
    boresight: Vector3<f64>,
    fov: f64,
    cos_fov: f64,
    scale_factor: f64,
    kelly_factor: f64,
    bias: f64,
    noise: Option<Noise>,
    saturation: Option<Saturation>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CoarseSunSensorState {
    pub measurement: CssMeasurement,
    /// Last noise draw in output units
    pub noise: f64,
}

/// A coarse sun sensor with cosine response, field of view clipping,
/// Kelly distortion, eclipse attenuation, bias and gaussian noise.
#[derive(Debug)]
pub struct CoarseSunSensor {
    pub name: String,
    parameters: CoarseSunSensorParameters,
    pub state: CoarseSunSensorState,
    result_id: Option<u32>,
}

impl CoarseSunSensor {
    /// Evaluates the sensor for one step.
    /// `eclipse` is the shadow factor of a connected eclipse input, full sun when `None`.
    /// Invalid inputs leave the noise stream untouched.
    pub fn update(
        &mut self,
        sun: &SunInput,
        eclipse: Option<f64>,
    ) -> Result<CssMeasurement, InputErrors> {
        let sun_hat = sun.unit_direction()?;
        let shadow = shadow_factor(eclipse)?;
        Ok(self.measure(&sun_hat, shadow))
    }

    /// Evaluates against an already validated unit sun vector and shadow factor.
    pub(crate) fn measure(&mut self, sun_hat: &Vector3<f64>, shadow: f64) -> CssMeasurement {
        let p = &mut self.parameters;
        let cosine = p.boresight.dot(sun_hat);

        let mut direct = if cosine >= p.cos_fov { cosine } else { 0.0 };
        direct *= kelly_fit(direct, p.kelly_factor);
        direct *= shadow;

        let true_value = direct * p.scale_factor;
        let mut signal = true_value + p.bias * p.scale_factor;

        let noise = match &mut p.noise {
            Some(noise) => noise.sample() * p.scale_factor,
            None => 0.0,
        };
        signal += noise;

        signal = signal.max(0.0);
        if let Some(Saturation { min, max }) = p.saturation {
            signal = signal.clamp(min, max);
        }

        let measurement = CssMeasurement {
            signal,
            true_value,
            cosine,
        };
        self.state = CoarseSunSensorState { measurement, noise };
        measurement
    }

    pub fn boresight(&self) -> &Vector3<f64> {
        &self.parameters.boresight
    }

    pub fn fov(&self) -> f64 {
        self.parameters.fov
    }

    pub fn scale_factor(&self) -> f64 {
        self.parameters.scale_factor
    }

    pub fn noise_seed(&self) -> Option<u64> {
        self.parameters.noise.as_ref().map(Noise::seed)
    }
}

/// Kelly roll-off `1 - exp(-c^2 / k)` applied to the clipped cosine `c`.
/// Identity when `k` is zero, strongest where the cosine is small.
pub fn kelly_fit(cosine: f64, kelly_factor: f64) -> f64 {
    if kelly_factor > KELLY_EPSILON {
        1.0 - (-cosine * cosine / kelly_factor).exp()
    } else {
        1.0
    }
}

impl SimResult for CoarseSunSensor {
    fn new_result(&mut self, results: &mut ResultManager) -> Result<(), ResultErrors> {
        let sensor_folder_path = results.result_path.join("sensors");
        let id = results.new_writer(
            &self.name,
            &sensor_folder_path,
            &["time", "signal", "true_value", "cosine"],
        )?;
        self.result_id = Some(id);
        Ok(())
    }

    fn write_result(&self, t: f64, results: &mut ResultManager) -> Result<(), ResultErrors> {
        if let Some(id) = self.result_id {
            let m = &self.state.measurement;
            results.write_record(
                id,
                &[
                    t.to_string(),
                    m.signal.to_string(),
                    m.true_value.to_string(),
                    m.cosine.to_string(),
                ],
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;
    const TOL: f64 = 1e-12;

    fn css() -> CoarseSunSensorBuilder {
        CoarseSunSensorBuilder::new("CSS1_sensor")
            .with_boresight(Vector3::new(1.0, 0.0, 0.0))
            .with_fov(80f64.to_radians())
            .with_scale_factor(2.0)
    }

    fn signal(sensor: &mut CoarseSunSensor, sun: Vector3<f64>, eclipse: Option<f64>) -> f64 {
        sensor.update(&SunInput::new(sun), eclipse).unwrap().signal
    }

    #[test]
    fn test_on_boresight() {
        let mut sensor = css().build().unwrap();
        assert_abs_diff_eq!(signal(&mut sensor, Vector3::x(), None), 2.0, epsilon = TOL);
    }

    #[test]
    fn test_outside_fov() {
        let mut sensor = css().build().unwrap();
        assert_eq!(signal(&mut sensor, Vector3::y(), None), 0.0);
        // facing away gives zero rather than a negative signal
        assert_eq!(signal(&mut sensor, -Vector3::x(), None), 0.0);
    }

    #[test]
    fn test_45_deg() {
        let mut sensor = css().build().unwrap();
        let sun = Vector3::new(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0);
        let s = signal(&mut sensor, sun, None);
        assert_abs_diff_eq!(s, 2.0 * FRAC_PI_4.cos(), epsilon = TOL);
        assert_abs_diff_eq!(s, 1.4142135623730951, epsilon = 1e-9);
    }

    #[test]
    fn test_fov_boundary_inclusive() {
        let fov = 80f64.to_radians();
        let mut sensor = css().build().unwrap();
        let sun = Vector3::new(fov.cos(), fov.sin(), 0.0);
        assert_abs_diff_eq!(signal(&mut sensor, sun, None), 2.0 * fov.cos(), epsilon = TOL);

        let beyond = fov + 1e-6;
        let sun = Vector3::new(beyond.cos(), beyond.sin(), 0.0);
        assert_eq!(signal(&mut sensor, sun, None), 0.0);
    }

    #[test]
    fn test_sun_vector_not_normalized() {
        let mut sensor = css().build().unwrap();
        let sun = Vector3::new(1.495978707e11, 1.495978707e11, 0.0);
        assert_abs_diff_eq!(
            signal(&mut sensor, sun, None),
            2.0 * FRAC_PI_4.cos(),
            epsilon = TOL
        );
    }

    #[test]
    fn test_raw_cosine_reported_outside_fov() {
        let mut sensor = css().build().unwrap();
        let m = sensor.update(&SunInput::new(-Vector3::x()), None).unwrap();
        assert_abs_diff_eq!(m.cosine, -1.0, epsilon = TOL);
        assert_eq!(m.true_value, 0.0);
    }

    #[test]
    fn test_eclipse_halves_signal() {
        let mut sensor = css().build().unwrap();
        for angle in [0.0, 0.3, 0.9, 1.3] {
            let sun = Vector3::new(f64::cos(angle), f64::sin(angle), 0.0);
            let full = signal(&mut sensor, sun, Some(1.0));
            let half = signal(&mut sensor, sun, Some(0.5));
            assert_eq!(half, 0.5 * full);
        }
    }

    #[test]
    fn test_no_eclipse_input_is_full_sun() {
        let mut sensor = css().build().unwrap();
        let sun = Vector3::new(0.8, 0.6, 0.0);
        assert_eq!(signal(&mut sensor, sun, None), signal(&mut sensor, sun, Some(1.0)));
    }

    #[test]
    fn test_kelly_zero_is_identity() {
        let mut plain = css().build().unwrap();
        let mut kelly = css().with_kelly_factor(0.0).build().unwrap();
        for i in 0..=90 {
            let angle = (i as f64).to_radians();
            let sun = Vector3::new(angle.cos(), angle.sin(), 0.0);
            assert_eq!(signal(&mut plain, sun, None), signal(&mut kelly, sun, None));
        }
    }

    #[test]
    fn test_kelly_suppresses_edge() {
        let mut plain = css().build().unwrap();
        let mut kelly = css().with_kelly_factor(0.2).build().unwrap();

        let near_edge = 75f64.to_radians();
        let sun = Vector3::new(near_edge.cos(), near_edge.sin(), 0.0);
        let ratio_edge = signal(&mut kelly, sun, None) / signal(&mut plain, sun, None);

        let near_center = 10f64.to_radians();
        let sun = Vector3::new(near_center.cos(), near_center.sin(), 0.0);
        let ratio_center = signal(&mut kelly, sun, None) / signal(&mut plain, sun, None);

        assert!(ratio_edge < ratio_center);
        assert!(ratio_center < 1.0);
        let c = near_edge.cos();
        assert_abs_diff_eq!(ratio_edge, 1.0 - (-c * c / 0.2).exp(), epsilon = TOL);
    }

    #[test]
    fn test_kelly_fit() {
        assert_eq!(kelly_fit(0.5, 0.0), 1.0);
        assert_eq!(kelly_fit(0.0, 0.2), 0.0);
        assert_abs_diff_eq!(kelly_fit(1.0, 0.2), 1.0 - (-5.0f64).exp(), epsilon = TOL);
    }

    #[test]
    fn test_bias() {
        let mut sensor = css().with_bias(0.1).build().unwrap();
        let m = sensor.update(&SunInput::new(Vector3::x()), None).unwrap();
        assert_abs_diff_eq!(m.signal, 2.2, epsilon = TOL);
        assert_abs_diff_eq!(m.true_value, 2.0, epsilon = TOL);
        // outside the field of view the bias still shows
        assert_abs_diff_eq!(signal(&mut sensor, Vector3::y(), None), 0.2, epsilon = TOL);
    }

    #[test]
    fn test_negative_bias_clamped() {
        let mut sensor = css().with_bias(-0.5).build().unwrap();
        assert_eq!(signal(&mut sensor, Vector3::y(), None), 0.0);
    }

    #[test]
    fn test_saturation() {
        let mut sensor = css().with_saturation(0.0, 1.5).build().unwrap();
        assert_eq!(signal(&mut sensor, Vector3::x(), None), 1.5);
    }

    #[test]
    fn test_noise_reproducible_with_seed() {
        let builder = css().with_noise_std(0.01).with_seed(99);
        let mut a = builder.build().unwrap();
        let mut b = builder.build().unwrap();
        assert_eq!(a.noise_seed(), Some(99));
        let sun = Vector3::new(0.9, 0.1, 0.0);
        for _ in 0..20 {
            assert_eq!(signal(&mut a, sun, None), signal(&mut b, sun, None));
        }
    }

    #[test]
    fn test_noise_scaled_and_recorded() {
        let mut sensor = css().with_noise_std(0.01).with_seed(1).build().unwrap();
        let m = sensor.update(&SunInput::new(Vector3::x()), None).unwrap();
        assert_abs_diff_eq!(m.signal, m.true_value + sensor.state.noise, epsilon = TOL);
        assert!(sensor.state.noise != 0.0);
        assert!(sensor.state.noise.abs() < 0.2);
    }

    #[test]
    fn test_extreme_sun_vector_magnitudes() {
        let mut sensor = css().build().unwrap();
        for scale in [1e200, 1e-170] {
            let sun = Vector3::new(scale, scale, 0.0);
            assert_abs_diff_eq!(
                signal(&mut sensor, sun, None),
                2.0 * FRAC_PI_4.cos(),
                epsilon = TOL
            );
        }
    }

    #[test]
    fn test_zero_sun_vector() {
        let mut sensor = css().with_noise_std(0.01).with_seed(4).build().unwrap();
        let mut reference = css().with_noise_std(0.01).with_seed(4).build().unwrap();
        let err = sensor.update(&SunInput::new(Vector3::zeros()), None);
        assert_eq!(err, Err(InputErrors::ZeroSunDirection));
        // a rejected call does not advance the noise stream
        assert_eq!(
            signal(&mut sensor, Vector3::x(), None),
            signal(&mut reference, Vector3::x(), None)
        );
    }

    #[test]
    fn test_invalid_shadow_factor() {
        let mut sensor = css().build().unwrap();
        let err = sensor.update(&SunInput::new(Vector3::x()), Some(-0.1));
        assert_eq!(err, Err(InputErrors::InvalidShadowFactor(-0.1)));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            css().with_fov(0.0).build(),
            Err(ConfigurationErrors::InvalidFieldOfView(_))
        ));
        assert!(matches!(
            css().with_fov(FRAC_PI_2 + 0.01).build(),
            Err(ConfigurationErrors::InvalidFieldOfView(_))
        ));
        assert!(css().with_fov(FRAC_PI_2).build().is_ok());
        assert!(matches!(
            css().with_kelly_factor(1.5).build(),
            Err(ConfigurationErrors::InvalidKellyFactor(_))
        ));
        assert!(matches!(
            css().with_scale_factor(-1.0).build(),
            Err(ConfigurationErrors::InvalidScaleFactor(_))
        ));
        assert!(matches!(
            css().with_noise_std(-0.1).build(),
            Err(ConfigurationErrors::InvalidNoiseStd(_))
        ));
        assert!(matches!(
            css().with_saturation(2.0, 1.0).build(),
            Err(ConfigurationErrors::InvalidSaturation(_, _))
        ));
        assert!(matches!(
            css().with_boresight(Vector3::zeros()).build(),
            Err(ConfigurationErrors::ZeroBoresight)
        ));
    }

    #[test]
    fn test_boresight_normalized() {
        let sensor = css().with_boresight(Vector3::new(0.0, 0.0, 5.0)).build().unwrap();
        assert_abs_diff_eq!(*sensor.boresight(), Vector3::z(), epsilon = TOL);
        let sensor = css().with_boresight(Vector3::new(0.0, 0.0, 1e-200)).build().unwrap();
        assert_abs_diff_eq!(*sensor.boresight(), Vector3::z(), epsilon = TOL);
    }

    #[test]
    fn test_copy_and_override() {
        let css1 = css().with_kelly_factor(0.2);
        let css2 = css1
            .clone()
            .with_name("CSS2_sensor")
            .with_boresight(Vector3::new(0.0, -1.0, 0.0));
        let mut s1 = css1.build().unwrap();
        let mut s2 = css2.build().unwrap();
        assert_eq!(s2.name, "CSS2_sensor");
        assert_eq!(s2.fov(), s1.fov());
        assert_eq!(s2.scale_factor(), 2.0);
        assert_eq!(
            signal(&mut s1, Vector3::x(), None),
            signal(&mut s2, -Vector3::y(), None)
        );
    }

    #[test]
    fn test_platform_mounting_matches_direct() {
        let platform = EulerAngles::yaw_pitch_roll(FRAC_PI_2, 0.0, 0.0);
        let css1 = css()
            .with_body_to_platform(platform)
            .with_azimuth_elevation(-FRAC_PI_2, 0.0);
        let css2 = css1.clone().with_azimuth_elevation(std::f64::consts::PI, 0.0);
        let s1 = css1.build().unwrap();
        let s2 = css2.build().unwrap();
        assert_abs_diff_eq!(*s1.boresight(), Vector3::new(1.0, 0.0, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(*s2.boresight(), Vector3::new(0.0, -1.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn test_dispersed_scale_factor() {
        let builder = css().with_uncertain_scale_factor_normal(2.0, 0.05).unwrap();
        let nominal = builder.sample(true, &mut SmallRng::seed_from_u64(8)).unwrap();
        assert_eq!(nominal.scale_factor(), 2.0);
        let dispersed = builder.sample(false, &mut SmallRng::seed_from_u64(8)).unwrap();
        assert!(dispersed.scale_factor() != 2.0);
        let again = builder.sample(false, &mut SmallRng::seed_from_u64(8)).unwrap();
        assert_eq!(dispersed.scale_factor(), again.scale_factor());
    }

    #[test]
    fn test_builder_ron_round_trip() {
        let builder = css()
            .with_body_to_platform(EulerAngles::yaw_pitch_roll(FRAC_PI_2, 0.0, 0.0))
            .with_azimuth_elevation(-FRAC_PI_2, 0.0)
            .with_kelly_factor(0.2);
        let text = ron::ser::to_string(&builder).unwrap();
        let parsed: CoarseSunSensorBuilder = ron::from_str(&text).unwrap();
        assert_eq!(parsed.name, builder.name);
        assert_eq!(parsed.mounting(), builder.mounting());
        assert_eq!(parsed.kelly_factor, 0.2);
    }
}
