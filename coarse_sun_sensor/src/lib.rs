//! Coarse sun sensor (CSS) models.
//!
//! A CSS is a photodiode whose output follows the cosine of the angle between
//! its boresight and the sun direction, clipped to its field of view and
//! corrupted by Kelly distortion, eclipse attenuation, bias and noise.
//! [`CoarseSunSensor`] evaluates a single unit, [`CssConstellation`] evaluates an
//! ordered set of units against the same inputs and reports one signal vector.

pub mod constellation;
pub mod input;
pub mod mounting;
pub mod noise;
pub mod sensor;

use nalgebra::Vector3;

pub use constellation::{ConstellationErrors, CssConstellation, CssConstellationBuilder};
pub use input::{InputErrors, SunInput};
pub use mounting::{Mounting, PlatformMounting};
pub use sensor::{
    kelly_fit, CoarseSunSensor, CoarseSunSensorBuilder, ConfigurationErrors, CssMeasurement,
};

/// Returns `v` scaled to unit length, or `None` if it has no usable direction.
/// The largest component is divided out first so very large or very small
/// vectors normalize without overflowing or underflowing.
pub(crate) fn unit_vector(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    let max = v.amax();
    if !max.is_finite() || max == 0.0 {
        return None;
    }
    let scaled = v / max;
    let mag_squared = scaled.norm_squared();
    if !mag_squared.is_finite() {
        return None;
    }
    if (mag_squared - 1.0).abs() >= f64::EPSILON {
        return Some(scaled / mag_squared.sqrt());
    }
    Some(scaled)
}
