use rand::{
    distr::{uniform::Error as UniformError, Uniform},
    rngs::SmallRng,
};
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UncertaintyErrors {
    #[error("{0}")]
    Normal(#[from] NormalError),
    #[error("{0}")]
    Uniform(#[from] UniformError),
}

/// Builders that produce a simulation model, either at its nominal values
/// or with every uncertain parameter drawn from `rng`.
pub trait Uncertainty {
    type Output;
    type Error;
    fn sample(&self, nominal: bool, rng: &mut SmallRng) -> Result<Self::Output, Self::Error>;
}

/// Dispersion applied to a `SimValue` in non-nominal runs.
/// Only the parameters are stored so the builder stays serializable,
/// they are validated when the distribution is created.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Distributions {
    Normal { mean: f64, std: f64 },
    Uniform { low: f64, high: f64 },
}

impl Distributions {
    pub fn normal(mean: f64, std: f64) -> Result<Self, UncertaintyErrors> {
        Normal::new(mean, std)?;
        Ok(Self::Normal { mean, std })
    }

    pub fn uniform(low: f64, high: f64) -> Result<Self, UncertaintyErrors> {
        Uniform::new(low, high)?;
        Ok(Self::Uniform { low, high })
    }

    fn draw(&self, rng: &mut SmallRng) -> Result<f64, UncertaintyErrors> {
        let value = match *self {
            Distributions::Normal { mean, std } => Normal::new(mean, std)?.sample(rng),
            Distributions::Uniform { low, high } => Uniform::new(low, high)?.sample(rng),
        };
        Ok(value)
    }
}

/// A scalar parameter with a nominal value and an optional dispersion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimValue {
    pub nominal: f64,
    dist: Option<Distributions>,
}

impl SimValue {
    pub fn new(nominal: f64) -> Self {
        Self {
            nominal,
            dist: None,
        }
    }

    pub fn with_distribution(mut self, dist: Distributions) -> Self {
        self.dist = Some(dist);
        self
    }

    pub fn set_distribution(&mut self, dist: Distributions) {
        self.dist = Some(dist);
    }

    pub fn distribution(&self) -> Option<&Distributions> {
        self.dist.as_ref()
    }
}

impl From<f64> for SimValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Uncertainty for SimValue {
    type Output = f64;
    type Error = UncertaintyErrors;

    fn sample(&self, nominal: bool, rng: &mut SmallRng) -> Result<f64, UncertaintyErrors> {
        match (&self.dist, nominal) {
            (Some(dist), false) => dist.draw(rng),
            _ => Ok(self.nominal),
        }
    }
}
