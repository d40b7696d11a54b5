use rand::{rngs::SmallRng, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};

/// Zero mean gaussian noise with its own generator stream.
/// Each sensor owns one so constellation members never share state.
#[derive(Clone, Debug)]
pub struct Noise {
    dist: Normal<f64>,
    rng: SmallRng,
    seed: u64,
}

impl Noise {
    pub fn new(std: f64, seed: u64) -> Result<Self, NormalError> {
        Ok(Self {
            dist: Normal::new(0.0, std)?,
            rng: SmallRng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn std(&self) -> f64 {
        self.dist.std_dev()
    }

    /// Restarts the stream from its seed.
    pub fn reset(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }

    pub fn sample(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Noise::new(0.1, 5).unwrap();
        let mut b = Noise::new(0.1, 5).unwrap();
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_reset() {
        let mut a = Noise::new(0.1, 9).unwrap();
        let first = a.sample();
        a.sample();
        a.reset();
        assert_eq!(a.sample(), first);
    }

    #[test]
    fn test_sample_statistics() {
        let mut noise = Noise::new(0.5, 1234).unwrap();
        let n = 20000;
        let samples: Vec<f64> = (0..n).map(|_| noise.sample()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.02);
        assert!((var.sqrt() - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_negative_std_rejected() {
        assert!(Noise::new(-0.1, 0).is_err());
    }
}
