use coarse_sun_sensor::{
    CoarseSunSensor, CoarseSunSensorBuilder, CssConstellation, CssConstellationBuilder, SunInput,
};
use nalgebra::Vector3;
use rand::{rngs::SmallRng, SeedableRng};
use rotations::euler_angles::EulerAngles;
use sim_result::{ResultManager, SimResult};
use tracing::{info, warn};
use uncertainty::Uncertainty;

use crate::{config::ScenarioConfig, kinematics::SpinKinematics, ScenarioErrors};

/// Signal histories of one run, `signals[k][i]` is sensor `i` at `time[k]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioHistory {
    pub time: Vec<f64>,
    pub names: Vec<String>,
    pub signals: Vec<Vec<f64>>,
}

impl ScenarioHistory {
    /// Time series of sensor `index`, `None` if there is no such sensor.
    pub fn series(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.names.len() {
            return None;
        }
        self.signals.iter().map(|row| row.get(index).copied()).collect()
    }
}

/// The two units of the scenario. CSS2 is a copy of CSS1 that only changes
/// its name and where it points.
pub fn css_builders(config: &ScenarioConfig) -> [CoarseSunSensorBuilder; 2] {
    let mut css1 = CoarseSunSensorBuilder::new("CSS1_sensor")
        .with_fov(config.fov)
        .with_scale_factor(config.scale_factor);
    if config.setup.kelly {
        css1 = css1.with_kelly_factor(config.kelly_factor);
    }
    css1 = if config.setup.platform {
        css1.with_body_to_platform(EulerAngles::yaw_pitch_roll(90f64.to_radians(), 0.0, 0.0))
            .with_azimuth_elevation(-90f64.to_radians(), 0.0)
    } else {
        css1.with_boresight(Vector3::new(1.0, 0.0, 0.0))
    };

    let css2 = css1.clone().with_name("CSS2_sensor");
    let css2 = if config.setup.platform {
        css2.with_azimuth_elevation(180f64.to_radians(), 0.0)
    } else {
        css2.with_boresight(Vector3::new(0.0, -1.0, 0.0))
    };

    [css1, css2]
}

enum SensorUnits {
    Individual(Vec<CoarseSunSensor>),
    Constellation(CssConstellation),
}

impl SensorUnits {
    fn names(&self) -> Vec<String> {
        let sensors = match self {
            SensorUnits::Individual(sensors) => sensors.as_slice(),
            SensorUnits::Constellation(constellation) => constellation.sensors(),
        };
        sensors.iter().map(|s| s.name.clone()).collect()
    }

    fn update(&mut self, sun: &SunInput, eclipse: Option<f64>) -> Result<Vec<f64>, ScenarioErrors> {
        match self {
            SensorUnits::Individual(sensors) => sensors
                .iter_mut()
                .map(|s| -> Result<f64, ScenarioErrors> { Ok(s.update(sun, eclipse)?.signal) })
                .collect(),
            SensorUnits::Constellation(constellation) => {
                Ok(constellation.update(sun, eclipse)?.to_vec())
            }
        }
    }

    fn new_result(&mut self, results: &mut ResultManager) -> Result<(), ScenarioErrors> {
        match self {
            SensorUnits::Individual(sensors) => {
                for sensor in sensors.iter_mut() {
                    sensor.new_result(results)?;
                }
            }
            SensorUnits::Constellation(constellation) => constellation.new_result(results)?,
        }
        Ok(())
    }

    fn write_result(&self, t: f64, results: &mut ResultManager) -> Result<(), ScenarioErrors> {
        match self {
            SensorUnits::Individual(sensors) => {
                for sensor in sensors {
                    sensor.write_result(t, results)?;
                }
            }
            SensorUnits::Constellation(constellation) => constellation.write_result(t, results)?,
        }
        Ok(())
    }
}

/// Runs the scenario from t = 0 to `config.duration` inclusive.
/// Results are written when a `ResultManager` is given.
pub fn run(
    config: &ScenarioConfig,
    mut results: Option<&mut ResultManager>,
) -> Result<ScenarioHistory, ScenarioErrors> {
    let steps = config.steps()?;
    let samples = steps
        .checked_add(1)
        .ok_or(ScenarioErrors::InvalidTiming {
            duration: config.duration,
            step: config.step,
        })?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let [css1, css2] = css_builders(config);

    let mut units = if config.setup.constellation {
        let builder = CssConstellationBuilder::new("css_array")
            .with_sensor(css1)
            .with_sensor(css2);
        SensorUnits::Constellation(builder.sample(true, &mut rng)?)
    } else {
        SensorUnits::Individual(vec![
            css1.sample(true, &mut rng)?,
            css2.sample(true, &mut rng)?,
        ])
    };

    if let Some(results) = results.as_deref_mut() {
        units.new_result(results)?;
    }

    let eclipse = config.setup.eclipse.then_some(config.shadow_factor);
    let spin = SpinKinematics::new(config.spin_rate);

    info!(
        "running css scenario {} for {} s, {} steps",
        config.setup.tag(),
        config.duration,
        steps
    );

    let mut history = ScenarioHistory {
        time: Vec::with_capacity(samples),
        names: units.names(),
        signals: Vec::with_capacity(samples),
    };

    for k in 0..=steps {
        let t = k as f64 * config.step;
        let sun = SunInput::from_positions(&config.r_sun, &config.r_spacecraft, &spin.attitude(t));
        let signals = units.update(&sun, eclipse)?;
        if let Some(results) = results.as_deref_mut() {
            units.write_result(t, results)?;
        }
        history.time.push(t);
        history.signals.push(signals);
    }

    if let Some(results) = results.as_deref_mut() {
        results.flush()?;
    }

    for (i, name) in history.names.iter().enumerate() {
        if history.signals.iter().all(|row| row[i] == 0.0) {
            warn!("{} never saw the sun", name);
        }
    }
    info!("css scenario {} complete", config.setup.tag());
    Ok(history)
}
