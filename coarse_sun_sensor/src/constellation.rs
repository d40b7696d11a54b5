use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sim_result::{ResultErrors, ResultManager, SimResult};
use thiserror::Error;
use tracing::debug;
use uncertainty::Uncertainty;

use crate::{
    input::{shadow_factor, InputErrors, SunInput},
    sensor::{CoarseSunSensor, CoarseSunSensorBuilder, ConfigurationErrors},
};

#[derive(Debug, Error)]
pub enum ConstellationErrors {
    #[error("sensor {index} ('{name}'): {source}")]
    Member {
        index: usize,
        name: String,
        #[source]
        source: ConfigurationErrors,
    },
    #[error("{0}")]
    Input(#[from] InputErrors),
}

/// An ordered list of sensor configurations evaluated as one unit.
/// Sensor `i` reports into element `i` of the constellation signal vector.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CssConstellationBuilder {
    pub name: String,
    sensors: Vec<CoarseSunSensorBuilder>,
}

impl CssConstellationBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sensors: Vec::new(),
        }
    }

    pub fn with_sensor(mut self, sensor: CoarseSunSensorBuilder) -> Self {
        self.sensors.push(sensor);
        self
    }

    pub fn add_sensor(&mut self, sensor: CoarseSunSensorBuilder) {
        self.sensors.push(sensor);
    }

    pub fn sensors(&self) -> &[CoarseSunSensorBuilder] {
        &self.sensors
    }

    /// Builds the nominal constellation. Members without a fixed seed get
    /// seeds drawn from one master generator.
    pub fn build(&self) -> Result<CssConstellation, ConstellationErrors> {
        let mut rng = SmallRng::seed_from_u64(rand::rng().random());
        self.sample(true, &mut rng)
    }
}

impl Uncertainty for CssConstellationBuilder {
    type Output = CssConstellation;
    type Error = ConstellationErrors;

    fn sample(
        &self,
        nominal: bool,
        rng: &mut SmallRng,
    ) -> Result<CssConstellation, ConstellationErrors> {
        let sensors = self
            .sensors
            .iter()
            .enumerate()
            .map(|(index, builder)| {
                builder
                    .sample(nominal, rng)
                    .map_err(|source| ConstellationErrors::Member {
                        index,
                        name: builder.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("css constellation '{}' with {} sensors", self.name, sensors.len());
        Ok(CssConstellation::new(&self.name, sensors))
    }
}

#[derive(Clone, Debug, Default)]
pub struct CssConstellationState {
    pub signals: Vec<f64>,
}

#[derive(Debug)]
pub struct CssConstellation {
    pub name: String,
    sensors: Vec<CoarseSunSensor>,
    pub state: CssConstellationState,
    result_id: Option<u32>,
}

impl CssConstellation {
    pub fn new(name: &str, sensors: Vec<CoarseSunSensor>) -> Self {
        let state = CssConstellationState {
            signals: vec![0.0; sensors.len()],
        };
        Self {
            name: name.to_string(),
            sensors,
            state,
            result_id: None,
        }
    }

    /// Evaluates every member in order against the shared inputs.
    /// Inputs are checked once up front, so either every member's noise
    /// stream advances by one draw or none does.
    pub fn update(
        &mut self,
        sun: &SunInput,
        eclipse: Option<f64>,
    ) -> Result<&[f64], ConstellationErrors> {
        let sun_hat = sun.unit_direction()?;
        let shadow = shadow_factor(eclipse)?;

        for (signal, sensor) in self.state.signals.iter_mut().zip(self.sensors.iter_mut()) {
            *signal = sensor.measure(&sun_hat, shadow).signal;
        }
        Ok(&self.state.signals)
    }

    pub fn sensors(&self) -> &[CoarseSunSensor] {
        &self.sensors
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

impl SimResult for CssConstellation {
    fn new_result(&mut self, results: &mut ResultManager) -> Result<(), ResultErrors> {
        let sensor_folder_path = results.result_path.join("sensors");
        let mut headers = vec!["time".to_string()];
        headers.extend((0..self.sensors.len()).map(|i| format!("signal[{}]", i)));
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        let id = results.new_writer(&self.name, &sensor_folder_path, &headers)?;
        self.result_id = Some(id);
        Ok(())
    }

    fn write_result(&self, t: f64, results: &mut ResultManager) -> Result<(), ResultErrors> {
        if let Some(id) = self.result_id {
            let mut content = Vec::with_capacity(self.state.signals.len() + 1);
            content.push(t.to_string());
            content.extend(self.state.signals.iter().map(f64::to_string));
            results.write_record(id, &content)?;
        }
        Ok(())
    }
}
