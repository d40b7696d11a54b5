use std::{
    collections::HashMap,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use csv::Writer;
use thiserror::Error;
use tracing::debug;

pub type ResultWriter = Writer<BufWriter<File>>;

#[derive(Debug, Error)]
pub enum ResultErrors {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("no result writer with id {0}")]
    UnknownWriter(u32),
}

/// Owns one csv writer per named output record under `result_path`.
pub struct ResultManager {
    writers: HashMap<u32, ResultWriter>,
    pub result_path: PathBuf,
    next_id: u32,
}

impl ResultManager {
    pub fn new(result_path: PathBuf) -> Self {
        Self {
            writers: HashMap::new(),
            result_path,
            next_id: 0,
        }
    }

    /// Creates `<path>/<name>.csv`, writes the header row and returns the writer id.
    pub fn new_writer(
        &mut self,
        name: &str,
        path: &Path,
        headers: &[&str],
    ) -> Result<u32, ResultErrors> {
        std::fs::create_dir_all(path)?;

        let filename = path.join(name.to_string() + ".csv");
        let file = File::create(&filename)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));
        writer.write_record(headers)?;
        debug!("created result file {}", filename.display());

        let id = self.next_id;
        self.writers.insert(id, writer);
        self.next_id += 1;
        Ok(id)
    }

    pub fn write_record(&mut self, id: u32, content: &[String]) -> Result<(), ResultErrors> {
        let writer = self
            .writers
            .get_mut(&id)
            .ok_or(ResultErrors::UnknownWriter(id))?;
        writer.write_record(content)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ResultErrors> {
        for writer in self.writers.values_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

pub trait SimResult {
    /// Opens the output record for this model
    fn new_result(&mut self, results: &mut ResultManager) -> Result<(), ResultErrors>;
    /// Appends the current state at time `t`
    fn write_result(&self, t: f64, results: &mut ResultManager) -> Result<(), ResultErrors>;
}
