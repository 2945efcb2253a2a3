use std::fs::create_dir_all;
use std::path::PathBuf;

use tracing::info;

use crate::models::{Dataset, TabularRecord};
use crate::sink::{partition_key, Sink, SinkError};

/// Writes each dataset as a CSV file under a local root directory.
pub struct CsvFileSink {
    root: PathBuf
}

impl CsvFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Sink for CsvFileSink {
    fn write<T: TabularRecord>(&self, dataset: &Dataset<T>) -> Result<String, SinkError> {
        let key = partition_key(dataset.name(), dataset.created_at());
        let path = self.root.join(&key);

        if let Some(parent) = path.parent() {
            create_dir_all(parent).map_err(|error| SinkError::io(dataset.name(), error))?;
        }

        let mut writer = csv::Writer::from_path(&path).map_err(|error| SinkError::csv(dataset.name(), error))?;

        //NOTE: The csv writer only emits a header alongside the first row
        if dataset.is_empty() {
            writer.write_record(T::COLUMNS).map_err(|error| SinkError::csv(dataset.name(), error))?;
        }

        for record in dataset.iter() {
            writer.serialize(record).map_err(|error| SinkError::csv(dataset.name(), error))?;
        }

        writer.flush().map_err(|error| SinkError::io(dataset.name(), error))?;

        info!("Saved [{}] {} records ({}) to [{}]", dataset.len(), dataset.name(), dataset.data_source(), path.display());

        Ok(key)
    }
}
