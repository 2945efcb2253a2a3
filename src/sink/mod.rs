mod csv_sink;
mod errors;
#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use crate::models::{Dataset, TabularRecord};

pub use csv_sink::CsvFileSink;
pub use errors::SinkError;

/// Destination for finished datasets.
pub trait Sink: Send + Sync + 'static {
    /// Persists `dataset` and returns the key it was stored under.
    fn write<T: TabularRecord>(&self, dataset: &Dataset<T>) -> Result<String, SinkError>;
}

/// Date-partitioned key: `raw/<dataset>/<YYYY>/<MM>/<DD>/<dataset>_<YYYYMMDD_HHMMSS>.csv`.
pub fn partition_key(dataset_name: &str, at: DateTime<Utc>) -> String {
    format!(
        "raw/{dataset_name}/{}/{dataset_name}_{}.csv",
        at.format("%Y/%m/%d"),
        at.format("%Y%m%d_%H%M%S")
    )
}
