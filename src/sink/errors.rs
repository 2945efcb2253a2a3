use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Sink I/O error for dataset [{dataset}]: {source}")]
    Io {
        dataset: String,
        source: std::io::Error
    },
    #[error("CSV error for dataset [{dataset}]: {source}")]
    Csv {
        dataset: String,
        source: csv::Error
    }
}

impl SinkError {
    pub fn io(dataset: &str, source: std::io::Error) -> Self {
        Self::Io { dataset: dataset.to_string(), source }
    }

    pub fn csv(dataset: &str, source: csv::Error) -> Self {
        Self::Csv { dataset: dataset.to_string(), source }
    }
}
