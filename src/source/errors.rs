use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Authentication failed with status [{status}]")]
    AuthenticationFailed {
        status: u16
    },
    #[error("Request to [{url}] returned unexpected status [{status}]")]
    UnexpectedStatus {
        url: String,
        status: u16
    },
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),
    #[error("Fixture error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Payload error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No accounts found in any of the [{banks_tried}] banks tried")]
    NoAccounts {
        banks_tried: usize
    }
}
