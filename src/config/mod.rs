mod errors;
mod generator_config;
mod obp_config;

pub use errors::ConfigError;
pub use generator_config::{GenerationPlan, GeneratorConfig, DEFAULT_LOOKBACK_DAYS, DEFAULT_TRANSACTIONS_PER_ACCOUNT};
pub use obp_config::{DirectLoginSettings, ObpConfig};
