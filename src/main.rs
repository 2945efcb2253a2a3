mod assembler;
mod config;
mod lineage;
mod models;
mod pipeline;
mod sink;
mod source;
mod summary;
mod synthesizer;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Args, Parser};
use rust_decimal::Decimal;
use tokio::task::spawn_blocking;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{GenerationPlan, GeneratorConfig, ObpConfig, DEFAULT_LOOKBACK_DAYS, DEFAULT_TRANSACTIONS_PER_ACCOUNT};
use crate::pipeline::{HybridPipeline, RunSummary};
use crate::sink::CsvFileSink;
use crate::source::{FixtureSource, ObpClient};

/// Extracts real banks and accounts, synthesizes transactions for every account,
/// and writes all three datasets with provenance tags. A JSON run summary is
/// printed to stdout; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "hybrid-bank-pipeline", version, about)]
struct Cli {
    /// Root directory the datasets are written under
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Read banks and accounts from a JSON fixture instead of the Open Bank Project API
    #[arg(long)]
    fixture: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_TRANSACTIONS_PER_ACCOUNT, allow_negative_numbers = true)]
    transactions_per_account: i64,

    #[arg(long, default_value_t = DEFAULT_LOOKBACK_DAYS, allow_negative_numbers = true)]
    lookback_days: i64,

    #[arg(long, default_value = "1000.00")]
    min_opening_balance: Decimal,

    #[arg(long, default_value = "50000.00")]
    max_opening_balance: Decimal,

    /// Seed for reproducible output; a random seed is drawn and reported when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    log_level: String,

    #[command(flatten)]
    obp: ObpArgs
}

#[derive(Debug, Args)]
struct ObpArgs {
    #[arg(long, env = "OBP_BASE_URL")]
    obp_base_url: Option<String>,

    #[arg(long, env = "OBP_API_VERSION")]
    obp_api_version: Option<String>,

    #[arg(long, env = "OBP_USERNAME")]
    obp_username: Option<String>,

    #[arg(long, env = "OBP_PASSWORD", hide_env_values = true)]
    obp_password: Option<String>,

    #[arg(long, env = "OBP_CONSUMER_KEY", hide_env_values = true)]
    obp_consumer_key: Option<String>,

    #[arg(long, env = "OBP_DIRECTLOGIN_ENDPOINT")]
    obp_directlogin_endpoint: Option<String>,

    /// Global timeout for each Open Bank Project request, in seconds
    #[arg(long, default_value_t = 30)]
    http_timeout_secs: u64
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default()
            .with_transactions_per_account(self.transactions_per_account)
            .with_lookback_days(self.lookback_days)
            .with_opening_balance(self.min_opening_balance, self.max_opening_balance);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config
        }
    }
}

impl From<ObpArgs> for ObpConfig {
    fn from(args: ObpArgs) -> Self {
        Self {
            base_url: args.obp_base_url,
            api_version: args.obp_api_version,
            username: args.obp_username,
            password: args.obp_password,
            consumer_key: args.obp_consumer_key,
            direct_login_endpoint: args.obp_directlogin_endpoint,
            timeout: Some(Duration::from_secs(args.http_timeout_secs))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    match run(cli).await {
        Ok(summary) => write_summary_to_stdout(&summary),
        Err(error) => {
            error!("Pipeline failed: {error:#}");
            Err(error)
        }
    }
}

async fn run(cli: Cli) -> Result<RunSummary> {
    //NOTE: Parameters are validated before any network or file access so nothing is emitted for a bad request
    let plan = cli.generator_config().validate()?;
    let sink = Arc::new(CsvFileSink::new(&cli.output_dir));

    let timer = Instant::now();

    let summary = match cli.fixture {
        Some(path) => {
            let source = FixtureSource::load(&path)?;
            run_pipeline(source, sink, plan).await?
        }
        None => {
            let config = ObpConfig::from(cli.obp);
            let client = spawn_blocking(move || ObpClient::connect(&config)).await??;
            run_pipeline(client, sink, plan).await?
        }
    };

    info!("Pipeline run with seed [{}] finished in: {:?}", summary.seed, timer.elapsed());

    Ok(summary)
}

async fn run_pipeline<S: source::IdentitySource>(source: S, sink: Arc<CsvFileSink>, plan: GenerationPlan) -> Result<RunSummary> {
    HybridPipeline::new(Arc::new(source), sink, plan).run().await
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON run summary, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(summary: &RunSummary) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, summary)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
