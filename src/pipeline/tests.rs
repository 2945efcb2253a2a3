use super::HybridPipeline;

use std::fs;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::tempdir;

use crate::config::GeneratorConfig;
use crate::models::{Account, Bank, Dataset, TabularRecord};
use crate::sink::{CsvFileSink, Sink, SinkError};
use crate::source::{FixtureSource, SourceError};

fn batch_timestamp() -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2026, 10, 18, 6, 30, 0).single().ok_or_else(|| anyhow!("Invalid timestamp"))
}

fn create_source() -> FixtureSource {
    let banks = vec![
        Bank { bank_id: "bank_1".to_string(), bank_name: "First Bank".to_string() },
        Bank { bank_id: "bank_2".to_string(), bank_name: "Second Bank".to_string() },
    ];
    let accounts = ["acc_1", "acc_2", "acc_3"].iter().zip(["bank_1", "bank_1", "bank_2"])
        .map(|(account_id, bank_id)| Account {
            account_id: account_id.to_string(),
            bank_id: bank_id.to_string(),
            account_label: "Main".to_string(),
            account_type: "CURRENT".to_string()
        })
        .collect();

    FixtureSource::new(banks, accounts)
}

struct FailingSink;

impl Sink for FailingSink {
    fn write<T: TabularRecord>(&self, dataset: &Dataset<T>) -> Result<String, SinkError> {
        Err(SinkError::io(dataset.name(), std::io::Error::other("disk full")))
    }
}

#[tokio::test]
async fn test_pipeline_writes_three_linked_datasets() -> Result<()> {
    let directory = tempdir()?;
    let plan = GeneratorConfig::default().with_transactions_per_account(10).with_seed(5).validate()?;
    let pipeline = HybridPipeline::new(Arc::new(create_source()), Arc::new(CsvFileSink::new(directory.path())), plan);

    let summary = pipeline.run_at(batch_timestamp()?).await?;

    assert_eq!(summary.records.banks, 2);
    assert_eq!(summary.records.accounts, 3);
    assert_eq!(summary.records.transactions, 30);
    assert_eq!(summary.seed, 5);
    assert!(summary.lineage.is_clean());
    assert_eq!(summary.lineage.provenance.accounts_with_transactions, 3);
    assert_eq!(summary.files.transactions, "raw/transactions/2026/10/18/transactions_20261018_063000.csv");

    for key in [&summary.files.banks, &summary.files.accounts, &summary.files.transactions] {
        assert!(directory.path().join(key).is_file());
    }

    Ok(())
}

#[tokio::test]
async fn test_pipeline_output_is_reproducible_under_seed() -> Result<()> {
    let first_directory = tempdir()?;
    let second_directory = tempdir()?;
    let at = batch_timestamp()?;
    let plan = GeneratorConfig::default().with_transactions_per_account(25).with_seed(1234).validate()?;

    let first = HybridPipeline::new(Arc::new(create_source()), Arc::new(CsvFileSink::new(first_directory.path())), plan.clone())
        .run_at(at).await?;
    let second = HybridPipeline::new(Arc::new(create_source()), Arc::new(CsvFileSink::new(second_directory.path())), plan)
        .run_at(at).await?;

    assert_eq!(first, second);
    assert_eq!(
        fs::read(first_directory.path().join(&first.files.transactions))?,
        fs::read(second_directory.path().join(&second.files.transactions))?
    );

    Ok(())
}

#[tokio::test]
async fn test_pipeline_fails_when_source_has_no_accounts() -> Result<()> {
    let directory = tempdir()?;
    let plan = GeneratorConfig::default().validate()?;
    let source = FixtureSource::new(vec![Bank { bank_id: "bank_1".to_string(), bank_name: "Empty".to_string() }], vec![]);
    let pipeline = HybridPipeline::new(Arc::new(source), Arc::new(CsvFileSink::new(directory.path())), plan);

    let error = pipeline.run_at(batch_timestamp()?).await.err().ok_or_else(|| anyhow!("Expected pipeline failure"))?;

    assert!(matches!(error.downcast_ref::<SourceError>(), Some(SourceError::NoAccounts { .. })));
    assert!(fs::read_dir(directory.path())?.next().is_none());

    Ok(())
}

#[tokio::test]
async fn test_pipeline_propagates_sink_failures() -> Result<()> {
    let plan = GeneratorConfig::default().with_transactions_per_account(1).validate()?;
    let pipeline = HybridPipeline::new(Arc::new(create_source()), Arc::new(FailingSink), plan);

    let error = pipeline.run_at(batch_timestamp()?).await.err().ok_or_else(|| anyhow!("Expected pipeline failure"))?;

    assert!(matches!(error.downcast_ref::<SinkError>(), Some(SinkError::Io { .. })));

    Ok(())
}
