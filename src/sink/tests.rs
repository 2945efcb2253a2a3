use super::{partition_key, CsvFileSink, Sink};

use std::fs;

use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::tempdir;

use crate::assembler::DatasetAssembler;
use crate::config::GeneratorConfig;
use crate::models::{AccountReference, Bank, TabularRecord, TransactionRecord};

fn batch_timestamp() -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2026, 3, 7, 5, 4, 9).single().ok_or_else(|| anyhow!("Invalid timestamp"))
}

#[test]
fn test_partition_key_is_date_partitioned() -> Result<()> {
    assert_eq!(partition_key("transactions", batch_timestamp()?), "raw/transactions/2026/03/07/transactions_20260307_050409.csv");

    Ok(())
}

#[test]
fn test_transactions_are_written_and_read_back_in_order() -> Result<()> {
    let directory = tempdir()?;
    let sink = CsvFileSink::new(directory.path());
    let plan = GeneratorConfig::default().with_transactions_per_account(6).with_seed(8).validate()?;
    let dataset = DatasetAssembler::new(plan).transactions(&[AccountReference::new("acc_1", "bank_1")], batch_timestamp()?);

    let key = sink.write(&dataset)?;
    let mut reader = csv::Reader::from_path(directory.path().join(&key))?;
    let records = reader.deserialize().collect::<Result<Vec<TransactionRecord>, _>>()?;

    assert_eq!(records, dataset.iter().cloned().collect::<Vec<_>>());

    Ok(())
}

#[test]
fn test_reference_dataset_is_written_with_header() -> Result<()> {
    let directory = tempdir()?;
    let sink = CsvFileSink::new(directory.path());
    let at = batch_timestamp()?;
    let plan = GeneratorConfig::default().validate()?;
    let banks = DatasetAssembler::new(plan).banks(vec![Bank { bank_id: "bank_1".to_string(), bank_name: "First, Bank".to_string() }], at);

    let key = sink.write(&banks)?;
    let content = fs::read_to_string(directory.path().join(key))?;
    let mut lines = content.lines();

    assert_eq!(lines.next(), Some("bank_id,bank_name,data_source,extracted_at"));
    assert_eq!(lines.next(), Some("bank_1,\"First, Bank\",REAL_API,2026-03-07T05:04:09Z"));

    Ok(())
}

#[test]
fn test_empty_dataset_is_written_as_header_only() -> Result<()> {
    let directory = tempdir()?;
    let sink = CsvFileSink::new(directory.path());
    let plan = GeneratorConfig::default().with_transactions_per_account(0).validate()?;
    let dataset = DatasetAssembler::new(plan).transactions(&[AccountReference::new("acc_1", "bank_1")], batch_timestamp()?);

    let key = sink.write(&dataset)?;
    let mut reader = csv::Reader::from_path(directory.path().join(key))?;

    assert_eq!(reader.headers()?.iter().collect::<Vec<_>>(), TransactionRecord::COLUMNS);
    assert_eq!(reader.records().count(), 0);

    Ok(())
}
