use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use tempfile::tempdir;

fn run_binary(output_dir: &Path, args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_hybrid-bank-pipeline");

    Ok(Command::new(binary_path)
        .arg("--output-dir")
        .arg(output_dir)
        .args(args)
        .output()?)
}

fn field<'a>(summary: &'a Value, path: &[&str]) -> Result<&'a Value> {
    path.iter().try_fold(summary, |value, key| value.get(key).ok_or_else(|| anyhow!("missing [{key}] in run summary")))
}

#[test]
fn test_cli_writes_linked_datasets_from_fixture() -> Result<()> {
    let directory = tempdir()?;
    let fixture_path = Path::new("samples").join("identity.json");

    let output = run_binary(directory.path(), &[
        "--fixture", fixture_path.to_str().ok_or_else(|| anyhow!("non-utf8 path"))?,
        "--seed", "42",
        "--transactions-per-account", "5"
    ])?;

    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(field(&summary, &["seed"])?.as_u64(), Some(42));
    assert_eq!(field(&summary, &["records", "banks"])?.as_u64(), Some(3));
    assert_eq!(field(&summary, &["records", "accounts"])?.as_u64(), Some(4));
    assert_eq!(field(&summary, &["records", "transactions"])?.as_u64(), Some(20));
    assert_eq!(field(&summary, &["lineage", "accounts", "linked"])?.as_u64(), Some(20));
    assert_eq!(field(&summary, &["lineage", "accounts", "orphaned_ids"])?.as_array().map(Vec::len), Some(0));
    assert_eq!(field(&summary, &["lineage", "provenance", "accounts_with_transactions"])?.as_u64(), Some(4));

    let key = field(&summary, &["files", "transactions"])?.as_str().ok_or_else(|| anyhow!("transactions key is not a string"))?;
    assert!(key.starts_with("raw/transactions/"));

    let mut reader = csv::Reader::from_path(directory.path().join(key))?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|header| header == name).ok_or_else(|| anyhow!("missing column [{name}]"));
    let (account_column, amount_column, balance_column, source_column) = (column("account_id")?, column("amount")?, column("balance_after")?, column("data_source")?);

    let mut rows_per_account: HashMap<String, Vec<(Decimal, Decimal)>> = HashMap::new();

    for row in reader.records() {
        let row = row?;

        assert_eq!(&row[source_column], "SYNTHETIC");

        rows_per_account.entry(row[account_column].to_string()).or_default().push((
            Decimal::from_str(&row[amount_column])?,
            Decimal::from_str(&row[balance_column])?
        ));
    }

    assert_eq!(rows_per_account.len(), 4);

    for rows in rows_per_account.values() {
        assert_eq!(rows.len(), 5);

        for pair in rows.windows(2) {
            assert_eq!(pair[1].1, pair[0].1 + pair[1].0);
        }
    }

    Ok(())
}

#[test]
fn test_cli_output_is_reproducible_under_seed() -> Result<()> {
    let first_directory = tempdir()?;
    let second_directory = tempdir()?;
    let args = ["--fixture", "samples/identity.json", "--seed", "7", "--transactions-per-account", "12"];

    let first = run_binary(first_directory.path(), &args)?;
    let second = run_binary(second_directory.path(), &args)?;

    assert!(first.status.success());
    assert!(second.status.success());

    let first_summary: Value = serde_json::from_slice(&first.stdout)?;
    let second_summary: Value = serde_json::from_slice(&second.stdout)?;

    for path in [["summary", "by_transaction_type"], ["summary", "by_currency"], ["summary", "amounts"]] {
        assert_eq!(field(&first_summary, &path)?, field(&second_summary, &path)?);
    }

    //NOTE: Dates are offsets from the wall-clock batch timestamp, so only the seeded columns are compared
    let seeded_columns = |directory: &Path, summary: &Value| -> Result<Vec<Vec<String>>> {
        let key = field(summary, &["files", "transactions"])?.as_str().ok_or_else(|| anyhow!("transactions key is not a string"))?;
        let mut reader = csv::Reader::from_path(directory.join(key))?;
        let headers = reader.headers()?.clone();
        let columns = ["transaction_id", "amount", "currency", "transaction_type", "description", "merchant", "balance_after", "counterparty_name"]
            .iter()
            .map(|name| headers.iter().position(|header| header == *name).ok_or_else(|| anyhow!("missing column [{name}]")))
            .collect::<Result<Vec<_>>>()?;

        reader.records()
            .map(|row| {
                let row = row?;
                Ok(columns.iter().map(|&column| row[column].to_string()).collect())
            })
            .collect()
    };

    assert_eq!(
        seeded_columns(first_directory.path(), &first_summary)?,
        seeded_columns(second_directory.path(), &second_summary)?
    );

    Ok(())
}

#[test]
fn test_cli_rejects_negative_transaction_count() -> Result<()> {
    let directory = tempdir()?;

    let output = run_binary(directory.path(), &["--fixture", "samples/identity.json", "--transactions-per-account", "-1"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(fs::read_dir(directory.path())?.next().is_none());

    Ok(())
}

#[test]
fn test_cli_fails_when_no_accounts_are_found() -> Result<()> {
    let directory = tempdir()?;

    let output = run_binary(directory.path(), &["--fixture", "samples/empty_identity.json"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(fs::read_dir(directory.path())?.next().is_none());

    Ok(())
}
