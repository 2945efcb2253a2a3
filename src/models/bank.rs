use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TabularRecord;
use crate::types::{BankId, DataSource};

/// A bank as reported by an identity source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bank {
    pub bank_id: BankId,
    pub bank_name: String
}

/// Row of the banks dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub bank_id: BankId,
    pub bank_name: String,
    pub data_source: DataSource,
    pub extracted_at: DateTime<Utc>
}

impl TabularRecord for BankRecord {
    const COLUMNS: &'static [&'static str] = &["bank_id", "bank_name", "data_source", "extracted_at"];
}

impl BankRecord {
    pub fn from_source(bank: Bank, extracted_at: DateTime<Utc>) -> Self {
        Self {
            bank_id: bank.bank_id,
            bank_name: bank.bank_name,
            data_source: DataSource::RealApi,
            extracted_at
        }
    }
}
