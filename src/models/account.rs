use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TabularRecord;
use crate::types::{AccountId, BankId, DataSource};

/// Minimal identity pair that a synthetic transaction is generated against.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AccountReference {
    pub account_id: AccountId,
    pub bank_id: BankId
}

impl AccountReference {
    pub fn new(account_id: impl Into<AccountId>, bank_id: impl Into<BankId>) -> Self {
        Self {
            account_id: account_id.into(),
            bank_id: bank_id.into()
        }
    }
}

/// An account as reported by an identity source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub bank_id: BankId,
    pub account_label: String,
    pub account_type: String
}

impl Account {
    pub fn reference(&self) -> AccountReference {
        AccountReference::new(self.account_id.clone(), self.bank_id.clone())
    }
}

/// Row of the accounts dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_id: AccountId,
    pub bank_id: BankId,
    pub account_label: String,
    pub account_type: String,
    pub data_source: DataSource,
    pub extracted_at: DateTime<Utc>
}

impl TabularRecord for AccountRecord {
    const COLUMNS: &'static [&'static str] = &["account_id", "bank_id", "account_label", "account_type", "data_source", "extracted_at"];
}

impl AccountRecord {
    pub fn from_source(account: Account, extracted_at: DateTime<Utc>) -> Self {
        Self {
            account_id: account.account_id,
            bank_id: account.bank_id,
            account_label: account.account_label,
            account_type: account.account_type,
            data_source: DataSource::RealApi,
            extracted_at
        }
    }
}
