use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{TabularRecord, TransactionType};
use crate::types::{AccountId, BankId, Currency, DataSource, TransactionId};

/// A single synthetic transaction, as written to the transactions dataset.
///
/// Every field is a primitive or an optional primitive so the record maps onto one
/// flat CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// `synth_<account_id>_<sequence>` with a 4-digit zero-padded sequence.
    pub transaction_id: TransactionId,
    pub bank_id: BankId,
    pub account_id: AccountId,
    /// Negative for debits, positive for credits.
    pub amount: Decimal,
    pub currency: Currency,
    pub transaction_type: TransactionType,
    pub description: String,
    /// Only set for point-of-sale purchases.
    pub merchant: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub transaction_hour: u32,
    pub day_of_week: String,
    pub is_weekend: bool,
    /// Running balance after `amount`, replayed in emission order.
    pub balance_after: Decimal,
    /// Only set for online transfers.
    pub counterparty_name: Option<String>,
    pub data_source: DataSource,
    pub generated_at: DateTime<Utc>
}

impl TabularRecord for TransactionRecord {
    const COLUMNS: &'static [&'static str] = &[
        "transaction_id",
        "bank_id",
        "account_id",
        "amount",
        "currency",
        "transaction_type",
        "description",
        "merchant",
        "transaction_date",
        "transaction_hour",
        "day_of_week",
        "is_weekend",
        "balance_after",
        "counterparty_name",
        "data_source",
        "generated_at"
    ];
}
