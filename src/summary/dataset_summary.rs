use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::models::{Dataset, TransactionRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountStatistics {
    pub min: Decimal,
    pub max: Decimal,
    pub mean: Decimal
}

/// Descriptive statistics over a transactions dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub by_transaction_type: BTreeMap<String, usize>,
    pub by_currency: BTreeMap<String, usize>,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    pub amounts: Option<AmountStatistics>
}

impl DatasetSummary {
    pub fn from_transactions(transactions: &Dataset<TransactionRecord>) -> Self {
        let mut summary = Self { total: transactions.len(), ..Self::default() };
        let mut sum = Decimal::ZERO;

        for transaction in transactions.iter() {
            *summary.by_transaction_type.entry(transaction.transaction_type.label().to_string()).or_default() += 1;
            *summary.by_currency.entry(transaction.currency.code().to_string()).or_default() += 1;

            let date = transaction.transaction_date;
            summary.earliest = Some(summary.earliest.map_or(date, |earliest| earliest.min(date)));
            summary.latest = Some(summary.latest.map_or(date, |latest| latest.max(date)));

            let amount = transaction.amount;
            let stats = summary.amounts.get_or_insert(AmountStatistics { min: amount, max: amount, mean: Decimal::ZERO });
            stats.min = stats.min.min(amount);
            stats.max = stats.max.max(amount);

            sum += amount;
        }

        if let Some(stats) = summary.amounts.as_mut() {
            stats.mean = (sum / Decimal::from(summary.total)).round_dp(2);
        }

        summary
    }

    pub fn log(&self) {
        info!("Transactions: [{}]", self.total);

        if let (Some(earliest), Some(latest)) = (self.earliest, self.latest) {
            info!("Date range: [{earliest}] to [{latest}]");
        }

        for (transaction_type, count) in &self.by_transaction_type {
            info!("Transaction type [{transaction_type}]: [{count}]");
        }

        for (currency, count) in &self.by_currency {
            info!("Currency [{currency}]: [{count}]");
        }

        if let Some(stats) = &self.amounts {
            info!("Amounts: min [{}] max [{}] mean [{}]", stats.min, stats.max, stats.mean);
        }
    }
}
