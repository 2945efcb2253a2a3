use chrono::{DateTime, Utc};

use crate::types::DataSource;

pub const BANKS: &str = "banks";
pub const ACCOUNTS: &str = "accounts";
pub const TRANSACTIONS: &str = "transactions";

/// An ordered, immutable collection of records of one kind.
///
/// The whole dataset carries one provenance tag and the timestamp of the run that
/// produced it. Records keep the order they were inserted in.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    name: String,
    data_source: DataSource,
    created_at: DateTime<Utc>,
    records: Vec<T>
}

impl<T> Dataset<T> {
    pub fn new(name: impl Into<String>, data_source: DataSource, created_at: DateTime<Utc>, records: Vec<T>) -> Self {
        Self {
            name: name.into(),
            data_source,
            created_at,
            records
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_source(&self) -> DataSource {
        self.data_source
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}
