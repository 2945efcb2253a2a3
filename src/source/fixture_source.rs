use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::models::{Account, Bank};
use crate::source::{IdentitySource, SourceError};
use crate::types::BankId;

#[derive(Debug, Deserialize)]
struct Fixture {
    banks: Vec<Bank>,
    accounts: Vec<Account>
}

/// Offline identity source backed by a JSON document of banks and accounts.
pub struct FixtureSource {
    banks: Vec<Bank>,
    accounts: Vec<Account>
}

impl FixtureSource {
    pub fn new(banks: Vec<Bank>, accounts: Vec<Account>) -> Self {
        Self { banks, accounts }
    }

    /// Reads `{ "banks": [...], "accounts": [...] }` from `path`.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let fixture: Fixture = serde_json::from_reader(BufReader::new(file))?;

        debug!("Loaded fixture [{}] with [{}] banks and [{}] accounts", path.display(), fixture.banks.len(), fixture.accounts.len());

        Ok(Self::new(fixture.banks, fixture.accounts))
    }
}

impl IdentitySource for FixtureSource {
    fn fetch_banks(&self) -> Result<Vec<Bank>, SourceError> {
        Ok(self.banks.clone())
    }

    fn fetch_accounts(&self, bank_ids: &[BankId]) -> Result<Vec<Account>, SourceError> {
        Ok(bank_ids.iter()
            .flat_map(|bank_id| self.accounts.iter().filter(move |account| &account.bank_id == bank_id))
            .cloned()
            .collect())
    }
}
