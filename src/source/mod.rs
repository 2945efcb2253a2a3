mod errors;
mod fixture_source;
mod obp_client;

use tracing::{info, warn};

use crate::models::{Account, AccountReference, Bank};
use crate::types::BankId;

pub use errors::SourceError;
pub use fixture_source::FixtureSource;
pub use obp_client::ObpClient;

/// Number of banks probed for accounts before widening the search.
pub const INITIAL_PROBE: usize = 3;
/// Widest bank probe before giving up.
pub const FULL_PROBE: usize = 10;

/// Supplier of the real banks and accounts that synthetic data is generated against.
pub trait IdentitySource: Send + Sync + 'static {
    fn fetch_banks(&self) -> Result<Vec<Bank>, SourceError>;
    fn fetch_accounts(&self, bank_ids: &[BankId]) -> Result<Vec<Account>, SourceError>;
}

/// Banks and accounts discovered from an identity source.
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    pub banks: Vec<Bank>,
    pub accounts: Vec<Account>
}

impl Discovery {
    pub fn references(&self) -> Vec<AccountReference> {
        self.accounts.iter().map(Account::reference).collect()
    }
}

/// Fetches banks, then probes the first few banks for accounts, widening once if none turn up.
///
/// # Errors
/// Propagates any source failure, and returns `SourceError::NoAccounts` when
/// neither probe finds an account.
pub fn discover<S: IdentitySource + ?Sized>(source: &S) -> Result<Discovery, SourceError> {
    let banks = source.fetch_banks()?;
    info!("Fetched [{}] banks", banks.len());

    let mut accounts = source.fetch_accounts(&probe(&banks, INITIAL_PROBE))?;

    if accounts.is_empty() && banks.len() > INITIAL_PROBE {
        warn!("No accounts found in the first [{INITIAL_PROBE}] banks, trying the first [{FULL_PROBE}]");
        accounts = source.fetch_accounts(&probe(&banks, FULL_PROBE))?;
    }

    if accounts.is_empty() {
        return Err(SourceError::NoAccounts { banks_tried: banks.len().min(FULL_PROBE) });
    }

    info!("Fetched [{}] accounts", accounts.len());

    Ok(Discovery { banks, accounts })
}

fn probe(banks: &[Bank], limit: usize) -> Vec<BankId> {
    banks.iter().take(limit).map(|bank| bank.bank_id.clone()).collect()
}
