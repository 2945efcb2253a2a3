use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::GenerationPlan;
use crate::models::{Account, AccountRecord, AccountReference, Bank, BankRecord, Dataset, TransactionRecord, ACCOUNTS, BANKS, TRANSACTIONS};
use crate::synthesizer::{account_rng, TransactionSynthesizer};
use crate::types::DataSource;

/// Turns identity-source output and synthesized sequences into tagged datasets.
///
/// A single batch timestamp is stamped on all three datasets and on every record
/// inside them.
pub struct DatasetAssembler {
    synthesizer: TransactionSynthesizer,
    seed: u64
}

impl DatasetAssembler {
    /// Creates an assembler for `plan`, drawing a fresh run seed when the plan has none.
    pub fn new(plan: GenerationPlan) -> Self {
        let seed = plan.seed.unwrap_or_else(rand::random);

        Self {
            synthesizer: TransactionSynthesizer::new(plan),
            seed
        }
    }

    /// The seed that reproduces this assembler's output.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn banks(&self, banks: Vec<Bank>, extracted_at: DateTime<Utc>) -> Dataset<BankRecord> {
        let records = banks.into_iter()
            .map(|bank| BankRecord::from_source(bank, extracted_at))
            .collect();

        Dataset::new(BANKS, DataSource::RealApi, extracted_at, records)
    }

    pub fn accounts(&self, accounts: Vec<Account>, extracted_at: DateTime<Utc>) -> Dataset<AccountRecord> {
        let records = accounts.into_iter()
            .map(|account| AccountRecord::from_source(account, extracted_at))
            .collect();

        Dataset::new(ACCOUNTS, DataSource::RealApi, extracted_at, records)
    }

    /// Synthesizes every account's sequence and flattens them in account order.
    ///
    /// Each account draws from its own stream derived from the run seed and the
    /// account's position, so no RNG state crosses account boundaries.
    pub fn transactions(&self, accounts: &[AccountReference], generated_at: DateTime<Utc>) -> Dataset<TransactionRecord> {
        let plan = self.synthesizer.plan();
        let per_account = plan.transactions_per_account;

        debug!(
            "Generating [{per_account}] transactions per account over [{}] days with opening balances in [{}, {})",
            plan.lookback_days, plan.opening_balance.min(), plan.opening_balance.max()
        );

        let mut records = Vec::with_capacity(accounts.len().saturating_mul(per_account));

        for (position, account) in accounts.iter().enumerate() {
            let mut rng = account_rng(self.seed, position);
            let history = self.synthesizer.synthesize(account, generated_at, &mut rng);

            debug!("Account [{}] closes at [{}] from an opening balance of [{}]", history.account.account_id, history.closing_balance(), history.opening_balance);

            records.extend(history.transactions);
        }

        info!("Generated [{}] synthetic transactions for [{}] accounts with seed [{}]", records.len(), accounts.len(), self.seed);

        Dataset::new(TRANSACTIONS, DataSource::Synthetic, generated_at, records)
    }
}
