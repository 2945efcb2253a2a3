use std::collections::HashSet;

use tracing::{info, warn};

use crate::lineage::report::{LineageReport, LinkageReport, ProvenanceReport};
use crate::models::{AccountRecord, BankRecord, Dataset, TransactionRecord};
use crate::types::{AccountId, BankId, DataSource};

/// Read-only audit of synthetic transactions against the identity-source entities.
///
/// Orphaned references are reported and logged as warnings; validation never fails.
pub struct LineageValidator {
    account_ids: HashSet<AccountId>,
    bank_ids: HashSet<BankId>,
    provenance: ProvenanceReport
}

impl LineageValidator {
    pub fn new(banks: &Dataset<BankRecord>, accounts: &Dataset<AccountRecord>) -> Self {
        let provenance = ProvenanceReport {
            banks_total: banks.len(),
            banks_real_api: banks.iter().filter(|bank| bank.data_source == DataSource::RealApi).count(),
            accounts_total: accounts.len(),
            accounts_real_api: accounts.iter().filter(|account| account.data_source == DataSource::RealApi).count(),
            ..ProvenanceReport::default()
        };

        Self {
            account_ids: accounts.iter().map(|account| account.account_id.clone()).collect(),
            bank_ids: banks.iter().map(|bank| bank.bank_id.clone()).collect(),
            provenance
        }
    }

    pub fn validate(&self, transactions: &Dataset<TransactionRecord>) -> LineageReport {
        let mut accounts = LinkageReport { total: transactions.len(), ..LinkageReport::default() };
        let mut banks = LinkageReport { total: transactions.len(), ..LinkageReport::default() };
        let mut accounts_with_transactions = HashSet::new();

        for transaction in transactions.iter() {
            accounts_with_transactions.insert(transaction.account_id.as_str());

            if self.account_ids.contains(&transaction.account_id) {
                accounts.linked += 1;
            } else {
                accounts.orphaned_ids.push(transaction.transaction_id.clone());
            }

            if self.bank_ids.contains(&transaction.bank_id) {
                banks.linked += 1;
            } else {
                banks.orphaned_ids.push(transaction.transaction_id.clone());
            }
        }

        let provenance = ProvenanceReport {
            transactions_total: transactions.len(),
            transactions_synthetic: transactions.iter().filter(|transaction| transaction.data_source == DataSource::Synthetic).count(),
            accounts_with_transactions: accounts_with_transactions.len(),
            ..self.provenance.clone()
        };

        let report = LineageReport { accounts, banks, provenance };
        log_report(&report);
        report
    }
}

fn log_report(report: &LineageReport) {
    let provenance = &report.provenance;

    info!("Banks: [{}/{}] from REAL_API", provenance.banks_real_api, provenance.banks_total);
    info!("Accounts: [{}/{}] from REAL_API", provenance.accounts_real_api, provenance.accounts_total);
    info!("Transactions: [{}/{}] SYNTHETIC", provenance.transactions_synthetic, provenance.transactions_total);

    if report.accounts.is_closed() {
        info!("All synthetic transactions link to known accounts across [{}] unique accounts", provenance.accounts_with_transactions);
    } else {
        warn!("[{}] transactions reference unknown accounts (linked ratio [{:.4}])", report.accounts.orphaned_ids.len(), report.accounts.ratio());
    }

    if report.banks.is_closed() {
        info!("All synthetic transactions link to known banks");
    } else {
        warn!("[{}] transactions reference unknown banks (linked ratio [{:.4}])", report.banks.orphaned_ids.len(), report.banks.ratio());
    }

    if report.is_clean() {
        info!("Lineage check passed");
    } else {
        warn!("Lineage check found unlinked or mistagged records");
    }
}
