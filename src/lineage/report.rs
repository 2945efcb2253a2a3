use serde::Serialize;

use crate::types::TransactionId;

/// Coverage of one kind of foreign reference (accounts or banks).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkageReport {
    pub total: usize,
    pub linked: usize,
    /// Transactions whose reference is unknown to the identity source, in dataset order.
    pub orphaned_ids: Vec<TransactionId>
}

impl LinkageReport {
    /// Share of linked transactions; an empty dataset counts as fully linked.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.linked as f64 / self.total as f64
        }
    }

    pub fn is_closed(&self) -> bool {
        self.orphaned_ids.is_empty()
    }
}

/// Provenance tag counts across the three datasets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProvenanceReport {
    pub banks_total: usize,
    pub banks_real_api: usize,
    pub accounts_total: usize,
    pub accounts_real_api: usize,
    pub transactions_total: usize,
    pub transactions_synthetic: usize,
    pub accounts_with_transactions: usize
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineageReport {
    pub accounts: LinkageReport,
    pub banks: LinkageReport,
    pub provenance: ProvenanceReport
}

impl LineageReport {
    pub fn is_clean(&self) -> bool {
        self.accounts.is_closed()
            && self.banks.is_closed()
            && self.provenance.banks_real_api == self.provenance.banks_total
            && self.provenance.accounts_real_api == self.provenance.accounts_total
            && self.provenance.transactions_synthetic == self.provenance.transactions_total
    }
}
